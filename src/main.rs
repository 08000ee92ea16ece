//! Command-line driver for the campusgate auth flows.
//!
//! Useful for poking a running identity service: list and select an
//! institute, then sign up or log in under it. The selected institute is
//! persisted to a JSON file so separate invocations stay scoped to the
//! same tenant, mirroring how the library expects an embedding
//! application to persist the selection.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use campusgate::config::GatewayConfig;
use campusgate::gateway::{AuthGateway, Notice, OpOutcome};
use campusgate::net::api::HttpAuthApi;
use campusgate::net::types::filter_institutes;
use campusgate::selection::FileSelectionStore;
use campusgate::state::session::{Action, Field};
use campusgate::state::store::SessionStore;

#[derive(Parser, Debug)]
#[command(name = "campusgate", about = "Institute-scoped auth CLI")]
struct Cli {
    #[arg(long, env = "CAMPUSGATE_API_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Where the selected institute is persisted between invocations.
    #[arg(long, env = "CAMPUSGATE_SELECTION_FILE", default_value = ".campusgate-institute.json")]
    selection_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available institutes, optionally filtered by name or code.
    Institutes {
        #[arg(long)]
        search: Option<String>,
    },
    /// Persist the institute to scope subsequent credential calls to.
    Select { institute_id: String },
    /// Create an account under the selected institute.
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in under the selected institute and print the confirmed identity.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the server session and clear the selected institute.
    Logout,
    /// Show the identity the server currently associates with this client.
    Whoami,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = GatewayConfig::new(cli.base_url);
    let api = match HttpAuthApi::new(config) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            eprintln!("failed to build http client: {err}");
            std::process::exit(1);
        }
    };
    let session = Arc::new(SessionStore::new());
    let selection = Arc::new(FileSelectionStore::new(cli.selection_file));
    let gateway = AuthGateway::new(api, session, selection);

    match cli.command {
        Command::Institutes { search } => {
            let institutes = gateway.list_institutes().await;
            let institutes = match search {
                Some(term) => filter_institutes(&institutes, &term),
                None => institutes,
            };
            if institutes.is_empty() {
                println!("no institutes found");
            }
            for institute in institutes {
                println!("{}\t{}\t{}", institute.id, institute.code, institute.name);
            }
        }
        Command::Select { institute_id } => {
            let institutes = gateway.list_institutes().await;
            match institutes.into_iter().find(|i| i.id == institute_id) {
                Some(institute) => {
                    println!("selected {} ({})", institute.name, institute.code);
                    gateway.select_institute(institute);
                }
                None => {
                    eprintln!("no institute with id {institute_id}");
                    std::process::exit(1);
                }
            }
        }
        Command::Signup { username, email, password } => {
            fill_draft(gateway.session(), &username, &email, &password);
            finish(gateway.signup().await);
        }
        Command::Login { username, email, password } => {
            fill_draft(gateway.session(), &username, &email, &password);
            let outcome = gateway.login().await;
            if let Some(user) = gateway.session().snapshot().user {
                println!("{}", user.0);
            }
            finish(outcome);
        }
        Command::Logout => finish(gateway.logout().await),
        Command::Whoami => {
            gateway.refresh_identity().await;
            match gateway.session().snapshot().user {
                Some(user) => println!("{}", user.0),
                None => {
                    println!("not authenticated");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn fill_draft(session: &SessionStore, username: &str, email: &str, password: &str) {
    session.dispatch(Action::HandleInput { field: Field::Username, value: username.into() });
    session.dispatch(Action::HandleInput { field: Field::Email, value: email.into() });
    session.dispatch(Action::HandleInput { field: Field::Password, value: password.into() });
}

/// Print the operation outcome and exit non-zero on an error notice.
fn finish(outcome: OpOutcome) {
    match outcome.notice {
        Some(Notice::Success(message)) => println!("{message}"),
        Some(Notice::Error(message)) => {
            eprintln!("{message}");
            if let Some(redirect) = outcome.redirect {
                eprintln!("next: {}", redirect.to.path());
            }
            std::process::exit(1);
        }
        None => {}
    }
}

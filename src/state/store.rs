//! Shared session store: dispatch, subscribe, snapshot.
//!
//! DESIGN
//! ======
//! The store owns the single [`Session`] and applies every action through
//! the pure reducer under one lock, so each dispatch is atomic: subscribers
//! observe the action together with the fully reduced result, in dispatch
//! order. Subscribers run under the store lock and must not dispatch
//! re-entrantly.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Mutex;

use super::session::{Action, Session, reduce};

type Subscriber = Box<dyn Fn(&Action, &Session) + Send + Sync>;

/// Exclusive owner of the in-memory [`Session`].
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    session: Session,
    subscribers: Vec<Subscriber>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action atomically and notify subscribers with the result.
    pub fn dispatch(&self, action: Action) {
        let mut inner = self.inner.lock().expect("session store lock poisoned");
        let previous = std::mem::take(&mut inner.session);
        inner.session = reduce(previous, &action);
        let snapshot = inner.session.clone();
        for subscriber in &inner.subscribers {
            subscriber(&action, &snapshot);
        }
    }

    /// Observe every dispatch: the action and the session it produced.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&Action, &Session) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().expect("session store lock poisoned");
        inner.subscribers.push(Box::new(subscriber));
    }

    /// Clone of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.lock().expect("session store lock poisoned").session.clone()
    }
}

//! Session state machine.
//!
//! DESIGN
//! ======
//! A pure reducer over a closed action set (`session`) and a shared store
//! exposing dispatch/subscribe (`store`). All session mutation flows
//! through dispatched actions; nothing writes the session directly.

pub mod session;
pub mod store;

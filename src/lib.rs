//! # campusgate
//!
//! Client-side session and auth core for a multi-institute campus portal.
//! A user picks an institute (tenant) before any credential operation;
//! signup, login, logout, and identity refresh are all scoped to that
//! selection and drive a single session state machine.
//!
//! This crate contains the session reducer and store, the HTTP auth
//! gateway, the persisted institute selection, and the navigation guard
//! policy. Rendering, routing mechanics, and notification presentation
//! belong to the embedding application.

pub mod config;
pub mod error;
pub mod gateway;
pub mod net;
pub mod routing;
pub mod selection;
pub mod state;

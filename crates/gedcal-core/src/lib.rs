//! Shared types, grammar constants, and configuration for the `gedcal`
//! workspace.
//!
//! This crate carries no calendar arithmetic. It holds the closed
//! enumerations every other crate speaks in ([`Calendar`], [`Modifier`]),
//! the keyword tables of the date grammar, and the settings used by the
//! command-line front end.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;

pub use types::{Calendar, Modifier};

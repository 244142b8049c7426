//! contactbook - a minimal contact list rendered through a declarative view generator
//!
//! The binary in `main.rs` wires these modules together; everything is
//! exposed here so handlers, views and config can be exercised directly.

pub mod cli;
pub mod config;
pub mod contacts;
pub mod logging;
pub mod server;
pub mod startup;
pub mod templates;
pub mod util;
pub mod views;

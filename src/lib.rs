//! copyparty asset storage for chat-bot hosts
//!
//! Takes a reference to a user-supplied asset (remote URL, local path, or
//! inline base64), uploads it to a copyparty server with a single PUT, and
//! returns the public URL the server reports, optionally rewritten onto a
//! different public host.

pub mod analyzer;
pub mod assets;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod plugin;
pub mod urls;

pub use error::{Error, Result};

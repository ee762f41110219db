// Application layer - the ledger service every client (shell, export) goes through.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;

//! Lexa Advisor - Compliance advisory queries
//!
//! Turns one free-text compliance question plus a snapshot of the sponsor's
//! data into one answer string from the generation backend.
//!
//! ## Contract
//!
//! [`AdvisoryService::get_advice`] never fails. Backend errors, empty output
//! and encoding problems all collapse into a fixed, non-empty fallback
//! sentence. [`AdvisoryService::advise`] exposes which path was taken as an
//! [`AdviceOutcome`] for logging and tests.
//!
//! Conversation history lives in [`Conversation`], owned by the caller.
//! [`AdvisorySession`] ties the two together for a chat front-end.

pub mod advisor;
pub mod config;
pub mod conversation;
pub mod prompt;
pub mod session;

pub use advisor::*;
pub use config::*;
pub use conversation::*;
pub use prompt::*;
pub use session::*;

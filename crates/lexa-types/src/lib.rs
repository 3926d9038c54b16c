//! Lexa Types - Domain snapshot types for sponsor-licence compliance
//!
//! This crate has no dependencies on other lexa crates. It defines:
//!
//! - Sponsored worker records and their compliance status
//! - The monitoring agent roster
//! - The advisory context forwarded to the generation backend
//! - The demo snapshot used by the CLI
//!
//! All records are plain snapshots. Nothing here executes agent logic; the
//! agent roster is descriptive payload only.

pub mod agent;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod worker;

pub use agent::*;
pub use context::*;
pub use error::*;
pub use worker::*;

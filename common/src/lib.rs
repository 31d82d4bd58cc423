//! # Domval Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`domain`]**: the normalized domain name handed to every collaborator.
//! * **[`records`]**: what the lookup collaborators report back.
//! * **[`providers`]**: the traits those collaborators implement.
//! * **[`config`]**: run-time switches built by the CLI.

pub mod config;
pub mod domain;
pub mod error;
pub mod log;
pub mod providers;
pub mod records;

#[doc(hidden)]
pub use tracing as __tracing;

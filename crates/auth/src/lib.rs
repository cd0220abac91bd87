//! `stagepass-auth` — mock authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage. It is a
//! stand-in directory for demo purposes: accounts live in memory and
//! passwords are compared verbatim. Do not reuse for anything real.

pub mod account;

pub use account::{Account, AccountDirectory, AuthError, Role};

//! Core library components.
//!
//! Validation, configuration derivation and identity resolution, plus the
//! collaborator seams for command execution and SSH setup.

pub mod config;
pub mod constants;
pub mod context;
pub mod exec;
pub mod git;
pub mod identity;
pub mod inputs;
pub mod provision;
pub mod ssh;
pub mod types;
pub mod validation;

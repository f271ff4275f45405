//! `remote-sync` demo application.
//!
//! The binary loads its remote media-library settings with
//! `strict_settings`, refuses to start when any field is missing, and prints
//! a short summary of what it would synchronise.

pub mod cli;
pub mod error;
pub mod settings;

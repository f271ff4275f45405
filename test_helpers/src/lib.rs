//! Test helpers shared across crates in the strict-settings workspace.
//!
//! [`layout`] mirrors the local, system and container locations inside a
//! temporary directory. Its [`layout::CandidateLayout::enter_local_dir`]
//! makes the relative `./settings.yaml` candidate point into that mirror.

pub mod layout;

// ABOUTME: Library crate for viecnong exposing the wizard, API client and session for testing and reuse

#![allow(missing_docs)]

pub mod api;
pub mod cli;
pub mod config;
pub mod session;
pub mod wizard;

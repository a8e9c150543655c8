//! Subcommand implementations.

/// Interactive chat command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Profile listing command handler.
pub mod profiles;

/// One-shot state, send, profile and auto handlers.
pub mod remote;

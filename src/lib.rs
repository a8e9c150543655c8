//! # modechat - Terminal client for mode-switching chat backends
//!
//! `modechat` talks to a chat backend that answers in one of several
//! conversational profiles ("modes") and can pick the profile itself
//! ("automatic mode"). The client keeps the transcript, mirrors the
//! backend's mode, and relays messages.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session against the default backend
//! modechat
//!
//! # Another backend
//! modechat --server http://chat.local:8000
//!
//! # One-shot commands
//! modechat send "what is entropy?"
//! modechat profile debug
//! modechat auto on
//! modechat state
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/modechat/config.toml`:
//!
//! ```toml
//! [modechat]
//! server = "http://127.0.0.1:8000"
//! auto_control = true
//! profiles = ["conversational", "exploratory", "strict", "debug"]
//! timeout_secs = 60
//! ```
//!
//! ## Backend endpoints
//!
//! | Call | Request |
//! |---|---|
//! | current state | `GET /api/state` |
//! | chat | `POST /api/chat` with `{ message, auto? }` |
//! | set profile | `POST /api/profile/{name}` |
//! | set automatic mode | `POST /api/auto/{0\|1}` |

/// HTTP client for the chat backend.
pub mod api;

/// Interactive chat mode (REPL, slash commands, rendering).
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Built-in profile catalog.
pub mod profile;

/// Session state machine: transcript, mode state and controller.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;

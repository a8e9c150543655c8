//! Chat session state and the controller that keeps it in step with the backend.

mod controller;
mod mode;
mod status;
mod transcript;

pub use controller::{ChatController, SessionCommand, SessionEvent};
pub use mode::{DEFAULT_PROFILE, ModeState};
pub use status::{DELIVERY_FAILED, GREETING, Status};
pub use transcript::{Message, Role, Transcript};

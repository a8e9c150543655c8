use std::fmt;

/// Greeting shown when a session starts.
pub const GREETING: &str = "Hello! Send your question. (automatic mode picks the best profile)";

/// Bot message appended when a chat message could not be delivered.
pub const DELIVERY_FAILED: &str = "Failed to send message.";

/// Outcome of the most recent operation, shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    UpdatingAutomatic,
    AutomaticEnabled,
    AutomaticDisabled,
    AutomaticFailed,
    SwitchingProfile,
    CurrentProfile(String),
    ProfileFailed,
    Sending,
    Ready,
    Error,
}

impl Status {
    /// Status describing a settled mode.
    pub fn for_mode(profile: &str, automatic: bool) -> Self {
        if automatic {
            Self::AutomaticEnabled
        } else {
            Self::CurrentProfile(profile.to_string())
        }
    }

    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::AutomaticFailed | Self::ProfileFailed | Self::Error
        )
    }

    /// Whether an operation is still waiting on the backend.
    pub const fn is_pending(&self) -> bool {
        matches!(
            self,
            Self::UpdatingAutomatic | Self::SwitchingProfile | Self::Sending
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdatingAutomatic => f.write_str("Updating automatic mode..."),
            Self::AutomaticEnabled => f.write_str("Automatic mode enabled."),
            Self::AutomaticDisabled => f.write_str("Automatic mode disabled."),
            Self::AutomaticFailed => f.write_str("Failed to change automatic mode."),
            Self::SwitchingProfile => f.write_str("Switching mode..."),
            Self::CurrentProfile(profile) => write!(f, "Current mode: {profile}"),
            Self::ProfileFailed => f.write_str("Failed to switch mode."),
            Self::Sending => f.write_str("Sending..."),
            Self::Ready => f.write_str("Ready."),
            Self::Error => f.write_str("Error."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert_eq!(Status::for_mode("debug", true), Status::AutomaticEnabled);
        assert_eq!(
            Status::for_mode("debug", false),
            Status::CurrentProfile("debug".to_string())
        );
    }

    #[test]
    fn test_error_statuses() {
        assert!(Status::AutomaticFailed.is_error());
        assert!(Status::ProfileFailed.is_error());
        assert!(Status::Error.is_error());
        assert!(!Status::Ready.is_error());
        assert!(!Status::CurrentProfile("x".to_string()).is_error());
    }

    #[test]
    fn test_pending_statuses() {
        assert!(Status::Sending.is_pending());
        assert!(!Status::Ready.is_pending());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Status::CurrentProfile("strict".to_string()).to_string(),
            "Current mode: strict"
        );
        assert_eq!(Status::Error.to_string(), "Error.");
    }
}

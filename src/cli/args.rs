use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "modechat")]
#[command(about = "Terminal chat client with profile switching and automatic mode")]
#[command(version)]
pub struct Args {
    /// Chat backend base URL (e.g., http://127.0.0.1:8000)
    #[arg(short = 's', long, global = true)]
    pub server: Option<String>,

    /// Hide status lines and spinners
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (the default)
    Chat,
    /// Show the backend's current profile and automatic mode
    State,
    /// Send a single message and print the reply
    Send {
        /// Message text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Switch to a profile (turns automatic mode off)
    Profile {
        /// Profile name
        name: String,
    },
    /// Turn automatic profile selection on or off
    Auto {
        #[arg(value_enum)]
        state: Switch,
    },
    /// List selectable profiles
    Profiles,
    /// Configure modechat settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub const fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_chat() {
        let args = Args::try_parse_from(["modechat"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.server.is_none());
    }

    #[test]
    fn test_global_server_after_subcommand() {
        let args =
            Args::try_parse_from(["modechat", "state", "--server", "http://chat.local"]).unwrap();
        assert!(matches!(args.command, Some(Command::State)));
        assert_eq!(args.server.as_deref(), Some("http://chat.local"));
    }

    #[test]
    fn test_send_joins_words() {
        let args = Args::try_parse_from(["modechat", "send", "what", "is", "entropy"]).unwrap();
        let Some(Command::Send { message }) = args.command else {
            panic!("expected send");
        };
        assert_eq!(message.join(" "), "what is entropy");
    }

    #[test]
    fn test_send_requires_message() {
        assert!(Args::try_parse_from(["modechat", "send"]).is_err());
    }

    #[test]
    fn test_auto_switch() {
        let args = Args::try_parse_from(["modechat", "auto", "off"]).unwrap();
        let Some(Command::Auto { state }) = args.command else {
            panic!("expected auto");
        };
        assert!(!state.enabled());
        assert!(Args::try_parse_from(["modechat", "auto", "maybe"]).is_err());
    }
}

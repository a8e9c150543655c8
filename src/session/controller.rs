use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::mode::ModeState;
use super::status::{DELIVERY_FAILED, GREETING, Status};
use super::transcript::{Message, Transcript};
use crate::api::Collaborator;

/// Change notification sent to every subscriber of a [`ChatController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    MessageAppended(Message),
    ModeChanged(ModeState),
    StatusChanged(Status),
}

/// A user intent, as produced by whatever front end drives the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Send(String),
    SelectProfile(String),
    SetAutomatic(bool),
}

/// Owns the transcript and mode state of one chat session and keeps them in
/// step with the backend.
///
/// No operation returns an error: backend failures become a status update
/// (plus a fallback bot message for [`ChatController::send`]). Operations
/// take `&mut self`, so a single session runs them one at a time; identical
/// commands are never merged and each one issues its own request.
pub struct ChatController {
    client: Arc<dyn Collaborator>,
    transcript: Transcript,
    mode: ModeState,
    status: Option<Status>,
    auto_control: bool,
    subscribers: Vec<UnboundedSender<SessionEvent>>,
}

impl ChatController {
    pub fn new(client: Arc<dyn Collaborator>) -> Self {
        Self {
            client,
            transcript: Transcript::new(),
            mode: ModeState::default(),
            status: None,
            auto_control: true,
            subscribers: Vec::new(),
        }
    }

    /// Whether the front end exposes an automatic-mode toggle. Without one,
    /// chat requests leave the backend's automatic flag alone.
    #[must_use]
    pub const fn with_auto_control(mut self, enabled: bool) -> Self {
        self.auto_control = enabled;
        self
    }

    /// Registers a new listener for session changes.
    pub fn subscribe(&mut self) -> UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn mode(&self) -> &ModeState {
        &self.mode
    }

    pub const fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Greets the user and pulls the backend's current mode.
    pub async fn start(&mut self) {
        self.append(Message::bot(GREETING));
        self.load_initial_state().await;
    }

    /// Initializes the mode from `GET /api/state`, or from the defaults when
    /// the backend can't be reached.
    pub async fn load_initial_state(&mut self) {
        match self.client.fetch_state().await {
            Ok(state) => {
                self.mode.apply(state.profile, state.auto);
                self.publish_mode();
                let status = Status::for_mode(self.mode.profile(), self.mode.automatic());
                self.set_status(status);
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load backend state, using defaults");
                self.mode = ModeState::default();
                self.publish_mode();
            }
        }
    }

    /// Runs one user intent.
    pub async fn dispatch(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Send(text) => {
                self.send(&text).await;
            }
            SessionCommand::SelectProfile(name) => self.set_profile(&name).await,
            SessionCommand::SetAutomatic(enabled) => self.set_automatic(enabled).await,
        }
    }

    /// Sends a chat message. Returns `false` (and does nothing) when `text`
    /// is blank.
    ///
    /// The user's message is appended before the request goes out and stays
    /// in the transcript even if delivery fails.
    pub async fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.set_status(Status::Sending);
        self.append(Message::user(text));

        let auto = self.auto_control.then_some(self.mode.automatic());
        match self.client.send_chat(text, auto).await {
            Ok(response) => {
                self.append(Message::bot(response.reply.unwrap_or_default()));
                self.mode.apply(response.profile, response.auto);
                self.publish_mode();
                self.set_status(Status::Ready);
            }
            Err(err) => {
                tracing::warn!(error = %err, detail = err.detail(), "message not delivered");
                self.append(Message::bot(DELIVERY_FAILED));
                self.set_status(Status::Error);
            }
        }
        true
    }

    /// Turns automatic profile selection on or off.
    pub async fn set_automatic(&mut self, enabled: bool) {
        self.set_status(Status::UpdatingAutomatic);

        match self.client.set_auto(enabled).await {
            Ok(response) => {
                self.mode.apply(response.profile, response.auto);
                self.publish_mode();
                let status = if self.mode.automatic() {
                    Status::AutomaticEnabled
                } else {
                    Status::AutomaticDisabled
                };
                self.set_status(status);
            }
            Err(err) => {
                tracing::warn!(error = %err, enabled, "automatic mode not changed");
                self.set_status(Status::AutomaticFailed);
            }
        }
    }

    /// Switches to a profile chosen by the user.
    ///
    /// Automatic mode is switched off first when it is on; the profile
    /// request is issued after that call settles, whatever its outcome.
    pub async fn set_profile(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        if self.mode.automatic() {
            self.set_automatic(false).await;
        }

        self.set_status(Status::SwitchingProfile);

        match self.client.set_profile(name).await {
            Ok(response) => {
                self.mode.apply(response.profile, None);
                self.mode.set_automatic(false);
                self.publish_mode();
                self.set_status(Status::CurrentProfile(self.mode.profile().to_string()));
            }
            Err(err) => {
                tracing::warn!(error = %err, profile = name, "profile not changed");
                self.set_status(Status::ProfileFailed);
            }
        }
    }

    fn append(&mut self, message: Message) {
        self.transcript.append(message.clone());
        self.emit(SessionEvent::MessageAppended(message));
    }

    fn publish_mode(&mut self) {
        self.emit(SessionEvent::ModeChanged(self.mode.clone()));
    }

    fn set_status(&mut self, status: Status) {
        self.status = Some(status.clone());
        self.emit(SessionEvent::StatusChanged(status));
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Profile the session starts in before the backend says otherwise.
pub const DEFAULT_PROFILE: &str = "conversational";

/// The backend's current profile and whether it picks profiles itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeState {
    profile: String,
    automatic: bool,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            automatic: true,
        }
    }
}

impl ModeState {
    /// Builds a state, falling back to [`DEFAULT_PROFILE`] for a blank profile.
    pub fn new(profile: impl Into<String>, automatic: bool) -> Self {
        let mut state = Self {
            automatic,
            ..Self::default()
        };
        state.set_profile(profile);
        state
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub const fn automatic(&self) -> bool {
        self.automatic
    }

    /// Manual profile selection is only offered while automatic mode is off.
    pub const fn profile_controls_enabled(&self) -> bool {
        !self.automatic
    }

    /// Replaces the profile. Blank names are ignored and return `false`.
    pub(crate) fn set_profile(&mut self, profile: impl Into<String>) -> bool {
        let profile = profile.into();
        if profile.trim().is_empty() {
            return false;
        }
        self.profile = profile;
        true
    }

    pub(crate) const fn set_automatic(&mut self, automatic: bool) {
        self.automatic = automatic;
    }

    /// Applies whichever fields the backend reported; absent fields are kept.
    pub(crate) fn apply(&mut self, profile: Option<String>, automatic: Option<bool>) {
        if let Some(profile) = profile {
            self.set_profile(profile);
        }
        if let Some(automatic) = automatic {
            self.automatic = automatic;
        }
    }
}

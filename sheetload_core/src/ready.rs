/// Mirror of `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parses a `document.readyState` value. Anything unrecognised counts as
    /// `Complete`, so loading is never held back by an unknown state.
    pub fn parse(state: &str) -> Self {
        match state {
            "loading" => ReadyState::Loading,
            "interactive" => ReadyState::Interactive,
            _ => ReadyState::Complete,
        }
    }

    pub fn is_loading(self) -> bool {
        self == ReadyState::Loading
    }
}

impl From<&str> for ReadyState {
    fn from(state: &str) -> Self {
        ReadyState::parse(state)
    }
}

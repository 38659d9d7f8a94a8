//! Screen lifecycle shared by all three assistant screens.

/// One screen's request lifecycle. `Loading` disables the trigger control;
/// `Errored` is not visually distinct beyond having exited `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    Idle,
    Loading,
    Ready(T),
    Errored,
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        ScreenState::Idle
    }
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    /// The ready value, when there is one.
    pub fn ready(&self) -> Option<&T> {
        match self {
            ScreenState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

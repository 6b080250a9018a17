use crate::repos::rounds::RoundStore;

/// Application state containing shared resources
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Exclusive owner of the round collection
    pub rounds: RoundStore,
}

impl AppState {
    /// Create a new AppState with an empty round collection
    pub fn new() -> Self {
        Self::default()
    }
}

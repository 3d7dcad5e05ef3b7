use points::GeoPoint;

/// Fetch lifecycle for the current viewport query.
///
/// Exactly one state holds at a time:
/// `Idle` → (debounce settles) → `Loading` → `{Success, Failure}`, and any
/// later viewport change restarts the cycle at `Loading`. `Idle` is only
/// observed before the first viewport is known.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<GeoPoint>),
    Failure(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failure(msg) => Some(msg),
            _ => None,
        }
    }
}

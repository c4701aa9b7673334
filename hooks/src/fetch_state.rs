use crate::FetchError;

/// The lifecycle of a fetch attempt.
///
/// Each variant corresponds to one of the states a [`use_query`](crate::use_query())
/// instance moves through for its current identifier. At most one of data or error is
/// ever present, and entering [`FetchState::Loading`] clears both.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    /// No attempt has been made, or the identifier is empty.
    #[default]
    Idle,

    /// An attempt is in flight for the current identifier.
    Loading,

    /// The attempt completed and the body decoded successfully.
    Success(T),

    /// The attempt failed. Cancelled attempts never end up here.
    Failed(FetchError),
}

impl<T> FetchState<T> {
    /// Returns the fetched data, if the attempt succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            FetchState::Idle | FetchState::Loading | FetchState::Failed(_) => None,
        }
    }

    /// Returns the error, if the attempt failed.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(error) => Some(error),
            FetchState::Idle | FetchState::Loading | FetchState::Success(_) => None,
        }
    }

    /// Whether an attempt is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Whether no attempt has been made.
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    /// Transform the data, keeping the state.
    pub fn map_data<R>(&self, mapper: impl FnOnce(&T) -> R) -> FetchState<R> {
        match self {
            FetchState::Idle => FetchState::Idle,
            FetchState::Loading => FetchState::Loading,
            FetchState::Success(data) => FetchState::Success(mapper(data)),
            FetchState::Failed(error) => FetchState::Failed(error.clone()),
        }
    }
}

impl<T> std::fmt::Debug for FetchState<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Success(data) => f.debug_tuple("Success").field(data).finish(),
            Self::Failed(error) => f.debug_tuple("Failed").field(error).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_empty() {
        let state = FetchState::<u32>::default();

        assert!(state.is_idle());
        assert!(!state.is_loading());
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn data_and_error_are_exclusive() {
        let success = FetchState::Success(7_u32);
        assert_eq!(success.data(), Some(&7));
        assert_eq!(success.error(), None);
        assert!(!success.is_loading());

        let failed = FetchState::<u32>::Failed(FetchError::Timeout);
        assert_eq!(failed.data(), None);
        assert_eq!(failed.error(), Some(&FetchError::Timeout));
    }

    #[test]
    fn map_data_keeps_variant() {
        let success = FetchState::Success(2_u32).map_data(|n| n * 10);
        assert_eq!(success, FetchState::Success(20));

        let failed = FetchState::<u32>::Failed(FetchError::Timeout).map_data(|n| n * 10);
        assert_eq!(failed, FetchState::Failed(FetchError::Timeout));
    }
}

use crate::service::ServiceError;

/// Lifecycle of one asynchronously fetched report slot.
///
/// Every slot owns exactly one of these and transitions it independently:
/// `Idle → Loading → Loaded | Failed`. A failure replaces any previously
/// loaded payload — there is no stale-but-displayable state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(ServiceError),
}

impl<T> LoadState<T> {
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&ServiceError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

}

impl<T> From<Result<T, ServiceError>> for LoadState<T> {
    fn from(outcome: Result<T, ServiceError>) -> Self {
        match outcome {
            Ok(data) => Self::Loaded(data),
            Err(error) => Self::Failed(error),
        }
    }
}

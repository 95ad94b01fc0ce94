use derive_more::Display;

/// Why the snapshot could not be turned into a [`Snapshot`](crate::domain::forecast::Snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LoadError {
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    #[display(fmt = "Empty Body: the snapshot response contained no data")]
    EmptyBody,
    #[display(fmt = "Malformed JSON: {}", _0)]
    MalformedJson(String),
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::MalformedJson(err.to_string())
    }
}

/// View-level outcomes that replace a card or the whole page with a message.
///
/// None of them is fatal: the page keeps running and simply renders the
/// matching empty state.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DashboardError {
    #[display(fmt = "Could not load predictions: {}", _0)]
    LoadFailure(LoadError),
    #[display(fmt = "The snapshot contains no companies")]
    EmptyDataset,
    #[display(fmt = "Not enough evaluated predictions yet for {}", ticker)]
    InsufficientHistory { ticker: String },
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::LoadFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoadError> for DashboardError {
    fn from(err: LoadError) -> Self {
        DashboardError::LoadFailure(err)
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
pub type DashboardResult<T> = Result<T, DashboardError>;

use thiserror::Error;

/// Errors returned by the template extensions.
///
/// Every variant is local to a single call; callers decide the fallback
/// (an empty excerpt, a missing asset link, and so on).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FilterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<FilterError> for tera::Error {
    fn from(err: FilterError) -> Self {
        tera::Error::msg(err.to_string())
    }
}

pub type FilterResult<T> = Result<T, FilterError>;

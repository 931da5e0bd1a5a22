use thiserror::Error;

/// Failures the landscape reports to its caller.
///
/// All of these are contract violations on the caller's side; soft-missing
/// record fields are substituted and never end up here.
#[derive(Debug, Error)]
pub enum LandscapeError {
    #[error("landscape data must contain the points")]
    MissingPoints,
    #[error("a container must be configured before the display is prepared")]
    MissingContainer,
    #[error("no language name for code {0:?}")]
    UnknownLanguage(String),
    #[error("no point at index {0}")]
    UnknownPoint(usize),
    #[error("invalid landscape data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

pub type Result<T, E = LandscapeError> = std::result::Result<T, E>;

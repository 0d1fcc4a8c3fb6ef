use typekit::InvalidFamilySpec;

/// Missing or malformed command line input.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("missing argument: --token")]
    MissingToken,

    #[error("missing family")]
    MissingFamily,

    #[error(transparent)]
    InvalidFamily(#[from] InvalidFamilySpec),
}

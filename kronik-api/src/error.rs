#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid composite video identifier {0:?}")]
    InvalidVideoKey(String),

    #[error("Unknown theme {0:?}")]
    UnknownTheme(String),
}

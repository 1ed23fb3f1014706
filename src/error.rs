use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    /// The windowing or graphics backend could not be brought up.
    #[error("window backend failed: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;

pub mod evaluation;

#[derive(thiserror::Error, Debug, Clone)]
pub enum ScreenError {
    #[error("Fetch error: {0}")]
    Fetch(String),
    #[error("Unknown error: {0}")]
    Unknown(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] giornata_config::ConfigError),
    #[error(transparent)]
    Paint(#[from] painting::PaintError),
    #[error("failed to parse stroke script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

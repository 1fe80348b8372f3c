use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Stylesheet(#[from] stylesheet::StylesheetError),

    #[error(transparent)]
    Triangle(#[from] triangle::TriangleError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] triangle::ConfigError),

    #[error("Logger already initialized")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

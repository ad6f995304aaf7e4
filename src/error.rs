use miette::Diagnostic;
use thiserror::Error;

/// Main error type for colorrank operations
#[derive(Error, Diagnostic, Debug)]
pub enum RankError {
    #[error("IO error: {0}")]
    #[diagnostic(code(colorrank::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(colorrank::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Decode error: {message}")]
    #[diagnostic(
        code(colorrank::decode),
        help("The input must be a well-formed PNG image")
    )]
    Decode { message: String },

    #[error("Input exceeds the {limit} byte limit")]
    #[diagnostic(
        code(colorrank::io),
        help("Raise max_input_bytes in colorrank.yaml to accept larger images")
    )]
    InputTooLarge { limit: u64 },

    #[error("Render error: {message}")]
    #[diagnostic(code(colorrank::render))]
    Render { message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(colorrank::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RankError>;

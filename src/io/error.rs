use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("SDF data ends with an unterminated record starting at line {line}")]
    UnterminatedRecord { line: usize },

    #[error("property calculator '{program}' failed: {detail}")]
    ExternalTool { program: String, detail: String },

    #[error("{context} is not valid UTF-8")]
    InvalidUtf8 { context: String },
}

impl Error {
    pub fn external_tool(program: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ExternalTool {
            program: program.into(),
            detail: detail.into(),
        }
    }
}

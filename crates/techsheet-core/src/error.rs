use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported design format: {format} parsing is not implemented")]
    UnsupportedFormat { format: &'static str },

    #[error("Unsupported file type: {}", path.display())]
    InvalidInput { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SVG parse error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Invalid `{attribute}` on <{element}>: {value:?} is not a non-negative number")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },

    #[error("Invalid dimension spec JSON: {0}")]
    SpecParse(#[from] serde_json::Error),
}

use std::fmt;

#[derive(Debug)]
pub enum FormPressError {
    /// The caller asked to render a document with no renderable content
    /// (empty page set, template with zero layout units).
    MissingTarget,
    /// A layout unit could not be rasterized. The whole generation aborts;
    /// no partial artifact is ever exposed.
    CaptureFailure(String),
    InvalidConfiguration(String),
    Asset(String),
    Io(std::io::Error),
}

impl fmt::Display for FormPressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormPressError::MissingTarget => write!(f, "nothing to render"),
            FormPressError::CaptureFailure(message) => {
                write!(f, "layout unit capture failed: {}", message)
            }
            FormPressError::InvalidConfiguration(message) => {
                write!(f, "invalid configuration: {}", message)
            }
            FormPressError::Asset(message) => write!(f, "asset error: {}", message),
            FormPressError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for FormPressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormPressError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormPressError {
    fn from(value: std::io::Error) -> Self {
        FormPressError::Io(value)
    }
}

use thiserror::Error;

pub type MaterializeResult<T> = Result<T, MaterializeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterializeError {
    #[error("Missing required option '{option}' for widget '{widget}'")]
    MissingOption { widget: String, option: String },

    #[error("Invalid option '{option}' for widget '{widget}': {reason}")]
    InvalidOption {
        widget: String,
        option: String,
        reason: String,
    },

    #[error("Invalid enum value '{value}' for property '{property}'. Expected one of: {expected}")]
    InvalidEnum {
        property: String,
        value: String,
        expected: String,
    },

    #[error("Invalid tag name '{tag}': tags must be lowercase letters, digits or '-'")]
    InvalidTag { tag: String },

    #[error("Invalid attribute name '{name}'")]
    InvalidAttribute { name: String },

    #[error("Unknown asset bundle '{name}'")]
    UnknownBundle { name: String },

    #[error("Asset bundle '{name}' depends on itself through '{via}'")]
    CircularBundle { name: String, via: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl MaterializeError {
    /// Shorthand for the most common configuration failure.
    pub fn missing(widget: &str, option: &str) -> Self {
        MaterializeError::MissingOption {
            widget: widget.to_string(),
            option: option.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for MaterializeError {
    fn from(err: serde_yaml::Error) -> Self {
        MaterializeError::Deserialization(err.to_string())
    }
}

impl From<serde_json::Error> for MaterializeError {
    fn from(err: serde_json::Error) -> Self {
        MaterializeError::Deserialization(err.to_string())
    }
}

/// Returns the value of a required option or a `MissingOption` error naming it.
pub fn require<'a, T>(value: &'a Option<T>, widget: &str, option: &str) -> MaterializeResult<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| MaterializeError::missing(widget, option))
}

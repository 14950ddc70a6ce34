use std::borrow::Cow;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorInformation {
    /// A human-readable error summary, e.g. `Hero not found`
    pub error: Cow<'static, str>,
    /// A human-readable error message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Human-readable error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorInformation {
    pub fn new(error: impl Into<Cow<'static, str>>, message: impl Display) -> Self {
        Self {
            error: error.into(),
            message: message.to_string(),
            details: None,
        }
    }

    /// An error carrying only its summary.
    pub fn summary(error: impl Into<Cow<'static, str>>) -> Self {
        Self::new(error, "")
    }
}

/// The body returned when a write was rejected by validation.
///
/// The individual reasons are only logged, never returned.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<Cow<'static, str>>,
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self {
            errors: vec!["validation errors".into()],
        }
    }
}

/// Maps `tracing` fields onto the parts of a recorded [`LogEvent`](crate::LogEvent).
///
/// Use the builder pattern to customize, or use [`Default`]:
///
/// ```rust
/// use cherry::RecorderConfig;
///
/// let config = RecorderConfig::default()
///     .with_error_field("err")
///     .with_error_type_field("err_type");
/// assert_eq!(config.message_field(), "message");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecorderConfig {
    /// Field holding the log message. `tracing` stores the format string
    /// arguments here. Default: `message`
    message_field: String,

    /// Field holding the error, recorded as `dyn Error`, `%err` or `?err`.
    /// Its text becomes the throwable message. Default: `error`
    error_field: String,

    /// Field holding the error's type name, e.g.
    /// `error_type = std::any::type_name_of_val(&err)`. Default: `error_type`
    error_type_field: String,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            message_field: "message".to_string(),
            error_field: "error".to_string(),
            error_type_field: "error_type".to_string(),
        }
    }
}

impl RecorderConfig {
    pub fn with_message_field(mut self, name: impl Into<String>) -> Self {
        self.message_field = name.into();
        self
    }

    pub fn with_error_field(mut self, name: impl Into<String>) -> Self {
        self.error_field = name.into();
        self
    }

    pub fn with_error_type_field(mut self, name: impl Into<String>) -> Self {
        self.error_type_field = name.into();
        self
    }

    pub fn message_field(&self) -> &str {
        &self.message_field
    }

    pub fn error_field(&self) -> &str {
        &self.error_field
    }

    pub fn error_type_field(&self) -> &str {
        &self.error_type_field
    }
}

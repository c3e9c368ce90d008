use std::fmt;

use tracing::Level;

/// Error information attached to a [`LogEvent`].
///
/// Holds the error's type name and its rendered message. Two throwables are
/// considered equal when both the class name and the message match, where two
/// absent messages count as equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrowableInfo {
    class_name: String,
    message: Option<String>,
}

impl ThrowableInfo {
    /// Class name used when a recorded error carries no type information.
    pub const UNKNOWN_CLASS_NAME: &'static str = "<unknown>";

    pub fn new(class_name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message,
        }
    }

    /// Describes `error` by its static type name and its `Display` output.
    ///
    /// When logging, record the type with
    /// `error_type = std::any::type_name_of_val(&err)` so recorded events
    /// compare equal to the value built here.
    pub fn of<E: std::error::Error + ?Sized>(error: &E) -> Self {
        Self {
            class_name: std::any::type_name::<E>().to_string(),
            message: Some(error.to_string()),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ThrowableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}{{message='{}'}}", self.class_name, message),
            None => write!(f, "{}{{message=null}}", self.class_name),
        }
    }
}

/// A single log record as seen by the matchers.
///
/// Events are built by the [`LogRecorder`](crate::LogRecorder) from `tracing`
/// events, or by hand in tests:
///
/// ```rust
/// use cherry::{LogEvent, ThrowableInfo};
/// use tracing::Level;
///
/// let event = LogEvent::new(Level::WARN)
///     .with_message("disk almost full")
///     .with_logger("app::storage");
///
/// assert_eq!(
///     event.to_string(),
///     "LogEvent{level=WARN, formattedMessage='disk almost full', loggedBy=app::storage, throwable=null}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEvent {
    #[cfg_attr(feature = "serde", serde(with = "level_serde"))]
    level: Level,
    formatted_message: Option<String>,
    logger_name: Option<String>,
    throwable: Option<ThrowableInfo>,
}

impl LogEvent {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            formatted_message: None,
            logger_name: None,
            throwable: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.formatted_message = Some(message.into());
        self
    }

    pub fn with_logger(mut self, logger_name: impl Into<String>) -> Self {
        self.logger_name = Some(logger_name.into());
        self
    }

    pub fn with_throwable(mut self, throwable: ThrowableInfo) -> Self {
        self.throwable = Some(throwable);
        self
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The rendered message, if the event carried one.
    #[inline]
    pub fn formatted_message(&self) -> Option<&str> {
        self.formatted_message.as_deref()
    }

    /// The target the event was logged under.
    #[inline]
    pub fn logger_name(&self) -> Option<&str> {
        self.logger_name.as_deref()
    }

    #[inline]
    pub fn throwable(&self) -> Option<&ThrowableInfo> {
        self.throwable.as_ref()
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LogEvent{{level={}, formattedMessage='{}', loggedBy={}, throwable=",
            self.level,
            self.formatted_message.as_deref().unwrap_or("null"),
            self.logger_name.as_deref().unwrap_or("null"),
        )?;
        match &self.throwable {
            Some(throwable) => write!(f, "{throwable}}}"),
            None => f.write_str("null}"),
        }
    }
}

#[cfg(feature = "serde")]
mod level_serde {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use tracing::Level;

    pub fn serialize<S: Serializer>(level: &Level, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(level.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Level, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

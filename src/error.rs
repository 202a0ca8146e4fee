use thiserror::Error;

/// Structured context attached to validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field that failed validation (e.g. "width", "num_steps").
    pub field_path: Option<String>,
    /// Additional detail about the rejected value.
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Unified error type for the NanoGPT client.
///
/// Every variant displays with the `[nanogpt]` prefix so library errors are
/// distinguishable from transport or application errors at the call site.
/// All errors are terminal for the call that raised them; the client performs
/// no automatic retry or backoff.
#[derive(Debug, Error)]
pub enum Error {
    #[error("[nanogpt] configuration error: {message}")]
    Configuration { message: String },

    #[error("[nanogpt] incorrect parameters: {message}")]
    IncorrectParameters { message: String },

    #[error("[nanogpt] model not set, specify a model or configure a default")]
    ModelNotSet,

    #[error("[nanogpt] validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// Non-success HTTP status or a transport failure. `status` is `None`
    /// when the failure happened before an HTTP response was received.
    #[error("[nanogpt] connection error{}: {message}", format_status(.status))]
    Connection {
        status: Option<u16>,
        message: String,
    },

    #[error("[nanogpt] parse error: {message}")]
    Parse { message: String },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {})", code),
        None => String::new(),
    }
}

impl Error {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    /// Create a new incorrect-parameters error.
    pub fn incorrect_parameters(msg: impl Into<String>) -> Self {
        Error::IncorrectParameters {
            message: msg.into(),
        }
    }

    /// Create a new validation error with structured context.
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new connection error, preserving the HTTP status when one
    /// was received.
    pub fn connection(status: Option<u16>, msg: impl Into<String>) -> Self {
        Error::Connection {
            status,
            message: msg.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse {
            message: msg.into(),
        }
    }

    /// Extract error context if available.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status carried by a connection error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Connection { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::parse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::connection(err.status().map(|s| s.as_u16()), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_displays_the_library_prefix() {
        let errors = [
            Error::configuration("missing key"),
            Error::incorrect_parameters("bad input"),
            Error::ModelNotSet,
            Error::validation_with_context("bad width", ErrorContext::new()),
            Error::connection(Some(500), "server error"),
            Error::parse("bad body"),
        ];
        for err in errors {
            assert!(err.to_string().starts_with("[nanogpt] "), "{}", err);
        }
    }

    #[test]
    fn validation_context_names_the_field() {
        let err = Error::validation_with_context(
            "image width must be an integer greater than zero",
            ErrorContext::new().with_field_path("width"),
        );
        assert!(err.to_string().contains("field: width"));
        assert_eq!(err.context().unwrap().field_path.as_deref(), Some("width"));
    }

    #[test]
    fn connection_error_formats_status_when_present() {
        assert!(Error::connection(Some(429), "too many requests")
            .to_string()
            .contains("(status 429)"));
        assert!(!Error::connection(None, "dns failure")
            .to_string()
            .contains("status"));
    }
}

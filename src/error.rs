/// Error types for translation operations
///
/// Every failure mode of a translation attempt is one of these variants;
/// nothing is swallowed or retried internally. The underlying transport
/// error, when there is one, is reachable through [`std::error::Error::source`].
#[derive(Debug)]
pub enum TranslationFailure {
    /// A caller error detected before any I/O, such as passing the `Auto`
    /// sentinel as the target language
    InvalidArgument(String),
    /// The HTTP request itself failed (connection refused, DNS, I/O error);
    /// wraps the original transport error
    Transport(Box<dyn std::error::Error + Send + Sync>),
    /// The endpoint answered with a non-2xx status code
    HttpStatus(u16),
    /// The endpoint answered 2xx but the body was empty (or the JSON
    /// literal `null`)
    EmptyBody,
    /// The body was not valid JSON, or did not match the minimum expected
    /// array shape
    MalformedResponse(String),
}

impl std::fmt::Display for TranslationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationFailure::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            TranslationFailure::Transport(cause) => write!(f, "Transport error: {}", cause),
            TranslationFailure::HttpStatus(code) => {
                write!(f, "Translation request failed with HTTP status {}", code)
            }
            TranslationFailure::EmptyBody => {
                write!(f, "Translation response carried no body")
            }
            TranslationFailure::MalformedResponse(msg) => {
                write!(f, "Malformed translation response: {}", msg)
            }
        }
    }
}

impl std::error::Error for TranslationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslationFailure::Transport(cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TranslationFailure {
    fn from(error: reqwest::Error) -> Self {
        TranslationFailure::Transport(Box::new(error))
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslationFailure>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_http_status_includes_code() {
        let failure = TranslationFailure::HttpStatus(403);
        assert!(failure.to_string().contains("403"));
    }

    #[test]
    fn test_display_invalid_argument() {
        let failure = TranslationFailure::InvalidArgument("target must not be Auto".to_string());
        assert!(failure.to_string().contains("target must not be Auto"));
    }

    #[test]
    fn test_transport_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let failure = TranslationFailure::Transport(Box::new(io));
        let source = failure.source().expect("transport failure should carry a cause");
        assert!(source.to_string().contains("refused"));
    }

    #[test]
    fn test_non_transport_has_no_source() {
        assert!(TranslationFailure::EmptyBody.source().is_none());
        assert!(TranslationFailure::HttpStatus(500).source().is_none());
    }
}

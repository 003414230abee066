use reqwest::Method;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Delete => Method::DELETE,
        }
    }

    /// Phrase used in error messages, e.g. "Failed to post to /cards".
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post to",
            Self::Put => "put to",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Failure of a single API call.
///
/// Each variant is built where the failure is observed and keeps nothing of
/// the underlying reqwest or serde error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Failed to {verb} {endpoint}: HTTP {status}")]
    Status {
        verb: Verb,
        endpoint: String,
        status: u16,
    },
    #[error("Failed to {verb} {endpoint}: Connection error")]
    Transport { verb: Verb, endpoint: String },
    #[error("Failed to {verb} {endpoint}: Invalid JSON response")]
    Decode { verb: Verb, endpoint: String },
}

impl ApiError {
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Status { endpoint, .. }
            | Self::Transport { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, Verb};

    #[test]
    fn status_message() {
        let e = ApiError::Status {
            verb: Verb::Delete,
            endpoint: "/cards/xyz".to_string(),
            status: 404,
        };

        assert_eq!(e.to_string(), "Failed to delete /cards/xyz: HTTP 404");
        assert_eq!(e.status(), Some(404));
        assert_eq!(e.endpoint(), "/cards/xyz");
    }

    #[test]
    fn transport_message() {
        let e = ApiError::Transport {
            verb: Verb::Put,
            endpoint: "/cards/xyz".to_string(),
        };

        assert_eq!(e.to_string(), "Failed to put to /cards/xyz: Connection error");
        assert_eq!(e.status(), None);
    }

    #[test]
    fn verb_phrases() {
        assert_eq!(Verb::Get.to_string(), "get");
        assert_eq!(Verb::Post.to_string(), "post to");
        assert_eq!(Verb::Put.to_string(), "put to");
        assert_eq!(Verb::Delete.to_string(), "delete");
        assert_eq!(Verb::Post.method(), reqwest::Method::POST);
    }
}

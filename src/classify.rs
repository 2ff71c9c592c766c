//! Error classification
//!
//! Decides what a failed call means for the query: treat it as an absent
//! result, reissue the identical request, or abort. The decision is driven
//! by a static table of signatures (status-code-like tokens such as `"404"`
//! and `"429"`), built once per plugin and shared read-only.
//!
//! Two matching modes exist. `Text` looks for the signature anywhere in the
//! error's display text, which is how the upstream client library reports
//! status codes. Digits that happen to appear in an unrelated message will
//! match too. `Status` compares the signature with the structured HTTP
//! status carried by the error and is the default.

use crate::error::{Error, Result};
use std::fmt::Debug;
use tracing::debug;

/// What to do with a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Treat as a zero-item successful result
    Ignore,
    /// Reissue the identical request
    Retry,
    /// Surface the error to the caller
    Propagate,
}

/// Classifies transport-level errors
pub trait ErrorClassifier: Send + Sync + Debug {
    /// Decide the action for an error
    fn classify(&self, error: &Error) -> ErrorAction;

    /// Whether the transport should retry this error
    fn should_retry(&self, error: &Error) -> bool {
        self.classify(error) == ErrorAction::Retry
    }
}

/// How signatures are matched against errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMatch {
    /// Substring of the error's display text
    Text,
    /// Parsed as a status code and compared with the error's HTTP status
    #[default]
    Status,
}

/// Static ignore/retry signature table
#[derive(Debug, Clone, Default)]
pub struct ErrorPolicy {
    ignore: Vec<String>,
    retry: Vec<String>,
    matching: SignatureMatch,
}

impl ErrorPolicy {
    /// Create an empty policy (everything propagates)
    pub fn new(matching: SignatureMatch) -> Self {
        Self {
            ignore: Vec::new(),
            retry: Vec::new(),
            matching,
        }
    }

    /// Policy used for LaunchDarkly connections: 404 is absence, 429 is throttling
    pub fn launchdarkly() -> Self {
        Self::new(SignatureMatch::Status)
            .with_ignore("404")
            .with_retry("429")
    }

    /// Add an ignore signature
    #[must_use]
    pub fn with_ignore(mut self, signature: impl Into<String>) -> Self {
        self.ignore.push(signature.into());
        self
    }

    /// Add a retry signature
    #[must_use]
    pub fn with_retry(mut self, signature: impl Into<String>) -> Self {
        self.retry.push(signature.into());
        self
    }

    /// Change the matching mode
    #[must_use]
    pub fn with_matching(mut self, matching: SignatureMatch) -> Self {
        self.matching = matching;
        self
    }

    /// Current matching mode
    pub fn matching(&self) -> SignatureMatch {
        self.matching
    }

    /// Turn an ignorable failure into `Ok(None)`
    pub fn resolve<T>(&self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if self.classify(&e) == ErrorAction::Ignore => {
                debug!(error = %e, "ignoring error, treating as empty result");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn matches_any(&self, signatures: &[String], error: &Error) -> bool {
        match self.matching {
            SignatureMatch::Text => {
                let text = error.to_string();
                signatures.iter().any(|s| text.contains(s.as_str()))
            }
            SignatureMatch::Status => error.status().is_some_and(|status| {
                signatures
                    .iter()
                    .filter_map(|s| s.trim().parse::<u16>().ok())
                    .any(|code| code == status)
            }),
        }
    }
}

impl ErrorClassifier for ErrorPolicy {
    fn classify(&self, error: &Error) -> ErrorAction {
        if self.matches_any(&self.ignore, error) {
            ErrorAction::Ignore
        } else if self.matches_any(&self.retry, error) {
            ErrorAction::Retry
        } else {
            ErrorAction::Propagate
        }
    }
}

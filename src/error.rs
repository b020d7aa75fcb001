//! Error values carried through a presenter's error slot
//!
//! A presenter never returns errors across the view boundary. It parks them in
//! its `error` slot and the view decides whether they can be shown. Only
//! errors that can describe themselves to a user ([`LocalizedError`]) ever
//! reach the alert; everything else is carried as [`PresenterError::Opaque`]
//! and stays invisible to the converter screen.

use std::fmt;
use std::sync::Arc;

/// An error that knows how to present itself to a user
pub trait LocalizedError: fmt::Debug + Send + Sync {
    /// Short human-readable description, shown as the alert title
    fn error_description(&self) -> String;

    /// What the user can do about it, shown as the alert body
    fn recovery_suggestion(&self) -> Option<String> {
        None
    }
}

/// The value stored in a presenter's error slot
///
/// Cheap to clone so that it can ride along in every state snapshot.
#[derive(Debug, Clone)]
pub enum PresenterError {
    /// Carries a description and an optional recovery suggestion
    Localized(Arc<dyn LocalizedError>),
    /// Anything else; the alert adapter treats these as absent
    Opaque(Arc<anyhow::Error>),
}

impl PresenterError {
    pub fn localized(error: impl LocalizedError + 'static) -> Self {
        Self::Localized(Arc::new(error))
    }

    pub fn opaque(error: impl Into<anyhow::Error>) -> Self {
        Self::Opaque(Arc::new(error.into()))
    }

    /// The localizable capability, if this error has one
    pub fn as_localized(&self) -> Option<&dyn LocalizedError> {
        match self {
            Self::Localized(inner) => Some(inner.as_ref()),
            Self::Opaque(_) => None,
        }
    }
}

impl fmt::Display for PresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Localized(inner) => f.write_str(&inner.error_description()),
            Self::Opaque(inner) => write!(f, "{:#}", inner),
        }
    }
}

impl From<anyhow::Error> for PresenterError {
    fn from(error: anyhow::Error) -> Self {
        Self::Opaque(Arc::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Described;

    impl LocalizedError for Described {
        fn error_description(&self) -> String {
            "Amount is not a number".to_string()
        }
    }

    #[test]
    fn localized_errors_expose_their_capability() {
        let err = PresenterError::localized(Described);
        let localized = err.as_localized().expect("localized");
        assert_eq!(localized.error_description(), "Amount is not a number");
        assert_eq!(localized.recovery_suggestion(), None);
        assert_eq!(err.to_string(), "Amount is not a number");
    }

    #[test]
    fn opaque_errors_have_no_localized_capability() {
        let err: PresenterError = anyhow::anyhow!("socket closed").into();
        assert!(err.as_localized().is_none());
        assert_eq!(err.to_string(), "socket closed");
    }
}

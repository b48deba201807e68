mod adhoc;
mod configuration;
mod structural;

use adhoc::AdhocError;
use configuration::ConfigurationError;
use structural::StructuralError;
use std::sync::Arc;

pub use configuration::ConfigurationRule;
pub use structural::StructuralRule;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while resolving the mapping for a record type.
///
/// Resolution errors are fatal for the whole type: when one is returned, no
/// descriptor is produced. The error is one pointer wide and cheap to clone so
/// that failed resolutions can be cached and shared like successful ones.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Structural(StructuralError),
    Configuration(ConfigurationError),
}

impl Error {
    /// Name of the record type the error was raised for, if known.
    pub fn type_name(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::Structural(err) => Some(&*err.type_name),
            ErrorKind::Configuration(err) => Some(&*err.type_name),
            ErrorKind::Adhoc(_) => None,
        }
    }

    /// Name of the offending property, if the error concerns a single one.
    pub fn property(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::Structural(err) => err.property.as_deref(),
            ErrorKind::Configuration(err) => err.property.as_deref(),
            ErrorKind::Adhoc(_) => None,
        }
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Structural(err) => core::fmt::Display::fmt(err, f),
            Configuration(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind }),
        }
    }
}

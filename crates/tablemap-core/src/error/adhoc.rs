use super::Error;

/// Error built from a formatted message, for failures with no dedicated kind.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an ad-hoc error from format arguments. Used by [`bail!`] and
    /// [`err!`].
    ///
    /// [`bail!`]: crate::bail
    /// [`err!`]: crate::err
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(super::ErrorKind::Adhoc(AdhocError {
            message: args.to_string().into(),
        }))
    }
}

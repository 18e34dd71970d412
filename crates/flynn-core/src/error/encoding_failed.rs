use super::Error;

/// Error when a field value could not be serialized with its declared encoding.
///
/// The encoder's own error is attached as the cause.
#[derive(Debug)]
pub(super) struct EncodingFailed {
    field: Box<str>,
    encoding: &'static str,
}

impl std::error::Error for EncodingFailed {}

impl core::fmt::Display for EncodingFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to encode field `{}` as {}",
            self.field, self.encoding
        )
    }
}

impl Error {
    pub fn encoding_failed(field: impl Into<String>, encoding: &'static str) -> Error {
        Error::from(super::ErrorKind::EncodingFailed(EncodingFailed {
            field: field.into().into(),
            encoding,
        }))
    }

    pub fn is_encoding_failed(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::EncodingFailed(_)))
    }
}

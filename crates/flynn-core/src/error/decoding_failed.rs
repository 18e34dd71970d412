use super::Error;

/// Error when a fetched column value could not be converted into its field.
///
/// Raised for malformed sub-document payloads, unparsable unsigned integer
/// strings and encoded payloads the declared format rejects.
#[derive(Debug)]
pub(super) struct DecodingFailed {
    field: Box<str>,
    position: usize,
}

impl std::error::Error for DecodingFailed {}

impl core::fmt::Display for DecodingFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to decode field `{}` (column {})",
            self.field, self.position
        )
    }
}

impl Error {
    pub fn decoding_failed(field: impl Into<String>, position: usize) -> Error {
        Error::from(super::ErrorKind::DecodingFailed(DecodingFailed {
            field: field.into().into(),
            position,
        }))
    }

    pub fn is_decoding_failed(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DecodingFailed(_)))
    }
}

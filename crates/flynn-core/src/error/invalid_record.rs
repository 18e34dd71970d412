use super::Error;

/// Error when a record type is declared in a way the mapping cannot honor.
///
/// This occurs when:
/// - A field is marked `sub` but its accessor does not expose a sub-document
/// - A field is marked with an encoding but its accessor does not expose an encodable value
/// - A `key` directive is placed on a nested record or list field
/// - A record type contains itself through pointer fields
///
/// These are configuration errors. They are never retried.
#[derive(Debug)]
pub(super) struct InvalidRecord {
    record: &'static str,
    field: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidRecord {}

impl core::fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid record `{}`: field `{}`: {}",
            self.record, self.field, self.message
        )
    }
}

impl Error {
    /// Creates an invalid record error for `field` of the record type named `record`.
    pub fn invalid_record(
        record: &'static str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidRecord(InvalidRecord {
            record,
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid record (configuration) error.
    pub fn is_invalid_record(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidRecord(_)))
    }
}

use super::Error;

/// Error when the per-row arrays no longer agree with the binding's schema.
///
/// Holder/destination kind mismatches, missing sub-document instances and
/// NULL values in columns without null tolerance end up here. These are
/// not data problems and must not be retried.
#[derive(Debug)]
pub(super) struct MappingDefect {
    message: Box<str>,
}

impl std::error::Error for MappingDefect {}

impl core::fmt::Display for MappingDefect {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping defect: {}", self.message)
    }
}

impl Error {
    pub fn mapping_defect(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MappingDefect(MappingDefect {
            message: message.into().into(),
        }))
    }

    pub fn is_mapping_defect(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MappingDefect(_)))
    }
}

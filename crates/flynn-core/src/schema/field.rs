use super::Role;
use crate::stmt::Kind;

/// Reserved role name under which the primary key field is recorded.
pub const KEY_ROLE: &str = "#key";

/// Reserved role name under which the generated sequence field is recorded.
pub const INDEX_ROLE: &str = "#index";

/// Static metadata for one mapped column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Effective column name
    pub name: &'static str,

    /// Name of the record type declaring the field
    pub record: &'static str,

    pub role: Role,

    /// Primitive kind. `Kind::Record` for sub-documents and encoded fields.
    pub kind: Kind,

    /// Whether the destination accepts SQL NULL
    pub nullable: bool,

    /// Field indices from the root record down to this field, one per
    /// level of flattened nesting.
    pub path: Vec<usize>,
}

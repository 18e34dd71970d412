//! Static description of record types and the column schema derived from them.

mod directive;
pub use directive::{Directive, Role};

mod field;
pub use field::{FieldDescriptor, INDEX_ROLE, KEY_ROLE};

mod selection;
pub use selection::Selection;

mod ty;
pub use ty::{FieldDef, RecordType, Shape};

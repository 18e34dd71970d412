use crate::stmt::{Kind, Primitive};
use crate::Record;

use std::any::TypeId;

/// Declarative description of a record type.
///
/// Generated by `#[derive(Record)]`. Only the type's shape and directives
/// are described here; live values are reached through
/// [`DynRecord`](crate::DynRecord).
#[derive(Debug, Clone)]
pub struct RecordType {
    /// Rust type name, used in error messages
    pub name: &'static str,

    /// Identity of the described type
    pub type_id: TypeId,

    /// Fields, in declaration order. The position of a field in this list
    /// is the index accepted by `DynRecord::field`.
    pub fields: Vec<FieldDef>,
}

impl RecordType {
    pub fn new<R: Record>(name: &'static str, fields: Vec<FieldDef>) -> RecordType {
        RecordType {
            name,
            type_id: TypeId::of::<R>(),
            fields,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Natural (declared) field name
    pub name: &'static str,

    /// Raw directive string, empty when the field carries none
    pub directive: &'static str,

    pub shape: Shape,
}

impl FieldDef {
    pub fn new(name: &'static str, directive: &'static str, shape: Shape) -> FieldDef {
        FieldDef {
            name,
            directive,
            shape,
        }
    }
}

/// Structural category of a field's type.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Single column
    Scalar { kind: Kind, nullable: bool },

    /// Embedded record, flattened into the parent
    Record(fn() -> RecordType),

    /// `Option<Box<R>>`, flattened like an embedded record
    Pointer(fn() -> RecordType),

    /// `Vec<R>`. Contributes element column names only.
    List(fn() -> RecordType),

    /// No structural mapping. Valid only for ignored, sub-document and
    /// encoded fields.
    Opaque,
}

impl Shape {
    pub fn scalar<T: Primitive>() -> Shape {
        Shape::Scalar {
            kind: T::KIND,
            nullable: T::NULLABLE,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Shape::Scalar { .. })
    }
}

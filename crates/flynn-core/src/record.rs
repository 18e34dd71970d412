//! Traits implemented by mappable record types.
//!
//! `#[derive(Record)]` implements [`Record`], [`DynRecord`] and [`Field`] for
//! a struct. The mapping engine only sees records through these traits.

use crate::encoding::Encodable;
use crate::schema::{RecordType, Shape};
use crate::stmt::{Primitive, Value};
use crate::Result;

use chrono::{DateTime, NaiveDateTime, Utc};

/// A record type that can be mapped to and from table rows.
pub trait Record: DynRecord + Default + 'static {
    /// Describes the record's fields and their directives.
    fn record_type() -> RecordType;
}

/// Object-safe access to a record's fields by declaration index.
pub trait DynRecord {
    /// Returns a view of the field at `index`, `None` when out of range.
    fn field(&self, index: usize) -> Option<FieldRef<'_>>;

    /// Returns a write handle to the field at `index`, `None` when out of range.
    ///
    /// Pointer fields are allocated on access so nested columns always have a
    /// destination.
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;
}

/// Serialization contract for sub-document fields.
///
/// A sub-document is stored in a single column as the bytes returned by
/// [`data`](Serializable::data) and restored with
/// [`parse_data`](Serializable::parse_data).
pub trait Serializable {
    fn data(&self) -> Vec<u8>;

    fn parse_data(&mut self, data: &[u8]) -> Result<()>;
}

/// Read view of one field of a live record.
pub enum FieldRef<'a> {
    /// Scalar value, `Value::Null` for an absent optional
    Value(Value),

    /// Embedded or allocated pointer record
    Record(&'a dyn DynRecord),

    /// Absent pointer record. Calling the function yields a zero-valued
    /// instance of the pointed-to type.
    Nil(fn() -> Box<dyn DynRecord>),

    /// Sub-document, `None` when absent
    SubDocument(Option<&'a dyn Serializable>),

    /// Value stored with a structured encoding, `None` when absent
    Encoded(Option<&'a dyn Encodable>),

    /// Field without a column mapping
    Opaque,
}

/// Write handle to one field of a live record.
pub enum FieldMut<'a> {
    Value(&'a mut dyn Slot),
    Record(&'a mut dyn DynRecord),
    SubDocument(&'a mut dyn Serializable),
    Encoded(&'a mut dyn Encodable),
    Opaque,
}

impl std::fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldRef::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldRef::Record(_) => f.write_str("Record"),
            FieldRef::Nil(_) => f.write_str("Nil"),
            FieldRef::SubDocument(sub) => write!(f, "SubDocument(present: {})", sub.is_some()),
            FieldRef::Encoded(value) => write!(f, "Encoded(present: {})", value.is_some()),
            FieldRef::Opaque => f.write_str("Opaque"),
        }
    }
}

/// Scalar destination of a shifted column.
pub trait Slot {
    fn assign(&mut self, value: Value) -> Result<()>;
}

impl<T: Primitive> Slot for T {
    fn assign(&mut self, value: Value) -> Result<()> {
        *self = T::load(value)?;
        Ok(())
    }
}

/// A type usable as a record field with structural mapping.
pub trait Field {
    fn shape() -> Shape;

    fn field_ref(&self) -> FieldRef<'_>;

    fn field_mut(&mut self) -> FieldMut<'_>;
}

macro_rules! impl_field {
    ( $( $ty:ty, )* ) => {
        $(
            impl Field for $ty {
                fn shape() -> Shape {
                    Shape::scalar::<Self>()
                }

                fn field_ref(&self) -> FieldRef<'_> {
                    FieldRef::Value(self.to_value())
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Value(self)
                }
            }

            impl Field for Option<$ty> {
                fn shape() -> Shape {
                    Shape::scalar::<Self>()
                }

                fn field_ref(&self) -> FieldRef<'_> {
                    FieldRef::Value(self.to_value())
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Value(self)
                }
            }
        )*
    };
}

impl_field! {
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    Vec<u8>,
    DateTime<Utc>,
    NaiveDateTime,
}

impl<R: Record> Field for Option<Box<R>> {
    fn shape() -> Shape {
        Shape::Pointer(R::record_type)
    }

    fn field_ref(&self) -> FieldRef<'_> {
        match self {
            Some(record) => FieldRef::Record(&**record),
            None => FieldRef::Nil(zero::<R>),
        }
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Record(&mut **self.get_or_insert_with(Box::default))
    }
}

impl<R: Record> Field for Vec<R> {
    fn shape() -> Shape {
        Shape::List(R::record_type)
    }

    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Opaque
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Opaque
    }
}

/// Zero-valued instance of `R`, standing in for an absent pointer.
pub fn zero<R: Record>() -> Box<dyn DynRecord> {
    Box::new(R::default())
}

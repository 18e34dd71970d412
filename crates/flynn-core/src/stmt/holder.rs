use super::{Kind, Value};
use crate::{Error, Result};

use chrono::{DateTime, Utc};

/// Scan destination for one column of a fetched row.
///
/// Each variant is able to represent SQL NULL (`None`) or a concrete value of
/// one primitive kind. The scan target allocator picks the variant; the
/// backend fills it with [`Holder::set`]; the shifter moves the value into
/// the record.
#[derive(Debug, Clone, PartialEq)]
pub enum Holder {
    Bool(Option<bool>),
    F32(Option<f32>),
    F64(Option<f64>),
    I8(Option<i8>),
    I16(Option<i16>),
    I32(Option<i32>),
    I64(Option<i64>),

    /// Text column. Also carries sub-document and encoded payloads.
    String(Option<String>),

    Time(Option<DateTime<Utc>>),

    /// Unsigned 64-bit column, carried as text and parsed when shifted.
    U64(Option<String>),

    /// Kinds without a dedicated holder. The column has no null tolerance:
    /// leaving this holder empty is a defect once the row is shifted.
    Direct(Kind, Option<Value>),
}

impl Holder {
    /// Returns an empty holder suited to a column of `kind`.
    pub fn for_kind(kind: Kind) -> Holder {
        match kind {
            Kind::Bool => Holder::Bool(None),
            Kind::F32 => Holder::F32(None),
            Kind::F64 => Holder::F64(None),
            Kind::I8 => Holder::I8(None),
            Kind::I16 => Holder::I16(None),
            Kind::I32 => Holder::I32(None),
            Kind::I64 => Holder::I64(None),
            Kind::String | Kind::Record => Holder::String(None),
            Kind::Time => Holder::Time(None),
            Kind::U64 => Holder::U64(None),
            Kind::Bytes | Kind::U8 | Kind::U16 | Kind::U32 => Holder::Direct(kind, None),
        }
    }

    /// The kind of value this holder accepts.
    pub fn kind(&self) -> Kind {
        match self {
            Holder::Bool(_) => Kind::Bool,
            Holder::F32(_) => Kind::F32,
            Holder::F64(_) => Kind::F64,
            Holder::I8(_) => Kind::I8,
            Holder::I16(_) => Kind::I16,
            Holder::I32(_) => Kind::I32,
            Holder::I64(_) => Kind::I64,
            Holder::String(_) => Kind::String,
            Holder::Time(_) => Kind::Time,
            Holder::U64(_) => Kind::U64,
            Holder::Direct(kind, _) => *kind,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Holder::Bool(v) => v.is_none(),
            Holder::F32(v) => v.is_none(),
            Holder::F64(v) => v.is_none(),
            Holder::I8(v) => v.is_none(),
            Holder::I16(v) => v.is_none(),
            Holder::I32(v) => v.is_none(),
            Holder::I64(v) => v.is_none(),
            Holder::String(v) => v.is_none(),
            Holder::Time(v) => v.is_none(),
            Holder::U64(v) => v.is_none(),
            Holder::Direct(_, v) => v.is_none(),
        }
    }

    /// Stores a fetched value. `Value::Null` marks the column as SQL NULL.
    ///
    /// Integer and float values are narrowed or widened to the holder's
    /// width when they fit; anything else of the wrong kind is a type conversion error.
    pub fn set(&mut self, value: Value) -> Result<()> {
        if value.is_null() {
            self.clear();
            return Ok(());
        }

        match self {
            Holder::Bool(slot) => *slot = Some(value.try_into()?),
            Holder::F32(slot) => *slot = Some(value.try_into()?),
            Holder::F64(slot) => *slot = Some(value.try_into()?),
            Holder::I8(slot) => *slot = Some(value.try_into()?),
            Holder::I16(slot) => *slot = Some(value.try_into()?),
            Holder::I32(slot) => *slot = Some(value.try_into()?),
            Holder::I64(slot) => *slot = Some(value.try_into()?),
            Holder::String(slot) => {
                *slot = Some(match value {
                    Value::String(s) => s,
                    Value::Bytes(bytes) => String::from_utf8(bytes)
                        .map_err(|e| err!("text column is not valid UTF-8: {e}"))?,
                    value => return Err(Error::type_conversion(value, "String")),
                })
            }
            Holder::Time(slot) => *slot = Some(value.try_into()?),
            Holder::U64(slot) => {
                *slot = Some(match value {
                    Value::String(s) => s,
                    value => u64::try_from(value)?.to_string(),
                })
            }
            Holder::Direct(kind, slot) => *slot = Some(convert(*kind, value)?),
        }

        Ok(())
    }

    /// Resets the holder to SQL NULL.
    pub fn clear(&mut self) {
        *self = Holder::for_kind(self.kind());
    }

    /// Returns the held value, `Value::Null` when empty.
    ///
    /// Unsigned 64-bit holders return their raw text.
    pub fn value(&self) -> Value {
        match self {
            Holder::Bool(v) => Value::from(*v),
            Holder::F32(v) => Value::from(*v),
            Holder::F64(v) => Value::from(*v),
            Holder::I8(v) => Value::from(*v),
            Holder::I16(v) => Value::from(*v),
            Holder::I32(v) => Value::from(*v),
            Holder::I64(v) => Value::from(*v),
            Holder::String(v) | Holder::U64(v) => Value::from(v.clone()),
            Holder::Time(v) => Value::from(*v),
            Holder::Direct(_, v) => v.clone().unwrap_or_default(),
        }
    }

    /// Takes the held value out, leaving the holder empty.
    pub fn take(&mut self) -> Value {
        let value = self.value();
        self.clear();
        value
    }
}

/// Converts `value` to exactly `kind`, for holders without a dedicated variant.
fn convert(kind: Kind, value: Value) -> Result<Value> {
    Ok(match kind {
        Kind::Bool => Value::Bool(value.try_into()?),
        Kind::Bytes => Value::Bytes(value.try_into()?),
        Kind::F32 => Value::F32(value.try_into()?),
        Kind::F64 => Value::F64(value.try_into()?),
        Kind::I8 => Value::I8(value.try_into()?),
        Kind::I16 => Value::I16(value.try_into()?),
        Kind::I32 => Value::I32(value.try_into()?),
        Kind::I64 => Value::I64(value.try_into()?),
        Kind::String | Kind::Record => Value::String(value.try_into()?),
        Kind::Time => Value::Time(value.try_into()?),
        Kind::U8 => Value::U8(value.try_into()?),
        Kind::U16 => Value::U16(value.try_into()?),
        Kind::U32 => Value::U32(value.try_into()?),
        Kind::U64 => Value::U64(value.try_into()?),
    })
}

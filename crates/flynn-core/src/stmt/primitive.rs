use super::{Kind, Value};
use crate::Result;

use chrono::{DateTime, NaiveDateTime, Utc};

/// A scalar field type that maps to a single column.
pub trait Primitive: Sized {
    const KIND: Kind;
    const NULLABLE: bool = false;

    /// Returns the value to bind for this field on the write path.
    fn to_value(&self) -> Value;

    /// Loads the field from a fetched value.
    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $kind:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const KIND: Kind = Kind::$kind;

                fn to_value(&self) -> Value {
                    Value::from(self)
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    DateTime<Utc> => Time,
}

impl Primitive for NaiveDateTime {
    const KIND: Kind = Kind::Time;

    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const KIND: Kind = T::KIND;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_round_trip() {
        assert_eq!(Some(5i32).to_value(), Value::I32(5));
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(<Option<i32>>::load(Value::Null).unwrap(), None);
        assert_eq!(<Option<i64>>::load(Value::I16(4)).unwrap(), Some(4));
    }

    #[test]
    fn option_kind_follows_inner() {
        assert_eq!(<Option<String> as Primitive>::KIND, Kind::String);
        assert!(<Option<String> as Primitive>::NULLABLE);
        assert!(!<String as Primitive>::NULLABLE);
    }
}

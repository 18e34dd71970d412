use super::Value;
use crate::Error;

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
    F32(f32)
    F64(f64)
}

// Cross-width conversions: widening is always accepted, narrowing is
// accepted only when the value fits the target type.

macro_rules! try_convert {
    ($val:expr, $target_ty:ty) => {
        $val.try_into().map_err(|_| {
            err!(
                "value {} is out of range for {}",
                $val,
                stringify!($target_ty)
            )
        })
    };
}

macro_rules! parse_string {
    ($s:expr, $target_ty:ty) => {
        $s.parse::<$target_ty>()
            .map_err(|_| err!("cannot parse '{}' as {}", $s, stringify!($target_ty)))
    };
}

macro_rules! conversion_fallback {
    ($value:expr, $target_ty:ty) => {
        Err(Error::type_conversion($value, stringify!($target_ty)))
    };
}

/// Parses an unsigned 64-bit integer, detecting the base from its prefix.
///
/// `0x`/`0X` is hexadecimal, `0o`/`0O` and a bare leading `0` are octal,
/// `0b`/`0B` is binary, anything else is decimal. Underscores may separate
/// digits (or follow the prefix). Signs and surrounding whitespace are
/// rejected.
pub(crate) fn parse_u64_auto(src: &str) -> Result<u64, Error> {
    let s = src;

    let (digits, radix, prefixed) =
        if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            (rest, 16, true)
        } else if let Some(rest) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
            (rest, 8, true)
        } else if let Some(rest) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
            (rest, 2, true)
        } else if s.len() > 1 && s.starts_with('0') {
            (&s[1..], 8, true)
        } else {
            (s, 10, false)
        };

    let digits = strip_underscores(digits, prefixed)
        .filter(|digits| !digits.is_empty() && !digits.starts_with(['+', '-']))
        .ok_or_else(|| err!("cannot parse '{}' as u64", src))?;

    Ok(u64::from_str_radix(&digits, radix)?)
}

/// Removes digit separators. Each `_` must sit between two digits, where a
/// base prefix counts as a digit.
fn strip_underscores(digits: &str, prefixed: bool) -> Option<String> {
    if !digits.contains('_') {
        return Some(digits.to_string());
    }

    let groups: Vec<&str> = digits.split('_').collect();
    let last = groups.len() - 1;

    for (i, group) in groups.iter().enumerate() {
        if group.is_empty() && !(i == 0 && prefixed && last > 0) {
            return None;
        }
    }

    Some(groups.concat())
}

impl TryFrom<Value> for u8 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::U8(val) => Ok(val),
            Value::U16(val) => try_convert!(val, u8),
            Value::U32(val) => try_convert!(val, u8),
            Value::U64(val) => try_convert!(val, u8),
            Value::I8(val) => try_convert!(val, u8),
            Value::I16(val) => try_convert!(val, u8),
            Value::I32(val) => try_convert!(val, u8),
            Value::I64(val) => try_convert!(val, u8),
            Value::String(s) => parse_string!(s, u8),
            _ => conversion_fallback!(value, u8),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::U16(val) => Ok(val),
            Value::U8(val) => Ok(val.into()),
            Value::U32(val) => try_convert!(val, u16),
            Value::U64(val) => try_convert!(val, u16),
            Value::I8(val) => try_convert!(val, u16),
            Value::I16(val) => try_convert!(val, u16),
            Value::I32(val) => try_convert!(val, u16),
            Value::I64(val) => try_convert!(val, u16),
            Value::String(s) => parse_string!(s, u16),
            _ => conversion_fallback!(value, u16),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::U32(val) => Ok(val),
            Value::U8(val) => Ok(val.into()),
            Value::U16(val) => Ok(val.into()),
            Value::U64(val) => try_convert!(val, u32),
            Value::I8(val) => try_convert!(val, u32),
            Value::I16(val) => try_convert!(val, u32),
            Value::I32(val) => try_convert!(val, u32),
            Value::I64(val) => try_convert!(val, u32),
            Value::String(s) => parse_string!(s, u32),
            _ => conversion_fallback!(value, u32),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::U64(val) => Ok(val),
            Value::U8(val) => Ok(val.into()),
            Value::U16(val) => Ok(val.into()),
            Value::U32(val) => Ok(val.into()),
            Value::I8(val) => try_convert!(val, u64),
            Value::I16(val) => try_convert!(val, u64),
            Value::I32(val) => try_convert!(val, u64),
            Value::I64(val) => try_convert!(val, u64),
            Value::String(s) => parse_u64_auto(&s),
            _ => conversion_fallback!(value, u64),
        }
    }
}

impl TryFrom<Value> for i8 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I8(val) => Ok(val),
            Value::I16(val) => try_convert!(val, i8),
            Value::I32(val) => try_convert!(val, i8),
            Value::I64(val) => try_convert!(val, i8),
            Value::U8(val) => try_convert!(val, i8),
            Value::U16(val) => try_convert!(val, i8),
            Value::U32(val) => try_convert!(val, i8),
            Value::U64(val) => try_convert!(val, i8),
            Value::String(s) => parse_string!(s, i8),
            _ => conversion_fallback!(value, i8),
        }
    }
}

impl TryFrom<Value> for i16 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I16(val) => Ok(val),
            Value::I8(val) => Ok(val.into()),
            Value::U8(val) => Ok(val.into()),
            Value::I32(val) => try_convert!(val, i16),
            Value::I64(val) => try_convert!(val, i16),
            Value::U16(val) => try_convert!(val, i16),
            Value::U32(val) => try_convert!(val, i16),
            Value::U64(val) => try_convert!(val, i16),
            Value::String(s) => parse_string!(s, i16),
            _ => conversion_fallback!(value, i16),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I32(val) => Ok(val),
            Value::I8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::U8(val) => Ok(val.into()),
            Value::U16(val) => Ok(val.into()),
            Value::I64(val) => try_convert!(val, i32),
            Value::U32(val) => try_convert!(val, i32),
            Value::U64(val) => try_convert!(val, i32),
            Value::String(s) => parse_string!(s, i32),
            _ => conversion_fallback!(value, i32),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I64(val) => Ok(val),
            Value::I8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I32(val) => Ok(val.into()),
            Value::U8(val) => Ok(val.into()),
            Value::U16(val) => Ok(val.into()),
            Value::U32(val) => Ok(val.into()),
            Value::U64(val) => try_convert!(val, i64),
            Value::String(s) => parse_string!(s, i64),
            _ => conversion_fallback!(value, i64),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F32(val) => Ok(val),
            Value::F64(val) => {
                let narrowed = val as f32;
                if val.is_finite() && !narrowed.is_finite() {
                    bail!("value {} is out of range for f32", val);
                }
                Ok(narrowed)
            }
            _ => conversion_fallback!(value, f32),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(val) => Ok(val),
            Value::F32(val) => Ok(val.into()),
            _ => conversion_fallback!(value, f64),
        }
    }
}

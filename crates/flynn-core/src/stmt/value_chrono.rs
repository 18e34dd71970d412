use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{stmt::Value, Error};

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<&DateTime<Utc>> for Value {
    fn from(value: &DateTime<Utc>) -> Self {
        Self::Time(*value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::Time(value.and_utc())
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Time(value) => Ok(value),
            _ => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Time(value) => Ok(value.naive_utc()),
            _ => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}

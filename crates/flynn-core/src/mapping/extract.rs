use super::path::with_field;
use super::Binding;
use crate::schema::{FieldDescriptor, Role};
use crate::stmt::Value;
use crate::{Error, FieldRef, Record, Result};

use log::debug;

impl<R: Record> Binding<R> {
    /// Reads the bound columns from a live record, in row order.
    ///
    /// Absent pointer records contribute the columns of a zero-valued
    /// instance. Absent sub-documents contribute an empty payload and absent
    /// encoded values an empty string.
    pub fn extract(&self, record: &R) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let value = with_field(record, &field.path, field, |field_ref| {
                extract_field(field, field_ref)
            })?;

            debug!("{}: extract `{}` = {value:?}", self.record, field.name);
            values.push(value);
        }

        Ok(values)
    }
}

fn extract_field(field: &FieldDescriptor, field_ref: FieldRef<'_>) -> Result<Value> {
    match (field.role, field_ref) {
        (Role::SubDocument, FieldRef::SubDocument(sub)) => Ok(Value::Bytes(
            sub.map(|sub| sub.data()).unwrap_or_default(),
        )),
        (Role::SubDocument, _) => Err(Error::invalid_record(
            field.record,
            field.name,
            "marked `sub` but the field is not a sub-document",
        )),
        (Role::Encoded(encoding), FieldRef::Encoded(value)) => match value {
            Some(value) => value
                .encode(encoding)
                .map(Value::String)
                .map_err(|err| err.context(Error::encoding_failed(field.name, encoding.name()))),
            None => Ok(Value::String(String::new())),
        },
        (Role::Encoded(encoding), _) => Err(Error::invalid_record(
            field.record,
            field.name,
            format!("marked `{encoding}` but the field is not encodable"),
        )),
        (_, FieldRef::Value(value)) => Ok(value),
        (_, other) => Err(Error::mapping_defect(format!(
            "column `{}` expected a scalar, found {other:?}",
            field.name
        ))),
    }
}

use super::path::parent_mut;
use super::BoundValues;
use crate::schema::{FieldDescriptor, Role};
use crate::stmt::{parse_u64_auto, Holder, Kind, Value};
use crate::{DynRecord, Error, FieldMut, Record, Result};

use log::debug;

impl<R: Record> BoundValues<'_, R> {
    /// Moves the holders' values into the record.
    ///
    /// Holders without a value leave their field at its zero value, except
    /// for columns bound without null tolerance.
    pub fn shift(&mut self) -> Result<()> {
        let fields = &self.binding.fields;

        for (position, (field, holder)) in fields.iter().zip(&self.holders).enumerate() {
            shift_field(&mut self.instance, field, holder, position)?;
        }

        Ok(())
    }
}

fn shift_field(
    record: &mut dyn DynRecord,
    field: &FieldDescriptor,
    holder: &Holder,
    position: usize,
) -> Result<()> {
    match field.role {
        Role::SubDocument => {
            let Holder::String(payload) = holder else {
                return Err(Error::mapping_defect(format!(
                    "sub-document `{}` needs a String holder, found {}",
                    field.name,
                    holder.kind()
                )));
            };

            let Some(payload) = payload else {
                debug!("shift `{}`: no payload", field.name);
                return Ok(());
            };

            let (parent, index) = parent_mut(record, &field.path, field)?;
            match parent.field_mut(index) {
                Some(FieldMut::SubDocument(sub)) => sub
                    .parse_data(payload.as_bytes())
                    .map_err(|err| err.context(Error::decoding_failed(field.name, position))),
                _ => Err(Error::mapping_defect(format!(
                    "sub-document `{}` has no instance to parse into",
                    field.name
                ))),
            }
        }
        Role::Encoded(encoding) => {
            let Holder::String(payload) = holder else {
                return Err(Error::mapping_defect(format!(
                    "encoded field `{}` needs a String holder, found {}",
                    field.name,
                    holder.kind()
                )));
            };

            let payload = match payload {
                Some(payload) if !payload.is_empty() => payload,
                _ => return Ok(()),
            };

            let (parent, index) = parent_mut(record, &field.path, field)?;
            match parent.field_mut(index) {
                Some(FieldMut::Encoded(target)) => target
                    .decode(encoding, payload)
                    .map_err(|err| err.context(Error::decoding_failed(field.name, position))),
                _ => Err(Error::mapping_defect(format!(
                    "encoded field `{}` has no destination",
                    field.name
                ))),
            }
        }
        _ => {
            if holder.is_null() {
                if matches!(holder, Holder::Direct(..)) && !field.nullable {
                    return Err(Error::mapping_defect(format!(
                        "column `{}` ({}) is not nullable but no value was scanned",
                        field.name, field.kind
                    )));
                }

                debug!("shift `{}`: NULL", field.name);
                return Ok(());
            }

            let value = coerce(field, holder, position)?;
            debug!("shift `{}` = {value:?}", field.name);

            let (parent, index) = parent_mut(record, &field.path, field)?;
            match parent.field_mut(index) {
                Some(FieldMut::Value(slot)) => slot.assign(value).map_err(|err| {
                    err.context(Error::mapping_defect(format!(
                        "cannot assign column `{}`",
                        field.name
                    )))
                }),
                _ => Err(Error::mapping_defect(format!(
                    "column `{}` has no scalar destination",
                    field.name
                ))),
            }
        }
    }
}

/// Converts a populated holder into a value of the destination's kind.
fn coerce(field: &FieldDescriptor, holder: &Holder, position: usize) -> Result<Value> {
    let width = field.kind.signed_width();

    match (holder, field.kind) {
        (Holder::Bool(Some(v)), Kind::Bool) => Ok(Value::Bool(*v)),
        (Holder::I8(Some(v)), _) if width >= Some(8) => Ok(Value::I8(*v)),
        (Holder::I16(Some(v)), _) if width >= Some(16) => Ok(Value::I16(*v)),
        (Holder::I32(Some(v)), _) if width >= Some(32) => Ok(Value::I32(*v)),
        (Holder::I64(Some(v)), Kind::I64) => Ok(Value::I64(*v)),
        (Holder::U64(Some(text)), Kind::U64) => parse_u64_auto(text)
            .map(Value::U64)
            .map_err(|err| err.context(Error::decoding_failed(field.name, position))),
        (Holder::F32(Some(v)), Kind::F32 | Kind::F64) => Ok(Value::F32(*v)),
        (Holder::F64(Some(v)), Kind::F64) => Ok(Value::F64(*v)),
        (Holder::String(Some(v)), Kind::String) => Ok(Value::String(v.clone())),
        (Holder::Time(Some(v)), Kind::Time) => Ok(Value::Time(*v)),
        (Holder::Direct(kind, Some(v)), _) if *kind == field.kind => Ok(v.clone()),
        _ => Err(Error::mapping_defect(format!(
            "cannot shift {} holder into column `{}` ({})",
            holder.kind(),
            field.name,
            field.kind
        ))),
    }
}

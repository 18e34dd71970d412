use crate::schema::FieldDescriptor;
use crate::{DynRecord, Error, FieldMut, FieldRef, Result};

/// Resolves a descriptor path on a live record, read side.
///
/// Absent pointer records along the way are replaced by zero-valued
/// instances, so the leaf is always reached. `f` is called with the leaf
/// field.
pub(super) fn with_field<T>(
    record: &dyn DynRecord,
    path: &[usize],
    field: &FieldDescriptor,
    f: impl FnOnce(FieldRef<'_>) -> Result<T>,
) -> Result<T> {
    let Some((&index, rest)) = path.split_first() else {
        return Err(empty_path(field));
    };

    let Some(field_ref) = record.field(index) else {
        return Err(missing_field(field, index));
    };

    if rest.is_empty() {
        return f(field_ref);
    }

    match field_ref {
        FieldRef::Record(nested) => with_field(nested, rest, field, f),
        FieldRef::Nil(zero) => with_field(&*zero(), rest, field, f),
        _ => Err(not_a_record(field, index)),
    }
}

/// Resolves all but the last step of a descriptor path, write side.
///
/// Pointer records along the way are allocated. Returns the record holding
/// the leaf field together with the leaf's index.
pub(super) fn parent_mut<'r>(
    record: &'r mut dyn DynRecord,
    path: &[usize],
    field: &FieldDescriptor,
) -> Result<(&'r mut dyn DynRecord, usize)> {
    match path {
        [] => Err(empty_path(field)),
        [index] => Ok((record, *index)),
        [index, rest @ ..] => match record.field_mut(*index) {
            Some(FieldMut::Record(nested)) => parent_mut(nested, rest, field),
            Some(_) => Err(not_a_record(field, *index)),
            None => Err(missing_field(field, *index)),
        },
    }
}

fn empty_path(field: &FieldDescriptor) -> Error {
    Error::mapping_defect(format!("column `{}` has an empty field path", field.name))
}

fn missing_field(field: &FieldDescriptor, index: usize) -> Error {
    Error::mapping_defect(format!(
        "no field at index {index} on the path to column `{}`",
        field.name
    ))
}

fn not_a_record(field: &FieldDescriptor, index: usize) -> Error {
    Error::mapping_defect(format!(
        "field at index {index} on the path to column `{}` is not a record",
        field.name
    ))
}

use super::path::parent_mut;
use super::Binding;
use crate::schema::Role;
use crate::stmt::{Holder, Value};
use crate::{Error, FieldMut, Record, Result};

use log::debug;

/// Scan targets for one row: a fresh record and one nullable holder per
/// bound column.
///
/// The backend fills the holders, then [`shift`](BoundValues::shift) moves
/// their values into the record. Not meant to be shared across threads.
pub struct BoundValues<'a, R> {
    pub(super) binding: &'a Binding<R>,
    pub(super) instance: R,
    pub(super) holders: Vec<Holder>,
}

impl<R: Record> Binding<R> {
    /// Allocates a zero-valued record and the holders to scan a row into.
    pub fn allocate(&self) -> Result<BoundValues<'_, R>> {
        let mut instance = R::default();
        let holders = self.arm(&mut instance)?;

        Ok(BoundValues {
            binding: self,
            instance,
            holders,
        })
    }

    fn arm(&self, instance: &mut R) -> Result<Vec<Holder>> {
        let mut holders = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let (parent, index) = parent_mut(instance, &field.path, field)?;

            let holder = match field.role {
                Role::SubDocument => match parent.field_mut(index) {
                    Some(FieldMut::SubDocument(_)) => Holder::String(None),
                    _ => {
                        return Err(Error::invalid_record(
                            field.record,
                            field.name,
                            "marked `sub` but the field is not a sub-document",
                        ))
                    }
                },
                Role::Encoded(encoding) => match parent.field_mut(index) {
                    Some(FieldMut::Encoded(_)) => Holder::String(None),
                    _ => {
                        return Err(Error::invalid_record(
                            field.record,
                            field.name,
                            format!("marked `{encoding}` but the field is not encodable"),
                        ))
                    }
                },
                _ => Holder::for_kind(field.kind),
            };

            debug!(
                "{}: scan `{}` into {} holder",
                self.record,
                field.name,
                holder.kind()
            );
            holders.push(holder);
        }

        Ok(holders)
    }
}

impl<'a, R: Record> BoundValues<'a, R> {
    pub fn binding(&self) -> &'a Binding<R> {
        self.binding
    }

    /// Holders, in row order.
    pub fn holders(&self) -> &[Holder] {
        &self.holders
    }

    pub fn holders_mut(&mut self) -> &mut [Holder] {
        &mut self.holders
    }

    /// Stores one fetched row in the holders.
    pub fn fill(&mut self, row: impl IntoIterator<Item = Value>) -> Result<()> {
        let row: Vec<Value> = row.into_iter().collect();

        if row.len() != self.holders.len() {
            return Err(Error::mapping_defect(format!(
                "row has {} values but `{}` binds {} columns",
                row.len(),
                self.binding.record,
                self.holders.len()
            )));
        }

        for (position, (holder, value)) in self.holders.iter_mut().zip(row).enumerate() {
            let field = &self.binding.fields[position];
            holder
                .set(value)
                .map_err(|err| err.context(Error::decoding_failed(field.name, position)))?;
        }

        Ok(())
    }

    pub fn instance(&self) -> &R {
        &self.instance
    }

    pub fn into_instance(self) -> R {
        self.instance
    }

    /// Returns the current record and re-arms fresh scan targets for the
    /// next row.
    pub fn take(&mut self) -> Result<R> {
        let mut instance = R::default();
        self.holders = self.binding.arm(&mut instance)?;
        Ok(std::mem::replace(&mut self.instance, instance))
    }
}

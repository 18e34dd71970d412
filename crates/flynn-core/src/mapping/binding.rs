use super::walk::Walker;
use crate::schema::{FieldDescriptor, Selection, KEY_ROLE};
use crate::{Record, Result};

use indexmap::IndexMap;
use log::debug;
use std::marker::PhantomData;

/// Column schema of a record type under a field selection.
///
/// Built once per (type, selection) pair and never mutated afterwards, so a
/// binding can be shared by any number of concurrent callers. Per-call state
/// lives in the values returned by [`Binding::extract`] and
/// [`Binding::allocate`].
pub struct Binding<R> {
    selection: Selection,

    /// Name of the bound record type
    pub(super) record: &'static str,

    /// Mapped columns, in row order
    pub(super) fields: Vec<FieldDescriptor>,

    roles: IndexMap<&'static str, &'static str>,

    row_names: IndexMap<&'static str, Vec<&'static str>>,

    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Binding<R> {
    /// Binds `R` to the requested columns.
    ///
    /// `["*"]` maps every field; `[""]` maps nothing.
    pub fn new<S: AsRef<str>>(fields: impl IntoIterator<Item = S>) -> Result<Binding<R>> {
        Binding::with_selection(Selection::new(fields))
    }

    /// Binds every field of `R`.
    pub fn all() -> Result<Binding<R>> {
        Binding::with_selection(Selection::All)
    }

    pub fn with_selection(selection: Selection) -> Result<Binding<R>> {
        let ty = R::record_type();

        if selection.is_none() {
            debug!("{}: empty selection, no columns", ty.name);
            return Ok(Binding {
                selection,
                record: ty.name,
                fields: vec![],
                roles: IndexMap::new(),
                row_names: IndexMap::new(),
                _record: PhantomData,
            });
        }

        let mut walker = Walker::new(&selection);
        walker.walk(&ty, &[])?;

        let Walker {
            fields,
            roles,
            row_names,
            ..
        } = walker;

        debug!(
            "{}: bound {} columns, roles {roles:?}",
            ty.name,
            fields.len()
        );

        Ok(Binding {
            selection,
            record: ty.name,
            fields,
            roles,
            row_names,
            _record: PhantomData,
        })
    }
}

impl<R> Binding<R> {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn record_name(&self) -> &'static str {
        self.record
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Column names, in row order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }

    /// Comma-separated column list, for building statements.
    pub fn query_fields(&self) -> String {
        self.field_names().join(",")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reserved roles (`#key`, `#index`) and the column carrying each.
    pub fn roles(&self) -> &IndexMap<&'static str, &'static str> {
        &self.roles
    }

    /// Column name of the primary key, if one is declared.
    pub fn key(&self) -> Option<&'static str> {
        self.roles.get(KEY_ROLE).copied()
    }

    /// Element column names of list fields, keyed by field name.
    ///
    /// List fields never appear in [`fields`](Binding::fields); their element
    /// names are only reported here.
    pub fn row_names(&self) -> &IndexMap<&'static str, Vec<&'static str>> {
        &self.row_names
    }
}

impl<R> std::fmt::Debug for Binding<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("record", &self.record)
            .field("selection", &self.selection)
            .field("fields", &self.field_names())
            .field("roles", &self.roles)
            .finish()
    }
}

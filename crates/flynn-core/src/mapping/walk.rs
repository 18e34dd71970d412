use crate::schema::{
    Directive, FieldDescriptor, RecordType, Role, Selection, Shape, INDEX_ROLE, KEY_ROLE,
};
use crate::stmt::Kind;
use crate::{Error, Result};

use indexmap::IndexMap;
use log::debug;
use std::any::TypeId;

/// Derives the column schema of a record type.
///
/// The walk only inspects type shape and directives, never live values.
pub(super) struct Walker<'a> {
    selection: &'a Selection,
    pub(super) fields: Vec<FieldDescriptor>,
    pub(super) roles: IndexMap<&'static str, &'static str>,
    pub(super) row_names: IndexMap<&'static str, Vec<&'static str>>,

    /// Record types currently being walked, to reject types that contain
    /// themselves.
    stack: Vec<TypeId>,
}

impl<'a> Walker<'a> {
    pub(super) fn new(selection: &'a Selection) -> Walker<'a> {
        Walker {
            selection,
            fields: vec![],
            roles: IndexMap::new(),
            row_names: IndexMap::new(),
            stack: vec![],
        }
    }

    pub(super) fn walk(&mut self, ty: &RecordType, prefix: &[usize]) -> Result<()> {
        self.stack.push(ty.type_id);

        for (index, def) in ty.fields.iter().enumerate() {
            let directive = Directive::parse(def.directive);
            let name = directive.name(def.name);

            let mut path = prefix.to_vec();
            path.push(index);

            match directive.role {
                Role::Ignored => {
                    debug!("{}.{}: ignored", ty.name, def.name);
                    continue;
                }
                Role::Sequence => {
                    debug!("{}.{}: sequence column `{name}`", ty.name, def.name);
                    self.roles.insert(INDEX_ROLE, name);
                    continue;
                }
                role if role.is_opaque() => {
                    self.push(ty, name, directive.role, Kind::Record, true, path);
                    continue;
                }
                Role::Key => {
                    if !def.shape.is_scalar() {
                        return Err(Error::invalid_record(
                            ty.name,
                            def.name,
                            "`key` is only valid on a scalar field",
                        ));
                    }
                    self.roles.insert(KEY_ROLE, name);
                }
                _ => {}
            }

            match def.shape {
                Shape::Scalar { kind, nullable } => {
                    self.push(ty, name, directive.role, kind, nullable, path);
                }
                Shape::Record(nested) | Shape::Pointer(nested) => {
                    let nested = self.enter(ty, def.name, nested)?;
                    self.walk(&nested, &path)?;
                }
                Shape::List(element) => {
                    let element = self.enter(ty, def.name, element)?;

                    let mut walker = Walker::new(self.selection);
                    walker.stack = self.stack.clone();
                    walker.walk(&element, &[])?;

                    let names = walker.fields.iter().map(|field| field.name).collect();
                    debug!("{}.{}: row names {names:?}", ty.name, def.name);
                    self.row_names.insert(name, names);
                }
                Shape::Opaque => {
                    return Err(Error::invalid_record(
                        ty.name,
                        def.name,
                        "field type has no column mapping; mark it `:ignore`, `:sub` or with an encoding",
                    ));
                }
            }
        }

        self.stack.pop();
        Ok(())
    }

    /// Describes the record type behind `field`, rejecting types that
    /// contain themselves.
    fn enter(
        &self,
        ty: &RecordType,
        field: &'static str,
        describe: fn() -> RecordType,
    ) -> Result<RecordType> {
        let nested = describe();

        if self.stack.contains(&nested.type_id) {
            return Err(Error::invalid_record(
                ty.name,
                field,
                format!("record type `{}` contains itself", nested.name),
            ));
        }

        Ok(nested)
    }

    fn push(
        &mut self,
        ty: &RecordType,
        name: &'static str,
        role: Role,
        kind: Kind,
        nullable: bool,
        path: Vec<usize>,
    ) {
        if !self.selection.contains(name) {
            debug!("{}: `{name}` not selected", ty.name);
            return;
        }

        debug!("{}: column `{name}` {kind} {role:?} at {path:?}", ty.name);

        self.fields.push(FieldDescriptor {
            name,
            record: ty.name,
            role,
            kind,
            nullable,
            path,
        });
    }
}

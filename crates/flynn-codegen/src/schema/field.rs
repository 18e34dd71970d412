use super::{ty, ErrorSet};

use flynn_core::schema::{Directive, Role};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of the field in the containing record
    pub(crate) index: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Raw `#[flynn("...")]` directive, empty when absent
    pub(crate) directive: syn::LitStr,

    /// How the generated accessors reach the field's value
    pub(crate) field_ty: FieldTy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldTy {
    /// Mapped through the field type's `Field` impl
    Mapped,

    /// Not mapped, any type
    Ignored,

    /// `Serializable` value
    SubDocument(Wrapper),

    /// serde value stored with a structured encoding
    Encoded(Wrapper),
}

/// How an opaque field value is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Wrapper {
    /// `T`
    Plain,

    /// `Option<T>`
    Option,

    /// `Option<Box<T>>`
    OptionBox,
}

impl Wrapper {
    fn from_ty(ty: &syn::Type) -> Wrapper {
        match ty::option_inner(ty) {
            Some(inner) if ty::box_inner(inner).is_some() => Wrapper::OptionBox,
            Some(_) => Wrapper::Option,
            None => Wrapper::Plain,
        }
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, index: usize) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut directive = None;

        for attr in &field.attrs {
            if attr.path().is_ident("flynn") {
                if directive.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[flynn] attribute",
                    ));
                    continue;
                }

                match attr.parse_args::<syn::LitStr>() {
                    Ok(lit) => directive = Some(lit),
                    Err(_) => errs.push(syn::Error::new_spanned(
                        attr,
                        "expected a directive string, e.g. #[flynn(\"Name:key\")]",
                    )),
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let directive = directive.unwrap_or_else(|| syn::LitStr::new("", ident.span()));
        let value = directive.value();

        let field_ty = match Directive::parse(&value).role {
            Role::Ignored => FieldTy::Ignored,
            Role::SubDocument => FieldTy::SubDocument(Wrapper::from_ty(&field.ty)),
            Role::Encoded(_) => FieldTy::Encoded(Wrapper::from_ty(&field.ty)),
            Role::Plain | Role::Key | Role::Sequence => FieldTy::Mapped,
        };

        Ok(Field {
            index,
            ident: ident.clone(),
            ty: field.ty.clone(),
            directive,
            field_ty,
        })
    }

    /// Natural field name, without a raw identifier prefix.
    pub(crate) fn name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(stripped) => stripped.to_string(),
            None => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(field: syn::Field) -> syn::Result<Field> {
        Field::from_ast(&field, 0)
    }

    fn named(tokens: proc_macro2::TokenStream) -> syn::Field {
        let item: syn::ItemStruct = syn::parse_quote!(struct S { #tokens });
        let syn::Fields::Named(fields) = item.fields else {
            unreachable!()
        };
        fields.named.into_iter().next().unwrap()
    }

    #[test]
    fn plain_field_is_mapped() {
        let field = parse(named(quote::quote!(name: String))).unwrap();
        assert_eq!(field.field_ty, FieldTy::Mapped);
        assert_eq!(field.directive.value(), "");
        assert_eq!(field.name(), "name");
    }

    #[test]
    fn key_and_sequence_are_mapped() {
        let field = parse(named(quote::quote!(#[flynn("ID:key")] id: i64))).unwrap();
        assert_eq!(field.field_ty, FieldTy::Mapped);
        assert_eq!(field.directive.value(), "ID:key");

        let field = parse(named(quote::quote!(#[flynn(":isn")] seq: u64))).unwrap();
        assert_eq!(field.field_ty, FieldTy::Mapped);
    }

    #[test]
    fn sub_document_wrappers() {
        let field = parse(named(quote::quote!(#[flynn(":sub")] tag: Tag))).unwrap();
        assert_eq!(field.field_ty, FieldTy::SubDocument(Wrapper::Plain));

        let field = parse(named(quote::quote!(#[flynn(":sub")] tag: Option<Tag>))).unwrap();
        assert_eq!(field.field_ty, FieldTy::SubDocument(Wrapper::Option));

        let field =
            parse(named(quote::quote!(#[flynn(":sub")] tag: Option<Box<Tag>>))).unwrap();
        assert_eq!(field.field_ty, FieldTy::SubDocument(Wrapper::OptionBox));
    }

    #[test]
    fn encoded_and_ignored() {
        let field = parse(named(quote::quote!(#[flynn("Perm:YAML")] perm: Option<Box<P>>)))
            .unwrap();
        assert_eq!(field.field_ty, FieldTy::Encoded(Wrapper::OptionBox));

        let field = parse(named(quote::quote!(#[flynn(":ignore")] cache: Cache))).unwrap();
        assert_eq!(field.field_ty, FieldTy::Ignored);
    }

    #[test]
    fn raw_identifier_name() {
        let field = parse(named(quote::quote!(r#type: String))).unwrap();
        assert_eq!(field.name(), "type");
    }

    #[test]
    fn duplicate_attribute() {
        let err = parse(named(quote::quote!(#[flynn("a")] #[flynn("b")] name: String)))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate #[flynn] attribute"));
    }

    #[test]
    fn directive_must_be_a_string() {
        let err = parse(named(quote::quote!(#[flynn(key)] id: i64))).unwrap_err();
        assert!(err.to_string().contains("expected a directive string"));
    }
}

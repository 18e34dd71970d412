use super::Expand;
use crate::schema::{Field, FieldTy, Wrapper};

use proc_macro2::{Literal, TokenStream};
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_field_def(&self, field: &Field) -> TokenStream {
        let flynn = &self.flynn;
        let name = Literal::string(&field.name());
        let directive = &field.directive;
        let ty = &field.ty;

        let shape = match field.field_ty {
            FieldTy::Mapped => quote!(<#ty as #flynn::Field>::shape()),
            _ => quote!(#flynn::Shape::Opaque),
        };

        quote!(#flynn::FieldDef::new(#name, #directive, #shape))
    }

    pub(super) fn expand_field_ref(&self, field: &Field) -> TokenStream {
        let flynn = &self.flynn;
        let ident = &field.ident;

        match field.field_ty {
            FieldTy::Mapped => quote!(#flynn::Field::field_ref(&self.#ident)),
            FieldTy::Ignored => quote!(#flynn::FieldRef::Opaque),
            FieldTy::SubDocument(wrapper) => {
                let value = expand_ref(flynn, ident, wrapper, quote!(#flynn::Serializable));
                quote!(#flynn::FieldRef::SubDocument(#value))
            }
            FieldTy::Encoded(wrapper) => {
                let value = expand_ref(flynn, ident, wrapper, quote!(#flynn::Encodable));
                quote!(#flynn::FieldRef::Encoded(#value))
            }
        }
    }

    pub(super) fn expand_field_mut(&self, field: &Field) -> TokenStream {
        let flynn = &self.flynn;
        let ident = &field.ident;

        match field.field_ty {
            FieldTy::Mapped => quote!(#flynn::Field::field_mut(&mut self.#ident)),
            FieldTy::Ignored => quote!(#flynn::FieldMut::Opaque),
            FieldTy::SubDocument(wrapper) => {
                let value = expand_mut(flynn, ident, wrapper);
                quote!(#flynn::FieldMut::SubDocument(#value))
            }
            FieldTy::Encoded(wrapper) => {
                let value = expand_mut(flynn, ident, wrapper);
                quote!(#flynn::FieldMut::Encoded(#value))
            }
        }
    }
}

/// `Option<&dyn Trait>` view of an opaque field.
fn expand_ref(
    flynn: &TokenStream,
    ident: &syn::Ident,
    wrapper: Wrapper,
    capability: TokenStream,
) -> TokenStream {
    match wrapper {
        Wrapper::Plain => quote!(#flynn::Option::Some(&self.#ident as &dyn #capability)),
        Wrapper::Option => {
            quote!(self.#ident.as_ref().map(|value| value as &dyn #capability))
        }
        Wrapper::OptionBox => {
            quote!(self.#ident.as_deref().map(|value| value as &dyn #capability))
        }
    }
}

/// Mutable reference to an opaque field, allocating it when absent.
fn expand_mut(flynn: &TokenStream, ident: &syn::Ident, wrapper: Wrapper) -> TokenStream {
    match wrapper {
        Wrapper::Plain => quote!(&mut self.#ident),
        Wrapper::Option => quote!(self.#ident.get_or_insert_with(#flynn::Default::default)),
        Wrapper::OptionBox => {
            quote!(&mut **self.#ident.get_or_insert_with(#flynn::Default::default))
        }
    }
}

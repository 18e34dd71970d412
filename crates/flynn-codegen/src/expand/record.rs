use super::Expand;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let flynn = &self.flynn;
        let ident = &self.record.ident;
        let name = Literal::string(&ident.to_string());
        let field_defs = self.record.fields.iter().map(|field| self.expand_field_def(field));

        quote! {
            impl #flynn::Record for #ident {
                fn record_type() -> #flynn::RecordType {
                    #flynn::RecordType::new::<Self>(
                        #name,
                        vec![ #( #field_defs, )* ],
                    )
                }
            }
        }
    }

    pub(super) fn expand_dyn_record_impl(&self) -> TokenStream {
        let flynn = &self.flynn;
        let ident = &self.record.ident;

        let indices: Vec<_> = self
            .record
            .fields
            .iter()
            .map(|field| Literal::usize_unsuffixed(field.index))
            .collect();
        let field_refs = self.record.fields.iter().map(|field| self.expand_field_ref(field));
        let field_muts = self.record.fields.iter().map(|field| self.expand_field_mut(field));

        quote! {
            impl #flynn::DynRecord for #ident {
                fn field(&self, index: usize) -> #flynn::Option<#flynn::FieldRef<'_>> {
                    match index {
                        #( #indices => #flynn::Option::Some(#field_refs), )*
                        _ => #flynn::Option::None,
                    }
                }

                fn field_mut(&mut self, index: usize) -> #flynn::Option<#flynn::FieldMut<'_>> {
                    match index {
                        #( #indices => #flynn::Option::Some(#field_muts), )*
                        _ => #flynn::Option::None,
                    }
                }
            }
        }
    }

    /// Lets the record be embedded in other records, directly, behind
    /// `Option<Box<_>>` or in a `Vec`.
    pub(super) fn expand_field_impl(&self) -> TokenStream {
        let flynn = &self.flynn;
        let ident = &self.record.ident;

        quote! {
            impl #flynn::Field for #ident {
                fn shape() -> #flynn::Shape {
                    #flynn::Shape::Record(<Self as #flynn::Record>::record_type)
                }

                fn field_ref(&self) -> #flynn::FieldRef<'_> {
                    #flynn::FieldRef::Record(self)
                }

                fn field_mut(&mut self) -> #flynn::FieldMut<'_> {
                    #flynn::FieldMut::Record(self)
                }
            }
        }
    }
}

mod fields;
mod record;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for flynn types
    flynn: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let dyn_record_impl = self.expand_dyn_record_impl();
        let field_impl = self.expand_field_impl();

        wrap_in_const(quote! {
            #record_impl
            #dyn_record_impl
            #field_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        flynn: quote!(_flynn::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use flynn as _flynn;
            #code
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(item: syn::ItemStruct) -> String {
        let record = Record::from_ast(&item).unwrap();
        super::record(&record).to_string()
    }

    #[test]
    fn wraps_impls_in_const() {
        let out = expand(syn::parse_quote! {
            struct Address {
                street: String,
            }
        });

        assert!(out.starts_with("const _"));
        assert!(out.contains("use flynn as _flynn"));
        assert!(out.contains("impl _flynn :: codegen_support :: Record for Address"));
        assert!(out.contains("impl _flynn :: codegen_support :: DynRecord for Address"));
        assert!(out.contains("impl _flynn :: codegen_support :: Field for Address"));
    }

    #[test]
    fn directives_are_passed_through() {
        let out = expand(syn::parse_quote! {
            struct Employee {
                #[flynn("ID:key")]
                id: i64,
            }
        });

        assert!(out.contains(r#""id" , "ID:key""#));
    }

    #[test]
    fn sub_document_accessors() {
        let out = expand(syn::parse_quote! {
            struct Employee {
                #[flynn(":sub")]
                tag: Option<Box<Tag>>,
            }
        });

        assert!(out.contains("as_deref"));
        assert!(out.contains("FieldMut :: SubDocument"));
        assert!(out.contains("Shape :: Opaque"));
    }
}

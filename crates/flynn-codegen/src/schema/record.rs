use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Record> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, index) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_keep_declaration_order() {
        let item: syn::ItemStruct = syn::parse_quote! {
            struct Employee {
                #[flynn("ID:key")]
                id: i64,
                name: String,
            }
        };

        let record = Record::from_ast(&item).unwrap();
        assert_eq!(record.ident, "Employee");
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.fields[1].index, 1);
        assert_eq!(record.fields[1].ident, "name");
    }

    #[test]
    fn tuple_struct_is_rejected() {
        let item: syn::ItemStruct = syn::parse_quote!(struct Pair(i64, String););
        let err = Record::from_ast(&item).unwrap_err();
        assert_eq!(err.to_string(), "record fields must be named");
    }

    #[test]
    fn generics_are_rejected() {
        let item: syn::ItemStruct = syn::parse_quote!(struct Wrapper<T> { value: T });
        let err = Record::from_ast(&item).unwrap_err();
        assert_eq!(err.to_string(), "record generics are not supported");
    }

    #[test]
    fn field_errors_are_combined() {
        let item: syn::ItemStruct = syn::parse_quote! {
            struct Broken {
                #[flynn(1)]
                a: i64,
                #[flynn(2)]
                b: i64,
            }
        };

        let err = Record::from_ast(&item).unwrap_err();
        assert_eq!(err.into_iter().count(), 2);
    }
}

/// Returns `T` when `ty` is `Option<T>`.
pub(super) fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    generic_inner(ty, "Option")
}

/// Returns `T` when `ty` is `Box<T>`.
pub(super) fn box_inner(ty: &syn::Type) -> Option<&syn::Type> {
    generic_inner(ty, "Box")
}

fn generic_inner<'a>(ty: &'a syn::Type, name: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    if path.qself.is_some() {
        return None;
    }

    let segment = path.path.segments.last()?;
    if segment.ident != name {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_of_box() {
        let ty: syn::Type = syn::parse_quote!(Option<Box<Tag>>);
        let inner = option_inner(&ty).unwrap();
        assert!(box_inner(inner).is_some());
    }

    #[test]
    fn qualified_option() {
        let ty: syn::Type = syn::parse_quote!(std::option::Option<Tag>);
        assert!(option_inner(&ty).is_some());
    }

    #[test]
    fn plain_type() {
        let ty: syn::Type = syn::parse_quote!(Tag);
        assert!(option_inner(&ty).is_none());
        assert!(box_inner(&ty).is_none());

        let ty: syn::Type = syn::parse_quote!(Vec<Tag>);
        assert!(option_inner(&ty).is_none());
    }
}

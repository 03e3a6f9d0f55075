use proc_macro_error::abort;

/// Returns the field holding the wrapped matcher: the only field of the
/// struct, or the field marked `#[delegate]` when there are several.
pub fn delegated_field(ident: &syn::Ident, fields: &syn::Fields) -> (syn::Member, syn::Type) {
    let all: Vec<&syn::Field> = fields.iter().collect();

    if all.is_empty() {
        abort!(ident, "#[derive(Delegate)] requires at least one field");
    }

    let marked: Vec<(usize, &syn::Field)> = all
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, field)| {
            field
                .attrs
                .iter()
                .any(|attr| attr.path.is_ident("delegate"))
        })
        .collect();

    let (index, field) = match (marked.as_slice(), all.as_slice()) {
        ([marked], _) => *marked,
        ([], [only]) => (0, *only),
        ([], _) => abort!(ident, "#[delegate] must mark the field holding the matcher"),
        _ => abort!(ident, "only one field may be marked #[delegate]"),
    };

    let member = match &field.ident {
        Some(name) => syn::Member::Named(name.clone()),
        None => syn::Member::Unnamed(syn::Index::from(index)),
    };

    (member, field.ty.clone())
}

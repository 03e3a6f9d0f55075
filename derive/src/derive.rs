use proc_macro2::TokenStream;
use proc_macro_error::abort;
use quote::quote;

use crate::helpers;

/// Returns tokens implementing `Matcher` for a struct by forwarding every
/// capability to its delegated field.
///
/// ```rust,ignore
/// impl<__T: ?Sized, ..> aliasrs::Matcher<__T> for Struct<..>
/// where
///     FieldTy: aliasrs::Matcher<__T>;
/// ```
pub fn delegate_impl(input: syn::DeriveInput) -> TokenStream {
    let syn::DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;
    let fields = match data {
        syn::Data::Struct(syn::DataStruct { fields, .. }) => fields,
        _ => abort!(ident, "#[derive(Delegate)] requires a struct"),
    };
    let (member, field_ty) = helpers::delegated_field(&ident, &fields);

    let mut augmented = generics.clone();

    augmented.params.push(syn::parse_quote! { __T: ?Sized });
    augmented
        .make_where_clause()
        .predicates
        .push(syn::parse_quote! { #field_ty: aliasrs::Matcher<__T> });

    let (_, ty_generics, _) = generics.split_for_impl();
    let (impl_generics, _, where_clause) = augmented.split_for_impl();

    quote! {
        impl #impl_generics aliasrs::Matcher<__T> for #ident #ty_generics #where_clause {
            fn supports(&self, capability: aliasrs::Capability) -> bool {
                aliasrs::Matcher::supports(&self.#member, capability)
            }

            fn matches(
                &self,
                actual: &__T,
            ) -> std::result::Result<bool, aliasrs::CapabilityError> {
                aliasrs::Matcher::matches(&self.#member, actual)
            }

            fn does_not_match(
                &self,
                actual: &__T,
            ) -> std::result::Result<bool, aliasrs::CapabilityError> {
                aliasrs::Matcher::does_not_match(&self.#member, actual)
            }

            fn description(
                &self,
            ) -> std::result::Result<std::string::String, aliasrs::CapabilityError> {
                aliasrs::Matcher::description(&self.#member)
            }

            fn failure_message(
                &self,
            ) -> std::result::Result<std::string::String, aliasrs::CapabilityError> {
                aliasrs::Matcher::failure_message(&self.#member)
            }

            fn failure_message_when_negated(
                &self,
            ) -> std::result::Result<std::string::String, aliasrs::CapabilityError> {
                aliasrs::Matcher::failure_message_when_negated(&self.#member)
            }

            fn matches_operator(
                &self,
                operator: aliasrs::Operator,
                actual: &__T,
            ) -> std::result::Result<bool, aliasrs::CapabilityError> {
                aliasrs::Matcher::matches_operator(&self.#member, operator, actual)
            }

            fn configure(
                &self,
                name: &str,
                args: &[aliasrs::Argument],
            ) -> std::result::Result<aliasrs::Configured<__T>, aliasrs::CapabilityError>
            where
                __T: 'static,
            {
                aliasrs::Matcher::configure(&self.#member, name, args)
            }
        }
    }
}

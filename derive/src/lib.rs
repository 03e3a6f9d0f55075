use proc_macro_error::proc_macro_error;
use syn::parse_macro_input;

mod derive;
pub(crate) mod helpers;

/// See [`aliasrs::Delegate`].
#[proc_macro_derive(Delegate, attributes(delegate))]
#[proc_macro_error]
pub fn derive_delegate(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    derive::delegate_impl(input).into()
}

use proc_macro2::TokenStream;
use syn::{Type, TypeParam};

/// An empty token stream, for optional pieces of generated code.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Whether `ty` mentions one of `params` anywhere in its tokens.
pub(crate) fn mentions_param<'a>(
    ty: &Type,
    mut params: impl Iterator<Item = &'a TypeParam>,
) -> bool {
    let tokens = quote::ToTokens::to_token_stream(ty);
    params.any(|param| contains_ident(tokens.clone(), &param.ident))
}

fn contains_ident(tokens: TokenStream, ident: &syn::Ident) -> bool {
    tokens.into_iter().any(|tree| match tree {
        proc_macro2::TokenTree::Ident(found) => found == *ident,
        proc_macro2::TokenTree::Group(group) => contains_ident(group.stream(), ident),
        _ => false,
    })
}

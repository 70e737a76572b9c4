use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, LitStr, Path};

use super::TypeAttributes;

/// Type level data shared by every kind of generated impl.
pub(crate) struct FieldsMeta {
    attrs: TypeAttributes,
    type_path: Path,
    type_name: String,
    generics: Generics,
    /// Extra where-predicates, e.g. `T: Reflect` for member types.
    bounds: Vec<TokenStream>,
    fw_fields_path: Path,
}

impl FieldsMeta {
    pub fn new(attrs: TypeAttributes, type_path: Path, generics: Generics) -> Self {
        let type_name = type_path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_default();
        Self {
            attrs,
            type_path,
            type_name,
            generics,
            bounds: Vec::new(),
            fw_fields_path: crate::path::fw_fields(),
        }
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn type_path(&self) -> &Path {
        &self.type_path
    }

    /// Access the cached path of `fw_fields`.
    #[inline]
    pub fn fw_fields_path(&self) -> &Path {
        &self.fw_fields_path
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        &self.generics
    }

    /// Add a where-predicate to every generated impl.
    pub fn push_bound(&mut self, bound: TokenStream) {
        self.bounds.push(bound);
    }

    /// An expression of type `&'static str` naming the type.
    ///
    /// Non-generic types use their identifier; generic types ask for the
    /// short name of the instantiation at runtime.
    pub fn type_name_tokens(&self) -> TokenStream {
        if self.is_generic() {
            let macro_exports_ = crate::path::macro_exports_(&self.fw_fields_path);
            quote!(#macro_exports_::short_type_name::<Self>())
        } else {
            LitStr::new(&self.type_name, proc_macro2::Span::call_site()).to_token_stream()
        }
    }

    /// The expression producing the type's default value.
    ///
    /// `fallback` is used when no `default = path` factory was given.
    pub fn default_tokens(&self, fallback: TokenStream) -> TokenStream {
        match &self.attrs.default {
            Some(factory) => quote!(#factory()),
            None => fallback,
        }
    }

    /// Split generics for an impl block.
    ///
    /// Every type parameter is bounded by `'static` (all reflected types are
    /// `Any`), followed by the extra bounds collected with [`Self::push_bound`].
    pub fn split_generics(&self) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut predicates: Vec<TokenStream> = match where_clause {
            Some(clause) => clause.predicates.iter().map(ToTokens::to_token_stream).collect(),
            None => Vec::new(),
        };
        predicates.extend(self.generics.type_params().map(|param| {
            let ident = &param.ident;
            quote!(#ident: 'static)
        }));
        predicates.extend(self.bounds.iter().cloned());

        let where_clause = if predicates.is_empty() {
            crate::utils::empty()
        } else {
            quote!(where #(#predicates,)*)
        };

        (
            impl_generics.to_token_stream(),
            ty_generics.to_token_stream(),
            where_clause,
        )
    }
}

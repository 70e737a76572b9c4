use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{FieldsRecord, RecordMember};

/// Implement `Reflect`, `Record` and `Fields` for a record.
pub(crate) fn impl_record(record: &FieldsRecord) -> TokenStream {
    let meta = &record.meta;
    let fw_fields_path = meta.fw_fields_path();

    let reflect_ = crate::path::reflect_(fw_fields_path);
    let record_ = crate::path::record_(fw_fields_path);
    let fields_ = crate::path::fields_(fw_fields_path);
    let record_info_ = crate::path::record_info_(fw_fields_path);

    let type_path = meta.type_path();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    let reflect_tokens =
        super::impl_trait_reflect(meta, "Record", quote!(<Self as ::core::default::Default>::default()));
    let operator_tokens = super::impl_operators(meta);

    let info_tokens = get_fields_info_tokens(record);
    let field_at_tokens = get_field_at_tokens(record, false);
    let field_at_mut_tokens = get_field_at_tokens(record, true);

    quote! {
        #reflect_tokens

        impl #impl_generics #record_ for #type_path #ty_generics #where_clause {
            #[inline]
            fn record_info(&self) -> &'static #record_info_ {
                <Self as #fields_>::fields_info()
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                #field_at_tokens
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                #field_at_mut_tokens
            }

            #[inline]
            fn as_record(&self) -> &dyn #record_ {
                self
            }
        }

        impl #impl_generics #fields_ for #type_path #ty_generics #where_clause {
            #info_tokens
        }

        #operator_tokens
    }
}

/// The body of `Fields::fields_info`.
///
/// Non-generic records cache their layout in an `InfoCell`; generic records
/// share a `GenericInfoCell` keyed by the instantiation.
fn get_fields_info_tokens(record: &FieldsRecord) -> TokenStream {
    let meta = &record.meta;
    let fw_fields_path = meta.fw_fields_path();
    let macro_exports_ = crate::path::macro_exports_(fw_fields_path);
    let record_info_ = crate::path::record_info_(fw_fields_path);

    let pushes: Vec<TokenStream> = record
        .active_members()
        .map(|member| member.to_info_tokens(meta))
        .collect();
    let capacity = pushes.len();
    let binding = if pushes.is_empty() {
        quote!(let fields)
    } else {
        quote!(let mut fields)
    };

    let type_name = meta.type_name_tokens();
    let precision = match &meta.attrs().precision {
        Some(digits) => quote!(.with_precision(::core::option::Option::Some(#digits))),
        None => crate::utils::empty(),
    };

    let build = quote! {
        || {
            #binding = #macro_exports_::Vec::with_capacity(#capacity);
            #(#pushes)*
            #record_info_::new(#type_name, fields) #precision
        }
    };

    if meta.is_generic() {
        quote! {
            fn fields_info() -> &'static #record_info_ {
                static CELL: #macro_exports_::GenericInfoCell<#record_info_> =
                    #macro_exports_::GenericInfoCell::new();
                CELL.get_or_insert::<Self>(#build)
            }
        }
    } else {
        quote! {
            fn fields_info() -> &'static #record_info_ {
                static CELL: #macro_exports_::InfoCell<#record_info_> =
                    #macro_exports_::InfoCell::new();
                CELL.get_or_init(#build)
            }
        }
    }
}

/// The body of `Record::field_at` or `Record::field_at_mut`.
///
/// Without flattened members every index is known at compile time and a
/// `match` suffices. A flattened member spans as many indices as its record
/// has members, so the index is walked down member by member instead.
fn get_field_at_tokens(record: &FieldsRecord, mutable: bool) -> TokenStream {
    let meta = &record.meta;
    let fw_fields_path = meta.fw_fields_path();
    let record_ = crate::path::record_(fw_fields_path);
    let macro_exports_ = crate::path::macro_exports_(fw_fields_path);

    let borrow = |member: &RecordMember| {
        let member = &member.member;
        match mutable {
            true => quote!(&mut self.#member),
            false => quote!(&self.#member),
        }
    };

    let members: Vec<&RecordMember> = record.active_members().collect();

    if members.is_empty() {
        return quote! {
            let _ = index;
            ::core::option::Option::None
        };
    }

    if !record.has_flattened() {
        let arms = members.iter().enumerate().map(|(index, member)| {
            let borrow = borrow(member);
            quote!(#index => ::core::option::Option::Some(#borrow),)
        });
        return quote! {
            match index {
                #(#arms)*
                _ => ::core::option::Option::None,
            }
        };
    }

    let delegate = match mutable {
        true => quote!(field_at_mut),
        false => quote!(field_at),
    };
    let steps = members.iter().map(|member| {
        let borrow = borrow(member);
        if member.is_flattened() {
            let name = &member.member;
            quote! {
                let len = #macro_exports_::flattened(|r: &Self| &r.#name).len();
                if index < len {
                    return #record_::#delegate(#borrow, index);
                }
                index -= len;
            }
        } else {
            quote! {
                if index == 0 {
                    return ::core::option::Option::Some(#borrow);
                }
                index -= 1;
            }
        }
    });

    quote! {
        let mut index = index;
        #(#steps)*
        let _ = index;
        ::core::option::Option::None
    }
}

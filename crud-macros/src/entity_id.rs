use crate::args::MacroArgs;
use crate::derive_utils::DeriveSet;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Item, Result, parse_macro_input};

/// #[entity_id] 宏实现
/// 仅支持单字段 tuple struct，内部类型需实现 `EntityId`（如 `Uuid`、`String`）：
/// - 合并派生：Clone, Debug（可关闭）, Serialize, Deserialize, PartialEq, Eq, Hash
/// - 提供 new(value)、Display、FromStr、AsRef、From 等便捷实现
/// - 实现 `::crud_domain::entity::EntityId`，生成逻辑委托给内部类型
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let EntityIdArgs(cfg) = parse_macro_input!(attr as EntityIdArgs);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f.unnamed[0].ty.clone(),
        syn::Fields::Unnamed(f) => {
            return syn::Error::new(
                f.span(),
                "#[entity_id] requires a tuple struct with exactly one field",
            )
            .to_compile_error()
            .into();
        }
        _ => {
            return syn::Error::new(
                st.span(),
                "#[entity_id] supports only tuple struct, e.g., struct X(Uuid);",
            )
            .to_compile_error()
            .into();
        }
    };

    DeriveSet::new()
        .with(syn::parse_quote!(Clone))
        .with_if(cfg.derive_debug(), syn::parse_quote!(Debug))
        .with(syn::parse_quote!(serde::Serialize))
        .with(syn::parse_quote!(serde::Deserialize))
        .with(syn::parse_quote!(PartialEq))
        .with(syn::parse_quote!(Eq))
        .with(syn::parse_quote!(Hash))
        .apply(&mut st.attrs);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let out = quote! {
        #st

        impl #impl_generics #ident #ty_generics #where_clause {
            pub fn new(value: #inner_ty) -> Self { Self(value) }

            pub fn into_inner(self) -> #inner_ty { self.0 }
        }

        impl #impl_generics ::crud_domain::entity::EntityId for #ident #ty_generics #where_clause {
            fn generate() -> Self {
                Self(<#inner_ty as ::crud_domain::entity::EntityId>::generate())
            }
        }

        impl #impl_generics ::std::str::FromStr for #ident #ty_generics #where_clause {
            type Err = <#inner_ty as ::std::str::FromStr>::Err;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let inner: #inner_ty = s.parse()?;
                ::std::result::Result::Ok(Self(inner))
            }
        }

        impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl #impl_generics ::core::convert::AsRef<#inner_ty> for #ident #ty_generics #where_clause {
            fn as_ref(&self) -> &#inner_ty { &self.0 }
        }

        impl #impl_generics ::core::convert::From<#ident #ty_generics> for #inner_ty #where_clause {
            fn from(value: #ident #ty_generics) -> Self { value.0 }
        }

        impl #impl_generics ::core::convert::From<#inner_ty> for #ident #ty_generics #where_clause {
            fn from(value: #inner_ty) -> Self { Self(value) }
        }
    };

    TokenStream::from(out)
}

struct EntityIdArgs(MacroArgs);

impl Parse for EntityIdArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        MacroArgs::parse_with(input, false).map(EntityIdArgs)
    }
}

use crate::args::MacroArgs;
use crate::derive_utils::DeriveSet;
use crate::field_utils::ensure_leading_fields;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Parser};
use syn::spanned::Spanned;
use syn::{Field, Item, Result, parse_macro_input};

/// #[entity] 宏实现
/// - 若缺失则注入字段：`id: IdType`、`lifecycle: Lifecycle`（`serde(flatten)`），并置于字段最前；
///   注入字段的可见性与结构体一致
/// - 合并派生：Debug（可关闭）、Clone、Serialize、Deserialize
/// - 自动实现 `::crud_domain::entity::Entity`（id/lifecycle/lifecycle_mut）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let EntityArgs(cfg) = parse_macro_input!(attr as EntityArgs);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "#[entity] only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let vis = &st.vis;
    let id_type = cfg
        .id_ty
        .clone()
        .unwrap_or_else(|| syn::parse_quote! { String });

    let required = Field::parse_named
        .parse2(quote! { #vis id: #id_type })
        .and_then(|id| {
            let lifecycle = Field::parse_named.parse2(quote! {
                #[serde(flatten)]
                #vis lifecycle: ::crud_domain::lifecycle::Lifecycle
            })?;
            Ok(vec![id, lifecycle])
        });
    let required = match required {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };
    ensure_leading_fields(fields_named, required);

    // 若用户自定义了 id 字段，以其类型为准
    let id_type = fields_named
        .named
        .first()
        .map(|f| f.ty.clone())
        .unwrap_or(id_type);

    DeriveSet::new()
        .with_if(cfg.derive_debug(), syn::parse_quote!(Debug))
        .with(syn::parse_quote!(Clone))
        .with(syn::parse_quote!(serde::Serialize))
        .with(syn::parse_quote!(serde::Deserialize))
        .apply(&mut st.attrs);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let expanded = quote! {
        #st

        impl #impl_generics ::crud_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Id = #id_type;

            fn id(&self) -> &Self::Id { &self.id }

            fn lifecycle(&self) -> &::crud_domain::lifecycle::Lifecycle { &self.lifecycle }

            fn lifecycle_mut(&mut self) -> &mut ::crud_domain::lifecycle::Lifecycle {
                &mut self.lifecycle
            }
        }
    };

    TokenStream::from(expanded)
}

struct EntityArgs(MacroArgs);

impl Parse for EntityArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        MacroArgs::parse_with(input, true).map(EntityArgs)
    }
}

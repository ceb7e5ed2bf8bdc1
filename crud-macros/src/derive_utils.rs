use quote::ToTokens;
use std::collections::HashSet;
use syn::{Attribute, Path, Token, punctuated::Punctuated};

/// 宏要求的派生集合，与用户已有的 derive 合并后写回结构体
pub(crate) struct DeriveSet {
    paths: Vec<Path>,
    seen: HashSet<String>,
}

impl DeriveSet {
    pub(crate) fn new() -> Self {
        Self {
            paths: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub(crate) fn with(mut self, path: Path) -> Self {
        self.push(path);
        self
    }

    pub(crate) fn with_if(self, cond: bool, path: Path) -> Self {
        if cond { self.with(path) } else { self }
    }

    fn push(&mut self, path: Path) {
        if self.seen.insert(derive_key(&path)) {
            self.paths.push(path);
        }
    }

    /// 吸收 attrs 中已有的 derive（去重），以单个 `#[derive(..)]` 置于最前
    pub(crate) fn apply(mut self, attrs: &mut Vec<Attribute>) {
        let mut retained = Vec::with_capacity(attrs.len());
        for attr in attrs.drain(..) {
            if !attr.path().is_ident("derive") {
                retained.push(attr);
                continue;
            }
            match attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
                Ok(list) => list.into_iter().for_each(|p| self.push(p)),
                Err(_) => retained.push(attr),
            }
        }

        let paths = &self.paths;
        let merged: Attribute = syn::parse_quote!(#[derive(#(#paths),*)]);
        *attrs = std::iter::once(merged).chain(retained).collect();
    }
}

// 归一化 derive 的 key，避免 Serialize/serde::Serialize 重复
fn derive_key(p: &Path) -> String {
    match p.segments.last() {
        Some(last) => {
            let ident = last.ident.to_string();
            match ident.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{ident}"),
                _ => ident,
            }
        }
        None => p.to_token_stream().to_string(),
    }
}

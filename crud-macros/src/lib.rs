//! CRUD 过程宏（crud-macros）
//!
//! - `#[entity]`：为具名字段结构体注入标识与生命周期字段，并实现 `Entity`；
//! - `#[entity_id]`：为单字段元组结构体生成强类型标识。
//!
use proc_macro::TokenStream;

mod args;
mod derive_utils;
mod entity;
mod entity_id;
mod field_utils;

/// 实体宏
///
/// 参数：`#[entity(id = IdType, debug = true|false)]`
/// - `id` 默认 `String`
/// - `debug` 默认 `true`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体标识宏
///
/// 参数：`#[entity_id(debug = true|false)]`，`debug` 默认 `true`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

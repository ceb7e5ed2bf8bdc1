use syn::{Field, FieldsNamed, Token, punctuated::Punctuated};

fn field_name(f: &Field) -> Option<String> {
    f.ident.as_ref().map(|i| i.to_string())
}

/// 将必需字段按给定顺序放到最前
///
/// 同名字段已存在时复用用户的定义（保留其属性与可见性），否则插入 `required` 中的定义；
/// 其余字段保持原有相对顺序。
pub(crate) fn ensure_leading_fields(fields_named: &mut FieldsNamed, required: Vec<Field>) {
    let mut rest: Vec<Field> = fields_named.named.iter().cloned().collect();
    let mut leading: Punctuated<Field, Token![,]> = Punctuated::new();

    for field in required {
        let name = field_name(&field);
        match rest.iter().position(|f| field_name(f) == name) {
            Some(pos) => leading.push(rest.remove(pos)),
            None => leading.push(field),
        }
    }
    leading.extend(rest);

    fields_named.named = leading;
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::parse::Parser;

    fn names(fields: &FieldsNamed) -> Vec<String> {
        fields.named.iter().filter_map(field_name).collect()
    }

    #[test]
    fn inserts_missing_fields_first() {
        let mut fields: FieldsNamed = syn::parse_quote!({ name: String, url: String });
        ensure_leading_fields(
            &mut fields,
            vec![
                Field::parse_named.parse2(quote::quote!(pub id: String)).unwrap(),
                Field::parse_named.parse2(quote::quote!(pub lifecycle: u8)).unwrap(),
            ],
        );
        assert_eq!(names(&fields), ["id", "lifecycle", "name", "url"]);
    }

    #[test]
    fn keeps_user_definition_but_moves_it() {
        let mut fields: FieldsNamed = syn::parse_quote!({ name: String, id: u64 });
        ensure_leading_fields(
            &mut fields,
            vec![Field::parse_named.parse2(quote::quote!(id: String)).unwrap()],
        );
        assert_eq!(names(&fields), ["id", "name"]);
        let ty = fields.named[0].ty.to_token_stream().to_string();
        assert_eq!(ty, "u64");
    }
}

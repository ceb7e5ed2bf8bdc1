use syn::{
    Expr, ExprLit, Ident, Lit, Result, Token, Type,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
};

/// 宏参数：`id = Type`、`debug = bool`
///
/// 各宏通过 `allow_id` 声明是否接受 `id`。
#[derive(Default)]
pub(crate) struct MacroArgs {
    pub(crate) id_ty: Option<Type>,
    pub(crate) derive_debug: Option<bool>,
}

impl MacroArgs {
    pub(crate) fn derive_debug(&self) -> bool {
        self.derive_debug.unwrap_or(true)
    }

    pub(crate) fn parse_with(input: ParseStream, allow_id: bool) -> Result<Self> {
        let mut args = MacroArgs::default();
        if input.is_empty() {
            return Ok(args);
        }

        let elems = Punctuated::<ArgElem, Token![,]>::parse_terminated(input)?;
        for elem in elems {
            match elem {
                ArgElem::Id(key, _) if !allow_id => {
                    return Err(syn::Error::new(
                        key.span(),
                        "unknown key in attribute; expected 'debug'",
                    ));
                }
                ArgElem::Id(key, ty) => {
                    if args.id_ty.is_some() {
                        return Err(syn::Error::new(key.span(), "duplicate key 'id' in attribute"));
                    }
                    args.id_ty = Some(*ty);
                }
                ArgElem::Debug(key, b) => {
                    if args.derive_debug.is_some() {
                        return Err(syn::Error::new(
                            key.span(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    args.derive_debug = Some(b);
                }
            }
        }
        Ok(args)
    }
}

enum ArgElem {
    Id(Ident, Box<Type>),
    Debug(Ident, bool),
}

impl Parse for ArgElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        if key == "id" {
            let ty: Type = input.parse()?;
            Ok(ArgElem::Id(key, Box::new(ty)))
        } else if key == "debug" {
            match input.parse::<Expr>()? {
                Expr::Lit(ExprLit {
                    lit: Lit::Bool(b), ..
                }) => Ok(ArgElem::Debug(key, b.value())),
                other => Err(syn::Error::new(
                    other.span(),
                    "expected boolean literal for 'debug'",
                )),
            }
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'id' or 'debug'",
            ))
        }
    }
}

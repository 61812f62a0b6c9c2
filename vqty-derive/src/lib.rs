//! Derive macro implementation used by `vqty-core`.
//!
//! `vqty-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`,
//! `crate::Ratio` and `crate::Quantity`, so it is intended to be used by `vqty-core` (or by crates that expose an
//! identical crate-root API).
//!
//! Most users should depend on `vqty` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`, including the unit-composition associated types
//! - `core::fmt::Display for crate::Quantity<MyUnit, R>` (formats as `<value> <symbol>`)
//! - the unit-tag operators (`MyUnit / Other`, `5 * MyUnit`, `vector * MyUnit`) through `crate::impl_unit_algebra!`
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = SomeDim`: dimension marker type
//! - `ratio = 1000`: exact conversion ratio to the coherent unit of the dimension. Accepts an integer literal,
//!   a quotient of two integer literals (`1 / 1000`), or any expression of type `crate::Ratio`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, BinOp, Data, DeriveInput, Expr, ExprBinary, ExprLit, Fields,
    Ident, Lit, LitStr, Token,
};

/// Derive `crate::Unit`, a `Display` impl for `crate::Quantity<ThisUnit, R>` and the unit-tag operators.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`, and the
/// type must be a unit struct (it is used as a value: `3 * Meter`).
///
/// This macro is intended for use by `vqty-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "`Unit` can only be derived for unit structs",
            ))
        }
    }

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = ratio_tokens(&unit_attr.ratio)?;

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: crate::Ratio = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;

            type Product<R: crate::Unit> = <R as crate::Unit>::LeftProduct<Self>;
            type Quotient<R: crate::Unit> = <R as crate::Unit>::LeftQuotient<Self>;
            type LeftProduct<L: crate::Unit> = crate::Prod<L, Self>;
            type LeftQuotient<L: crate::Unit> = crate::Per<L, Self>;
        }

        impl<R: ::core::fmt::Display> ::core::fmt::Display for crate::Quantity<#name, R> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self.value_ref(), f)?;
                write!(f, " {}", <#name as crate::Unit>::SYMBOL)
            }
        }

        crate::impl_unit_algebra!(#name);
    };

    Ok(expanded)
}

/// Lowers the `ratio` attribute to a `crate::Ratio` constant expression.
fn ratio_tokens(ratio: &Expr) -> syn::Result<TokenStream2> {
    match ratio {
        // `macro_rules!` wraps forwarded `$x:expr` fragments in an invisible group.
        Expr::Group(group) => ratio_tokens(&group.expr),
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => Ok(quote! { crate::Ratio::integer(#int) }),
        Expr::Lit(ExprLit {
            lit: Lit::Float(float),
            ..
        }) => Err(syn::Error::new(
            float.span(),
            "float ratios are inexact; write an integer or `numerator / denominator`",
        )),
        Expr::Binary(ExprBinary {
            left,
            op: BinOp::Div(_),
            right,
            ..
        }) if is_int_literal(left) && is_int_literal(right) => {
            Ok(quote! { crate::Ratio::new(#left, #right) })
        }
        other => Ok(quote! { #other }),
    }
}

fn is_int_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Group(group) => is_int_literal(&group.expr),
        Expr::Lit(ExprLit {
            lit: Lit::Int(_), ..
        }) => true,
        _ => false,
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Expr,
    ratio: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

// Boolean expression parsing for concept checks

use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Concept(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) && !input.peek(Token![||]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) && !input.peek(Token![&&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Concept(ty))
    }
}

// =============================================================================
// BoolExpr Utilities
// =============================================================================

/// Render an expression fully parenthesized.
#[cfg(test)]
fn bool_expr_to_string(expr: &BoolExpr) -> String {
    match expr {
        BoolExpr::Concept(ty) => quote::quote!(#ty).to_string().replace(' ', ""),
        BoolExpr::And(lhs, rhs) => {
            format!("({} & {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Or(lhs, rhs) => {
            format!("({} | {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Not(operand) => format!("!{}", bool_expr_to_string(operand)),
    }
}

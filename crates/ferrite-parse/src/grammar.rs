use ferrite_syntax::SyntaxKind::{self, *};
use ferrite_syntax::SyntaxSet;

use crate::parser::Parser;

mod exprs;
pub(crate) mod items;
mod types;

pub(crate) const ITEM_FIRST: SyntaxSet = SyntaxSet::new([
    FN_KW, STRUCT_KW, ENUM_KW, IMPL_KW, TRAIT_KW, MOD_KW, USE_KW, CONST_KW, STATIC_KW, PUB_KW,
]);

pub(crate) const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    CHAR,
    TRUE_KW,
    FALSE_KW,
    IDENT,
    LIFETIME,
    L_PAREN,
    L_BRACE,
    IF_KW,
    LOOP_KW,
    WHILE_KW,
    FOR_KW,
    BREAK_KW,
    CONTINUE_KW,
    RETURN_KW,
    MINUS,
    BANG,
    STAR,
    AMP,
]);

pub(crate) fn name(p: &mut Parser, recovery: &SyntaxSet) {
    match p.peek_kind() {
        IDENT => {
            let m = p.start();
            p.advance();
            m.complete(p, NAME);
        }
        _ => p.error_recover("expected a name", recovery),
    }
}

pub(crate) fn delimited(
    p: &mut Parser<'_>,
    bra: SyntaxKind,
    ket: SyntaxKind,
    delim: SyntaxKind,
    unexpected_delim_message: &'static str,
    first_set: &SyntaxSet,
    mut parser: impl FnMut(&mut Parser<'_>) -> bool,
) {
    debug_assert_eq!(p.peek_kind(), bra);
    p.advance();

    while !p.at(ket) && !p.at(EOF) {
        if p.at(delim) {
            let m = p.start();
            p.error(unexpected_delim_message);
            p.advance();
            m.complete(p, ERROR);
            continue;
        }

        if !parser(p) {
            break;
        }

        if !p.eat(delim) {
            if first_set.contains(p.peek_kind()) {
                p.expect(delim);
            } else {
                break;
            }
        }
    }

    p.expect(ket);
}

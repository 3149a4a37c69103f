use ferrite_syntax::SyntaxKind::*;
use ferrite_syntax::SyntaxSet;

use crate::parser::{CompletedMarker, Parser};

pub(crate) const TYPE_FIRST: SyntaxSet = SyntaxSet::new([IDENT, AMP, L_PAREN]);

const TYPE_RECOVERY: SyntaxSet =
    SyntaxSet::new([L_BRACE, R_BRACE, L_PAREN, R_PAREN, SEMICOLON, COMMA, GT, EQ, FOR_KW]);

pub(crate) fn type_(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        IDENT => {
            let m = p.start();
            path(p);
            m.complete(p, PATH_TYPE).into()
        }
        AMP => {
            let m = p.start();
            p.advance();
            p.eat(LIFETIME);
            p.eat(MUT_KW);
            type_(p);
            m.complete(p, REF_TYPE).into()
        }
        L_PAREN => {
            let m = p.start();
            super::delimited(p, L_PAREN, R_PAREN, COMMA, "expected a type", &TYPE_FIRST, |p| {
                type_(p).is_some()
            });
            m.complete(p, TUPLE_TYPE).into()
        }
        _ => {
            p.error_recover("expected a type", &TYPE_RECOVERY);
            None
        }
    }
}

pub(crate) fn path(p: &mut Parser) {
    debug_assert_eq!(p.peek_kind(), IDENT);

    let m = p.start();
    path_segment(p);
    while p.at(COLON2) {
        p.advance();
        path_segment(p);
    }
    m.complete(p, PATH);
}

fn path_segment(p: &mut Parser) {
    if p.at(IDENT) {
        let m = p.start();
        p.advance();
        m.complete(p, PATH_SEGMENT);
    } else {
        p.error("expected an identifier");
    }
}

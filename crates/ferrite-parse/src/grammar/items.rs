use ferrite_syntax::SyntaxKind::*;
use ferrite_syntax::SyntaxSet;

use super::{ITEM_FIRST, delimited, exprs, name, types};
use crate::parser::{Marker, Parser};

pub(crate) fn source_file(p: &mut Parser) {
    let m = p.start();

    while !p.at(EOF) {
        if p.at_any(&ITEM_FIRST) {
            p.clear_recovering();
            item(p);
        } else {
            exprs::stmt(p);
        }
    }

    p.flush_trivia();
    m.complete(p, SOURCE_FILE);
}

pub(crate) fn item(p: &mut Parser) {
    let m = p.start();
    p.eat(PUB_KW);

    match p.peek_kind() {
        FN_KW => fn_item(p, m),
        STRUCT_KW => struct_item(p, m),
        ENUM_KW => enum_item(p, m),
        IMPL_KW => impl_item(p, m),
        TRAIT_KW => trait_item(p, m),
        MOD_KW => mod_item(p, m),
        USE_KW => use_item(p, m),
        CONST_KW => const_item(p, m),
        STATIC_KW => static_item(p, m),
        _ => {
            p.error("expected an item after `pub`");
            m.complete(p, ERROR);
        }
    }
}

fn fn_item(p: &mut Parser, m: Marker) {
    p.advance();
    name(p, &SyntaxSet::new([LT, L_PAREN, ARROW, L_BRACE, SEMICOLON]));
    generic_param_list(p);

    if p.at(L_PAREN) {
        param_list(p);
    } else {
        p.error("expected function parameters");
    }

    if p.at(ARROW) {
        ret_type(p);
    }

    if p.at(L_BRACE) {
        exprs::block(p);
    } else if !p.eat(SEMICOLON) {
        p.error("expected a function body");
    }

    m.complete(p, FN_ITEM);
}

fn generic_param_list(p: &mut Parser) {
    if !p.at(LT) {
        return;
    }

    let m = p.start();
    delimited(
        p,
        LT,
        GT,
        COMMA,
        "expected a generic parameter",
        &SyntaxSet::new([IDENT, LIFETIME]),
        generic_param,
    );
    m.complete(p, GENERIC_PARAM_LIST);
}

fn generic_param(p: &mut Parser) -> bool {
    match p.peek_kind() {
        IDENT => {
            let m = p.start();
            name(p, &SyntaxSet::EMPTY);
            m.complete(p, TYPE_PARAM);
            true
        }
        LIFETIME => {
            let m = p.start();
            p.advance();
            m.complete(p, LIFETIME_PARAM);
            true
        }
        _ => false,
    }
}

fn param_list(p: &mut Parser) {
    let m = p.start();
    p.advance();

    while !matches!(p.peek_kind(), R_PAREN | EOF) {
        if !matches!(p.peek_kind(), IDENT | MUT_KW) {
            p.error("expected a parameter name");
            if p.eat(COMMA) {
                continue;
            }
            break;
        }

        param(p);

        if !p.eat(COMMA) {
            if matches!(p.peek_kind(), IDENT | MUT_KW) {
                p.expect(COMMA);
            } else {
                break;
            }
        }
    }

    p.expect(R_PAREN);
    m.complete(p, PARAM_LIST);
}

fn param(p: &mut Parser) {
    let m = p.start();
    p.eat(MUT_KW);
    name(p, &SyntaxSet::EMPTY);

    if p.eat(COLON) {
        types::type_(p);
    } else {
        p.error("expected a type for the parameter");
    }

    m.complete(p, PARAM);
}

fn ret_type(p: &mut Parser) {
    let m = p.start();
    p.advance();
    types::type_(p);
    m.complete(p, RET_TYPE);
}

fn struct_item(p: &mut Parser, m: Marker) {
    p.advance();
    name(p, &SyntaxSet::new([LT, L_BRACE, SEMICOLON]));
    generic_param_list(p);

    if p.at(L_BRACE) {
        record_field_list(p);
    } else {
        p.expect(SEMICOLON);
    }

    m.complete(p, STRUCT_ITEM);
}

fn record_field_list(p: &mut Parser) {
    let m = p.start();
    delimited(
        p,
        L_BRACE,
        R_BRACE,
        COMMA,
        "expected a field",
        &SyntaxSet::new([IDENT, PUB_KW]),
        record_field,
    );
    m.complete(p, RECORD_FIELD_LIST);
}

fn record_field(p: &mut Parser) -> bool {
    if !matches!(p.peek_kind(), IDENT | PUB_KW) {
        return false;
    }

    let m = p.start();
    p.eat(PUB_KW);
    name(p, &SyntaxSet::new([COLON, COMMA, R_BRACE]));

    if p.eat(COLON) {
        types::type_(p);
    } else {
        p.error("expected a type for the field");
    }

    m.complete(p, RECORD_FIELD);
    true
}

fn enum_item(p: &mut Parser, m: Marker) {
    p.advance();
    name(p, &SyntaxSet::new([LT, L_BRACE]));
    generic_param_list(p);

    if p.at(L_BRACE) {
        variant_list(p);
    } else {
        p.error("expected `{`");
    }

    m.complete(p, ENUM_ITEM);
}

fn variant_list(p: &mut Parser) {
    let m = p.start();
    delimited(p, L_BRACE, R_BRACE, COMMA, "expected a variant", &SyntaxSet::new([IDENT]), variant);
    m.complete(p, VARIANT_LIST);
}

fn variant(p: &mut Parser) -> bool {
    if !p.at(IDENT) {
        return false;
    }

    let m = p.start();
    name(p, &SyntaxSet::EMPTY);
    m.complete(p, VARIANT);
    true
}

fn impl_item(p: &mut Parser, m: Marker) {
    p.advance();
    generic_param_list(p);

    // `impl Type { .. }` or `impl Trait for Type { .. }`. Which one the
    // first type was is only known once `for` shows up, so it gets wrapped
    // into a TRAIT_REF after the fact.
    let first = types::type_(p);
    if p.at(FOR_KW) {
        if let Some(trait_ty) = first {
            trait_ty.precede(p).complete(p, TRAIT_REF);
        }
        p.advance();
        types::type_(p);
    }

    item_list(p);
    m.complete(p, IMPL_ITEM);
}

fn trait_item(p: &mut Parser, m: Marker) {
    p.advance();
    name(p, &SyntaxSet::new([LT, L_BRACE]));
    generic_param_list(p);
    item_list(p);
    m.complete(p, TRAIT_ITEM);
}

fn item_list(p: &mut Parser) {
    let m = p.start();

    if !p.eat(L_BRACE) {
        p.error("expected `{`");
        m.complete(p, ITEM_LIST);
        return;
    }

    while !matches!(p.peek_kind(), R_BRACE | EOF) {
        if p.at_any(&ITEM_FIRST) {
            p.clear_recovering();
            item(p);
        } else {
            p.error_and_bump("expected an item");
        }
    }

    p.expect(R_BRACE);
    m.complete(p, ITEM_LIST);
}

fn mod_item(p: &mut Parser, m: Marker) {
    p.advance();
    name(p, &SyntaxSet::new([L_BRACE, SEMICOLON]));

    if p.at(L_BRACE) {
        item_list(p);
    } else {
        p.expect(SEMICOLON);
    }

    m.complete(p, MOD_ITEM);
}

fn use_item(p: &mut Parser, m: Marker) {
    p.advance();

    if p.at(IDENT) {
        types::path(p);
    } else {
        p.error("expected a path");
    }

    p.expect(SEMICOLON);
    m.complete(p, USE_ITEM);
}

fn const_item(p: &mut Parser, m: Marker) {
    p.advance();
    name(p, &SyntaxSet::new([COLON, EQ, SEMICOLON]));
    typed_initializer(p);
    m.complete(p, CONST_ITEM);
}

fn static_item(p: &mut Parser, m: Marker) {
    p.advance();
    p.eat(MUT_KW);
    name(p, &SyntaxSet::new([COLON, EQ, SEMICOLON]));
    typed_initializer(p);
    m.complete(p, STATIC_ITEM);
}

fn typed_initializer(p: &mut Parser) {
    if p.eat(COLON) {
        types::type_(p);
    } else {
        p.error("expected a type annotation");
    }

    if p.eat(EQ) {
        exprs::expr(p);
    }

    p.expect(SEMICOLON);
}

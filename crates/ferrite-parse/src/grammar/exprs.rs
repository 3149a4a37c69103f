use ferrite_syntax::SyntaxKind::{self, *};
use ferrite_syntax::SyntaxSet;

use super::{EXPR_FIRST, ITEM_FIRST, name, types};
use crate::parser::{CompletedMarker, Marker, Parser};

const STMT_CLEAR: SyntaxSet = EXPR_FIRST.union(&SyntaxSet::new([LET_KW]));

pub(crate) fn stmt(p: &mut Parser) {
    if p.at_any(&STMT_CLEAR) {
        p.clear_recovering();
    }

    match p.peek_kind() {
        LET_KW => let_stmt(p),
        kind if ITEM_FIRST.contains(kind) => {
            p.clear_recovering();
            super::items::item(p);
        }
        SEMICOLON => p.error_and_bump("expected a statement, found `;`"),
        _ => {
            let Some(expr) = expr(p) else {
                return;
            };
            if p.at(SEMICOLON) {
                let m = expr.precede(p);
                p.advance();
                m.complete(p, EXPR_STMT);
            }
        }
    }
}

fn let_stmt(p: &mut Parser) {
    let m = p.start();
    p.advance();
    p.eat(MUT_KW);
    name(p, &SyntaxSet::new([COLON, EQ, SEMICOLON]));

    if p.eat(COLON) {
        types::type_(p);
    }
    if p.eat(EQ) {
        expr(p);
    }

    p.expect(SEMICOLON);
    m.complete(p, LET_STMT);
}

pub(crate) fn expr(p: &mut Parser) -> Option<CompletedMarker> {
    expr_bp(p, 0)
}

fn expr_bp(p: &mut Parser, min_bp: u8) -> Option<CompletedMarker> {
    let mut lhs = lhs(p)?;

    while let Some((l_bp, r_bp)) = binary_bp(p.peek_kind()) {
        if l_bp < min_bp {
            break;
        }

        let m = lhs.precede(p);
        p.advance();
        expr_bp(p, r_bp);
        lhs = m.complete(p, BINARY_EXPR);
    }

    Some(lhs)
}

/// Left and right binding powers per operator. Assignment is
/// right-associative and binds loosest; everything else associates left and
/// binds tighter going down the table.
fn binary_bp(kind: SyntaxKind) -> Option<(u8, u8)> {
    let bp = match kind {
        EQ => (2, 1),
        PIPE2 => (3, 4),
        AMP2 => (5, 6),
        EQ2 | NEQ | LT | GT | LTEQ | GTEQ => (7, 8),
        PLUS | MINUS => (9, 10),
        STAR | SLASH | PERCENT => (11, 12),
        _ => return None,
    };
    Some(bp)
}

const PREFIX_BP: u8 = 13;

fn lhs(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        MINUS | BANG | STAR | AMP => {
            let m = p.start();
            p.advance();
            expr_bp(p, PREFIX_BP);
            m.complete(p, PREFIX_EXPR).into()
        }
        _ => postfix_expr(p),
    }
}

fn postfix_expr(p: &mut Parser) -> Option<CompletedMarker> {
    let mut lhs = primary_expr(p)?;

    loop {
        lhs = match p.peek_kind() {
            L_PAREN => {
                let m = lhs.precede(p);
                arg_list(p);
                m.complete(p, CALL_EXPR)
            }
            DOT => {
                let m = lhs.precede(p);
                p.advance();
                if matches!(p.peek_kind(), IDENT | INT_NUMBER) {
                    p.advance();
                } else {
                    p.error("expected a field name");
                }
                m.complete(p, FIELD_EXPR)
            }
            _ => break,
        };
    }

    Some(lhs)
}

fn arg_list(p: &mut Parser) {
    let m = p.start();
    super::delimited(p, L_PAREN, R_PAREN, COMMA, "expected an expression", &EXPR_FIRST, |p| {
        expr(p).is_some()
    });
    m.complete(p, ARG_LIST);
}

fn primary_expr(p: &mut Parser) -> Option<CompletedMarker> {
    match p.peek_kind() {
        INT_NUMBER | FLOAT_NUMBER | STRING | CHAR | TRUE_KW | FALSE_KW => {
            let m = p.start();
            p.advance();
            m.complete(p, LITERAL).into()
        }
        IDENT => {
            let m = p.start();
            types::path(p);
            m.complete(p, PATH_EXPR).into()
        }
        L_PAREN => {
            let m = p.start();
            p.advance();
            if !p.at(R_PAREN) {
                expr(p);
            }
            p.expect(R_PAREN);
            m.complete(p, PAREN_EXPR).into()
        }
        L_BRACE => block(p).into(),
        IF_KW => if_(p).into(),
        LOOP_KW => {
            let m = p.start();
            loop_(p, m).into()
        }
        WHILE_KW => {
            let m = p.start();
            while_(p, m).into()
        }
        FOR_KW => {
            let m = p.start();
            for_(p, m).into()
        }
        LIFETIME => labeled_expr(p),
        BREAK_KW => {
            let m = p.start();
            p.advance();
            p.eat(LIFETIME);
            if p.at_any(&EXPR_FIRST) {
                expr(p);
            }
            m.complete(p, BREAK_EXPR).into()
        }
        CONTINUE_KW => {
            let m = p.start();
            p.advance();
            p.eat(LIFETIME);
            m.complete(p, CONTINUE_EXPR).into()
        }
        RETURN_KW => {
            let m = p.start();
            p.advance();
            if p.at_any(&EXPR_FIRST) {
                expr(p);
            }
            m.complete(p, RETURN_EXPR).into()
        }
        _ => {
            let m = p.start();
            p.error("expected an expression");
            p.advance();
            m.complete(p, ERROR);
            None
        }
    }
}

/// A label at expression position announces a loop. Two significant tokens
/// of lookahead decide that without consuming anything, so `'a'` char
/// literals and stray lifetimes never commit to the loop path.
fn labeled_expr(p: &mut Parser) -> Option<CompletedMarker> {
    if p.nth_at(1, COLON) && matches!(p.nth_kind(2), LOOP_KW | WHILE_KW | FOR_KW) {
        let m = p.start();
        p.advance();
        p.advance();
        let completed = match p.peek_kind() {
            LOOP_KW => loop_(p, m),
            WHILE_KW => while_(p, m),
            _ => for_(p, m),
        };
        return completed.into();
    }

    let m = p.start();
    p.error("expected `loop`, `while`, or `for` after a label");
    p.advance();
    m.complete(p, ERROR);
    None
}

fn loop_(p: &mut Parser, m: Marker) -> CompletedMarker {
    p.advance();
    block(p);
    m.complete(p, LOOP_EXPR)
}

fn while_(p: &mut Parser, m: Marker) -> CompletedMarker {
    p.advance();

    if p.at(L_BRACE) {
        p.error("expected a condition");
    } else {
        expr(p);
    }

    block(p);
    m.complete(p, WHILE_EXPR)
}

fn for_(p: &mut Parser, m: Marker) -> CompletedMarker {
    p.advance();
    name(p, &SyntaxSet::new([IN_KW, L_BRACE]));
    p.expect(IN_KW);

    if p.at(L_BRACE) {
        p.error("expected an iterable");
    } else {
        expr(p);
    }

    block(p);
    m.complete(p, FOR_EXPR)
}

fn if_(p: &mut Parser) -> CompletedMarker {
    debug_assert_eq!(p.peek_kind(), IF_KW);

    let m = p.start();
    p.advance();

    if p.at(L_BRACE) {
        p.error("expected a condition");
    } else {
        expr(p);
    }

    block(p);
    if p.eat(ELSE_KW) {
        if p.at(IF_KW) {
            if_(p);
        } else {
            block(p);
        }
    }

    m.complete(p, IF_EXPR)
}

/// Parses a block and always produces a `BLOCK` node, even when the opening
/// brace is missing. Loop and `if` bodies rely on that.
pub(crate) fn block(p: &mut Parser) -> CompletedMarker {
    let m = p.start();

    if !p.eat(L_BRACE) {
        p.error("expected a block");
        return m.complete(p, BLOCK);
    }

    while !matches!(p.peek_kind(), R_BRACE | EOF) {
        stmt(p);
    }

    p.expect(R_BRACE);
    m.complete(p, BLOCK)
}

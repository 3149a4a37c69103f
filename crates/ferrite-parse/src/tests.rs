use expect_test::{Expect, expect};
use ferrite_errors::Severity;
use ferrite_syntax::ast::{self, AstNode as _, Visitor, walk};
use text_size::TextRange;

use crate::source_file;

fn check(input: &str, expect: Expect) {
    let parse = source_file(input);
    let mut actual = parse.tree().debug_dump();
    actual.push_str("---\n");
    for diagnostic in parse.diagnostics() {
        let severity = match diagnostic.severity() {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        actual.push_str(&format!(
            "{severity}: {} at {:?}\n",
            diagnostic.message(),
            diagnostic.range()
        ));
    }
    expect.assert_eq(&actual);
}

fn reconstruct(text: &str) -> String {
    let parse = source_file(text);
    parse.tree().root().descendant_tokens().map(|token| token.text().to_owned()).collect()
}

#[test]
fn empty_loop() {
    check(
        "loop {}",
        expect![[r#"
            SOURCE_FILE@0..7
              LOOP_EXPR@0..7
                LOOP_KW@0..4 "loop"
                BLOCK@4..7
                  WHITESPACE@4..5 " "
                  L_BRACE@5..6 "{"
                  R_BRACE@6..7 "}"
            ---
        "#]],
    );
}

#[test]
fn labeled_loop() {
    check(
        "'outer: loop {}",
        expect![[r#"
            SOURCE_FILE@0..15
              LOOP_EXPR@0..15
                LIFETIME@0..6 "'outer"
                COLON@6..7 ":"
                WHITESPACE@7..8 " "
                LOOP_KW@8..12 "loop"
                BLOCK@12..15
                  WHITESPACE@12..13 " "
                  L_BRACE@13..14 "{"
                  R_BRACE@14..15 "}"
            ---
        "#]],
    );
}

#[test]
fn empty_fn() {
    check(
        "fn main() {}",
        expect![[r#"
            SOURCE_FILE@0..12
              FN_ITEM@0..12
                FN_KW@0..2 "fn"
                NAME@2..7
                  WHITESPACE@2..3 " "
                  IDENT@3..7 "main"
                PARAM_LIST@7..9
                  L_PAREN@7..8 "("
                  R_PAREN@8..9 ")"
                BLOCK@9..12
                  WHITESPACE@9..10 " "
                  L_BRACE@10..11 "{"
                  R_BRACE@11..12 "}"
            ---
        "#]],
    );
}

#[test]
fn binary_precedence() {
    check(
        "1 + 2 * 3",
        expect![[r#"
            SOURCE_FILE@0..9
              BINARY_EXPR@0..9
                LITERAL@0..1
                  INT_NUMBER@0..1 "1"
                WHITESPACE@1..2 " "
                PLUS@2..3 "+"
                BINARY_EXPR@3..9
                  LITERAL@3..5
                    WHITESPACE@3..4 " "
                    INT_NUMBER@4..5 "2"
                  WHITESPACE@5..6 " "
                  STAR@6..7 "*"
                  LITERAL@7..9
                    WHITESPACE@7..8 " "
                    INT_NUMBER@8..9 "3"
            ---
        "#]],
    );
}

#[test]
fn unterminated_loop_reports_one_error() {
    check(
        "loop {",
        expect![[r#"
            SOURCE_FILE@0..6
              LOOP_EXPR@0..6
                LOOP_KW@0..4 "loop"
                BLOCK@4..6
                  WHITESPACE@4..5 " "
                  L_BRACE@5..6 "{"
            ---
            error: expected `}` at 6..6
        "#]],
    );
}

#[test]
fn leaves_always_reproduce_the_source() {
    let inputs = [
        "",
        "   \n\t ",
        "loop {}",
        "loop {",
        "fn (",
        "let x = ;",
        "@#%",
        "a\u{0}b",
        "fn main() { let x = 1 + ; }",
        "'outer: loop { break 'outer; }",
        "/* unterminated",
        "\"unterminated string",
        "struct S { x: i32, }",
        "impl Display for Point { fn fmt(self) -> i32 { self.x } }",
        "1.foo().bar(2, 3) == -4",
    ];

    for input in inputs {
        assert_eq!(reconstruct(input), input, "input: {input:?}");
    }
}

#[test]
fn root_covers_the_entire_input() {
    for input in ["", "loop {", "fn (", "a + b", "// only a comment", "a\u{0}b"] {
        let parse = source_file(input);
        let root = parse.tree().root();
        assert_eq!(
            root.range(),
            TextRange::up_to((input.len() as u32).into()),
            "input: {input:?}"
        );
    }
}

#[test]
fn nul_bytes_are_ordinary_stray_characters() {
    let input = "a\u{0}b";
    let parse = source_file(input);

    assert_eq!(reconstruct(input), input);
    assert_eq!(parse.tree().root().range(), TextRange::up_to(3.into()));

    let warning = parse
        .diagnostics()
        .iter()
        .find(|d| d.severity() == Severity::Warning)
        .expect("the stray byte should warn");
    assert_eq!(warning.message(), "unrecognized character");
    assert_eq!(warning.range(), TextRange::new(1.into(), 2.into()));
}

#[test]
fn stray_characters_warn_but_do_not_fail_on_their_own() {
    let parse = source_file("let x = 1; @");

    let warnings: Vec<_> =
        parse.diagnostics().iter().filter(|d| d.severity() == Severity::Warning).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message(), "unrecognized character");
    assert_eq!(warnings[0].range(), TextRange::new(11.into(), 12.into()));

    // The grammar still reports the stray token where it expected an
    // expression, so the parse as a whole is not ok.
    assert!(parse.diagnostics().iter().any(|d| d.severity() == Severity::Error));
    assert!(!parse.ok());
}

#[test]
fn parsing_is_deterministic() {
    let input = "fn main() { 'a: while x < 10 { break 'a; } }";
    let first = source_file(input);
    let second = source_file(input);

    assert_eq!(first.tree().debug_dump(), second.tree().debug_dump());
    assert_eq!(first.diagnostics(), second.diagnostics());
}

#[test]
fn empty_input_is_fine() {
    let parse = source_file("");
    assert!(parse.ok());
    assert_eq!(parse.source_file().items().count(), 0);
    assert_eq!(parse.tree().root().range(), TextRange::empty(0.into()));
}

#[test]
fn errors_do_not_cascade_into_the_next_item() {
    let parse = source_file("fn (\nfn foo() {}");

    assert_eq!(parse.diagnostics().len(), 1);
    assert_eq!(parse.diagnostics()[0].message(), "expected a name");

    let items: Vec<_> = parse.source_file().items().collect();
    assert_eq!(items.len(), 2);

    let &[ast::Item::Fn(broken), ast::Item::Fn(ok)] = items.as_slice() else {
        panic!("expected two functions");
    };
    assert!(broken.name().is_none());
    assert_eq!(ok.name().unwrap().as_str(), "foo");
}

#[test]
fn labeled_loop_accessors() {
    let parse = source_file("'outer: loop { break 'outer; }");
    assert!(parse.ok());

    let root = parse.tree().root();
    let loop_expr = root.children().find_map(ast::LoopExpr::cast).unwrap();

    assert_eq!(loop_expr.lifetime().unwrap().text(), "'outer");
    assert!(loop_expr.colon_token().is_some());
    assert_eq!(loop_expr.loop_token().text(), "loop");

    let body = loop_expr.body();
    assert!(body.l_brace_token().is_some());
    assert!(body.r_brace_token().is_some());

    let break_expr = root.descendants().find_map(ast::BreakExpr::cast).unwrap();
    assert_eq!(break_expr.lifetime().unwrap().text(), "'outer");
}

#[test]
fn unlabeled_loop_has_no_label() {
    let parse = source_file("loop {}");
    let loop_expr = parse.tree().root().children().find_map(ast::LoopExpr::cast).unwrap();

    assert!(loop_expr.lifetime().is_none());
    assert!(loop_expr.colon_token().is_none());
}

#[test]
fn unterminated_block_still_has_a_body() {
    let parse = source_file("loop {");
    assert_eq!(parse.diagnostics().len(), 1);

    let loop_expr = parse.tree().root().children().find_map(ast::LoopExpr::cast).unwrap();
    let body = loop_expr.body();
    assert!(body.l_brace_token().is_some());
    assert!(body.r_brace_token().is_none());
}

#[test]
fn fn_accessors() {
    let parse = source_file("fn add(a: i32, b: i32) -> i32 { a + b }");
    assert!(parse.ok());

    let ast::Item::Fn(func) = parse.source_file().items().next().unwrap() else {
        panic!("expected a function");
    };

    assert_eq!(func.fn_token().text(), "fn");
    assert_eq!(func.name().unwrap().as_str(), "add");
    assert_eq!(func.param_list().unwrap().params().count(), 2);
    assert!(func.ret_type().is_some());

    let body = func.body().unwrap();
    assert_eq!(body.statements().count(), 0);
    let Some(ast::Expr::Binary(sum)) = body.tail_expr() else {
        panic!("expected a binary tail expression");
    };
    assert_eq!(sum.op_token().text(), "+");
    assert!(matches!(sum.lhs(), ast::Expr::Path(_)));
    assert!(matches!(sum.rhs(), Some(ast::Expr::Path(_))));
}

#[test]
fn expr_statements_require_a_semicolon() {
    let parse = source_file("foo();");
    let stmt = parse.tree().root().children().find_map(ast::ExprStmt::cast).unwrap();
    assert!(matches!(stmt.expr(), ast::Expr::Call(_)));
    assert_eq!(stmt.semicolon_token().text(), ";");

    // Without the semicolon the expression stays bare.
    let parse = source_file("foo()");
    assert!(parse.tree().root().children().find_map(ast::ExprStmt::cast).is_none());
    assert!(parse.tree().root().children().find_map(ast::CallExpr::cast).is_some());
}

#[test]
fn if_else_chain() {
    let parse = source_file("if a { } else if b { } else { }");
    assert!(parse.ok());

    let if_expr = parse.tree().root().children().find_map(ast::IfExpr::cast).unwrap();
    assert!(if_expr.condition().is_some());

    let Some(ast::ElseBranch::If(second)) = if_expr.else_branch() else {
        panic!("expected an `else if`");
    };
    assert!(matches!(second.else_branch(), Some(ast::ElseBranch::Block(_))));
}

#[test]
fn impl_trait_for_type() {
    let parse = source_file("impl Display for Point { fn fmt(self) {} }");

    let ast::Item::Impl(imp) = parse.source_file().items().next().unwrap() else {
        panic!("expected an impl");
    };

    let trait_ref = imp.trait_ref().unwrap();
    let ast::Type::Path(trait_ty) = trait_ref.ty() else { panic!("expected a path type") };
    let segment = trait_ty.path().segments().next().unwrap();
    assert_eq!(segment.ident_token().text(), "Display");

    let Some(ast::Type::Path(target)) = imp.target_type() else { panic!("expected a target") };
    let segment = target.path().segments().next().unwrap();
    assert_eq!(segment.ident_token().text(), "Point");

    assert_eq!(imp.item_list().items().count(), 1);
}

#[test]
fn inherent_impl_has_no_trait_ref() {
    let parse = source_file("impl Point { }");
    let ast::Item::Impl(imp) = parse.source_file().items().next().unwrap() else {
        panic!("expected an impl");
    };
    assert!(imp.trait_ref().is_none());
    assert!(imp.target_type().is_some());
}

#[test]
fn char_literal_is_not_a_label() {
    let parse = source_file("let c = 'x';");
    assert!(parse.ok());

    let stmt = parse.tree().root().children().find_map(ast::LetStmt::cast).unwrap();
    let Some(ast::Expr::Literal(lit)) = stmt.initializer() else {
        panic!("expected a literal initializer");
    };
    assert_eq!(lit.literal_kind(), ast::LiteralKind::Char);
}

#[test]
fn visitor_sees_every_production_once() {
    #[derive(Default)]
    struct Counter {
        fns: usize,
        loops: usize,
        breaks: usize,
    }

    impl<'a> Visitor<'a> for Counter {
        fn visit_fn_item(&mut self, _: ast::FnItem<'a>) {
            self.fns += 1;
        }

        fn visit_loop_expr(&mut self, _: ast::LoopExpr<'a>) {
            self.loops += 1;
        }

        fn visit_break_expr(&mut self, _: ast::BreakExpr<'a>) {
            self.breaks += 1;
        }
    }

    let parse = source_file(
        "fn a() { loop { break; } }\n\
         fn b() { 'x: loop { loop { break 'x; } } }\n",
    );
    assert!(parse.ok());

    let mut counter = Counter::default();
    walk(&mut counter, parse.tree().root());

    assert_eq!(counter.fns, 2);
    assert_eq!(counter.loops, 3);
    assert_eq!(counter.breaks, 2);
}

#[test]
fn comments_stay_attached_in_front_of_the_next_token() {
    let input = "loop /* body */ {}";
    let parse = source_file(input);
    assert!(parse.ok());

    let loop_expr = parse.tree().root().children().find_map(ast::LoopExpr::cast).unwrap();
    assert_eq!(loop_expr.body().text(), " /* body */ {}");
    assert_eq!(reconstruct(input), input);
}

//! Per-production typed wrappers.
//!
//! This module is the machine-readable form of the grammar: one `ast_node!`
//! invocation per production, one accessor per named child. Regenerate the
//! accessors together with the grammar whenever a production changes shape;
//! they must never drift apart.

use super::{AstNode, ast_node, support};
use crate::SyntaxKind::{self, *};
use crate::{SyntaxNode, SyntaxToken};

ast_node!(
    /// The root of every tree: a sequence of items and, in script-style
    /// inputs, bare statements.
    SourceFile,
    SOURCE_FILE
);

impl<'a> SourceFile<'a> {
    pub fn items(self) -> impl Iterator<Item = Item<'a>> + 'a {
        support::children(self.0)
    }
}

// ---------------------------------------------------------------------------
// Items

ast_node!(FnItem, FN_ITEM);

impl<'a> FnItem<'a> {
    pub fn fn_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, FN_KW)
    }

    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn generic_param_list(self) -> Option<GenericParamList<'a>> {
        support::child(self.0)
    }

    pub fn param_list(self) -> Option<ParamList<'a>> {
        support::child(self.0)
    }

    pub fn ret_type(self) -> Option<RetType<'a>> {
        support::child(self.0)
    }

    pub fn body(self) -> Option<Block<'a>> {
        support::child(self.0)
    }
}

ast_node!(StructItem, STRUCT_ITEM);

impl<'a> StructItem<'a> {
    pub fn struct_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, STRUCT_KW)
    }

    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn record_field_list(self) -> Option<RecordFieldList<'a>> {
        support::child(self.0)
    }
}

ast_node!(EnumItem, ENUM_ITEM);

impl<'a> EnumItem<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn variant_list(self) -> Option<VariantList<'a>> {
        support::child(self.0)
    }
}

ast_node!(
    /// `impl Type { .. }` or `impl Trait for Type { .. }`.
    ImplItem,
    IMPL_ITEM
);

impl<'a> ImplItem<'a> {
    pub fn impl_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, IMPL_KW)
    }

    /// The implemented trait, present only in `impl Trait for Type` form.
    pub fn trait_ref(self) -> Option<TraitRef<'a>> {
        support::child(self.0)
    }

    /// The type the impl targets. The trait's own path type lives inside
    /// [`TraitRef`], so the first direct type child is always the target.
    pub fn target_type(self) -> Option<Type<'a>> {
        support::child(self.0)
    }

    pub fn item_list(self) -> ItemList<'a> {
        support::required_child(self.0, "item list")
    }
}

ast_node!(TraitRef, TRAIT_REF);

impl<'a> TraitRef<'a> {
    pub fn ty(self) -> Type<'a> {
        support::required_child(self.0, "type")
    }
}

ast_node!(TraitItem, TRAIT_ITEM);

impl<'a> TraitItem<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn item_list(self) -> ItemList<'a> {
        support::required_child(self.0, "item list")
    }
}

ast_node!(ModItem, MOD_ITEM);

impl<'a> ModItem<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    /// Absent for out-of-line `mod name;` declarations.
    pub fn item_list(self) -> Option<ItemList<'a>> {
        support::child(self.0)
    }
}

ast_node!(UseItem, USE_ITEM);

impl<'a> UseItem<'a> {
    pub fn path(self) -> Option<Path<'a>> {
        support::child(self.0)
    }
}

ast_node!(ConstItem, CONST_ITEM);

impl<'a> ConstItem<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        support::child(self.0)
    }

    pub fn value(self) -> Option<Expr<'a>> {
        support::child(self.0)
    }
}

ast_node!(StaticItem, STATIC_ITEM);

impl<'a> StaticItem<'a> {
    pub fn mut_token(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, MUT_KW)
    }

    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        support::child(self.0)
    }

    pub fn value(self) -> Option<Expr<'a>> {
        support::child(self.0)
    }
}

ast_node!(ItemList, ITEM_LIST);

impl<'a> ItemList<'a> {
    pub fn items(self) -> impl Iterator<Item = Item<'a>> + 'a {
        support::children(self.0)
    }
}

/// Any item production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    Fn(FnItem<'a>),
    Struct(StructItem<'a>),
    Enum(EnumItem<'a>),
    Impl(ImplItem<'a>),
    Trait(TraitItem<'a>),
    Mod(ModItem<'a>),
    Use(UseItem<'a>),
    Const(ConstItem<'a>),
    Static(StaticItem<'a>),
}

impl<'a> AstNode<'a> for Item<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        let item = match syntax.kind() {
            FN_ITEM => Self::Fn(FnItem(syntax)),
            STRUCT_ITEM => Self::Struct(StructItem(syntax)),
            ENUM_ITEM => Self::Enum(EnumItem(syntax)),
            IMPL_ITEM => Self::Impl(ImplItem(syntax)),
            TRAIT_ITEM => Self::Trait(TraitItem(syntax)),
            MOD_ITEM => Self::Mod(ModItem(syntax)),
            USE_ITEM => Self::Use(UseItem(syntax)),
            CONST_ITEM => Self::Const(ConstItem(syntax)),
            STATIC_ITEM => Self::Static(StaticItem(syntax)),
            _ => return None,
        };
        Some(item)
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Fn(it) => it.0,
            Self::Struct(it) => it.0,
            Self::Enum(it) => it.0,
            Self::Impl(it) => it.0,
            Self::Trait(it) => it.0,
            Self::Mod(it) => it.0,
            Self::Use(it) => it.0,
            Self::Const(it) => it.0,
            Self::Static(it) => it.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Item pieces

ast_node!(Name, NAME);

impl<'a> Name<'a> {
    pub fn ident_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, IDENT)
    }

    /// The identifier text, trivia excluded.
    pub fn as_str(self) -> &'a str {
        self.ident_token().text()
    }
}

ast_node!(GenericParamList, GENERIC_PARAM_LIST);

impl<'a> GenericParamList<'a> {
    pub fn type_params(self) -> impl Iterator<Item = TypeParam<'a>> + 'a {
        support::children(self.0)
    }

    pub fn lifetime_params(self) -> impl Iterator<Item = LifetimeParam<'a>> + 'a {
        support::children(self.0)
    }
}

ast_node!(TypeParam, TYPE_PARAM);

impl<'a> TypeParam<'a> {
    pub fn name(self) -> Name<'a> {
        support::required_child(self.0, "name")
    }
}

ast_node!(LifetimeParam, LIFETIME_PARAM);

impl<'a> LifetimeParam<'a> {
    pub fn lifetime_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, LIFETIME)
    }
}

ast_node!(ParamList, PARAM_LIST);

impl<'a> ParamList<'a> {
    pub fn params(self) -> impl Iterator<Item = Param<'a>> + 'a {
        support::children(self.0)
    }
}

ast_node!(Param, PARAM);

impl<'a> Param<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        support::child(self.0)
    }
}

ast_node!(RetType, RET_TYPE);

impl<'a> RetType<'a> {
    pub fn arrow_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, ARROW)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        support::child(self.0)
    }
}

ast_node!(RecordFieldList, RECORD_FIELD_LIST);

impl<'a> RecordFieldList<'a> {
    pub fn fields(self) -> impl Iterator<Item = RecordField<'a>> + 'a {
        support::children(self.0)
    }
}

ast_node!(RecordField, RECORD_FIELD);

impl<'a> RecordField<'a> {
    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        support::child(self.0)
    }
}

ast_node!(VariantList, VARIANT_LIST);

impl<'a> VariantList<'a> {
    pub fn variants(self) -> impl Iterator<Item = Variant<'a>> + 'a {
        support::children(self.0)
    }
}

ast_node!(Variant, VARIANT);

impl<'a> Variant<'a> {
    pub fn name(self) -> Name<'a> {
        support::required_child(self.0, "name")
    }
}

ast_node!(Path, PATH);

impl<'a> Path<'a> {
    pub fn segments(self) -> impl Iterator<Item = PathSegment<'a>> + 'a {
        support::children(self.0)
    }
}

ast_node!(PathSegment, PATH_SEGMENT);

impl<'a> PathSegment<'a> {
    pub fn ident_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, IDENT)
    }
}

// ---------------------------------------------------------------------------
// Types

ast_node!(PathType, PATH_TYPE);

impl<'a> PathType<'a> {
    pub fn path(self) -> Path<'a> {
        support::required_child(self.0, "path")
    }
}

ast_node!(RefType, REF_TYPE);

impl<'a> RefType<'a> {
    pub fn amp_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, AMP)
    }

    pub fn lifetime(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, LIFETIME)
    }

    pub fn mut_token(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, MUT_KW)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        support::child(self.0)
    }
}

ast_node!(TupleType, TUPLE_TYPE);

impl<'a> TupleType<'a> {
    pub fn types(self) -> impl Iterator<Item = Type<'a>> + 'a {
        support::children(self.0)
    }
}

/// Any type production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type<'a> {
    Path(PathType<'a>),
    Ref(RefType<'a>),
    Tuple(TupleType<'a>),
}

impl<'a> AstNode<'a> for Type<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        let ty = match syntax.kind() {
            PATH_TYPE => Self::Path(PathType(syntax)),
            REF_TYPE => Self::Ref(RefType(syntax)),
            TUPLE_TYPE => Self::Tuple(TupleType(syntax)),
            _ => return None,
        };
        Some(ty)
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Path(it) => it.0,
            Self::Ref(it) => it.0,
            Self::Tuple(it) => it.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Expressions

ast_node!(Literal, LITERAL);

impl<'a> Literal<'a> {
    pub fn token(self) -> SyntaxToken<'a> {
        match self.0.tokens().find(|token| !token.is_trivia()) {
            Some(token) => token,
            None => unreachable!("LITERAL node without a literal token"),
        }
    }

    pub fn literal_kind(self) -> LiteralKind {
        match self.token().kind() {
            INT_NUMBER => LiteralKind::Int,
            FLOAT_NUMBER => LiteralKind::Float,
            STRING => LiteralKind::String,
            CHAR => LiteralKind::Char,
            TRUE_KW | FALSE_KW => LiteralKind::Bool,
            kind => unreachable!("unexpected literal token {kind:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    String,
    Char,
    Bool,
}

ast_node!(PathExpr, PATH_EXPR);

impl<'a> PathExpr<'a> {
    pub fn path(self) -> Path<'a> {
        support::required_child(self.0, "path")
    }
}

ast_node!(CallExpr, CALL_EXPR);

impl<'a> CallExpr<'a> {
    pub fn callee(self) -> Expr<'a> {
        support::required_child(self.0, "callee expression")
    }

    pub fn arg_list(self) -> ArgList<'a> {
        support::required_child(self.0, "argument list")
    }
}

ast_node!(ArgList, ARG_LIST);

impl<'a> ArgList<'a> {
    pub fn args(self) -> impl Iterator<Item = Expr<'a>> + 'a {
        support::children(self.0)
    }
}

ast_node!(FieldExpr, FIELD_EXPR);

impl<'a> FieldExpr<'a> {
    pub fn base(self) -> Expr<'a> {
        support::required_child(self.0, "base expression")
    }

    pub fn dot_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, DOT)
    }

    /// The field name, an identifier or a tuple index.
    pub fn name_token(self) -> Option<SyntaxToken<'a>> {
        self.0.tokens().find(|token| matches!(token.kind(), IDENT | INT_NUMBER))
    }
}

ast_node!(PrefixExpr, PREFIX_EXPR);

impl<'a> PrefixExpr<'a> {
    pub fn op_token(self) -> SyntaxToken<'a> {
        match self.0.tokens().find(|token| matches!(token.kind(), MINUS | BANG | STAR | AMP)) {
            Some(token) => token,
            None => unreachable!("PREFIX_EXPR node without an operator token"),
        }
    }

    pub fn operand(self) -> Option<Expr<'a>> {
        support::child(self.0)
    }
}

ast_node!(BinaryExpr, BINARY_EXPR);

impl<'a> BinaryExpr<'a> {
    pub fn lhs(self) -> Expr<'a> {
        support::required_child(self.0, "left operand")
    }

    pub fn op_token(self) -> SyntaxToken<'a> {
        match self.0.tokens().find(|token| binary_op(token.kind())) {
            Some(token) => token,
            None => unreachable!("BINARY_EXPR node without an operator token"),
        }
    }

    pub fn rhs(self) -> Option<Expr<'a>> {
        support::children(self.0).nth(1)
    }
}

fn binary_op(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        EQ | EQ2
            | NEQ
            | LT
            | GT
            | LTEQ
            | GTEQ
            | PLUS
            | MINUS
            | STAR
            | SLASH
            | PERCENT
            | AMP2
            | PIPE2
    )
}

ast_node!(ParenExpr, PAREN_EXPR);

impl<'a> ParenExpr<'a> {
    pub fn expr(self) -> Option<Expr<'a>> {
        support::child(self.0)
    }
}

ast_node!(
    /// A brace-delimited statement list, also usable as an expression.
    Block,
    BLOCK
);

impl<'a> Block<'a> {
    pub fn l_brace_token(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, L_BRACE)
    }

    pub fn r_brace_token(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, R_BRACE)
    }

    pub fn statements(self) -> impl Iterator<Item = Stmt<'a>> + 'a {
        support::children(self.0)
    }

    /// The trailing expression, if the block ends without a semicolon.
    pub fn tail_expr(self) -> Option<Expr<'a>> {
        support::children::<Expr<'a>>(self.0).last()
    }
}

ast_node!(IfExpr, IF_EXPR);

impl<'a> IfExpr<'a> {
    pub fn if_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, IF_KW)
    }

    /// The condition. A bare block is never a condition, so block children
    /// are skipped when searching.
    pub fn condition(self) -> Option<Expr<'a>> {
        self.0.children().filter(|node| node.kind() != BLOCK).find_map(Expr::cast)
    }

    pub fn then_branch(self) -> Block<'a> {
        support::required_child(self.0, "then block")
    }

    pub fn else_branch(self) -> Option<ElseBranch<'a>> {
        if let Some(block) = support::children::<Block<'a>>(self.0).nth(1) {
            return Some(ElseBranch::Block(block));
        }
        support::child::<IfExpr<'a>>(self.0).map(ElseBranch::If)
    }
}

/// The `else` arm of an [`IfExpr`]: a block or a chained `else if`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElseBranch<'a> {
    Block(Block<'a>),
    If(IfExpr<'a>),
}

ast_node!(
    /// `['label:] loop { .. }`.
    LoopExpr,
    LOOP_EXPR
);

impl<'a> LoopExpr<'a> {
    pub fn loop_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, LOOP_KW)
    }

    /// The optional leading label.
    pub fn lifetime(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, LIFETIME)
    }

    /// The colon separating a label from the `loop` keyword.
    pub fn colon_token(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, COLON)
    }

    pub fn body(self) -> Block<'a> {
        support::required_child(self.0, "body block")
    }
}

ast_node!(WhileExpr, WHILE_EXPR);

impl<'a> WhileExpr<'a> {
    pub fn while_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, WHILE_KW)
    }

    pub fn lifetime(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, LIFETIME)
    }

    pub fn condition(self) -> Option<Expr<'a>> {
        self.0.children().filter(|node| node.kind() != BLOCK).find_map(Expr::cast)
    }

    pub fn body(self) -> Block<'a> {
        support::required_child(self.0, "body block")
    }
}

ast_node!(ForExpr, FOR_EXPR);

impl<'a> ForExpr<'a> {
    pub fn for_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, FOR_KW)
    }

    pub fn lifetime(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, LIFETIME)
    }

    pub fn binding(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn iterable(self) -> Option<Expr<'a>> {
        self.0.children().filter(|node| node.kind() != BLOCK).find_map(Expr::cast)
    }

    pub fn body(self) -> Block<'a> {
        support::required_child(self.0, "body block")
    }
}

ast_node!(BreakExpr, BREAK_EXPR);

impl<'a> BreakExpr<'a> {
    pub fn break_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, BREAK_KW)
    }

    pub fn lifetime(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, LIFETIME)
    }

    pub fn value(self) -> Option<Expr<'a>> {
        support::child(self.0)
    }
}

ast_node!(ContinueExpr, CONTINUE_EXPR);

impl<'a> ContinueExpr<'a> {
    pub fn continue_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, CONTINUE_KW)
    }

    pub fn lifetime(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, LIFETIME)
    }
}

ast_node!(ReturnExpr, RETURN_EXPR);

impl<'a> ReturnExpr<'a> {
    pub fn return_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, RETURN_KW)
    }

    pub fn value(self) -> Option<Expr<'a>> {
        support::child(self.0)
    }
}

/// Any expression production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expr<'a> {
    Literal(Literal<'a>),
    Path(PathExpr<'a>),
    Call(CallExpr<'a>),
    Field(FieldExpr<'a>),
    Prefix(PrefixExpr<'a>),
    Binary(BinaryExpr<'a>),
    Paren(ParenExpr<'a>),
    Block(Block<'a>),
    If(IfExpr<'a>),
    Loop(LoopExpr<'a>),
    While(WhileExpr<'a>),
    For(ForExpr<'a>),
    Break(BreakExpr<'a>),
    Continue(ContinueExpr<'a>),
    Return(ReturnExpr<'a>),
}

impl<'a> AstNode<'a> for Expr<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        let expr = match syntax.kind() {
            LITERAL => Self::Literal(Literal(syntax)),
            PATH_EXPR => Self::Path(PathExpr(syntax)),
            CALL_EXPR => Self::Call(CallExpr(syntax)),
            FIELD_EXPR => Self::Field(FieldExpr(syntax)),
            PREFIX_EXPR => Self::Prefix(PrefixExpr(syntax)),
            BINARY_EXPR => Self::Binary(BinaryExpr(syntax)),
            PAREN_EXPR => Self::Paren(ParenExpr(syntax)),
            BLOCK => Self::Block(Block(syntax)),
            IF_EXPR => Self::If(IfExpr(syntax)),
            LOOP_EXPR => Self::Loop(LoopExpr(syntax)),
            WHILE_EXPR => Self::While(WhileExpr(syntax)),
            FOR_EXPR => Self::For(ForExpr(syntax)),
            BREAK_EXPR => Self::Break(BreakExpr(syntax)),
            CONTINUE_EXPR => Self::Continue(ContinueExpr(syntax)),
            RETURN_EXPR => Self::Return(ReturnExpr(syntax)),
            _ => return None,
        };
        Some(expr)
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Literal(it) => it.0,
            Self::Path(it) => it.0,
            Self::Call(it) => it.0,
            Self::Field(it) => it.0,
            Self::Prefix(it) => it.0,
            Self::Binary(it) => it.0,
            Self::Paren(it) => it.0,
            Self::Block(it) => it.0,
            Self::If(it) => it.0,
            Self::Loop(it) => it.0,
            Self::While(it) => it.0,
            Self::For(it) => it.0,
            Self::Break(it) => it.0,
            Self::Continue(it) => it.0,
            Self::Return(it) => it.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Statements

ast_node!(LetStmt, LET_STMT);

impl<'a> LetStmt<'a> {
    pub fn let_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, LET_KW)
    }

    pub fn mut_token(self) -> Option<SyntaxToken<'a>> {
        support::token(self.0, MUT_KW)
    }

    pub fn name(self) -> Option<Name<'a>> {
        support::child(self.0)
    }

    pub fn ty(self) -> Option<Type<'a>> {
        support::child(self.0)
    }

    pub fn initializer(self) -> Option<Expr<'a>> {
        support::child(self.0)
    }
}

ast_node!(ExprStmt, EXPR_STMT);

impl<'a> ExprStmt<'a> {
    pub fn expr(self) -> Expr<'a> {
        support::required_child(self.0, "expression")
    }

    pub fn semicolon_token(self) -> SyntaxToken<'a> {
        support::required_token(self.0, SEMICOLON)
    }
}

/// Any statement inside a block (or at the top level of a script).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stmt<'a> {
    Let(LetStmt<'a>),
    Expr(ExprStmt<'a>),
    Item(Item<'a>),
}

impl<'a> AstNode<'a> for Stmt<'a> {
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
        match syntax.kind() {
            LET_STMT => Some(Self::Let(LetStmt(syntax))),
            EXPR_STMT => Some(Self::Expr(ExprStmt(syntax))),
            _ => Item::cast(syntax).map(Self::Item),
        }
    }

    fn syntax(self) -> SyntaxNode<'a> {
        match self {
            Self::Let(it) => it.0,
            Self::Expr(it) => it.0,
            Self::Item(it) => it.syntax(),
        }
    }
}

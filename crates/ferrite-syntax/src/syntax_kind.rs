use std::fmt;

/// Every terminal and grammar production gets exactly one kind.
///
/// Token kinds come first, then trivia, then composite node kinds. The
/// discriminant order is relied upon by [`crate::SyntaxSet`] only in so far
/// as all kinds must fit in its bitset.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum SyntaxKind {
    L_PAREN,
    R_PAREN,
    L_BRACK,
    R_BRACK,
    L_BRACE,
    R_BRACE,
    SEMICOLON,
    COMMA,
    COLON,
    COLON2,
    DOT,
    ARROW,
    EQ,
    EQ2,
    NEQ,
    LT,
    GT,
    LTEQ,
    GTEQ,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    AMP,
    AMP2,
    PIPE,
    PIPE2,
    CARET,
    BANG,

    BREAK_KW,
    CONST_KW,
    CONTINUE_KW,
    ELSE_KW,
    ENUM_KW,
    FALSE_KW,
    FN_KW,
    FOR_KW,
    IF_KW,
    IMPL_KW,
    IN_KW,
    LET_KW,
    LOOP_KW,
    MOD_KW,
    MUT_KW,
    PUB_KW,
    RETURN_KW,
    STATIC_KW,
    STRUCT_KW,
    TRAIT_KW,
    TRUE_KW,
    USE_KW,
    WHILE_KW,

    IDENT,
    LIFETIME,
    INT_NUMBER,
    FLOAT_NUMBER,
    STRING,
    CHAR,

    WHITESPACE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    ERROR,
    EOF,

    SOURCE_FILE,
    FN_ITEM,
    STRUCT_ITEM,
    ENUM_ITEM,
    IMPL_ITEM,
    TRAIT_ITEM,
    MOD_ITEM,
    USE_ITEM,
    CONST_ITEM,
    STATIC_ITEM,
    NAME,
    TRAIT_REF,
    GENERIC_PARAM_LIST,
    TYPE_PARAM,
    LIFETIME_PARAM,
    PARAM_LIST,
    PARAM,
    RET_TYPE,
    RECORD_FIELD_LIST,
    RECORD_FIELD,
    VARIANT_LIST,
    VARIANT,
    ITEM_LIST,
    PATH,
    PATH_SEGMENT,
    PATH_TYPE,
    REF_TYPE,
    TUPLE_TYPE,
    LITERAL,
    PATH_EXPR,
    CALL_EXPR,
    ARG_LIST,
    FIELD_EXPR,
    PREFIX_EXPR,
    BINARY_EXPR,
    PAREN_EXPR,
    BLOCK,
    IF_EXPR,
    LOOP_EXPR,
    WHILE_EXPR,
    FOR_EXPR,
    BREAK_EXPR,
    CONTINUE_EXPR,
    RETURN_EXPR,
    LET_STMT,
    EXPR_STMT,
    TOMBSTONE,
}

impl SyntaxKind {
    /// Trivia tokens are skipped for grammar decisions but preserved in the
    /// tree.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    pub fn from_keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "break" => Self::BREAK_KW,
            "const" => Self::CONST_KW,
            "continue" => Self::CONTINUE_KW,
            "else" => Self::ELSE_KW,
            "enum" => Self::ENUM_KW,
            "false" => Self::FALSE_KW,
            "fn" => Self::FN_KW,
            "for" => Self::FOR_KW,
            "if" => Self::IF_KW,
            "impl" => Self::IMPL_KW,
            "in" => Self::IN_KW,
            "let" => Self::LET_KW,
            "loop" => Self::LOOP_KW,
            "mod" => Self::MOD_KW,
            "mut" => Self::MUT_KW,
            "pub" => Self::PUB_KW,
            "return" => Self::RETURN_KW,
            "static" => Self::STATIC_KW,
            "struct" => Self::STRUCT_KW,
            "trait" => Self::TRAIT_KW,
            "true" => Self::TRUE_KW,
            "use" => Self::USE_KW,
            "while" => Self::WHILE_KW,
            _ => return None,
        };
        Some(kind)
    }

    /// Human-readable description used in diagnostics.
    pub fn show(self) -> &'static str {
        match self {
            Self::L_PAREN => "`(`",
            Self::R_PAREN => "`)`",
            Self::L_BRACK => "`[`",
            Self::R_BRACK => "`]`",
            Self::L_BRACE => "`{`",
            Self::R_BRACE => "`}`",
            Self::SEMICOLON => "`;`",
            Self::COMMA => "`,`",
            Self::COLON => "`:`",
            Self::COLON2 => "`::`",
            Self::DOT => "`.`",
            Self::ARROW => "`->`",
            Self::EQ => "`=`",
            Self::LT => "`<`",
            Self::GT => "`>`",
            Self::IDENT => "an identifier",
            Self::LIFETIME => "a lifetime",
            Self::IN_KW => "`in`",
            Self::EOF => "end of file",
            _ => "a token",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

//! Hand-written tokenizer.
//!
//! Every byte of the input lands in exactly one token. Whitespace and
//! comments come out as ordinary [`WHITESPACE`], [`LINE_COMMENT`] and
//! [`BLOCK_COMMENT`] tokens rather than being skipped, so the token stream
//! concatenates back to the source verbatim. Unrecognized characters become
//! one-character [`ERROR`] tokens and lexing continues at the next
//! character.

mod cursor;

use cursor::Cursor;
pub use ferrite_syntax::SyntaxKind;
use ferrite_syntax::SyntaxKind::*;
use text_size::{TextRange, TextSize};

/// A single lexed token: a kind plus the source range it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

pub struct Tokenizer<'text> {
    text: &'text str,
    cursor: Cursor<'text>,
}

impl<'text> Tokenizer<'text> {
    pub fn new(text: &'text str) -> Self {
        Self { text, cursor: Cursor::new(text) }
    }

    fn offset(&self) -> TextSize {
        TextSize::new(self.text.len() as u32) - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let end = self.offset();
        TextRange::new(end - self.cursor.pos_within_token(), end)
    }

    fn text(&self) -> &'text str {
        &self.text[self.range()]
    }

    /// Lexes the next token. At the end of input this returns an [`EOF`]
    /// token with an empty range, forever.
    pub fn next_token(&mut self) -> Token {
        let kind = self.syntax_kind();
        let range = self.range();
        self.cursor.reset_pos_within_token();
        Token { kind, range }
    }

    fn syntax_kind(&mut self) -> SyntaxKind {
        if self.cursor.is_eof() {
            return EOF;
        }
        match self.cursor.advance() {
            c if c.is_whitespace() => {
                self.cursor.advance_while(char::is_whitespace);
                WHITESPACE
            }
            '/' => match self.cursor.peek() {
                '/' => {
                    self.cursor.advance_while(|c| c != '\n');
                    LINE_COMMENT
                }
                '*' => {
                    self.cursor.advance();
                    self.block_comment();
                    BLOCK_COMMENT
                }
                _ => SLASH,
            },
            '(' => L_PAREN,
            ')' => R_PAREN,
            '[' => L_BRACK,
            ']' => R_BRACK,
            '{' => L_BRACE,
            '}' => R_BRACE,
            ',' => COMMA,
            ';' => SEMICOLON,
            '.' => DOT,
            '^' => CARET,
            ':' => {
                if self.cursor.matches(':') {
                    self.cursor.advance();
                    COLON2
                } else {
                    COLON
                }
            }
            '-' => {
                if self.cursor.matches('>') {
                    self.cursor.advance();
                    ARROW
                } else {
                    MINUS
                }
            }
            '=' => {
                if self.cursor.matches('=') {
                    self.cursor.advance();
                    EQ2
                } else {
                    EQ
                }
            }
            '!' => {
                if self.cursor.matches('=') {
                    self.cursor.advance();
                    NEQ
                } else {
                    BANG
                }
            }
            '<' => {
                if self.cursor.matches('=') {
                    self.cursor.advance();
                    LTEQ
                } else {
                    LT
                }
            }
            '>' => {
                if self.cursor.matches('=') {
                    self.cursor.advance();
                    GTEQ
                } else {
                    GT
                }
            }
            '&' => {
                if self.cursor.matches('&') {
                    self.cursor.advance();
                    AMP2
                } else {
                    AMP
                }
            }
            '|' => {
                if self.cursor.matches('|') {
                    self.cursor.advance();
                    PIPE2
                } else {
                    PIPE
                }
            }
            '+' => PLUS,
            '*' => STAR,
            '%' => PERCENT,
            '\'' => self.lifetime_or_char(),
            '"' => self.string(),
            c @ '0'..='9' => self.number(c),
            c if is_ident_start(c) => {
                self.cursor.advance_while(is_ident_continue);
                SyntaxKind::from_keyword(self.text()).unwrap_or(IDENT)
            }
            _ => ERROR,
        }
    }

    /// Consumes a block comment body, `/*` already eaten. Nesting is
    /// honored; an unterminated comment runs to the end of input.
    fn block_comment(&mut self) {
        let mut depth = 1u32;
        while !self.cursor.is_eof() {
            match self.cursor.advance() {
                '/' if self.cursor.matches('*') => {
                    self.cursor.advance();
                    depth += 1;
                }
                '*' if self.cursor.matches('/') => {
                    self.cursor.advance();
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Disambiguates `'a` (lifetime) from `'a'` (char literal), the leading
    /// quote already eaten.
    fn lifetime_or_char(&mut self) -> SyntaxKind {
        if is_ident_start(self.cursor.peek()) && self.cursor.second() != '\'' {
            self.cursor.advance();
            self.cursor.advance_while(is_ident_continue);
            return LIFETIME;
        }

        while !self.cursor.is_eof() {
            match self.cursor.peek() {
                '\'' => {
                    self.cursor.advance();
                    break;
                }
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                '\n' => break,
                _ => {
                    self.cursor.advance();
                }
            }
        }
        CHAR
    }

    /// Consumes a string literal body, the opening quote already eaten. An
    /// unterminated string runs to the end of input and is still a [`STRING`]
    /// token; the parser reports the error.
    fn string(&mut self) -> SyntaxKind {
        while !self.cursor.is_eof() {
            match self.cursor.advance() {
                '\\' => {
                    self.cursor.advance();
                }
                '"' => break,
                _ => {}
            }
        }
        STRING
    }

    fn number(&mut self, first: char) -> SyntaxKind {
        if first == '0' {
            match self.cursor.peek() {
                'b' | 'o' => {
                    self.cursor.advance();
                    self.digits(false);
                    return INT_NUMBER;
                }
                'x' => {
                    self.cursor.advance();
                    self.digits(true);
                    return INT_NUMBER;
                }
                _ => {}
            }
        }
        self.digits(false);

        // A float needs a digit after the dot; `1.foo` stays an int so the
        // dot can begin a field access.
        if self.cursor.matches('.') && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.digits(false);
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.float_exponent();
            return FLOAT_NUMBER;
        }

        INT_NUMBER
    }

    fn digits(&mut self, allow_hex: bool) {
        loop {
            match self.cursor.peek() {
                '_' | '0'..='9' => {
                    self.cursor.advance();
                }
                'a'..='f' | 'A'..='F' if allow_hex => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn float_exponent(&mut self) {
        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.cursor.advance();
            if self.cursor.matches('-') || self.cursor.matches('+') {
                self.cursor.advance();
            }
            self.digits(false);
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != EOF).then_some(token)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        Tokenizer::new(text).map(|token| token.kind).collect()
    }

    fn single(text: &str) -> SyntaxKind {
        let mut tokenizer = Tokenizer::new(text);
        let token = tokenizer.next_token();
        assert_eq!(usize::from(token.range.len()), text.len(), "input: {text:?}");
        token.kind
    }

    #[test]
    fn tokens_cover_the_input_exactly() {
        let text = "fn main() { let x = 1 + 2; } // done";
        let mut end = TextSize::new(0);
        for token in Tokenizer::new(text) {
            assert_eq!(token.range.start(), end);
            end = token.range.end();
        }
        assert_eq!(usize::from(end), text.len());
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("fn foo loop breaker"),
            [FN_KW, WHITESPACE, IDENT, WHITESPACE, LOOP_KW, WHITESPACE, IDENT],
        );
        assert_eq!(single("break"), BREAK_KW);
        assert_eq!(single("_underscore"), IDENT);
    }

    #[test]
    fn integer_literals() {
        for input in ["123", "0", "0b1010", "0o755", "0x1f", "123_456"] {
            assert_eq!(single(input), INT_NUMBER, "input: {input:?}");
        }
    }

    #[test]
    fn float_literals() {
        for input in ["123.456", "0.0", "1e10", "1.0e-5", "123_456.789_012"] {
            assert_eq!(single(input), FLOAT_NUMBER, "input: {input:?}");
        }
    }

    #[test]
    fn dot_after_int_is_field_access() {
        assert_eq!(kinds("1.foo"), [INT_NUMBER, DOT, IDENT]);
        assert_eq!(kinds("tuple.0"), [IDENT, DOT, INT_NUMBER]);
    }

    #[test]
    fn multi_char_punctuation() {
        assert_eq!(kinds("== != <= >= && || -> ::").iter().filter(|k| **k != WHITESPACE).count(), 8);
        assert_eq!(kinds("=="), [EQ2]);
        assert_eq!(kinds("="), [EQ]);
        assert_eq!(kinds("->"), [ARROW]);
        assert_eq!(kinds("::"), [COLON2]);
        assert_eq!(kinds(":"), [COLON]);
        assert_eq!(kinds("!="), [NEQ]);
        assert_eq!(kinds("!"), [BANG]);
    }

    #[test]
    fn lifetimes_and_char_literals() {
        assert_eq!(kinds("'outer"), [LIFETIME]);
        assert_eq!(kinds("'a'"), [CHAR]);
        assert_eq!(kinds("'\\n'"), [CHAR]);
        assert_eq!(kinds("'outer: loop"), [LIFETIME, COLON, WHITESPACE, LOOP_KW]);
    }

    #[test]
    fn string_literals() {
        assert_eq!(single(r#""hello""#), STRING);
        assert_eq!(single(r#""with \" escape""#), STRING);
        // Unterminated: the rest of the input is one STRING token.
        assert_eq!(kinds("\"oops"), [STRING]);
    }

    #[test]
    fn comments_are_single_tokens() {
        assert_eq!(kinds("// line"), [LINE_COMMENT]);
        assert_eq!(kinds("/* block */x"), [BLOCK_COMMENT, IDENT]);
        assert_eq!(kinds("/* outer /* inner */ still */x"), [BLOCK_COMMENT, IDENT]);
        // Unterminated block comment runs to the end of input.
        assert_eq!(kinds("/* never closed"), [BLOCK_COMMENT]);
    }

    #[test]
    fn unknown_characters_become_error_tokens() {
        assert_eq!(kinds("@$"), [ERROR, ERROR]);
        assert_eq!(kinds("a @ b"), [IDENT, WHITESPACE, ERROR, WHITESPACE, IDENT]);
    }

    #[test]
    fn nul_bytes_are_error_tokens_not_eof() {
        assert_eq!(kinds("a\u{0}b"), [IDENT, ERROR, IDENT]);
        assert_eq!(single("\u{0}"), ERROR);

        let tokens: Vec<_> = Tokenizer::new("a\u{0}b").collect();
        assert_eq!(tokens[1].range, TextRange::new(1.into(), 2.into()));
        assert_eq!(tokens[2].range, TextRange::new(2.into(), 3.into()));
    }

    #[test]
    fn eof_is_sticky() {
        let mut tokenizer = Tokenizer::new("");
        assert_eq!(tokenizer.next_token().kind, EOF);
        assert_eq!(tokenizer.next_token().kind, EOF);
    }
}

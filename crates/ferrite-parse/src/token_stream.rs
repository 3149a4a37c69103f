//! Buffered view over the tokenizer with bounded significant lookahead.

use std::collections::VecDeque;

use ferrite_syntax::SyntaxKind::{self, EOF};
use ferrite_tokenizer::{Token, Tokenizer};
use text_size::{TextLen, TextRange};

/// The grammar never looks further ahead than this many significant tokens.
pub(crate) const MAX_LOOKAHEAD: usize = 3;

pub(crate) struct TokenStream<'text> {
    tokenizer: Tokenizer<'text>,
    buf: VecDeque<Token>,
    eof_range: TextRange,
}

impl<'text> TokenStream<'text> {
    pub(crate) fn new(text: &'text str) -> Self {
        Self {
            tokenizer: Tokenizer::new(text),
            buf: VecDeque::with_capacity(8),
            eof_range: TextRange::empty(text.text_len()),
        }
    }

    /// Kind of the `n`-th significant token ahead, trivia skipped. Past the
    /// end of input this is [`EOF`].
    pub(crate) fn nth(&mut self, n: usize) -> SyntaxKind {
        debug_assert!(n <= MAX_LOOKAHEAD);
        self.fill(n + 1);
        self.buf.iter().filter(|token| !token.kind.is_trivia()).nth(n).map_or(EOF, |t| t.kind)
    }

    /// Range of the next significant token; an empty range at the end of the
    /// text once the input is exhausted.
    pub(crate) fn current_range(&mut self) -> TextRange {
        self.fill(1);
        self.buf
            .iter()
            .find(|token| !token.kind.is_trivia())
            .map_or(self.eof_range, |t| t.range)
    }

    fn fill(&mut self, want: usize) {
        let mut have = self.buf.iter().filter(|token| !token.kind.is_trivia()).count();
        while have < want {
            let token = self.tokenizer.next_token();
            if token.kind == EOF {
                break;
            }
            if !token.kind.is_trivia() {
                have += 1;
            }
            self.buf.push_back(token);
        }
    }

    /// Pops the next raw token, trivia included; `None` at the end of input.
    pub(crate) fn bump_raw(&mut self) -> Option<Token> {
        if let Some(token) = self.buf.pop_front() {
            return Some(token);
        }
        let token = self.tokenizer.next_token();
        (token.kind != EOF).then_some(token)
    }

    /// Peeks the next raw token without consuming it.
    pub(crate) fn peek_raw(&mut self) -> Option<Token> {
        if self.buf.is_empty() {
            let token = self.tokenizer.next_token();
            if token.kind == EOF {
                return None;
            }
            self.buf.push_back(token);
        }
        self.buf.front().copied()
    }
}

#[cfg(test)]
mod tests {
    use ferrite_syntax::SyntaxKind::*;

    use super::*;

    #[test]
    fn lookahead_skips_trivia() {
        let mut stream = TokenStream::new("'outer  : /* c */ loop");
        assert_eq!(stream.nth(0), LIFETIME);
        assert_eq!(stream.nth(1), COLON);
        assert_eq!(stream.nth(2), LOOP_KW);
        assert_eq!(stream.nth(3), EOF);
    }

    #[test]
    fn bump_raw_yields_every_token() {
        let mut stream = TokenStream::new("a b");
        // Lookahead first, so the buffer is warm.
        assert_eq!(stream.nth(1), IDENT);

        let mut kinds = Vec::new();
        while let Some(token) = stream.bump_raw() {
            kinds.push(token.kind);
        }
        assert_eq!(kinds, [IDENT, WHITESPACE, IDENT]);
    }

    #[test]
    fn current_range_at_eof_is_empty_at_text_end() {
        let mut stream = TokenStream::new("ab ");
        assert_eq!(stream.nth(0), IDENT);
        stream.bump_raw();
        assert_eq!(stream.current_range(), TextRange::empty(3.into()));
    }
}

//! Event-collecting parser core.
//!
//! Grammar code drives a [`Parser`] through [`Marker`]s: `start` reserves a
//! slot, grammar rules consume tokens, `complete` decides the node kind
//! afterwards. `precede` retrofits a parent around an already completed node,
//! which is how left recursion (binary and postfix expressions) is expressed
//! without backtracking. Diagnostics accumulate on the side; the token stream
//! is consumed exactly once and every token ends up in the tree.

use drop_bomb::DropBomb;
use ferrite_errors::Diagnostic;
use ferrite_syntax::{Builder, SyntaxKind, SyntaxSet, SyntaxTree};
use ferrite_tokenizer::Token;

use crate::token_stream::TokenStream;

pub(crate) struct Parser<'text> {
    text: &'text str,
    stream: TokenStream<'text>,
    events: Vec<Event>,
    diagnostics: Vec<Diagnostic>,
    recovering: bool,
}

impl<'text> Parser<'text> {
    pub(crate) fn new(text: &'text str) -> Self {
        Self {
            text,
            stream: TokenStream::new(text),
            events: Vec::new(),
            diagnostics: Vec::new(),
            recovering: false,
        }
    }

    pub(crate) fn peek_kind(&mut self) -> SyntaxKind {
        self.stream.nth(0)
    }

    pub(crate) fn nth_kind(&mut self, n: usize) -> SyntaxKind {
        self.stream.nth(n)
    }

    pub(crate) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn nth_at(&mut self, n: usize, kind: SyntaxKind) -> bool {
        self.nth_kind(n) == kind
    }

    pub(crate) fn at_any(&mut self, set: &SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    /// Consumes the next significant token, carrying any trivia in front of
    /// it into the currently open node. No-op at the end of input.
    ///
    /// Consuming a lexer `ERROR` token records a warning; the character is
    /// otherwise treated like any other token, so panic-mode suppression of
    /// syntactic errors never hides it.
    pub(crate) fn advance(&mut self) {
        if self.peek_kind() == SyntaxKind::EOF {
            return;
        }

        while let Some(token) = self.stream.bump_raw() {
            let significant = !token.kind.is_trivia();
            if token.kind == SyntaxKind::ERROR {
                self.diagnostics.push(Diagnostic::warning("unrecognized character", token.range));
            }
            self.events.push(Event::Token(token));
            if significant {
                break;
            }
        }
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if !self.at(kind) {
            return false;
        }
        self.advance();
        true
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(format!("expected {}", kind.show()));
        false
    }

    /// Emits trivia sitting in front of the next significant token (or the
    /// end of input) into the current node. Called before closing the root so
    /// trailing whitespace and comments are not lost.
    pub(crate) fn flush_trivia(&mut self) {
        while let Some(token) = self.stream.peek_raw() {
            if !token.kind.is_trivia() {
                break;
            }
            self.stream.bump_raw();
            self.events.push(Event::Token(token));
        }
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    /// Records an error at the next significant token. While recovering from
    /// a previous error the message is dropped, so one stretch of bad input
    /// produces one diagnostic.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        if std::mem::replace(&mut self.recovering, true) {
            return;
        }
        let range = self.stream.current_range();
        self.diagnostics.push(Diagnostic::error(message, range));
    }

    /// Re-arms error reporting. Grammar rules call this at positions that are
    /// known-good synchronization points, an item or statement start.
    pub(crate) fn clear_recovering(&mut self) {
        self.recovering = false;
    }

    /// Reports an error and, unless the next token can start something the
    /// caller knows how to continue with, bumps it into an `ERROR` node.
    pub(crate) fn error_recover(&mut self, message: &str, recovery: &SyntaxSet) {
        self.error(message);

        if self.at_any(recovery) || self.at(SyntaxKind::EOF) {
            return;
        }

        let m = self.start();
        self.advance();
        m.complete(self, SyntaxKind::ERROR);
    }

    pub(crate) fn error_and_bump(&mut self, message: &str) {
        self.error_recover(message, &SyntaxSet::EMPTY);
    }

    /// Replays the events into a [`Builder`] and returns the finished tree
    /// together with the collected diagnostics.
    pub(crate) fn finish(self) -> (SyntaxTree, Vec<Diagnostic>) {
        let Self { text, stream: _, mut events, diagnostics, .. } = self;
        let mut builder = Builder::new(text);
        let mut forward_parents = Vec::new();

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::TOMBSTONE) {
                Event::Start { kind, forward_parent } => {
                    if kind == SyntaxKind::TOMBSTONE {
                        continue;
                    }

                    forward_parents.push(kind);
                    let mut idx = i;
                    let mut fp = forward_parent;
                    while let Some(fwd) = fp {
                        idx += fwd as usize;

                        fp = match std::mem::replace(&mut events[idx], Event::TOMBSTONE) {
                            Event::Start { kind, forward_parent } => {
                                if kind != SyntaxKind::TOMBSTONE {
                                    forward_parents.push(kind);
                                }
                                forward_parent
                            }
                            _ => unreachable!(),
                        };
                    }

                    for kind in forward_parents.drain(..).rev() {
                        builder.start_node(kind);
                    }
                }
                Event::Finish => {
                    builder.finish_node();
                }
                Event::Token(Token { kind, range }) => {
                    builder.token(kind, range);
                }
            }
        }

        (builder.finish(), diagnostics)
    }
}

enum Event {
    Start { kind: SyntaxKind, forward_parent: Option<u32> },
    Token(Token),
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Self::Start { kind: SyntaxKind::TOMBSTONE, forward_parent: None };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Self {
        Self { position: pos, bomb: DropBomb::new("Marker must be either completed or abandoned") }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot, .. } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
        CompletedMarker { pos: self.position }
    }
}

pub(crate) struct CompletedMarker {
    pos: u32,
}

impl CompletedMarker {
    /// Starts a new marker that will become the parent of this completed
    /// node when the events are replayed.
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new_pos = p.start();

        match &mut p.events[self.pos as usize] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.position - self.pos);
            }
            _ => unreachable!(),
        }

        new_pos
    }
}

//! Typed views over the generic syntax tree.
//!
//! Each grammar production gets a zero-cost wrapper struct around a
//! [`SyntaxNode`] with named accessors that search the node's direct
//! children. The wrappers are generated by the `ast_node!` macro from the
//! per-production child tables in [`nodes`]; they perform no parsing and no
//! validation.
//!
//! Accessors come in two flavors:
//! - mandatory accessors return the child directly and panic if it is
//!   missing — the parser guarantees these children exist for every node of
//!   the kind it emits, so an absence is a parser bug, not malformed input;
//! - optional accessors return `Option` for children the grammar genuinely
//!   allows to be absent (a loop's label, an `else` branch, ...).

mod nodes;
mod visitor;

pub use nodes::*;
pub use visitor::{Visitor, walk};

use crate::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Trait for typed wrappers over a [`SyntaxNode`] of a fixed kind.
pub trait AstNode<'a>: Copy {
    /// Attempts to downcast a generic node into this typed view.
    fn cast(syntax: SyntaxNode<'a>) -> Option<Self>
    where
        Self: Sized;

    /// Returns the underlying generic node.
    fn syntax(self) -> SyntaxNode<'a>;

    /// Returns the source text covered by this node.
    fn text(self) -> &'a str {
        self.syntax().text()
    }
}

/// Child-lookup helpers shared by all generated accessors.
pub(crate) mod support {
    use super::{AstNode, SyntaxKind, SyntaxNode, SyntaxToken};

    pub(crate) fn child<'a, N: AstNode<'a>>(parent: SyntaxNode<'a>) -> Option<N> {
        parent.children().find_map(N::cast)
    }

    pub(crate) fn children<'a, N: AstNode<'a> + 'a>(
        parent: SyntaxNode<'a>,
    ) -> impl Iterator<Item = N> + 'a {
        parent.children().filter_map(N::cast)
    }

    pub(crate) fn token(parent: SyntaxNode<'_>, kind: SyntaxKind) -> Option<SyntaxToken<'_>> {
        parent.tokens().find(|token| token.kind() == kind)
    }

    #[track_caller]
    pub(crate) fn required_child<'a, N: AstNode<'a>>(parent: SyntaxNode<'a>, what: &str) -> N {
        match child(parent) {
            Some(child) => child,
            None => missing(parent, what),
        }
    }

    #[track_caller]
    pub(crate) fn required_token<'a>(
        parent: SyntaxNode<'a>,
        kind: SyntaxKind,
    ) -> SyntaxToken<'a> {
        match token(parent, kind) {
            Some(token) => token,
            None => missing(parent, kind.show()),
        }
    }

    #[track_caller]
    fn missing(parent: SyntaxNode<'_>, what: &str) -> ! {
        panic!(
            "{:?} node at {:?} has no {what} child; the parser emitted a malformed tree",
            parent.kind(),
            parent.range(),
        )
    }
}

/// Generates a typed wrapper struct and its `AstNode` impl.
macro_rules! ast_node {
    ($(#[$attr:meta])* $name:ident, $kind:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'a>(SyntaxNode<'a>);

        impl<'a> AstNode<'a> for $name<'a> {
            fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
                (syntax.kind() == SyntaxKind::$kind).then_some(Self(syntax))
            }

            fn syntax(self) -> SyntaxNode<'a> {
                self.0
            }
        }
    };
}

pub(crate) use ast_node;

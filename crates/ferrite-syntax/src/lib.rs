//! Lossless, immutable syntax tree for Ferrite source code.
//!
//! The tree is built once from parser events and then navigated through
//! cheap, `Copy` handles that borrow the tree. Leaf tokens cover every byte
//! of the original text, trivia included, so concatenating them in order
//! reproduces the source exactly.

/// Typed AST wrappers around the raw syntax tree.
pub mod ast;
mod builder;
mod syntax_kind;
mod syntax_set;
mod tree;

/// Incremental builder for constructing a `SyntaxTree`.
pub use builder::Builder;
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Primary syntax tree API types and adapters.
pub use tree::{
    Children, ChildrenWithTokens, NodeOrToken, Preorder, PreorderWithTokens, SyntaxElement,
    SyntaxNode, SyntaxToken, SyntaxTree, WalkEvent, WalkEventWithTokens,
};

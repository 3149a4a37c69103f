//! Parser entry point.
//!
//! [`source_file`] turns any string into a lossless [`SyntaxTree`] plus a
//! list of [`Diagnostic`]s. It never fails: malformed input produces a tree
//! with `ERROR` nodes and diagnostics describing what went wrong, and the
//! concatenated leaves of the tree always reproduce the input byte for byte.

use ferrite_errors::{Diagnostic, Severity};
use ferrite_syntax::SyntaxTree;
use ferrite_syntax::ast::{AstNode as _, SourceFile};

mod grammar;
mod parser;
#[cfg(test)]
mod tests;
mod token_stream;

/// The result of parsing: the tree and everything that went wrong.
#[derive(Debug)]
pub struct Parse {
    tree: SyntaxTree,
    diagnostics: Vec<Diagnostic>,
}

impl Parse {
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// Diagnostics in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True when no error-severity diagnostics were produced. Stray
    /// characters only warn and do not fail the parse on their own.
    pub fn ok(&self) -> bool {
        self.diagnostics.iter().all(|d| d.severity() != Severity::Error)
    }

    /// The typed view of the root node.
    pub fn source_file(&self) -> SourceFile<'_> {
        SourceFile::cast(self.tree.root()).expect("the root node is always a source file")
    }
}

/// Parses `text` as a whole source file.
pub fn source_file(text: &str) -> Parse {
    let mut parser = parser::Parser::new(text);
    grammar::items::source_file(&mut parser);
    let (tree, diagnostics) = parser.finish();
    Parse { tree, diagnostics }
}

//! Builder that turns a flat stream of `start_node`/`token`/`finish_node`
//! calls into an immutable [`SyntaxTree`].

use text_size::{TextRange, TextSize};

use crate::SyntaxKind;
use crate::tree::{ChildData, NodeData, SyntaxTree};

struct OpenNode {
    kind: SyntaxKind,
    children: Vec<ChildData>,
}

/// Builds a `SyntaxTree` from parser events.
///
/// Nodes must be opened and closed in a balanced, well-nested order; exactly
/// one root node must remain when [`Builder::finish`] is called. Token ranges
/// must be contiguous and in source order, which the parser guarantees by
/// feeding every token of the tokenizer through in sequence.
pub struct Builder {
    text: Box<str>,
    nodes: Vec<NodeData>,
    children: Vec<ChildData>,
    open: Vec<OpenNode>,
    children_pool: Vec<Vec<ChildData>>,
    pos: TextSize,
    root: Option<u32>,
}

const DEFAULT_TREE_DEPTH: usize = 16;
const DEFAULT_TREE_SIZE: usize = 128;

impl Builder {
    /// Creates a new builder for `text`.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            nodes: Vec::with_capacity(DEFAULT_TREE_SIZE),
            children: Vec::with_capacity(DEFAULT_TREE_SIZE),
            open: Vec::with_capacity(DEFAULT_TREE_DEPTH),
            children_pool: Vec::new(),
            pos: TextSize::new(0),
            root: None,
        }
    }

    fn new_children_vec(&mut self) -> Vec<ChildData> {
        self.children_pool.pop().unwrap_or_default()
    }

    /// Starts a new node of the given kind.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        assert!(self.root.is_none(), "cannot start a node after the root finished");
        let children = self.new_children_vec();
        self.open.push(OpenNode { kind, children });
    }

    /// Adds a token to the currently open node.
    pub fn token(&mut self, kind: SyntaxKind, range: TextRange) {
        let open = self.open.last_mut().expect("token added outside of any node");
        assert_eq!(range.start(), self.pos, "tokens must be contiguous and in source order");
        assert!(self.text.is_char_boundary(usize::from(range.end())));
        open.children.push(ChildData::Token { kind, range });
        self.pos = range.end();
    }

    /// Finishes the most recently started node.
    pub fn finish_node(&mut self) {
        let open = self.open.pop().expect("finish_node without a matching start_node");

        let range = match (open.children.first(), open.children.last()) {
            (Some(first), Some(last)) => {
                TextRange::new(self.child_range(first).start(), self.child_range(last).end())
            }
            _ => TextRange::empty(self.pos),
        };

        let children_start = self.children.len() as u32;
        let children_len = open.children.len() as u32;
        let mut children = open.children;
        self.children.append(&mut children);
        self.children_pool.push(children);

        let index = self.nodes.len() as u32;
        self.nodes.push(NodeData { kind: open.kind, range, children_start, children_len });

        match self.open.last_mut() {
            Some(parent) => parent.children.push(ChildData::Node(index)),
            None => self.root = Some(index),
        }
    }

    fn child_range(&self, child: &ChildData) -> TextRange {
        match *child {
            ChildData::Node(index) => self.nodes[index as usize].range,
            ChildData::Token { range, .. } => range,
        }
    }

    /// Finishes building and returns the immutable `SyntaxTree`.
    pub fn finish(self) -> SyntaxTree {
        assert!(self.open.is_empty(), "unfinished nodes remain");
        let root = self.root.expect("no root node was built");
        SyntaxTree {
            text: self.text,
            nodes: self.nodes.into_boxed_slice(),
            children: self.children.into_boxed_slice(),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntaxKind::*;

    #[test]
    fn empty_root_node_has_empty_range() {
        let mut builder = Builder::new("");
        builder.start_node(SOURCE_FILE);
        builder.finish_node();
        let tree = builder.finish();

        assert_eq!(tree.root().kind(), SOURCE_FILE);
        assert_eq!(tree.root().range(), TextRange::empty(TextSize::new(0)));
        assert_eq!(tree.root().children_with_tokens().len(), 0);
    }

    #[test]
    #[should_panic(expected = "finish_node without a matching start_node")]
    fn unbalanced_finish_panics() {
        let mut builder = Builder::new("");
        builder.finish_node();
    }
}

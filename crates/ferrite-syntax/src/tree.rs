//! Arena-owned syntax tree and the `Copy` handles used to navigate it.
//!
//! Nodes own their children exclusively; no parent back-pointers are stored.
//! Context, where needed, is reconstructed by walking down from the root,
//! which keeps the finished tree plain data: `Send + Sync`, shareable
//! read-only across threads, replaced wholesale on re-parse.

use std::fmt;
use std::fmt::Write as _;

use text_size::TextRange;

use crate::SyntaxKind;

pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) range: TextRange,
    pub(crate) children_start: u32,
    pub(crate) children_len: u32,
}

#[derive(Clone, Copy)]
pub(crate) enum ChildData {
    Node(u32),
    Token { kind: SyntaxKind, range: TextRange },
}

/// Owned syntax tree for a single source text.
pub struct SyntaxTree {
    pub(crate) text: Box<str>,
    pub(crate) nodes: Box<[NodeData]>,
    pub(crate) children: Box<[ChildData]>,
    pub(crate) root: u32,
}

impl SyntaxTree {
    /// Returns the root syntax node.
    #[inline]
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode { tree: self, index: self.root }
    }

    /// Returns the full source text for this tree.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the source slice covered by `range`.
    #[inline]
    pub fn text_of(&self, range: TextRange) -> &str {
        &self.text[range]
    }

    /// Renders the tree in an indented, one-element-per-line format.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        for event in self.root().preorder_with_tokens() {
            match event {
                WalkEventWithTokens::Enter(node) => {
                    let _ = writeln!(
                        out,
                        "{:indent$}{:?}@{:?}",
                        "",
                        node.kind(),
                        node.range(),
                        indent = depth * 2
                    );
                    depth += 1;
                }
                WalkEventWithTokens::Leave(_) => depth -= 1,
                WalkEventWithTokens::Token(token) => {
                    let _ = writeln!(
                        out,
                        "{:indent$}{:?}@{:?} {:?}",
                        "",
                        token.kind(),
                        token.range(),
                        token.text(),
                        indent = depth * 2
                    );
                }
            }
        }
        out
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree").field("text_len", &self.text.len()).finish_non_exhaustive()
    }
}

/// Node handle tied to the lifetime of the tree.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    index: u32,
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for SyntaxNode<'_> {}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.range())
    }
}

impl<'a> SyntaxNode<'a> {
    #[inline]
    fn data(self) -> &'a NodeData {
        &self.tree.nodes[self.index as usize]
    }

    /// Returns this node's kind.
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    /// Returns the text range covered by this node, attached trivia included.
    #[inline]
    pub fn range(self) -> TextRange {
        self.data().range
    }

    /// Returns the text slice covered by this node.
    #[inline]
    pub fn text(self) -> &'a str {
        &self.tree.text[self.range()]
    }

    /// Iterates direct children, nodes and tokens alike, in source order.
    #[inline]
    pub fn children_with_tokens(self) -> ChildrenWithTokens<'a> {
        let data = self.data();
        let start = data.children_start as usize;
        let end = start + data.children_len as usize;
        ChildrenWithTokens { tree: self.tree, children: self.tree.children[start..end].iter() }
    }

    /// Iterates direct child nodes, skipping tokens.
    #[inline]
    pub fn children(self) -> Children<'a> {
        Children { inner: self.children_with_tokens() }
    }

    /// Iterates direct child tokens, skipping nodes.
    #[inline]
    pub fn tokens(self) -> impl Iterator<Item = SyntaxToken<'a>> {
        self.children_with_tokens().filter_map(SyntaxElement::into_token)
    }

    /// Returns a preorder iterator over descendant nodes, this node included.
    #[inline]
    pub fn preorder(self) -> Preorder<'a> {
        Preorder { inner: self.preorder_with_tokens() }
    }

    /// Returns a preorder iterator over descendant nodes and tokens.
    #[inline]
    pub fn preorder_with_tokens(self) -> PreorderWithTokens<'a> {
        PreorderWithTokens { stack: Vec::with_capacity(16), root: Some(self) }
    }

    /// Iterates all descendant nodes, this node included.
    #[inline]
    pub fn descendants(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.preorder().filter_map(|event| match event {
            WalkEvent::Enter(node) => Some(node),
            WalkEvent::Leave(_) => None,
        })
    }

    /// Iterates all descendant tokens in source order.
    #[inline]
    pub fn descendant_tokens(self) -> impl Iterator<Item = SyntaxToken<'a>> {
        self.preorder_with_tokens().filter_map(|event| match event {
            WalkEventWithTokens::Token(token) => Some(token),
            _ => None,
        })
    }
}

/// Token handle tied to the lifetime of the tree.
#[derive(Clone, Copy)]
pub struct SyntaxToken<'a> {
    tree: &'a SyntaxTree,
    kind: SyntaxKind,
    range: TextRange,
}

impl PartialEq for SyntaxToken<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.range == other.range
    }
}

impl Eq for SyntaxToken<'_> {}

impl fmt::Debug for SyntaxToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?} {:?}", self.kind(), self.range(), self.text())
    }
}

impl<'a> SyntaxToken<'a> {
    /// Returns this token's kind.
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.kind
    }

    /// Returns `true` if this token is trivia.
    #[inline]
    pub fn is_trivia(self) -> bool {
        self.kind.is_trivia()
    }

    /// Returns the token text range.
    #[inline]
    pub fn range(self) -> TextRange {
        self.range
    }

    /// Returns the token text.
    #[inline]
    pub fn text(self) -> &'a str {
        &self.tree.text[self.range]
    }
}

/// Node or token element inside the tree.
pub type SyntaxElement<'a> = NodeOrToken<SyntaxNode<'a>, SyntaxToken<'a>>;

/// Iterator over direct children including tokens.
pub struct ChildrenWithTokens<'a> {
    tree: &'a SyntaxTree,
    children: std::slice::Iter<'a, ChildData>,
}

impl Clone for ChildrenWithTokens<'_> {
    #[inline]
    fn clone(&self) -> Self {
        Self { tree: self.tree, children: self.children.clone() }
    }
}

impl<'a> Iterator for ChildrenWithTokens<'a> {
    type Item = SyntaxElement<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.children.next().map(|child| match *child {
            ChildData::Node(index) => SyntaxElement::Node(SyntaxNode { tree, index }),
            ChildData::Token { kind, range } => {
                SyntaxElement::Token(SyntaxToken { tree, kind, range })
            }
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.children.size_hint()
    }
}

impl ExactSizeIterator for ChildrenWithTokens<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.children.len()
    }
}

/// Iterator over direct child nodes only.
pub struct Children<'a> {
    inner: ChildrenWithTokens<'a>,
}

impl Clone for Children<'_> {
    #[inline]
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(SyntaxElement::into_node)
    }
}

/// Preorder walk event for nodes.
#[derive(Clone, Copy)]
pub enum WalkEvent<'a> {
    Enter(SyntaxNode<'a>),
    Leave(SyntaxNode<'a>),
}

/// Preorder traversal over nodes.
#[derive(Clone)]
pub struct Preorder<'a> {
    inner: PreorderWithTokens<'a>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|event| match event {
            WalkEventWithTokens::Enter(it) => Some(WalkEvent::Enter(it)),
            WalkEventWithTokens::Leave(it) => Some(WalkEvent::Leave(it)),
            WalkEventWithTokens::Token(_) => None,
        })
    }
}

/// Preorder walk event including tokens.
#[derive(Clone, Copy)]
pub enum WalkEventWithTokens<'a> {
    Enter(SyntaxNode<'a>),
    Leave(SyntaxNode<'a>),
    Token(SyntaxToken<'a>),
}

/// Preorder traversal over nodes and tokens.
#[derive(Clone)]
pub struct PreorderWithTokens<'a> {
    stack: Vec<(SyntaxNode<'a>, ChildrenWithTokens<'a>)>,
    root: Option<SyntaxNode<'a>>,
}

impl<'a> Iterator for PreorderWithTokens<'a> {
    type Item = WalkEventWithTokens<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some((_, active)) = self.stack.last_mut() else {
            let root = self.root.take()?;
            self.stack.push((root, root.children_with_tokens()));
            return Some(WalkEventWithTokens::Enter(root));
        };
        match active.next() {
            Some(SyntaxElement::Node(child)) => {
                self.stack.push((child, child.children_with_tokens()));
                Some(WalkEventWithTokens::Enter(child))
            }
            Some(SyntaxElement::Token(child)) => Some(WalkEventWithTokens::Token(child)),
            None => {
                let (exited, _) = self.stack.pop()?;
                Some(WalkEventWithTokens::Leave(exited))
            }
        }
    }
}

/// Node-or-token wrapper used throughout the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

impl<N, T> NodeOrToken<N, T> {
    /// Converts into the node variant, if any.
    pub fn into_node(self) -> Option<N> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    /// Converts into the token variant, if any.
    pub fn into_token(self) -> Option<T> {
        match self {
            NodeOrToken::Node(_) => None,
            NodeOrToken::Token(token) => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use text_size::TextSize;

    use super::*;
    use crate::Builder;
    use crate::SyntaxKind::*;

    fn sample_tree() -> SyntaxTree {
        // loop {}
        let mut builder = Builder::new("loop {}");
        builder.start_node(SOURCE_FILE);
        builder.start_node(LOOP_EXPR);
        builder.token(LOOP_KW, TextRange::new(TextSize::new(0), TextSize::new(4)));
        builder.start_node(BLOCK);
        builder.token(WHITESPACE, TextRange::new(TextSize::new(4), TextSize::new(5)));
        builder.token(L_BRACE, TextRange::new(TextSize::new(5), TextSize::new(6)));
        builder.token(R_BRACE, TextRange::new(TextSize::new(6), TextSize::new(7)));
        builder.finish_node();
        builder.finish_node();
        builder.finish_node();
        builder.finish()
    }

    #[test]
    fn leaves_reproduce_source() {
        let tree = sample_tree();
        let reconstructed: String =
            tree.root().descendant_tokens().map(|token| token.text()).collect();
        assert_eq!(reconstructed, tree.text());
    }

    #[test]
    fn ranges_nest() {
        let tree = sample_tree();
        let root = tree.root();
        assert_eq!(root.range(), TextRange::new(TextSize::new(0), TextSize::new(7)));

        let loop_expr = root.children().next().unwrap();
        assert_eq!(loop_expr.kind(), LOOP_EXPR);

        let block = loop_expr.children().next().unwrap();
        assert_eq!(block.kind(), BLOCK);
        assert_eq!(block.text(), " {}");
    }

    #[test]
    fn trees_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyntaxTree>();
    }
}

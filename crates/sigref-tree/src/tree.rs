//! The parse-tree data model.
//!
//! A tree is produced by an external parser in a single pass and is immutable
//! afterwards: every accessor takes `&self`, children are exclusively owned by
//! their parent, and child order encodes source left-to-right order. Because
//! nodes are never mutated after construction, a tree can be walked by any
//! number of concurrent traversals without locking.
//!
//! Three node shapes exist:
//!
//! - [`InternalNode`]: tagged with a grammar rule kind, owns ordered children
//! - [`TerminalNode`]: a leaf wrapping a single lexical [`Token`]
//! - [`ErrorNode`]: a span the parser could not match to any rule
//!
//! [`Node`] is the sum of the three, generic over the grammar's [`RuleKind`].

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

// ============================================================================
// Rule kinds
// ============================================================================

/// The closed set of syntactic categories a grammar defines.
///
/// Each grammar instantiates this once, usually through the
/// [`define_grammar!`](crate::define_grammar) macro. Both traversal protocols
/// are generic over the implementing type.
pub trait RuleKind: Copy + Eq + Hash + fmt::Debug + 'static {
    /// The rule name as spelled in the grammar (e.g. `"methodPattern"`).
    fn name(&self) -> &'static str;

    /// Every rule kind of the grammar, in declaration order.
    fn all() -> &'static [Self]
    where
        Self: Sized;
}

// ============================================================================
// Spans and tokens
// ============================================================================

/// Byte offsets into source text.
///
/// Spans are half-open intervals: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: u64,
    /// End byte offset (exclusive).
    pub end: u64,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: u64, end: u64) -> Self {
        assert!(
            start <= end,
            "Span start ({}) must be <= end ({})",
            start,
            end
        );
        Span { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Opaque token-type id assigned by the lexer.
///
/// The traversal layer never interprets these; they are carried so consumers
/// that know the lexer's numbering can classify terminals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TokenKind(pub u16);

impl TokenKind {
    /// Get the raw id value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

/// A single lexeme: token type, verbatim text, and source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The lexer-assigned token type.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The verbatim source text of the token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The token's position in the source.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// A parse-tree node: internal, terminal, or error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node<R> {
    /// An internal node tagged with a rule kind, owning ordered children.
    Internal(InternalNode<R>),
    /// A leaf wrapping a single token.
    Terminal(TerminalNode),
    /// A span the parser could not match to any rule.
    Error(ErrorNode),
}

/// An internal node: a rule kind plus its ordered children.
///
/// Children are exclusively owned, so every node has exactly one parent and
/// the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalNode<R> {
    kind: R,
    children: Vec<Node<R>>,
}

/// A leaf node wrapping a single lexical token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalNode {
    token: Token,
}

/// A node representing input the parser could not match.
///
/// The parser decides recoverability and encodes the result structurally
/// instead of failing the whole parse; the offending tokens are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNode {
    tokens: Vec<Token>,
}

impl<R> InternalNode<R> {
    /// Create an internal node. Kind and children are fixed for the node's
    /// lifetime.
    pub fn new(kind: R, children: Vec<Node<R>>) -> Self {
        InternalNode { kind, children }
    }

    /// The rule kind this node is tagged with.
    pub fn kind(&self) -> R
    where
        R: Copy,
    {
        self.kind
    }

    /// The node's children, in source order.
    pub fn children(&self) -> &[Node<R>] {
        &self.children
    }

    /// The `i`-th child, if present.
    pub fn child(&self, i: usize) -> Option<&Node<R>> {
        self.children.get(i)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Source span covered by this subtree, merged over its terminals.
    ///
    /// `None` if the subtree contains no tokens at all.
    pub fn span(&self) -> Option<Span> {
        let mut merged: Option<Span> = None;
        for child in &self.children {
            if let Some(s) = child.span() {
                merged = Some(match merged {
                    Some(m) => m.merge(s),
                    None => s,
                });
            }
        }
        merged
    }

    /// Concatenated text of every terminal in this subtree, in source order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_text(&mut out);
        }
        out
    }
}

impl TerminalNode {
    /// Create a terminal node wrapping `token`.
    pub fn new(token: Token) -> Self {
        TerminalNode { token }
    }

    /// The wrapped token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The token's text.
    pub fn text(&self) -> &str {
        self.token.text()
    }

    /// The token's span.
    pub fn span(&self) -> Span {
        self.token.span()
    }
}

impl ErrorNode {
    /// Create an error node over the offending tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        ErrorNode { tokens }
    }

    /// The tokens of the unmatched span.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Concatenated text of the unmatched span.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text()).collect()
    }

    /// Merged span of the offending tokens, if any.
    pub fn span(&self) -> Option<Span> {
        let mut iter = self.tokens.iter().map(|t| t.span());
        let first = iter.next()?;
        Some(iter.fold(first, Span::merge))
    }
}

impl<R> Node<R> {
    /// Build an internal node.
    pub fn internal(kind: R, children: Vec<Node<R>>) -> Self {
        Node::Internal(InternalNode::new(kind, children))
    }

    /// Build a terminal node.
    pub fn terminal(token: Token) -> Self {
        Node::Terminal(TerminalNode::new(token))
    }

    /// Build an error node.
    pub fn error(tokens: Vec<Token>) -> Self {
        Node::Error(ErrorNode::new(tokens))
    }

    /// Whether this is an internal node.
    pub fn is_internal(&self) -> bool {
        matches!(self, Node::Internal(_))
    }

    /// Whether this is a terminal node.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal(_))
    }

    /// Whether this is an error node.
    pub fn is_error(&self) -> bool {
        matches!(self, Node::Error(_))
    }

    /// Borrow as an internal node, if it is one.
    pub fn as_internal(&self) -> Option<&InternalNode<R>> {
        match self {
            Node::Internal(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow as a terminal node, if it is one.
    pub fn as_terminal(&self) -> Option<&TerminalNode> {
        match self {
            Node::Terminal(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow as an error node, if it is one.
    pub fn as_error(&self) -> Option<&ErrorNode> {
        match self {
            Node::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Source span covered by this subtree, if it contains any tokens.
    pub fn span(&self) -> Option<Span> {
        match self {
            Node::Internal(n) => n.span(),
            Node::Terminal(t) => Some(t.span()),
            Node::Error(e) => e.span(),
        }
    }

    /// Concatenated terminal text of this subtree, in source order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Internal(n) => {
                for child in n.children() {
                    child.write_text(out);
                }
            }
            Node::Terminal(t) => out.push_str(t.text()),
            Node::Error(e) => {
                for token in e.tokens() {
                    out.push_str(token.text());
                }
            }
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Internal(n) => 1 + n.children().iter().map(Node::node_count).sum::<usize>(),
            Node::Terminal(_) | Node::Error(_) => 1,
        }
    }

    /// Pre-order iterator over this subtree, starting with `self`.
    pub fn descendants(&self) -> Descendants<'_, R> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator over a subtree. Created by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a, R> {
    stack: Vec<&'a Node<R>>,
}

impl<'a, R> Iterator for Descendants<'a, R> {
    type Item = &'a Node<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Internal(n) = node {
            // Push in reverse so the leftmost child pops first.
            for child in n.children().iter().rev() {
                self.stack.push(child);
            }
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, start: u64) -> Token {
        Token::new(
            TokenKind(0),
            text,
            Span::new(start, start + text.len() as u64),
        )
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Mini {
        Root,
        Item,
    }

    impl RuleKind for Mini {
        fn name(&self) -> &'static str {
            match self {
                Mini::Root => "root",
                Mini::Item => "item",
            }
        }

        fn all() -> &'static [Self] {
            &[Mini::Root, Mini::Item]
        }
    }

    fn sample() -> Node<Mini> {
        Node::internal(
            Mini::Root,
            vec![
                Node::terminal(tok("a", 0)),
                Node::internal(Mini::Item, vec![Node::terminal(tok("bc", 1))]),
                Node::error(vec![tok("!", 3)]),
            ],
        )
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(4, 7);
        let b = Span::new(1, 5);
        assert_eq!(a.merge(b), Span::new(1, 7));
        assert_eq!(Span::new(2, 2).len(), 0);
        assert!(Span::new(2, 2).is_empty());
    }

    #[test]
    #[should_panic(expected = "must be <=")]
    fn test_span_new_rejects_inverted() {
        let _ = Span::new(5, 4);
    }

    #[test]
    fn test_text_concatenates_in_source_order() {
        assert_eq!(sample().text(), "abc!");
    }

    #[test]
    fn test_subtree_span_merges_terminals() {
        assert_eq!(sample().span(), Some(Span::new(0, 4)));
        let empty: Node<Mini> = Node::internal(Mini::Root, vec![]);
        assert_eq!(empty.span(), None);
    }

    #[test]
    fn test_node_count() {
        // root + terminal + item + terminal + error
        assert_eq!(sample().node_count(), 5);
    }

    #[test]
    fn test_descendants_is_pre_order() {
        let tree = sample();
        let kinds: Vec<String> = tree
            .descendants()
            .map(|n| match n {
                Node::Internal(i) => i.kind().name().to_string(),
                Node::Terminal(t) => format!("t:{}", t.text()),
                Node::Error(_) => "error".to_string(),
            })
            .collect();
        assert_eq!(kinds, ["root", "t:a", "item", "t:bc", "error"]);
    }

    #[test]
    fn test_tree_survives_serialization() {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
        )]
        enum Wire {
            Root,
        }

        impl RuleKind for Wire {
            fn name(&self) -> &'static str {
                "root"
            }

            fn all() -> &'static [Self] {
                &[Wire::Root]
            }
        }

        let tree: Node<Wire> = Node::internal(
            Wire::Root,
            vec![Node::terminal(tok("a", 0)), Node::error(vec![tok("!", 1)])],
        );
        let json = serde_json::to_string(&tree).expect("serialize");
        let back: Node<Wire> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(tree, back);
    }

    #[test]
    fn test_child_accessors() {
        let tree = sample();
        let root = tree.as_internal().unwrap();
        assert_eq!(root.len(), 3);
        assert!(!root.is_empty());
        assert!(root.child(0).unwrap().is_terminal());
        assert!(root.child(2).unwrap().is_error());
        assert!(root.child(3).is_none());
    }
}

//! Ready-made traversals that work over any grammar.

use std::collections::HashMap;

use crate::listener::{Listener, WalkControl};
use crate::tree::{ErrorNode, InternalNode, RuleKind, TerminalNode};
use crate::visitor::Visitor;

/// Counts nodes by shape.
///
/// Implements both protocols with identical results: drive it with
/// [`walk`](crate::walk) as a listener, or call
/// [`visit`](crate::Visitor::visit) to let it recurse through every child
/// itself. Either way [`NodeCounter::total`] reports the subtree's node count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    /// Number of internal nodes seen.
    pub internal: usize,
    /// Number of terminal nodes seen.
    pub terminal: usize,
    /// Number of error nodes seen.
    pub error: usize,
}

impl NodeCounter {
    /// Create a counter with all counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total nodes seen.
    pub fn total(&self) -> usize {
        self.internal + self.terminal + self.error
    }
}

impl<R: RuleKind> Listener<R> for NodeCounter {
    fn enter(&mut self, _node: &InternalNode<R>) -> WalkControl {
        self.internal += 1;
        WalkControl::Continue
    }

    fn visit_terminal(&mut self, _node: &TerminalNode) -> WalkControl {
        self.terminal += 1;
        WalkControl::Continue
    }

    fn visit_error_node(&mut self, _node: &ErrorNode) -> WalkControl {
        self.error += 1;
        WalkControl::Continue
    }
}

impl<R: RuleKind> Visitor<R> for NodeCounter {
    type Output = ();

    fn visit_rule(&mut self, node: &InternalNode<R>) {
        self.internal += 1;
        for child in node.children() {
            self.visit(child);
        }
    }

    fn visit_terminal(&mut self, _node: &TerminalNode) {
        self.terminal += 1;
    }

    fn visit_error_node(&mut self, _node: &ErrorNode) {
        self.error += 1;
    }
}

/// Tallies how often each rule kind occurs in a tree.
#[derive(Debug, Clone)]
pub struct RuleCounter<R> {
    counts: HashMap<R, usize>,
}

impl<R: RuleKind> RuleCounter<R> {
    /// Create an empty tally.
    pub fn new() -> Self {
        RuleCounter {
            counts: HashMap::new(),
        }
    }

    /// Occurrences of `kind` seen so far.
    pub fn count(&self, kind: R) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// The full tally.
    pub fn counts(&self) -> &HashMap<R, usize> {
        &self.counts
    }
}

impl<R: RuleKind> Default for RuleCounter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RuleKind> Listener<R> for RuleCounter<R> {
    fn enter(&mut self, node: &InternalNode<R>) -> WalkControl {
        *self.counts.entry(node.kind()).or_insert(0) += 1;
        WalkControl::Continue
    }
}

/// Reconstructs source text by concatenating terminal and error-node tokens
/// in walk order.
#[derive(Debug, Default, Clone)]
pub struct SourceText {
    text: String,
}

impl SourceText {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text collected so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the collector, returning the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl<R: RuleKind> Listener<R> for SourceText {
    fn visit_terminal(&mut self, node: &TerminalNode) -> WalkControl {
        self.text.push_str(node.text());
        WalkControl::Continue
    }

    fn visit_error_node(&mut self, node: &ErrorNode) -> WalkControl {
        for token in node.tokens() {
            self.text.push_str(token.text());
        }
        WalkControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Node, Span, Token, TokenKind};
    use crate::{walk, Visitor};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Mini {
        Root,
        Leafy,
    }

    impl RuleKind for Mini {
        fn name(&self) -> &'static str {
            match self {
                Mini::Root => "root",
                Mini::Leafy => "leafy",
            }
        }

        fn all() -> &'static [Self] {
            &[Mini::Root, Mini::Leafy]
        }
    }

    fn tok(text: &str) -> Token {
        Token::new(TokenKind(0), text, Span::new(0, text.len() as u64))
    }

    fn sample() -> Node<Mini> {
        Node::internal(
            Mini::Root,
            vec![
                Node::internal(Mini::Leafy, vec![Node::terminal(tok("x"))]),
                Node::internal(Mini::Leafy, vec![]),
                Node::error(vec![tok("?")]),
            ],
        )
    }

    #[test]
    fn test_node_counter_matches_under_both_protocols() {
        let tree = sample();

        let mut as_listener = NodeCounter::new();
        walk(&mut as_listener, &tree);

        let mut as_visitor = NodeCounter::new();
        Visitor::<Mini>::visit(&mut as_visitor, &tree);

        assert_eq!(as_listener, as_visitor);
        assert_eq!(as_listener.total(), tree.node_count());
        assert_eq!(as_listener.internal, 3);
        assert_eq!(as_listener.terminal, 1);
        assert_eq!(as_listener.error, 1);
    }

    #[test]
    fn test_rule_counter() {
        let mut tally = RuleCounter::new();
        walk(&mut tally, &sample());
        assert_eq!(tally.count(Mini::Root), 1);
        assert_eq!(tally.count(Mini::Leafy), 2);
        assert_eq!(tally.counts().len(), 2);
    }

    #[test]
    fn test_source_text_includes_error_tokens() {
        let mut text = SourceText::new();
        walk(&mut text, &sample());
        assert_eq!(text.text(), "x?");
        assert_eq!(text.into_text(), "x?");
    }
}

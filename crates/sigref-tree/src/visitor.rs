//! The visitor protocol: explicit recursion with a caller-chosen result type.
//!
//! Unlike the listener protocol, no traversal is supplied. Each visit method
//! is fully responsible for invoking [`Visitor::visit`] on whichever children
//! it wants visited, in whatever order, and for combining their results into
//! the returned [`Visitor::Output`]. That makes pruning, reordering, and
//! short-circuiting possible; it also means a visitor that never recurses
//! sees exactly one node.
//!
//! `Output` is fixed per visitor instance. Use `()` when only side effects
//! matter, or `Result<_, E>` for fallible visitors with `?` propagation.

use crate::tree::{ErrorNode, InternalNode, Node, RuleKind, TerminalNode};

/// Single dispatch over the node variants, returning a caller-chosen type.
///
/// Grammar crates layer per-rule method surfaces on top via
/// [`define_grammar!`](crate::define_grammar); implement this trait directly
/// when one match over the rule kind is all the dispatch you need.
///
/// # Example
///
/// ```
/// use sigref_tree::{visit_children, Node, RuleKind, Visitor};
/// use sigref_tree::{ErrorNode, InternalNode, TerminalNode};
///
/// /// Reconstructs source text by concatenating terminals.
/// struct TextOf;
///
/// impl<R: RuleKind> Visitor<R> for TextOf {
///     type Output = String;
///
///     fn visit_rule(&mut self, node: &InternalNode<R>) -> String {
///         visit_children(self, node).concat()
///     }
///
///     fn visit_terminal(&mut self, node: &TerminalNode) -> String {
///         node.text().to_string()
///     }
///
///     fn visit_error_node(&mut self, node: &ErrorNode) -> String {
///         node.text()
///     }
/// }
/// ```
pub trait Visitor<R: RuleKind> {
    /// The result type computed for each node.
    type Output;

    /// Visit an internal node. Responsible for its own recursion.
    fn visit_rule(&mut self, node: &InternalNode<R>) -> Self::Output;

    /// Visit a terminal node.
    fn visit_terminal(&mut self, node: &TerminalNode) -> Self::Output;

    /// Visit an error node.
    fn visit_error_node(&mut self, node: &ErrorNode) -> Self::Output;

    /// Dispatch on the node variant. This is the entry point callers use.
    fn visit(&mut self, node: &Node<R>) -> Self::Output {
        match node {
            Node::Internal(n) => self.visit_rule(n),
            Node::Terminal(t) => self.visit_terminal(t),
            Node::Error(e) => self.visit_error_node(e),
        }
    }
}

/// Visit every child of `node` in source order, collecting the results.
///
/// Convenience for the common visit-everything case; visitors that prune or
/// reorder recurse by hand instead.
pub fn visit_children<R, V>(visitor: &mut V, node: &InternalNode<R>) -> Vec<V::Output>
where
    R: RuleKind,
    V: Visitor<R> + ?Sized,
{
    node.children().iter().map(|c| visitor.visit(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Span, Token, TokenKind};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Mini {
        Pair,
        Single,
    }

    impl RuleKind for Mini {
        fn name(&self) -> &'static str {
            match self {
                Mini::Pair => "pair",
                Mini::Single => "single",
            }
        }

        fn all() -> &'static [Self] {
            &[Mini::Pair, Mini::Single]
        }
    }

    fn tok(text: &str) -> Token {
        Token::new(TokenKind(0), text, Span::new(0, text.len() as u64))
    }

    /// Counts visited nodes, optionally refusing to descend into `Single`.
    struct Counter {
        visited: usize,
        prune_single: bool,
    }

    impl Visitor<Mini> for Counter {
        type Output = ();

        fn visit_rule(&mut self, node: &InternalNode<Mini>) {
            self.visited += 1;
            if node.kind() == Mini::Single && self.prune_single {
                return;
            }
            for child in node.children() {
                self.visit(child);
            }
        }

        fn visit_terminal(&mut self, _node: &TerminalNode) {
            self.visited += 1;
        }

        fn visit_error_node(&mut self, _node: &ErrorNode) {
            self.visited += 1;
        }
    }

    fn sample() -> Node<Mini> {
        Node::internal(
            Mini::Pair,
            vec![
                Node::internal(Mini::Single, vec![Node::terminal(tok("x"))]),
                Node::terminal(tok("y")),
            ],
        )
    }

    #[test]
    fn test_full_recursion_counts_all_nodes() {
        let tree = sample();
        let mut counter = Counter {
            visited: 0,
            prune_single: false,
        };
        counter.visit(&tree);
        assert_eq!(counter.visited, tree.node_count());
    }

    #[test]
    fn test_pruning_visits_strictly_fewer_nodes() {
        let tree = sample();
        let mut pruned = Counter {
            visited: 0,
            prune_single: true,
        };
        pruned.visit(&tree);
        assert!(pruned.visited < tree.node_count());
        assert_eq!(pruned.visited, 3); // pair, single, y
    }

    #[test]
    fn test_visit_children_collects_in_order() {
        struct FirstChar;
        impl Visitor<Mini> for FirstChar {
            type Output = String;

            fn visit_rule(&mut self, node: &InternalNode<Mini>) -> String {
                visit_children(self, node).concat()
            }

            fn visit_terminal(&mut self, node: &TerminalNode) -> String {
                node.text().to_string()
            }

            fn visit_error_node(&mut self, node: &ErrorNode) -> String {
                node.text()
            }
        }

        assert_eq!(FirstChar.visit(&sample()), "xy");
    }
}

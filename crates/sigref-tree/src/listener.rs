//! The listener protocol: an automatic depth-first walk with enter/exit
//! callbacks.
//!
//! A listener never recurses on its own; [`walk`] drives the traversal and the
//! listener only reacts. This separates "what to do at a node" from "how to
//! traverse", so the one walker serves every grammar and every listener.
//!
//! # Traversal Order
//!
//! - `enter` fires in **pre-order**, before any child is visited
//! - `exit` fires in **post-order**, after every child's subtree is complete
//! - Children are visited in source order (left-to-right)
//! - Terminal and error nodes get a single `visit_terminal` /
//!   `visit_error_node` callback instead of an enter/exit pair
//!
//! For any two sibling subtrees, every callback of the earlier subtree
//! completes before any callback of the later one begins.
//!
//! # Control Flow
//!
//! - [`WalkControl::Continue`]: keep walking
//! - [`WalkControl::Stop`]: abort the whole walk immediately; no further
//!   callbacks fire, including pending `exit` calls
//!
//! A listener cannot skip a node's children: pruning belongs to the visitor
//! protocol, which owns its own recursion.
//!
//! # Failure
//!
//! The protocol defines no error handling of its own. A fallible listener
//! records its error in its own state and returns `Stop`; the caller inspects
//! the listener after [`walk`] returns.

use crate::tree::{ErrorNode, InternalNode, Node, RuleKind, TerminalNode};

/// Result of a listener callback - controls whether the walk continues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WalkControl {
    /// Keep walking.
    #[default]
    Continue,
    /// Abort the walk immediately.
    ///
    /// No further callbacks fire, including `exit` calls for nodes whose
    /// subtrees were in progress.
    Stop,
}

impl WalkControl {
    /// Whether this is `Stop`.
    pub fn is_stop(&self) -> bool {
        matches!(self, WalkControl::Stop)
    }
}

/// Callbacks for an automatic depth-first walk.
///
/// Every method has a no-op default, so a consumer implements only the
/// callbacks relevant to its analysis. Grammar crates layer per-rule method
/// surfaces on top of this trait via
/// [`define_grammar!`](crate::define_grammar); implement this trait directly
/// when matching on the rule kind yourself is more convenient.
///
/// # Example
///
/// ```
/// use sigref_tree::{walk, Listener, Node, RuleKind, TerminalNode, WalkControl};
///
/// struct TerminalCounter {
///     count: usize,
/// }
///
/// impl<R: RuleKind> Listener<R> for TerminalCounter {
///     fn visit_terminal(&mut self, _node: &TerminalNode) -> WalkControl {
///         self.count += 1;
///         WalkControl::Continue
///     }
/// }
/// ```
pub trait Listener<R: RuleKind> {
    /// Called when the walk first reaches `node`, before any of its children.
    #[allow(unused_variables)]
    fn enter(&mut self, node: &InternalNode<R>) -> WalkControl {
        WalkControl::Continue
    }

    /// Called after all of `node`'s children (and their subtrees) have been
    /// fully visited. Not called if the walk was stopped inside the subtree.
    #[allow(unused_variables)]
    fn exit(&mut self, node: &InternalNode<R>) {}

    /// Called once per terminal node. Leaves have no enter/exit pair.
    #[allow(unused_variables)]
    fn visit_terminal(&mut self, node: &TerminalNode) -> WalkControl {
        WalkControl::Continue
    }

    /// Called once per error node. Leaves have no enter/exit pair.
    #[allow(unused_variables)]
    fn visit_error_node(&mut self, node: &ErrorNode) -> WalkControl {
        WalkControl::Continue
    }
}

/// Walk `node` depth-first, invoking `listener`'s callbacks.
///
/// Returns [`WalkControl::Stop`] if the listener aborted the walk, otherwise
/// [`WalkControl::Continue`].
pub fn walk<R, L>(listener: &mut L, node: &Node<R>) -> WalkControl
where
    R: RuleKind,
    L: Listener<R> + ?Sized,
{
    match node {
        Node::Internal(n) => {
            if listener.enter(n).is_stop() {
                return WalkControl::Stop;
            }
            for child in n.children() {
                if walk(listener, child).is_stop() {
                    return WalkControl::Stop;
                }
            }
            listener.exit(n);
            WalkControl::Continue
        }
        Node::Terminal(t) => listener.visit_terminal(t),
        Node::Error(e) => listener.visit_error_node(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Span, Token, TokenKind};

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

    fn tok(text: &str) -> Token {
        Token::new(TokenKind(0), text, Span::new(0, text.len() as u64))
    }

    fn sample() -> Node<Mini> {
        Node::internal(
            Mini::Root,
            vec![
                Node::terminal(tok("a")),
                Node::internal(Mini::Item, vec![Node::terminal(tok("b"))]),
            ],
        )
    }

    #[derive(Default)]
    struct EventLog {
        events: Vec<String>,
        stop_at: Option<String>,
    }

    impl Listener<Mini> for EventLog {
        fn enter(&mut self, node: &InternalNode<Mini>) -> WalkControl {
            self.events.push(format!("enter:{}", node.kind().name()));
            WalkControl::Continue
        }

        fn exit(&mut self, node: &InternalNode<Mini>) {
            self.events.push(format!("exit:{}", node.kind().name()));
        }

        fn visit_terminal(&mut self, node: &TerminalNode) -> WalkControl {
            self.events.push(format!("term:{}", node.text()));
            if self.stop_at.as_deref() == Some(node.text()) {
                WalkControl::Stop
            } else {
                WalkControl::Continue
            }
        }
    }

    #[test]
    fn test_enter_exit_bracket_children() {
        let mut log = EventLog::default();
        assert_eq!(walk(&mut log, &sample()), WalkControl::Continue);
        assert_eq!(
            log.events,
            [
                "enter:root",
                "term:a",
                "enter:item",
                "term:b",
                "exit:item",
                "exit:root"
            ]
        );
    }

    #[test]
    fn test_stop_suppresses_pending_exits() {
        let mut log = EventLog {
            stop_at: Some("b".to_string()),
            ..EventLog::default()
        };
        assert_eq!(walk(&mut log, &sample()), WalkControl::Stop);
        // Neither item's nor root's exit fires once the walk is aborted.
        assert_eq!(log.events, ["enter:root", "term:a", "enter:item", "term:b"]);
    }

    #[test]
    fn test_default_callbacks_are_noops() {
        struct Silent;
        impl Listener<Mini> for Silent {}
        let mut silent = Silent;
        assert_eq!(walk(&mut silent, &sample()), WalkControl::Continue);
    }
}

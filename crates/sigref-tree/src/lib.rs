//! Generic parse-tree model and traversal protocols.
//!
//! An external parser produces an immutable, ordered, single-rooted tree of
//! [`Node`]s tagged with a grammar's [`RuleKind`]. This crate supplies the two
//! ways to consume such a tree:
//!
//! - **Listener protocol** ([`Listener`] + [`walk`]): an automatic depth-first
//!   pre/post-order walk. The listener only reacts, with `enter` before a
//!   node's children and `exit` after; every callback defaults to a no-op, so
//!   a consumer overrides only the rules it cares about.
//! - **Visitor protocol** ([`Visitor`]): explicit recursion with a
//!   caller-chosen result type. Each visit method decides whether and how to
//!   visit children, which allows pruning, reordering, and short-circuiting.
//!
//! Both protocols are generic over the grammar: a concrete grammar registers
//! its closed rule set with [`define_grammar!`], which also stamps out
//! per-rule listener/visitor traits so clients get `enter_method_pattern`-style
//! methods instead of matching on kinds by hand.
//!
//! # Quick Start
//!
//! ```
//! use sigref_tree::{walk, Listener, Node, RuleKind, Span, Token, TokenKind};
//! use sigref_tree::{InternalNode, WalkControl};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Rule {
//!     Unit,
//! }
//!
//! impl RuleKind for Rule {
//!     fn name(&self) -> &'static str {
//!         "unit"
//!     }
//!     fn all() -> &'static [Self] {
//!         &[Rule::Unit]
//!     }
//! }
//!
//! let tree = Node::internal(
//!     Rule::Unit,
//!     vec![Node::terminal(Token::new(TokenKind(1), "x", Span::new(0, 1)))],
//! );
//!
//! struct Units(usize);
//! impl Listener<Rule> for Units {
//!     fn enter(&mut self, _node: &InternalNode<Rule>) -> WalkControl {
//!         self.0 += 1;
//!         WalkControl::Continue
//!     }
//! }
//!
//! let mut units = Units(0);
//! walk(&mut units, &tree);
//! assert_eq!(units.0, 1);
//! ```

pub mod common;
mod listener;
mod macros;
mod tree;
mod visitor;

pub use listener::{walk, Listener, WalkControl};
pub use tree::{
    Descendants, ErrorNode, InternalNode, Node, RuleKind, Span, TerminalNode, Token, TokenKind,
};
pub use visitor::{visit_children, Visitor};

// Used by the expansion of `define_grammar!`; not public API.
#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}

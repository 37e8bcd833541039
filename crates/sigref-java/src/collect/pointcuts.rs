//! PointcutCollector listener for primitive-pointcut extraction.
//!
//! A signature refactor must rewrite not only declarations and call sites but
//! also the signature patterns embedded in pointcuts. This collector gathers
//! every primitive pointcut (`call(..)`, `execution(..)`, `withincode(..)`,
//! ...) with its source text and span so a later pass can re-lower and
//! rewrite the embedded pattern.

use sigref_tree::{InternalNode, Listener, Node, Span, WalkControl};
use tracing::trace;

use crate::java::JavaRule;

/// A primitive pointcut found in a source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointcutInfo {
    /// Which primitive pointcut this is, e.g. [`JavaRule::CallPointcut`].
    pub kind: JavaRule,
    /// Full source text of the pointcut, including its argument.
    pub text: String,
    /// Span covering the pointcut.
    pub span: Option<Span>,
}

/// A listener that collects primitive pointcuts from a Java tree.
///
/// This one is written against the generic [`Listener`] protocol rather than
/// the generated per-rule trait: one `enter` hook and a kind test cover the
/// whole pointcut family.
#[derive(Debug, Default)]
pub struct PointcutCollector {
    pointcuts: Vec<PointcutInfo>,
}

impl PointcutCollector {
    /// Create a new collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every primitive pointcut under `root`.
    pub fn collect(root: &Node<JavaRule>) -> Vec<PointcutInfo> {
        let mut collector = PointcutCollector::new();
        sigref_tree::walk(&mut collector, root);
        collector.pointcuts
    }

    /// Get the collected pointcuts, consuming the collector.
    pub fn into_pointcuts(self) -> Vec<PointcutInfo> {
        self.pointcuts
    }
}

impl Listener<JavaRule> for PointcutCollector {
    fn enter(&mut self, node: &InternalNode<JavaRule>) -> WalkControl {
        let kind = node.kind();
        if kind.is_primitive_pointcut() {
            let info = PointcutInfo {
                kind,
                text: node.text(),
                span: node.span(),
            };
            trace!(kind = %kind, text = %info.text, "collected pointcut");
            self.pointcuts.push(info);
        }
        WalkControl::Continue
    }
}

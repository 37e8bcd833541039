//! The `define_grammar!` macro: one declarative rule list per grammar.
//!
//! A grammar's generated traversal bindings are mechanical repetition of a
//! template applied once per rule. Rather than hand-maintaining hundreds of
//! near-identical stub methods, a grammar crate lists its rules once and the
//! macro stamps out:
//!
//! - the rule-kind enum (with [`RuleKind`](crate::RuleKind), `as_str`,
//!   `Display`, and serde derives)
//! - a per-rule listener trait (`enter_*`/`exit_*` pairs defaulting to
//!   no-ops) plus a `walk_*` entry point adapting it to the generic walker
//! - a per-rule visitor trait (`visit_*` methods defaulting to
//!   `default_output()`), with `visit`/`visit_rule` dispatch provided
//!
//! Dispatch is a single match over the rule-kind tag in both directions, so
//! adding a rule is one line in the list.

/// Define a grammar's rule enumeration and its traversal traits.
///
/// # Usage
///
/// ```
/// use sigref_tree::define_grammar;
///
/// define_grammar! {
///     /// Rules of a toy expression grammar.
///     pub enum ExprRule {
///         /// An addition.
///         add: Add = "add",
///         /// A literal operand.
///         literal: Literal = "literal",
///     }
///     listener ExprListener;
///     visitor ExprVisitor;
///     walker walk_expr;
/// }
///
/// assert_eq!(ExprRule::Add.as_str(), "add");
/// assert_eq!(ExprRule::ALL.len(), 2);
/// ```
///
/// Each rule line is `method_name: Variant = "ruleName"`: the snake-case stem
/// used for the generated `enter_*`/`exit_*`/`visit_*` methods, the enum
/// variant, and the rule's spelling in the grammar.
#[macro_export]
macro_rules! define_grammar {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $rule:ident {
            $(
                $(#[$rule_meta:meta])*
                $method:ident : $variant:ident = $name:literal
            ),* $(,)?
        }
        listener $listener:ident;
        visitor $visitor:ident;
        walker $walk:ident;
    ) => {
        $crate::__private::paste! {
            $(#[$enum_meta])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
                ::serde::Serialize, ::serde::Deserialize,
            )]
            $vis enum $rule {
                $(
                    $(#[$rule_meta])*
                    $variant,
                )*
            }

            impl $rule {
                /// Every rule of the grammar, in declaration order.
                $vis const ALL: &'static [$rule] = &[
                    $($rule::$variant,)*
                ];

                /// The rule name as spelled in the grammar.
                $vis fn as_str(&self) -> &'static str {
                    match self {
                        $(Self::$variant => $name,)*
                    }
                }
            }

            impl $crate::RuleKind for $rule {
                fn name(&self) -> &'static str {
                    self.as_str()
                }

                fn all() -> &'static [Self] {
                    Self::ALL
                }
            }

            impl ::core::fmt::Display for $rule {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            #[doc = concat!(
                "Per-rule listener callbacks for `", stringify!($rule), "` trees.\n\n",
                "Every method defaults to a no-op, so a consumer overrides only the ",
                "rules its analysis cares about. Drive an implementation with [`",
                stringify!($walk), "`]."
            )]
            $vis trait $listener {
                $(
                    #[doc = concat!(
                        "Called when the walk first reaches a `", $name,
                        "` node, before any of its children."
                    )]
                    #[allow(unused_variables)]
                    fn [<enter_ $method>](
                        &mut self,
                        node: &$crate::InternalNode<$rule>,
                    ) -> $crate::WalkControl {
                        $crate::WalkControl::Continue
                    }

                    #[doc = concat!(
                        "Called after every child of a `", $name,
                        "` node has been fully visited."
                    )]
                    #[allow(unused_variables)]
                    fn [<exit_ $method>](&mut self, node: &$crate::InternalNode<$rule>) {}
                )*

                /// Called once per terminal node; leaves have no enter/exit pair.
                #[allow(unused_variables)]
                fn on_terminal(&mut self, node: &$crate::TerminalNode) -> $crate::WalkControl {
                    $crate::WalkControl::Continue
                }

                /// Called once per error node; leaves have no enter/exit pair.
                #[allow(unused_variables)]
                fn on_error_node(&mut self, node: &$crate::ErrorNode) -> $crate::WalkControl {
                    $crate::WalkControl::Continue
                }
            }

            #[doc(hidden)]
            $vis struct [<$listener Adapter>]<'l, L: ?Sized>(&'l mut L);

            impl<L: $listener + ?Sized> $crate::Listener<$rule> for [<$listener Adapter>]<'_, L> {
                fn enter(&mut self, node: &$crate::InternalNode<$rule>) -> $crate::WalkControl {
                    match node.kind() {
                        $($rule::$variant => self.0.[<enter_ $method>](node),)*
                    }
                }

                fn exit(&mut self, node: &$crate::InternalNode<$rule>) {
                    match node.kind() {
                        $($rule::$variant => self.0.[<exit_ $method>](node),)*
                    }
                }

                fn visit_terminal(&mut self, node: &$crate::TerminalNode) -> $crate::WalkControl {
                    self.0.on_terminal(node)
                }

                fn visit_error_node(&mut self, node: &$crate::ErrorNode) -> $crate::WalkControl {
                    self.0.on_error_node(node)
                }
            }

            #[doc = concat!(
                "Walk a `", stringify!($rule), "` tree depth-first, driving a [`",
                stringify!($listener), "`].\n\n",
                "Returns `WalkControl::Stop` if the listener aborted the walk."
            )]
            $vis fn $walk<L: $listener + ?Sized>(
                listener: &mut L,
                root: &$crate::Node<$rule>,
            ) -> $crate::WalkControl {
                $crate::walk(&mut [<$listener Adapter>](listener), root)
            }

            #[doc = concat!(
                "Per-rule visitor for `", stringify!($rule), "` trees.\n\n",
                "No traversal is supplied: each method recurses (or not) by calling ",
                "`visit` on the children it wants, and combines their results into ",
                "`Output`. Unoverridden methods return `default_output()`."
            )]
            $vis trait $visitor {
                /// The result type computed for each node.
                type Output;

                /// Result for any node without a dedicated override.
                fn default_output(&mut self) -> Self::Output;

                $(
                    #[doc = concat!(
                        "Visit a `", $name, "` node. Responsible for its own recursion."
                    )]
                    #[allow(unused_variables)]
                    fn [<visit_ $method>](
                        &mut self,
                        node: &$crate::InternalNode<$rule>,
                    ) -> Self::Output {
                        self.default_output()
                    }
                )*

                /// Visit a terminal node.
                #[allow(unused_variables)]
                fn visit_terminal(&mut self, node: &$crate::TerminalNode) -> Self::Output {
                    self.default_output()
                }

                /// Visit an error node.
                #[allow(unused_variables)]
                fn visit_error_node(&mut self, node: &$crate::ErrorNode) -> Self::Output {
                    self.default_output()
                }

                /// Dispatch on the rule kind of an internal node.
                fn visit_rule(&mut self, node: &$crate::InternalNode<$rule>) -> Self::Output {
                    match node.kind() {
                        $($rule::$variant => self.[<visit_ $method>](node),)*
                    }
                }

                /// Dispatch on the node variant. This is the entry point callers use.
                fn visit(&mut self, node: &$crate::Node<$rule>) -> Self::Output {
                    match node {
                        $crate::Node::Internal(n) => self.visit_rule(n),
                        $crate::Node::Terminal(t) => self.visit_terminal(t),
                        $crate::Node::Error(e) => self.visit_error_node(e),
                    }
                }
            }
        }
    };
}

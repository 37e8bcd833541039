//! Lowering from a pattern parse tree to the pattern model.
//!
//! The external pattern parser produces a `Node<SignatureRule>` tree in the
//! shapes documented in [`registry`](crate::registry); this module turns such
//! a tree into a [`MethodPattern`]. Lowering is strict: an unexpected rule
//! kind, a missing required part, or an error node anywhere in the pattern is
//! a [`PatternError`], not a silent partial pattern.

use sigref_tree::{ErrorNode, InternalNode, Node, RuleKind};
use thiserror::Error;
use tracing::debug;

use crate::model::{
    ArgPattern, ArgsPattern, MethodPattern, NameAtom, NamePattern, SegmentPattern, TypePattern,
};
use crate::registry::SignatureRule;

/// Why a pattern parse tree could not be lowered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A node's rule kind was not one of the kinds allowed at its position.
    #[error("unexpected rule `{found}` where `{expected}` was required")]
    UnexpectedRule {
        /// The rule kind required here.
        expected: &'static str,
        /// The rule kind actually found.
        found: &'static str,
    },

    /// A node appeared somewhere its rule kind is not allowed.
    #[error("rule `{found}` is not allowed inside `{context}`")]
    MisplacedRule {
        /// The enclosing rule.
        context: &'static str,
        /// The rule kind actually found.
        found: &'static str,
    },

    /// A required child was absent.
    #[error("`{rule}` node is missing its `{missing}` part")]
    MissingPart {
        /// The rule whose shape is incomplete.
        rule: &'static str,
        /// The absent part.
        missing: &'static str,
    },

    /// The parser left an unmatched span inside the pattern.
    #[error("pattern contains an unparsed span: `{text}`")]
    UnparsedSpan {
        /// Concatenated text of the unmatched span.
        text: String,
    },

    /// A name pattern with no atoms at all.
    #[error("empty name pattern")]
    EmptyName,
}

impl PatternError {
    fn misplaced(context: SignatureRule, found: &InternalNode<SignatureRule>) -> Self {
        PatternError::MisplacedRule {
            context: context.name(),
            found: found.kind().name(),
        }
    }

    fn unparsed(node: &ErrorNode) -> Self {
        PatternError::UnparsedSpan { text: node.text() }
    }
}

/// Require `node` to be an internal node of the given rule kind.
fn expect_rule(
    node: &Node<SignatureRule>,
    expected: SignatureRule,
) -> Result<&InternalNode<SignatureRule>, PatternError> {
    match node {
        Node::Internal(n) if n.kind() == expected => Ok(n),
        Node::Internal(n) => Err(PatternError::UnexpectedRule {
            expected: expected.name(),
            found: n.kind().name(),
        }),
        Node::Terminal(_) => Err(PatternError::UnexpectedRule {
            expected: expected.name(),
            found: "terminal",
        }),
        Node::Error(e) => Err(PatternError::unparsed(e)),
    }
}

/// Lower a `methodPattern` tree into a [`MethodPattern`].
pub fn lower_method_pattern(node: &Node<SignatureRule>) -> Result<MethodPattern, PatternError> {
    let pattern = expect_rule(node, SignatureRule::MethodPattern)?;

    let mut return_type = None;
    let mut declaring_type = None;
    let mut name = None;
    let mut args = None;

    for child in pattern.children() {
        match child {
            Node::Internal(inner) => match inner.kind() {
                SignatureRule::ReturnTypePattern => {
                    return_type = Some(lower_wrapped_type(inner)?);
                }
                SignatureRule::DeclaringTypePattern => {
                    declaring_type = Some(lower_wrapped_type(inner)?);
                }
                SignatureRule::SimpleNamePattern => {
                    name = Some(lower_name(inner)?);
                }
                SignatureRule::FormalsPattern => {
                    args = Some(lower_formals(inner)?);
                }
                _ => {
                    return Err(PatternError::misplaced(SignatureRule::MethodPattern, inner));
                }
            },
            // Punctuation between the parts.
            Node::Terminal(_) => {}
            Node::Error(e) => return Err(PatternError::unparsed(e)),
        }
    }

    let lowered = MethodPattern {
        return_type,
        declaring_type,
        name: name.ok_or(PatternError::MissingPart {
            rule: SignatureRule::MethodPattern.name(),
            missing: SignatureRule::SimpleNamePattern.name(),
        })?,
        args: args.ok_or(PatternError::MissingPart {
            rule: SignatureRule::MethodPattern.name(),
            missing: SignatureRule::FormalsPattern.name(),
        })?,
    };
    debug!(pattern = %lowered, "lowered method pattern");
    Ok(lowered)
}

/// Lower a `returnTypePattern` or `declaringTypePattern` wrapper: its single
/// meaningful child is a `typePattern`.
fn lower_wrapped_type(node: &InternalNode<SignatureRule>) -> Result<TypePattern, PatternError> {
    for child in node.children() {
        match child {
            Node::Internal(inner) if inner.kind() == SignatureRule::TypePattern => {
                return lower_type(inner);
            }
            Node::Internal(inner) => {
                return Err(PatternError::UnexpectedRule {
                    expected: SignatureRule::TypePattern.name(),
                    found: inner.kind().name(),
                });
            }
            Node::Terminal(_) => {}
            Node::Error(e) => return Err(PatternError::unparsed(e)),
        }
    }
    Err(PatternError::MissingPart {
        rule: node.kind().name(),
        missing: SignatureRule::TypePattern.name(),
    })
}

/// Lower a `typePattern`: one `dottedNamePattern`, or a bare
/// `simpleNamePattern` for unqualified names.
fn lower_type(node: &InternalNode<SignatureRule>) -> Result<TypePattern, PatternError> {
    for child in node.children() {
        match child {
            Node::Internal(inner) => match inner.kind() {
                SignatureRule::DottedNamePattern => return lower_dotted_name(inner),
                SignatureRule::SimpleNamePattern => {
                    return Ok(TypePattern::new(vec![SegmentPattern::Name(lower_name(
                        inner,
                    )?)]));
                }
                _ => {
                    return Err(PatternError::UnexpectedRule {
                        expected: SignatureRule::DottedNamePattern.name(),
                        found: inner.kind().name(),
                    });
                }
            },
            Node::Terminal(_) => {}
            Node::Error(e) => return Err(PatternError::unparsed(e)),
        }
    }
    Err(PatternError::MissingPart {
        rule: SignatureRule::TypePattern.name(),
        missing: SignatureRule::DottedNamePattern.name(),
    })
}

/// Lower a `dottedNamePattern`: name segments and `..` parts, with `.`
/// terminals between them.
fn lower_dotted_name(node: &InternalNode<SignatureRule>) -> Result<TypePattern, PatternError> {
    let mut segments = Vec::new();
    for child in node.children() {
        match child {
            Node::Internal(inner) => match inner.kind() {
                SignatureRule::SimpleNamePattern => {
                    segments.push(SegmentPattern::Name(lower_name(inner)?));
                }
                SignatureRule::DotDot => segments.push(SegmentPattern::DotDot),
                _ => {
                    return Err(PatternError::misplaced(
                        SignatureRule::DottedNamePattern,
                        inner,
                    ));
                }
            },
            Node::Terminal(_) => {}
            Node::Error(e) => return Err(PatternError::unparsed(e)),
        }
    }
    if segments.is_empty() {
        return Err(PatternError::MissingPart {
            rule: SignatureRule::DottedNamePattern.name(),
            missing: SignatureRule::SimpleNamePattern.name(),
        });
    }
    Ok(TypePattern::new(segments))
}

/// Lower a `simpleNamePattern`: identifier-chunk and `*` terminals.
fn lower_name(node: &InternalNode<SignatureRule>) -> Result<NamePattern, PatternError> {
    let mut atoms = Vec::new();
    for child in node.children() {
        match child {
            Node::Terminal(t) if t.text() == "*" => atoms.push(NameAtom::Star),
            Node::Terminal(t) => atoms.push(NameAtom::Literal(t.text().to_string())),
            Node::Internal(inner) => {
                return Err(PatternError::misplaced(
                    SignatureRule::SimpleNamePattern,
                    inner,
                ));
            }
            Node::Error(e) => return Err(PatternError::unparsed(e)),
        }
    }
    if atoms.is_empty() {
        return Err(PatternError::EmptyName);
    }
    Ok(NamePattern::new(atoms))
}

/// Lower a `formalsPattern` (or the nested `formalsPatternAfterDotDot`):
/// `typePattern` and `..` parts separated by `,` terminals.
///
/// A `typePattern` that is a bare `*` lowers to [`ArgPattern::Star`], a
/// single argument of any type, rather than a one-segment type match.
fn lower_formals(node: &InternalNode<SignatureRule>) -> Result<ArgsPattern, PatternError> {
    let mut args = Vec::new();
    lower_formals_into(node, &mut args)?;
    Ok(ArgsPattern::new(args))
}

fn lower_formals_into(
    node: &InternalNode<SignatureRule>,
    args: &mut Vec<ArgPattern>,
) -> Result<(), PatternError> {
    for child in node.children() {
        match child {
            Node::Internal(inner) => match inner.kind() {
                SignatureRule::TypePattern => {
                    let ty = lower_type(inner)?;
                    args.push(if ty.is_star() {
                        ArgPattern::Star
                    } else {
                        ArgPattern::Type(ty)
                    });
                }
                SignatureRule::DotDot => args.push(ArgPattern::DotDot),
                SignatureRule::FormalsPatternAfterDotDot => {
                    lower_formals_into(inner, args)?;
                }
                _ => {
                    return Err(PatternError::misplaced(SignatureRule::FormalsPattern, inner));
                }
            },
            // Separating commas.
            Node::Terminal(_) => {}
            Node::Error(e) => return Err(PatternError::unparsed(e)),
        }
    }
    Ok(())
}

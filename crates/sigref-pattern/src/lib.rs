//! Method-signature patterns: the grammar registry, the pattern model, and
//! the match predicates used to locate refactor targets.
//!
//! A signature pattern such as `void com.example..*.set*(int, ..)` selects
//! method declarations and call sites for a signature refactor. This crate
//! covers the path from a pattern parse tree to a usable predicate:
//!
//! 1. [`SignatureRule`]: the pattern grammar's rule registry, with listener
//!    and visitor bindings generated by `sigref_tree::define_grammar!`
//! 2. [`lower_method_pattern`]: strict lowering from a pattern tree to the
//!    model, with [`PatternError`] for malformed trees
//! 3. [`MethodPattern::matches`]: the predicate over [`MethodSignature`]
//!    candidates, where `*` matches within a name, `..` spans packages in a
//!    dotted name, and `..` matches zero or more arguments in a formals list
//!
//! The pattern parser itself is external; tests construct trees through the
//! `sigref_tree` constructors.

pub mod lower;
pub mod model;
pub mod registry;

pub use lower::{lower_method_pattern, PatternError};
pub use model::{
    ArgPattern, ArgsPattern, MethodPattern, MethodSignature, NameAtom, NamePattern, SegmentPattern,
    TypePattern,
};
pub use registry::{
    walk_signature, SignatureListener, SignatureRule, SignatureVisitor,
};

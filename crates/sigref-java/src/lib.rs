//! AspectJ-flavored Java trees: rule registries and fact collectors.
//!
//! This crate fixes the two remaining grammars of the toolchain and the
//! collectors that bridge source trees to the signature-pattern matcher:
//!
//! - [`JavaRule`]: the AspectJ-flavored Java grammar's rule registry, with
//!   `JavaListener`/`JavaVisitor` bindings and the [`walk_java`] walker
//! - [`AnnotationRule`]: the annotation-signature grammar's registry, with
//!   the same generated bindings
//! - [`collect`]: listeners that gather [`DeclaredMethod`] signatures and
//!   [`PointcutInfo`] facts from a tree
//!
//! The typical pipeline lowers a signature pattern with `sigref_pattern`,
//! collects declared methods here, and selects the refactor targets:
//!
//! ```ignore
//! let pattern = lower_method_pattern(&pattern_tree)?;
//! let methods = MethodDeclarationCollector::collect(&unit);
//! let candidates: Vec<_> = methods.iter().map(|m| m.signature.clone()).collect();
//! let targets = pattern.select(&candidates);
//! ```

pub mod annotation;
pub mod collect;
pub mod java;

pub use annotation::{walk_annotation, AnnotationListener, AnnotationRule, AnnotationVisitor};
pub use collect::{DeclaredMethod, MethodDeclarationCollector, PointcutCollector, PointcutInfo};
pub use java::{walk_java, JavaListener, JavaRule, JavaVisitor};

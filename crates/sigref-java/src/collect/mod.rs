//! Collectors over AspectJ-flavored Java trees.
//!
//! Each collector is a listener that walks a tree once and gathers one kind
//! of fact into plain `Info` structs:
//!
//! - [`MethodDeclarationCollector`] gathers declared method signatures,
//!   qualified with package and enclosing type names, ready for matching
//!   against a `sigref_pattern::MethodPattern`
//! - [`PointcutCollector`] gathers the primitive pointcuts (`call(..)`,
//!   `execution(..)`, ...) whose signature patterns a refactor must rewrite
//!
//! Each collector exposes a `collect` entry point that owns the walk:
//!
//! ```ignore
//! let methods = MethodDeclarationCollector::collect(&tree);
//! let targets = pattern.select(&methods.iter().map(|m| m.signature.clone()).collect::<Vec<_>>());
//! ```

mod methods;
mod pointcuts;

pub use methods::{DeclaredMethod, MethodDeclarationCollector};
pub use pointcuts::{PointcutCollector, PointcutInfo};

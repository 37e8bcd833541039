//! The signature-pattern data model and its match predicates.
//!
//! A lowered pattern is a predicate over [`MethodSignature`] candidates:
//!
//! - [`NamePattern`]: one identifier with `*` wildcards; `*` matches any run
//!   of characters (including none) within the identifier
//! - [`TypePattern`]: a dotted name; a `..` segment matches any run of
//!   intermediate package segments (including none)
//! - [`ArgsPattern`]: an argument-type list; `*` matches exactly one
//!   argument of any type, `..` matches zero or more arguments of any type
//! - [`MethodPattern`]: combines the above; `None` for return or declaring
//!   type means "don't care"
//!
//! All matchers are backtracking sequence matchers; `..` tries every split
//! point, so `(int, .., int)` matches `(int, int)` as well as
//! `(int, byte, char, int)`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

// ============================================================================
// Name patterns
// ============================================================================

/// One atom of a name pattern: a literal run or a `*` wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameAtom {
    /// A literal run of identifier characters.
    Literal(String),
    /// `*`: any run of characters, including the empty run.
    Star,
}

/// An identifier pattern such as `set*` or `*Listener`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamePattern {
    atoms: Vec<NameAtom>,
}

impl NamePattern {
    /// A pattern from explicit atoms.
    pub fn new(atoms: Vec<NameAtom>) -> Self {
        NamePattern { atoms }
    }

    /// A pattern matching exactly `name`.
    pub fn literal(name: impl Into<String>) -> Self {
        NamePattern {
            atoms: vec![NameAtom::Literal(name.into())],
        }
    }

    /// The bare `*` pattern, matching any identifier.
    pub fn any() -> Self {
        NamePattern {
            atoms: vec![NameAtom::Star],
        }
    }

    /// The pattern's atoms.
    pub fn atoms(&self) -> &[NameAtom] {
        &self.atoms
    }

    /// Whether this is the bare `*` pattern.
    pub fn is_any(&self) -> bool {
        self.atoms == [NameAtom::Star]
    }

    /// Whether `name` matches this pattern.
    pub fn matches(&self, name: &str) -> bool {
        match_atoms(&self.atoms, name)
    }
}

fn match_atoms(atoms: &[NameAtom], s: &str) -> bool {
    let Some((first, rest)) = atoms.split_first() else {
        return s.is_empty();
    };
    match first {
        NameAtom::Literal(lit) => s
            .strip_prefix(lit.as_str())
            .is_some_and(|tail| match_atoms(rest, tail)),
        NameAtom::Star => {
            // Try every split point, shortest first.
            (0..=s.len())
                .filter(|i| s.is_char_boundary(*i))
                .any(|i| match_atoms(rest, &s[i..]))
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.atoms {
            match atom {
                NameAtom::Literal(lit) => f.write_str(lit)?,
                NameAtom::Star => f.write_str("*")?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Type patterns
// ============================================================================

/// One segment of a dotted type pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentPattern {
    /// A name pattern matching exactly one segment.
    Name(NamePattern),
    /// `..`: any run of segments, including the empty run.
    DotDot,
}

/// A possibly-qualified type pattern such as `com.example..*Service`.
///
/// Matched against a fully qualified type name split on `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypePattern {
    segments: Vec<SegmentPattern>,
}

impl TypePattern {
    /// A pattern from explicit segments.
    pub fn new(segments: Vec<SegmentPattern>) -> Self {
        TypePattern { segments }
    }

    /// A pattern matching exactly the dotted name `name`.
    pub fn exact(name: &str) -> Self {
        TypePattern {
            segments: name
                .split('.')
                .map(|seg| SegmentPattern::Name(NamePattern::literal(seg)))
                .collect(),
        }
    }

    /// The bare `*` pattern: any single-segment type name.
    pub fn star() -> Self {
        TypePattern {
            segments: vec![SegmentPattern::Name(NamePattern::any())],
        }
    }

    /// The pattern's segments.
    pub fn segments(&self) -> &[SegmentPattern] {
        &self.segments
    }

    /// Whether this is the bare `*` pattern.
    pub fn is_star(&self) -> bool {
        matches!(self.segments.as_slice(), [SegmentPattern::Name(n)] if n.is_any())
    }

    /// Whether the dotted `type_name` matches this pattern.
    pub fn matches(&self, type_name: &str) -> bool {
        let segments: Vec<&str> = type_name.split('.').collect();
        match_segments(&self.segments, &segments)
    }
}

fn match_segments(patterns: &[SegmentPattern], segments: &[&str]) -> bool {
    let Some((first, rest)) = patterns.split_first() else {
        return segments.is_empty();
    };
    match first {
        SegmentPattern::Name(name) => segments
            .split_first()
            .is_some_and(|(seg, tail)| name.matches(seg) && match_segments(rest, tail)),
        SegmentPattern::DotDot => {
            (0..=segments.len()).any(|i| match_segments(rest, &segments[i..]))
        }
    }
}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev_was_name = false;
        for segment in &self.segments {
            match segment {
                SegmentPattern::Name(name) => {
                    if prev_was_name {
                        f.write_str(".")?;
                    }
                    write!(f, "{name}")?;
                    prev_was_name = true;
                }
                SegmentPattern::DotDot => {
                    f.write_str("..")?;
                    prev_was_name = false;
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Argument patterns
// ============================================================================

/// One position of an argument-list pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgPattern {
    /// A type pattern matching exactly one argument.
    Type(TypePattern),
    /// `*`: exactly one argument of any type.
    Star,
    /// `..`: zero or more arguments of any type.
    DotDot,
}

/// The argument-list pattern between the parentheses of a method pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgsPattern {
    args: Vec<ArgPattern>,
}

impl ArgsPattern {
    /// A pattern from explicit argument positions.
    pub fn new(args: Vec<ArgPattern>) -> Self {
        ArgsPattern { args }
    }

    /// The `()` pattern: matches only an empty argument list.
    pub fn empty() -> Self {
        ArgsPattern::default()
    }

    /// The `(..)` pattern: matches any argument list.
    pub fn any() -> Self {
        ArgsPattern {
            args: vec![ArgPattern::DotDot],
        }
    }

    /// The pattern's positions.
    pub fn args(&self) -> &[ArgPattern] {
        &self.args
    }

    /// Whether the argument-type list matches this pattern.
    pub fn matches<S: AsRef<str>>(&self, arg_types: &[S]) -> bool {
        let types: Vec<&str> = arg_types.iter().map(AsRef::as_ref).collect();
        match_args(&self.args, &types)
    }
}

fn match_args(patterns: &[ArgPattern], args: &[&str]) -> bool {
    let Some((first, rest)) = patterns.split_first() else {
        return args.is_empty();
    };
    match first {
        ArgPattern::Type(ty) => args
            .split_first()
            .is_some_and(|(arg, tail)| ty.matches(arg) && match_args(rest, tail)),
        ArgPattern::Star => args
            .split_first()
            .is_some_and(|(_, tail)| match_args(rest, tail)),
        ArgPattern::DotDot => (0..=args.len()).any(|i| match_args(rest, &args[i..])),
    }
}

impl fmt::Display for ArgsPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match arg {
                ArgPattern::Type(ty) => write!(f, "{ty}")?,
                ArgPattern::Star => f.write_str("*")?,
                ArgPattern::DotDot => f.write_str("..")?,
            }
        }
        f.write_str(")")
    }
}

// ============================================================================
// Method patterns and candidate signatures
// ============================================================================

/// A concrete method signature, the candidate side of matching.
///
/// Collectors over source trees produce these; see the Java collector crate.
/// `return_type` uses `"void"` for methods without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Fully qualified name of the declaring type.
    pub declaring_type: String,
    /// The method name.
    pub name: String,
    /// Fully qualified parameter type names, in declaration order.
    pub parameter_types: Vec<String>,
    /// Fully qualified return type name, `"void"` if none.
    pub return_type: String,
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}({})",
            self.return_type,
            self.declaring_type,
            self.name,
            self.parameter_types.join(", ")
        )
    }
}

/// A full method pattern: the predicate used to locate refactor targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodPattern {
    /// Return-type pattern; `None` means any return type.
    pub return_type: Option<TypePattern>,
    /// Declaring-type pattern; `None` means any declaring type.
    pub declaring_type: Option<TypePattern>,
    /// The method-name pattern.
    pub name: NamePattern,
    /// The argument-list pattern.
    pub args: ArgsPattern,
}

impl MethodPattern {
    /// Whether `signature` is selected by this pattern.
    pub fn matches(&self, signature: &MethodSignature) -> bool {
        if !self.name.matches(&signature.name) {
            trace!(pattern = %self, candidate = %signature, "name mismatch");
            return false;
        }
        if let Some(declaring) = &self.declaring_type {
            if !declaring.matches(&signature.declaring_type) {
                trace!(pattern = %self, candidate = %signature, "declaring type mismatch");
                return false;
            }
        }
        if let Some(ret) = &self.return_type {
            if !ret.matches(&signature.return_type) {
                trace!(pattern = %self, candidate = %signature, "return type mismatch");
                return false;
            }
        }
        if !self.args.matches(&signature.parameter_types) {
            trace!(pattern = %self, candidate = %signature, "argument list mismatch");
            return false;
        }
        trace!(pattern = %self, candidate = %signature, "matched");
        true
    }

    /// Filter `candidates` down to the signatures this pattern selects.
    pub fn select<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a MethodSignature>,
    ) -> Vec<&'a MethodSignature> {
        candidates
            .into_iter()
            .filter(|sig| self.matches(sig))
            .collect()
    }
}

impl fmt::Display for MethodPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ret) = &self.return_type {
            write!(f, "{ret} ")?;
        }
        if let Some(declaring) = &self.declaring_type {
            write!(f, "{declaring}.")?;
        }
        write!(f, "{}{}", self.name, self.args)
    }
}

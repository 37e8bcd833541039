//! Rule registry of the method-signature pattern grammar.
//!
//! Unlike the plain syntactic registries, these rule kinds carry matching
//! semantics: a `dotDot` inside a formals pattern matches zero or more
//! arguments of any type, a `*` inside a name pattern matches any run of
//! characters, and a `dotDot` inside a dotted name matches any run of
//! intermediate package segments. The semantics live in
//! [`model`](crate::model); [`lower`](crate::lower) turns a pattern parse
//! tree into that model.
//!
//! Expected tree shapes (what an external pattern parser produces):
//!
//! - `methodPattern`: optional `returnTypePattern`, optional
//!   `declaringTypePattern`, a `simpleNamePattern` (the method name), and a
//!   `formalsPattern`, with punctuation as terminals
//! - `typePattern`: one `dottedNamePattern` (or a bare `simpleNamePattern`)
//! - `dottedNamePattern`: `simpleNamePattern` and `dotDot` parts with `.`
//!   terminals between them
//! - `simpleNamePattern`: identifier-chunk and `*` terminals
//! - `formalsPattern`: `typePattern` / `dotDot` parts separated by `,`
//!   terminals; everything after a `..` nests in a
//!   `formalsPatternAfterDotDot`

use sigref_tree::define_grammar;

define_grammar! {
    /// Rules of the method-signature pattern grammar.
    pub enum SignatureRule {
        /// A full method pattern: return type, declaring type, name, formals.
        method_pattern: MethodPattern = "methodPattern",
        /// The pattern for the method's return type.
        return_type_pattern: ReturnTypePattern = "returnTypePattern",
        /// The pattern for the type declaring the method.
        declaring_type_pattern: DeclaringTypePattern = "declaringTypePattern",
        /// A type pattern, possibly package-qualified.
        type_pattern: TypePattern = "typePattern",
        /// A dotted name with `..` package wildcards.
        dotted_name_pattern: DottedNamePattern = "dottedNamePattern",
        /// One identifier with `*` wildcards.
        simple_name_pattern: SimpleNamePattern = "simpleNamePattern",
        /// The argument-list pattern between parentheses.
        formals_pattern: FormalsPattern = "formalsPattern",
        /// The remainder of an argument-list pattern after a `..`.
        formals_pattern_after_dot_dot: FormalsPatternAfterDotDot = "formalsPatternAfterDotDot",
        /// The `..` wildcard.
        dot_dot: DotDot = "dotDot",
    }
    listener SignatureListener;
    visitor SignatureVisitor;
    walker walk_signature;
}

impl SignatureRule {
    /// Whether this rule carries match-predicate semantics rather than plain
    /// structure.
    pub fn is_matching(&self) -> bool {
        matches!(
            self,
            SignatureRule::DotDot
                | SignatureRule::SimpleNamePattern
                | SignatureRule::DottedNamePattern
                | SignatureRule::FormalsPattern
                | SignatureRule::FormalsPatternAfterDotDot
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigref_tree::RuleKind;

    #[test]
    fn test_registry_names() {
        assert_eq!(SignatureRule::MethodPattern.name(), "methodPattern");
        assert_eq!(
            SignatureRule::FormalsPatternAfterDotDot.as_str(),
            "formalsPatternAfterDotDot"
        );
        assert_eq!(SignatureRule::ALL.len(), 9);
    }

    #[test]
    fn test_matching_rules_are_flagged() {
        assert!(SignatureRule::DotDot.is_matching());
        assert!(SignatureRule::SimpleNamePattern.is_matching());
        assert!(!SignatureRule::MethodPattern.is_matching());
        assert!(!SignatureRule::ReturnTypePattern.is_matching());
    }
}

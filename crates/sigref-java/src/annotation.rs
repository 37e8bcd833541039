//! Rule registry of the annotation-signature grammar.
//!
//! Annotation signatures are parsed separately from the main grammar so that
//! refactor tooling can match on annotations (`@Deprecated`,
//! `@Transactional(readOnly = true)`, ...) without dragging in full Java
//! expression syntax.

use sigref_tree::define_grammar;

define_grammar! {
    /// Rules of the annotation-signature grammar.
    pub enum AnnotationRule {
        /// A whole annotation, any of the three forms below.
        annotation: Annotation = "annotation",
        /// `@Name` with no arguments.
        marker_annotation: MarkerAnnotation = "markerAnnotation",
        /// `@Name(pair, pair, ...)`.
        normal_annotation: NormalAnnotation = "normalAnnotation",
        /// `@Name(value)`.
        single_element_annotation: SingleElementAnnotation = "singleElementAnnotation",
        /// The annotation's dotted type name.
        annotation_name: AnnotationName = "annotationName",
        /// The comma-separated `name = value` pairs.
        element_value_pair_list: ElementValuePairList = "elementValuePairList",
        /// One `name = value` pair.
        element_value_pair: ElementValuePair = "elementValuePair",
        /// An element value: literal, nested annotation, or array.
        element_value: ElementValue = "elementValue",
        /// `{ value, value, ... }`.
        element_value_array_initializer: ElementValueArrayInitializer = "elementValueArrayInitializer",
        /// A dotted name.
        qualified_name: QualifiedName = "qualifiedName",
    }
    listener AnnotationListener;
    visitor AnnotationVisitor;
    walker walk_annotation;
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigref_tree::{Node, RuleKind, Span, Token, TokenKind, WalkControl};

    fn term(text: &str) -> Node<AnnotationRule> {
        Node::terminal(Token::new(
            TokenKind(0),
            text,
            Span::new(0, text.len() as u64),
        ))
    }

    #[test]
    fn test_registry_names() {
        assert_eq!(AnnotationRule::MarkerAnnotation.name(), "markerAnnotation");
        assert_eq!(AnnotationRule::ALL.len(), 10);
    }

    #[test]
    fn test_marker_annotation_walk() {
        // @Deprecated
        let tree = Node::internal(
            AnnotationRule::Annotation,
            vec![Node::internal(
                AnnotationRule::MarkerAnnotation,
                vec![
                    term("@"),
                    Node::internal(
                        AnnotationRule::AnnotationName,
                        vec![Node::internal(
                            AnnotationRule::QualifiedName,
                            vec![term("Deprecated")],
                        )],
                    ),
                ],
            )],
        );

        #[derive(Default)]
        struct Names {
            names: Vec<String>,
        }

        impl AnnotationListener for Names {
            fn enter_annotation_name(
                &mut self,
                node: &sigref_tree::InternalNode<AnnotationRule>,
            ) -> WalkControl {
                self.names.push(node.text());
                WalkControl::Continue
            }
        }

        let mut names = Names::default();
        walk_annotation(&mut names, &tree);
        assert_eq!(names.names, ["Deprecated"]);
    }
}

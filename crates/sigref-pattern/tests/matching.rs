//! End-to-end: pattern tree -> lowered pattern -> candidate selection, plus
//! the generated listener/visitor bindings over the signature grammar.

use sigref_pattern::{
    lower_method_pattern, walk_signature, MethodSignature, SignatureListener, SignatureRule,
    SignatureVisitor,
};
use sigref_tree::{InternalNode, Node, Span, TerminalNode, Token, TokenKind, WalkControl};

fn term(text: &str) -> Node<SignatureRule> {
    Node::terminal(Token::new(
        TokenKind(0),
        text,
        Span::new(0, text.len() as u64),
    ))
}

fn rule(kind: SignatureRule, children: Vec<Node<SignatureRule>>) -> Node<SignatureRule> {
    Node::internal(kind, children)
}

fn simple_name(parts: &[&str]) -> Node<SignatureRule> {
    rule(
        SignatureRule::SimpleNamePattern,
        parts.iter().map(|p| term(p)).collect(),
    )
}

fn type_of(dotted: Vec<Node<SignatureRule>>) -> Node<SignatureRule> {
    rule(
        SignatureRule::TypePattern,
        vec![rule(SignatureRule::DottedNamePattern, dotted)],
    )
}

/// Tree for `* java..*.remove*(.., int)`.
fn remove_pattern_tree() -> Node<SignatureRule> {
    rule(
        SignatureRule::MethodPattern,
        vec![
            rule(
                SignatureRule::ReturnTypePattern,
                vec![rule(SignatureRule::TypePattern, vec![simple_name(&["*"])])],
            ),
            rule(
                SignatureRule::DeclaringTypePattern,
                vec![type_of(vec![
                    simple_name(&["java"]),
                    rule(SignatureRule::DotDot, vec![term("..")]),
                    simple_name(&["*"]),
                ])],
            ),
            term("."),
            simple_name(&["remove", "*"]),
            term("("),
            rule(
                SignatureRule::FormalsPattern,
                vec![
                    rule(SignatureRule::DotDot, vec![term("..")]),
                    rule(
                        SignatureRule::FormalsPatternAfterDotDot,
                        vec![term(","), type_of(vec![simple_name(&["int"])])],
                    ),
                ],
            ),
            term(")"),
        ],
    )
}

fn sig(declaring: &str, name: &str, params: &[&str], ret: &str) -> MethodSignature {
    MethodSignature {
        declaring_type: declaring.to_string(),
        name: name.to_string(),
        parameter_types: params.iter().map(|p| p.to_string()).collect(),
        return_type: ret.to_string(),
    }
}

#[test]
fn lowered_pattern_selects_refactor_targets() {
    let pattern = lower_method_pattern(&remove_pattern_tree()).expect("lowering failed");
    assert_eq!(pattern.to_string(), "* java..*.remove*(.., int)");

    let candidates = vec![
        sig("java.util.List", "remove", &["int"], "boolean"),
        sig("java.util.Vector", "removeElementAt", &["int"], "void"),
        sig("java.util.Map", "remove", &["java.lang.Object"], "boolean"),
        sig("com.example.Bag", "remove", &["int"], "void"),
        sig(
            "java.lang.StringBuilder",
            "replace",
            &["int", "int"],
            "java.lang.StringBuilder",
        ),
    ];

    let selected = pattern.select(&candidates);
    let picked: Vec<String> = selected
        .iter()
        .map(|s| format!("{}.{}", s.declaring_type, s.name))
        .collect();
    assert_eq!(
        picked,
        ["java.util.List.remove", "java.util.Vector.removeElementAt"]
    );
}

#[test]
fn listener_sees_dot_dot_rules_in_source_order() {
    #[derive(Default)]
    struct DotDotSpotter {
        inside: Vec<&'static str>,
        depth_in_formals: usize,
    }

    impl SignatureListener for DotDotSpotter {
        fn enter_formals_pattern(
            &mut self,
            _node: &InternalNode<SignatureRule>,
        ) -> WalkControl {
            self.depth_in_formals += 1;
            WalkControl::Continue
        }

        fn exit_formals_pattern(&mut self, _node: &InternalNode<SignatureRule>) {
            self.depth_in_formals -= 1;
        }

        fn enter_dot_dot(&mut self, _node: &InternalNode<SignatureRule>) -> WalkControl {
            self.inside.push(if self.depth_in_formals > 0 {
                "formals"
            } else {
                "dotted-name"
            });
            WalkControl::Continue
        }
    }

    let mut spotter = DotDotSpotter::default();
    walk_signature(&mut spotter, &remove_pattern_tree());
    assert_eq!(spotter.inside, ["dotted-name", "formals"]);
}

#[test]
fn visitor_reconstructs_pattern_text() {
    /// Concatenates terminal text, recursing through every pattern rule.
    struct PatternText;

    impl SignatureVisitor for PatternText {
        type Output = String;

        fn default_output(&mut self) -> String {
            String::new()
        }

        fn visit_rule(&mut self, node: &InternalNode<SignatureRule>) -> String {
            node.children().iter().map(|c| self.visit(c)).collect()
        }

        fn visit_terminal(&mut self, node: &TerminalNode) -> String {
            node.text().to_string()
        }
    }

    assert_eq!(
        PatternText.visit(&remove_pattern_tree()),
        "*java..*.remove*(..,int)"
    );
}

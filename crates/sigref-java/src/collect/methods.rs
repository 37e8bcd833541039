//! MethodDeclarationCollector listener for declared-signature extraction.
//!
//! The collector walks a compilation unit once and records every method
//! declaration as a [`DeclaredMethod`], with the declaring type qualified by
//! the package name and the stack of enclosing type declarations. The
//! resulting signatures are the candidate set a signature pattern selects
//! from.

use sigref_pattern::MethodSignature;
use sigref_tree::{InternalNode, Node, Span, WalkControl};
use tracing::trace;

use crate::java::{walk_java, JavaListener, JavaRule};

/// A method declaration found in a source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredMethod {
    /// The declared signature, qualified with package and enclosing types.
    pub signature: MethodSignature,
    /// Span of the method's name terminal.
    pub span: Option<Span>,
}

/// A listener that collects declared method signatures from a Java tree.
///
/// The collector tracks the current package and the stack of enclosing type
/// names, so nested types yield dotted declaring types such as
/// `com.example.Outer.Inner`. Constructors and initializers are not
/// collected; only `methodDeclaration` nodes are.
#[derive(Debug, Default)]
pub struct MethodDeclarationCollector {
    /// Package of the compilation unit, once seen.
    package: Option<String>,
    /// Names of the enclosing type declarations, outermost first.
    type_stack: Vec<String>,
    /// Collected method declarations.
    methods: Vec<DeclaredMethod>,
}

impl MethodDeclarationCollector {
    /// Create a new collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every declared method under `root`.
    pub fn collect(root: &Node<JavaRule>) -> Vec<DeclaredMethod> {
        let mut collector = MethodDeclarationCollector::new();
        walk_java(&mut collector, root);
        collector.methods
    }

    /// Get the collected methods, consuming the collector.
    pub fn into_methods(self) -> Vec<DeclaredMethod> {
        self.methods
    }

    /// The dotted declaring type for the current position in the walk.
    fn declaring_type(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(pkg) = &self.package {
            parts.push(pkg);
        }
        parts.extend(self.type_stack.iter().map(String::as_str));
        parts.join(".")
    }

    fn push_type(&mut self, node: &InternalNode<JavaRule>, keyword: &str) {
        let name =
            type_name_after(node, keyword).unwrap_or_else(|| "<anonymous>".to_string());
        self.type_stack.push(name);
    }

    fn pop_type(&mut self) {
        self.type_stack.pop();
    }

    fn record_method(&mut self, node: &InternalNode<JavaRule>) {
        let mut return_type: Option<String> = None;
        let mut name: Option<String> = None;
        let mut span: Option<Span> = None;
        let mut parameter_types: Vec<String> = Vec::new();

        for child in node.children() {
            match child {
                Node::Internal(inner) => match inner.kind() {
                    JavaRule::TypeType if return_type.is_none() => {
                        return_type = Some(inner.text());
                    }
                    JavaRule::FormalParameters => {
                        parameter_types = formal_parameter_types(inner);
                        // Terminals past the formals belong to the throws
                        // clause or the body, not the name.
                        break;
                    }
                    _ => {}
                },
                Node::Terminal(t) => {
                    if t.text() == "void" && return_type.is_none() {
                        return_type = Some("void".to_string());
                    } else {
                        // The method name is the last terminal before the
                        // formals.
                        name = Some(t.text().to_string());
                        span = Some(t.span());
                    }
                }
                Node::Error(_) => return,
            }
        }

        let Some(name) = name else { return };
        let signature = MethodSignature {
            declaring_type: self.declaring_type(),
            name,
            parameter_types,
            return_type: return_type.unwrap_or_else(|| "void".to_string()),
        };
        trace!(signature = %signature, "collected method declaration");
        self.methods.push(DeclaredMethod { signature, span });
    }
}

impl JavaListener for MethodDeclarationCollector {
    fn enter_package_declaration(&mut self, node: &InternalNode<JavaRule>) -> WalkControl {
        for child in node.children() {
            if let Some(name) = child.as_internal() {
                if name.kind() == JavaRule::QualifiedName {
                    self.package = Some(name.text());
                }
            }
        }
        WalkControl::Continue
    }

    fn enter_class_declaration(&mut self, node: &InternalNode<JavaRule>) -> WalkControl {
        self.push_type(node, "class");
        WalkControl::Continue
    }

    fn exit_class_declaration(&mut self, _node: &InternalNode<JavaRule>) {
        self.pop_type();
    }

    fn enter_interface_declaration(&mut self, node: &InternalNode<JavaRule>) -> WalkControl {
        self.push_type(node, "interface");
        WalkControl::Continue
    }

    fn exit_interface_declaration(&mut self, _node: &InternalNode<JavaRule>) {
        self.pop_type();
    }

    fn enter_enum_declaration(&mut self, node: &InternalNode<JavaRule>) -> WalkControl {
        self.push_type(node, "enum");
        WalkControl::Continue
    }

    fn exit_enum_declaration(&mut self, _node: &InternalNode<JavaRule>) {
        self.pop_type();
    }

    fn enter_annotation_type_declaration(
        &mut self,
        node: &InternalNode<JavaRule>,
    ) -> WalkControl {
        // `@interface Name`: the name follows the `interface` terminal.
        self.push_type(node, "interface");
        WalkControl::Continue
    }

    fn exit_annotation_type_declaration(&mut self, _node: &InternalNode<JavaRule>) {
        self.pop_type();
    }

    fn enter_aspect_declaration(&mut self, node: &InternalNode<JavaRule>) -> WalkControl {
        self.push_type(node, "aspect");
        WalkControl::Continue
    }

    fn exit_aspect_declaration(&mut self, _node: &InternalNode<JavaRule>) {
        self.pop_type();
    }

    fn enter_method_declaration(&mut self, node: &InternalNode<JavaRule>) -> WalkControl {
        self.record_method(node);
        WalkControl::Continue
    }
}

/// The terminal immediately after the `keyword` terminal among `node`'s
/// direct children.
fn type_name_after(node: &InternalNode<JavaRule>, keyword: &str) -> Option<String> {
    let mut seen_keyword = false;
    for child in node.children() {
        if let Some(t) = child.as_terminal() {
            if seen_keyword {
                return Some(t.text().to_string());
            }
            if t.text() == keyword {
                seen_keyword = true;
            }
        }
    }
    None
}

/// Parameter type texts from a `formalParameters` node, in order.
fn formal_parameter_types(formals: &InternalNode<JavaRule>) -> Vec<String> {
    let mut types = Vec::new();
    for child in formals.children() {
        let Some(list) = child.as_internal() else { continue };
        if list.kind() != JavaRule::FormalParameterList {
            continue;
        }
        for entry in list.children() {
            let Some(param) = entry.as_internal() else { continue };
            if matches!(
                param.kind(),
                JavaRule::FormalParameter | JavaRule::LastFormalParameter
            ) {
                if let Some(ty) = parameter_type(param) {
                    types.push(ty);
                }
            }
        }
    }
    types
}

fn parameter_type(param: &InternalNode<JavaRule>) -> Option<String> {
    param.children().iter().find_map(|c| {
        c.as_internal()
            .filter(|n| n.kind() == JavaRule::TypeType)
            .map(InternalNode::text)
    })
}

//! Rule registry of the AspectJ-flavored Java grammar.
//!
//! These are purely structural rule kinds: matching semantics live in the
//! signature-pattern grammar, not here. The pointcut and advice families are
//! the AspectJ extension; everything else is plain Java surface syntax. The
//! grammar's productions belong to the external parser; this registry only
//! fixes the closed rule set both traversal protocols dispatch over.

use sigref_tree::define_grammar;

define_grammar! {
    /// Rules of the AspectJ-flavored Java grammar.
    pub enum JavaRule {
        // Compilation unit structure
        /// A whole source file.
        compilation_unit: CompilationUnit = "compilationUnit",
        /// The `package` declaration.
        package_declaration: PackageDeclaration = "packageDeclaration",
        /// An `import` declaration.
        import_declaration: ImportDeclaration = "importDeclaration",
        /// A top-level type declaration.
        type_declaration: TypeDeclaration = "typeDeclaration",

        // Type declarations
        /// A `class` declaration.
        class_declaration: ClassDeclaration = "classDeclaration",
        /// A class body between braces.
        class_body: ClassBody = "classBody",
        /// One declaration inside a class body.
        class_body_declaration: ClassBodyDeclaration = "classBodyDeclaration",
        /// A member declaration (method, field, nested type).
        member_declaration: MemberDeclaration = "memberDeclaration",
        /// An `interface` declaration.
        interface_declaration: InterfaceDeclaration = "interfaceDeclaration",
        /// An interface body between braces.
        interface_body: InterfaceBody = "interfaceBody",
        /// An `enum` declaration.
        enum_declaration: EnumDeclaration = "enumDeclaration",
        /// An `@interface` declaration.
        annotation_type_declaration: AnnotationTypeDeclaration = "annotationTypeDeclaration",

        // Members
        /// A method declaration.
        method_declaration: MethodDeclaration = "methodDeclaration",
        /// A method body.
        method_body: MethodBody = "methodBody",
        /// A constructor declaration.
        constructor_declaration: ConstructorDeclaration = "constructorDeclaration",
        /// A field declaration.
        field_declaration: FieldDeclaration = "fieldDeclaration",
        /// A declaration modifier.
        modifier: Modifier = "modifier",

        // Types
        /// A type use (primitive or reference).
        type_type: TypeType = "typeType",
        /// A class or interface type reference.
        class_or_interface_type: ClassOrInterfaceType = "classOrInterfaceType",
        /// A primitive type keyword.
        primitive_type: PrimitiveType = "primitiveType",
        /// Generic type arguments.
        type_arguments: TypeArguments = "typeArguments",
        /// Generic type parameters.
        type_parameters: TypeParameters = "typeParameters",
        /// One generic type parameter.
        type_parameter: TypeParameter = "typeParameter",

        // Parameters and names
        /// A parenthesized formal-parameter list.
        formal_parameters: FormalParameters = "formalParameters",
        /// The comma-separated formal parameters.
        formal_parameter_list: FormalParameterList = "formalParameterList",
        /// One formal parameter.
        formal_parameter: FormalParameter = "formalParameter",
        /// A trailing varargs parameter.
        last_formal_parameter: LastFormalParameter = "lastFormalParameter",
        /// A dotted name.
        qualified_name: QualifiedName = "qualifiedName",

        // Statements
        /// A braced statement block.
        block: Block = "block",
        /// One statement inside a block.
        block_statement: BlockStatement = "blockStatement",
        /// A local variable declaration.
        local_variable_declaration: LocalVariableDeclaration = "localVariableDeclaration",
        /// A variable declarator.
        variable_declarator: VariableDeclarator = "variableDeclarator",
        /// A statement.
        statement: Statement = "statement",

        // Expressions
        /// An expression.
        expression: Expression = "expression",
        /// A primary expression.
        primary: Primary = "primary",
        /// A method invocation.
        method_call: MethodCall = "methodCall",
        /// A parenthesized argument list.
        arguments: Arguments = "arguments",
        /// An expression list.
        expression_list: ExpressionList = "expressionList",
        /// A literal.
        literal: Literal = "literal",

        // AspectJ: aspects
        /// An `aspect` declaration.
        aspect_declaration: AspectDeclaration = "aspectDeclaration",
        /// An aspect body between braces.
        aspect_body: AspectBody = "aspectBody",
        /// A named `pointcut` declaration.
        pointcut_declaration: PointcutDeclaration = "pointcutDeclaration",
        /// A pointcut expression (possibly composed with `&&`, `||`, `!`).
        pointcut_expression: PointcutExpression = "pointcutExpression",
        /// A primitive pointcut inside an expression.
        primary_pointcut: PrimaryPointcut = "primaryPointcut",

        // AspectJ: primitive pointcuts
        /// `call(signature-pattern)`.
        call_pointcut: CallPointcut = "callPointcut",
        /// `execution(signature-pattern)`.
        execution_pointcut: ExecutionPointcut = "executionPointcut",
        /// `within(type-pattern)`.
        within_pointcut: WithinPointcut = "withinPointcut",
        /// `withincode(signature-pattern)`.
        withincode_pointcut: WithincodePointcut = "withincodePointcut",
        /// `args(type-patterns)`.
        args_pointcut: ArgsPointcut = "argsPointcut",
        /// `target(type-pattern)`.
        target_pointcut: TargetPointcut = "targetPointcut",
        /// `this(type-pattern)`.
        this_pointcut: ThisPointcut = "thisPointcut",
        /// `@annotation(type-pattern)`.
        annotation_pointcut: AnnotationPointcut = "annotationPointcut",
        /// `cflow(pointcut-expression)`.
        cflow_pointcut: CflowPointcut = "cflowPointcut",

        // AspectJ: advice
        /// An advice declaration.
        advice_declaration: AdviceDeclaration = "adviceDeclaration",
        /// `before(..) : pointcut { .. }`.
        before_advice: BeforeAdvice = "beforeAdvice",
        /// `after(..) : pointcut { .. }`.
        after_advice: AfterAdvice = "afterAdvice",
        /// `around(..) : pointcut { .. }`.
        around_advice: AroundAdvice = "aroundAdvice",
        /// The body of an advice.
        advice_body: AdviceBody = "adviceBody",
    }
    listener JavaListener;
    visitor JavaVisitor;
    walker walk_java;
}

impl JavaRule {
    /// Whether this rule belongs to the pointcut family.
    pub fn is_pointcut(&self) -> bool {
        matches!(
            self,
            JavaRule::PointcutDeclaration
                | JavaRule::PointcutExpression
                | JavaRule::PrimaryPointcut
                | JavaRule::CallPointcut
                | JavaRule::ExecutionPointcut
                | JavaRule::WithinPointcut
                | JavaRule::WithincodePointcut
                | JavaRule::ArgsPointcut
                | JavaRule::TargetPointcut
                | JavaRule::ThisPointcut
                | JavaRule::AnnotationPointcut
                | JavaRule::CflowPointcut
        )
    }

    /// Whether this rule is a primitive pointcut such as `call(..)`.
    pub fn is_primitive_pointcut(&self) -> bool {
        matches!(
            self,
            JavaRule::CallPointcut
                | JavaRule::ExecutionPointcut
                | JavaRule::WithinPointcut
                | JavaRule::WithincodePointcut
                | JavaRule::ArgsPointcut
                | JavaRule::TargetPointcut
                | JavaRule::ThisPointcut
                | JavaRule::AnnotationPointcut
                | JavaRule::CflowPointcut
        )
    }

    /// Whether this rule declares a type (class, interface, enum, aspect, ...).
    pub fn is_type_declaration(&self) -> bool {
        matches!(
            self,
            JavaRule::ClassDeclaration
                | JavaRule::InterfaceDeclaration
                | JavaRule::EnumDeclaration
                | JavaRule::AnnotationTypeDeclaration
                | JavaRule::AspectDeclaration
        )
    }

    /// Whether this rule belongs to the advice family.
    pub fn is_advice(&self) -> bool {
        matches!(
            self,
            JavaRule::AdviceDeclaration
                | JavaRule::BeforeAdvice
                | JavaRule::AfterAdvice
                | JavaRule::AroundAdvice
                | JavaRule::AdviceBody
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigref_tree::RuleKind;

    #[test]
    fn test_registry_names() {
        assert_eq!(JavaRule::CallPointcut.name(), "callPointcut");
        assert_eq!(JavaRule::MethodDeclaration.as_str(), "methodDeclaration");
        assert!(JavaRule::ALL.len() > 50);
    }

    #[test]
    fn test_pointcut_family() {
        assert!(JavaRule::CallPointcut.is_pointcut());
        assert!(JavaRule::CallPointcut.is_primitive_pointcut());
        assert!(JavaRule::PointcutExpression.is_pointcut());
        assert!(!JavaRule::PointcutExpression.is_primitive_pointcut());
        assert!(!JavaRule::MethodDeclaration.is_pointcut());
    }

    #[test]
    fn test_type_declarations_include_aspects() {
        assert!(JavaRule::AspectDeclaration.is_type_declaration());
        assert!(JavaRule::ClassDeclaration.is_type_declaration());
        assert!(!JavaRule::MethodDeclaration.is_type_declaration());
    }

    #[test]
    fn test_advice_family() {
        assert!(JavaRule::AroundAdvice.is_advice());
        assert!(!JavaRule::CallPointcut.is_advice());
    }
}

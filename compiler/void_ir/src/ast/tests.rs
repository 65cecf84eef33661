use pretty_assertions::assert_eq;

use super::*;

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

fn infix(operator: InfixOperator, left: Expression, right: Expression) -> Expression {
    Expression::Infix {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn prefix(operator: PrefixOperator, operand: Expression) -> Expression {
    Expression::Prefix {
        operator,
        operand: Box::new(operand),
    }
}

#[test]
fn test_display_fully_parenthesized() {
    // -1 + 2 * 3 <= false
    let expr = infix(
        InfixOperator::LtEq,
        infix(
            InfixOperator::Add,
            prefix(PrefixOperator::Neg, Expression::Integer(1)),
            infix(
                InfixOperator::Mul,
                Expression::Integer(2),
                Expression::Integer(3),
            ),
        ),
        Expression::Boolean(false),
    );
    assert_eq!(expr.to_string(), "(((-1) + (2 * 3)) <= false)");
}

#[test]
fn test_display_let_and_return() {
    let program = Program::new(vec![
        Statement::Let {
            name: Identifier::new("s"),
            value: Expression::Str("hello, world!".to_string()),
        },
        Statement::Return(ident("s")),
    ]);
    assert_eq!(program.to_string(), "let s = \"hello, world!\"return s");
}

#[test]
fn test_display_blocks() {
    assert_eq!(BlockStatement::default().to_string(), "{}");

    let block = BlockStatement::new(vec![Statement::Return(Expression::Boolean(false))]);
    assert_eq!(block.to_string(), "{ return false }");
}

#[test]
fn test_display_if() {
    let if_expr = IfExpression {
        condition: Box::new(Expression::Boolean(true)),
        consequence: BlockStatement::new(vec![Statement::Return(Expression::Boolean(false))]),
        alternative: Some(BlockStatement::new(vec![Statement::Return(
            Expression::Integer(0),
        )])),
    };
    assert_eq!(
        Expression::If(if_expr).to_string(),
        "if (true) { return false } else { return 0 }"
    );

    let bare = IfExpression {
        condition: Box::new(Expression::Boolean(true)),
        consequence: BlockStatement::default(),
        alternative: None,
    };
    assert_eq!(Expression::If(bare).to_string(), "if (true) {}");
}

#[test]
fn test_display_function_call_index() {
    let function = Expression::Function(FunctionLiteral {
        id: FunctionId::new(0),
        parameters: vec![Identifier::new("a"), Identifier::new("b")],
        body: BlockStatement::new(vec![Statement::Return(infix(
            InfixOperator::Add,
            ident("a"),
            ident("b"),
        ))]),
    });
    let call = Expression::Call {
        function: Box::new(function),
        arguments: vec![Expression::Integer(1), Expression::Integer(2)],
    };
    assert_eq!(call.to_string(), "fn (a, b) { return (a + b) }(1, 2)");

    let index = Expression::Index {
        left: Box::new(Expression::Array(vec![
            Expression::Integer(1),
            Expression::Integer(2),
        ])),
        index: Box::new(Expression::Integer(0)),
    };
    assert_eq!(index.to_string(), "[1, 2][0]");
}

#[test]
fn test_function_lookup_by_id() {
    let inner = FunctionLiteral {
        id: FunctionId::new(1),
        parameters: vec![],
        body: BlockStatement::default(),
    };
    let outer = FunctionLiteral {
        id: FunctionId::new(0),
        parameters: vec![Identifier::new("x")],
        body: BlockStatement::new(vec![Statement::Expression(Expression::Function(inner))]),
    };
    let program = Program::new(vec![Statement::Let {
        name: Identifier::new("f"),
        value: Expression::Function(outer),
    }]);

    let ids: Vec<FunctionId> = program.functions().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![FunctionId::new(0), FunctionId::new(1)]);

    let found = program.function(FunctionId::new(1));
    assert_eq!(found.map(ToString::to_string), Some("fn () {}".to_string()));
    assert!(program.function(FunctionId::new(7)).is_none());
}

#[test]
fn test_deep_tree_walk_display_and_drop() {
    let depth = 100_000;
    let mut expr = Expression::Function(FunctionLiteral {
        id: FunctionId::new(0),
        parameters: Vec::new(),
        body: BlockStatement::new(vec![Statement::Return(ident("x"))]),
    });
    for _ in 0..depth {
        expr = prefix(PrefixOperator::Neg, expr);
    }
    let program = Program::new(vec![Statement::Expression(expr)]);

    assert_eq!(program.functions().len(), 1);
    assert!(program.function(FunctionId::new(0)).is_some());
    let rendered = program.to_string();
    assert_eq!(rendered.len(), 3 * depth + "fn () { return x }".len());
    assert!(rendered.starts_with("(-(-"));
    assert!(rendered.contains("(-fn () { return x })"));
    drop(program);
}

use rill::{
    ast::{AssignOperator, BinaryOperator, Node, UnaryOperator},
    error::{Error, ParseError},
    parse,
};

fn assert_parses(src: &str) -> Vec<Node> {
    parse(src).unwrap_or_else(|e| panic!("Parsing failed: {e}\n{src}"))
              .statements
}

fn assert_parse_error(src: &str) -> ParseError {
    match parse(src) {
        Ok(_) => panic!("Parsing succeeded but was expected to fail:\n{src}"),
        Err(Error::Parse(e)) => e,
        Err(e) => panic!("Expected a parse error, got: {e}"),
    }
}

fn num(value: f64) -> Box<Node> {
    Box::new(Node::Num { value, line: 1 })
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let statements = assert_parses("x = 2 + 3 * 4");

    let expected = Node::Assign { target: "x".to_string(),
                                  op:     AssignOperator::Set,
                                  value:  Some(Box::new(Node::BinOp { left:  num(2.0),
                                                                      op:    BinaryOperator::Add,
                                                                      right: Box::new(Node::BinOp { left:  num(3.0),
                                                                                                    op:    BinaryOperator::Mul,
                                                                                                    right: num(4.0),
                                                                                                    line:  1, }),
                                                                      line:  1, })),
                                  line:   1, };

    assert_eq!(statements, [expected]);
}

#[test]
fn unary_minus_applies_to_parenthesized_expressions() {
    let statements = assert_parses("x = -(1 - 2)");

    let Node::Assign { value: Some(value), .. } = &statements[0] else {
        panic!("expected an assignment");
    };
    assert!(matches!(value.as_ref(),
                     Node::UnaryOp { op: UnaryOperator::Negate, operand, .. }
                         if matches!(operand.as_ref(), Node::BinOp { op: BinaryOperator::Sub, .. })));
}

#[test]
fn blank_lines_and_comments_between_statements() {
    assert_eq!(assert_parses("\n\n% note\nx = 1\n\n\ny = 2\n\n").len(), 2);
    assert!(assert_parses("").is_empty());
}

#[test]
fn statements_need_a_newline_between_them() {
    let err = assert_parse_error("x = 1 y = 2");
    assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "newline"));
}

#[test]
fn declared_names_grow_monotonically() {
    assert_parses("x = 1\nx += 1\nx++");
    assert_parses("each i in [1] then\nend\nprintln(i)");
    assert_parses("if 1 < 2 then\n    inner = 1\nend\nprintln(inner)");
    assert_parses("function f(a) then\n    b = a\nend\nprintln(a)");
}

#[test]
fn undeclared_names_are_rejected() {
    for src in ["y += 1", "y++", "v.push(1)", "x = v[0]", "println(z)", "x = x"] {
        let err = assert_parse_error(src);
        assert!(matches!(err, ParseError::UndeclaredVariable { line: 1, .. }),
                "{src} gave {err:?}");
    }
}

#[test]
fn function_names_are_not_checked() {
    assert_parses("later(1, 2)\nx = later()");
}

#[test]
fn arrays_allow_a_trailing_comma() {
    let statements = assert_parses("x = [1, 2,]\ny = []");

    assert!(matches!(&statements[0],
                     Node::Assign { value: Some(v), .. }
                         if matches!(v.as_ref(), Node::Array { elements, .. } if elements.len() == 2)));
    assert!(matches!(&statements[1],
                     Node::Assign { value: Some(v), .. }
                         if matches!(v.as_ref(), Node::Array { elements, .. } if elements.is_empty())));
}

#[test]
fn array_declaration_requires_an_array_literal() {
    assert_parses("var [] a = [1]\nvar b = 2");

    let err = assert_parse_error("var [] a = 5");
    assert!(matches!(err, ParseError::ExpectedArrayLiteral { ref name, .. } if name == "a"));
}

#[test]
fn conditional_arms_on_same_or_next_line() {
    let src = "x = 1
if x < 1 then
    x = 2
end elseif x < 2 then
    x = 3
end
elseif x < 3 then
    x = 4
end else then
    x = 5
end";
    let statements = assert_parses(src);

    let Node::Conditional { cases, else_case, .. } = &statements[1] else {
        panic!("expected a conditional");
    };
    assert_eq!(cases.len(), 3);
    assert!(else_case.as_ref().is_some_and(|arm| arm.condition.is_none()));
}

#[test]
fn only_one_else_arm() {
    let err = assert_parse_error("if 1 < 2 then\nend\nelse then\nend\nelse then\nend");
    assert!(matches!(err, ParseError::InvalidStatement { line: 5, .. }));
}

#[test]
fn conditions_need_exactly_one_comparison() {
    let err = assert_parse_error("x = 1\nif x then\nend");
    assert!(matches!(err, ParseError::ExpectedComparison { line: 2, .. }));

    let err = assert_parse_error("x = 1\nwhile 0 < x < 3 then\nend");
    assert!(matches!(err, ParseError::ChainedComparison { line: 2 }));

    for op in ["==", "!=", "<", "<=", ">", ">="] {
        assert_parses(&format!("if 1 {op} 2 then\nend"));
    }
}

#[test]
fn return_must_end_the_function_body() {
    let statements = assert_parses("function f(a) then\n    b = a * 2\n    return b\nend");
    let Node::DefineFunction(def) = &statements[0] else {
        panic!("expected a function definition");
    };
    assert_eq!(def.parameters, ["a"]);
    assert_eq!(def.body.len(), 1);
    assert!(def.return_expr.is_some());

    let err = assert_parse_error("function f() then\n    return 1\n    x = 2\nend");
    assert!(matches!(err, ParseError::UnexpectedToken { line: 3, .. }));
}

#[test]
fn return_outside_a_function_is_invalid() {
    let err = assert_parse_error("return 1");
    assert!(matches!(err, ParseError::InvalidStatement { .. }));
}

#[test]
fn expressions_are_not_statements() {
    assert!(matches!(assert_parse_error("5"), ParseError::InvalidStatement { .. }));
    assert!(matches!(assert_parse_error("x = 1\nx"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn blocks_must_be_closed() {
    let err = assert_parse_error("repeat 2 then\n    x = 1");
    assert!(matches!(err, ParseError::UnexpectedToken { ref expected, .. } if expected == "'end'"));
}

#[test]
fn method_calls_as_statements_and_expressions() {
    let statements = assert_parses("xs = [3]\nxs.push(4)\nn = xs.len()");

    assert!(matches!(&statements[1],
                     Node::CallMethod { receiver, call, .. }
                         if receiver == "xs" && call.name == "push" && call.arguments.len() == 1));
}

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use exprkit::{
    error::{EvalError, ExprError, ParseError},
    eval,
    interpreter::{
        environment::MapEnvironment,
        token::TokenKind,
        value::Value,
    },
    parse, parse_with_tokens,
};

fn eval_ok(src: &str) -> Value {
    match eval(src, None) {
        Ok(value) => value,
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn eval_err(src: &str) -> ExprError {
    match eval(src, None) {
        Ok(value) => panic!("{src:?} succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn eval_with(src: &str, env: &MapEnvironment) -> Value {
    match eval(src, Some(env)) {
        Ok(value) => value,
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn number(src: &str) -> f64 {
    match eval_ok(src) {
        Value::Number(n) => n,
        other => panic!("{src:?} evaluated to {other:?}, expected a number"),
    }
}

fn boolean(src: &str) -> bool {
    match eval_ok(src) {
        Value::Boolean(b) => b,
        other => panic!("{src:?} evaluated to {other:?}, expected a boolean"),
    }
}

fn string(src: &str) -> String {
    match eval_ok(src) {
        Value::String(s) => s,
        other => panic!("{src:?} evaluated to {other:?}, expected a string"),
    }
}

#[test]
fn number_literals() {
    assert_eq!(number("42"), 42.0);
    assert_eq!(number("3.14"), 3.14);
    assert_eq!(number(".5"), 0.5);
    assert_eq!(number("42."), 42.0);
}

#[test]
fn boolean_literals() {
    assert!(boolean("true"));
    assert!(!boolean("false"));
}

#[test]
fn string_literals_and_escapes() {
    assert_eq!(string("\"hello\""), "hello");
    assert_eq!(string(r#""a\nb""#), "a\nb");
    assert_eq!(string(r#""a\tb""#), "a\tb");
    assert_eq!(string(r#""a\rb""#), "a\rb");
    assert_eq!(string(r#""say \"hi\"""#), "say \"hi\"");
    assert_eq!(string(r#""back\\slash""#), "back\\slash");
    // Unrecognized escapes keep the backslash and the character.
    assert_eq!(string(r#""a\qb""#), "a\\qb");
}

#[test]
fn arithmetic() {
    assert_eq!(number("5 + 3"), 8.0);
    assert_eq!(number("5 - 3"), 2.0);
    assert_eq!(number("5 * 3"), 15.0);
    assert_eq!(number("5 / 2"), 2.5);
    assert_eq!(number("1 + 2 * 3"), 7.0);
}

#[test]
fn precedence() {
    assert_eq!(number("2 + 3 * 4"), 14.0);
    assert_eq!(number("(2 + 3) * 4"), 20.0);
    assert_eq!(number("2 * 3 + 4 * 2"), 14.0);
    assert_eq!(number("-(5 + 5)"), -10.0);
    assert!(boolean("1 + 1 == 2 && 2 + 2 == 4"));
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_err("1 / 0"),
               ExprError::Eval(EvalError::DivisionByZero));
    assert_eq!(eval_err("1 / (2 - 2)"),
               ExprError::Eval(EvalError::DivisionByZero));
}

#[test]
fn unary_operators() {
    assert_eq!(number("-5"), -5.0);
    assert_eq!(number("--5"), 5.0);
    assert!(!boolean("!true"));
    assert!(boolean("!false"));
    assert!(!boolean("not true"));
    // NOT coerces any operand to boolean.
    assert!(boolean("!0"));
    assert!(!boolean("!1"));
    assert!(boolean("!\"\""));
    assert!(boolean("!\"no\""));
}

#[test]
fn negation_requires_a_number() {
    assert!(matches!(eval_err("-true"),
                     ExprError::Eval(EvalError::Type { .. })));
    assert!(matches!(eval_err("-\"abc\""),
                     ExprError::Eval(EvalError::Type { .. })));
}

#[test]
fn numeric_comparisons() {
    assert!(boolean("3 < 5"));
    assert!(!boolean("5 < 3"));
    assert!(boolean("5 > 3"));
    assert!(boolean("3 <= 3"));
    assert!(boolean("5 >= 5"));
    assert!(boolean("2 != 3"));
    assert!(boolean("2 == 2"));
}

#[test]
fn equality_rules() {
    assert!(boolean("true == true"));
    assert!(!boolean("true == false"));
    assert!(boolean("true != false"));
    assert!(boolean("\"hello\" == \"hello\""));
    assert!(!boolean("\"hello\" == \"world\""));
    // A string never equals a non-string; no error is raised.
    assert!(!boolean("\"5\" == 5"));
    assert!(boolean("\"5\" != 5"));
    assert!(!boolean("5 == \"5\""));
    // Number/boolean mixes are a type error, not a coerced comparison.
    assert!(matches!(eval_err("1 == true"),
                     ExprError::Eval(EvalError::Type { .. })));
    assert!(matches!(eval_err("true < false"),
                     ExprError::Eval(EvalError::Type { .. })));
}

#[test]
fn logical_operators() {
    assert!(boolean("true && true"));
    assert!(!boolean("true && false"));
    assert!(!boolean("true and false"));
    assert!(boolean("true || false"));
    assert!(!boolean("false || false"));
    assert!(boolean("false or true"));
    assert!(boolean("true xor false"));
    assert!(!boolean("true xor true"));
    // Logical operands coerce: numbers and strings work too.
    assert!(boolean("1 && \"yes\""));
    assert!(!boolean("1 && \"no\""));
}

#[test]
fn short_circuit_evaluation() {
    let mut env = MapEnvironment::new();
    env.set("x", 0.0);

    // The right side would divide by zero; it must never run.
    assert_eq!(eval_with("false && (1 / x) > 0", &env),
               Value::Boolean(false));
    assert_eq!(eval_with("true || (1 / x) > 0", &env),
               Value::Boolean(true));

    // XOR has no short circuit: the same division now fails.
    assert!(matches!(eval("false xor (1 / x) > 0", Some(&env)),
                     Err(ExprError::Eval(EvalError::DivisionByZero))));
}

#[test]
fn string_concatenation() {
    assert_eq!(string("\"hello\" + \" world\""), "hello world");
    // Either side being a string coerces the other.
    assert_eq!(string("\"x\" + 5"), "x5");
    assert_eq!(string("5 + \"x\""), "5x");
    assert_eq!(string("\"flag: \" + true"), "flag: true");
    assert_eq!(string("\"pi is about \" + 3.14"), "pi is about 3.14");
}

#[test]
fn string_comparisons() {
    assert!(boolean("\"apple\" < \"banana\""));
    assert!(!boolean("\"banana\" < \"apple\""));
    assert!(boolean("\"b\" >= \"abc\""));
    // Relational operators demand two strings.
    assert!(matches!(eval_err("\"apple\" < 5"),
                     ExprError::Eval(EvalError::Type { .. })));
}

#[test]
fn in_operator() {
    assert!(boolean("\"ell\" in \"hello\""));
    assert!(!boolean("\"xyz\" in \"hello\""));
    assert!(boolean("\"hello\" in \"hello\""));
    // An empty needle matches every haystack.
    assert!(boolean("\"\" in \"hello\""));
    assert!(boolean("\"\" in \"\""));
    // Both operands must be strings.
    assert!(matches!(eval_err("\"5\" in 15"),
                     ExprError::Eval(EvalError::Type { .. })));
    assert!(matches!(eval_err("5 in 15"),
                     ExprError::Eval(EvalError::Type { .. })));
}

#[test]
fn ternary_operator() {
    assert_eq!(number("3 > 2 ? 5 : 10"), 5.0);
    assert_eq!(number("3 < 2 ? 5 : 10"), 10.0);
    // Right-associative in both branches.
    assert_eq!(number("1 ? 2 : 0 ? 3 : 4"), 2.0);
    assert_eq!(number("0 ? 2 : 0 ? 3 : 4"), 4.0);
    // The condition coerces like any boolean context.
    assert_eq!(number("\"no\" ? 1 : 2"), 2.0);
    assert_eq!(number("\"yes\" ? 1 : 2"), 1.0);
}

#[test]
fn ternary_evaluates_exactly_one_branch() {
    let calls = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&calls);

    let mut env = MapEnvironment::new();
    env.register_function("side_effect", move |_args| {
           seen.set(seen.get() + 1);
           Ok(Value::Number(99.0))
       });

    assert_eq!(eval_with("true ? 1 : side_effect()", &env),
               Value::Number(1.0));
    assert_eq!(eval_with("false ? side_effect() : 2", &env),
               Value::Number(2.0));
    assert_eq!(calls.get(), 0);

    assert_eq!(eval_with("false ? 1 : side_effect()", &env),
               Value::Number(99.0));
    assert_eq!(calls.get(), 1);
}

#[test]
fn variables_resolve_through_the_environment() {
    let mut env = MapEnvironment::new();
    env.set("x", 7.0);
    env.set("pos.x", 3.0);
    env.set("name", "world");

    assert_eq!(eval_with("x + 1", &env), Value::Number(8.0));
    // Dotted paths are one opaque name; the parser never splits on '.'.
    assert_eq!(eval_with("pos.x * 2", &env), Value::Number(6.0));
    assert_eq!(eval_with("\"hello \" + name", &env),
               Value::String("hello world".to_string()));

    assert_eq!(eval("y", Some(&env)),
               Err(ExprError::Eval(EvalError::UnknownVariable { name: "y".to_string() })));
}

#[test]
fn variables_require_an_environment() {
    assert_eq!(eval_err("x + 1"),
               ExprError::Eval(EvalError::UnknownVariable { name: "x".to_string() }));
}

#[test]
fn standard_functions() {
    assert_eq!(number("sqrt(16)"), 4.0);
    assert_eq!(number("min(3, 7)"), 3.0);
    assert_eq!(number("max(3, 7)"), 7.0);
    assert_eq!(number("pow(2, 10)"), 1024.0);
    assert_eq!(number("abs(-5)"), 5.0);
    assert_eq!(number("floor(3.7)"), 3.0);
    assert_eq!(number("ceil(3.2)"), 4.0);
    assert_eq!(number("round(3.5)"), 4.0);
    assert_eq!(number("round(-2.5)"), -3.0);
    assert_eq!(number("exp(0)"), 1.0);
    assert_eq!(number("log(1)"), 0.0);
    assert_eq!(number("sin(0)"), 0.0);
    assert_eq!(number("cos(0)"), 1.0);
    assert_eq!(number("tan(0)"), 0.0);
    // Standard functions compose with operators and work without an
    // environment.
    assert_eq!(number("sqrt(16) + max(1, 2)"), 6.0);
}

#[test]
fn domain_errors() {
    assert!(matches!(eval_err("sqrt(-1)"),
                     ExprError::Eval(EvalError::Domain { .. })));
    assert!(matches!(eval_err("log(0)"),
                     ExprError::Eval(EvalError::Domain { .. })));
    assert!(matches!(eval_err("log(-3)"),
                     ExprError::Eval(EvalError::Domain { .. })));
}

#[test]
fn standard_library_is_consulted_before_the_environment() {
    let mut env = MapEnvironment::new();
    env.register_function("max", |_args| Ok(Value::Number(-1.0)));

    // Matching name, arity and types: the standard library wins.
    assert_eq!(eval_with("max(1, 2)", &env), Value::Number(2.0));
    // Three arguments do not match the standard table and fall through.
    assert_eq!(eval_with("max(1, 2, 3)", &env), Value::Number(-1.0));
}

#[test]
fn non_numeric_arguments_fall_through_to_the_environment() {
    let mut env = MapEnvironment::new();
    env.register_function("min", |args| {
           Ok(Value::Number(args.len() as f64))
       });

    assert_eq!(eval_with("min(\"a\", \"b\")", &env), Value::Number(2.0));
    // Without an environment the same call has nowhere to go.
    assert_eq!(eval_err("min(\"a\", \"b\")"),
               ExprError::Eval(EvalError::UnknownFunction { name: "min".to_string() }));
}

#[test]
fn unknown_functions() {
    assert_eq!(eval_err("mystery(1)"),
               ExprError::Eval(EvalError::UnknownFunction { name: "mystery".to_string() }));

    let env = MapEnvironment::new();
    assert_eq!(eval("mystery(1)", Some(&env)),
               Err(ExprError::Eval(EvalError::UnknownFunction { name: "mystery".to_string() })));
}

#[test]
fn call_arguments_evaluate_left_to_right() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&order);

    let mut env = MapEnvironment::new();
    env.register_function("mark", move |args| {
           let n = args[0].as_number()?;
           seen.borrow_mut().push(n);
           Ok(Value::Number(n))
       });

    assert_eq!(eval_with("mark(1) + mark(2) * mark(3)", &env),
               Value::Number(7.0));
    assert_eq!(*order.borrow(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn parse_once_evaluate_many() {
    let mut env = MapEnvironment::new();
    env.set("health", 80.0);
    env.set("max_health", 100.0);

    let expr = parse("health > max_health * 0.5").expect("parse failed");
    assert_eq!(expr.evaluate(Some(&env)).unwrap(), Value::Boolean(true));
    assert_eq!(expr.evaluate(Some(&env)).unwrap(), Value::Boolean(true));

    env.set("health", 20.0);
    assert_eq!(expr.evaluate(Some(&env)).unwrap(), Value::Boolean(false));
}

#[test]
fn token_collection_covers_the_source() {
    let source = "1 + max(pos.x, 2) > 3";
    let mut tokens = Vec::new();
    parse_with_tokens(source, &mut tokens).expect("parse failed");

    // Left to right, whitespace included, no gaps and no overlaps.
    let mut expected_start = 0;
    for token in &tokens {
        assert_eq!(token.start, expected_start);
        assert!(token.start + token.length <= source.len());
        assert_eq!(&source[token.start..token.start + token.length], token.text);
        expected_start = token.start + token.length;
    }
    assert_eq!(expected_start, source.len());

    let kinds: Vec<TokenKind> = tokens.iter()
                                      .filter(|t| t.kind != TokenKind::Whitespace)
                                      .map(|t| t.kind)
                                      .collect();
    assert_eq!(kinds,
               vec![TokenKind::Number,
                    TokenKind::Operator,
                    TokenKind::Identifier,
                    TokenKind::Parenthesis,
                    TokenKind::Identifier,
                    TokenKind::Comma,
                    TokenKind::Number,
                    TokenKind::Parenthesis,
                    TokenKind::Operator,
                    TokenKind::Number]);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Whitespace));
}

#[test]
fn token_collection_survives_lexical_errors() {
    let mut tokens = Vec::new();
    let result = parse_with_tokens("1 + $", &mut tokens);

    assert_eq!(result,
               Err(ParseError::UnrecognizedCharacter { character: '$',
                                                       offset:    4, }));
    // The valid prefix is still available for highlighting.
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Number,
                    TokenKind::Whitespace,
                    TokenKind::Operator,
                    TokenKind::Whitespace,
                    TokenKind::Unknown]);
}

#[test]
fn keywords_do_not_swallow_identifier_prefixes() {
    let mut env = MapEnvironment::new();
    env.set("android", 1.0);
    env.set("order", 2.0);
    env.set("note", 3.0);

    assert_eq!(eval_with("android + order + note", &env),
               Value::Number(6.0));
}

#[test]
fn parse_errors() {
    assert!(matches!(parse("2 +"), Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse("(1 + 2"),
                     Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse("max(1, 2"),
                     Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse("1 ? 2"),
                     Err(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(parse("1 ? 2 ; 3"),
                     Err(ParseError::UnrecognizedCharacter { .. })));
    assert!(matches!(parse("\"unterminated"),
                     Err(ParseError::UnterminatedString { offset: 0 })));
    assert!(matches!(parse("1 2"),
                     Err(ParseError::TrailingTokens { .. })));
    assert!(matches!(parse("1 + 2)"),
                     Err(ParseError::TrailingTokens { .. })));
    assert_eq!(parse(""), Err(ParseError::EmptyExpression));
    assert_eq!(parse("   "), Err(ParseError::EmptyExpression));
}

#[test]
fn evaluation_is_deterministic() {
    for _ in 0..3 {
        assert_eq!(number("2 + 3 * 4 - 1"), 13.0);
        assert_eq!(string("\"a\" + \"b\""), "ab");
    }
}

#[test]
fn value_boolean_coercion_boundary() {
    assert!(!Value::from("").as_boolean());
    assert!(!Value::from("false").as_boolean());
    assert!(!Value::from("FALSE").as_boolean());
    assert!(!Value::from("no").as_boolean());
    assert!(!Value::from("0").as_boolean());
    assert!(Value::from("anything else").as_boolean());
    assert!(Value::from("00").as_boolean());
    assert!(!Value::from(0.0).as_boolean());
    assert!(Value::from(-0.5).as_boolean());
}

#[test]
fn value_number_coercion() {
    assert_eq!(Value::from(true).as_number().unwrap(), 1.0);
    assert_eq!(Value::from(false).as_number().unwrap(), 0.0);
    assert_eq!(Value::from(" 2.5 ").as_number().unwrap(), 2.5);
    assert!(Value::from("").as_number().is_err());
    assert!(Value::from("  ").as_number().is_err());
    assert!(Value::from("twelve").as_number().is_err());
}

#[test]
fn value_string_rendering() {
    assert_eq!(Value::from(3.0).as_string(), "3");
    assert_eq!(Value::from(-3.0).as_string(), "-3");
    assert_eq!(Value::from(3.25).as_string(), "3.25");
    assert_eq!(Value::from(true).as_string(), "true");
    assert_eq!(eval_ok("10 / 4").to_string(), "2.5");
    assert_eq!(eval_ok("4 / 2").to_string(), "2");
}

use std::fs;

use nitlang::{
    error::{ParseError, RuntimeError},
    eval_line,
    interpreter::{evaluator::core::Interpreter, value::Value},
    run_script,
};

fn assert_result(src: &str, expected: i64) {
    match run_script(src) {
        Ok(Some(Value::Integer(n))) => assert_eq!(n, expected, "script: {src}"),
        other => panic!("Script {src:?} produced {other:?}, expected {expected}"),
    }
}

fn assert_failure(src: &str) {
    if run_script(src).is_ok() {
        panic!("Script {src:?} succeeded but was expected to fail")
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    let error = run_script(src).expect_err("expected a runtime error");
    *error.downcast::<RuntimeError>()
          .unwrap_or_else(|e| panic!("Script {src:?} failed with a non-runtime error: {e}"))
}

fn parse_error(src: &str) -> ParseError {
    let error = run_script(src).expect_err("expected a parse error");
    *error.downcast::<ParseError>()
          .unwrap_or_else(|e| panic!("Script {src:?} failed with a non-parse error: {e}"))
}

#[test]
fn arithmetic_and_precedence() {
    assert_result("2 + 3 * 4", 14);
    assert_result("20 - 10 / 2", 15);
    assert_result("2 * 3 + 4", 10);
    assert_result("10 - 3 - 2", 5);
    assert_result("100 / 10 / 5", 2);
}

#[test]
fn parenthesization_overrides_precedence() {
    assert_result("(2 + 3) * 4", 20);
    assert_result("20 - (10 - 5)", 15);
    assert_result("((7))", 7);
}

#[test]
fn negative_values_come_from_subtraction() {
    assert_result("5 - 10", -5);
    assert_result("0 - 5", -5);
    assert_result("0 - 5 * 3", -15);
}

#[test]
fn division_floors_toward_negative_infinity() {
    assert_result("7 / 2", 3);
    assert_result("(0 - 7) / 2", -4);
    assert_result("(0 - 9) / 3", -3);
    assert_result("7 / (0 - 2)", -4);
}

#[test]
fn division_by_zero_is_always_rejected() {
    assert!(matches!(runtime_error("1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("let x = 5 / 0"),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("(2 + 3) / (1 - 1)"),
                     RuntimeError::DivisionByZero { .. }));
}

#[test]
fn arithmetic_overflow_is_an_error() {
    assert_result("9223372036854775807 - 1 + 1", 9_223_372_036_854_775_807);
    assert!(matches!(runtime_error("9223372036854775807 + 1"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn equality_yields_one_or_zero() {
    assert_result("2 == 2", 1);
    assert_result("2 == 3", 0);
    assert_result("1 + 1 == 2", 1);
    assert_result("2 * 3 == 5 + 1", 1);
}

#[test]
fn equality_does_not_chain() {
    assert!(matches!(parse_error("1 == 1 == 1"), ParseError::TrailingTokens { .. }));
}

#[test]
fn if_selects_by_truthiness() {
    assert_result("if 1 then 10 else 20", 10);
    assert_result("if 0 then 10 else 20", 20);
    assert_result("if 0 - 5 then 1 else 2", 1);
    assert_result("if 2 == 3 then 1 else 0", 0);
}

#[test]
fn untaken_branch_is_never_evaluated() {
    assert_result("if 1 then 5 else 1 / 0", 5);
    assert_result("if 0 then #missing() else 7", 7);
}

#[test]
fn let_statement_binds_durably() {
    assert_result("let x = 1 + 2\nx * 10", 30);
    assert_result("let x = 4\nlet y = x + 1\nx + y", 9);
}

#[test]
fn declarations_acknowledge_instead_of_computing() {
    let mut session = Interpreter::new();

    let value = eval_line(&mut session, "let x = 10").unwrap();
    assert_eq!(value, Value::Declaration("Variable 'x' = 10".to_string()));

    let value = eval_line(&mut session, "func f(n) = n").unwrap();
    assert_eq!(value, Value::Declaration("Function 'f' defined".to_string()));
}

#[test]
fn let_expression_scopes_and_restores() {
    assert_result("let x = 10 in x + 1", 11);
    assert_result("let z = 100\nlet z = 200 in z", 200);

    // The shadow must vanish once the let expression returns.
    let mut session = Interpreter::new();
    eval_line(&mut session, "let z = 100").unwrap();
    assert_eq!(eval_line(&mut session, "let z = 200 in z").unwrap(),
               Value::Integer(200));
    assert_eq!(eval_line(&mut session, "z").unwrap(), Value::Integer(100));
}

#[test]
fn let_expressions_nest() {
    assert_result("let a = 1 in let b = 2 in a + b", 3);
    assert_result("let a = 1 in let a = a + 1 in a", 2);
}

#[test]
fn let_without_in_is_rejected_in_expression_position() {
    assert!(matches!(parse_error("1 + (let x = 2)"), ParseError::LetWithoutIn { .. }));
    assert!(matches!(parse_error("if let x = 1 then 1 else 2"),
                     ParseError::LetWithoutIn { .. }));
}

#[test]
fn function_definition_and_calls() {
    assert_result("func square(x) = x * x\n#square(3)", 9);
    assert_result("func add(a, b) = a + b\n#add(2, 5)", 7);
    assert_result("func pick(c, a, b) = if c then a else b\n#pick(0, 1, 2)", 2);
}

#[test]
fn redefinition_overwrites_the_function() {
    assert_result("func f(n) = n + 1\nfunc f(n) = n * 2\n#f(10)", 20);
}

#[test]
fn recursion_works() {
    let fact = "func fact(n) = if n == 0 then 1 else n * #fact(n - 1)";
    assert_result(&format!("{fact}\n#fact(5)"), 120);
    assert_result(&format!("{fact}\n#fact(0)"), 1);
    assert_result("func fib(n) = if n then if n - 1 then #fib(n - 1) + #fib(n - 2) else 1 else 0\n#fib(10)",
                  55);
}

#[test]
fn runaway_recursion_hits_the_call_depth_limit() {
    let error = runtime_error("func inf(n) = #inf(n + 1)\n#inf(0)");
    assert!(matches!(error, RuntimeError::RecursionLimit { .. }));
}

#[test]
fn arity_is_enforced_exactly() {
    let add = "func add(a, b) = a + b";

    match runtime_error(&format!("{add}\n#add(1)")) {
        RuntimeError::ArityMismatch { expected, found, .. } => {
            assert_eq!((expected, found), (2, 1));
        },
        other => panic!("expected an arity mismatch, got {other:?}"),
    }
    match runtime_error(&format!("{add}\n#add(1, 2, 3)")) {
        RuntimeError::ArityMismatch { expected, found, .. } => {
            assert_eq!((expected, found), (2, 3));
        },
        other => panic!("expected an arity mismatch, got {other:?}"),
    }
}

#[test]
fn calls_do_not_capture_the_caller_scope() {
    // Function frames chain to the global scope, never to the call site, so
    // the shadowed 'base' is invisible inside the body.
    assert_result("let base = 5\nfunc f() = base + 1\nlet base = 999 in #f()", 6);
    assert_result("let x = 1\nfunc g() = x\nfunc h(x) = #g()\n#h(42)", 1);
}

#[test]
fn parameters_shadow_globals_inside_the_body() {
    assert_result("let n = 100\nfunc id(n) = n\n#id(7)", 7);
    assert_result("let n = 100\nfunc id(n) = n\n#id(7) + n", 107);
}

#[test]
fn duplicate_parameters_bind_last_wins() {
    assert_result("func dup(x, x) = x\n#dup(1, 2)", 2);
}

#[test]
fn variables_and_functions_do_not_collide() {
    assert_result("let f = 10\nfunc f(n) = n + 1\n#f(f)", 11);
}

#[test]
fn block_bodies_run_statements_in_order() {
    assert_result("func g() = { let a = 7 a * 2 }\n#g()", 14);
    assert_result("func s() = { let a = 1 let b = a + 1 a + b }\n#s()", 3);
}

#[test]
fn block_locals_never_escape_the_call() {
    let script = "func g() = { let a = 7 a }\n#g()\na";
    assert!(matches!(runtime_error(script), RuntimeError::UnknownVariable { name, .. } if name == "a"));
}

#[test]
fn functions_defined_inside_a_block_are_global() {
    assert_result("func outer() = { func inner() = 42 1 }\n#outer()\n#inner()", 42);
}

#[test]
fn empty_block_has_no_value() {
    assert!(matches!(runtime_error("func e() = { }\n#e()"),
                     RuntimeError::EmptyBlock { .. }));
}

#[test]
fn declaration_result_cannot_be_computed_with() {
    let script = "func h() = { let a = 1 }\n#h() + 1";
    assert!(matches!(runtime_error(script), RuntimeError::DeclarationAsValue { .. }));

    // Calling it without consuming the value is fine and yields the
    // acknowledgment of the block's last statement.
    let value = run_script("func h() = { let a = 1 }\n#h()").unwrap();
    assert_eq!(value, Some(Value::Declaration("Variable 'a' = 1".to_string())));
}

#[test]
fn unknown_names_are_reported() {
    assert!(matches!(runtime_error("foo + 1"),
                     RuntimeError::UnknownVariable { name, .. } if name == "foo"));
    assert!(matches!(runtime_error("#missing(1)"),
                     RuntimeError::UnknownFunction { name, .. } if name == "missing"));
}

#[test]
fn arguments_evaluate_in_the_caller_scope() {
    assert_result("let x = 3\nfunc id(n) = n\nlet x = 4 in #id(x)", 4);
}

#[test]
fn lexing_rejects_unknown_characters() {
    match parse_error("1 + $") {
        ParseError::InvalidCharacter { character, position } => {
            assert_eq!((character, position), ('$', 4));
        },
        other => panic!("expected an invalid character error, got {other:?}"),
    }
}

#[test]
fn oversized_literals_are_rejected() {
    assert!(matches!(parse_error("99999999999999999999999999"),
                     ParseError::LiteralTooLarge { .. }));
}

#[test]
fn keywords_are_reserved() {
    assert_failure("let let = 5");
    assert_failure("func if(n) = n");
    assert_failure("let in = 1");
}

#[test]
fn one_statement_per_line() {
    assert!(matches!(parse_error("1 + 2 3"), ParseError::TrailingTokens { .. }));
    assert!(matches!(parse_error("let x = 1 let y = 2"),
                     ParseError::TrailingTokens { .. }));
}

#[test]
fn unterminated_parenthesis_is_reported() {
    assert!(matches!(parse_error("(1 + 2"), ParseError::ExpectedClosingParen { .. }));
}

#[test]
fn pure_expressions_are_idempotent() {
    let mut session = Interpreter::new();
    eval_line(&mut session, "let x = 6").unwrap();

    let first = eval_line(&mut session, "x * 7 + 1").unwrap();
    let second = eval_line(&mut session, "x * 7 + 1").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Value::Integer(43));
}

#[test]
fn session_survives_failed_lines() {
    let mut session = Interpreter::new();
    eval_line(&mut session, "let x = 1").unwrap();

    // A failure deep inside a scoped binding must restore the global frame.
    assert!(eval_line(&mut session, "let x = 5 in #undefined()").is_err());
    assert_eq!(eval_line(&mut session, "x").unwrap(), Value::Integer(1));

    assert!(eval_line(&mut session, "1 / 0").is_err());
    assert_eq!(eval_line(&mut session, "let y = 2").unwrap(),
               Value::Declaration("Variable 'y' = 2".to_string()));
    assert_eq!(eval_line(&mut session, "x + y").unwrap(), Value::Integer(3));
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.nit").expect("missing file");
    let value = run_script(&script).unwrap();
    assert_eq!(value, Some(Value::Integer(60)));
}

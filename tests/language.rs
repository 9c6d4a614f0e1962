use std::{fs, path::Path};

use lalg::{Config, Error, interpreter::value::Value, run};
use walkdir::WalkDir;

/// Every `tests/programs/*.lalg` runs with its `.in` file as console input
/// and must print exactly its `.out` file. A `.err` file holds the expected
/// error message for programs that must fail.
#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "lalg"))
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let input = read_sibling(path, "in").unwrap_or_default();
        let expected_output = read_sibling(path, "out").unwrap_or_default();
        let expected_error = read_sibling(path, "err");

        let mut output = Vec::new();
        let result = run(&source, &Config::default(), input.as_bytes(), &mut output);
        let output = String::from_utf8(output).expect("output is not UTF-8");

        match (result, expected_error) {
            (Ok(_), None) => {},
            (Err(e), Some(message)) => assert_eq!(e.to_string(), message.trim_end(), "{path:?}"),
            (Ok(_), Some(message)) => panic!("{path:?} succeeded but was expected to fail with:\n{message}"),
            (Err(e), None) => panic!("{path:?} failed:\n{source}\nError: {e}"),
        }
        assert_eq!(output, expected_output, "output of {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_sibling(path: &Path, extension: &str) -> Option<String> {
    fs::read_to_string(path.with_extension(extension)).ok()
}

fn assert_output(src: &str, input: &str, expected: &str) {
    let mut output = Vec::new();
    if let Err(e) = run(src, &Config::default(), input.as_bytes(), &mut output) {
        panic!("Program failed: {e}");
    }
    assert_eq!(String::from_utf8(output).unwrap(), expected);
}

fn run_failure(src: &str, input: &str) -> Error {
    match run(src, &Config::default(), input.as_bytes(), Vec::new()) {
        Ok(_) => panic!("Program succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn final_store_holds_every_variable() {
    let src = "programa p; var a, b: inteiro; c: lógico; início a := 3; ler(c) fim.";
    let store = run(src, &Config::default(), "1\n".as_bytes(), Vec::new()).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get("a"), Some(Value::Integer(3)));
    assert_eq!(store.get("b"), Some(Value::Integer(0)));
    assert_eq!(store.get("c"), Some(Value::Boolean(true)));
    assert_eq!(store.get("d"), None);

    let mut names: Vec<_> = store.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn subtraction_and_division_are_left_associative() {
    assert_output("programa p; início escrever(10 - 3 - 2) fim.", "", "5\n");
    assert_output("programa p; início escrever(64 / 4 / 2) fim.", "", "8\n");
    assert_output("programa p; início escrever(1 - 2 + 3) fim.", "", "2\n");
}

#[test]
fn precedence_and_grouping() {
    assert_output("programa p; início escrever(2 + 3 * 4) fim.", "", "14\n");
    assert_output("programa p; início escrever((2 + 3) * 4) fim.", "", "20\n");
    assert_output("programa p; início escrever(-(2 + 3)) fim.", "", "-5\n");
    assert_output("programa p; início escrever(--4, +4) fim.", "", "44\n");
}

#[test]
fn write_concatenates_without_separators() {
    assert_output("programa p; var x: inteiro; início x := 7; escrever(\"x=\", x, \"!\") fim.",
                  "",
                  "x=7!\n");
    assert_output("programa p; início escrever(\"a\"); escrever(\"b\") fim.", "", "a\nb\n");
}

#[test]
fn read_takes_one_line_per_variable() {
    assert_output("programa p; var a, b: inteiro; início ler(a, b); escrever(a * b) fim.",
                  "6\n7\n",
                  "42\n");
    assert_output("programa p; var a: inteiro; início ler(a); escrever(a) fim.",
                  "  -12  \n",
                  "-12\n");
}

#[test]
fn boolean_input_is_true_only_for_one() {
    let src = "programa p; var b: lógico; início ler(b); escrever(b) fim.";
    assert_output(src, "1\n", "true\n");
    assert_output(src, "0\n", "false\n");
    assert_output(src, "sim\n", "false\n");
    assert_output(src, "2\n", "false\n");
}

#[test]
fn if_runs_exactly_one_branch() {
    let src = "programa p; var a: inteiro;
               início
                   ler(a);
                   se a > 0 então escrever(\"positivo\") senão escrever(\"não positivo\")
               fim.";
    assert_output(src, "5\n", "positivo\n");
    assert_output(src, "0\n", "não positivo\n");
}

#[test]
fn else_binds_to_the_nearest_if() {
    let src = "programa p; var a, b: inteiro;
               início
                   ler(a, b);
                   se a > 0 então se b > 0 então escrever(\"ambos\") senão escrever(\"só a\")
               fim.";
    assert_output(src, "1\n1\n", "ambos\n");
    assert_output(src, "1\n0\n", "só a\n");
    assert_output(src, "0\n1\n", "");
}

#[test]
fn while_with_false_condition_never_runs() {
    assert_output("programa p; var i: inteiro; início enquanto i > 0 faça escrever(i) fim.",
                  "",
                  "");
}

#[test]
fn bare_boolean_conditions() {
    let src = "programa p; var ok: lógico; início ler(ok); se ok então escrever(\"ok\") fim.";
    assert_output(src, "1\n", "ok\n");
    assert_output(src, "0\n", "");
}

#[test]
fn output_before_a_failure_is_kept() {
    let src = "programa p; var a, z: inteiro; início escrever(\"um\"); a := 1 / z fim.";
    let mut output = Vec::new();
    let result = run(src, &Config::default(), "".as_bytes(), &mut output);

    assert!(matches!(result, Err(Error::Runtime(_))));
    assert_eq!(String::from_utf8(output).unwrap(), "um\n");
}

#[test]
fn errors_carry_their_stage() {
    assert!(matches!(run_failure("programa p; início x := 1 @ fim.", ""), Error::Lex(_)));
    assert!(matches!(run_failure("programa p início fim.", ""), Error::Syntax(_)));
    assert!(matches!(run_failure("programa p; início x := 1 fim.", ""), Error::Semantic(_)));
    assert!(matches!(run_failure("programa p; var x: inteiro; início ler(x) fim.", ""),
                     Error::Runtime(_)));
}

#[test]
fn undeclared_variable_message() {
    let error = run_failure("programa p; var x: inteiro; início x := y fim.", "");
    assert_eq!(error.to_string(),
               "Semantic error: Error on line 1, column 41: Undeclared variable 'y'.");
}

#[test]
fn checker_runs_before_any_output() {
    let src = "programa p; var x: inteiro; b: lógico; início escrever(\"oi\"); x := b fim.";
    let mut output = Vec::new();
    let result = run(src, &Config::default(), "".as_bytes(), &mut output);

    assert!(matches!(result, Err(Error::Semantic(_))));
    assert!(output.is_empty());
}

#[test]
fn literal_booleans_are_opt_in() {
    let src = "programa p; var b: lógico; início b := 1; escrever(b) fim.";
    assert!(matches!(run_failure(src, ""), Error::Semantic(_)));

    let config = Config::default().with_literal_booleans(true);
    let mut output = Vec::new();
    let store = run(src, &config, "".as_bytes(), &mut output).unwrap();

    assert_eq!(store.get("b"), Some(Value::Boolean(true)));
    assert_eq!(String::from_utf8(output).unwrap(), "true\n");
}

#[test]
fn loop_limit_stops_runaway_programs() {
    let src = "programa p; var i: inteiro; início enquanto i = 0 faça escrever(\"x\") fim.";
    let config = Config::default().with_max_loop_iterations(3);
    let mut output = Vec::new();
    let error = run(src, &config, "".as_bytes(), &mut output).unwrap_err();

    assert_eq!(error.to_string(),
               "Runtime error: Error on line 1: Loop exceeded the limit of 3 iterations.");
    assert_eq!(String::from_utf8(output).unwrap(), "x\nx\nx\n");
}

#[test]
fn loop_limit_allows_loops_that_finish_in_time() {
    let src = "programa p; var i: inteiro; início enquanto i < 3 faça i := i + 1 fim.";
    let config = Config::default().with_max_loop_iterations(3);
    let store = run(src, &config, "".as_bytes(), Vec::new()).unwrap();

    assert_eq!(store.get("i"), Some(Value::Integer(3)));
}

#[test]
fn english_reference_program() {
    use lalg::interpreter::lexer::{TokenKind, tokenize};

    let src = "program teste; var x,y: integer; begin x := 3; y := x * (2 + 1); write(y) end.";

    let tokens = tokenize(src).unwrap();
    let head: Vec<_> = tokens.iter().take(4).map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(head,
               [(TokenKind::Program, "program"),
                (TokenKind::Identifier, "teste"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Var, "var")]);

    assert_output(src, "", "9\n");
}

#[test]
fn deeply_nested_expressions_run() {
    let depth = 200;
    let src = format!("programa p; início escrever({}-7{}) fim.", "(".repeat(depth), ")".repeat(depth));
    assert_output(&src, "", "-7\n");
}

#[test]
fn excessive_nesting_is_an_error_not_a_crash() {
    let src = format!("programa p; início escrever({}1{}) fim.", "(".repeat(20_000), ")".repeat(20_000));
    assert!(matches!(run_failure(&src, ""), Error::Syntax(_)));
}

use lalg::{
    error::SemanticError,
    interpreter::{
        checker::core::{CheckOptions, check},
        lexer::tokenize,
        parser::core::parse,
        value::Type,
    },
};

fn check_source(source: &str) -> Result<(), SemanticError> {
    check_with(source, CheckOptions::default())
}

fn check_with(source: &str, options: CheckOptions) -> Result<(), SemanticError> {
    let program = parse(&tokenize(source).unwrap()).unwrap();
    check(&program, options).map(|_| ())
}

#[test]
fn well_typed_program_passes() {
    let source = "programa p;
                  var a, b: inteiro; ok: lógico;
                  início
                      ler(a, b, ok);
                      a := (a + b) * 2 - b / 3;
                      ok := ok + ok;
                      se ok então escrever(\"a: \", a) senão escrever(ok);
                      enquanto a > b faça a := a - 1
                  fim.";
    assert_eq!(check_source(source), Ok(()));
}

#[test]
fn symbol_table_lists_declarations() {
    let program = parse(&tokenize("programa p; var a: inteiro; b: lógico; início a := 1 fim.").unwrap()).unwrap();
    let symbols = check(&program, CheckOptions::default()).unwrap();

    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols.lookup("a").map(|s| s.ty), Some(Type::Integer));
    assert_eq!(symbols.lookup("b").map(|s| s.ty), Some(Type::Boolean));
    assert!(symbols.lookup("c").is_none());
}

#[test]
fn duplicate_declarations() {
    let error = check_source("programa p; var a, a: inteiro; início a := 1 fim.").unwrap_err();
    assert!(matches!(error, SemanticError::DuplicateDeclaration { ref name, .. } if name == "a"));

    let error = check_source("programa p; var a: inteiro; a: lógico; início a := 1 fim.").unwrap_err();
    assert_eq!(error.location(), (1, 29));
}

#[test]
fn every_reference_must_be_declared() {
    let cases = ["programa p; início ler(x) fim.",
                 "programa p; início escrever(x) fim.",
                 "programa p; início x := 1 fim.",
                 "programa p; var a: inteiro; início a := x fim.",
                 "programa p; início se x então escrever(1) fim.",
                 "programa p; início enquanto x < 1 faça escrever(1) fim."];

    for source in cases {
        let error = check_source(source).unwrap_err();
        assert!(matches!(error, SemanticError::UndeclaredVariable { ref name, .. } if name == "x"),
                "{source}: {error}");
    }
}

#[test]
fn assignment_type_mismatch_points_at_the_operator() {
    let error = check_source("programa p; var a: inteiro; b: lógico; início a := b fim.").unwrap_err();

    assert_eq!(error,
               SemanticError::TypeMismatch { expected: Type::Integer,
                                             found:    Type::Boolean,
                                             line:     1,
                                             column:   49, });
    assert_eq!(error.to_string(),
               "Error on line 1, column 49: Type mismatch: expected integer, found boolean.");
}

#[test]
fn comparisons_need_matching_sides() {
    let error = check_source("programa p; var a: inteiro; b: lógico; início se a = b então a := 1 fim.").unwrap_err();
    assert!(matches!(error,
                     SemanticError::TypeMismatch { expected: Type::Integer,
                                                   found: Type::Boolean,
                                                   .. }));

    assert_eq!(check_source("programa p; var a, b: lógico; início se a = b então a := b fim."),
               Ok(()));
}

#[test]
fn mixed_arithmetic_is_integer() {
    assert_eq!(check_source("programa p; var a: inteiro; b: lógico; início a := a + b fim."),
               Ok(()));

    let error = check_source("programa p; var a: inteiro; b: lógico; início b := b * a fim.").unwrap_err();
    assert!(matches!(error,
                     SemanticError::TypeMismatch { expected: Type::Boolean,
                                                   found: Type::Integer,
                                                   .. }));
}

#[test]
fn signs_need_integers() {
    let error = check_source("programa p; var b: lógico; início b := -b fim.").unwrap_err();
    assert!(matches!(error, SemanticError::InvalidOperand { ref operator, .. } if operator == "-"));
}

#[test]
fn boolean_arithmetic_stays_boolean() {
    assert_eq!(check_source("programa p; var a, b: lógico; início a := a * b + b fim."), Ok(()));

    let error = check_source("programa p; var a: lógico; n: inteiro; início n := a - a fim.").unwrap_err();
    assert!(matches!(error, SemanticError::TypeMismatch { .. }));
}

#[test]
fn integer_variables_are_not_conditions() {
    let error = check_source("programa p; var n: inteiro; início\n  se n então n := 1 fim.").unwrap_err();

    assert_eq!(error,
               SemanticError::NonBooleanCondition { construct: "if",
                                                    found:     Type::Integer,
                                                    line:      2,
                                                    column:    6, });

    let error = check_source("programa p; var n: inteiro; início enquanto n faça n := 1 fim.").unwrap_err();
    assert!(matches!(error, SemanticError::NonBooleanCondition { construct: "while", .. }));
}

#[test]
fn literal_booleans_only_with_the_option() {
    let source = "programa p; var b: lógico; início b := 1; b := 0 fim.";
    assert!(check_source(source).is_err());

    let options = CheckOptions { literal_booleans: true };
    assert_eq!(check_with(source, options), Ok(()));

    let other = "programa p; var b: lógico; início b := 2 fim.";
    assert!(check_with(other, options).is_err());

    let computed = "programa p; var b: lógico; início b := 1 + 0 fim.";
    assert!(check_with(computed, options).is_err());
}

#[test]
fn checking_twice_gives_the_same_verdict() {
    let sources = ["programa p; var a: inteiro; início a := a + 1 fim.",
                   "programa p; var a: inteiro; início a := b fim."];

    for source in sources {
        let program = parse(&tokenize(source).unwrap()).unwrap();
        let first = check(&program, CheckOptions::default()).map(|t| t.len());
        let second = check(&program, CheckOptions::default()).map(|t| t.len());
        assert_eq!(first, second);
    }
}

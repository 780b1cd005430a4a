use std::{fs, path::Path};

use lolcode::{
    Error, Options,
    ast::{ArithmeticOperator, Expr, LiteralValue, Statement},
    error::{ParseError, RuntimeError},
    interpreter::{lexer::Token, value::types::Type},
    parse, run, tokenize,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "lol"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_sibling(path, "out").unwrap_or_else(|| panic!("{path:?} has no .out file"));
        let stdin = read_sibling(path, "in").unwrap_or_default();

        count += 1;
        let mut output = Vec::new();
        if let Err(e) = run(&source, &Options::default(), &mut stdin.as_bytes(), &mut output) {
            panic!("Program {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(String::from_utf8_lossy(&output), expected, "output of {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_sibling(path: &Path, extension: &str) -> Option<String> {
    fs::read_to_string(path.with_extension(extension)).ok()
}

/// Wraps `body` in `HAI`/`KTHXBYE`, runs it and returns the output together
/// with the result.
fn execute(body: &str, stdin: &str, options: &Options) -> (String, Result<(), Error>) {
    let source = format!("HAI 1.2\n{body}\nKTHXBYE\n");
    let mut output = Vec::new();
    let result = run(&source, options, &mut stdin.as_bytes(), &mut output);

    (String::from_utf8(output).expect("output is valid UTF-8"), result)
}

fn assert_output(body: &str, expected: &str) {
    assert_output_with_input(body, "", expected);
}

fn assert_output_with_input(body: &str, stdin: &str, expected: &str) {
    let (output, result) = execute(body, stdin, &Options::default());
    if let Err(e) = result {
        panic!("Script failed: {e}\nOutput so far: {output:?}");
    }
    assert_eq!(output, expected);
}

/// Runs `body`, expects it to fail and returns the error and the output
/// written before the failure.
fn assert_failure(body: &str) -> (Error, String) {
    let (output, result) = execute(body, "", &Options::default());
    match result {
        Ok(()) => panic!("Script succeeded but was expected to fail. Output: {output:?}"),
        Err(e) => (e, output),
    }
}

fn runtime_error(body: &str) -> RuntimeError {
    match assert_failure(body).0 {
        Error::Runtime(e) => e,
        other => panic!("Expected a runtime error, got: {other}"),
    }
}

#[test]
fn arithmetic_promotes_only_when_a_float_is_involved() {
    assert_output(r#"VISIBLE SUM OF "5" AN 3"#, "8\n");
    assert_output(r#"VISIBLE SUM OF "5" AN 3.0"#, "8.000000\n");
    assert_output(r#"VISIBLE SUM OF "1.5" AN 1"#, "2.500000\n");
    assert_output("VISIBLE DIFF OF 1 AN 3", "-2\n");
    assert_output("VISIBLE PRODUKT OF 6 AN 7", "42\n");
    assert_output("VISIBLE QUOSHUNT OF 7 AN 2", "3\n");
    assert_output("VISIBLE QUOSHUNT OF 7.0 AN 2", "3.500000\n");
    assert_output("VISIBLE BIGGR OF 3 AN 7", "7\n");
    assert_output("VISIBLE SMALLR OF 3 AN 7.5", "3.000000\n");
    assert_output("VISIBLE SUM OF 1 2", "3\n");
}

#[test]
fn mod_of_multiplies_integers() {
    assert_output("VISIBLE MOD OF 3 AN 4", "12\n");
    assert!(matches!(runtime_error("VISIBLE MOD OF 3.0 AN 4"), RuntimeError::FloatModulo { .. }));
}

#[test]
fn arithmetic_failures() {
    assert!(matches!(runtime_error("VISIBLE QUOSHUNT OF 1 AN 0"),
                     RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("VISIBLE SUM OF 9223372036854775807 AN 1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error(r#"VISIBLE SUM OF "five" AN 1"#),
                     RuntimeError::NotNumeric { .. }));
    assert!(matches!(runtime_error("VISIBLE SUM OF WIN AN 1"),
                     RuntimeError::ImplicitCast { from: Type::Troof,
                                                  to:   Type::Numbr,
                                                  .. }));
    assert!(matches!(runtime_error("I HAS A x\nVISIBLE SUM OF x AN 1"),
                     RuntimeError::ImplicitCast { .. }));
}

#[test]
fn floats_print_with_six_decimals() {
    assert_output("VISIBLE 3.14159265", "3.141593\n");
    assert_output("VISIBLE .5", "0.500000\n");
    assert_output("VISIBLE -2.0", "-2.000000\n");
}

#[test]
fn equality_rules() {
    assert_output("VISIBLE BOTH SAEM 5 AN 5.0", "WIN\n");
    assert_output("VISIBLE BOTH SAEM 5 AN 5.1", "FAIL\n");
    assert_output(r#"VISIBLE BOTH SAEM "abc" AN "abc""#, "WIN\n");
    assert_output(r#"VISIBLE DIFFRINT "abc" AN "abd""#, "WIN\n");
    assert_output("VISIBLE DIFFRINT WIN AN FAIL", "WIN\n");
    assert_output("VISIBLE BOTH SAEM SUM OF 0.1 AN 0.2 AN 0.3", "WIN\n");

    assert!(matches!(runtime_error(r#"VISIBLE BOTH SAEM "1" AN 1"#),
                     RuntimeError::InvalidComparison { .. }));
    assert!(matches!(runtime_error("VISIBLE BOTH SAEM NOOB AN NOOB"),
                     RuntimeError::InvalidComparison { .. }));
}

#[test]
fn boolean_operators() {
    assert_output("VISIBLE BOTH OF WIN AN FAIL", "FAIL\n");
    assert_output("VISIBLE EITHER OF WIN AN FAIL", "WIN\n");
    assert_output("VISIBLE WON OF WIN AN WIN", "FAIL\n");
    assert_output("VISIBLE NOT 0", "WIN\n");
    assert_output(r#"VISIBLE ALL OF WIN AN 1 AN "x" MKAY"#, "WIN\n");
    assert_output(r#"VISIBLE ANY OF 0 AN "" AN FAIL MKAY"#, "FAIL\n");
    assert_output("VISIBLE ANY OF 0.0 1 MKAY", "WIN\n");
}

#[test]
fn variadic_operators_short_circuit() {
    assert_output("VISIBLE ANY OF WIN AN I IZ missing MKAY MKAY", "WIN\n");
    assert_output("VISIBLE ALL OF FAIL AN I IZ missing MKAY MKAY", "FAIL\n");
    assert!(matches!(runtime_error("VISIBLE ALL OF WIN AN I IZ missing MKAY MKAY"),
                     RuntimeError::UnknownFunction { .. }));
}

#[test]
fn smoosh_and_visible() {
    assert_output(r#"VISIBLE SMOOSH "a" AN 1 AN 2.5 MKAY"#, "a12.500000\n");
    assert_output(r#"VISIBLE SMOOSH "x" AN "y""#, "xy\n");
    assert_output(r#"VISIBLE "a" 1 WIN"#, "a1WIN\n");
    assert_output("VISIBLE \"no newline\"!\nVISIBLE \"next\"", "no newlinenext\n");
    assert!(matches!(runtime_error(r#"VISIBLE SMOOSH "a" AN NOOB MKAY"#),
                     RuntimeError::ImplicitCast { .. }));
}

#[test]
fn casts() {
    assert_output("I HAS A x ITZ \"42\"\nx IS NOW A NUMBR\nVISIBLE SUM OF x AN 1", "43\n");
    assert_output("VISIBLE MAEK 3.9 A NUMBR", "3\n");
    assert_output("VISIBLE MAEK -3.9 A NUMBR", "-3\n");
    assert_output("VISIBLE MAEK WIN A NUMBAR", "1.000000\n");
    assert_output("VISIBLE MAEK 5 NUMBAR", "5.000000\n");
    assert_output("VISIBLE MAEK NOOB A YARN", "\n");
    assert_output(r#"VISIBLE MAEK "" A TROOF"#, "FAIL\n");
    assert_output("I HAS A x ITZ 0.0\nx IS NOW A TROOF\nVISIBLE x", "FAIL\n");

    assert!(matches!(runtime_error(r#"VISIBLE MAEK "abc" A NUMBR"#),
                     RuntimeError::CastFailed { .. }));
    assert!(matches!(runtime_error("VISIBLE MAEK 7 A NOOB"), RuntimeError::ImplicitCast { .. }));
    assert!(matches!(runtime_error("y IS NOW A YARN"), RuntimeError::UnknownVariable { .. }));
}

#[test]
fn declarations_and_assignments() {
    assert_output("I HAS A x ITZ 1\nI HAS A x ITZ 2\nVISIBLE x", "2\n");
    assert_output("I HAS A x\nx R \"set\"\nVISIBLE x", "set\n");
    assert_output("I HAS A x ITZ 1, VISIBLE x", "1\n");

    assert!(matches!(runtime_error("y R 1"), RuntimeError::AssignmentToUndeclared { .. }));
    assert!(matches!(runtime_error("VISIBLE y"), RuntimeError::UnknownVariable { .. }));
    assert!(matches!(runtime_error("I HAS A x\nVISIBLE x"), RuntimeError::ImplicitCast { .. }));
}

#[test]
fn it_holds_the_last_bare_expression() {
    assert_output("SUM OF 2 AN 3\nVISIBLE IT", "5\n");
    assert_output("VISIBLE MAEK IT A YARN", "\n");
}

#[test]
fn loop_frames_shadow_outer_variables() {
    assert_output(r#"
I HAS A x ITZ 1
IM IN YR loop
  I HAS A x ITZ 2
  VISIBLE x
  GTFO
IM OUTTA YR loop
VISIBLE x
"#,
                  "2\n1\n");
}

#[test]
fn redeclaring_in_a_later_iteration_stays_in_the_loop_frame() {
    assert_output(r#"
I HAS A x ITZ "outer"
I HAS A n ITZ 0
IM IN YR l
  n R SUM OF n AN 1
  I HAS A x ITZ PRODUKT OF n AN 10
  VISIBLE x
  BOTH SAEM n AN 3
  O RLY?
    YA RLY
      GTFO
  OIC
IM OUTTA YR l
VISIBLE x
"#,
                  "10\n20\n30\nouter\n");
}

#[test]
fn loop_assignment_reaches_outer_variable() {
    assert_output(r#"
I HAS A i ITZ 0
IM IN YR counter
  VISIBLE i
  i R SUM OF i AN 1
  BOTH SAEM i AN 3
  O RLY?
    YA RLY
      GTFO
  OIC
IM OUTTA YR counter
VISIBLE "done :{i}"
"#,
                  "0\n1\n2\ndone 3\n");
}

#[test]
fn loop_frame_survives_iterations_but_not_the_loop() {
    let body = r#"
I HAS A n ITZ 0
IM IN YR l
  n R SUM OF n AN 1
  BOTH SAEM n AN 1
  O RLY?
    YA RLY
      I HAS A seen ITZ "first"
    NO WAI
      VISIBLE seen
      GTFO
  OIC
IM OUTTA YR l
VISIBLE seen
"#;

    let (error, output) = assert_failure(body);
    assert_eq!(output, "first\n");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnknownVariable { .. })), "{error}");
}

#[test]
fn loop_label_mismatch_fails_before_running() {
    let (error, output) = assert_failure(r#"
VISIBLE "before"
IM IN YR a
  VISIBLE "inside"
  GTFO
IM OUTTA YR b
"#);

    assert_eq!(output, "before\n");
    assert!(matches!(error, Error::Runtime(RuntimeError::LoopLabelMismatch { .. })), "{error}");
}

#[test]
fn conditionals() {
    let body = r#"
I HAS A n ITZ 7
BOTH SAEM n AN 1
O RLY?
  YA RLY
    VISIBLE "one"
  MEBBE BOTH SAEM n AN 7
    VISIBLE "seven"
  MEBBE BOTH SAEM n AN 7
    VISIBLE "again"
  NO WAI
    VISIBLE "other"
OIC
"#;
    assert_output(body, "seven\n");

    assert_output("WIN\nO RLY?\n  YA RLY\n    VISIBLE \"yes\"\nOIC", "yes\n");
    assert_output("O RLY?\n  YA RLY\n    VISIBLE \"yes\"\n  NO WAI\n    VISIBLE \"no\"\nOIC",
                  "no\n");
    assert_output("FAIL\nO RLY?\n  YA RLY\n    VISIBLE \"yes\"\nOIC\nVISIBLE \"after\"",
                  "after\n");
}

#[test]
fn mebbe_does_not_change_it() {
    assert_output(r#"
FAIL
O RLY?
  YA RLY
    VISIBLE "then"
  MEBBE WIN
    VISIBLE IT
OIC
"#,
                  "FAIL\n");
}

#[test]
fn functions_bind_parameters_positionally() {
    assert_output(r#"
HOW IZ I sub YR a AN YR b
  FOUND YR DIFF OF a AN b
IF U SAY SO
VISIBLE I IZ sub YR 10 AN YR 3 MKAY
"#,
                  "7\n");
}

#[test]
fn recursive_functions() {
    assert_output(r#"
HOW IZ I fact YR n
  BOTH SAEM n AN 0
  O RLY?
    YA RLY
      FOUND YR 1
    NO WAI
      FOUND YR PRODUKT OF n AN I IZ fact YR DIFF OF n AN 1 MKAY
  OIC
IF U SAY SO
VISIBLE I IZ fact YR 10 MKAY
"#,
                  "3628800\n");
}

#[test]
fn deep_recursion_within_the_call_limit() {
    assert_output(r#"
HOW IZ I total YR n
  BOTH SAEM n AN 0
  O RLY?
    YA RLY
      FOUND YR 0
  OIC
  FOUND YR SUM OF n AN I IZ total YR DIFF OF n AN 1 MKAY
IF U SAY SO
VISIBLE I IZ total YR 1000 MKAY
"#,
                  "500500\n");
}

#[test]
fn call_depth_is_limited() {
    let body = r#"
HOW IZ I forever YR n
  FOUND YR I IZ forever YR n MKAY
IF U SAY SO
I IZ forever YR 1 MKAY
"#;
    let (_, result) = execute(body, "", &Options { max_call_depth: 50 });

    match result {
        Err(Error::Runtime(RuntimeError::CallDepthExceeded { limit, .. })) => assert_eq!(limit, 50),
        other => panic!("Expected the call depth to be exceeded, got {other:?}"),
    }
}

#[test]
fn function_results() {
    // Falling off the end yields the function's own IT.
    assert_output(r#"
HOW IZ I twice YR x
  PRODUKT OF x AN 2
IF U SAY SO
VISIBLE I IZ twice YR 21 MKAY
"#,
                  "42\n");

    // GTFO yields NOOB.
    assert_output(r#"
HOW IZ I nothing
  GTFO
  FOUND YR 1
IF U SAY SO
VISIBLE MAEK I IZ nothing MKAY A TROOF
"#,
                  "FAIL\n");

    // No statements at all also yields NOOB.
    assert_output("HOW IZ I empty\nIF U SAY SO\nVISIBLE MAEK I IZ empty MKAY A YARN", "\n");

    // GTFO inside a loop only leaves the loop.
    assert_output(r#"
HOW IZ I first YR x
  IM IN YR l
    GTFO
  IM OUTTA YR l
  FOUND YR x
IF U SAY SO
VISIBLE I IZ first YR "kept" MKAY
"#,
                  "kept\n");
}

#[test]
fn calls_do_not_disturb_the_callers_it() {
    assert_output(r#"
HOW IZ I noisy
  FAIL
IF U SAY SO
WIN
I HAS A r ITZ I IZ noisy MKAY
O RLY?
  YA RLY
    VISIBLE "still WIN"
  NO WAI
    VISIBLE "clobbered"
OIC
"#,
                  "still WIN\n");
}

#[test]
fn functions_cannot_see_the_callers_variables() {
    assert!(matches!(runtime_error(r#"
I HAS A secret ITZ 1
HOW IZ I peek
  FOUND YR secret
IF U SAY SO
VISIBLE I IZ peek MKAY
"#),
                     RuntimeError::UnknownVariable { .. }));
}

#[test]
fn function_errors() {
    assert!(matches!(runtime_error(r#"
HOW IZ I add YR a AN YR b
  FOUND YR SUM OF a AN b
IF U SAY SO
VISIBLE I IZ add YR 1 MKAY
"#),
                     RuntimeError::ArgumentCountMismatch { expected: 2, found: 1, .. }));

    assert!(matches!(runtime_error("VISIBLE I IZ nope MKAY"), RuntimeError::UnknownFunction { .. }));

    assert!(matches!(runtime_error(r#"
VISIBLE I IZ later MKAY
HOW IZ I later
  FOUND YR 1
IF U SAY SO
"#),
                     RuntimeError::UnknownFunction { .. }));

    assert!(matches!(runtime_error(r#"
HOW IZ I f
  FOUND YR 1
IF U SAY SO
HOW IZ I f
  FOUND YR 2
IF U SAY SO
"#),
                     RuntimeError::FunctionAlreadyDefined { .. }));

    assert!(matches!(runtime_error(r#"
IM IN YR l
  HOW IZ I f
    FOUND YR 1
  IF U SAY SO
  GTFO
IM OUTTA YR l
"#),
                     RuntimeError::FunctionOutsideMain { .. }));
}

#[test]
fn found_yr_inside_a_loop_is_fatal() {
    assert!(matches!(runtime_error(r#"
HOW IZ I f
  IM IN YR l
    FOUND YR 1
  IM OUTTA YR l
IF U SAY SO
I IZ f MKAY
"#),
                     RuntimeError::ReturnInsideLoop { .. }));
}

#[test]
fn returning_from_main_is_fatal() {
    assert!(matches!(runtime_error("FOUND YR 1"), RuntimeError::ReturnFromMain { .. }));
    assert!(matches!(runtime_error("GTFO"), RuntimeError::ReturnFromMain { .. }));
}

#[test]
fn output_templates() {
    assert_output(r#"VISIBLE "Hello:)World:>!""#, "Hello\nWorld\t!\n");
    assert_output("I HAS A x ITZ \"hi\"\nVISIBLE \":{x}\"", "hi\n");
    assert_output(r#"VISIBLE "say :"yo:"""#, "say \"yo\"\n");
    assert_output(r#"VISIBLE "a::b""#, "a:b\n");
    assert_output("I HAS A n ITZ 2.5\nVISIBLE \"n = :{n}\"", "n = 2.500000\n");

    for bad in [r#"VISIBLE "bad :q""#, r#"VISIBLE ":{1x}""#, r#"VISIBLE ":{x""#, r#"VISIBLE ":{}""#] {
        assert!(matches!(runtime_error(&format!("I HAS A x ITZ 1\n{bad}")),
                         RuntimeError::Template { .. }),
                "{bad}");
    }
    assert!(matches!(runtime_error(r#"VISIBLE ":{ghost}""#), RuntimeError::UnknownVariable { .. }));
}

#[test]
fn gimmeh_reads_words() {
    assert_output_with_input(r#"
GIMMEH name
VISIBLE "HAI :{name}"
GIMMEH other
VISIBLE other
GIMMEH more
VISIBLE SMOOSH "[" AN more AN "]" MKAY
"#,
                             "alice  bob\n",
                             "HAI alice\nbob\n[]\n");

    assert_output_with_input("GIMMEH n\nVISIBLE SUM OF n AN 1", "41", "42\n");
}

#[test]
fn gimmeh_splits_on_vertical_tabs() {
    assert_output_with_input("GIMMEH a\nGIMMEH b\nVISIBLE a \"|\" b",
                             "x\x0By",
                             "x|y\n");
}

#[test]
fn gimmeh_sets_a_visible_variable() {
    assert_output_with_input(r#"
I HAS A word ITZ "none"
IM IN YR l
  GIMMEH word
  GTFO
IM OUTTA YR l
VISIBLE word
"#,
                             "hello",
                             "hello\n");
}

#[test]
fn output_before_an_error_is_kept() {
    let (error, output) = assert_failure("VISIBLE \"a\"\nVISIBLE x");

    assert_eq!(output, "a\n");
    assert_eq!(error.to_string(), "Error on line 3: Unreferenced variable 'x'.");
}

#[test]
fn comments_and_continuations() {
    assert_output("BTW nothing here\nVISIBLE 1 BTW trailing", "1\n");
    assert_output("OBTW\n  a block\n  comment\nTLDR\nVISIBLE 2", "2\n");
    assert_output("VISIBLE SUM OF 1 AN ...\n  2", "3\n");

    let (error, _) = assert_failure("OBTW\nthis is\nTLDR\nVISIBLE nope");
    assert!(error.to_string().starts_with("Error on line 5:"), "{error}");
}

#[test]
fn syntax_errors() {
    let parse_error = |source: &str| {
        let mut output = Vec::new();
        match run(source, &Options::default(), &mut "".as_bytes(), &mut output) {
            Err(Error::Parse(e)) => e,
            other => panic!("Expected a parse error for {source:?}, got {other:?}"),
        }
    };

    assert!(matches!(parse_error("VISIBLE 1\nKTHXBYE"), ParseError::ExpectedKeyword { .. }));
    assert!(matches!(parse_error("HAI 1.2\nVISIBLE 1"), ParseError::ExpectedKeyword { .. }));
    assert!(matches!(parse_error("HAI 1.2\nKTHXBYE\nVISIBLE 1"),
                     ParseError::UnexpectedTrailingTokens { .. }));
    let trailing = parse_error("HAI 1.2\nI HAS A x ITZ 1 2\nKTHXBYE");
    assert!(matches!(trailing, ParseError::UnexpectedTrailingTokens { .. }));
    assert_eq!(trailing.line(), 2);
    assert!(matches!(parse_error("HAI 1.2\nVISIBLE\nKTHXBYE"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("HAI 1.2\nVISIBLE \"open\nKTHXBYE"),
                     ParseError::InvalidToken { .. }));
    assert!(matches!(parse_error("HAI 1.2\nOBTW never closed\nKTHXBYE"),
                     ParseError::InvalidToken { .. }));
    assert!(matches!(parse_error("HAI 1.2\nIM IN YR l\nVISIBLE 1\nKTHXBYE"),
                     ParseError::ExpectedKeyword { .. }));
    assert!(matches!(parse_error("HAI 1.2\nI HAS A ITZ ITZ 1\nKTHXBYE"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn errors_at_the_end_of_input_name_the_last_line() {
    let error = parse("HAI 1.2\nVISIBLE 1\nVISIBLE 2").expect_err("KTHXBYE is missing");
    assert!(matches!(error, ParseError::ExpectedKeyword { expected: "KTHXBYE", .. }));
    assert_eq!(error.line(), 3);
    assert_eq!(error.to_string(), "Error on line 3: Expected 'KTHXBYE' but found end of input.");

    let error = parse("HAI 1.2\nI HAS A x ITZ").expect_err("ITZ needs a value");
    assert!(matches!(error, ParseError::UnexpectedEndOfInput { .. }));
    assert_eq!(error.line(), 2);

    let error = parse("HAI 1.2\nHOW IZ I f\n  VISIBLE 1\n").expect_err("function is not closed");
    assert!(matches!(error, ParseError::ExpectedKeyword { expected: "IF U SAY SO", .. }));
    assert_eq!(error.line(), 4);
}

#[test]
fn one_letter_keywords_are_not_identifiers() {
    let tokens: Vec<Token> = tokenize("I HAS A Ix\nIx R 1\nO RLY? U")
        .expect("source tokenizes")
        .into_iter()
        .map(|(token, _)| token)
        .collect();

    assert_eq!(tokens,
               vec![Token::I,
                    Token::Has,
                    Token::A,
                    Token::Identifier("Ix".to_string()),
                    Token::NewLine,
                    Token::Identifier("Ix".to_string()),
                    Token::R,
                    Token::NumbrLit(1),
                    Token::NewLine,
                    Token::O,
                    Token::Rly,
                    Token::Question,
                    Token::U]);
}

#[test]
fn deeply_nested_expressions_do_not_overflow() {
    let source = format!("VISIBLE {}WIN", "NOT ".repeat(3_000));
    assert_output(&source, "WIN\n");

    let source = format!("VISIBLE {}1", "SUM OF 1 AN ".repeat(2_000));
    assert_output(&source, "2001\n");
}

#[test]
fn programs_without_a_version_parse() {
    let program = parse("\n\nHAI\nVISIBLE 1\nKTHXBYE\n\n").expect("program parses");

    assert_eq!(program.version, None);
    assert_eq!(program.statements,
               vec![Statement::Print { arguments: vec![Expr::Literal { value: LiteralValue::Numbr(1),
                                                                       line:  4, }],
                                       newline:   true,
                                       line:      4, }]);
}

#[test]
fn optional_an_and_nested_operands_parse() {
    let program = parse("HAI 1.2\nSUM OF PRODUKT OF 2 3 AN 4\nKTHXBYE").expect("program parses");

    let literal = |n: i64| Expr::Literal { value: LiteralValue::Numbr(n),
                                           line:  2, };
    let expected = Expr::Arithmetic { op:    ArithmeticOperator::Sum,
                                      left:  Box::new(Expr::Arithmetic { op:    ArithmeticOperator::Produkt,
                                                                         left:  Box::new(literal(2)),
                                                                         right: Box::new(literal(3)),
                                                                         line:  2, }),
                                      right: Box::new(literal(4)),
                                      line:  2, };

    assert_eq!(program.statements,
               vec![Statement::Expression { expr: expected,
                                            line: 2, }]);
}

use infixa::{
    interpreter::{evaluator::core::Evaluator, operator::Associativity},
    shell::{BANNER, EXIT_MESSAGE, HINT, PROMPT, Shell},
};

fn transcript_with(evaluator: Evaluator, input: &str) -> String {
    let mut shell = Shell::new(evaluator, input.as_bytes(), Vec::new());
    shell.run().expect("in-memory shell cannot fail");
    String::from_utf8(shell.into_output()).expect("shell output is utf-8")
}

fn transcript(input: &str) -> String {
    transcript_with(Evaluator::new(), input)
}

#[test]
fn greets_prompts_and_answers() {
    let out = transcript("3 + 4 * 2\nexit\n");
    let expected = format!("{BANNER}\n{HINT}\n{PROMPT}Result: 11.0\n{PROMPT}{EXIT_MESSAGE}\n");
    assert_eq!(out, expected);
}

#[test]
fn errors_are_printed_and_the_loop_continues() {
    let out = transcript("10/0\n5$3\n(1+2\n5+\n1.5*2\nexit\n");
    let answers: Vec<&str> = out.lines()
                                .skip(2)
                                .map(|line| line.trim_start_matches(PROMPT))
                                .collect();
    assert_eq!(answers,
               vec!["Error: Cannot divide by zero",
                    "Error: Invalid character in expression: $",
                    "Error: Mismatched parentheses",
                    "Error: Invalid expression",
                    "Result: 3.0",
                    EXIT_MESSAGE]);
}

#[test]
fn exit_ignores_case_and_whitespace() {
    for command in ["EXIT", "Exit", " e x i t ", "\texit"] {
        let out = transcript(&format!("{command}\n1+1\n"));
        assert!(out.ends_with(&format!("{PROMPT}{EXIT_MESSAGE}\n")), "{command:?}: {out}");
        assert!(!out.contains("Result:"), "{command:?} did not stop the loop");
    }
}

#[test]
fn end_of_input_stops_without_exit_message() {
    let out = transcript("2^3^2");
    assert!(out.contains("Result: 64.0"));
    assert!(!out.contains(EXIT_MESSAGE));
    assert!(out.ends_with(&format!("{PROMPT}\n")));
}

#[test]
fn empty_lines_are_invalid_expressions() {
    let out = transcript("\n   \nexit\n");
    assert_eq!(out.matches("Error: Invalid expression format").count(), 2);
}

#[test]
fn special_values_use_debug_formatting() {
    let out = transcript("0^(0-1)\n(0-1)^0.5\n");
    assert!(out.contains("Result: inf"));
    assert!(out.contains("Result: NaN"));
}

#[test]
fn uses_the_configured_evaluator() {
    let evaluator = Evaluator::with_power_associativity(Associativity::Right);
    assert!(transcript_with(evaluator, "2^3^2\n").contains("Result: 512.0"));
}

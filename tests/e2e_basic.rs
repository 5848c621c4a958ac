//! End-to-end tests for basic programs: print and arithmetic.
//!
//! These tests compile the emitted C with gcc and run the result.

mod common;

use common::compile_and_run;

#[test]
fn test_hello_world() {
    let output = compile_and_run(r#"vidhi main() { likho("Hello, World!"); wapas 0; }"#).unwrap();
    assert!(output.contains("Hello, World!"));
}

#[test]
fn test_integer_addition() {
    let output =
        compile_and_run("vidhi main() { ank a = 10; ank b = 5; likho(a + b); wapas 0; }").unwrap();
    assert!(output.contains("15"));
}

#[test]
fn test_integer_arithmetic_mix() {
    let output = compile_and_run(
        "vidhi main() { ank a = 10; likho(a - 3); likho(a * 2); likho(a / 3); likho(a % 3); wapas 0; }",
    )
    .unwrap();
    assert_eq!(output, "7\n20\n3\n1\n");
}

#[test]
fn test_print_literals() {
    let output = compile_and_run(
        r#"vidhi main() { likho(42); likho("text"); likho('Z'); wapas 0; }"#,
    )
    .unwrap();
    assert_eq!(output, "42\ntext\nZ\n");
}

#[test]
fn test_print_float_variable() {
    let output =
        compile_and_run("vidhi main() { sankhya y = 2.5; likho(y); wapas 0; }").unwrap();
    assert!(output.contains("2.5"));
}

#[test]
fn test_string_escapes_round_trip() {
    let output = compile_and_run(
        r#"vidhi main() { likho("a\tb"); likho("one\ntwo"); wapas 0; }"#,
    )
    .unwrap();
    assert_eq!(output, "a\tb\none\ntwo\n");
}

#[test]
fn test_unary_minus() {
    let output = compile_and_run("vidhi main() { ank x = 10; likho(-x); wapas 0; }").unwrap();
    assert!(output.contains("-10"));
}

#[test]
fn test_variable_reassignment() {
    let output = compile_and_run(
        "vidhi main() { ank x = 1; x = x + 41; likho(x); wapas 0; }",
    )
    .unwrap();
    assert!(output.contains("42"));
}

#[test]
fn test_uninitialized_variables_are_zeroed() {
    let output = compile_and_run("vidhi main() { ank x; likho(x); wapas 0; }").unwrap();
    assert_eq!(output, "0\n");
}

#[test]
fn test_comments_are_ignored() {
    let output = compile_and_run(
        "# leading comment\nvidhi main() {\n    # inner comment\n    likho(1);\n    wapas 0;\n}\n",
    )
    .unwrap();
    assert_eq!(output, "1\n");
}

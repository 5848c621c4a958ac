//! End-to-end tests for conditional statements.

mod common;

use common::compile_and_run;

#[test]
fn test_if_true_branch() {
    let output = compile_and_run(
        r#"vidhi main() {
            ank x = 10;
            agar (x > 5) { likho("big"); } nahi_to { likho("small"); }
            wapas 0;
        }"#,
    )
    .unwrap();
    assert!(output.contains("big"));
    assert!(!output.contains("small"));
}

#[test]
fn test_if_false_branch() {
    let output = compile_and_run(
        r#"vidhi main() {
            ank x = 3;
            agar (x > 5) { likho("big"); } nahi_to { likho("small"); }
            wapas 0;
        }"#,
    )
    .unwrap();
    assert!(output.contains("small"));
    assert!(!output.contains("big"));
}

#[test]
fn test_if_without_else() {
    let output = compile_and_run(
        r#"vidhi main() {
            agar (1 < 2) { likho("yes"); }
            likho("after");
            wapas 0;
        }"#,
    )
    .unwrap();
    assert_eq!(output, "yes\nafter\n");
}

#[test]
fn test_logical_and_condition() {
    let output = compile_and_run(
        r#"vidhi main() {
            ank x = 5; sankhya y = 3.14;
            agar (x >= 5 aur y <= 4.0) { likho("both"); }
            wapas 0;
        }"#,
    )
    .unwrap();
    assert!(output.contains("both"));
}

#[test]
fn test_logical_or_condition() {
    let output = compile_and_run(
        r#"vidhi main() {
            ank x = 5;
            agar (x == 9 ya x != 3) { likho("or"); }
            wapas 0;
        }"#,
    )
    .unwrap();
    assert!(output.contains("or"));
}

#[test]
fn test_nahi_condition() {
    let output = compile_and_run(
        r#"vidhi main() {
            ank x = 5;
            agar (nahi (x < 3)) { likho("not"); }
            wapas 0;
        }"#,
    )
    .unwrap();
    assert!(output.contains("not"));
}

#[test]
fn test_nested_if() {
    let output = compile_and_run(
        r#"vidhi main() {
            ank x = 7;
            agar (x > 0) {
                agar (x > 5) { likho("inner"); } nahi_to { likho("outer"); }
            }
            wapas 0;
        }"#,
    )
    .unwrap();
    assert_eq!(output, "inner\n");
}

#[test]
fn test_char_comparison() {
    let output = compile_and_run(
        r#"vidhi main() {
            akshar a = 'x'; akshar b = 'x';
            agar (a == b) { likho("same"); }
            wapas 0;
        }"#,
    )
    .unwrap();
    assert!(output.contains("same"));
}

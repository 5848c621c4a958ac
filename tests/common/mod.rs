//! Common test utilities for hpc integration tests.
//!
//! This module provides shared helper functions used across the
//! integration test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

use hpc::codegen::Emitter;
use hpc::lexer::Lexer;
use hpc::parser::Parser;
use hpc::semantic::{SemanticAnalyzer, SemanticError};

/// Returns the path to the hpc binary built by cargo.
pub fn hpc_binary() -> String {
    env!("CARGO_BIN_EXE_hpc").to_string()
}

/// Returns an executable filename with the correct platform extension.
pub fn executable_name(name: &str) -> String {
    format!("{}{}", name, std::env::consts::EXE_SUFFIX)
}

/// Runs the pipeline on `source` and returns the emitted C text.
pub fn transpile(source: &str) -> Result<String, String> {
    let tokens = Lexer::new(source).tokenize();
    let program = Parser::new(tokens).parse().map_err(|e| e.to_string())?;

    let analysis = SemanticAnalyzer::new().analyze(&program);
    if !analysis.success {
        return Err(analysis
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n"));
    }

    Emitter::new(&analysis.types)
        .emit(&program)
        .map_err(|e| e.to_string())
}

/// Runs the pipeline expecting semantic analysis to fail; returns the
/// collected diagnostics.
pub fn semantic_errors(source: &str) -> Vec<SemanticError> {
    let tokens = Lexer::new(source).tokenize();
    let program = Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parse failed for {:?}: {}", source, e));
    let analysis = SemanticAnalyzer::new().analyze(&program);
    assert!(
        !analysis.success,
        "Expected semantic analysis to fail for {:?}",
        source
    );
    analysis.errors
}

/// Asserts that some diagnostic message contains every listed fragment.
pub fn assert_semantic_error_contains(source: &str, fragments: &[&str]) {
    let errors = semantic_errors(source);
    let found = errors
        .iter()
        .any(|e| fragments.iter().all(|f| e.message().contains(f)));
    assert!(
        found,
        "No diagnostic containing all of {:?}; got: {:?}",
        fragments,
        errors.iter().map(|e| e.message().to_string()).collect::<Vec<_>>()
    );
}

/// Compiles a C file into an executable with gcc.
pub fn compile_c(c_path: &Path, executable_path: &Path) -> Result<(), String> {
    let output = Command::new("gcc")
        .arg(c_path)
        .arg("-o")
        .arg(executable_path)
        .output()
        .map_err(|e| format!("Failed to run gcc: {}", e))?;

    if !output.status.success() {
        return Err(format!(
            "gcc failed (exit code {:?}):\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    Ok(())
}

/// Runs an executable and returns its stdout.
pub fn run_executable(executable_path: &Path) -> Result<String, String> {
    let output = Command::new(executable_path)
        .output()
        .map_err(|e| format!("Failed to run executable: {}", e))?;

    if !output.status.success() {
        return Err(format!(
            "Executable failed with exit code: {:?}",
            output.status.code()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Transpiles `source`, compiles the C with gcc, runs the result, and
/// returns its stdout.
///
/// This exercises the complete pipeline end to end:
/// lexing → parsing → analysis → emission → gcc → execution.
pub fn compile_and_run(source: &str) -> Result<String, String> {
    let c_code = transpile(source)?;

    let temp_dir = tempdir().map_err(|e| e.to_string())?;
    let c_path = temp_dir.path().join("test.c");
    let executable_path = temp_dir.path().join(executable_name("test"));

    std::fs::write(&c_path, &c_code).map_err(|e| e.to_string())?;
    compile_c(&c_path, &executable_path)?;
    run_executable(&executable_path)
}

//! Compilation driver: orchestrates the pipeline and the C toolchain.
//!
//! The driver reads the source file, runs the four-stage pipeline
//! (lex → parse → analyze → emit), writes the intermediate C file,
//! invokes the external C compiler, and optionally runs the produced
//! executable. Error reporting is the caller's responsibility; every
//! failure is returned as a [`CompileErrorWithContext`].

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tempfile::TempDir;

use hpc::codegen::{EmitError, Emitter};
use hpc::lexer::Lexer;
use hpc::parser::{ParseError, Parser};
use hpc::semantic::{SemanticAnalyzer, SemanticError};

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

mod cc;

/// Driver options collected from the command line.
pub(crate) struct Options {
    /// Output executable path; defaults to the input with its extension
    /// stripped.
    pub(crate) output: Option<String>,
    /// Keep the intermediate C file next to the input.
    pub(crate) keep_c: bool,
    /// Trace compilation progress to stderr.
    pub(crate) verbose: bool,
    /// Run the executable after a successful build.
    pub(crate) run: bool,
}

/// A compilation error from any phase of the driver.
///
/// This enum unifies errors from the pipeline stages, file I/O, and the
/// external C compiler to simplify error handling and reporting.
pub(crate) enum CompileError {
    /// Failed to read the source file.
    FileRead {
        path: String,
        source: std::io::Error,
    },
    /// The parser rejected the token stream (this includes lexically
    /// unrecognized input, which surfaces as `Unknown` tokens).
    Parse(ParseError),
    /// Semantic analysis found one or more errors; C is not emitted.
    Semantic(Vec<SemanticError>),
    /// The emitter hit an invariant violation (a compiler bug).
    Emit(EmitError),
    /// Failed to create the temporary directory for the C file.
    TempDirCreation(std::io::Error),
    /// Failed to write the intermediate C file.
    CFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to launch the external C compiler at all.
    CCompilerLaunch(std::io::Error),
    /// The external C compiler exited non-zero; its stderr is attached.
    CCompilation { exit_code: String, stderr: String },
    /// Failed to run the produced executable.
    ExecutableRun(std::io::Error),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::FileRead { path, source } => {
                write!(f, "Failed to read file '{}': {}", path, source)
            }
            CompileError::Parse(e) => write!(f, "{}", e),
            CompileError::Semantic(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "Semantic Error: {}", error)?;
                }
                Ok(())
            }
            CompileError::Emit(e) => write!(f, "Code generation failed: {}", e),
            CompileError::TempDirCreation(source) => {
                write!(f, "Failed to create temporary directory: {}", source)
            }
            CompileError::CFileWrite { path, source } => {
                write!(f, "Failed to write C file '{}': {}", path.display(), source)
            }
            CompileError::CCompilerLaunch(source) => {
                write!(f, "Failed to run gcc: {}", source)
            }
            CompileError::CCompilation { exit_code, stderr } => {
                write!(f, "gcc failed with exit code {}", exit_code)?;
                if !stderr.is_empty() {
                    write!(f, "\n[stderr]\n{}", stderr)?;
                }
                Ok(())
            }
            CompileError::ExecutableRun(source) => {
                write!(f, "Failed to run executable: {}", source)
            }
        }
    }
}

/// A compilation error bundled with the source text needed to render
/// labelled diagnostics.
pub(crate) struct CompileErrorWithContext {
    source: String,
    error: CompileError,
}

impl CompileErrorWithContext {
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn error(&self) -> &CompileError {
        &self.error
    }
}

/// Returns the exit code from an exit status, handling signals on Unix.
///
/// On Unix, if the process was terminated by a signal, returns 128 +
/// signal number following the shell convention. Otherwise returns the
/// exit code or 1 as fallback.
fn exit_code_with_signal(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        if let Some(signal) = status.signal() {
            eprintln!("Program terminated by signal {}", signal);
            return 128 + signal;
        }
    }

    eprintln!("Program terminated abnormally");
    1
}

/// Runs the four-stage pipeline on `source` and returns the C text.
fn transpile(source: &str, options: &Options) -> Result<String, CompileError> {
    log(options, "Starting lexical analysis...");
    let tokens = Lexer::new(source).tokenize();

    log(options, "Parsing tokens to AST...");
    let program = Parser::new(tokens).parse().map_err(CompileError::Parse)?;

    log(options, "Performing semantic analysis...");
    let analysis = SemanticAnalyzer::new().analyze(&program);
    if !analysis.success {
        return Err(CompileError::Semantic(analysis.errors));
    }

    log(options, "Generating C code...");
    Emitter::new(&analysis.types)
        .emit(&program)
        .map_err(CompileError::Emit)
}

/// Compiles a Hinglish source file to a native executable.
///
/// Pipeline:
///
/// 1. Read the source file (warning if it lacks the `.hp` extension)
/// 2. Transpile to C (lex, parse, analyze, emit)
/// 3. Write the C file: next to the input with `--keep-c`, into a
///    temporary directory otherwise, so it is released on every exit path
/// 4. Invoke `gcc <c_file> -o <executable>`
/// 5. With `--run`, execute the result and mirror its exit code
///
/// Returns the process exit code to use: 0 on a successful build, the
/// child's exit code under `--run`.
pub(crate) fn compile(file: &str, options: &Options) -> Result<i32, Box<CompileErrorWithContext>> {
    let source = std::fs::read_to_string(file).map_err(|e| {
        Box::new(CompileErrorWithContext {
            source: String::new(),
            error: CompileError::FileRead {
                path: file.to_string(),
                source: e,
            },
        })
    })?;

    if !file.ends_with(".hp") {
        eprintln!("Warning: input file '{}' doesn't have .hp extension", file);
    }
    log(
        options,
        &format!("Read source file: {} ({} bytes)", file, source.len()),
    );

    build(file, &source, options)
        .map_err(|error| Box::new(CompileErrorWithContext { source, error }))
}

fn build(file: &str, source: &str, options: &Options) -> Result<i32, CompileError> {
    let c_code = transpile(source, options)?;

    let output_path = match &options.output {
        Some(path) => PathBuf::from(path),
        None => Path::new(file).with_extension(""),
    };

    // The temp dir (when used) lives until the end of this function, so
    // the C file is released on success and on every failure path.
    let mut _temp_dir = None;
    let c_path = if options.keep_c {
        Path::new(file).with_extension("c")
    } else {
        let dir = TempDir::new().map_err(CompileError::TempDirCreation)?;
        let path = dir.path().join("program.c");
        _temp_dir = Some(dir);
        path
    };

    std::fs::write(&c_path, &c_code).map_err(|e| CompileError::CFileWrite {
        path: c_path.clone(),
        source: e,
    })?;
    log(options, &format!("Wrote C code to: {}", c_path.display()));

    log(
        options,
        &format!(
            "Compiling {} to {} using gcc...",
            c_path.display(),
            output_path.display()
        ),
    );
    cc::compile_c(&c_path, &output_path)?;
    log(
        options,
        &format!("Compilation successful: {}", output_path.display()),
    );

    if !options.run {
        return Ok(0);
    }

    // A bare relative name would be resolved against PATH, not the
    // working directory.
    let executable = if output_path.is_absolute() {
        output_path.clone()
    } else {
        Path::new(".").join(&output_path)
    };
    log(options, &format!("Running {}...", executable.display()));

    let status = Command::new(&executable)
        .status()
        .map_err(CompileError::ExecutableRun)?;
    Ok(exit_code_with_signal(&status))
}

fn log(options: &Options, message: &str) {
    if options.verbose {
        eprintln!("{}", message);
    }
}

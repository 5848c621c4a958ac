//! External C compiler invocation.
//!
//! The emitted C is handed to `gcc` as an opaque program: `gcc <c_file>
//! -o <executable>`. A non-zero exit is surfaced verbatim with the
//! compiler's stderr attached.

use std::path::Path;
use std::process::{Command, ExitStatus};

#[cfg(unix)]
use std::os::unix::process::ExitStatusExt;

use super::CompileError;

/// Builds the `gcc` command line for a C file and output path.
fn create_compiler_command(c_file: &Path, output: &Path) -> Command {
    let mut command = Command::new("gcc");
    command.arg(c_file).arg("-o").arg(output);
    command
}

/// Formats an exit status for display, including signal information on Unix.
fn format_exit_status(status: &ExitStatus) -> String {
    if let Some(code) = status.code() {
        return code.to_string();
    }

    #[cfg(unix)]
    {
        if let Some(signal) = status.signal() {
            return format!("signal {}", signal);
        }
    }

    "unknown".to_string()
}

/// Compiles a C file into an executable with `gcc`.
///
/// # Errors
///
/// * [`CompileError::CCompilerLaunch`] - `gcc` could not be started
/// * [`CompileError::CCompilation`] - `gcc` exited non-zero
pub(super) fn compile_c(c_file: &Path, output_path: &Path) -> Result<(), CompileError> {
    let output = create_compiler_command(c_file, output_path)
        .output()
        .map_err(CompileError::CCompilerLaunch)?;

    if !output.status.success() {
        return Err(CompileError::CCompilation {
            exit_code: format_exit_status(&output.status),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

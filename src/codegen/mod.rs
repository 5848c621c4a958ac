//! C code generation for the Hinglish programming language.
//!
//! This module provides the [`Emitter`] which walks an analyzed AST and
//! produces a single C translation-unit string. The external C toolchain
//! (driven by the CLI) turns that into a native executable.
//!
//! # Overview
//!
//! Emission is a structural passthrough: control flow keeps its syntactic
//! shape, operators map to their C spellings (`aur` → `&&`, `ya` → `||`,
//! `nahi` → `!`, everything else unchanged), and types map as
//!
//! | Source type | C type |
//! |---|---|
//! | `ank` | `int` |
//! | `sankhya` | `float` |
//! | `vakya` | `char*` |
//! | `akshar` | `char` |
//! | no return type | `void` |
//! | `main` | `int` |
//!
//! Every translation unit starts with the `stdio.h`/`stdlib.h`/`string.h`
//! preamble. `likho` becomes a `printf` call whose format is selected
//! from the argument's static type; for variables that type comes from
//! the analyzer's [`TypeAnnotations`], and a missing annotation is an
//! [`EmitError`] (an analyzer bug, not a user error).
//!
//! # Module Structure
//!
//! - [`error`](self) - Emission error type
//! - `stmt` - Statement and declaration emission
//! - `expr` - Expression emission and C literal escaping
//!
//! # See Also
//!
//! * [`crate::semantic`] - Produces the annotations consumed here

mod error;
mod expr;
mod stmt;


pub use error::EmitError;

use crate::ast::{Program, Type};
use crate::semantic::TypeAnnotations;

/// Number of spaces per indentation level in the emitted C.
const INDENT: &str = "    ";

/// Emits C source text from an analyzed program.
///
/// Create one per compilation with the analyzer's annotations, then call
/// [`Emitter::emit`].
pub struct Emitter<'a> {
    /// Variable types resolved by the analyzer.
    types: &'a TypeAnnotations,
    /// The C source accumulated so far.
    out: String,
    /// Current indentation level.
    indent: usize,
}

impl<'a> Emitter<'a> {
    /// Creates a new emitter backed by the analyzer's annotations.
    pub fn new(types: &'a TypeAnnotations) -> Self {
        Emitter {
            types,
            out: String::new(),
            indent: 0,
        }
    }

    /// Emits the C translation unit for `program`, consuming the emitter.
    ///
    /// # Errors
    ///
    /// Returns an [`EmitError`] when an emitter invariant is violated,
    /// e.g. a variable print argument the analyzer never annotated.
    /// A successfully analyzed program emits without error.
    pub fn emit(mut self, program: &Program) -> Result<String, EmitError> {
        self.push_line("#include <stdio.h>");
        self.push_line("#include <stdlib.h>");
        self.push_line("#include <string.h>");
        self.blank_line();

        for stmt in &program.statements {
            self.emit_stmt(stmt)?;
        }

        Ok(self.out)
    }

    /// Appends a line at the current indentation.
    fn push_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    /// Appends an empty line.
    fn blank_line(&mut self) {
        self.out.push('\n');
    }

    /// Maps a declarable source type (or `void`) to its C spelling.
    fn c_type(ty: Type) -> Result<&'static str, EmitError> {
        match ty {
            Type::Ank => Ok("int"),
            Type::Sankhya => Ok("float"),
            Type::Vakya => Ok("char*"),
            Type::Akshar => Ok("char"),
            Type::Void => Ok("void"),
            Type::Boolean | Type::Unknown => Err(EmitError::without_span(format!(
                "Cannot emit a C type for '{}'",
                ty
            ))),
        }
    }
}

//! The Hinglish programming language compiler library.
//!
//! This library provides the core components of the `hpc` transpiler:
//! lexical analysis, parsing, semantic analysis, and C code generation.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`semantic`] - Scope and type checking, AST type annotations
//! - [`codegen`] - C source text generation
//!
//! # Example
//!
//! ```
//! use hpc::codegen::Emitter;
//! use hpc::lexer::Lexer;
//! use hpc::parser::Parser;
//! use hpc::semantic::SemanticAnalyzer;
//!
//! // Source code to translate
//! let source = r#"
//! vidhi main() {
//!     likho("Hello, World!");
//!     wapas 0;
//! }
//! "#;
//!
//! // Lexical analysis
//! let tokens = Lexer::new(source).tokenize();
//!
//! // Parsing
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().expect("Parse error");
//!
//! // Semantic analysis
//! let analysis = SemanticAnalyzer::new().analyze(&program);
//! assert!(analysis.success);
//!
//! // C code generation
//! let c_code = Emitter::new(&analysis.types)
//!     .emit(&program)
//!     .expect("Emit error");
//! assert!(c_code.contains("#include <stdio.h>"));
//! ```

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod semantic;
pub mod token;

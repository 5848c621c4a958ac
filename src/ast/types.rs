//! The type lattice of the Hinglish language.

use std::fmt;

/// A type in the Hinglish language.
///
/// The first four variants are the declarable source types; they are the
/// only ones the parser ever constructs. The remaining variants exist for
/// semantic analysis: `Boolean` is the result of comparisons and logical
/// operators and can never be declared, `Void` is the type of a function
/// with no declared return type, and `Unknown` is the error-recovery
/// placeholder the analyzer uses after reporting a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Integer type (`ank` in source code).
    Ank,
    /// Floating-point type (`sankhya` in source code).
    Sankhya,
    /// String type (`vakya` in source code).
    Vakya,
    /// Character type (`akshar` in source code).
    Akshar,
    /// Result of comparisons and logical operators; never declarable.
    Boolean,
    /// A function declared without a return type.
    Void,
    /// Error recovery placeholder.
    Unknown,
}

impl Type {
    /// Returns true when this type is numeric (`ank` or `sankhya`).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Ank | Type::Sankhya)
    }
}

/// Displays the type as it is named in diagnostics.
///
/// Declarable types render as their source keyword; the analysis-only
/// types render as `boolean`, `void`, and `unknown`.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Ank => write!(f, "ank"),
            Type::Sankhya => write!(f, "sankhya"),
            Type::Vakya => write!(f, "vakya"),
            Type::Akshar => write!(f, "akshar"),
            Type::Boolean => write!(f, "boolean"),
            Type::Void => write!(f, "void"),
            Type::Unknown => write!(f, "unknown"),
        }
    }
}

//! Error type shared by every part of the LaTeX expression engine.
//!
//! All failures are raised immediately to the caller; there is no partial-result mode.
//! Each variant carries the offending value and, where it makes sense, the set of
//! values it was checked against.
use std::fmt;

/// Error types of the LaTeX expression engine
#[derive(Debug)]
pub enum LatexExprError {
    /// operation key is not one of the supported operations
    UnsupportedOperation { kind: String, supported: String },
    /// number of operands does not match the arity of the operation
    WrongArity {
        kind: String,
        expected: String,
        got: usize,
    },
    /// argument of unexpected type
    WrongArgumentType { expected: String, got: String },
    /// numeric result requested from a tree containing a variable without value
    SymbolicResult { name: String },
    /// selector of the LaTeX macro export is not known
    InvalidDisplaySelector { what: String, valid: String },
    /// LaTeX command of the macro export is not known
    InvalidMacroCommand { command: String, valid: String },
    /// number format pattern could not be interpreted
    InvalidFormat { pattern: String, reason: String },
    /// tree could not be translated to/from the CAS representation
    CasTranslation(String),
    /// error reported by the CAS engine itself
    CasEngine(String),
    /// CAS result references a symbol that was not present in the original tree
    UnknownSymbol(String),
    InvalidLogLevel(String),
    Io(std::io::Error),
    Persistence(String),
}

pub type LatexResult<T> = Result<T, LatexExprError>;

impl fmt::Display for LatexExprError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LatexExprError::UnsupportedOperation { kind, supported } => write!(
                f,
                "operation '{}' not in supported operations [{}]",
                kind, supported
            ),
            LatexExprError::WrongArity {
                kind,
                expected,
                got,
            } => write!(
                f,
                "operation '{}' expects {} argument(s), got {}",
                kind, expected, got
            ),
            LatexExprError::WrongArgumentType { expected, got } => {
                write!(f, "wrong argument type: expected {}, got {}", expected, got)
            }
            LatexExprError::SymbolicResult { name } => write!(
                f,
                "cannot compute numeric result: '{}' has no value (symbolic)",
                name
            ),
            LatexExprError::InvalidDisplaySelector { what, valid } => {
                write!(f, "'{}' not in [{}]", what, valid)
            }
            LatexExprError::InvalidMacroCommand { command, valid } => write!(
                f,
                "wrong LaTeX command '{}' (should be one of [{}])",
                command, valid
            ),
            LatexExprError::InvalidFormat { pattern, reason } => {
                write!(f, "invalid number format '{}': {}", pattern, reason)
            }
            LatexExprError::CasTranslation(msg) => write!(f, "CAS translation failed: {}", msg),
            LatexExprError::CasEngine(msg) => write!(f, "CAS engine error: {}", msg),
            LatexExprError::UnknownSymbol(name) => {
                write!(f, "symbol '{}' not found among the original variables", name)
            }
            LatexExprError::InvalidLogLevel(level) => write!(
                f,
                "loglevel must be trace, debug, info, warn, error or off, got '{}'",
                level
            ),
            LatexExprError::Io(err) => write!(f, "I/O error: {}", err),
            LatexExprError::Persistence(msg) => write!(f, "variable storage error: {}", msg),
        }
    }
}

impl std::error::Error for LatexExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LatexExprError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LatexExprError {
    fn from(err: std::io::Error) -> Self {
        LatexExprError::Io(err)
    }
}

//! Error classification shared by every layer.
//!
//! Every protocol adapter matches `ErrorKind` exhaustively instead of probing
//! concrete error shapes.

/// The four error kinds every protocol adapter knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Client-correctable field violations.
    Validation,
    /// The requested entity does not exist.
    NotFound,
    /// A request parameter could not be parsed.
    InvalidParameter,
    /// Anything else.
    Internal,
}

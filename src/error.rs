use std::fmt;
use std::io;

/// Errors reported while loading or running a program.
///
/// Every variant carries `ip`, the byte index in the source text at which the
/// problem was found. The rendered message is prefixed with `char <ip>: `.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `[` or `]` has no partner.
    ///
    /// Raised by [`Program::build`](crate::Program::build) and, for a
    /// program that somehow bypassed validation, by the interpreter when a
    /// jump cannot be resolved.
    #[error("char {ip}: unmatched {kind} instruction")]
    UnmatchedBracket { ip: usize, kind: BracketKind },

    /// Reading from the input stream failed for a reason other than EOF.
    #[error("char {ip}: error reading standard input: {source}")]
    Input {
        ip: usize,
        #[source]
        source: io::Error,
    },

    /// Writing a `.` to the output stream failed.
    #[error("char {ip}: error writing standard output: {source}")]
    Output {
        ip: usize,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Byte index in the source text where the error occurred.
    pub fn position(&self) -> usize {
        match self {
            Error::UnmatchedBracket { ip, .. } | Error::Input { ip, .. } | Error::Output { ip, .. } => *ip,
        }
    }
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}

use std::{convert::From, fmt};

/// Error raised while building the opcode table. Every kind is fatal: a partial table is never emitted.
pub struct Error {
    pub kind: ErrorKind,
    /// the raw source row that triggered the error, when there is one
    pub ctx: Option<String>,
    pub msg: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// description matches neither a catalog entry nor a correction
    UnresolvedAddressingMode,
    /// "immediate" row for a mnemonic without an immediate disambiguation
    UnknownImmediateMnemonic,
    /// two overrides target the same opcode
    DuplicateOverride,
    /// the 256-slot remap has a gap or a collision
    IncompleteOpcodeCoverage,
    /// inconsistent addressing-mode catalog or correction map
    Catalog,
    /// malformed reference row
    Syntax,
    /// underlying io error
    IO,
    /// catch-all for other errors
    General,
}

impl Error {
    pub fn new(kind: ErrorKind, ctx: Option<&str>, message: &str) -> Error {
        Error {
            kind,
            ctx: ctx.map(String::from),
            msg: String::from(message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::new(ErrorKind::IO, None, e.to_string().as_str()) }
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self { Error::new(ErrorKind::General, None, e.to_string().as_str()) }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {:?}: {}", red!("optab::Error"), self.kind, self.msg)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut res = write!(f, "{}", self.msg);
        if res.is_ok() {
            if let Some(ctx) = self.ctx.as_ref() {
                res = write!(f, "\nRow: {}", ctx.replace('\t', " | "));
            }
        }
        res
    }
}
impl std::error::Error for Error {}

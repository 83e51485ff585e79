//! Error types with rich diagnostics using miette.
//!
//! Layout errors carry the offending label text and a span into it, so the
//! report points at the characters that failed to parse.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors that fail one tower's layout computation.
///
/// A layout error never aborts sibling towers; the driver reports it and
/// moves on.
#[derive(Error, Diagnostic, Debug)]
pub enum LayoutError {
    /// The base part of a leg-type label is neither `"N"` nor a number.
    ///
    /// Earlier revisions silently substituted level 0 here, which drew the
    /// leg at the wrong height with no warning.
    #[error("tower {tower:?}: malformed leg-type base {base:?}")]
    #[diagnostic(
        code(skeli::layout::malformed_base),
        help("a base must be \"N\" or a signed level like \"-4\" or \"1,5\"")
    )]
    MalformedBase {
        base: String,
        tower: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("cannot be read as a level")]
        span: SourceSpan,
    },
}

/// Errors from the tabular input boundary.
#[derive(Error, Diagnostic, Debug)]
pub enum TableError {
    #[error("failed to read source table")]
    #[diagnostic(code(skeli::table::read))]
    Read(#[from] csv::Error),

    #[error("no rows found for tower type {tower:?}")]
    #[diagnostic(
        code(skeli::table::unknown_tower),
        help("tower names must match the \"Tower Type\" column exactly")
    )]
    UnknownTower { tower: String },

    #[error("i/o error reading source table")]
    #[diagnostic(code(skeli::table::io))]
    Io(#[from] std::io::Error),
}

//! The miette-based diagnostic layer.
//!
//! The combinator core reports failures as plain [`ParseError`]s so it stays
//! independent of any source text. This module pairs such a failure with the
//! original input and turns it into a rich diagnostic: a labeled span at the
//! failing byte, a stable error code, and a help line where one is useful.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::combinators::{ParseError, ParseErrorKind};
use crate::render::RenderError;

/// Everything the tool can fail with, ready for miette rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum EmetError {
    #[error("the abbreviation ended while looking for {expected}")]
    #[diagnostic(
        code(emet::parse::end_of_input),
        help("the notation is label(.class)?(#id)?(*count)? chained with `>`")
    )]
    EndOfInput {
        expected: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("input ends here")]
        span: SourceSpan,
    },

    #[error("expected {expected}")]
    #[diagnostic(code(emet::parse::unsatisfied))]
    Unsatisfied {
        expected: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected {expected} here")]
        span: SourceSpan,
    },

    #[error("repeat count is out of range")]
    #[diagnostic(
        code(emet::parse::numeric_overflow),
        help("repeat counts must fit in a 32-bit unsigned integer")
    )]
    NumericOverflow {
        #[source_code]
        src: NamedSource<String>,
        #[label("this count is too large")]
        span: SourceSpan,
    },

    #[error(transparent)]
    #[diagnostic(code(emet::render::capacity_exceeded))]
    Render(#[from] RenderError),

    #[error("failed to serialize the tree to JSON")]
    #[diagnostic(code(emet::cli::json))]
    Json(#[from] serde_json::Error),
}

impl EmetError {
    /// Attach the original input to a core parse failure.
    pub fn from_parse(error: ParseError, name: &str, source: &str) -> Self {
        let src = NamedSource::new(name, source.to_string());
        // Label one byte where one exists; end-of-input gets a zero-width
        // span at the boundary.
        let width = usize::from(error.pos < source.len());
        let span = SourceSpan::from(error.pos..error.pos + width);
        match error.kind {
            ParseErrorKind::EndOfInput => Self::EndOfInput {
                expected: error.expected,
                src,
                span,
            },
            ParseErrorKind::Unsatisfied => Self::Unsatisfied {
                expected: error.expected,
                src,
                span,
            },
            ParseErrorKind::NumericOverflow => Self::NumericOverflow { src, span },
        }
    }
}

/// Prints an error with full miette diagnostics: source excerpt, labeled
/// span, and help. For CLI use.
pub fn print_error(error: EmetError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}

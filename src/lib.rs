pub use crate::ast::Node;
pub use crate::combinators::{ParseError, ParseErrorKind, Parser};
pub use crate::diagnostics::EmetError;

pub mod ast;
pub mod cli;
pub mod combinators;
pub mod diagnostics;
pub mod grammar;
pub mod render;

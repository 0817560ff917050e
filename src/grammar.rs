//! The abbreviation grammar, assembled entirely from combinator-core
//! operators.
//!
//! ```text
//! label  = letter+
//! number = digit+
//! node   = label ("." label)? ("#" label)? ("*" number)?
//! expr   = node (">" node)*
//! ```
//!
//! The `>` chain is a flat left-to-right sibling list attached as the root's
//! children, not arbitrary-depth nesting. Matching is over the raw bytes of
//! the input; every construct in the notation is ASCII by definition.

use crate::ast::Node;
use crate::combinators::{
    right_only, satisfy, Pair, ParseError, ParseErrorKind, Parser, Satisfy,
};

fn letter() -> Satisfy<fn(&u8) -> bool> {
    satisfy(u8::is_ascii_alphabetic, "letter")
}

fn digit() -> Satisfy<fn(&u8) -> bool> {
    satisfy(u8::is_ascii_digit, "digit")
}

fn marker(symbol: u8, expected: &'static str) -> impl Parser<u8, Output = u8> {
    satisfy(move |b: &u8| *b == symbol, expected)
}

/// `label := letter+`, collected into a `String`.
fn label() -> impl Parser<u8, Output = String> {
    letter()
        .many_one()
        .map(|letters: Vec<u8>| letters.into_iter().map(char::from).collect())
}

/// `number := digit+`, reduced left-to-right into a `u32`. A count that does
/// not fit 32 bits fails with `NumericOverflow` at the start of the number;
/// it never wraps or saturates.
fn number() -> impl Parser<u8, Output = u32> {
    digit().many_one().try_map(
        |digits: Vec<u8>| {
            digits.into_iter().try_fold(0u32, |total, d| {
                total
                    .checked_mul(10)
                    .and_then(|total| total.checked_add(u32::from(d - b'0')))
                    .ok_or(ParseErrorKind::NumericOverflow)
            })
        },
        "repeat count",
    )
}

/// `class_name := "." label`
fn class_name() -> impl Parser<u8, Output = String> {
    right_only(marker(b'.', "`.`"), label())
}

/// `id := "#" label`
fn id() -> impl Parser<u8, Output = String> {
    right_only(marker(b'#', "`#`"), label())
}

/// `count := "*" number`
fn count() -> impl Parser<u8, Output = u32> {
    right_only(marker(b'*', "`*`"), number())
}

/// `node := label ("." label)? ("#" label)? ("*" number)?`, reduced to a
/// [`Node`] with defaults `class_name = ""` and `repeat_count = 1`.
fn node() -> impl Parser<u8, Output = Node> {
    label()
        .and(class_name().optional().and(id().optional().and(count().optional())))
        .map(|parts: Pair<String, Pair<Option<String>, Pair<Option<String>, Option<u32>>>>| {
            let Pair {
                first: label,
                second:
                    Pair {
                        first: class_name,
                        second: Pair {
                            first: id,
                            second: count,
                        },
                    },
            } = parts;
            Node {
                label,
                class_name: class_name.unwrap_or_default(),
                id,
                repeat_count: count.unwrap_or(1),
                children: Vec::new(),
            }
        })
}

/// `expr := node (">" node)*`: a root node plus a flat sibling chain, which
/// becomes the root's ordered children.
fn expression() -> impl Parser<u8, Output = Node> {
    node()
        .and(right_only(marker(b'>', "`>`"), node()).many())
        .map(|parts: Pair<Node, Vec<Node>>| {
            let Pair {
                first: mut root,
                second: children,
            } = parts;
            root.children = children;
            root
        })
}

/// Parse a complete abbreviation. The whole input must be consumed: trailing
/// bytes after a valid expression are an error at the first leftover byte.
pub fn parse_expression(input: &str) -> Result<Node, ParseError> {
    let bytes = input.as_bytes();
    let (tree, end) = expression().parse(bytes, 0)?;
    if end < bytes.len() {
        return Err(ParseError::unsatisfied(end, "end of input"));
    }
    Ok(tree)
}

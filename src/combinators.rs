//! The parser-combinator engine.
//!
//! A parser is a pure function of an input slice and a starting position: it
//! either succeeds with an output value and the position to resume from, or
//! fails with a [`ParseError`] pinned to the position that caused it. Grammars
//! are assembled by composing the combinators in this module; the output type
//! of every composition is fixed at construction time, so a grammar that
//! type-checks is well-typed before any input is parsed.
//!
//! Failure never consumes input on its own: `Satisfy` leaves the position
//! unchanged when its predicate rejects, `OrElse` retries its alternative from
//! the original position, and `Optional`/`Many` absorb inner failures without
//! advancing past the last success. Sequencing (`And`/`AndThen`) is the one
//! place partial consumption can escape: once the first operand succeeds, a
//! failure of the second propagates as-is, and recovering from it is the
//! caller's job via `OrElse`.

use thiserror::Error;

/// Success carries the output value and the position to resume parsing from.
pub type ParseResult<T> = Result<(T, usize), ParseError>;

/// What went wrong, independent of where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A matcher was attempted past the end of the input.
    #[error("unexpected end of input")]
    EndOfInput,
    /// A predicate rejected the symbol at a valid position.
    #[error("unexpected symbol")]
    Unsatisfied,
    /// A numeric literal does not fit the target integer type.
    #[error("numeric literal out of range")]
    NumericOverflow,
}

/// A parse failure: the kind, the byte position it occurred at, and a tag
/// naming the construct that was expected there.
///
/// Sequencing propagates the failure of the failing component unchanged, so
/// `pos` always points at the component that failed, never at the start of
/// the enclosing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} at byte {pos}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: usize,
    pub expected: &'static str,
}

impl ParseError {
    pub fn end_of_input(pos: usize, expected: &'static str) -> Self {
        Self {
            kind: ParseErrorKind::EndOfInput,
            pos,
            expected,
        }
    }

    pub fn unsatisfied(pos: usize, expected: &'static str) -> Self {
        Self {
            kind: ParseErrorKind::Unsatisfied,
            pos,
            expected,
        }
    }
}

/// The composable unit: anything that can attempt a match at a position in an
/// input slice. Combinator methods consume `self` and return a new parser
/// whose output type is derived from the operands' output types.
pub trait Parser<S> {
    type Output;

    /// Attempt a match at `pos`. Success returns the output and the position
    /// to resume from; failure reports the failing position and never
    /// advances it.
    fn parse(&self, input: &[S], pos: usize) -> ParseResult<Self::Output>;

    /// Sequence `self` then `next`, keeping both outputs as a [`Pair`].
    fn and<Q>(self, next: Q) -> And<Self, Q>
    where
        Self: Sized,
        Q: Parser<S>,
    {
        And {
            first: self,
            second: next,
        }
    }

    /// Sequence `self` then `next`, keeping only `next`'s output. Used for
    /// marker-then-payload forms; see also [`right_only`].
    fn and_then<Q>(self, next: Q) -> AndThen<Self, Q>
    where
        Self: Sized,
        Q: Parser<S>,
    {
        AndThen {
            prefix: self,
            payload: next,
        }
    }

    /// Ordered choice: try `self`, and on failure retry `other` from the same
    /// starting position. Left-biased.
    fn or_else<Q>(self, other: Q) -> OrElse<Self, Q>
    where
        Self: Sized,
        Q: Parser<S, Output = Self::Output>,
    {
        OrElse {
            preferred: self,
            fallback: other,
        }
    }

    /// Zero or more repetitions. Never fails; zero matches yields an empty
    /// `Vec` at the original position.
    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many { inner: self }
    }

    /// One or more repetitions. Fails iff the first application fails.
    fn many_one(self) -> ManyOne<Self>
    where
        Self: Sized,
    {
        ManyOne { inner: self }
    }

    /// Zero or one. Never fails; inner failure yields `None` at the original
    /// position.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional { inner: self }
    }

    /// Transform the output with a total function. Failures pass through
    /// unchanged.
    fn map<F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
    {
        Map {
            inner: self,
            transform,
        }
    }

    /// Transform the output with a fallible function. A transform error is
    /// reported at the start position of the mapped region, tagged with
    /// `expected`.
    fn try_map<F>(self, transform: F, expected: &'static str) -> TryMap<Self, F>
    where
        Self: Sized,
    {
        TryMap {
            inner: self,
            transform,
            expected,
        }
    }
}

/// Output of [`And`]: both operands' outputs as a named record. Field names
/// beat positional indexing when sequences nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

/// Matches exactly one symbol satisfying `predicate`. See [`satisfy`].
pub struct Satisfy<F> {
    predicate: F,
    expected: &'static str,
}

/// The atomic matcher: consumes exactly one symbol iff `predicate` accepts
/// it. `expected` names the construct for diagnostics ("letter", "digit",
/// "`>`").
pub fn satisfy<F>(predicate: F, expected: &'static str) -> Satisfy<F> {
    Satisfy {
        predicate,
        expected,
    }
}

impl<S, F> Parser<S> for Satisfy<F>
where
    S: Clone,
    F: Fn(&S) -> bool,
{
    type Output = S;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<S> {
        let Some(symbol) = input.get(pos) else {
            return Err(ParseError::end_of_input(pos, self.expected));
        };
        if (self.predicate)(symbol) {
            Ok((symbol.clone(), pos + 1))
        } else {
            Err(ParseError::unsatisfied(pos, self.expected))
        }
    }
}

/// Ordered sequence keeping both outputs.
pub struct And<P, Q> {
    first: P,
    second: Q,
}

impl<S, P, Q> Parser<S> for And<P, Q>
where
    P: Parser<S>,
    Q: Parser<S>,
{
    type Output = Pair<P::Output, Q::Output>;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<Self::Output> {
        let (first, mid) = self.first.parse(input, pos)?;
        let (second, end) = self.second.parse(input, mid)?;
        Ok((Pair { first, second }, end))
    }
}

/// Ordered sequence keeping only the second output.
pub struct AndThen<P, Q> {
    prefix: P,
    payload: Q,
}

impl<S, P, Q> Parser<S> for AndThen<P, Q>
where
    P: Parser<S>,
    Q: Parser<S>,
{
    type Output = Q::Output;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<Self::Output> {
        let (_, mid) = self.prefix.parse(input, pos)?;
        self.payload.parse(input, mid)
    }
}

/// Marker-then-payload: require `marker`, discard its output, then parse
/// `payload`. The free-function spelling of [`Parser::and_then`] for forms
/// like "a leading `.` then a class name".
pub fn right_only<S, P, Q>(marker: P, payload: Q) -> AndThen<P, Q>
where
    P: Parser<S>,
    Q: Parser<S>,
{
    marker.and_then(payload)
}

/// Ordered choice with backtracking.
pub struct OrElse<P, Q> {
    preferred: P,
    fallback: Q,
}

impl<S, P, Q> Parser<S> for OrElse<P, Q>
where
    P: Parser<S>,
    Q: Parser<S, Output = P::Output>,
{
    type Output = P::Output;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<Self::Output> {
        match self.preferred.parse(input, pos) {
            Ok(hit) => Ok(hit),
            // Retry from the original position: nothing the preferred branch
            // consumed is visible to the fallback.
            Err(_) => self.fallback.parse(input, pos),
        }
    }
}

/// Zero or more repetitions.
pub struct Many<P> {
    inner: P,
}

impl<S, P> Parser<S> for Many<P>
where
    P: Parser<S>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<Self::Output> {
        let mut items = Vec::new();
        let mut cursor = pos;
        while let Ok((item, next)) = self.inner.parse(input, cursor) {
            items.push(item);
            // Termination invariant: a zero-width success would repeat
            // forever, so the loop stops instead of spinning.
            if next == cursor {
                break;
            }
            cursor = next;
        }
        Ok((items, cursor))
    }
}

/// One or more repetitions.
pub struct ManyOne<P> {
    inner: P,
}

impl<S, P> Parser<S> for ManyOne<P>
where
    P: Parser<S>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<Self::Output> {
        let (head, mut cursor) = self.inner.parse(input, pos)?;
        let mut items = vec![head];
        while let Ok((item, next)) = self.inner.parse(input, cursor) {
            items.push(item);
            if next == cursor {
                break;
            }
            cursor = next;
        }
        Ok((items, cursor))
    }
}

/// Zero or one; never fails.
pub struct Optional<P> {
    inner: P,
}

impl<S, P> Parser<S> for Optional<P>
where
    P: Parser<S>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<Self::Output> {
        match self.inner.parse(input, pos) {
            Ok((value, next)) => Ok((Some(value), next)),
            // Absent, and the position is the original one: inner failure
            // must not advance.
            Err(_) => Ok((None, pos)),
        }
    }
}

/// Output transformation with a total function.
pub struct Map<P, F> {
    inner: P,
    transform: F,
}

impl<S, B, P, F> Parser<S> for Map<P, F>
where
    P: Parser<S>,
    F: Fn(P::Output) -> B,
{
    type Output = B;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<B> {
        let (value, next) = self.inner.parse(input, pos)?;
        Ok(((self.transform)(value), next))
    }
}

/// Output transformation with a fallible function; used where a reduction can
/// reject a syntactically valid match (e.g. integer overflow).
pub struct TryMap<P, F> {
    inner: P,
    transform: F,
    expected: &'static str,
}

impl<S, B, P, F> Parser<S> for TryMap<P, F>
where
    P: Parser<S>,
    F: Fn(P::Output) -> Result<B, ParseErrorKind>,
{
    type Output = B;

    fn parse(&self, input: &[S], pos: usize) -> ParseResult<B> {
        let (value, next) = self.inner.parse(input, pos)?;
        match (self.transform)(value) {
            Ok(mapped) => Ok((mapped, next)),
            Err(kind) => Err(ParseError {
                kind,
                pos,
                expected: self.expected,
            }),
        }
    }
}

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::error::{invalid_state, require, ContractError};
use crate::{Maybe, Outcome};
use util::{is_null, Nullable};

type Producer<T> = Arc<dyn Fn() -> T + Send + Sync>;

const NEITHER_SIDE: &str = "neither left nor right has a value";

/// Exactly one of a left or a right value, each produced on demand.
///
/// Only the producer of the live side is kept. It runs every time the side
/// is read, and nothing runs until then. Producers are shared behind an
/// [`Arc`], so an `Either` can be read from several threads at once.
pub struct Either<L, R>(Side<L, R>);

enum Side<L, R> {
  Left(Producer<L>),
  Right(Producer<R>),
}

impl<L, R> Either<L, R> {
  pub fn right<F>(producer: F) -> Self
  where
    F: Fn() -> R + Send + Sync + 'static,
  {
    Self(Side::Right(Arc::new(producer)))
  }

  pub fn left<F>(producer: F) -> Self
  where
    F: Fn() -> L + Send + Sync + 'static,
  {
    Self(Side::Left(Arc::new(producer)))
  }

  /// Fails with [`ContractError::InvalidState`] when there is no producer.
  pub fn try_right<F>(producer: Option<F>) -> Result<Self, ContractError>
  where
    F: Fn() -> R + Send + Sync + 'static,
  {
    producer
      .map(Self::right)
      .ok_or_else(|| invalid_state(NEITHER_SIDE))
  }

  /// Fails with [`ContractError::InvalidState`] when there is no producer.
  pub fn try_left<F>(producer: Option<F>) -> Result<Self, ContractError>
  where
    F: Fn() -> L + Send + Sync + 'static,
  {
    producer
      .map(Self::left)
      .ok_or_else(|| invalid_state(NEITHER_SIDE))
  }

  pub fn from_right(value: R) -> Self
  where
    R: Clone + Send + Sync + 'static,
  {
    Self::right(move || value.clone())
  }

  pub fn from_left(value: L) -> Self
  where
    L: Clone + Send + Sync + 'static,
  {
    Self::left(move || value.clone())
  }

  /// Right when `maybe` has a value, otherwise `left`.
  pub fn from_maybe(maybe: Maybe<R>, left: L) -> Self
  where
    L: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
  {
    match maybe.into_option() {
      Some(value) => Self::from_right(value),
      None => Self::from_left(left),
    }
  }

  /// Left when `source` is null in the sense of [`util::is_null`].
  pub fn from_nullable(source: R, left: L) -> Self
  where
    L: Clone + Send + Sync + 'static,
    R: Nullable + Clone + Send + Sync + 'static,
  {
    if is_null(&source) {
      Self::from_left(left)
    } else {
      Self::from_right(source)
    }
  }

  pub fn is_right(&self) -> bool {
    matches!(self.0, Side::Right(_))
  }

  pub fn is_left(&self) -> bool {
    matches!(self.0, Side::Left(_))
  }

  /// Runs the right producer, if that is the live side.
  pub fn right_value(&self) -> Option<R> {
    match &self.0 {
      Side::Right(right) => Some(right()),
      Side::Left(_) => None,
    }
  }

  /// Runs the left producer, if that is the live side.
  pub fn left_value(&self) -> Option<L> {
    match &self.0 {
      Side::Left(left) => Some(left()),
      Side::Right(_) => None,
    }
  }

  pub fn right_or_default(&self) -> R
  where
    R: Default,
  {
    self.right_value().unwrap_or_default()
  }

  pub fn left_or_default(&self) -> L
  where
    L: Default,
  {
    self.left_value().unwrap_or_default()
  }

  /// Stays right only if `predicate` holds on the right value; anything else
  /// becomes `left`.
  pub fn right_when<P>(self, predicate: P, left: L) -> Self
  where
    P: FnOnce(&R) -> bool,
    L: Clone + Send + Sync + 'static,
  {
    let keep = match &self.0 {
      Side::Right(right) => predicate(&right()),
      Side::Left(_) => false,
    };
    if keep {
      self
    } else {
      Self::from_left(left)
    }
  }

  /// Checked form of [`right_when`](Either::right_when).
  ///
  /// `predicate` is only required while this is right. Without `left` the
  /// current left producer is carried over; a right value that fails the
  /// predicate then has nothing to fall back to, which is an invalid state.
  pub fn try_right_when<P>(
    self,
    predicate: Option<P>,
    left: Option<L>,
  ) -> Result<Self, ContractError>
  where
    P: FnOnce(&R) -> bool,
    L: Clone + Send + Sync + 'static,
  {
    let keep = match &self.0 {
      Side::Right(right) => require(predicate, "predicate")?(&right()),
      Side::Left(_) => false,
    };
    if keep {
      return Ok(self);
    }
    match (left, self.0) {
      (Some(left), _) => Ok(Self::from_left(left)),
      (None, Side::Left(producer)) => Ok(Self(Side::Left(producer))),
      (None, Side::Right(_)) => Err(invalid_state(NEITHER_SIDE)),
    }
  }

  /// Maps both sides by composing producers. Neither selector runs until
  /// its side is read.
  pub fn map<L2, R2, F, G>(
    self,
    left_selector: F,
    right_selector: G,
  ) -> Either<L2, R2>
  where
    L: 'static,
    R: 'static,
    F: Fn(L) -> L2 + Send + Sync + 'static,
    G: Fn(R) -> R2 + Send + Sync + 'static,
  {
    match self.0 {
      Side::Left(left) => Either::left(move || left_selector(left())),
      Side::Right(right) => Either::right(move || right_selector(right())),
    }
  }

  pub fn map_right<R2, G>(self, right_selector: G) -> Either<L, R2>
  where
    R: 'static,
    G: Fn(R) -> R2 + Send + Sync + 'static,
  {
    match self.0 {
      Side::Left(left) => Either(Side::Left(left)),
      Side::Right(right) => Either::right(move || right_selector(right())),
    }
  }

  pub fn map_left<L2, F>(self, left_selector: F) -> Either<L2, R>
  where
    L: 'static,
    F: Fn(L) -> L2 + Send + Sync + 'static,
  {
    match self.0 {
      Side::Left(left) => Either::left(move || left_selector(left())),
      Side::Right(right) => Either(Side::Right(right)),
    }
  }

  pub fn fold<U, F, G>(&self, left_selector: F, right_selector: G) -> U
  where
    F: FnOnce(L) -> U,
    G: FnOnce(R) -> U,
  {
    match &self.0 {
      Side::Left(left) => left_selector(left()),
      Side::Right(right) => right_selector(right()),
    }
  }

  pub fn to_maybe(&self) -> Maybe<R> {
    self.right_value().into()
  }

  pub fn to_outcome(&self) -> Outcome<R, L> {
    match &self.0 {
      Side::Left(left) => Outcome::err(left()),
      Side::Right(right) => Outcome::ok(right()),
    }
  }
}

impl<L, R> Clone for Either<L, R> {
  fn clone(&self) -> Self {
    match &self.0 {
      Side::Left(left) => Self(Side::Left(Arc::clone(left))),
      Side::Right(right) => Self(Side::Right(Arc::clone(right))),
    }
  }
}

impl<L, R> Debug for Either<L, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.0 {
      Side::Left(_) => write!(f, "Left(<deferred>)"),
      Side::Right(_) => write!(f, "Right(<deferred>)"),
    }
  }
}

use crate::error::{require, ContractError};
use crate::{Either, Maybe};

/// Exactly one of a success value or an error.
///
/// Success-path combinators short-circuit on an error and never call their
/// selectors. The checked `try_*` forms only validate the selectors that the
/// current state would actually run, except for [`try_fold`](Outcome::try_fold)
/// which is a total elimination and needs both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<T, E>(Result<T, E>);

impl<T, E> Outcome<T, E> {
  pub const fn ok(value: T) -> Self {
    Self(Ok(value))
  }

  pub const fn err(error: E) -> Self {
    Self(Err(error))
  }

  pub fn has_value(&self) -> bool {
    self.0.is_ok()
  }

  pub fn has_error(&self) -> bool {
    self.0.is_err()
  }

  pub fn value(&self) -> Option<&T> {
    self.0.as_ref().ok()
  }

  pub fn error(&self) -> Option<&E> {
    self.0.as_ref().err()
  }

  pub fn value_or_default(&self) -> T
  where
    T: Clone + Default,
  {
    self.value().cloned().unwrap_or_default()
  }

  pub fn error_or_default(&self) -> E
  where
    E: Clone + Default,
  {
    self.error().cloned().unwrap_or_default()
  }

  pub fn as_ref(&self) -> Outcome<&T, &E> {
    Outcome(self.0.as_ref())
  }

  pub fn into_result(self) -> Result<T, E> {
    self.0
  }

  /// Turns the value into an error when `predicate` fails on it.
  pub fn filter<P, S>(self, predicate: P, error_selector: S) -> Self
  where
    P: FnOnce(&T) -> bool,
    S: FnOnce() -> E,
  {
    match self.0 {
      Ok(value) => {
        if predicate(&value) {
          Self::ok(value)
        } else {
          Self::err(error_selector())
        }
      }
      Err(error) => Self::err(error),
    }
  }

  /// An existing error is returned as is and neither argument is looked at.
  /// With a value, both arguments are required before `predicate` runs.
  pub fn try_filter<P, S>(
    self,
    predicate: Option<P>,
    error_selector: Option<S>,
  ) -> Result<Self, ContractError>
  where
    P: FnOnce(&T) -> bool,
    S: FnOnce() -> E,
  {
    if self.has_error() {
      return Ok(self);
    }
    let predicate = require(predicate, "predicate")?;
    let error_selector = require(error_selector, "error_selector")?;
    Ok(self.filter(predicate, error_selector))
  }

  /// Turns the value into an error when `predicate` holds on it.
  pub fn error_when<P, S>(self, predicate: P, error_selector: S) -> Self
  where
    P: FnOnce(&T) -> bool,
    S: FnOnce() -> E,
  {
    self.filter(|value| !predicate(value), error_selector)
  }

  pub fn try_error_when<P, S>(
    self,
    predicate: Option<P>,
    error_selector: Option<S>,
  ) -> Result<Self, ContractError>
  where
    P: FnOnce(&T) -> bool,
    S: FnOnce() -> E,
  {
    if self.has_error() {
      return Ok(self);
    }
    let predicate = require(predicate, "predicate")?;
    let error_selector = require(error_selector, "error_selector")?;
    Ok(self.error_when(predicate, error_selector))
  }

  pub fn map<U, F>(self, selector: F) -> Outcome<U, E>
  where
    F: FnOnce(T) -> U,
  {
    Outcome(self.0.map(selector))
  }

  pub fn try_map<U, F>(
    self,
    selector: Option<F>,
  ) -> Result<Outcome<U, E>, ContractError>
  where
    F: FnOnce(T) -> U,
  {
    match self.0 {
      Ok(value) => Ok(Outcome::ok(require(selector, "selector")?(value))),
      Err(error) => Ok(Outcome::err(error)),
    }
  }

  pub fn flat_map<U, F>(self, selector: F) -> Outcome<U, E>
  where
    F: FnOnce(T) -> Outcome<U, E>,
  {
    match self.0 {
      Ok(value) => selector(value),
      Err(error) => Outcome::err(error),
    }
  }

  pub fn try_flat_map<U, F>(
    self,
    selector: Option<F>,
  ) -> Result<Outcome<U, E>, ContractError>
  where
    F: FnOnce(T) -> Outcome<U, E>,
  {
    match self.0 {
      Ok(value) => Ok(require(selector, "selector")?(value)),
      Err(error) => Ok(Outcome::err(error)),
    }
  }

  /// Runs `selector` on the value and, if that succeeds too, combines both
  /// values with `result_selector`.
  pub fn flat_map_with<S, U, F, R>(
    self,
    selector: F,
    result_selector: R,
  ) -> Outcome<U, E>
  where
    F: FnOnce(&T) -> Outcome<S, E>,
    R: FnOnce(T, S) -> U,
  {
    self.flat_map(|source| {
      selector(&source).map(|elem| result_selector(source, elem))
    })
  }

  pub fn try_flat_map_with<S, U, F, R>(
    self,
    selector: Option<F>,
    result_selector: Option<R>,
  ) -> Result<Outcome<U, E>, ContractError>
  where
    F: FnOnce(&T) -> Outcome<S, E>,
    R: FnOnce(T, S) -> U,
  {
    if let Err(error) = self.0 {
      return Ok(Outcome::err(error));
    }
    let selector = require(selector, "selector")?;
    let result_selector = require(result_selector, "result_selector")?;
    Ok(self.flat_map_with(selector, result_selector))
  }

  /// Runs a second fallible step on the value, keeping the value when the
  /// step succeeds. `step` is never called once an error is present.
  pub fn flatten_with<U, F>(self, step: F) -> Self
  where
    F: FnOnce(&T) -> Outcome<U, E>,
  {
    self.flat_map(|value| step(&value).map(|_| value))
  }

  pub fn try_flatten_with<U, F>(
    self,
    step: Option<F>,
  ) -> Result<Self, ContractError>
  where
    F: FnOnce(&T) -> Outcome<U, E>,
  {
    if self.has_error() {
      return Ok(self);
    }
    let step = require(step, "step")?;
    Ok(self.flatten_with(step))
  }

  pub fn map_error<E2, F>(self, selector: F) -> Outcome<T, E2>
  where
    F: FnOnce(E) -> E2,
  {
    Outcome(self.0.map_err(selector))
  }

  /// A missing `selector` is fine while there is a value to pass through.
  pub fn try_map_error<E2, F>(
    self,
    selector: Option<F>,
  ) -> Result<Outcome<T, E2>, ContractError>
  where
    F: FnOnce(E) -> E2,
  {
    match self.0 {
      Ok(value) => Ok(Outcome::ok(value)),
      Err(error) => Ok(Outcome::err(require(selector, "selector")?(error))),
    }
  }

  /// Maps whichever side is live.
  pub fn full_map<U, E2, F, G>(
    self,
    selector: F,
    error_selector: G,
  ) -> Outcome<U, E2>
  where
    F: FnOnce(T) -> U,
    G: FnOnce(E) -> E2,
  {
    match self.0 {
      Ok(value) => Outcome::ok(selector(value)),
      Err(error) => Outcome::err(error_selector(error)),
    }
  }

  pub fn try_full_map<U, E2, F, G>(
    self,
    selector: Option<F>,
    error_selector: Option<G>,
  ) -> Result<Outcome<U, E2>, ContractError>
  where
    F: FnOnce(T) -> U,
    G: FnOnce(E) -> E2,
  {
    match self.0 {
      Ok(value) => Ok(Outcome::ok(require(selector, "selector")?(value))),
      Err(error) => Ok(Outcome::err(require(
        error_selector,
        "error_selector",
      )?(error))),
    }
  }

  pub fn fold<U, F, G>(self, selector: F, error_selector: G) -> U
  where
    F: FnOnce(T) -> U,
    G: FnOnce(E) -> U,
  {
    match self.0 {
      Ok(value) => selector(value),
      Err(error) => error_selector(error),
    }
  }

  pub fn try_fold<U, F, G>(
    self,
    selector: Option<F>,
    error_selector: Option<G>,
  ) -> Result<U, ContractError>
  where
    F: FnOnce(T) -> U,
    G: FnOnce(E) -> U,
  {
    let selector = require(selector, "selector")?;
    let error_selector = require(error_selector, "error_selector")?;
    Ok(self.fold(selector, error_selector))
  }

  pub fn do_with<A>(self, action: A) -> Self
  where
    A: FnOnce(&T),
  {
    if let Ok(value) = &self.0 {
      action(value);
    }
    self
  }

  pub fn do_with_error<A>(self, action: A) -> Self
  where
    A: FnOnce(&E),
  {
    if let Err(error) = &self.0 {
      action(error);
    }
    self
  }

  pub fn try_do_with<A>(self, action: Option<A>) -> Result<Self, ContractError>
  where
    A: FnOnce(&T),
  {
    if self.has_error() {
      return Ok(self);
    }
    Ok(self.do_with(require(action, "action")?))
  }

  pub fn try_do_with_error<A>(
    self,
    action: Option<A>,
  ) -> Result<Self, ContractError>
  where
    A: FnOnce(&E),
  {
    if self.has_value() {
      return Ok(self);
    }
    Ok(self.do_with_error(require(action, "action")?))
  }

  /// Converts both sides into a common type.
  pub fn full_cast<U>(self) -> Outcome<U, U>
  where
    T: Into<U>,
    E: Into<U>,
  {
    self.full_map(Into::into, Into::into)
  }

  pub fn to_maybe(self) -> Maybe<T> {
    self.0.ok().into()
  }

  pub fn to_either(self) -> Either<E, T>
  where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
  {
    match self.0 {
      Ok(value) => Either::from_right(value),
      Err(error) => Either::from_left(error),
    }
  }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
  pub fn flatten(self) -> Outcome<T, E> {
    self.flat_map(|inner| inner)
  }
}

impl<T> Outcome<T, T> {
  /// Returns whichever side is live.
  pub fn merge(self) -> T {
    match self.0 {
      Ok(value) | Err(value) => value,
    }
  }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  fn from(result: Result<T, E>) -> Self {
    Self(result)
  }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  fn from(outcome: Outcome<T, E>) -> Self {
    outcome.0
  }
}

/// Lifts any value into either side of an [`Outcome`].
pub trait IntoOutcome: Sized {
  fn into_ok<E>(self) -> Outcome<Self, E> {
    Outcome::ok(self)
  }

  fn into_err<T>(self) -> Outcome<T, Self> {
    Outcome::err(self)
  }
}

impl<T> IntoOutcome for T {}

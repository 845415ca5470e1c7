use crate::error::{require, ContractError};
use crate::{Either, Outcome};
use util::{is_null, Nullable};

/// Zero or one value of type `T`.
///
/// An absent `Maybe` reads as `T::default()` through
/// [`value_or_default`](Maybe::value_or_default); nothing else is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Maybe<T>(Option<T>);

impl<T> Default for Maybe<T> {
  fn default() -> Self {
    Self(None)
  }
}

impl<T> Maybe<T> {
  pub const fn some(value: T) -> Self {
    Self(Some(value))
  }

  pub const fn none() -> Self {
    Self(None)
  }

  /// Absent regardless of the argument, which is not kept.
  pub fn none_of(_value: T) -> Self {
    Self(None)
  }

  pub fn some_when<P>(value: T, predicate: P) -> Self
  where
    P: FnOnce(&T) -> bool,
  {
    Self::some(value).filter(predicate)
  }

  pub fn none_when<P>(value: T, predicate: P) -> Self
  where
    P: FnOnce(&T) -> bool,
  {
    Self::some(value).reject(predicate)
  }

  pub fn try_some_when<P>(
    value: T,
    predicate: Option<P>,
  ) -> Result<Self, ContractError>
  where
    P: FnOnce(&T) -> bool,
  {
    let predicate = require(predicate, "predicate")?;
    Ok(Self::some_when(value, predicate))
  }

  pub fn try_none_when<P>(
    value: T,
    predicate: Option<P>,
  ) -> Result<Self, ContractError>
  where
    P: FnOnce(&T) -> bool,
  {
    let predicate = require(predicate, "predicate")?;
    Ok(Self::none_when(value, predicate))
  }

  /// Absent when `value` is null in the sense of [`util::is_null`].
  pub fn none_when_null(value: T) -> Self
  where
    T: Nullable,
  {
    Self::none_when(value, is_null::<T>)
  }

  pub fn has_value(&self) -> bool {
    self.0.is_some()
  }

  pub fn value(&self) -> Option<&T> {
    self.0.as_ref()
  }

  pub fn value_or_default(&self) -> T
  where
    T: Clone + Default,
  {
    self.0.clone().unwrap_or_default()
  }

  pub fn into_option(self) -> Option<T> {
    self.0
  }

  pub fn as_ref(&self) -> Maybe<&T> {
    Maybe(self.0.as_ref())
  }

  pub fn iter(&self) -> std::option::Iter<'_, T> {
    self.0.iter()
  }

  /// Keeps the value only if `predicate` holds on it.
  pub fn filter<P>(self, predicate: P) -> Self
  where
    P: FnOnce(&T) -> bool,
  {
    Self(self.0.filter(predicate))
  }

  /// Drops the value if `predicate` holds on it.
  pub fn reject<P>(self, predicate: P) -> Self
  where
    P: FnOnce(&T) -> bool,
  {
    Self(self.0.filter(|value| !predicate(value)))
  }

  pub fn try_filter<P>(self, predicate: Option<P>) -> Result<Self, ContractError>
  where
    P: FnOnce(&T) -> bool,
  {
    let predicate = require(predicate, "predicate")?;
    Ok(self.filter(predicate))
  }

  pub fn try_reject<P>(self, predicate: Option<P>) -> Result<Self, ContractError>
  where
    P: FnOnce(&T) -> bool,
  {
    let predicate = require(predicate, "predicate")?;
    Ok(self.reject(predicate))
  }

  pub fn map<U, F>(self, selector: F) -> Maybe<U>
  where
    F: FnOnce(T) -> U,
  {
    match self.0 {
      Some(value) => Maybe::some(selector(value)),
      None => Maybe::none(),
    }
  }

  /// Like [`map`](Maybe::map), but `selector` is required even when absent.
  pub fn try_map<U, F>(
    self,
    selector: Option<F>,
  ) -> Result<Maybe<U>, ContractError>
  where
    F: FnOnce(T) -> U,
  {
    let selector = require(selector, "selector")?;
    Ok(self.map(selector))
  }

  /// Present only when both this and the result of `selector` are present.
  pub fn flat_map<U, F>(self, selector: F) -> Maybe<U>
  where
    F: FnOnce(T) -> Maybe<U>,
  {
    let value = match self.0 {
      Some(value) => value,
      None => return Maybe::none(),
    };
    match selector(value).0 {
      Some(inner) => Maybe::some(inner),
      None => Maybe::none(),
    }
  }

  pub fn try_flat_map<U, F>(
    self,
    selector: Option<F>,
  ) -> Result<Maybe<U>, ContractError>
  where
    F: FnOnce(T) -> Maybe<U>,
  {
    let selector = require(selector, "selector")?;
    Ok(self.flat_map(selector))
  }

  /// Combines this value with the one `selector` derives from it.
  pub fn flat_map_with<S, U, F, R>(
    self,
    selector: F,
    result_selector: R,
  ) -> Maybe<U>
  where
    F: FnOnce(&T) -> Maybe<S>,
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
  ) -> Result<Maybe<U>, ContractError>
  where
    F: FnOnce(&T) -> Maybe<S>,
    R: FnOnce(T, S) -> U,
  {
    let result_selector = require(result_selector, "result_selector")?;
    let selector = require(selector, "selector")?;
    Ok(self.flat_map_with(selector, result_selector))
  }

  /// `other` if this is present, absent otherwise.
  pub fn and<U>(self, other: impl Into<Maybe<U>>) -> Maybe<U> {
    let other = other.into();
    self.flat_map(|_| other)
  }

  /// Pairs this with `other` positionally; both must be present.
  pub fn zip_with<S, U, R>(
    self,
    other: impl Into<Maybe<S>>,
    result_selector: R,
  ) -> Maybe<U>
  where
    R: FnOnce(T, S) -> U,
  {
    let other = other.into();
    self.flat_map(|source| other.map(|elem| result_selector(source, elem)))
  }

  /// Runs exactly one of the two selectors.
  pub fn fold<U, S, N>(self, some_selector: S, none_selector: N) -> U
  where
    S: FnOnce(T) -> U,
    N: FnOnce() -> U,
  {
    match self.0 {
      Some(value) => some_selector(value),
      None => none_selector(),
    }
  }

  /// Both selectors are required whichever one would run.
  pub fn try_fold<U, S, N>(
    self,
    some_selector: Option<S>,
    none_selector: Option<N>,
  ) -> Result<U, ContractError>
  where
    S: FnOnce(T) -> U,
    N: FnOnce() -> U,
  {
    let some_selector = require(some_selector, "some_selector")?;
    let none_selector = require(none_selector, "none_selector")?;
    Ok(self.fold(some_selector, none_selector))
  }

  pub fn to_outcome<E, F>(self, error_selector: F) -> Outcome<T, E>
  where
    F: FnOnce() -> E,
  {
    match self.0 {
      Some(value) => Outcome::ok(value),
      None => Outcome::err(error_selector()),
    }
  }

  /// `error_selector` is only required when there is no value.
  pub fn try_to_outcome<E, F>(
    self,
    error_selector: Option<F>,
  ) -> Result<Outcome<T, E>, ContractError>
  where
    F: FnOnce() -> E,
  {
    match self.0 {
      Some(value) => Ok(Outcome::ok(value)),
      None => {
        let error_selector = require(error_selector, "error_selector")?;
        Ok(Outcome::err(error_selector()))
      }
    }
  }

  pub fn to_either<L>(self, left: L) -> Either<L, T>
  where
    L: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
  {
    Either::from_maybe(self, left)
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  fn from(value: Option<T>) -> Self {
    Self(value)
  }
}

impl<T> From<Maybe<T>> for Option<T> {
  fn from(value: Maybe<T>) -> Self {
    value.0
  }
}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = std::option::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use quickcheck_macros::quickcheck;
  use std::cell::Cell;

  type Pred = fn(&i32) -> bool;

  #[quickcheck]
  fn map_identity_keeps_some(x: i32) -> bool {
    Maybe::some(x).map(|v| v) == Maybe::some(x)
  }

  #[quickcheck]
  fn map_identity_keeps_tag(x: Option<String>) -> bool {
    let maybe = Maybe::from(x);
    maybe.clone().map(|v| v) == maybe
  }

  #[quickcheck]
  fn map_composes(x: Option<i32>) -> bool {
    let f = |v: i32| v.wrapping_mul(3);
    let g = |v: i32| v.wrapping_sub(7);
    Maybe::from(x).map(f).map(g) == Maybe::from(x).map(|v| g(f(v)))
  }

  #[quickcheck]
  fn flat_map_left_identity(x: i32) -> bool {
    let f = |v: i32| Maybe::some_when(v, |v| v % 2 == 0);
    Maybe::some(x).flat_map(f) == f(x)
  }

  #[test]
  fn none_never_invokes_selectors() {
    let calls = Cell::new(0);
    let none = Maybe::<i32>::none();
    let mapped = none.map(|v| {
      calls.set(calls.get() + 1);
      v
    });
    let flat = none.flat_map(|v| {
      calls.set(calls.get() + 1);
      Maybe::some(v)
    });
    let with = none.flat_map_with(
      |v| {
        calls.set(calls.get() + 1);
        Maybe::some(*v)
      },
      |a, b| a + b,
    );
    assert_eq!(calls.get(), 0);
    assert_eq!(mapped, Maybe::none());
    assert_eq!(flat, Maybe::none());
    assert_eq!(with, Maybe::none());
  }

  #[test]
  fn none_of_reports_absence() {
    let maybe = Maybe::none_of(42);
    assert!(!maybe.has_value());
    assert_eq!(maybe.value(), None);
    assert_eq!(maybe.value_or_default(), 0);
  }

  #[test]
  fn some_when_and_none_when() {
    assert_eq!(Maybe::some_when(4, |v| *v > 3), Maybe::some(4));
    assert_eq!(Maybe::some_when(2, |v| *v > 3), Maybe::none());
    assert_eq!(Maybe::none_when(4, |v| *v > 3), Maybe::none());
    assert_eq!(Maybe::none_when(2, |v| *v > 3), Maybe::some(2));
  }

  #[test]
  fn missing_predicate_is_rejected() {
    assert_eq!(
      Maybe::try_some_when(1, None::<Pred>),
      Err(ContractError::NullArgument("predicate"))
    );
    assert_eq!(
      Maybe::try_none_when(1, None::<Pred>),
      Err(ContractError::NullArgument("predicate"))
    );
    assert_eq!(
      Maybe::<i32>::none().try_filter(None::<Pred>),
      Err(ContractError::NullArgument("predicate"))
    );
  }

  #[test]
  fn none_when_null() {
    assert_eq!(Maybe::none_when_null(None::<i32>), Maybe::none());
    assert_eq!(Maybe::none_when_null(Some(0)), Maybe::some(Some(0)));
    assert_eq!(Maybe::none_when_null(0), Maybe::some(0));
  }

  #[test]
  fn missing_selector_is_rejected_even_when_absent() {
    let err = Maybe::<i32>::none().try_map(None::<fn(i32) -> i32>);
    assert_eq!(err, Err(ContractError::NullArgument("selector")));

    let err = Maybe::<i32>::none().try_flat_map(None::<fn(i32) -> Maybe<i32>>);
    assert_eq!(err, Err(ContractError::NullArgument("selector")));
  }

  #[test]
  fn try_map_with_selector() {
    assert_eq!(
      Maybe::some(2).try_map(Some(|v: i32| v * 10)),
      Ok(Maybe::some(20))
    );
  }

  #[test]
  fn flat_map_needs_both_present() {
    let half = |v: i32| Maybe::some_when(v / 2, |_| v % 2 == 0);
    assert_eq!(Maybe::some(8).flat_map(half), Maybe::some(4));
    assert_eq!(Maybe::some(7).flat_map(half), Maybe::none());
  }

  #[test]
  fn flat_map_with_combines() {
    let result = Maybe::some(3)
      .flat_map_with(|v| Maybe::some(*v * 2), |src, elem| src + elem);
    assert_eq!(result, Maybe::some(9));

    let result = Maybe::some(3)
      .flat_map_with(|_| Maybe::<i32>::none(), |src, elem| src + elem);
    assert_eq!(result, Maybe::none());
  }

  #[test]
  fn try_flat_map_with_checks_result_selector_first() {
    let err = Maybe::some(3).try_flat_map_with(
      None::<fn(&i32) -> Maybe<i32>>,
      None::<fn(i32, i32) -> i32>,
    );
    assert_eq!(err, Err(ContractError::NullArgument("result_selector")));

    let err = Maybe::some(3).try_flat_map_with(
      None::<fn(&i32) -> Maybe<i32>>,
      Some(|a: i32, b: i32| a + b),
    );
    assert_eq!(err, Err(ContractError::NullArgument("selector")));
  }

  #[test]
  fn zip_with_nullable_value() {
    assert_eq!(Maybe::some(2).zip_with(Some(5), |a, b| a * b), Maybe::some(10));
    assert_eq!(
      Maybe::some(2).zip_with(None::<i32>, |a, b| a * b),
      Maybe::none()
    );
    assert_eq!(
      Maybe::<i32>::none().zip_with(Maybe::some(5), |a, b| a * b),
      Maybe::none()
    );
  }

  #[test]
  fn and_replaces_value() {
    assert_eq!(Maybe::some(1).and(Some("x")), Maybe::some("x"));
    assert_eq!(Maybe::<i32>::none().and(Some("x")), Maybe::none());
  }

  #[test]
  fn fold_runs_one_branch() {
    assert_eq!(Maybe::some(3).fold(|v| v + 1, || 0), 4);
    assert_eq!(Maybe::<i32>::none().fold(|v| v + 1, || 0), 0);
  }

  #[test]
  fn try_fold_requires_both_selectors() {
    let err = Maybe::some(3).try_fold(Some(|v: i32| v), None::<fn() -> i32>);
    assert_eq!(err, Err(ContractError::NullArgument("none_selector")));

    let err = Maybe::<i32>::none()
      .try_fold(None::<fn(i32) -> i32>, Some(|| 0));
    assert_eq!(err, Err(ContractError::NullArgument("some_selector")));
  }

  #[test]
  fn to_outcome_only_validates_when_absent() {
    let outcome = Maybe::some(5).try_to_outcome(None::<fn() -> String>);
    assert_eq!(outcome, Ok(Outcome::ok(5)));

    let err = Maybe::<i32>::none().try_to_outcome(None::<fn() -> String>);
    assert_eq!(err, Err(ContractError::NullArgument("error_selector")));

    let outcome = Maybe::<i32>::none().to_outcome(|| "missing");
    assert_eq!(outcome, Outcome::err("missing"));
  }

  #[test]
  fn iterates_zero_or_one() {
    assert_eq!(Maybe::some(1).into_iter().collect::<Vec<_>>(), vec![1]);
    assert_eq!(Maybe::<i32>::none().iter().count(), 0);
  }
}

//! Helpers over sequences of values and of [`Maybe`]s.
//!
//! Everything here is lazy and single pass. The source iterator is owned by
//! the helper, so it is released on every exit path, including an early
//! return on the first match.

use crate::Maybe;

/// First element of `source`, if any.
pub fn first_or_none<I>(source: I) -> Maybe<I::Item>
where
  I: IntoIterator,
{
  source.into_iter().next().into()
}

/// First element of `source` matching `predicate`. Stops at the match.
pub fn first_or_none_where<I, P>(source: I, predicate: P) -> Maybe<I::Item>
where
  I: IntoIterator,
  P: FnMut(&I::Item) -> bool,
{
  source.into_iter().find(predicate).into()
}

/// First element of an indexable sequence, by index.
pub fn first_in<T: Clone>(source: &[T]) -> Maybe<T> {
  source.first().cloned().into()
}

/// The present values, in order.
pub fn values<I, T>(source: I) -> Values<I::IntoIter>
where
  I: IntoIterator<Item = Maybe<T>>,
{
  Values {
    iter: source.into_iter(),
  }
}

/// One `selector()` per absent entry; present entries are dropped.
///
/// Nothing is cached: cloning the adapter and iterating again recomputes
/// every placeholder from the source.
pub fn no_values<I, T, R, F>(source: I, selector: F) -> NoValues<I::IntoIter, F>
where
  I: IntoIterator<Item = Maybe<T>>,
  F: FnMut() -> R,
{
  NoValues {
    iter: source.into_iter(),
    selector,
  }
}

/// [`Maybe::fold`] applied to every entry.
pub fn fold_each<I, T, U, S, N>(
  source: I,
  some_selector: S,
  none_selector: N,
) -> FoldEach<I::IntoIter, S, N>
where
  I: IntoIterator<Item = Maybe<T>>,
  S: FnMut(T) -> U,
  N: FnMut() -> U,
{
  FoldEach {
    iter: source.into_iter(),
    some_selector,
    none_selector,
  }
}

#[derive(Debug, Clone)]
pub struct Values<I> {
  iter: I,
}

impl<I, T> Iterator for Values<I>
where
  I: Iterator<Item = Maybe<T>>,
{
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.iter.find_map(Maybe::into_option)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, self.iter.size_hint().1)
  }
}

#[derive(Clone)]
pub struct NoValues<I, F> {
  iter: I,
  selector: F,
}

impl<I, T, R, F> Iterator for NoValues<I, F>
where
  I: Iterator<Item = Maybe<T>>,
  F: FnMut() -> R,
{
  type Item = R;

  fn next(&mut self) -> Option<R> {
    loop {
      if !self.iter.next()?.has_value() {
        return Some((self.selector)());
      }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, self.iter.size_hint().1)
  }
}

#[derive(Clone)]
pub struct FoldEach<I, S, N> {
  iter: I,
  some_selector: S,
  none_selector: N,
}

impl<I, T, U, S, N> Iterator for FoldEach<I, S, N>
where
  I: Iterator<Item = Maybe<T>>,
  S: FnMut(T) -> U,
  N: FnMut() -> U,
{
  type Item = U;

  fn next(&mut self) -> Option<U> {
    let maybe = self.iter.next()?;
    Some(maybe.fold(&mut self.some_selector, &mut self.none_selector))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

/// Method forms of the free functions in this module.
pub trait MaybeIterExt: Iterator + Sized {
  fn first_or_none(self) -> Maybe<Self::Item> {
    first_or_none(self)
  }

  fn first_or_none_where<P>(self, predicate: P) -> Maybe<Self::Item>
  where
    P: FnMut(&Self::Item) -> bool,
  {
    first_or_none_where(self, predicate)
  }

  fn values<T>(self) -> Values<Self>
  where
    Self: Iterator<Item = Maybe<T>>,
  {
    values(self)
  }

  fn no_values<T, R, F>(self, selector: F) -> NoValues<Self, F>
  where
    Self: Iterator<Item = Maybe<T>>,
    F: FnMut() -> R,
  {
    no_values(self, selector)
  }

  fn fold_each<T, U, S, N>(
    self,
    some_selector: S,
    none_selector: N,
  ) -> FoldEach<Self, S, N>
  where
    Self: Iterator<Item = Maybe<T>>,
    S: FnMut(T) -> U,
    N: FnMut() -> U,
  {
    fold_each(self, some_selector, none_selector)
  }
}

impl<I: Iterator> MaybeIterExt for I {}

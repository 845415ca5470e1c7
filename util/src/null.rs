//! Absence checks shared by every container.
//!
//! A value counts as null only when two independent tests agree:
//! - it compares equal to `T::default()`,
//! - the type itself reports it as a null reference.
//!
//! Plain values are never null references, so `0_i32` is not null even though
//! it is the default. `None` is both the default and a null reference.

/// Types that can be asked whether they hold a null reference.
pub trait Nullable: PartialEq + Default {
  fn is_null_reference(&self) -> bool {
    false
  }
}

/// Returns `true` if `value` should be treated as absent.
pub fn is_null<T>(value: &T) -> bool
where
  T: Nullable,
{
  *value == T::default() && value.is_null_reference()
}

macro_rules! impl_value_types {
  ($($ty:ty),* $(,)?) => {
    $(impl Nullable for $ty {})*
  };
}

impl_value_types!(
  bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
  f32, f64, (), String,
);

impl<'a> Nullable for &'a str {}

impl<T: PartialEq> Nullable for Vec<T> {}

impl<T: PartialEq> Nullable for Option<T> {
  fn is_null_reference(&self) -> bool {
    self.is_none()
  }
}

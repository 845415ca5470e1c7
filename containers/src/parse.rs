//! Fallible parsing into an [`Outcome`].
//!
//! On failure the error reads
//! `Could not parse type <Source>("<text>") into <Target>.`. The source is
//! always reported as `&str`, however the text was passed in, and the target
//! uses the fixed name from [`ParseTarget::NAME`].

use std::str::FromStr;

use crate::Outcome;

const SOURCE_NAME: &str = "&str";

/// A type [`parse`] can produce, with the name it reports on failure.
pub trait ParseTarget: FromStr {
  const NAME: &'static str;
}

macro_rules! impl_parse_target {
  ($($ty:ty),* $(,)?) => {
    $(
      impl ParseTarget for $ty {
        const NAME: &'static str = stringify!($ty);
      }
    )*
  };
}

impl_parse_target!(
  i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
  bool, char, String,
);

pub fn parse<T, S>(source: S) -> Outcome<T, String>
where
  T: ParseTarget,
  S: AsRef<str>,
{
  parse_str(source.as_ref())
}

fn parse_str<T: ParseTarget>(text: &str) -> Outcome<T, String> {
  match text.parse::<T>() {
    Ok(value) => Outcome::ok(value),
    Err(_) => Outcome::err(format!(
      "Could not parse type {}(\"{}\") into {}.",
      SOURCE_NAME,
      text,
      T::NAME
    )),
  }
}

pub fn parse_int<S: AsRef<str>>(source: S) -> Outcome<i32, String> {
  parse(source)
}

pub fn parse_double<S: AsRef<str>>(source: S) -> Outcome<f64, String> {
  parse(source)
}

pub fn parse_bool<S: AsRef<str>>(source: S) -> Outcome<bool, String> {
  parse(source)
}

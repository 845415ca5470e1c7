mod either;
mod error;
mod maybe;
mod outcome;
pub mod parse;
pub mod seq;

pub use self::either::Either;
pub use self::error::ContractError;
pub use self::maybe::Maybe;
pub use self::outcome::{IntoOutcome, Outcome};
pub use self::seq::MaybeIterExt;
pub use util::{is_null, Nullable};

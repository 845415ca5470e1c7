pub mod null;

pub use self::null::{is_null, Nullable};

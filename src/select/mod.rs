//! Support for fast select queries.

mod traits;
pub use self::traits::*;

//! Support for fast rank queries.

mod traits;
pub use self::traits::*;

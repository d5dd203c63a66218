//! A build-once succinct bit vector with rank and select.
//!
//! Bits are written into a [`Builder`](bit_vector/struct.Builder.html),
//! which is then consumed to produce an immutable
//! [`BitVector`](bit_vector/struct.BitVector.html). Building makes one pass
//! over the packed words and records the number of ones before every block
//! of ⌊lg *n*⌋² bits, so that:
//!
//!   - [rank](rank/index.html) queries cost one table lookup plus
//!     *O*(lg² *n* / 64) word popcounts, and
//!   - [select](select/index.html) queries binary search over ranks in
//!     *O*(lg *n*) rank queries.
//!
//! The index takes Θ(*n* / lg² *n*) words on top of the *n* bits.
//!
//! # Usage
//!
//! ```rust
//! use bitrank::Builder;
//!
//! let mut builder = Builder::new(9);
//! for &i in &[0, 1, 3, 6, 7] {
//!     builder.set_one(i);
//! }
//! let bits = builder.build();
//!
//! assert_eq!(bits.get(0), Ok(true));
//! assert_eq!(bits.rank1(5), Ok(3));
//! assert_eq!(bits.select1(2), Ok(3));
//! assert!(bits.select1(5).is_err());
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod internal;

pub mod broadword;
pub mod storage;

mod space_usage;
pub use crate::space_usage::SpaceUsage;

pub mod errors;
pub use crate::errors::{Error, Result};

pub mod rank;
pub use crate::rank::{BitRankSupport, RankSupport};

pub mod select;
pub use crate::select::{Select0Support, Select1Support, SelectSupport};

pub mod bit_vector;
pub use crate::bit_vector::{BitVector, Builder};

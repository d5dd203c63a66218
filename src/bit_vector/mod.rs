//! Building and querying rank/select bit vectors.
//!
//! A [`Builder`](struct.Builder.html) collects bits; calling
//! [`build`](struct.Builder.html#method.build) consumes it and produces an
//! immutable [`BitVector`](struct.BitVector.html) that answers rank and
//! select queries.

mod builder;
pub use self::builder::*;

mod bit_vector;
pub use self::bit_vector::*;

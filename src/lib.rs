//! Value conversion between a typed Rust domain model and the dynamic
//! row/parameter representation of a SQL database driver.
//!
//! `sqlvalue-core` defines, for each supported domain type, how to encode a
//! value into the driver's parameter form and how to decode a driver-returned
//! column value back, with an explicit recoverable error for every decode
//! path. The driver itself (connections, query execution, SQL text) is out
//! of scope; it is a black box that accepts and returns [`SqlValue`]s.
//!
//! # Key Components
//!
//! - **Values**: [`SqlValue`], the closed set of wire shapes the driver
//!   understands (null, boolean, integer, float, text, blob, array)
//!
//! - **Codecs**: the [`Codec`] trait with one implementation per supported
//!   type
//!   - Scalars embed structurally with no coercion
//!   - `Vec<T>` and `Option<T>` compose over any codec
//!   - Dates, instants, and decimals round-trip through text
//!   - [`SqlValue`] itself is the identity codec, for callers deferring
//!     typed interpretation
//!
//! - **Boundary**: the handful of representation-dependent primitives in
//!   [`boundary`] (null checks, buffer reinterpretation, the driver's
//!   timestamp formatter/parser) that codecs consume but never reimplement
//!
//! - **Parsing helpers**: the calendar date text routines in [`temporal`]
//!
//! # Design Philosophy
//!
//! Codecs are pure, stateless functions dispatched at compile time; there is
//! no runtime codec registry and no shared mutable state, so encode/decode
//! may be called concurrently from any number of threads. Encoding is total.
//! Decoding rejects any value that does not match the expected shape rather
//! than coercing it, and returns [`DecodeError`] as a value.

pub mod boundary;
pub mod codec;
pub mod error;
pub mod temporal;
pub mod value;

#[cfg(test)]
pub mod test_utils;

pub use codec::Codec;
pub use error::{DecodeError, Result};
pub use value::SqlValue;

//! # minifunk
//!
//! Chainable, immutable sequence operations for Rust.
//!
//! ## Overview
//!
//! [`Stream`] wraps an ordered collection and exposes the familiar aggregate
//! operations: `filter`, `map`, `flat_map`, `reduce`, `sorted`,
//! `find_first`, `distinct`, `limit`, `all_match` and `any_match`. Every
//! transformation returns a new stream and leaves the receiver untouched.
//! [`Enumerable`] is the same type under its older vocabulary (`find`,
//! `every`, `some`, `sort`, `as_list`).
//!
//! Capabilities are plain closures. Operations prefixed with `try_` accept
//! closures returning `Result` and hand back the first error unchanged.
//!
//! ## Feature Flags
//!
//! - `arc`: share stream storage through `Arc` instead of `Rc`, making
//!   `Stream<T>` `Send + Sync` when `T` is
//! - `serde`: `Serialize`/`Deserialize` for `Stream<T>` as a sequence
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use minifunk::prelude::*;
//!
//! struct FootballClub {
//!     name: &'static str,
//!     titles: Vec<u16>,
//! }
//!
//! let clubs = Stream::from(vec![
//!     FootballClub { name: "Milan", titles: vec![2011] },
//!     FootballClub { name: "Juventus", titles: vec![2012, 2013, 2014, 2015, 2016] },
//! ]);
//!
//! let titles = clubs.flat_map(|club| club.titles.clone());
//! assert_eq!(titles.to_list(), vec![2011, 2012, 2013, 2014, 2015, 2016]);
//!
//! let names = clubs.map(|club| club.name).sorted(|left, right| left.cmp(right));
//! assert_eq!(names.to_string(), "[Juventus, Milan]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use minifunk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::stream::*;
}

pub mod stream;

pub use stream::{
    Enumerable, InvalidArgumentError, Stream, StreamError, StreamIntoIterator, require,
};

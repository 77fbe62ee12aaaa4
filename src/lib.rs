//! # keylens
//!
//! Composable lenses for immutable Rust data.
//!
//! ## Overview
//!
//! A lens is a getter paired with a non-destructive setter. With lenses a
//! value nested deep inside records, tuples and fixed-size sequences can be
//! read or replaced without writing the copy-and-rebuild code for every
//! layer in between.
//!
//! - [`optics::Lens`]: the get/set contract, plus `update`
//! - [`optics::compose`], [`compose!`]: associative composition
//! - [`over!`]: a lens derived from a key path
//! - `#[derive(Lenses)]`: per-field lenses for structs
//!
//! ## Feature Flags
//!
//! - `derive` (default): the `Lenses` derive macro
//!
//! ## Example
//!
//! ```rust
//! use keylens::prelude::*;
//! use keylens::over;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Child { stuff: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Wrapper { toplevel: String, child: Child }
//!
//! let wrapper = Wrapper {
//!     toplevel: "top".to_string(),
//!     child: Child { stuff: "stuff".to_string() },
//! };
//!
//! let stuff = over!(Wrapper => child, stuff);
//! assert_eq!(stuff.get(&wrapper), "stuff");
//!
//! let updated = stuff.set(wrapper, "new stuff".to_string());
//! assert_eq!(updated.child.stuff, "new stuff");
//! assert_eq!(updated.toplevel, "top");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use keylens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use keylens_derive::Lenses;
}

pub mod optics;

#[cfg(feature = "derive")]
pub use keylens_derive::Lenses;

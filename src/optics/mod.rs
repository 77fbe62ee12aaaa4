//! Lenses for reading and rebuilding immutable nested data.
//!
//! A lens pairs a getter with a setter that returns a new value instead of
//! mutating the old one. Lenses compose: a lens from `Wrapper` to `Child`
//! and a lens from `Child` to `String` make a lens from `Wrapper` to
//! `String`, and writing through it rebuilds only the layers on the path.
//!
//! # Building lenses
//!
//! - by hand: [`FunctionLens::new`] from a getter and a setter;
//! - for a struct field: [`lens!`](crate::lens), or `#[derive(Lenses)]`;
//! - from a key path: [`over!`](crate::over) or [`over_key`];
//! - by composition: [`compose`], [`compose_onto`], [`compose!`](crate::compose)
//!   and, for paths only known at runtime, [`compose_all`];
//! - across an `Option` layer: [`compose_guarded`], or a `field?` step in
//!   [`over!`](crate::over).
//!
//! # Example
//!
//! ```
//! use keylens::optics::{Lens, compose, update};
//! use keylens::{lens, over};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! let by_hand = compose(lens!(Person, address), lens!(Address, street));
//! let by_path = over!(Person => address, street);
//!
//! assert_eq!(by_hand.get(&person), by_path.get(&person));
//!
//! let updated = update(&by_path, |street| street.replace("Main", "Oak"), person.clone());
//! assert_eq!(updated.address.street, "Oak St");
//! assert_eq!(updated.address.city, "Tokyo");
//! assert_eq!(person.address.street, "Main St");
//! ```

mod boxed;
mod compose;
mod guarded;
mod lens;
pub mod over;
mod update;

pub use boxed::BoxedLens;

pub use compose::ComposedLens;
pub use compose::compose;
pub use compose::compose_all;
pub use compose::compose_onto;

pub use guarded::Guarded;
pub use guarded::GuardedPath;
pub use guarded::Optional;
pub use guarded::Total;
pub use guarded::compose_guarded;

pub use lens::FunctionLens;
pub use lens::Lens;

pub use over::KeyLens;
pub use over::Keyed;
pub use over::over_key;

pub use update::BoundUpdate;
pub use update::Updater;
pub use update::update;
pub use update::updater;

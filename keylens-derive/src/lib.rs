//! Derive macro for keylens.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens constructor for every struct field
//!
//! # Example
//!
//! ```rust,ignore
//! use keylens::Lenses;
//! use keylens::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32> + Clone
//! // - Point::y_lens() -> impl Lens<Point, i32> + Clone
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*Point::x_lens().get(&point), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating one lens constructor per struct field.
///
/// # Naming
///
/// - named field `foo` → `foo_lens()`
/// - tuple-struct position `0` → `field_0_lens()`
///
/// # Generated Code
///
/// For each field `foo` of type `T`:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl ::keylens::optics::Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// Each returned lens is a `FunctionLens`, so it composes with every other
/// lens and can be used as a step in longer paths.
///
/// # Generics
///
/// Generic structs get the lens constructors on every instantiation:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(*lens.get(&container), 42);
/// ```
///
/// # Errors
///
/// Enums, unions and unit structs are rejected at compile time.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

//! The lens abstraction: a get/set pair focusing on one part of a larger value.
//!
//! A lens never mutates the structure it is applied to. `set` consumes the old
//! container and hands back a new one in which only the focused part differs;
//! every other field is moved across untouched.
//!
//! # Laws
//!
//! Every lawful lens satisfies:
//!
//! 1. **GetSet**: `lens.get(&lens.set(source, value)) == &value`
//! 2. **SetGet**: `lens.set(source.clone(), lens.get(&source).clone()) == source`
//! 3. **SetSet**: `lens.set(lens.set(source.clone(), v1), v2) == lens.set(source, v2)`
//!
//! The laws are not enforced by construction; whoever writes a
//! [`FunctionLens`] by hand is responsible for a lawful getter/setter pair.
//!
//! # Examples
//!
//! ```
//! use keylens::optics::Lens;
//! use keylens::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use crate::optics::{BoxedLens, ComposedLens, Guarded};

/// A Lens focuses on a single part of a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The focus type
pub trait Lens<S, A> {
    /// Borrows the focused part of `source`.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a new source with the focused part replaced by `value`.
    ///
    /// The source is consumed; pass a clone to keep the original around.
    fn set(&self, source: S, value: A) -> S;

    /// Curried form of [`set`](Lens::set): fixes the new value and returns a
    /// function that writes it into any source.
    ///
    /// # Example
    ///
    /// ```
    /// use keylens::optics::Lens;
    /// use keylens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let reset_x = x_lens.set_to(0);
    ///
    /// assert_eq!(reset_x(Point { x: 5, y: 1 }), Point { x: 0, y: 1 });
    /// assert_eq!(reset_x(Point { x: 9, y: 2 }), Point { x: 0, y: 2 });
    /// ```
    fn set_to(&self, value: A) -> impl Fn(S) -> S
    where
        Self: Sized,
        A: Clone,
    {
        move |source| self.set(source, value.clone())
    }

    /// Applies `function` to the focused part and writes the result back.
    ///
    /// Equivalent to `lens.set(source, function(lens.get(&source).clone()))`.
    ///
    /// # Example
    ///
    /// ```
    /// use keylens::optics::Lens;
    /// use keylens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.update(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn update<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
        A: Clone,
    {
        crate::optics::update(self, function, source)
    }

    /// Like [`update`](Lens::update), but the function only borrows the
    /// current focus, so `A` need not be `Clone`.
    ///
    /// # Example
    ///
    /// ```
    /// use keylens::optics::Lens;
    /// use keylens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, age: u32 }
    ///
    /// let name_lens = lens!(Person, name);
    /// let person = Person { name: "alice".to_string(), age: 30 };
    /// let upper = name_lens.update_ref(person, |name| name.to_uppercase());
    /// assert_eq!(upper.name, "ALICE");
    /// ```
    fn update_ref<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with a lens focusing inside `A`.
    ///
    /// Method form of [`compose`](crate::optics::compose).
    ///
    /// # Example
    ///
    /// ```
    /// use keylens::optics::Lens;
    /// use keylens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(*person_street.get(&person), "Main St");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Lifts this lens to work on a possibly absent source.
    ///
    /// See [`Guarded`].
    fn guarded(self) -> Guarded<Self, S, A>
    where
        Self: Sized,
    {
        Guarded::new(self)
    }

    /// Erases the concrete lens type behind a shared pointer.
    ///
    /// See [`BoxedLens`].
    fn boxed(self) -> BoxedLens<S, A>
    where
        Self: Sized + Send + Sync + 'static,
        S: 'static,
        A: 'static,
    {
        BoxedLens::new(self)
    }
}

impl<S, A, L> Lens<S, A> for &L
where
    L: Lens<S, A> + ?Sized,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (**self).get(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (**self).set(source, value)
    }
}

/// A lens built from a getter and a setter function.
///
/// This is the literal way to construct a lens; the [`lens!`](crate::lens)
/// and [`over!`](crate::over) macros produce `FunctionLens` values too.
///
/// # Example
///
/// ```
/// use keylens::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Creates a lens for a struct field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(GenericType<T>, field_name)
/// lens!(path::to::Type, field_name)
/// ```
///
/// # Example
///
/// ```
/// use keylens::optics::Lens;
/// use keylens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*y_lens.get(&point), 20);
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

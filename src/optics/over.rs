//! Lenses derived from key paths.
//!
//! A key path is an ordered list of steps into a value. Each step is either
//!
//! - a struct field (`name`) or tuple position (`0`, `1`, ...), resolved at
//!   compile time, or
//! - a container key (`[expr]`), resolved through the [`Keyed`] capability.
//!
//! [`over!`](crate::over) turns a key path into a single lens by composing
//! one step lens per key. Every step is type-checked, so a path that does not
//! exist in the type is a compile error rather than a runtime surprise:
//!
//! ```compile_fail
//! use keylens::over;
//!
//! struct Child { stuff: String }
//! struct Wrapper { child: Child }
//!
//! let broken = over!(Wrapper => child, missing);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::optics::{FunctionLens, Lens};

/// An indexable container: something that can lend out the value stored
/// under a key and rebuild itself with that one value replaced.
///
/// Two families implement it:
///
/// - ordered sequences (`[T; N]`, `Vec<T>`) keyed by position; the rebuilt
///   sequence keeps its length and every other element in place;
/// - keyed records (`HashMap`, `BTreeMap`) keyed by their key type; the
///   rebuilt map differs in exactly one entry.
///
/// Paths are assumed to exist. Like `std` indexing, `key_ref` panics on an
/// out-of-range position or a missing map key.
pub trait Keyed<K> {
    /// The type stored under each key.
    type Value;

    /// Borrows the value stored under `key`.
    fn key_ref(&self, key: &K) -> &Self::Value;

    /// Returns this container with the value under `key` replaced.
    #[must_use]
    fn with_key(self, key: &K, value: Self::Value) -> Self;
}

impl<T, const N: usize> Keyed<usize> for [T; N] {
    type Value = T;

    fn key_ref(&self, key: &usize) -> &T {
        &self[*key]
    }

    fn with_key(mut self, key: &usize, value: T) -> Self {
        self[*key] = value;
        self
    }
}

impl<T> Keyed<usize> for Vec<T> {
    type Value = T;

    fn key_ref(&self, key: &usize) -> &T {
        &self[*key]
    }

    fn with_key(mut self, key: &usize, value: T) -> Self {
        self[*key] = value;
        self
    }
}

impl<K, V, H> Keyed<K> for HashMap<K, V, H>
where
    K: Eq + Hash + Clone,
    H: BuildHasher,
{
    type Value = V;

    fn key_ref(&self, key: &K) -> &V {
        &self[key]
    }

    fn with_key(mut self, key: &K, value: V) -> Self {
        self.insert(key.clone(), value);
        self
    }
}

impl<K, V> Keyed<K> for BTreeMap<K, V>
where
    K: Ord + Clone,
{
    type Value = V;

    fn key_ref(&self, key: &K) -> &V {
        &self[key]
    }

    fn with_key(mut self, key: &K, value: V) -> Self {
        self.insert(key.clone(), value);
        self
    }
}

/// The step lens over one key of a [`Keyed`] container.
///
/// # Example
///
/// ```
/// use keylens::optics::{Lens, KeyLens};
///
/// let second = KeyLens::<[&str; 3], usize>::new(1);
/// let names = ["ann", "bob", "cid"];
///
/// assert_eq!(*second.get(&names), "bob");
/// assert_eq!(second.set(names, "bea"), ["ann", "bea", "cid"]);
/// ```
pub struct KeyLens<C, K> {
    key: K,
    _marker: PhantomData<fn(C) -> C>,
}

impl<C, K> KeyLens<C, K> {
    /// Creates a step lens focusing on `key`.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// The key this lens focuses on.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

impl<C, K> Lens<C, C::Value> for KeyLens<C, K>
where
    C: Keyed<K>,
{
    fn get<'a>(&self, source: &'a C) -> &'a C::Value {
        source.key_ref(&self.key)
    }

    fn set(&self, source: C, value: C::Value) -> C {
        source.with_key(&self.key, value)
    }
}

impl<C, K: Clone> Clone for KeyLens<C, K> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<C, K: std::fmt::Debug> std::fmt::Debug for KeyLens<C, K> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("KeyLens")
            .field("key", &self.key)
            .finish()
    }
}

/// Creates the step lens for `key`, with the container type inferred from
/// where the lens is used.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use keylens::optics::{Lens, over_key};
///
/// let scores = BTreeMap::from([("ann", 3), ("bob", 5)]);
/// let bob = over_key("bob");
///
/// assert_eq!(*bob.get(&scores), 5);
/// let updated = bob.update(scores, |score| score * 10);
/// assert_eq!(updated, BTreeMap::from([("ann", 3), ("bob", 50)]));
/// ```
#[must_use]
pub const fn over_key<C, K>(key: K) -> KeyLens<C, K>
where
    C: Keyed<K>,
{
    KeyLens::new(key)
}

/// Builds the field step that follows `previous` in a key path.
///
/// `previous` only pins down the container type `A` so the getter and setter
/// closures can be written without annotations.
#[doc(hidden)]
pub const fn field_after<S, A, B, L, G, St>(
    _previous: &L,
    getter: G,
    setter: St,
) -> FunctionLens<A, B, G, St>
where
    L: Lens<S, A>,
    G: Fn(&A) -> &B,
    St: Fn(A, B) -> A,
{
    FunctionLens::new(getter, setter)
}

/// Builds the container-key step that follows `previous` in a key path.
#[doc(hidden)]
pub const fn key_after<S, A, K, L>(_previous: &L, key: K) -> KeyLens<A, K>
where
    L: Lens<S, A>,
    A: Keyed<K>,
{
    KeyLens::new(key)
}

/// Builds the first field step inside the optional layer focused by `outer`.
#[doc(hidden)]
pub const fn field_inside<S, A, B, L, G, St>(
    _outer: &L,
    getter: G,
    setter: St,
) -> FunctionLens<A, B, G, St>
where
    L: Lens<S, Option<A>>,
    G: Fn(&A) -> &B,
    St: Fn(A, B) -> A,
{
    FunctionLens::new(getter, setter)
}

/// Builds the first container-key step inside the optional layer focused by
/// `outer`.
#[doc(hidden)]
pub const fn key_inside<S, A, K, L>(_outer: &L, key: K) -> KeyLens<A, K>
where
    L: Lens<S, Option<A>>,
    A: Keyed<K>,
{
    KeyLens::new(key)
}

fn whole<A>(value: &A) -> &A {
    value
}

fn replace_whole<A>(_: A, value: A) -> A {
    value
}

/// The lens onto the whole value inside the optional layer focused by
/// `outer`, for paths that end in `field?`.
#[doc(hidden)]
pub fn whole_inside<S, A, L>(_outer: &L) -> FunctionLens<A, A, fn(&A) -> &A, fn(A, A) -> A>
where
    L: Lens<S, Option<A>>,
{
    FunctionLens::new(
        whole::<A> as fn(&A) -> &A,
        replace_whole::<A> as fn(A, A) -> A,
    )
}

/// Derives a lens from a key path.
///
/// # Syntax
///
/// ```text
/// over!(RootType => key1, key2, ..., keyN)
/// ```
///
/// Each key is one of:
///
/// - a field name: `child`
/// - a tuple position: `0`, `1`, ...
/// - a container key in brackets: `[2]`, `["name".to_string()]`
///
/// and may be followed by `?` when the value it reaches is an `Option`.
///
/// Without `?`, a single key returns the step lens itself and more keys
/// compose the step lenses in order, exactly as [`compose!`](crate::compose)
/// would. The result is a [`Lens`].
///
/// A `key?` step makes the rest of the path run inside the `Option`, and the
/// result is a [`GuardedPath`](crate::optics::GuardedPath) implementing
/// [`Optional`](crate::optics::Optional): while that layer is `None`, `set`
/// and `update` return the source unchanged and `get_option` yields `None`.
/// Any number of `?` steps may appear in one path.
///
/// # Example
///
/// ```
/// use keylens::optics::Lens;
/// use keylens::over;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Child1 { stuff: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Child2 { data: i32, child1: Child1 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Wrapper { toplevel: String, child1: Child1, child2: Child2 }
///
/// let wrapper = Wrapper {
///     toplevel: "top".to_string(),
///     child1: Child1 { stuff: "stuff".to_string() },
///     child2: Child2 { data: 123, child1: Child1 { stuff: "other stuff".to_string() } },
/// };
///
/// let data = over!(Wrapper => child2, data);
/// let updated = data.update(wrapper.clone(), |data| data + 1000);
/// assert_eq!(updated.child2.data, 1123);
/// assert_eq!(updated.child1, wrapper.child1);
///
/// let deep = over!((i32, [(char, &str); 2]) => 1, [0], 1);
/// assert_eq!(*deep.get(&(7, [('a', "x"), ('b', "y")])), "x");
/// ```
///
/// Through an optional layer:
///
/// ```
/// use keylens::optics::Optional;
/// use keylens::over;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Engine { power: u32 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Car { engine: Option<Engine> }
///
/// let power = over!(Car => engine?, power);
///
/// let shell = Car { engine: None };
/// assert_eq!(power.get_option(&shell), None);
/// assert_eq!(power.set(shell.clone(), 300), shell);
///
/// let running = Car { engine: Some(Engine { power: 100 }) };
/// assert_eq!(power.update(running, |power| power * 2).engine, Some(Engine { power: 200 }));
/// ```
#[macro_export]
macro_rules! over {
    ($root:ty => $first:tt ? $(, $($rest:tt)*)?) => {{
        let outer = $crate::__over_step!(@root $root, $first);
        $crate::__over_path!(@guard outer; $($($rest)*)?)
    }};
    ($root:ty => $first:tt $(, $($rest:tt)*)?) => {{
        let lens = $crate::__over_step!(@root $root, $first);
        $crate::__over_path!(@chain lens; $($($rest)*)?)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __over_path {
    (@chain $lens:ident;) => {
        $lens
    };
    (@chain $lens:ident; $key:tt ? $(, $($rest:tt)*)?) => {{
        let step = $crate::__over_step!(@after $lens, $key);
        let outer = $crate::optics::compose($lens, step);
        $crate::__over_path!(@guard outer; $($($rest)*)?)
    }};
    (@chain $lens:ident; $key:tt $(, $($rest:tt)*)?) => {{
        let step = $crate::__over_step!(@after $lens, $key);
        let lens = $crate::optics::compose($lens, step);
        $crate::__over_path!(@chain lens; $($($rest)*)?)
    }};
    (@guard $outer:ident;) => {{
        let inner = $crate::optics::over::whole_inside(&$outer);
        $crate::optics::GuardedPath::new($outer, $crate::optics::Total::new(inner))
    }};
    (@guard $outer:ident; $key:tt ? $(, $($rest:tt)*)?) => {{
        let step = $crate::__over_step!(@inside $outer, $key);
        let inner = $crate::__over_path!(@guard step; $($($rest)*)?);
        $crate::optics::GuardedPath::new($outer, inner)
    }};
    (@guard $outer:ident; $key:tt $(, $($rest:tt)*)?) => {{
        let lens = $crate::__over_step!(@inside $outer, $key);
        let inner = $crate::__over_path!(@inner lens; $($($rest)*)?);
        $crate::optics::GuardedPath::new($outer, inner)
    }};
    (@inner $lens:ident;) => {
        $crate::optics::Total::new($lens)
    };
    (@inner $lens:ident; $key:tt ? $(, $($rest:tt)*)?) => {{
        let step = $crate::__over_step!(@after $lens, $key);
        let outer = $crate::optics::compose($lens, step);
        $crate::__over_path!(@guard outer; $($($rest)*)?)
    }};
    (@inner $lens:ident; $key:tt $(, $($rest:tt)*)?) => {{
        let step = $crate::__over_step!(@after $lens, $key);
        let lens = $crate::optics::compose($lens, step);
        $crate::__over_path!(@inner lens; $($($rest)*)?)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __over_step {
    (@root $root:ty, [$key:expr]) => {
        $crate::optics::KeyLens::<$root, _>::new($key)
    };
    (@root $root:ty, $field:tt) => {
        $crate::optics::FunctionLens::new(
            |source: &$root| &source.$field,
            |mut source: $root, value| {
                source.$field = value;
                source
            },
        )
    };
    (@after $previous:ident, [$key:expr]) => {
        $crate::optics::over::key_after(&$previous, $key)
    };
    (@after $previous:ident, $field:tt) => {
        $crate::optics::over::field_after(
            &$previous,
            |source| &source.$field,
            |mut source, value| {
                source.$field = value;
                source
            },
        )
    };
    (@inside $outer:ident, [$key:expr]) => {
        $crate::optics::over::key_inside(&$outer, $key)
    };
    (@inside $outer:ident, $field:tt) => {
        $crate::optics::over::field_inside(
            &$outer,
            |source| &source.$field,
            |mut source, value| {
                source.$field = value;
                source
            },
        )
    };
}

//! Lens composition.
//!
//! Composing `Lens<S, A>` with `Lens<A, B>` gives a `Lens<S, B>` that reads
//! through both layers and, on write, rebuilds only the intermediate value
//! that changed:
//!
//! ```text
//! compose(l1, l2).get = l2.get ∘ l1.get
//! compose(l1, l2).set(c) = update(l1, |b| l2.set(b, c))
//! ```
//!
//! Composition is associative, so `compose!(l1, l2, l3)`,
//! `compose(compose(l1, l2), l3)` and `compose(l1, compose(l2, l3))` all
//! behave identically.
//!
//! Adjacent lenses must agree on the intermediate type; a mismatch does not
//! compile:
//!
//! ```compile_fail
//! use keylens::optics::compose;
//! use keylens::lens;
//!
//! struct Inner { value: i32 }
//! struct Outer { inner: Inner }
//! struct Other { text: String }
//!
//! let broken = compose(lens!(Outer, inner), lens!(Other, text));
//! ```

use std::marker::PhantomData;

use crate::optics::{BoxedLens, Lens, update};

/// A lens made of two lenses applied one after the other.
///
/// # Type Parameters
///
/// - `L1`: The outer lens (`Lens<S, A>`)
/// - `L2`: The inner lens (`Lens<A, B>`)
/// - `A`: The intermediate type
///
/// The intermediate type must be `'static`: `get` hands out a borrow that
/// passes through `&A`, and the lens has no lifetime of its own to tie it to.
/// The outer source and the final focus may still borrow. An intermediate
/// that borrows from a local does not compose:
///
/// ```compile_fail
/// use keylens::optics::{FunctionLens, Lens, compose};
///
/// fn first<A, B>() -> impl Lens<(A, B), A> {
///     FunctionLens::new(|pair: &(A, B)| &pair.0, |(_, b): (A, B), a: A| (a, b))
/// }
///
/// fn word_length(nested: &((&str, u8), u8)) -> usize {
///     compose(first(), first()).get(nested).len()
/// }
/// ```
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn(A) -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }

    /// The outer lens.
    pub const fn first(&self) -> &L1 {
        &self.first
    }

    /// The inner lens.
    pub const fn second(&self) -> &L2 {
        &self.second
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        update(
            &self.first,
            |intermediate| self.second.set(intermediate, value),
            source,
        )
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Composes two lenses end to end.
///
/// # Example
///
/// ```
/// use keylens::optics::{Lens, compose};
/// use keylens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Inner { value: i32 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Outer { inner: Inner }
///
/// let outer_value = compose(lens!(Outer, inner), lens!(Inner, value));
///
/// let data = Outer { inner: Inner { value: 42 } };
/// assert_eq!(*outer_value.get(&data), 42);
/// assert_eq!(outer_value.set(data, 7).inner.value, 7);
/// ```
pub const fn compose<S, A, B, L1, L2>(first: L1, second: L2) -> ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    ComposedLens::new(first, second)
}

/// Curried composition: fixes the inner lens and waits for the lens to put
/// in front of it.
///
/// `compose_onto(l2)(l1)` is the same lens as `compose(l1, l2)`. The returned
/// function can be called any number of times.
///
/// # Example
///
/// ```
/// use keylens::optics::{Lens, compose_onto};
/// use keylens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Inner { value: i32 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Outer { inner: Inner }
///
/// let onto_value = compose_onto(lens!(Inner, value));
/// let outer_value = onto_value(lens!(Outer, inner));
///
/// let data = Outer { inner: Inner { value: 1 } };
/// assert_eq!(outer_value.set(data, 2), Outer { inner: Inner { value: 2 } });
/// ```
pub fn compose_onto<S, A, B, L1, L2>(second: L2) -> impl Fn(L1) -> ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B> + Clone,
{
    move |first| compose(first, second.clone())
}

/// Composes a runtime sequence of endo-lenses, using `head` as the seed of a
/// left fold over `tail`.
///
/// The number of layers is only known at runtime, which is why every lens is
/// a [`BoxedLens<S, S>`]. An empty `tail` returns `head` unchanged.
///
/// # Example
///
/// ```
/// use keylens::optics::{Lens, compose, compose_all, over_key};
/// use keylens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Node { label: &'static str, children: Vec<Node> }
///
/// let leaf = |label| Node { label, children: vec![] };
/// let tree = Node {
///     label: "root",
///     children: vec![leaf("a"), Node { label: "b", children: vec![leaf("b0"), leaf("b1")] }],
/// };
///
/// let child = |index: usize| compose(lens!(Node, children), over_key(index)).boxed();
/// let path = [1, 1];
/// let lens = compose_all(
///     lens!(Node, children).compose(over_key(path[0])).boxed(),
///     path[1..].iter().map(|&index| child(index)),
/// );
///
/// assert_eq!(lens.get(&tree).label, "b1");
/// let relabelled = lens.update(tree, |node| Node { label: "renamed", ..node });
/// assert_eq!(relabelled.children[1].children[1].label, "renamed");
/// assert_eq!(relabelled.children[1].children[0].label, "b0");
/// ```
pub fn compose_all<S, I>(head: BoxedLens<S, S>, tail: I) -> BoxedLens<S, S>
where
    I: IntoIterator<Item = BoxedLens<S, S>>,
    S: Clone + 'static,
{
    tail.into_iter()
        .fold(head, |composed, next| BoxedLens::new(compose(composed, next)))
}

/// Composes lenses left to right.
///
/// - `compose!(l2)` is the curried form, equivalent to
///   [`compose_onto`](crate::optics::compose_onto): it returns a function
///   waiting for the outer lens.
/// - `compose!(l1, l2, ..., ln)` folds from the left:
///   `compose(compose(l1, l2), ...)`. There is no limit on the number of
///   lenses.
///
/// # Example
///
/// ```
/// use keylens::optics::{FunctionLens, Lens};
/// use keylens::compose;
///
/// fn second<A: Clone, B>() -> impl Lens<(A, B), B> + Clone {
///     FunctionLens::new(
///         |pair: &(A, B)| &pair.1,
///         |(first, _): (A, B), value: B| (first, value),
///     )
/// }
///
/// let nested = (1, (2, (3, (4, "bla"))));
/// let deepest = compose!(second(), second(), second(), second());
///
/// assert_eq!(*deepest.get(&nested), "bla");
/// assert_eq!(deepest.set(nested, "bla bla"), (1, (2, (3, (4, "bla bla")))));
///
/// let onto_second = compose!(second::<i32, &str>());
/// let curried = onto_second(second::<i32, (i32, &str)>());
/// assert_eq!(*curried.get(&(1, (2, "x"))), "x");
/// ```
#[macro_export]
macro_rules! compose {
    ($second:expr $(,)?) => {
        $crate::optics::compose_onto($second)
    };
    ($first:expr, $second:expr $(,)?) => {
        $crate::optics::compose($first, $second)
    };
    ($first:expr, $second:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose!($crate::optics::compose($first, $second), $($rest),+)
    };
}

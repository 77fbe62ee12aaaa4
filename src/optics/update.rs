//! The `update` combinator, in applied and curried form.
//!
//! `update(&lens, f, source)` writes `f(lens.get(&source))` back through the
//! lens. [`updater`] offers the same operation one argument at a time:
//!
//! ```text
//! update(&lens, f, source) == updater(&lens).with(f).apply(source)
//! ```
//!
//! Both routes end in the same [`update`] call.

use crate::optics::Lens;

/// Applies `function` to the part of `source` focused by `lens`.
///
/// `source` is consumed and a new value is returned; nothing is mutated in
/// place. The transform is called exactly once.
///
/// # Example
///
/// ```
/// use keylens::optics::update;
/// use keylens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { hits: u32, name: &'static str }
///
/// let bumped = update(&lens!(Counter, hits), |hits| hits + 1, Counter { hits: 1, name: "a" });
/// assert_eq!(bumped, Counter { hits: 2, name: "a" });
/// ```
pub fn update<S, A, L, F>(lens: &L, function: F, source: S) -> S
where
    L: Lens<S, A> + ?Sized,
    F: FnOnce(A) -> A,
    A: Clone,
{
    let current = lens.get(&source).clone();
    lens.set(source, function(current))
}

/// Starts a curried update: `updater(lens).with(f).apply(source)`.
///
/// # Example
///
/// ```
/// use keylens::optics::updater;
/// use keylens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { hits: u32 }
///
/// let hits = updater(lens!(Counter, hits));
/// let double = hits.with(|hits: u32| hits * 2);
///
/// assert_eq!(double.apply(Counter { hits: 3 }), Counter { hits: 6 });
/// assert_eq!(double.apply(Counter { hits: 5 }), Counter { hits: 10 });
/// ```
#[must_use]
pub const fn updater<L>(lens: L) -> Updater<L> {
    Updater { lens }
}

/// A lens waiting for the transform to apply. Created by [`updater`].
#[derive(Clone, Debug)]
pub struct Updater<L> {
    lens: L,
}

impl<L> Updater<L> {
    /// Fixes the transform, yielding a function from source to new source.
    ///
    /// The updater is borrowed, so it can hand out any number of transforms.
    pub const fn with<F>(&self, function: F) -> BoundUpdate<'_, L, F> {
        BoundUpdate {
            lens: &self.lens,
            function,
        }
    }

    /// Gives back the wrapped lens.
    pub fn into_inner(self) -> L {
        self.lens
    }
}

/// A lens paired with a transform. Created by [`Updater::with`].
pub struct BoundUpdate<'l, L, F> {
    lens: &'l L,
    function: F,
}

impl<L, F> BoundUpdate<'_, L, F> {
    /// Runs the update on `source`.
    pub fn apply<S, A>(&self, source: S) -> S
    where
        L: Lens<S, A>,
        F: Fn(A) -> A,
        A: Clone,
    {
        update(self.lens, &self.function, source)
    }

    /// Turns the bound update into a plain function.
    pub fn into_fn<S, A>(self) -> impl Fn(S) -> S
    where
        L: Lens<S, A>,
        F: Fn(A) -> A,
        A: Clone,
    {
        let bound = self;
        move |source| bound.apply(source)
    }
}

impl<L, F: Clone> Clone for BoundUpdate<'_, L, F> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens,
            function: self.function.clone(),
        }
    }
}

impl<L: std::fmt::Debug, F> std::fmt::Debug for BoundUpdate<'_, L, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BoundUpdate")
            .field("lens", self.lens)
            .finish_non_exhaustive()
    }
}

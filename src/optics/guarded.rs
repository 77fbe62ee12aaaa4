//! Lenses across values that may be absent.
//!
//! Absence is `Option`. Two shapes are covered:
//!
//! - [`Guarded`] lifts a whole `Lens<S, A>` to `Option<S>`;
//! - [`GuardedPath`] puts the guard in the middle of a path: an outer lens
//!   onto an `Option<T>` field followed by a lens inside `T`.
//!
//! In both, writing through an absent layer returns the container unchanged
//! and builds nothing, and reading through it yields `None`.
//!
//! ```
//! use keylens::optics::{Optional, compose_guarded};
//! use keylens::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Profile { bio: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, profile: Option<Profile> }
//!
//! let bio = compose_guarded(lens!(User, profile), lens!(Profile, bio));
//!
//! let anonymous = User { name: "ann".to_string(), profile: None };
//! assert_eq!(bio.get_option(&anonymous), None);
//! assert_eq!(bio.set(anonymous.clone(), "hello".to_string()), anonymous);
//!
//! let known = User { name: "bob".to_string(), profile: Some(Profile { bio: String::new() }) };
//! let updated = bio.set(known, "hello".to_string());
//! assert_eq!(updated.profile.map(|profile| profile.bio), Some("hello".to_string()));
//! ```

use std::marker::PhantomData;

use crate::optics::{Lens, update};

/// A lens whose focus may be missing.
///
/// # Laws
///
/// When the focus is present:
///
/// 1. **`GetOptionSet`**: setting back what was read yields the original.
/// 2. **`SetGetOption`**: reading after a set yields the value set.
///
/// When the focus is absent, `set` and `update` return the source unchanged.
pub trait Optional<S, A> {
    /// Borrows the focus, or `None` when a layer on the way is absent.
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Replaces the focus if it is present; otherwise returns `source` as is.
    fn set(&self, source: S, value: A) -> S;

    /// Applies `function` to the focus if it is present. `function` is not
    /// called for an absent focus.
    fn update<F>(&self, source: S, function: F) -> S
    where
        Self: Sized,
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.get_option(&source).cloned() {
            Some(current) => self.set(source, function(current)),
            None => source,
        }
    }
}

/// A lens viewed as an [`Optional`] whose focus is always present.
///
/// Used as the innermost part of a [`GuardedPath`].
#[derive(Clone, Debug)]
pub struct Total<L> {
    lens: L,
}

impl<L> Total<L> {
    /// Wraps `lens`.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }

    /// The wrapped lens.
    pub const fn inner(&self) -> &L {
        &self.lens
    }
}

impl<S, A, L> Optional<S, A> for Total<L>
where
    L: Lens<S, A>,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A> {
        Some(self.lens.get(source))
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }
}

/// A lens onto an optional field, continued inside that field.
///
/// `outer` focuses an `Option<T>`; `inner` focuses inside `T`. The
/// intermediate `T` must be `Clone + 'static`, as with
/// [`ComposedLens`](crate::optics::ComposedLens).
///
/// Paths with several optional layers nest: the `inner` of one
/// `GuardedPath` may itself be a `GuardedPath`. [`over!`](crate::over)
/// builds these from `field?` steps.
pub struct GuardedPath<L1, L2, T> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<fn(T) -> T>,
}

impl<L1, L2, T> GuardedPath<L1, L2, T> {
    /// Joins a lens onto `Option<T>` with an optional focusing inside `T`.
    #[must_use]
    pub const fn new<S>(outer: L1, inner: L2) -> Self
    where
        L1: Lens<S, Option<T>>,
    {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }

    /// The lens onto the optional layer.
    pub const fn outer(&self) -> &L1 {
        &self.outer
    }

    /// The part applied inside the optional layer.
    pub const fn inner(&self) -> &L2 {
        &self.inner
    }
}

impl<S, T, A, L1, L2> Optional<S, A> for GuardedPath<L1, L2, T>
where
    L1: Lens<S, Option<T>>,
    L2: Optional<T, A>,
    T: Clone + 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A> {
        self.outer
            .get(source)
            .as_ref()
            .and_then(|present| self.inner.get_option(present))
    }

    fn set(&self, source: S, value: A) -> S {
        if self.outer.get(&source).is_none() {
            return source;
        }
        update(
            &self.outer,
            |layer: Option<T>| layer.map(|present| self.inner.set(present, value)),
            source,
        )
    }
}

impl<L1: Clone, L2: Clone, T> Clone for GuardedPath<L1, L2, T> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, T> std::fmt::Debug for GuardedPath<L1, L2, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("GuardedPath")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Composes a lens onto an `Option<T>` field with a lens inside `T`.
///
/// Writing or updating while the field is `None` returns the source
/// unchanged; the transform given to `update` is not called.
pub const fn compose_guarded<S, T, A, L1, L2>(
    outer: L1,
    inner: L2,
) -> GuardedPath<L1, Total<L2>, T>
where
    L1: Lens<S, Option<T>>,
    L2: Lens<T, A>,
{
    GuardedPath::new(outer, Total::new(inner))
}

/// A lens lifted over an optional source. Created by
/// [`Lens::guarded`](crate::optics::Lens::guarded).
///
/// # Example
///
/// ```
/// use keylens::optics::Lens;
/// use keylens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Session { user: String }
///
/// let user = lens!(Session, user).guarded();
///
/// let present = Some(Session { user: "ann".to_string() });
/// assert_eq!(user.get(&present).map(String::as_str), Some("ann"));
/// assert_eq!(user.set(present, "bob".to_string()), Some(Session { user: "bob".to_string() }));
///
/// assert_eq!(user.get(&None), None);
/// assert_eq!(user.set(None, "bob".to_string()), None);
/// ```
pub struct Guarded<L, S, A> {
    lens: L,
    _marker: PhantomData<fn(S) -> A>,
}

impl<L, S, A> Guarded<L, S, A>
where
    L: Lens<S, A>,
{
    /// Wraps `lens`.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }

    /// Borrows the focus, or `None` when the source is absent.
    pub fn get<'a>(&self, source: &'a Option<S>) -> Option<&'a A> {
        source.as_ref().map(|present| self.lens.get(present))
    }

    /// Writes `value` into a present source; an absent source comes back
    /// unchanged.
    pub fn set(&self, source: Option<S>, value: A) -> Option<S> {
        source.map(|present| self.lens.set(present, value))
    }

    /// Updates the focus of a present source; `function` is not called for an
    /// absent one.
    pub fn update<F>(&self, source: Option<S>, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        source.map(|present| update(&self.lens, function, present))
    }

    /// The lens being guarded.
    pub const fn inner(&self) -> &L {
        &self.lens
    }
}

impl<L, S, A> Optional<Option<S>, A> for Guarded<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_option<'a>(&self, source: &'a Option<S>) -> Option<&'a A> {
        self.get(source)
    }

    fn set(&self, source: Option<S>, value: A) -> Option<S> {
        Self::set(self, source, value)
    }
}

impl<L: Clone, S, A> Clone for Guarded<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for Guarded<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Guarded")
            .field("lens", &self.lens)
            .finish()
    }
}

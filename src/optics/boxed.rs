//! Type-erased lenses.

use std::sync::Arc;

use crate::optics::Lens;

/// A lens behind a shared, thread-safe pointer.
///
/// Every composition produces a new concrete type, so lenses assembled at
/// runtime (a path whose length comes from data, for instance) need a common
/// type. `BoxedLens<S, A>` is that type. Cloning it only bumps a reference
/// count.
///
/// # Example
///
/// ```
/// use keylens::optics::{BoxedLens, Lens};
/// use keylens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let axes: Vec<BoxedLens<Point, i32>> = vec![lens!(Point, x).boxed(), lens!(Point, y).boxed()];
/// let origin = axes
///     .iter()
///     .fold(Point { x: 3, y: 4 }, |point, axis| axis.set(point, 0));
///
/// assert_eq!(origin, Point { x: 0, y: 0 });
/// ```
pub struct BoxedLens<S, A> {
    inner: Arc<dyn Lens<S, A> + Send + Sync>,
}

impl<S, A> BoxedLens<S, A> {
    /// Erases `lens`.
    pub fn new<L>(lens: L) -> Self
    where
        L: Lens<S, A> + Send + Sync + 'static,
        S: 'static,
        A: 'static,
    {
        Self {
            inner: Arc::new(lens),
        }
    }
}

impl<S, A> Lens<S, A> for BoxedLens<S, A> {
    fn get<'a>(&self, source: &'a S) -> &'a A {
        self.inner.get(source)
    }

    fn set(&self, source: S, value: A) -> S {
        self.inner.set(source, value)
    }
}

impl<S, A> Clone for BoxedLens<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> std::fmt::Debug for BoxedLens<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("BoxedLens").finish_non_exhaustive()
    }
}

//! Property-based tests for the lens laws and the algebra of composition.
//!
//! - **GetSet**: `lens.get(&lens.set(source, value)) == &value`
//! - **SetGet**: `lens.set(source.clone(), lens.get(&source).clone()) == source`
//! - **SetSet**: `lens.set(lens.set(source.clone(), v1), v2) == lens.set(source, v2)`
//!
//! Also checked here: applied and curried update agree, composition is
//! associative, curried composition matches eager composition, and `set`
//! never disturbs the caller's original value.

use std::collections::BTreeMap;

use keylens::optics::{Lens, Optional, compose, compose_onto, over_key, update, updater};
use keylens::{compose, lens, over};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Child1 {
    stuff: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Child2 {
    data: i32,
    child1: Child1,
}

#[derive(Clone, PartialEq, Debug)]
struct Wrapper {
    toplevel: String,
    child1: Child1,
    child2: Child2,
}

fn wrapper_strategy() -> impl Strategy<Value = Wrapper> {
    (".*", ".*", any::<i32>(), ".*").prop_map(|(toplevel, stuff, data, other)| Wrapper {
        toplevel,
        child1: Child1 { stuff },
        child2: Child2 {
            data,
            child1: Child1 { stuff: other },
        },
    })
}

// =============================================================================
// Laws for a single field lens
// =============================================================================

proptest! {
    #[test]
    fn prop_field_get_set_law(wrapper in wrapper_strategy(), value in ".*") {
        let lens = lens!(Wrapper, toplevel);
        let updated = lens.set(wrapper, value.clone());
        prop_assert_eq!(lens.get(&updated), &value);
    }

    #[test]
    fn prop_field_set_get_law(wrapper in wrapper_strategy()) {
        let lens = lens!(Wrapper, toplevel);
        let value = lens.get(&wrapper).clone();
        prop_assert_eq!(lens.set(wrapper.clone(), value), wrapper);
    }

    #[test]
    fn prop_field_set_set_law(wrapper in wrapper_strategy(), first in ".*", second in ".*") {
        let lens = lens!(Wrapper, toplevel);
        let left = lens.set(lens.set(wrapper.clone(), first), second.clone());
        prop_assert_eq!(left, lens.set(wrapper, second));
    }
}

// =============================================================================
// Laws for key-path lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_over_get_set_law(wrapper in wrapper_strategy(), value in any::<i32>()) {
        let lens = over!(Wrapper => child2, data);
        prop_assert_eq!(*lens.get(&lens.set(wrapper, value)), value);
    }

    #[test]
    fn prop_over_set_get_law(wrapper in wrapper_strategy()) {
        let lens = over!(Wrapper => child2, child1, stuff);
        let value = lens.get(&wrapper).clone();
        prop_assert_eq!(lens.set(wrapper.clone(), value), wrapper);
    }

    #[test]
    fn prop_over_set_set_law(wrapper in wrapper_strategy(), first in ".*", second in ".*") {
        let lens = over!(Wrapper => child2, child1, stuff);
        let left = lens.set(lens.set(wrapper.clone(), first), second.clone());
        prop_assert_eq!(left, lens.set(wrapper, second));
    }

    #[test]
    fn prop_array_index_laws(
        values in any::<[i16; 6]>(),
        index in 0usize..6,
        first in any::<i16>(),
        second in any::<i16>()
    ) {
        let lens = over!([i16; 6] => [index]);
        prop_assert_eq!(*lens.get(&lens.set(values, first)), first);
        prop_assert_eq!(lens.set(values, *lens.get(&values)), values);
        prop_assert_eq!(lens.set(lens.set(values, first), second), lens.set(values, second));
    }

    #[test]
    fn prop_map_key_laws(
        map in prop::collection::btree_map(any::<u8>(), any::<i64>(), 1..16),
        value in any::<i64>()
    ) {
        let key = *map.keys().next().expect("map is not empty");
        let lens = over_key::<BTreeMap<u8, i64>, _>(key);
        prop_assert_eq!(*lens.get(&lens.set(map.clone(), value)), value);
        prop_assert_eq!(lens.set(map.clone(), *lens.get(&map)), map);
    }
}

// =============================================================================
// Laws across an optional layer
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Holder {
    child: Option<Child2>,
}

fn holder_strategy() -> impl Strategy<Value = Holder> {
    prop::option::of((any::<i32>(), ".*")).prop_map(|child| Holder {
        child: child.map(|(data, stuff)| Child2 {
            data,
            child1: Child1 { stuff },
        }),
    })
}

proptest! {
    #[test]
    fn prop_optional_laws(holder in holder_strategy(), value in any::<i32>()) {
        let data = over!(Holder => child?, data);

        match data.get_option(&holder).copied() {
            Some(current) => {
                let updated = data.set(holder.clone(), value);
                prop_assert_eq!(data.get_option(&updated), Some(&value));
                prop_assert_eq!(data.set(holder.clone(), current), holder);
            }
            None => {
                prop_assert_eq!(data.set(holder.clone(), value), holder.clone());
                prop_assert_eq!(data.update(holder.clone(), |_| value), holder);
            }
        }
    }
}

// =============================================================================
// Update equivalence
// =============================================================================

proptest! {
    #[test]
    fn prop_applied_and_curried_update_agree(wrapper in wrapper_strategy(), delta in any::<i32>()) {
        let lens = over!(Wrapper => child2, data);
        let shift = move |data: i32| data.wrapping_add(delta);

        let applied = update(&lens, shift, wrapper.clone());
        let curried = updater(&lens).with(shift).apply(wrapper.clone());

        prop_assert_eq!(&applied, &curried);
        prop_assert_eq!(applied, lens.set(wrapper.clone(), lens.get(&wrapper).wrapping_add(delta)));
    }
}

// =============================================================================
// Composition algebra
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_is_associative(wrapper in wrapper_strategy(), value in ".*") {
        let flat = compose!(lens!(Wrapper, child2), lens!(Child2, child1), lens!(Child1, stuff));
        let left = compose(
            compose(lens!(Wrapper, child2), lens!(Child2, child1)),
            lens!(Child1, stuff),
        );
        let right = compose(
            lens!(Wrapper, child2),
            compose(lens!(Child2, child1), lens!(Child1, stuff)),
        );

        prop_assert_eq!(left.get(&wrapper), right.get(&wrapper));
        prop_assert_eq!(flat.get(&wrapper), right.get(&wrapper));

        let expected = flat.set(wrapper.clone(), value.clone());
        prop_assert_eq!(&left.set(wrapper.clone(), value.clone()), &expected);
        prop_assert_eq!(&right.set(wrapper.clone(), value), &expected);

        let reverse = |stuff: String| stuff.chars().rev().collect::<String>();
        prop_assert_eq!(
            left.update(wrapper.clone(), reverse),
            right.update(wrapper, reverse)
        );
    }

    #[test]
    fn prop_curried_compose_matches_eager(wrapper in wrapper_strategy(), value in ".*") {
        let curried = compose_onto(lens!(Child1, stuff))(lens!(Wrapper, child1));
        let eager = compose(lens!(Wrapper, child1), lens!(Child1, stuff));

        prop_assert_eq!(curried.get(&wrapper), eager.get(&wrapper));
        prop_assert_eq!(
            curried.set(wrapper.clone(), value.clone()),
            eager.set(wrapper, value)
        );
    }

    #[test]
    fn prop_set_leaves_caller_copy_untouched(wrapper in wrapper_strategy(), value in any::<i32>()) {
        let snapshot = wrapper.clone();
        let lens = over!(Wrapper => child2, data);
        let updated = lens.set(wrapper.clone(), value);

        prop_assert_eq!(&wrapper, &snapshot);
        prop_assert_eq!(&updated.child1, &wrapper.child1);
        prop_assert_eq!(&updated.toplevel, &wrapper.toplevel);
        prop_assert_eq!(&updated.child2.child1, &wrapper.child2.child1);
    }

    #[test]
    fn prop_sequence_set_preserves_shape(
        values in prop::collection::vec(any::<u32>(), 1..32),
        seed in any::<prop::sample::Index>(),
        value in any::<u32>()
    ) {
        let index = seed.index(values.len());
        let updated = over_key::<Vec<u32>, _>(index).set(values.clone(), value);

        prop_assert_eq!(updated.len(), values.len());
        for (position, (before, after)) in values.iter().zip(&updated).enumerate() {
            if position == index {
                prop_assert_eq!(*after, value);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}

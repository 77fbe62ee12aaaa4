//! Tests for `#[derive(Lenses)]`.
//!
//! Every field gets a constructor returning `impl Lens<Self, Field> + Clone`:
//! `name_lens()` for named fields, `field_N_lens()` for tuple-struct fields.

#![cfg(feature = "derive")]

use keylens::Lenses;
use keylens::compose;
use keylens::optics::{Lens, compose, over_key, update};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Child1 {
    stuff: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Child2 {
    data: i32,
    child1: Child1,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Wrapper {
    toplevel: String,
    child1: Child1,
    child2: Child2,
}

/// Tuple struct
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Rgb(u8, u8, u8);

/// Struct with generic type parameter
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Container<T> {
    value: T,
    label: String,
}

/// Struct holding a fixed-size sequence
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Palette {
    colors: [Rgb; 2],
}

fn wrapper() -> Wrapper {
    Wrapper {
        toplevel: "top".to_string(),
        child1: Child1 {
            stuff: "stuff".to_string(),
        },
        child2: Child2 {
            data: 123,
            child1: Child1 {
                stuff: "other stuff".to_string(),
            },
        },
    }
}

// =============================================================================
// Named fields
// =============================================================================

#[rstest]
fn test_derived_lens_get_and_set() {
    let toplevel = Wrapper::toplevel_lens();
    assert_eq!(toplevel.get(&wrapper()), "top");

    let updated = toplevel.set(wrapper(), "bottom".to_string());
    assert_eq!(updated.toplevel, "bottom");
    assert_eq!(updated.child2, wrapper().child2);
}

#[rstest]
fn test_derived_lenses_compose() {
    let data = compose(Wrapper::child2_lens(), Child2::data_lens());
    let updated = update(&data, |data| data + 1000, wrapper());

    let mut expected = wrapper();
    expected.child2.data = 1123;
    assert_eq!(updated, expected);
}

#[rstest]
fn test_derived_lenses_compose_three_deep() {
    let stuff = compose!(
        Wrapper::child2_lens(),
        Child2::child1_lens(),
        Child1::stuff_lens()
    );
    assert_eq!(stuff.get(&wrapper()), "other stuff");
}

// =============================================================================
// Tuple structs
// =============================================================================

#[rstest]
#[case(Rgb(1, 2, 3), 0, 1)]
#[case(Rgb(1, 2, 3), 1, 2)]
#[case(Rgb(1, 2, 3), 2, 3)]
fn test_tuple_struct_lenses_get(#[case] color: Rgb, #[case] channel: usize, #[case] expected: u8) {
    let value = match channel {
        0 => *Rgb::field_0_lens().get(&color),
        1 => *Rgb::field_1_lens().get(&color),
        _ => *Rgb::field_2_lens().get(&color),
    };
    assert_eq!(value, expected);
}

#[rstest]
fn test_tuple_struct_lens_set() {
    assert_eq!(Rgb::field_1_lens().set(Rgb(1, 2, 3), 200), Rgb(1, 200, 3));
}

#[rstest]
fn test_derived_lens_then_sequence_index() {
    let palette = Palette {
        colors: [Rgb(0, 0, 0), Rgb(255, 255, 255)],
    };
    let second_blue = compose!(
        Palette::colors_lens(),
        over_key(1),
        Rgb::field_2_lens()
    );

    let updated = second_blue.set(palette.clone(), 0);
    assert_eq!(updated.colors, [Rgb(0, 0, 0), Rgb(255, 255, 0)]);
    assert_eq!(palette.colors[1], Rgb(255, 255, 255));
}

// =============================================================================
// Generics
// =============================================================================

#[rstest]
fn test_generic_struct_lens() {
    let container = Container {
        value: 42,
        label: "answer".to_string(),
    };
    let value = Container::<i32>::value_lens();

    assert_eq!(*value.get(&container), 42);
    let updated = value.set(container, 7);
    assert_eq!(updated.value, 7);
    assert_eq!(updated.label, "answer");
}

#[rstest]
fn test_derived_lens_is_clone() {
    let label = Container::<Vec<u8>>::label_lens();
    let copy = label.clone();
    let container = Container {
        value: vec![1],
        label: "a".to_string(),
    };
    assert_eq!(label.get(&container), copy.get(&container));
}

#![allow(clippy::approx_constant)]

mod cases;

use cases::{fibonacci, letters, mixed};
use pretty_assertions::assert_eq;
use unicoll::{
    Dynamic, Fixed, fixed, fold_left, fold_right, fold_right_flipped, hetero, op,
    ops::{Concat, MakePair, Pair},
};

fn minus() -> impl unicoll::BinaryOp<i32, i32, Output = i32> + Copy {
    op::from_fn(|a: i32, b: i32| a - b)
}

#[test]
fn test_minus_left_and_right() {
    let numbers = Dynamic::from(vec![1, 2, 3]);

    assert_eq!(fold_left(minus(), 0, &numbers), -6);
    assert_eq!(fold_right(minus(), 0, &numbers), 2);
    assert_eq!(fold_right_flipped(minus(), 0, &numbers), -6);

    assert_eq!(fold_left(minus(), 0, &fixed![1, 2, 3]), -6);
    assert_eq!(fold_right(minus(), 0, &fixed![1, 2, 3]), 2);
}

#[test]
fn test_concat_dynamic() {
    assert_eq!(fold_left(Concat, String::new(), &letters()), "abcz");
    assert_eq!(fold_right(Concat, String::new(), &letters()), "abcz");
    assert_eq!(fold_right_flipped(Concat, String::new(), &letters()), "zcba");
}

#[test]
fn test_concat_heterogeneous() {
    assert_eq!(fold_left(Concat, "", &mixed()), "!3.14c3");
    assert_eq!(fold_right(Concat, "", &mixed()), "!3.14c3");
    assert_eq!(fold_right_flipped(Concat, "", &mixed()), "3c3.14!");
}

#[test]
fn test_concat_fixed() {
    assert_eq!(fold_left(Concat, "", &fibonacci()), "11235");
    assert_eq!(fold_right(Concat, "", &fibonacci()), "11235");
    assert_eq!(fold_right_flipped(Concat, "", &fibonacci()), "53211");
}

#[test]
fn test_fixed_fold_builds_nested_types() {
    let nested = fold_left(MakePair, 0u8, &hetero!['a', true]);
    assert_eq!(nested, Pair::new(Pair::new(0u8, 'a'), true));
    assert_eq!(nested.to_string(), "<<0,a>,true>");

    let nested = fold_right(MakePair, 0u8, &hetero!['a', true]);
    assert_eq!(nested.to_string(), "<a,<true,0>>");
}

#[test]
fn test_empty_folds_return_initial_value() {
    assert_eq!(fold_left(Concat, String::from("init"), &Dynamic::<char>::new()), "init");
    assert_eq!(fold_right(minus(), 42, &Fixed::<i32, 0>::new([])), 42);
    assert_eq!(fold_right_flipped(MakePair, 'x', &hetero![]), 'x');
}

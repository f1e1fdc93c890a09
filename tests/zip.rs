#![allow(clippy::approx_constant)]

mod cases;

use cases::{fibonacci, letters, mixed};
use pretty_assertions::assert_eq;
use unicoll::{
    Collection, Dynamic, Fixed, OutOfRange, Representation, fixed, hetero, hlist, op, zip,
    zip_uniform,
    ops::{MakePair, Pair, SameTypeEqual},
};

#[test]
fn test_make_pair_dynamic_dynamic() {
    let pairs = zip(MakePair, &letters(), &letters());

    assert_eq!(pairs.size(), 4);
    assert_eq!(pairs.to_string(), "[<a,a>,<b,b>,<c,c>,<z,z>]");
}

#[test]
fn test_make_pair_dynamic_fixed_truncates() {
    let pairs: Dynamic<Pair<char, i32>> = zip(MakePair, &letters(), &fibonacci());

    assert_eq!(pairs.size(), 4);
    assert_eq!(pairs.to_string(), "[<a,1>,<b,1>,<c,2>,<z,3>]");

    let pairs = zip(MakePair, &fibonacci(), &letters());
    assert_eq!(pairs.to_string(), "[<1,a>,<1,b>,<2,c>,<3,z>]");
}

#[test]
fn test_make_pair_fixed_fixed_stays_fixed() {
    let pairs: Fixed<Pair<i32, i32>, 5> = zip(MakePair, &fibonacci(), &fibonacci());

    assert_eq!(pairs.to_string(), "(<1,1>,<1,1>,<2,2>,<3,3>,<5,5>)");
    assert_eq!(*pairs.get::<4>(), Pair::new(5, 5));
}

#[test]
fn test_make_pair_with_heterogeneous() {
    let with_letters = zip(MakePair, &letters(), &mixed());
    assert_eq!(
        with_letters.map(|pairs| pairs.to_string()),
        Ok("<<a,!>,<b,3.14>,<c,c>,<z,3>>".to_string())
    );

    let with_self = zip(MakePair, &mixed(), &mixed());
    assert_eq!(with_self.to_string(), "<<!,!>,<3.14,3.14>,<c,c>,<3,3>>");
    assert_eq!(*with_self.get::<1>(), Pair::new(3.14, 3.14));

    let with_fixed = zip(MakePair, &mixed(), &fibonacci());
    assert_eq!(with_fixed.to_string(), "<<!,1>,<3.14,1>,<c,2>,<3,3>>");
    assert_eq!(with_fixed.size(), 4);
}

#[test]
fn test_same_type_equal_every_pairing() {
    assert_eq!(
        zip(SameTypeEqual, &letters(), &letters()).to_string(),
        "[true,true,true,true]"
    );
    assert_eq!(
        zip(SameTypeEqual, &letters(), &fibonacci()).to_string(),
        "[false,false,false,false]"
    );
    assert_eq!(
        zip(SameTypeEqual, &fibonacci(), &fibonacci()).to_string(),
        "(true,true,true,true,true)"
    );
    assert_eq!(
        zip(SameTypeEqual, &mixed(), &mixed()).to_string(),
        "<true,true,true,true>"
    );
    assert_eq!(
        zip(SameTypeEqual, &fibonacci(), &mixed()).to_string(),
        "<false,false,false,true>"
    );
}

#[test]
fn test_same_type_equal_dynamic_heterogeneous() {
    let same = zip(SameTypeEqual, &letters(), &mixed()).map(|same| same.into_list());
    assert_eq!(same, Ok(hlist![false, false, true, false]));

    let lowered: Result<Fixed<bool, 4>, OutOfRange> = zip_uniform(SameTypeEqual, &letters(), &mixed());
    assert_eq!(lowered, Ok(fixed![false, false, true, false]));

    let flipped: Result<Fixed<bool, 4>, OutOfRange> = zip_uniform(SameTypeEqual, &mixed(), &letters());
    assert_eq!(flipped, Ok(fixed![false, false, true, false]));
}

#[test]
fn test_zip_uniform_representations() {
    let dynamic: Dynamic<bool> = zip_uniform(SameTypeEqual, &letters(), &fibonacci());
    assert_eq!(dynamic.size(), 4);

    let fixed: Fixed<bool, 4> = zip_uniform(SameTypeEqual, &fibonacci(), &mixed());
    assert_eq!(fixed.into_array(), [false, false, false, true]);

    let fixed: Fixed<bool, 4> = zip_uniform(SameTypeEqual, &mixed(), &mixed());
    assert!(fixed.iter().all(|same| *same));
}

#[test]
fn test_shortfall_against_heterogeneous() {
    let short = Dynamic::from(vec!['a', 'b']);

    assert_eq!(
        zip(MakePair, &short, &mixed()).map(|_| ()),
        Err(OutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        zip_uniform(SameTypeEqual, &mixed(), &short),
        Err(OutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn test_zip_length_is_minimum() {
    let plus = || op::from_fn(|a: i32, b: i32| a + b);
    let long = Dynamic::from(vec![1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(zip(plus(), &long, &fibonacci()).size(), 5);
    assert_eq!(zip(plus(), &fixed![1, 2], &fibonacci()).size(), 2);
    assert_eq!(zip(plus(), &hetero![1, 2, 3], &fibonacci()).size(), 3);
    assert_eq!(zip(plus(), &hetero![1], &hetero![1, 2]).size(), 1);
    assert_eq!(zip(plus(), &Dynamic::<i32>::new(), &long).size(), 0);
}

#[test]
fn test_result_representations() {
    fn representation_of<C: Collection>(_: &C) -> Representation {
        C::REPRESENTATION
    }

    assert_eq!(
        representation_of(&zip(MakePair, &letters(), &fibonacci())),
        Representation::Dynamic
    );
    assert_eq!(
        representation_of(&zip(MakePair, &fibonacci(), &fibonacci())),
        Representation::FixedHomogeneous
    );
    assert_eq!(
        representation_of(&zip(MakePair, &fibonacci(), &mixed())),
        Representation::FixedHeterogeneous
    );
}

//! Algebraic laws of the combinators, checked over random inputs.

use std::hash::{BuildHasher, RandomState};

use quickcheck::quickcheck;

use crate::{none_with_reason, some, AnyOptional, Optional, NONE};

fn optional(value: Option<i32>) -> Optional<i32> {
    match value {
        Some(value) => some(value),
        None => none_with_reason("generated"),
    }
}

fn half(x: i32) -> Optional<i32> {
    if x % 2 == 0 {
        some(x / 2)
    } else {
        none_with_reason("odd")
    }
}

fn small(x: i32) -> Optional<i64> {
    if x.unsigned_abs() < 1000 {
        some(i64::from(x) * 3)
    } else {
        none_with_reason("too large")
    }
}

quickcheck! {
    fn map_identity(value: Option<i32>) -> bool {
        let opt = optional(value);
        let mapped = opt.clone().map(|x| x);
        mapped == opt
            && mapped.reason().map(ToString::to_string) == opt.reason().map(ToString::to_string)
    }

    fn and_then_associativity(value: Option<i32>) -> bool {
        let opt = optional(value);
        opt.clone().and_then(half).and_then(small)
            == opt.and_then(|x| half(x).and_then(small))
    }

    fn and_then_some_is_identity(value: Option<i32>) -> bool {
        let opt = optional(value);
        opt.clone().and_then(some) == opt
    }

    fn filter_matches_predicate(value: Option<i32>) -> bool {
        let opt = optional(value);
        let filtered = opt.clone().filter(|x| *x > 0);
        match value {
            Some(x) if x > 0 => filtered == opt,
            _ => filtered.is_none(),
        }
    }

    fn or_round_trip(value: i32, default: i32) -> bool {
        some(value).or(default) == value && crate::none::<i32>().or(default) == default
    }

    fn flatten_collapses_nesting(value: Option<Option<i32>>) -> bool {
        let nested = some(value).flatten();
        match value {
            Some(x) => nested == some(x),
            None => nested.is_none(),
        }
    }

    fn flatten_of_some_is_identity(value: Option<i32>) -> bool {
        let opt = optional(value);
        some(opt.clone()).flatten() == opt
    }

    fn hash_matches_inner_value(value: Option<u64>) -> bool {
        let hasher = RandomState::new();
        match value {
            Some(x) => hasher.hash_one(some(x)) == hasher.hash_one(x),
            None => hasher.hash_one(crate::none::<u64>()) == hasher.hash_one(NONE),
        }
    }

    fn erased_equality_agrees_with_typed(a: Option<i32>, b: Option<i32>) -> bool {
        let (a, b) = (optional(a), optional(b));
        let erased_a: &dyn AnyOptional = &a;
        let erased_b: &dyn AnyOptional = &b;
        (a == b) == (erased_a == erased_b)
    }
}

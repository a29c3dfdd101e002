//! Sequence helpers that report a missing element as an absent optional.

use optvalue_core::{none_with_reason, ArgumentError, Error, OptionExt, Optional};

use crate::reason::SeqReason;

/// Optional-returning element access for anything iterable.
///
/// Every method consumes the sequence. Call them on a reference
/// (`(&items).try_first()`, `items.iter().try_first()`) to borrow instead.
pub trait SeqExt: IntoIterator + Sized {
    /// The first element, or absent with [`SeqReason::CollectionWasEmpty`].
    fn try_first(self) -> Optional<Self::Item> {
        self.into_iter()
            .next()
            .into_optional_because(SeqReason::CollectionWasEmpty)
    }

    /// The first element matching `predicate`, or absent with
    /// [`SeqReason::NoMatchingElement`].
    fn try_first_where<P>(self, predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter()
            .find(predicate)
            .into_optional_because(SeqReason::NoMatchingElement)
    }

    fn try_last(self) -> Optional<Self::Item> {
        self.into_iter()
            .last()
            .into_optional_because(SeqReason::CollectionWasEmpty)
    }

    fn try_last_where<P>(self, predicate: P) -> Optional<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter()
            .filter(predicate)
            .last()
            .into_optional_because(SeqReason::NoMatchingElement)
    }

    /// The element at `index`, or absent with [`SeqReason::IndexNotFound`].
    fn try_element_at(self, index: usize) -> Optional<Self::Item> {
        self.into_iter()
            .nth(index)
            .into_optional_because(SeqReason::IndexNotFound)
    }

    /// The only element of the sequence. An empty sequence is absent with
    /// [`SeqReason::NoMatchingElement`].
    ///
    /// # Errors
    /// Returns [`ArgumentError::MoreThanOneElement`] if there is more than
    /// one element.
    fn try_single(self) -> Result<Optional<Self::Item>, ArgumentError> {
        single(self.into_iter(), SeqReason::NoMatchingElement)
    }

    /// The only element of the sequence, unwrapped.
    ///
    /// # Errors
    /// - [`Error::Argument`] if there is more than one element.
    /// - [`Error::MissingValue`] if the sequence is empty.
    fn single_value(self) -> Result<Self::Item, Error> {
        Ok(self.try_single()?.into_value()?)
    }

    /// The only element matching `predicate`.
    ///
    /// # Errors
    /// Returns [`ArgumentError::MoreThanOneElement`] if more than one
    /// element matches.
    fn try_single_where<P>(self, predicate: P) -> Result<Optional<Self::Item>, ArgumentError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        single(self.into_iter().filter(predicate), SeqReason::NoMatchingElement)
    }

    /// The first present result of `selector`, or absent with
    /// [`SeqReason::NoMatchingElement`]. Stops at the first hit.
    fn try_pick<U, F>(self, mut selector: F) -> Optional<U>
    where
        F: FnMut(Self::Item) -> Optional<U>,
    {
        for item in self {
            let picked = selector(item);
            if picked.has_value() {
                return picked;
            }
        }
        none_with_reason(SeqReason::NoMatchingElement)
    }

    /// Maps every element through `selector`, keeping the present results.
    fn choose<U, F>(self, mut selector: F) -> impl Iterator<Item = U>
    where
        F: FnMut(Self::Item) -> Optional<U>,
    {
        self.into_iter()
            .filter_map(move |item| selector(item).into_option())
    }

    /// Like [`SeqExt::choose`], for selectors yielding many optionals.
    fn choose_many<U, I, F>(self, mut selector: F) -> impl Iterator<Item = U>
    where
        I: IntoIterator<Item = Optional<U>>,
        F: FnMut(Self::Item) -> I,
    {
        self.into_iter().flat_map(move |item| selector(item).flatten_some())
    }
}

impl<I: IntoIterator> SeqExt for I {}

fn single<I: Iterator>(
    mut iter: I,
    why_empty: SeqReason,
) -> Result<Optional<I::Item>, ArgumentError> {
    let Some(first) = iter.next() else {
        return Ok(none_with_reason(why_empty));
    };
    match iter.next() {
        Some(_) => Err(ArgumentError::MoreThanOneElement),
        None => Ok(Optional::some(first)),
    }
}

/// Keeps the present values of a sequence of optionals.
pub trait FlattenSome<T>: IntoIterator<Item = Optional<T>> + Sized {
    fn flatten_some(self) -> impl Iterator<Item = T> {
        self.into_iter().filter_map(Optional::into_option)
    }
}

impl<T, I: IntoIterator<Item = Optional<T>>> FlattenSome<T> for I {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use optvalue_core::{none, some};
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!([1, 2, 3].try_first(), some(1));
        assert_eq!(vec![1, 2, 3].try_last(), some(3));

        let empty = Vec::<i32>::new().try_first();
        assert_eq!(
            empty.reason().unwrap().downcast_ref::<SeqReason>(),
            Some(&SeqReason::CollectionWasEmpty)
        );
        assert_eq!(
            Vec::<i32>::new().try_last().reason().unwrap().to_string(),
            "collection was empty"
        );
    }

    #[test]
    fn predicates() {
        let items = [1, 2, 3, 4];
        assert_eq!(items.iter().try_first_where(|x| **x % 2 == 0), some(&2));
        assert_eq!(items.iter().try_last_where(|x| **x % 2 == 0), some(&4));

        let missing = items.iter().try_first_where(|x| **x > 10);
        assert_eq!(missing.reason().unwrap().to_string(), "no matching element found");
        assert!(items.iter().try_last_where(|x| **x > 10).is_none());
    }

    #[test]
    fn element_at() {
        assert_eq!("abc".chars().try_element_at(1), some('b'));
        let past_end = "abc".chars().try_element_at(3);
        assert_eq!(past_end.reason().unwrap().to_string(), "index not found");
    }

    #[test]
    fn single_element() {
        assert_eq!([7].try_single(), Ok(some(7)));
        assert_eq!([1, 2].try_single(), Err(ArgumentError::MoreThanOneElement));
        let empty = Vec::<u8>::new().try_single().unwrap();
        assert_eq!(
            empty.reason().unwrap().downcast_ref::<SeqReason>(),
            Some(&SeqReason::NoMatchingElement)
        );

        assert_eq!([1, 2, 3].try_single_where(|x| *x == 2), Ok(some(2)));
        assert_eq!(
            [1, 2, 3].try_single_where(|x| *x > 1),
            Err(ArgumentError::MoreThanOneElement)
        );
        let none_match = [1, 2, 3].try_single_where(|x| *x > 5).unwrap();
        assert_eq!(none_match.reason().unwrap().to_string(), "no matching element found");
    }

    #[test]
    fn single_value_unwraps_or_fails() {
        assert_eq!([7].single_value().ok(), Some(7));

        let err = [1, 2].single_value().unwrap_err();
        assert!(matches!(err, Error::Argument(ArgumentError::MoreThanOneElement)));
        assert_eq!(err.to_string(), "invalid argument: expected no more than one element");

        let err = Vec::<u8>::new().single_value().unwrap_err();
        let Error::MissingValue(missing) = &err else {
            panic!("expected a missing value, got {err:?}");
        };
        assert_eq!(
            missing.reason().downcast_ref::<SeqReason>(),
            Some(&SeqReason::NoMatchingElement)
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn pick_stops_at_first_hit() {
        let calls = Cell::new(0);
        let picked = [1, 5, 7, 5].try_pick(|x| {
            calls.set(calls.get() + 1);
            if x == 5 {
                some(x * 10)
            } else {
                none_with_reason("a")
            }
        });
        assert_eq!(picked, some(50));
        assert_eq!(calls.get(), 2);

        let nothing = [1, 2].try_pick(|_| none::<i32>());
        assert_eq!(nothing.reason().unwrap().to_string(), "no matching element found");
        assert!(Vec::<i32>::new().try_pick(some).is_none());
    }

    #[test]
    fn choose_keeps_present_results() {
        let chosen: Vec<_> = [1, 2, 3]
            .choose(|x| if x == 2 { some(x) } else { none() })
            .collect();
        assert_eq!(chosen, vec![2]);

        assert_eq!([1, 2, 3].choose(|_| none::<i32>()).count(), 0);
    }

    #[test]
    fn choose_many_flattens() {
        let chosen: Vec<_> = [1, 2]
            .choose_many(|x| vec![some(x), none(), some(x * 10)])
            .collect();
        assert_eq!(chosen, vec![1, 10, 2, 20]);
    }

    #[test]
    fn flatten_some_drops_absent() {
        let values: Vec<_> = vec![some(1), none(), some(3)].flatten_some().collect();
        assert_eq!(values, vec![1, 3]);
    }

    quickcheck! {
        fn element_at_matches_slice_get(items: Vec<u8>, index: usize) -> bool {
            items.iter().try_element_at(index).into_option() == items.get(index)
        }

        fn first_and_last_match_std(items: Vec<u8>) -> bool {
            items.iter().try_first().into_option() == items.first()
                && items.iter().try_last().into_option() == items.last()
        }
    }
}

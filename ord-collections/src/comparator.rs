use core::cmp::Ordering;

/// A three-way comparison over `T`.
///
/// Only `compare` has to be provided. The predicates are derived from it and
/// carry no logic of their own, so a degenerate `compare` produces equally
/// degenerate predicates. Containers in this crate never compare items
/// directly, they always go through a `Comparator`.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator.
pub trait Comparator<T> {
    fn compare(&self, left: &T, right: &T) -> Ordering;

    fn equal(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }

    fn less_than(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    fn greater_than(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    fn less_than_or_equal(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Greater
    }

    fn greater_than_or_equal(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) != Ordering::Less
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}


/// Orders items by their `PartialOrd` implementation.
///
/// Items that are neither less nor greater than each other (e.g. a NaN
/// against anything) compare as `Equal`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NaturalOrder;

impl<T: PartialOrd> Comparator<T> for NaturalOrder {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        if left < right {
            Ordering::Less
        } else if left > right {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Natural order with the sign flipped.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReverseOrder;

impl<T: PartialOrd> Comparator<T> for ReverseOrder {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        NaturalOrder.compare(left, right).reverse()
    }
}

/// Compares items by a key projected out of each of them.
///
/// The key is not cached: every comparison runs the extractor on both
/// operands.
#[derive(Copy, Clone)]
pub struct Comparing<F, C = NaturalOrder> {
    key_extractor: F,
    key_comparator: C,
}

impl<T, K, F, C> Comparator<T> for Comparing<F, C>
where
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.key_comparator
            .compare(&(self.key_extractor)(left), &(self.key_extractor)(right))
    }
}


pub fn natural_order() -> NaturalOrder {
    NaturalOrder
}

pub fn reverse_order() -> ReverseOrder {
    ReverseOrder
}

/// Orders items by `key_extractor(item)` in natural key order.
///
/// ```
/// use ord_collections::{comparing, Comparator};
///
/// let by_len = comparing(|s: &&str| s.len());
/// assert!(by_len.equal(&"a", &"b"));
/// assert!(by_len.less_than(&"b", &"aa"));
/// ```
pub fn comparing<T, K, F>(key_extractor: F) -> Comparing<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    Comparing {
        key_extractor,
        key_comparator: NaturalOrder,
    }
}

/// Orders items by `key_extractor(item)`, comparing keys with `key_comparator`.
pub fn comparing_with<T, K, F, C>(key_extractor: F, key_comparator: C) -> Comparing<F, C>
where
    F: Fn(&T) -> K,
    C: Comparator<K>,
{
    Comparing {
        key_extractor,
        key_comparator,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Category {
        priority: u32,
    }

    struct Product {
        price: u32,
        category: Category,
    }

    fn products() -> (Product, Product) {
        (
            Product { price: 20, category: Category { priority: 1 } },
            Product { price: 30, category: Category { priority: 2 } },
        )
    }

    #[test]
    fn natural_order_predicates() {
        let cmp = natural_order();

        assert!(cmp.equal(&0, &0));
        assert!(!cmp.equal(&0, &1));

        assert!(cmp.less_than(&1, &2));
        assert!(cmp.less_than(&-1, &2));
        assert!(!cmp.less_than(&10, &2));

        assert!(!cmp.less_than_or_equal(&10, &2));
        assert!(cmp.less_than_or_equal(&1, &1));

        assert!(!cmp.greater_than(&0, &0));
        assert!(cmp.greater_than(&10, &0));

        assert!(cmp.greater_than_or_equal(&10, &0));
        assert!(cmp.greater_than_or_equal(&10, &10));
        assert!(!cmp.greater_than_or_equal(&0, &10));
    }

    #[test]
    fn natural_order_treats_nan_as_equal() {
        assert_eq!(NaturalOrder.compare(&f64::NAN, &1.0), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&0.5, &1.5), Ordering::Less);
    }

    #[test]
    fn reverse_order_flips_sign() {
        let cmp = reverse_order();
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &1), Ordering::Less);
        assert!(cmp.equal(&"a", &"a"));
    }

    #[test]
    fn closure_is_a_comparator() {
        let cmp = |a: &&str, b: &&str| b.cmp(a);
        assert!(!cmp.equal(&"a", &"b"));
        assert!(cmp.greater_than(&"a", &"b"));
        assert!(cmp.equal(&"a", &"a"));
    }

    #[test]
    fn comparing_string_length() {
        let cmp = comparing(|s: &&str| s.len());

        assert!(cmp.equal(&"a", &"b"));
        assert!(!cmp.equal(&"a", &""));
        assert!(cmp.less_than(&"b", &"aa"));
        assert!(!cmp.greater_than_or_equal(&"a", &"aa"));
        assert!(cmp.greater_than_or_equal(&"aa", &"a"));
        assert!(cmp.greater_than_or_equal(&"a", &"a"));
    }

    #[test]
    fn comparing_string_length_reversed() {
        let cmp = comparing_with(|s: &&str| s.len(), reverse_order());

        assert!(cmp.equal(&"a", &"b"));
        assert!(!cmp.less_than(&"b", &"aa"));
        assert!(cmp.greater_than_or_equal(&"a", &"aa"));
        assert!(!cmp.greater_than_or_equal(&"aa", &"a"));
    }

    #[test]
    fn comparing_struct_fields() {
        let (first, second) = products();

        let by_price = comparing(|p: &Product| p.price);
        assert!(!by_price.equal(&first, &second));
        assert!(by_price.less_than_or_equal(&first, &second));
        assert!(!by_price.greater_than_or_equal(&first, &second));

        let by_price_desc = comparing_with(|p: &Product| p.price, reverse_order());
        assert!(by_price_desc.greater_than(&first, &second));
        assert!(!by_price_desc.less_than(&first, &second));

        let by_priority = comparing(|p: &Product| p.category.priority);
        assert!(by_priority.less_than(&first, &second));

        let by_weighted = comparing(|p: &Product| p.price * p.category.priority);
        assert!(by_weighted.less_than(&first, &second));
        assert!(by_weighted.greater_than(&second, &first));
        assert!(!by_weighted.less_than_or_equal(&second, &first));
    }

    #[test]
    fn comparing_runs_extractor_on_every_call() {
        let calls = Cell::new(0);
        let cmp = comparing(|n: &i32| {
            calls.set(calls.get() + 1);
            n * 2
        });

        assert!(cmp.less_than(&1, &2));
        assert!(cmp.greater_than(&3, &2));
        assert_eq!(calls.get(), 4);
    }
}

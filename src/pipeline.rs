//! Collection pipelines: the collectors std iterators leave out
//!
//! Rust's iterator adaptors already cover filtering (`filter`), limiting
//! (`take`), and mapping (`map`). What std leaves out are the *terminal
//! collectors* that structure a stream into something shaped: sorted
//! sequences and grouped maps. [`PipelineExt`] adds them as chainable
//! methods so a whole transformation reads as one pipeline.
//!
//! Everything here is eager: sorting and grouping require seeing the whole
//! input, so these methods collect. Results use `BTreeMap`, which keeps
//! group ordering deterministic and output assertable.
//!
//! # Example
//!
//! The classic shape: group expenses by year, merging each expense's tags
//! into one set per year.
//!
//! ```rust
//! use meander::PipelineExt;
//! use std::collections::{BTreeMap, BTreeSet};
//!
//! struct Expense {
//!     year: u16,
//!     tags: Vec<&'static str>,
//! }
//!
//! let expenses = vec![
//!     Expense { year: 2024, tags: vec!["travel", "work"] },
//!     Expense { year: 2025, tags: vec!["food"] },
//!     Expense { year: 2024, tags: vec!["travel", "family"] },
//! ];
//!
//! let tags_by_year: BTreeMap<u16, BTreeSet<&str>> = expenses
//!     .into_iter()
//!     .grouped_with(|e| e.year, |e| e.tags);
//!
//! assert_eq!(
//!     tags_by_year[&2024],
//!     BTreeSet::from(["family", "travel", "work"]),
//! );
//! assert_eq!(tags_by_year[&2025], BTreeSet::from(["food"]));
//! ```

use std::collections::BTreeMap;

/// Chainable collectors for any iterator.
///
/// Blanket-implemented for every `Iterator`, so the methods are available
/// wherever the trait is in scope.
pub trait PipelineExt: Iterator + Sized {
    /// Collect and sort, yielding the items back as an iterator.
    ///
    /// Returning an iterator (rather than a `Vec`) keeps the pipeline
    /// flowing: sorting can sit in the middle of a chain.
    ///
    /// ```rust
    /// use meander::PipelineExt;
    ///
    /// let top_two: Vec<i32> = vec![3, 1, 4, 1, 5]
    ///     .into_iter()
    ///     .sorted()
    ///     .rev()
    ///     .take(2)
    ///     .collect();
    ///
    /// assert_eq!(top_two, vec![5, 4]);
    /// ```
    fn sorted(self) -> std::vec::IntoIter<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut items: Vec<_> = self.collect();
        items.sort();
        items.into_iter()
    }

    /// Collect and sort by a key function, yielding the items back as an
    /// iterator. The sort is stable: equal keys keep their input order.
    ///
    /// ```rust
    /// use meander::PipelineExt;
    ///
    /// let words: Vec<&str> = vec!["pear", "fig", "apple"]
    ///     .into_iter()
    ///     .sorted_by_key(|w| w.len())
    ///     .collect();
    ///
    /// assert_eq!(words, vec!["fig", "pear", "apple"]);
    /// ```
    fn sorted_by_key<K, F>(self, key: F) -> std::vec::IntoIter<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        let mut items: Vec<_> = self.collect();
        items.sort_by_key(key);
        items.into_iter()
    }

    /// Group items by a key, preserving input order within each group.
    ///
    /// Empty input yields an empty map.
    ///
    /// ```rust
    /// use meander::PipelineExt;
    ///
    /// let by_parity = vec![1, 2, 3, 4, 5].into_iter().grouped_by(|n| n % 2);
    ///
    /// assert_eq!(by_parity[&0], vec![2, 4]);
    /// assert_eq!(by_parity[&1], vec![1, 3, 5]);
    /// ```
    fn grouped_by<K, F>(self, mut key: F) -> BTreeMap<K, Vec<Self::Item>>
    where
        F: FnMut(&Self::Item) -> K,
        K: Ord,
    {
        let mut groups: BTreeMap<K, Vec<Self::Item>> = BTreeMap::new();
        for item in self {
            groups.entry(key(&item)).or_default().push(item);
        }
        groups
    }

    /// Group by a key while merging each item's contribution into a
    /// collection of the caller's choosing.
    ///
    /// `values` maps an item to any number of values; every value lands in
    /// the group's collector, which can be anything `Default + Extend`:
    /// a `Vec` keeps duplicates, a `BTreeSet` merges them away.
    ///
    /// ```rust
    /// use meander::PipelineExt;
    /// use std::collections::{BTreeMap, BTreeSet};
    ///
    /// let initials: BTreeMap<usize, BTreeSet<char>> = vec!["ant", "bee", "asp"]
    ///     .into_iter()
    ///     .grouped_with(|w| w.len(), |w| w.chars().next());
    ///
    /// assert_eq!(initials[&3], BTreeSet::from(['a', 'b']));
    /// ```
    fn grouped_with<K, V, C, KF, VF, I>(self, mut key: KF, mut values: VF) -> BTreeMap<K, C>
    where
        KF: FnMut(&Self::Item) -> K,
        K: Ord,
        VF: FnMut(Self::Item) -> I,
        I: IntoIterator<Item = V>,
        C: Default + Extend<V>,
    {
        let mut groups: BTreeMap<K, C> = BTreeMap::new();
        for item in self {
            let group = groups.entry(key(&item)).or_default();
            group.extend(values(item));
        }
        groups
    }
}

impl<I: Iterator> PipelineExt for I {}

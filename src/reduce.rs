//! The grouped pull protocol (`GetNext`) and the ReduceStage worker pool
//! that drives reducers over it.

use std::cell::Cell;
use std::sync::Mutex;

use log::warn;
use scoped_threadpool::Pool;

use crate::error::MRError;
use crate::mapreducer::MapReduce;
use crate::pair::Pair;

/// The grouped-value pull iterator handed to a reducer.
///
/// Wraps a sorted partition's pairs and a monotonically advancing cursor:
/// the one operation exposing advance-if-matches over the partition's
/// Cursor state, bound at dispatch time. It is created fresh by
/// `run_reduce_stage` for each partition and lives only for that
/// partition's reduce workload, so nothing outside a reduce invocation can
/// ever hold one.
pub struct GetNext<'a> {
    pairs: &'a [Pair],
    cursor: Cell<usize>,
}

impl<'a> GetNext<'a> {
    pub(crate) fn new(pairs: &'a [Pair]) -> GetNext<'a> {
        GetNext {
            pairs: pairs,
            cursor: Cell::new(0),
        }
    }

    /// If the cursor is past the end, `None`. Else compares
    /// `requested_key` to the pair at the cursor byte-wise: equal returns
    /// that pair's value and advances the cursor by one; not equal returns
    /// `None` without advancing.
    ///
    /// A mismatch is the expected signal that a group has ended, so it is
    /// not distinguished here from a reducer misusing the protocol with an
    /// unrelated key; both are handled the same defensive way, by simply
    /// returning `None`.
    pub fn next(&self, requested_key: &str) -> Option<&'a str> {
        let i = self.cursor.get();
        if i >= self.pairs.len() {
            return None;
        }
        if self.pairs[i].key == requested_key {
            self.cursor.set(i + 1);
            Some(self.pairs[i].value.as_str())
        } else {
            None
        }
    }

    fn cursor(&self) -> usize {
        self.cursor.get()
    }

    /// Force-advances the cursor past any pairs still sharing `key`,
    /// starting from the current position. Used by the reduce stage to
    /// abandon a group whose reducer returned an error before draining it,
    /// so the outer walk keeps making progress instead of re-invoking the
    /// reducer on the same key forever.
    fn abandon_group(&self, key: &str) {
        let mut i = self.cursor.get();
        while i < self.pairs.len() && self.pairs[i].key == key {
            i += 1;
        }
        self.cursor.set(i);
    }
}

/// Runs the reduce stage: one worker per partition, walking its sorted
/// pairs and driving `mapreduce.reduce` over each distinct key's group via
/// `GetNext`. Joins all workers before returning; the first user callback
/// error observed across all partitions is surfaced, the rest discarded.
pub(crate) fn run_reduce_stage<MR: MapReduce>(
    pool: &mut Pool,
    mapreduce: &MR,
    partitions: Vec<Vec<Pair>>,
) -> Result<(), MRError> {
    let first_error: Mutex<Option<MRError>> = Mutex::new(None);

    pool.scoped(|scope| {
        for (partition_index, pairs) in partitions.iter().enumerate() {
            let mapreduce = &mapreduce;
            let first_error = &first_error;
            scope.execute(move || {
                let get_next = GetNext::new(pairs);
                let mut i = get_next.cursor();
                while i < pairs.len() {
                    let key = pairs[i].key.as_str();
                    if let Err(e) = mapreduce.reduce(key, &get_next, partition_index) {
                        // The reducer may have errored without draining its group;
                        // force the cursor past it so the outer walk still
                        // terminates instead of re-invoking reduce on `key` forever.
                        get_next.abandon_group(key);
                        let mut guard = first_error.lock().expect("reduce error mutex poisoned");
                        if guard.is_none() {
                            *guard = Some(e);
                        } else {
                            warn!("discarding additional reduce error in partition {}", partition_index);
                        }
                    }
                    i = get_next.cursor();
                }
            });
        }
    });

    match first_error.into_inner().expect("reduce error mutex poisoned") {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(kv: &[(&str, &str)]) -> Vec<Pair> {
        kv.iter().map(|(k, v)| Pair::new(k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn drains_a_single_group() {
        let data = pairs(&[("x", "1"), ("x", "2"), ("x", "3")]);
        let gn = GetNext::new(&data);

        assert_eq!(gn.next("x"), Some("1"));
        assert_eq!(gn.next("x"), Some("2"));
        assert_eq!(gn.next("x"), Some("3"));
        assert_eq!(gn.next("x"), None);
        assert_eq!(gn.cursor(), 3);
    }

    #[test]
    fn mismatched_key_does_not_advance() {
        let data = pairs(&[("a", "1"), ("b", "1")]);
        let gn = GetNext::new(&data);

        assert_eq!(gn.next("b"), None); // cursor is at "a", not "b"
        assert_eq!(gn.cursor(), 0);
        assert_eq!(gn.next("a"), Some("1"));
        assert_eq!(gn.cursor(), 1);
    }

    #[test]
    fn past_end_is_always_none() {
        let data = pairs(&[("a", "1")]);
        let gn = GetNext::new(&data);
        assert_eq!(gn.next("a"), Some("1"));
        assert_eq!(gn.next("a"), None);
        assert_eq!(gn.next("anything"), None);
    }

    #[test]
    fn abandon_group_skips_remaining_ties_without_touching_next_group() {
        let data = pairs(&[("x", "1"), ("x", "2"), ("x", "3"), ("y", "1")]);
        let gn = GetNext::new(&data);

        assert_eq!(gn.next("x"), Some("1"));
        gn.abandon_group("x");
        assert_eq!(gn.cursor(), 3);
        assert_eq!(gn.next("y"), Some("1"));
    }

    #[test]
    fn abandon_group_on_undrained_group_is_a_no_op_past_what_matches() {
        let data = pairs(&[("x", "1")]);
        let gn = GetNext::new(&data);

        // Reducer errored without calling get_next at all.
        gn.abandon_group("x");
        assert_eq!(gn.cursor(), 1);
        assert_eq!(gn.next("x"), None);
    }

    #[test]
    fn outer_walk_visits_each_group_once() {
        let data = pairs(&[
            ("cat", "1"),
            ("mat", "1"),
            ("sat", "1"),
            ("the", "1"),
            ("the", "1"),
        ]);
        let gn = GetNext::new(&data);
        let mut groups = Vec::new();
        let mut i = gn.cursor();
        while i < data.len() {
            let key = data[i].key.clone();
            let mut count = 0;
            while gn.next(&key).is_some() {
                count += 1;
            }
            groups.push((key, count));
            i = gn.cursor();
        }
        assert_eq!(
            groups,
            vec![
                ("cat".to_string(), 1),
                ("mat".to_string(), 1),
                ("sat".to_string(), 1),
                ("the".to_string(), 2),
            ]
        );
    }
}

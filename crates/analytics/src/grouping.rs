use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean of one group produced by [`group_mean`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMean<K> {
    pub key: K,
    pub mean: f64,
    pub count: usize,
}

/// Groups `items` by `key_fn` and averages `value_fn` within each group.
///
/// Groups come back ordered by key, ascending, which is the order the growth
/// aggregator then walks.
pub fn group_mean<T, K, KF, VF>(items: &[T], key_fn: KF, value_fn: VF) -> Vec<GroupMean<K>>
where
    K: Ord,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for item in items {
        let entry = sums.entry(key_fn(item)).or_insert((0.0, 0));
        entry.0 += value_fn(item);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key,
            mean: sum / count as f64,
            count,
        })
        .collect()
}

/// The group means alone, in key order.
pub fn series<K>(groups: &[GroupMean<K>]) -> Vec<f64> {
    groups.iter().map(|g| g.mean).collect()
}

use std::collections::HashMap;
use std::hash::Hash;

/// Value counts, most frequent first.
///
/// Equal counts keep the order in which the values were first seen, so the
/// ranking is the same on every run over the same input.
pub fn rank_by_frequency<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // sort_by is stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Top entry of [`rank_by_frequency`], `None` on empty input.
pub fn most_frequent<K, I>(items: I) -> Option<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    rank_by_frequency(items).into_iter().next()
}

//! Selection and sampling primitives shared by the organism policy and the
//! trainer's breeding step.

use crate::error::{DicetownError, Result};
use rand::Rng;

/// Scale a weight list so the values sum to one. An empty input stays empty;
/// callers guard against an all-zero total before normalizing.
pub fn normalize<K: Clone>(weights: &[(K, f64)]) -> Vec<(K, f64)> {
    let total: f64 = weights.iter().map(|(_, w)| *w).sum();
    weights
        .iter()
        .map(|(item, weight)| (item.clone(), weight / total))
        .collect()
}

/// Roulette-wheel draw: pick one item with probability proportional to its
/// weight. Negative weights count as zero; when every weight is zero the
/// draw falls back to a uniform choice.
pub fn weighted_draw<'a, K, R: Rng>(items: &'a [(K, f64)], rng: &mut R) -> Option<&'a K> {
    if items.is_empty() {
        return None;
    }
    let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return Some(&items[rng.gen_range(0..items.len())].0);
    }

    let mut spin = rng.gen::<f64>() * total;
    for (item, weight) in items {
        spin -= weight.max(0.0);
        if spin <= 0.0 {
            return Some(item);
        }
    }
    // Floating-point slack can leave a sliver of spin unspent.
    items.last().map(|(item, _)| item)
}

/// Draw two distinct indices by weight, without replacement within the
/// pair. Errors when fewer than two entries exist, since breeding requires
/// two distinct parents.
pub fn weighted_pair<R: Rng>(weights: &[f64], rng: &mut R) -> Result<(usize, usize)> {
    if weights.len() < 2 {
        return Err(DicetownError::Population(
            "at least two organisms are required to select parents".to_string(),
        ));
    }
    let items: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
    let first = *weighted_draw(&items, rng).ok_or_else(|| {
        DicetownError::Population("parent selection failed on an empty population".to_string())
    })?;

    let rest: Vec<(usize, f64)> = items.into_iter().filter(|(i, _)| *i != first).collect();
    let second = *weighted_draw(&rest, rng).ok_or_else(|| {
        DicetownError::Population("parent selection failed on an empty population".to_string())
    })?;
    Ok((first, second))
}

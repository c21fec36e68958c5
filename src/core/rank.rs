//! core/rank.rs — Mid-rank transform for rank correlation.

/// Rank a sequence with ties broken by average rank (mid-rank policy).
/// Ranks are 1-based, matching the usual statistical convention.
///
/// Example: [10, 20, 20, 30] → [1.0, 2.5, 2.5, 4.0].
pub fn midranks(xs: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| xs[a].partial_cmp(&xs[b]).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        // Extend j over the run of tied values starting at i.
        let mut j = i + 1;
        while j < n && xs[order[j]] == xs[order[i]] {
            j += 1;
        }
        let avg = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg;
        }
        i = j;
    }
    ranks
}

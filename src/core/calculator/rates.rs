use crate::models::rollup::RateBucket;
use crate::models::session::Session;

pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Every session rate, in input order.
pub fn rate_distribution<'a, I>(sessions: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions.into_iter().map(|s| s.rate).collect()
}

/// Equal-width buckets between the smallest and the largest rate.
///
/// Each bucket is `[lower, upper)` except the last one, which also holds
/// the maximum. Zero bins is treated as one; identical rates yield a single
/// bucket. Empty input gives no buckets.
pub fn rate_histogram(rates: &[f64], bins: usize) -> Vec<RateBucket> {
    let finite: Vec<f64> = rates.iter().copied().filter(|r| r.is_finite()).collect();
    if finite.is_empty() {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![RateBucket {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let bins = bins.max(1);
    let width = (max - min) / bins as f64;

    let mut buckets: Vec<RateBucket> = (0..bins)
        .map(|i| RateBucket {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for r in finite {
        let idx = (((r - min) / width) as usize).min(bins - 1);
        buckets[idx].count += 1;
    }

    buckets
}

//! Rating aggregation — per-target arithmetic means.
//!
//! Ratings are 1–5 integers, so zero doubles as "not rated" in older
//! documents and is skipped alongside absent values. Targets with no
//! qualifying rating are left out of the map entirely, which is how
//! callers tell "no rating yet" apart from any numeric average.

use std::collections::{HashMap, HashSet};

/// Average ratings per target id, rounded to one decimal place.
///
/// `samples` yields `(target_id, rating)` pairs; pairs whose target is
/// not in `targets` or whose rating is `None`/zero are ignored.
pub fn rating_means<'a, I>(targets: &[String], samples: I) -> HashMap<String, f64>
where
    I: IntoIterator<Item = (&'a str, Option<u8>)>,
{
    let wanted: HashSet<&str> = targets.iter().map(String::as_str).collect();
    let mut sums: HashMap<&str, (u32, u32)> = HashMap::new();

    for (target, rating) in samples {
        let Some(rating) = rating.filter(|r| *r > 0) else {
            continue;
        };
        if !wanted.contains(target) {
            continue;
        }
        let entry = sums.entry(target).or_insert((0, 0));
        entry.0 += u32::from(rating);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(target, (sum, count))| {
            let mean = f64::from(sum) / f64::from(count);
            (target.to_string(), (mean * 10.0).round() / 10.0)
        })
        .collect()
}

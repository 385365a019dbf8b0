//! Approximate substring scoring.
//!
//! A pattern is aligned against every substring of the text with edit
//! distance (insertions, deletions, substitutions). An alignment scores
//! `errors / pattern_len` plus a penalty for starting away from the expected
//! location. Lower is better.

use sitefind_core::SearchConfig;

/// Floor for any non-identical match, so only identical strings score zero.
const MIN_SCORE: f64 = 0.001;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LocationPenalty {
    location: usize,
    distance: usize,
    ignore: bool,
}

impl LocationPenalty {
    pub(crate) fn new(config: &SearchConfig) -> Self {
        Self {
            location: config.location,
            distance: config.distance,
            ignore: config.ignore_location,
        }
    }

    /// Whether alignment `a` beats `b`, both as `(errors, start)`: fewer
    /// errors first, then the start nearer the expected location.
    fn prefers(&self, a: (usize, usize), b: (usize, usize)) -> bool {
        if a.0 != b.0 {
            return a.0 < b.0;
        }
        !self.ignore && a.1.abs_diff(self.location) < b.1.abs_diff(self.location)
    }

    fn score(&self, errors: usize, pattern_len: usize, start: usize) -> f64 {
        let accuracy = errors as f64 / pattern_len as f64;
        if self.ignore {
            return accuracy;
        }

        let proximity = start.abs_diff(self.location);
        if self.distance == 0 {
            return if proximity == 0 { accuracy } else { 1.0 };
        }

        accuracy + proximity as f64 / self.distance as f64
    }
}

/// Scores `pattern` against `text`, returning `None` above `threshold`.
pub(crate) fn score(
    pattern: &[char],
    text: &[char],
    threshold: f64,
    penalty: &LocationPenalty,
) -> Option<f64> {
    if pattern.is_empty() || text.is_empty() {
        return None;
    }
    if pattern == text {
        return Some(0.0);
    }

    // Per text end position: (errors, start) of the best alignment of the
    // pattern prefix processed so far. Row 0 matches the empty prefix anywhere.
    let mut prev: Vec<(usize, usize)> = (0..=text.len()).map(|j| (0, j)).collect();
    let mut curr = vec![(0, 0); text.len() + 1];

    for (i, &p) in pattern.iter().enumerate() {
        curr[0] = (i + 1, 0);
        for (j, &t) in text.iter().enumerate() {
            let (diag_errors, diag_start) = prev[j];
            let mut best = (diag_errors + usize::from(p != t), diag_start);

            let (skip_errors, skip_start) = prev[j + 1];
            let skip = (skip_errors + 1, skip_start);
            if penalty.prefers(skip, best) {
                best = skip;
            }

            let (extra_errors, extra_start) = curr[j];
            let extra = (extra_errors + 1, extra_start);
            if penalty.prefers(extra, best) {
                best = extra;
            }

            curr[j + 1] = best;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let best = prev
        .iter()
        .map(|&(errors, start)| penalty.score(errors, pattern.len(), start))
        .fold(f64::INFINITY, f64::min)
        .max(MIN_SCORE);

    (best <= threshold).then_some(best)
}

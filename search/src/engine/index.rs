use super::approx::{self, LocationPenalty};
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32String};
use sitefind_core::{CaseMatching, SearchConfig, SearchDocument};
use std::cmp::Reverse;

/// One searchable field of a document, prepared for both query kinds.
struct Field {
    raw: Vec<char>,
    folded: Vec<char>,
    haystack: Utf32String,
    /// Field weight normalized across all searched fields.
    weight: f64,
    /// Shorter fields count more: `1 / sqrt(word count)`, rounded to 3 places.
    norm: f64,
}

impl Field {
    fn new(text: &str, weight: f64) -> Option<Self> {
        let words = text.split_whitespace().count();
        if words == 0 {
            return None;
        }

        Some(Self {
            raw: text.chars().collect(),
            folded: fold(text),
            haystack: Utf32String::from(text),
            weight,
            norm: ((1.0 / (words as f64).sqrt()) * 1000.0).round() / 1000.0,
        })
    }
}

/// Blank fields are left out.
struct Entry {
    fields: Vec<Field>,
}

impl Entry {
    /// Combined score over matching fields; `None` if no field matches.
    fn fuzzy_score(
        &self,
        pattern: &[char],
        folded: bool,
        threshold: f64,
        penalty: &LocationPenalty,
    ) -> Option<f64> {
        let mut matched = false;
        let mut total = 1.0;

        for field in &self.fields {
            let text = if folded { &field.folded } else { &field.raw };
            if let Some(score) = approx::score(pattern, text, threshold, penalty) {
                matched = true;
                total *= score.max(f64::EPSILON).powf(field.weight * field.norm);
            }
        }

        matched.then_some(total)
    }

    fn subsequence_score(&self, pattern: &Pattern, matcher: &mut Matcher) -> Option<u32> {
        self.fields
            .iter()
            .filter_map(|field| pattern.score(field.haystack.slice(..), matcher))
            .max()
    }
}

/// Field-level index over a fixed document list. Entry `i` is document `i`.
pub(crate) struct Index {
    entries: Vec<Entry>,
}

impl Index {
    pub(crate) fn build(documents: &[SearchDocument], config: &SearchConfig) -> Self {
        let (title_weight, description_weight) = normalized_weights(config);

        let entries = documents
            .iter()
            .map(|doc| {
                let title = Field::new(&doc.title, title_weight);
                let description = doc
                    .description
                    .as_deref()
                    .and_then(|text| Field::new(text, description_weight));
                Entry {
                    fields: title.into_iter().chain(description).collect(),
                }
            })
            .collect();

        Self { entries }
    }

    /// Indices of matching documents, best first, ties in document order.
    pub(crate) fn fuzzy(&self, pattern: &str, config: &SearchConfig) -> Vec<usize> {
        let folded = config.case_matching.folds(pattern);
        let pattern: Vec<char> = if folded {
            fold(pattern)
        } else {
            pattern.chars().collect()
        };
        let penalty = LocationPenalty::new(config);

        let mut hits: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                entry
                    .fuzzy_score(&pattern, folded, config.threshold, &penalty)
                    .map(|score| (idx, score))
            })
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.into_iter().map(|(idx, _)| idx).collect()
    }

    /// Indices of documents with a field containing the pattern as an ordered
    /// subsequence, highest nucleo score first.
    pub(crate) fn subsequence(&self, pattern: &str, config: &SearchConfig) -> Vec<usize> {
        let case_matching = match config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        let pattern = Pattern::parse(pattern, case_matching, normalization);
        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);

        let mut hits: Vec<(usize, u32)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                entry
                    .subsequence_score(&pattern, &mut matcher)
                    .map(|score| (idx, score))
            })
            .collect();

        hits.sort_by_key(|&(_, score)| Reverse(score));
        hits.into_iter().map(|(idx, _)| idx).collect()
    }
}

/// Field weights scaled to sum to 1. Unusable weights (negative, NaN, or
/// summing to zero) fall back to equal weights.
fn normalized_weights(config: &SearchConfig) -> (f64, f64) {
    let title = config.title_weight;
    let description = config.description_weight;
    let total = title + description;
    if title >= 0.0 && description >= 0.0 && total.is_finite() && total > 0.0 {
        (title / total, description / total)
    } else {
        tracing::warn!(title, description, "unusable field weights, using equal weights");
        (0.5, 0.5)
    }
}

fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

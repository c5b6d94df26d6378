//! Free-text search scoring and highlighting
//!
//! The scorer scans a configured field set (or every string-valued
//! top-level field) per record, accumulating a relevance score per field:
//! an exact match outranks any substring match, and substring matches are
//! weighted by how early they occur and how much of the field they cover.
//! Records that never match are dropped. Highlights carry byte offsets of
//! the matched substrings for presentation use only, with no ranking
//! weight.

use crate::core::entity::FieldAccess;
use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Score for an exact field match. Always outranks a substring match,
/// whose score stays within (0, 1].
const EXACT_MATCH_SCORE: f64 = 2.0;

/// Search tuning knobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Fields to scan; empty means every string-valued top-level field
    #[serde(default)]
    pub search_fields: Vec<String>,

    /// Keep only the best N matches after ranking; zero keeps everything
    #[serde(default)]
    pub max_results: usize,
}

/// A free-text search request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub options: SearchOptions,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            options: SearchOptions::default(),
        }
    }

    /// Restrict the scan to the given fields
    pub fn in_fields(query: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            query: query.into(),
            options: SearchOptions {
                search_fields: fields,
                max_results: 0,
            },
        }
    }

    /// A request with a blank query is a no-op for the pipeline
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Byte offsets of one matched substring within a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// Per-field highlight spans, in field scan order
pub type Highlights = IndexMap<String, Vec<HighlightSpan>>;

/// A record wrapped with its relevance score and highlights.
///
/// When no search ran, the score is zero and the highlights are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord<R> {
    pub record: R,
    pub score: f64,
    pub highlights: Highlights,
}

impl<R> ScoredRecord<R> {
    /// Wrap a record that went through no scoring stage
    pub fn unscored(record: R) -> Self {
        Self {
            record,
            score: 0.0,
            highlights: Highlights::new(),
        }
    }
}

/// Non-authoritative counters describing one scoring pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Records the scorer looked at
    pub records_scanned: usize,
    /// Records with a non-zero score, before truncation
    pub records_matched: usize,
    /// Whether `max_results` cut the ranked list short
    pub truncated: bool,
}

/// Score records against a search request.
///
/// Returns matches ordered by score descending (ties keep input order)
/// and the metrics for the pass. Zero-score records are excluded; a
/// positive `max_results` truncates the ranked list.
pub fn score_records<R: FieldAccess>(
    records: Vec<R>,
    request: &SearchRequest,
) -> (Vec<ScoredRecord<R>>, SearchMetrics) {
    let mut metrics = SearchMetrics {
        records_scanned: records.len(),
        ..SearchMetrics::default()
    };

    let mut scored: Vec<ScoredRecord<R>> = records
        .into_iter()
        .filter_map(|record| score_one(record, request))
        .collect();
    metrics.records_matched = scored.len();

    // Stable: equal scores keep their input order
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let max = request.options.max_results;
    if max > 0 && scored.len() > max {
        scored.truncate(max);
        metrics.truncated = true;
    }

    (scored, metrics)
}

fn score_one<R: FieldAccess>(record: R, request: &SearchRequest) -> Option<ScoredRecord<R>> {
    let fields = if request.options.search_fields.is_empty() {
        record.field_names()
    } else {
        request.options.search_fields.clone()
    };

    let mut score = 0.0;
    let mut highlights = Highlights::new();

    for field in &fields {
        let Some(FieldValue::String(text)) = record.field_value(field) else {
            continue;
        };
        if let Some((field_score, span)) = score_field(&text, &request.query) {
            score += field_score;
            highlights.entry(field.clone()).or_default().push(span);
        }
    }

    if score > 0.0 {
        Some(ScoredRecord {
            record,
            score,
            highlights,
        })
    } else {
        None
    }
}

fn score_field(text: &str, query: &str) -> Option<(f64, HighlightSpan)> {
    if text.is_empty() || query.is_empty() {
        return None;
    }
    if text == query {
        return Some((
            EXACT_MATCH_SCORE,
            HighlightSpan {
                start: 0,
                end: text.len(),
            },
        ));
    }

    let (start, end) = find_case_insensitive(text, query)?;
    let position_weight = 1.0 - start as f64 / text.len() as f64;
    let coverage = (end - start) as f64 / text.len() as f64;
    let score = (position_weight + coverage) / 2.0;
    Some((score, HighlightSpan { start, end }))
}

/// Case-insensitive substring search returning byte offsets into the
/// original text, safe across multi-byte characters.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let needle: Vec<char> = needle
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    let hay: Vec<(usize, char)> = haystack
        .char_indices()
        .map(|(i, c)| (i, c.to_lowercase().next().unwrap_or(c)))
        .collect();

    if hay.len() < needle.len() {
        return None;
    }
    for window in 0..=hay.len() - needle.len() {
        let matched = hay[window..window + needle.len()]
            .iter()
            .map(|(_, c)| *c)
            .eq(needle.iter().copied());
        if matched {
            let start = hay[window].0;
            let end = hay
                .get(window + needle.len())
                .map(|(i, _)| *i)
                .unwrap_or(haystack.len());
            return Some((start, end));
        }
    }
    None
}

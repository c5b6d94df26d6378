//! The list pipeline: filter → score → sort → paginate
//!
//! The processor is stateless; every invocation works only on its inputs
//! and call-scoped buffers. Each stage runs only when its request is
//! present, and a construction error in any request aborts the whole call
//! with no partial results.

use crate::core::entity::FieldAccess;
use crate::core::error::ListResult;
use crate::list::filter::{self, FilterRequest};
use crate::list::pagination::{PaginationRequest, PaginationResponse};
use crate::list::search::{
    Highlights, ScoredRecord, SearchMetrics, SearchRequest, score_records,
};
use crate::list::sort::{self, SortRequest};
use tracing::debug;

/// Relevance metadata for one item of the final page
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Relevance score; zero when no search was requested
    pub score: f64,
    /// Matched spans per field; empty when no search was requested
    pub highlights: Highlights,
}

/// The assembled list page
#[derive(Debug, Clone, PartialEq)]
pub struct ListDataResult<R> {
    /// The records of the requested page, in final order
    pub items: Vec<R>,

    /// Pagination metadata computed from the pre-pagination total
    pub pagination: PaginationResponse,

    /// Per-item search metadata, aligned with `items`
    pub hits: Vec<SearchHit>,

    /// Counters from the scoring pass; zeroed when no search ran
    pub metrics: SearchMetrics,
}

/// Stateless orchestrator for list-page processing
pub struct ListProcessor;

impl ListProcessor {
    /// Run the full pipeline over an in-memory record collection.
    ///
    /// Stage order is fixed: filtering narrows the collection, searching
    /// ranks it (or a zero-score wrap keeps it as-is), an explicit sort
    /// overrides relevance order, and pagination slices the final page.
    pub fn process<R: FieldAccess>(
        records: Vec<R>,
        pagination: &PaginationRequest,
        filter_request: Option<&FilterRequest>,
        sort_request: Option<&SortRequest>,
        search_request: Option<&SearchRequest>,
    ) -> ListResult<ListDataResult<R>> {
        if let Some(request) = filter_request {
            request.validate()?;
        }

        let supplied = records.len();
        let filtered: Vec<R> = match filter_request {
            Some(request) => records
                .into_iter()
                .filter(|record| filter::evaluate(record, request))
                .collect(),
            None => records,
        };
        debug!(supplied, retained = filtered.len(), "filter stage done");

        let (mut results, metrics) = match search_request {
            Some(request) if !request.is_empty() => score_records(filtered, request),
            _ => (
                filtered.into_iter().map(ScoredRecord::unscored).collect(),
                SearchMetrics::default(),
            ),
        };

        // An explicit sort wins over relevance order.
        if let Some(request) = sort_request {
            results.sort_by(|a, b| sort::compare(&a.record, &b.record, request));
        }

        let (offset, limit) = pagination.resolve()?;
        let total_items = results.len();
        let response = PaginationResponse::build(pagination, total_items, offset, limit);

        let mut items = Vec::new();
        let mut hits = Vec::new();
        for scored in results.into_iter().skip(offset).take(limit) {
            hits.push(SearchHit {
                score: scored.score,
                highlights: scored.highlights,
            });
            items.push(scored.record);
        }
        debug!(
            total_items,
            page_len = items.len(),
            has_next = response.has_next,
            "list pipeline done"
        );

        Ok(ListDataResult {
            items,
            pagination: response,
            hits,
            metrics,
        })
    }
}

use std::cmp::Reverse;

use serde::Serialize;

use crate::candidates::query::{CandidateQuery, SortMode};
use crate::models::candidate::Candidate;

/// Fields matched by a standard search.
const STANDARD_SEARCH_FIELDS: &[&str] = &["name", "position", "company"];

/// Fields matched when `full_text_search` is on.
const FULL_TEXT_SEARCH_FIELDS: &[&str] = &[
    "name",
    "position",
    "company",
    "job_title",
    "status",
    "action_link",
    "source",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage {
    pub candidates: Vec<Candidate>,
    pub total: usize,
    pub page: u64,
    pub per_page: u32,
    pub total_pages: usize,
}

/// Runs search, filters, sort and pagination over `records`.
///
/// Stages run in that order over a borrowed working set, so `records` is
/// never reordered. Only the selected page is cloned into the result.
pub fn run(records: &[Candidate], query: &CandidateQuery) -> ResultPage {
    let mut working: Vec<&Candidate> = records.iter().collect();

    if let Some(term) = query.search.as_deref().filter(|s| !s.is_empty()) {
        working = search(working, term, query.full_text_search);
    }
    working = apply_filters(working, query);
    sort(&mut working, query.sort);

    paginate(&working, query.page, query.per_page)
}

/// Case-insensitive substring match against the search fields.
/// A missing field reads as `""`.
pub fn search<'a>(
    records: Vec<&'a Candidate>,
    term: &str,
    full_text: bool,
) -> Vec<&'a Candidate> {
    let needle = term.to_lowercase();
    let fields = if full_text {
        FULL_TEXT_SEARCH_FIELDS
    } else {
        STANDARD_SEARCH_FIELDS
    };

    records
        .into_iter()
        .filter(|c| fields.iter().any(|f| c.text_lower(f).contains(&needle)))
        .collect()
}

/// Categorical and boolean filters, combined with AND.
/// A record missing a filtered field never matches that filter.
pub fn apply_filters<'a>(
    records: Vec<&'a Candidate>,
    query: &CandidateQuery,
) -> Vec<&'a Candidate> {
    let sets: [(&str, &[String]); 3] = [
        ("application_type", query.application_type.as_slice()),
        ("job_id", query.job_id.as_slice()),
        ("source", query.source.as_slice()),
    ];
    let flags = [
        ("has_availability", query.has_availability),
        ("has_interviews", query.has_interviews),
    ];

    records
        .into_iter()
        .filter(|c| {
            sets.iter()
                .all(|(field, values)| values.is_empty() || c.is_one_of(field, values))
        })
        .filter(|c| {
            flags.iter().all(|(field, wanted)| match wanted {
                Some(wanted) => c.flag(field) == Some(*wanted),
                None => true,
            })
        })
        .collect()
}

/// Stable sort; ties keep their incoming order in every mode.
pub fn sort(records: &mut [&Candidate], mode: SortMode) {
    match mode {
        SortMode::ActivityDesc => {
            records.sort_by(|a, b| b.text("last_activity").cmp(a.text("last_activity")))
        }
        SortMode::ActivityAsc => {
            records.sort_by(|a, b| a.text("last_activity").cmp(b.text("last_activity")))
        }
        SortMode::NameAsc => records.sort_by_cached_key(|c| c.text_lower("name")),
        SortMode::NameDesc => records.sort_by_cached_key(|c| Reverse(c.text_lower("name"))),
        SortMode::Unsorted => {}
    }
}

/// Slices out one page. A start past the end gives an empty page.
pub fn paginate(records: &[&Candidate], page: u64, per_page: u32) -> ResultPage {
    let total = records.len();
    let size = per_page.max(1) as usize;
    let start = usize::try_from(page.max(1) - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(size);

    let candidates = records
        .iter()
        .skip(start)
        .take(size)
        .map(|c| (*c).clone())
        .collect();

    ResultPage {
        candidates,
        total,
        page,
        per_page,
        total_pages: total.div_ceil(size),
    }
}

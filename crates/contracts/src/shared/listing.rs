//! List-filter-sort pipeline shared by every directory page.
//!
//! A page fetches the whole collection once and then recomputes
//! `search -> filters -> sort -> limit` in memory on every control change.

use crate::domain::common::{visible_only, Resource};
use chrono::{DateTime, NaiveDate};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Number of cards in the homepage "featured" sections
pub const FEATURED_COUNT: usize = 3;

/// Value of a record field as seen by search and filters
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    List(&'a [String]),
    Empty,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        if value.is_empty() {
            FieldValue::Empty
        } else {
            FieldValue::Text(Cow::Borrowed(value))
        }
    }

    pub fn owned(value: String) -> Self {
        if value.is_empty() {
            FieldValue::Empty
        } else {
            FieldValue::Text(Cow::Owned(value))
        }
    }

    /// `term` must already be lower-cased
    fn contains_term(&self, term: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.to_lowercase().contains(term),
            FieldValue::List(items) => items.iter().any(|i| i.to_lowercase().contains(term)),
            FieldValue::Empty => false,
        }
    }

    fn equals(&self, value: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.as_ref() == value,
            FieldValue::List(items) => items.iter().any(|i| i == value),
            FieldValue::Empty => false,
        }
    }

    fn has_all(&self, tags: &BTreeSet<String>) -> bool {
        match self {
            FieldValue::List(items) => tags.iter().all(|t| items.contains(t)),
            FieldValue::Text(text) => tags.iter().all(|t| text.as_ref() == t),
            FieldValue::Empty => false,
        }
    }
}

/// Record types that can go through the pipeline
pub trait Listable {
    /// Fields addressable by search and filters
    type Field: Copy + Eq + fmt::Debug + 'static;
    /// Keys offered in the sort selector
    type SortKey: Copy + Eq + fmt::Debug;

    /// Fixed allow-list of fields the free-text search looks at
    fn search_fields() -> &'static [Self::Field];

    fn field(&self, field: Self::Field) -> FieldValue<'_>;

    /// Ascending comparison by `key`
    fn compare(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// One discrete filter selection
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<F> {
    /// Exact equality; membership for list fields. Empty value means "All".
    Equals(F, String),
    /// Every selected tag must be present on the record
    HasAllTags(F, BTreeSet<String>),
}

impl<F: Copy> Filter<F> {
    pub fn is_active(&self) -> bool {
        match self {
            Filter::Equals(_, value) => !value.is_empty(),
            Filter::HasAllTags(_, tags) => !tags.is_empty(),
        }
    }

    fn accepts<T: Listable<Field = F>>(&self, item: &T) -> bool {
        if !self.is_active() {
            return true;
        }
        match self {
            Filter::Equals(field, value) => item.field(*field).equals(value),
            Filter::HasAllTags(field, tags) => item.field(*field).has_all(tags),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K> SortSpec<K> {
    pub fn asc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

/// Everything the UI controls feed into the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F, K> {
    pub search: String,
    pub filters: Vec<Filter<F>>,
    pub sort: Option<SortSpec<K>>,
    pub limit: Option<usize>,
}

impl<F, K> Default for ListQuery<F, K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort: None,
            limit: None,
        }
    }
}

impl<F, K> ListQuery<F, K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn filter(mut self, filter: Filter<F>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn sort(mut self, spec: SortSpec<K>) -> Self {
        self.sort = Some(spec);
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }
}

/// Case-insensitive substring match against the record's search fields
pub fn matches_search<T: Listable>(item: &T, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    T::search_fields()
        .iter()
        .any(|f| item.field(*f).contains_term(&term))
}

pub fn search<T: Listable + Clone>(items: &[T], term: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_search(*item, term))
        .cloned()
        .collect()
}

pub fn apply_filters<T: Listable + Clone>(items: &[T], filters: &[Filter<T::Field>]) -> Vec<T> {
    items
        .iter()
        .filter(|item| filters.iter().all(|f| f.accepts(*item)))
        .cloned()
        .collect()
}

/// Stable sort; ties keep their fetched order in both directions
pub fn sort_items<T: Listable>(items: &mut [T], spec: SortSpec<T::SortKey>) {
    items.sort_by(|a, b| {
        let cmp = a.compare(b, spec.key);
        match spec.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// Run the whole pipeline: search, filters, sort, then truncate
pub fn apply<T: Listable + Clone>(items: &[T], query: &ListQuery<T::Field, T::SortKey>) -> Vec<T> {
    let mut result: Vec<T> = items
        .iter()
        .filter(|item| matches_search(*item, &query.search))
        .filter(|item| query.filters.iter().all(|f| f.accepts(*item)))
        .cloned()
        .collect();

    if let Some(spec) = query.sort {
        sort_items(&mut result, spec);
    }
    if let Some(limit) = query.limit {
        result.truncate(limit);
    }
    result
}

/// First [`FEATURED_COUNT`] publicly visible records in fetched order
pub fn featured<T: Resource>(items: &[T]) -> Vec<T> {
    let mut visible = visible_only(items);
    visible.truncate(FEATURED_COUNT);
    visible
}

/// Sorted, de-duplicated values of `field` for building filter dropdowns
pub fn distinct_values<T: Listable>(items: &[T], field: T::Field) -> Vec<String> {
    let mut values = BTreeSet::new();
    for item in items {
        match item.field(field) {
            FieldValue::Text(text) => {
                values.insert(text.into_owned());
            }
            FieldValue::List(list) => {
                values.extend(list.iter().filter(|v| !v.is_empty()).cloned());
            }
            FieldValue::Empty => {}
        }
    }
    values.into_iter().collect()
}

// ============================================================================
// Comparators used by Listable impls
// ============================================================================

/// Case-insensitive, falling back to raw text so distinct strings never tie
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Missing numbers count as zero
pub fn compare_number(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(0.0);
    let b = b.unwrap_or(0.0);
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Missing or unparseable dates sort before every real date
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    parse_date(a).cmp(&parse_date(b))
}

/// Accepts `2024-03-15` and full RFC 3339 timestamps
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    value
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Firm {
        name: String,
        kind: String,
        tags: Vec<String>,
        years: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum FirmField {
        Name,
        Kind,
        Tags,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum FirmSort {
        Name,
        Years,
    }

    impl Listable for Firm {
        type Field = FirmField;
        type SortKey = FirmSort;

        fn search_fields() -> &'static [FirmField] {
            &[FirmField::Name, FirmField::Tags]
        }

        fn field(&self, field: FirmField) -> FieldValue<'_> {
            match field {
                FirmField::Name => FieldValue::text(&self.name),
                FirmField::Kind => FieldValue::text(&self.kind),
                FirmField::Tags => FieldValue::List(&self.tags),
            }
        }

        fn compare(&self, other: &Self, key: FirmSort) -> Ordering {
            match key {
                FirmSort::Name => compare_text(&self.name, &other.name),
                FirmSort::Years => compare_number(self.years, other.years),
            }
        }
    }

    fn firm(name: &str, kind: &str, tags: &[&str], years: Option<f64>) -> Firm {
        Firm {
            name: name.to_string(),
            kind: kind.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            years,
        }
    }

    fn sample() -> Vec<Firm> {
        vec![
            firm("Gamma Engineering", "MEP", &["HVAC", "Plumbing"], Some(12.0)),
            firm("alpha consult", "Electrical", &["Electrical"], Some(3.0)),
            firm("Beta Mech", "MEP", &["HVAC"], None),
            firm("Delta Fire", "Fire", &["Fire Protection", "HVAC"], Some(7.0)),
        ]
    }

    fn names(items: &[Firm]) -> Vec<&str> {
        items.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_search_matches_any_allowed_field() {
        let items = sample();
        assert_eq!(names(&search(&items, "ALPHA")), vec!["alpha consult"]);
        // tag field is searched too
        assert_eq!(names(&search(&items, "plumb")), vec!["Gamma Engineering"]);
        // kind is not in the allow-list
        assert!(search(&items, "fire protection").len() == 1);
        assert!(search(&items, "mep").is_empty());
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let items = sample();
        assert_eq!(search(&items, "").len(), items.len());
        assert_eq!(search(&items, "   ").len(), items.len());
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let items = sample();
        assert_eq!(names(&search(&items, "beta ")), vec!["Beta Mech"]);
        assert!(search(&items, "mech ").is_empty());
        assert!(search(&items, " gamma").is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let items = sample();
        for term in ["a", "hvac", "eng", "zzz"] {
            let once = search(&items, term);
            let twice = search(&once, term);
            assert_eq!(once, twice);
            assert!(once.iter().all(|f| matches_search(f, term)));
        }
    }

    #[test]
    fn test_equals_filter_and_all_option() {
        let items = sample();
        let mep = apply_filters(&items, &[Filter::Equals(FirmField::Kind, "MEP".into())]);
        assert_eq!(names(&mep), vec!["Gamma Engineering", "Beta Mech"]);

        let all = apply_filters(&items, &[Filter::Equals(FirmField::Kind, String::new())]);
        assert_eq!(all, items);
    }

    #[test]
    fn test_tag_filter_uses_and_semantics() {
        let items = sample();
        let tags: BTreeSet<String> = ["HVAC".to_string(), "Plumbing".to_string()].into();
        let result = apply_filters(&items, &[Filter::HasAllTags(FirmField::Tags, tags.clone())]);
        assert_eq!(names(&result), vec!["Gamma Engineering"]);
        for item in &result {
            assert!(tags.iter().all(|t| item.tags.contains(t)));
        }
    }

    #[test]
    fn test_empty_tag_set_is_identity() {
        let items = sample();
        let result = apply_filters(&items, &[Filter::HasAllTags(FirmField::Tags, BTreeSet::new())]);
        assert_eq!(result, items);
    }

    #[test]
    fn test_name_sort_desc_reverses_asc() {
        let mut asc = sample();
        let mut desc = sample();
        sort_items(&mut asc, SortSpec::asc(FirmSort::Name));
        sort_items(&mut desc, SortSpec::desc(FirmSort::Name));
        assert_eq!(
            names(&asc),
            vec!["alpha consult", "Beta Mech", "Delta Fire", "Gamma Engineering"]
        );
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(asc, reversed);
    }

    #[test]
    fn test_missing_years_sort_as_zero() {
        let mut items = sample();
        sort_items(&mut items, SortSpec::asc(FirmSort::Years));
        assert_eq!(items[0].name, "Beta Mech");
        assert_eq!(items[3].name, "Gamma Engineering");
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut items = vec![
            firm("First", "", &[], Some(5.0)),
            firm("Second", "", &[], Some(5.0)),
            firm("Third", "", &[], Some(1.0)),
        ];
        sort_items(&mut items, SortSpec::desc(FirmSort::Years));
        assert_eq!(names(&items), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_apply_runs_full_pipeline() {
        let items = sample();
        let query = ListQuery::new()
            .search("h")
            .filter(Filter::Equals(FirmField::Tags, "HVAC".into()))
            .sort(SortSpec::desc(FirmSort::Name))
            .limit(2);
        let result = apply(&items, &query);
        assert_eq!(names(&result), vec!["Gamma Engineering", "Delta Fire"]);
    }

    #[test]
    fn test_distinct_values() {
        let items = sample();
        assert_eq!(
            distinct_values(&items, FirmField::Kind),
            vec!["Electrical", "Fire", "MEP"]
        );
        assert_eq!(
            distinct_values(&items, FirmField::Tags),
            vec!["Electrical", "Fire Protection", "HVAC", "Plumbing"]
        );
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(
            parse_date("2024-03-15T14:02:26.123Z"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(compare_dates("", "2020-01-01"), Ordering::Less);
    }
}

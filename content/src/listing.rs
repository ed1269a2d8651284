//! Client-side search, categorical filters, and pagination over a fully
//! fetched list.
//!
//! DESIGN
//! ======
//! Everything here is synchronous and deterministic. Pages keep the full
//! result set in a [`ListState`] and derive the visible slice on every render;
//! changing any filter resets the page to 1, and the current page is always
//! clamped into range after the item set shrinks.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::status::CanonicalStatus;
use crate::workflow::Moderatable;

/// Rows per page on every list screen.
pub const PAGE_SIZE: usize = 10;

/// Above this many pages the pager truncates.
pub const PAGER_TRUNCATE_AFTER: usize = 10;

/// Leading page buttons rendered before the ellipsis when truncating.
pub const PAGER_LEADING_PAGES: usize = 9;

/// Fields a list page filters on.
pub trait Listable: Moderatable {
    /// Title or name used by the search box.
    fn search_text(&self) -> Cow<'_, str>;

    fn kind(&self) -> Option<&str> {
        None
    }

    fn grade(&self) -> Option<&str> {
        None
    }
}

/// A categorical filter with an "All" sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Choice<T> {
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl Choice<String> {
    /// Build from a select box value where an empty string or `"All"` means all.
    #[must_use]
    pub fn from_select(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => value.is_some_and(|v| v.trim().eq_ignore_ascii_case(wanted)),
        }
    }
}

impl Choice<CanonicalStatus> {
    /// Build from a select box value; unknown text means all.
    #[must_use]
    pub fn from_status_select(value: &str) -> Self {
        value.parse().map_or(Self::All, Self::Only)
    }
}

/// Active search text and filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub kind: Choice<String>,
    pub grade: Choice<String>,
    pub status: Choice<CanonicalStatus>,
}

impl ListQuery {
    /// Whether `item` satisfies every predicate at once.
    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !item.search_text().to_lowercase().contains(&needle) {
            return false;
        }
        if !self.kind.admits(item.kind()) || !self.grade.admits(item.grade()) {
            return false;
        }
        match &self.status {
            Choice::All => true,
            Choice::Only(status) => item.canonical_status() == *status,
        }
    }
}

pub fn filter_items<'a, T: Listable>(items: &'a [T], query: &ListQuery) -> Vec<&'a T> {
    items.iter().filter(|item| query.matches(*item)).collect()
}

/// `ceil(count / page_size)`; zero items means zero pages.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp a 1-indexed page into `[1, max(total_pages, 1)]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Rows on `page` (1-indexed) after clamping.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = clamp_page(page, total_pages(items.len(), page_size));
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// Pager layout: every page up to ten, otherwise the first nine, an ellipsis,
/// and the last page.
#[must_use]
pub fn page_buttons(total_pages: usize) -> Vec<PageButton> {
    if total_pages <= PAGER_TRUNCATE_AFTER {
        return (1..=total_pages).map(PageButton::Page).collect();
    }
    let mut buttons: Vec<PageButton> = (1..=PAGER_LEADING_PAGES).map(PageButton::Page).collect();
    buttons.push(PageButton::Ellipsis);
    buttons.push(PageButton::Page(total_pages));
    buttons
}

/// Sorted distinct non-empty values, for building filter dropdowns.
pub fn distinct_options<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A fetched list plus its filter and pager state.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    query: ListQuery,
    page: usize,
    page_size: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), query: ListQuery::default(), page: 1, page_size: PAGE_SIZE, loading: false, error: None }
    }
}

impl<T: Listable> ListState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self { page_size: page_size.max(1), ..Self::default() }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[must_use]
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the data set, keeping filters and clamping the page.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.page = clamp_page(self.page, self.total_pages());
    }

    pub fn set_search(&mut self, search: &str) {
        search.clone_into(&mut self.query.search);
        self.page = 1;
    }

    pub fn set_kind(&mut self, kind: Choice<String>) {
        self.query.kind = kind;
        self.page = 1;
    }

    pub fn set_grade(&mut self, grade: Choice<String>) {
        self.query.grade = grade;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Choice<CanonicalStatus>) {
        self.query.status = status;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&T> {
        filter_items(&self.items, &self.query)
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.items.iter().filter(|item| self.query.matches(*item)).count()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page_size)
    }

    /// Rows on the current page.
    #[must_use]
    pub fn visible(&self) -> Vec<T> {
        let filtered = self.filtered();
        page_slice(&filtered, self.page, self.page_size).iter().map(|item| (*item).clone()).collect()
    }

    #[must_use]
    pub fn page_buttons(&self) -> Vec<PageButton> {
        page_buttons(self.total_pages())
    }

    /// "Showing 11–20 of 25" bounds; `(0, 0, 0)` when nothing matches.
    #[must_use]
    pub fn showing_range(&self) -> (usize, usize, usize) {
        let total = self.filtered_count();
        if total == 0 {
            return (0, 0, 0);
        }
        let page = clamp_page(self.page, self.total_pages());
        let start = (page - 1) * self.page_size + 1;
        let end = (page * self.page_size).min(total);
        (start, end, total)
    }

    #[must_use]
    pub fn kind_options(&self) -> Vec<String> {
        distinct_options(self.items.iter().map(Listable::kind))
    }

    #[must_use]
    pub fn grade_options(&self) -> Vec<String> {
        distinct_options(self.items.iter().map(Listable::grade))
    }

    /// Count of rows per canonical status across the unfiltered list.
    #[must_use]
    pub fn status_count(&self, status: CanonicalStatus) -> usize {
        self.items.iter().filter(|item| item.canonical_status() == status).count()
    }
}

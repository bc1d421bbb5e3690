//! Blog Index and Reader State
//!
//! The index is fetched once and kept newest first. The reader tracks
//! list/detail display and discards responses from superseded opens.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

use crate::error::SiteError;
use crate::fetch;
use crate::models::{BlogEntry, BlogIndexDocument, BlogPost};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y"];

// ========================
// Index
// ========================

/// Blog summaries sorted by date, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogIndex {
    entries: Vec<BlogEntry>,
}

impl BlogIndex {
    /// Fetch the index; failures are logged and leave the index empty
    pub async fn load(path: &str) -> Self {
        match fetch::fetch_json::<BlogIndexDocument>(path).await {
            Ok(doc) => {
                log::info!("Loaded {} blog entries", doc.blogs.len());
                Self::from_entries(doc.blogs)
            }
            Err(err) => {
                log::error!("Error loading blogs: {}", err);
                Self::default()
            }
        }
    }

    pub fn from_entries(mut entries: Vec<BlogEntry>) -> Self {
        sort_newest_first(&mut entries);
        Self { entries }
    }

    pub fn list(&self) -> &[BlogEntry] {
        &self.entries
    }

}

/// Stable sort by date descending. Unparseable dates go last in their
/// original order.
fn sort_newest_first(entries: &mut [BlogEntry]) {
    entries.sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Parse the date formats blog authors actually write
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

// ========================
// Reader
// ========================

/// Identifies one blog open; only the latest token may update the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ReaderView {
    /// Blog list shown, detail hidden
    List,
    /// Post requested, list hidden
    Loading,
    Post(BlogPost),
    /// Fetch failed; detail shows an error with a back control
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogReader {
    view: ReaderView,
    latest: u64,
}

impl Default for BlogReader {
    fn default() -> Self {
        Self {
            view: ReaderView::List,
            latest: 0,
        }
    }
}

impl BlogReader {
    pub fn view(&self) -> &ReaderView {
        &self.view
    }

    pub fn list_visible(&self) -> bool {
        self.view == ReaderView::List
    }

    pub fn detail_visible(&self) -> bool {
        !self.list_visible()
    }

    /// Start a new open, superseding any request still in flight
    pub fn begin(&mut self) -> FetchToken {
        self.latest += 1;
        self.view = ReaderView::Loading;
        FetchToken(self.latest)
    }

    /// Apply a fetch result. Returns `false` when the token is stale and the
    /// result was dropped.
    pub fn finish(&mut self, token: FetchToken, result: Result<BlogPost, SiteError>) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.view = match result {
            Ok(post) => ReaderView::Post(post),
            Err(_) => ReaderView::Failed,
        };
        true
    }

    /// Return to the list; a pending fetch is invalidated
    pub fn back(&mut self) {
        self.latest += 1;
        self.view = ReaderView::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, date: &str) -> BlogEntry {
        BlogEntry {
            title: title.to_string(),
            date: date.to_string(),
            summary: String::new(),
            tags: vec![],
            image: String::new(),
            file: format!("blogs/{}.json", title),
        }
    }

    fn post(title: &str) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            date: "2024-01-01".to_string(),
            content: "<p>hi</p>".to_string(),
        }
    }

    fn titles(index: &BlogIndex) -> Vec<&str> {
        index.list().iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let index = BlogIndex::from_entries(vec![entry("old", "2024-01-01"), entry("new", "2024-06-01")]);
        assert_eq!(titles(&index), vec!["new", "old"]);
    }

    #[test]
    fn test_equal_dates_keep_original_order() {
        let index = BlogIndex::from_entries(vec![
            entry("a", "2024-03-01"),
            entry("b", "2024-05-01"),
            entry("c", "2024-03-01"),
            entry("d", "March 1, 2024"),
        ]);
        assert_eq!(titles(&index), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let index = BlogIndex::from_entries(vec![
            entry("x", "someday"),
            entry("a", "2023-01-01"),
            entry("y", ""),
            entry("b", "2024-01-01"),
        ]);
        assert_eq!(titles(&index), vec!["b", "a", "x", "y"]);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(0, 0, 0);
        assert_eq!(parse_date("2024-06-01"), expected);
        assert_eq!(parse_date("June 1, 2024"), expected);
        assert_eq!(parse_date("Jun 1, 2024"), expected);
        assert_eq!(parse_date("1 June 2024"), expected);
        assert_eq!(parse_date("2024-06-01T00:00:00Z"), expected);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_reader_open_success_and_back() {
        let mut reader = BlogReader::default();
        assert!(reader.list_visible());

        let token = reader.begin();
        assert!(reader.detail_visible());
        assert!(reader.finish(token, Ok(post("first"))));
        assert_eq!(reader.view(), &ReaderView::Post(post("first")));

        reader.back();
        assert!(reader.list_visible());
        assert!(!reader.detail_visible());
    }

    #[test]
    fn test_reader_failure_shows_error_view() {
        let mut reader = BlogReader::default();
        let token = reader.begin();
        let err = SiteError::Fetch {
            path: "blogs/x.json".to_string(),
            reason: "HTTP 404".to_string(),
        };
        assert!(reader.finish(token, Err(err)));
        assert_eq!(reader.view(), &ReaderView::Failed);
        assert!(reader.detail_visible());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut reader = BlogReader::default();
        let first = reader.begin();
        let second = reader.begin();

        assert!(reader.finish(second, Ok(post("second"))));
        assert!(!reader.finish(first, Ok(post("first"))));
        assert_eq!(reader.view(), &ReaderView::Post(post("second")));
    }

    #[test]
    fn test_back_invalidates_pending_fetch() {
        let mut reader = BlogReader::default();
        let token = reader.begin();
        reader.back();
        assert!(!reader.finish(token, Ok(post("late"))));
        assert!(reader.list_visible());
    }
}

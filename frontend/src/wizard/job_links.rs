//! Editable list of job posting links.

use crate::INITIAL_JOB_LINKS;

/// Result of an index-addressed edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListEdit {
    Applied,
    Rejected(IndexOutOfRange),
}

impl ListEdit {
    pub fn is_applied(self) -> bool {
        matches!(self, ListEdit::Applied)
    }
}

/// The addressed entry does not exist; the list was left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Ordered free-text entries. Links are not validated; empty entries are allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobLinkList {
    entries: Vec<String>,
}

impl JobLinkList {
    pub fn new() -> Self {
        Self::with_blank(INITIAL_JOB_LINKS)
    }

    pub fn with_blank(count: usize) -> Self {
        Self {
            entries: vec![String::new(); count],
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-blank entries, trimmed, in list order.
    pub fn filled(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .collect()
    }

    pub fn set_entry(&mut self, index: usize, value: impl Into<String>) -> ListEdit {
        let len = self.entries.len();
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                ListEdit::Applied
            }
            None => ListEdit::Rejected(IndexOutOfRange { index, len }),
        }
    }

    pub fn add_entry(&mut self) {
        self.entries.push(String::new());
    }

    /// Remove one entry, shifting later ones left. The list may become empty.
    pub fn remove_entry(&mut self, index: usize) -> ListEdit {
        if index >= self.entries.len() {
            return ListEdit::Rejected(IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);
        ListEdit::Applied
    }
}

impl Default for JobLinkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_three_blank_entries() {
        let links = JobLinkList::new();
        assert_eq!(links.entries(), ["", "", ""]);
        assert!(links.filled().is_empty());
    }

    #[test]
    fn each_mount_gets_a_fresh_list() {
        let mut first = JobLinkList::new();
        first.set_entry(0, "http://jobs.example/1");
        first.add_entry();

        let remounted = JobLinkList::new();
        assert_eq!(remounted.entries(), ["", "", ""]);
    }

    #[test]
    fn set_then_add_appends_blank() {
        let mut links = JobLinkList::new();
        assert!(links.set_entry(1, "http://x").is_applied());
        links.add_entry();
        assert_eq!(links.entries(), ["", "http://x", "", ""]);
    }

    #[test]
    fn set_out_of_range_is_rejected_without_change() {
        let mut links = JobLinkList::new();
        let before = links.clone();
        assert_eq!(
            links.set_entry(3, "http://x"),
            ListEdit::Rejected(IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(links, before);
    }

    #[test]
    fn add_then_remove_last_restores_list() {
        let mut links = JobLinkList::new();
        links.set_entry(0, "https://jobs.example.com/1");
        let before = links.clone();

        links.add_entry();
        let last = links.len() - 1;
        assert!(links.remove_entry(last).is_applied());
        assert_eq!(links, before);
    }

    #[test]
    fn remove_shifts_later_entries_left() {
        let mut links = JobLinkList::new();
        links.set_entry(0, "a");
        links.set_entry(1, "b");
        links.set_entry(2, "c");

        links.remove_entry(0);
        assert_eq!(links.entries(), ["b", "c"]);
    }

    #[test]
    fn list_may_become_empty() {
        let mut links = JobLinkList::with_blank(1);
        assert!(links.remove_entry(0).is_applied());
        assert!(links.is_empty());
        assert!(!links.remove_entry(0).is_applied());
    }

    #[test]
    fn filled_skips_blank_entries() {
        let mut links = JobLinkList::new();
        links.set_entry(1, "  https://jobs.example.com/2 ");
        assert_eq!(links.filled(), vec!["https://jobs.example.com/2"]);
    }
}

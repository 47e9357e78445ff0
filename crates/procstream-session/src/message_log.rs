//! Ordered, append-only log of the lines shown for one session.

/// Lines in arrival order. Cleared only when a new session starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut log = MessageLog::new();
        log.push("b");
        log.push("a");
        log.push("c");
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(log.last(), Some("c"));
    }

    #[test]
    fn clear_empties_log() {
        let mut log = MessageLog::new();
        log.push("x");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.last(), None);
    }

    #[test]
    fn entries_are_stored_verbatim() {
        let mut log = MessageLog::new();
        log.push("  padded\twith tabs  ");
        log.push("");
        assert_eq!(log.as_slice(), &["  padded\twith tabs  ".to_string(), String::new()]);
    }
}

//! Searchable list with a drill-down selection.
//!
//! Both the city walls and the city chats are "pick an item from a filtered
//! list, then show its detail". [`Browser`] owns the list, the query, the
//! highlight cursor and the selection; the match predicate is supplied by the
//! caller and the detail renderer lives in the UI layer.

/// Predicate deciding whether an item matches a search query
pub type MatchFn<T> = fn(&T, &str) -> bool;

/// A fixed list of items with a search query, a highlight and a selection
#[derive(Debug, Clone)]
pub struct Browser<T> {
    items: Vec<T>,
    query: String,
    /// Cursor into the filtered list
    highlight: usize,
    /// Index into `items`
    selected: Option<usize>,
    matches: MatchFn<T>,
}

impl<T> Browser<T> {
    /// Create a browser over `items` using `matches` for the search
    pub fn new(items: Vec<T>, matches: MatchFn<T>) -> Self {
        Self {
            items,
            query: String::new(),
            highlight: 0,
            selected: None,
            matches,
        }
    }

    /// All items, unfiltered
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.highlight = 0;
    }

    /// Append a character to the query
    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.highlight = 0;
    }

    /// Remove the last character of the query
    pub fn pop_query(&mut self) {
        self.query.pop();
        self.highlight = 0;
    }

    /// Clear the query
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Indices (into [`Self::items`]) of the items matching the query, in list order
    pub fn filtered_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| (self.matches)(item, &self.query))
            .map(|(i, _)| i)
            .collect()
    }

    /// Items matching the query, in list order
    pub fn filtered(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| (self.matches)(item, &self.query))
            .collect()
    }

    /// Highlight position within the filtered list
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Move the highlight down
    pub fn highlight_next(&mut self) {
        let len = self.filtered_indices().len();
        if len > 0 {
            self.highlight = (self.highlight + 1).min(len - 1);
        }
    }

    /// Move the highlight up
    pub fn highlight_prev(&mut self) {
        self.highlight = self.highlight.saturating_sub(1);
    }

    /// The highlighted item, if the filtered list is not empty
    pub fn highlighted(&self) -> Option<&T> {
        self.filtered_indices()
            .get(self.highlight)
            .and_then(|&i| self.items.get(i))
    }

    /// Select the highlighted item. Returns whether something was selected.
    pub fn select_highlighted(&mut self) -> bool {
        match self.filtered_indices().get(self.highlight) {
            Some(&i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Drop the selection
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// The selected item
    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

use super::filter::ListingFilter;

/// Last fetched list of a resource, filtered on the client
#[derive(Debug, Clone, PartialEq)]
pub struct ListStore<T> {
    items: Vec<T>,
    loaded: bool,
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
        }
    }
}

impl<T> ListStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache with a freshly fetched list
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.loaded = true;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filtered<F: ListingFilter<T>>(&self, filter: &F) -> Vec<&T> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Whether a fetch has completed since creation or the last clear
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop cached data, e.g. on logout
    pub fn clear(&mut self) {
        self.items.clear();
        self.loaded = false;
    }
}

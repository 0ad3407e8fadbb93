use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadItem {
    pub label: String,
    pub path: String,
    pub loaded: bool,
    pub failed: bool,
}

/// Requested/loaded bookkeeping for the loader. Completion is handed out once.
#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    items: Vec<LoadItem>,
    completion_taken: bool,
}

impl LoadingProgress {
    /// Registers a request. Returns false when the path was already requested.
    pub fn request(&mut self, label: &str, path: &str) -> bool {
        if self.items.iter().any(|item| item.path == path) {
            return false;
        }
        self.items.push(LoadItem {
            label: label.to_string(),
            path: path.to_string(),
            loaded: false,
            failed: false,
        });
        true
    }

    /// Records a successful load; returns `(loaded, total)` only on the first report.
    pub fn mark_loaded(&mut self, path: &str) -> Option<(usize, usize)> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.path == path && !item.loaded)?;
        item.loaded = true;
        Some((self.loaded(), self.total()))
    }

    /// Records a failure; returns true only on the first report for that path.
    pub fn mark_failed(&mut self, path: &str) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| item.path == path && !item.failed)
        {
            Some(item) => {
                item.failed = true;
                true
            }
            None => false,
        }
    }

    pub fn loaded(&self) -> usize {
        self.items.iter().filter(|item| item.loaded).count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.loaded)
    }

    /// True exactly once, the first time it is asked after everything loaded.
    pub fn take_completion(&mut self) -> bool {
        if self.completion_taken || !self.is_complete() {
            return false;
        }
        self.completion_taken = true;
        true
    }
}

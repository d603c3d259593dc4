use std::collections::HashSet;

/// Visual state of the header "select all" checkbox. Derived from the
/// selection and dataset sizes on every frame; not part of the data model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAllState {
    /// Nothing selected, or the dataset is empty
    Unchecked,
    /// Some rows selected but not all
    Indeterminate,
    /// Every row selected (and there is at least one row)
    Checked,
}

/// The set of row ids currently checked, kept in insertion order.
/// Ids are weak references into the current dataset; the download action
/// re-resolves them against the live records at invocation time.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Toggles one row: removes the id if present, appends it otherwise.
    /// Ids unknown to the dataset are tolerated; they toggle like any other.
    pub fn toggle_row(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    /// The header checkbox toggle: clears the selection when every row is
    /// already selected, otherwise selects every row id. Row status is
    /// deliberately ignored, matching the original behavior; selecting all
    /// can therefore leave the download button disabled.
    pub fn toggle_all(&mut self, all_ids: &[String]) {
        if self.ids.len() == all_ids.len() {
            self.ids.clear();
        } else {
            self.ids = all_ids.to_vec();
        }
    }

    /// Drops ids that no longer resolve against the current dataset.
    /// Called whenever the dataset is replaced wholesale.
    pub fn prune(&mut self, known: &HashSet<&str>) {
        self.ids.retain(|id| known.contains(id.as_str()));
    }

    /// Derived header-checkbox visual for a dataset of `total` rows.
    pub fn select_all_state(&self, total: usize) -> SelectAllState {
        if total > 0 && self.ids.len() == total {
            SelectAllState::Checked
        } else if !self.ids.is_empty() && self.ids.len() < total {
            SelectAllState::Indeterminate
        } else {
            SelectAllState::Unchecked
        }
    }
}

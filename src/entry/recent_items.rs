//! Projection of the host's recent items into clickable entries.

use crate::models::RecentItem;

/// What the recent-items region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentView<'a> {
    /// Nothing to show; render the non-interactive placeholder
    Placeholder,
    /// One actionable entry per item, labelled by display name, in order
    Items(Vec<&'a str>),
}

/// Stateless view over an ordered recent-items sequence.
#[derive(Debug, Clone, Copy)]
pub struct RecentItemsList<'a> {
    items: &'a [RecentItem],
}

impl<'a> RecentItemsList<'a> {
    /// Wraps the host-supplied items. Order is kept as given.
    pub const fn new(items: &'a [RecentItem]) -> Self {
        Self { items }
    }

    /// Entries to render.
    pub fn entries(&self) -> RecentView<'a> {
        if self.items.is_empty() {
            RecentView::Placeholder
        } else {
            RecentView::Items(self.items.iter().map(|item| item.file_name.as_str()).collect())
        }
    }

    /// Number of actionable entries.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether only the placeholder is shown.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Forwards the item at `index` to `on_open_recent_item`.
    ///
    /// Indices past the end (including any index while the placeholder is
    /// shown) do nothing.
    pub fn click<R>(
        &self,
        index: usize,
        on_open_recent_item: impl FnOnce(RecentItem) -> R,
    ) -> Option<R> {
        self.items
            .get(index)
            .cloned()
            .map(on_open_recent_item)
    }
}

//! Single-date selection.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use horizon_datepicker_core::Signal;
use horizon_datepicker_core::logging::targets;

use super::{DateSelectionModel, Selection, SelectionKind, is_valid_date, is_within, notify};
use crate::adapter::DateAdapter;
use crate::range::DateRange;

/// A selection model holding at most one date.
///
/// # Signals
///
/// - `selection_changed(())`: Emitted when `add` replaces the held date
pub struct SingleSelectionModel<D: 'static> {
    /// Shared date adapter.
    adapter: Arc<dyn DateAdapter<D>>,
    /// Currently selected date.
    date: Option<D>,
    /// Signal emitted when the selection changes.
    pub selection_changed: Signal<()>,
}

impl<D: Clone + 'static> SingleSelectionModel<D> {
    /// Create an empty model.
    pub fn new(adapter: Arc<dyn DateAdapter<D>>) -> Self {
        Self {
            adapter,
            date: None,
            selection_changed: Signal::new(),
        }
    }

    /// Set the initial date using builder pattern.
    pub fn with_date(mut self, date: Option<D>) -> Self {
        self.date = date;
        self
    }

    /// Get the selected date.
    pub fn date(&self) -> Option<&D> {
        self.date.as_ref()
    }

    /// Overwrite the selection without notifying observers.
    ///
    /// Passing `None` clears the selection silently; `add(None, _)` clears
    /// it and notifies.
    pub fn set_selection(&mut self, date: Option<D>) {
        self.date = date;
    }
}

impl<D: Clone + 'static> Clone for SingleSelectionModel<D> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.adapter)).with_date(self.date.clone())
    }
}

impl<D: fmt::Debug + 'static> fmt::Debug for SingleSelectionModel<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleSelectionModel")
            .field("date", &self.date)
            .field("selection_changed", &self.selection_changed)
            .finish_non_exhaustive()
    }
}

impl<D: Clone + 'static> DateSelectionModel<D> for SingleSelectionModel<D> {
    fn kind(&self) -> SelectionKind {
        SelectionKind::Single
    }

    fn adapter(&self) -> &Arc<dyn DateAdapter<D>> {
        &self.adapter
    }

    fn selection(&self) -> Selection<D> {
        Selection::Single(self.date.clone())
    }

    fn selection_changed(&self) -> &Signal<()> {
        &self.selection_changed
    }

    fn add(&mut self, date: Option<D>, silent: bool) {
        if self.adapter.same_date(date.as_ref(), self.date.as_ref()) {
            tracing::trace!(target: targets::SELECTION, "date unchanged, ignoring add");
            return;
        }
        self.date = date;
        notify(&self.selection_changed, SelectionKind::Single, silent);
    }

    fn clone_model(&self) -> Box<dyn DateSelectionModel<D>> {
        Box::new(self.clone())
    }

    fn first_selected_date(&self) -> Option<&D> {
        self.date.as_ref()
    }

    fn last_selected_date(&self) -> Option<&D> {
        self.date.as_ref()
    }

    fn is_complete(&self) -> bool {
        self.date.is_some()
    }

    fn is_valid(&self) -> bool {
        self.date
            .as_ref()
            .is_some_and(|date| is_valid_date(self.adapter.as_ref(), date))
    }

    fn contains(&self, value: &D) -> bool {
        self.date.is_some() && self.adapter.same_date(self.date.as_ref(), Some(value))
    }

    fn overlaps(&self, range: &DateRange<D>) -> bool {
        match (&self.date, &range.start, &range.end) {
            (Some(date), Some(start), Some(end)) => {
                is_within(self.adapter.as_ref(), date, start, end)
            }
            _ => false,
        }
    }

    fn preview_range(&self, range: &DateRange<D>) -> DateRange<D> {
        range.clone()
    }
}

impl<D: 'static> Drop for SingleSelectionModel<D> {
    fn drop(&mut self) {
        self.selection_changed.close();
    }
}

static_assertions::assert_impl_all!(SingleSelectionModel<NaiveDate>: Send, Sync);

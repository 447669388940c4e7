//! Date range selection.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use horizon_datepicker_core::Signal;

use super::{DateSelectionModel, Selection, SelectionKind, is_valid_date, is_within, notify};
use crate::adapter::DateAdapter;
use crate::range::DateRange;

/// A selection model holding a start and an end date.
///
/// Dates are added one at a time: the first `add` sets the start anchor, the
/// second sets the end, and a third starts over from a new anchor. Once an
/// end is held a start is held too, as long as the model is only driven
/// through `add`.
///
/// # Signals
///
/// - `selection_changed(())`: Emitted on every non-silent `add`
pub struct RangeSelectionModel<D: 'static> {
    /// Shared date adapter.
    adapter: Arc<dyn DateAdapter<D>>,
    /// First date of the range.
    start: Option<D>,
    /// Last date of the range.
    end: Option<D>,
    /// Signal emitted when the selection changes.
    pub selection_changed: Signal<()>,
}

impl<D: Clone + 'static> RangeSelectionModel<D> {
    /// Create an empty model.
    pub fn new(adapter: Arc<dyn DateAdapter<D>>) -> Self {
        Self {
            adapter,
            start: None,
            end: None,
            selection_changed: Signal::new(),
        }
    }

    /// Set the initial range using builder pattern.
    pub fn with_range(mut self, range: DateRange<D>) -> Self {
        self.set_selection(range);
        self
    }

    /// Get the start date.
    pub fn start(&self) -> Option<&D> {
        self.start.as_ref()
    }

    /// Get the end date.
    pub fn end(&self) -> Option<&D> {
        self.end.as_ref()
    }

    /// Get a copy of the current range.
    pub fn range(&self) -> DateRange<D> {
        DateRange::new(self.start.clone(), self.end.clone())
    }

    /// Overwrite both ends without validation or notification.
    pub fn set_selection(&mut self, range: DateRange<D>) {
        self.start = range.start;
        self.end = range.end;
    }

    /// Overwrite whichever ends are supplied, leaving the others untouched.
    ///
    /// Used when a start and an end input edit the range independently.
    /// Observers are not notified.
    pub fn set_partial_selection(&mut self, start: Option<D>, end: Option<D>) {
        if let Some(start) = start {
            self.start = Some(start);
        }
        if let Some(end) = end {
            self.end = Some(end);
        }
    }

    fn ends(&self) -> DateRange<&D> {
        DateRange::new(self.start.as_ref(), self.end.as_ref())
    }
}

impl<D: Clone + 'static> Clone for RangeSelectionModel<D> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.adapter)).with_range(self.range())
    }
}

impl<D: fmt::Debug + 'static> fmt::Debug for RangeSelectionModel<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelectionModel")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("selection_changed", &self.selection_changed)
            .finish_non_exhaustive()
    }
}

impl<D: Clone + 'static> DateSelectionModel<D> for RangeSelectionModel<D> {
    fn kind(&self) -> SelectionKind {
        SelectionKind::Range
    }

    fn adapter(&self) -> &Arc<dyn DateAdapter<D>> {
        &self.adapter
    }

    fn selection(&self) -> Selection<D> {
        Selection::Range(self.range())
    }

    fn selection_changed(&self) -> &Signal<()> {
        &self.selection_changed
    }

    fn add(&mut self, date: Option<D>, silent: bool) {
        match (self.start.is_some(), self.end.is_some()) {
            (false, _) => self.start = date,
            (true, false) => self.end = date,
            (true, true) => {
                self.start = date;
                self.end = None;
            }
        }
        notify(&self.selection_changed, SelectionKind::Range, silent);
    }

    fn clone_model(&self) -> Box<dyn DateSelectionModel<D>> {
        Box::new(self.clone())
    }

    fn first_selected_date(&self) -> Option<&D> {
        self.start.as_ref()
    }

    fn last_selected_date(&self) -> Option<&D> {
        self.end.as_ref()
    }

    fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    fn is_valid(&self) -> bool {
        let adapter = self.adapter.as_ref();
        match self.ends() {
            DateRange {
                start: Some(start),
                end: Some(end),
            } => is_valid_date(adapter, start) && is_valid_date(adapter, end),
            _ => false,
        }
    }

    fn contains(&self, value: &D) -> bool {
        let adapter = self.adapter.as_ref();
        match self.ends() {
            DateRange {
                start: Some(start),
                end: Some(end),
            } => is_within(adapter, value, start, end),
            DateRange {
                start: Some(start),
                end: None,
            } => adapter.same_date(Some(start), Some(value)),
            _ => false,
        }
    }

    fn overlaps(&self, range: &DateRange<D>) -> bool {
        let adapter = self.adapter.as_ref();
        // A query anchored where the selection starts always overlaps, even
        // when either side is incomplete. Ends are not compared.
        if adapter.same_date(range.start.as_ref(), self.start.as_ref()) {
            return true;
        }
        let (Some(range_start), Some(range_end), Some(start), Some(end)) =
            (&range.start, &range.end, &self.start, &self.end)
        else {
            return false;
        };
        is_within(adapter, range_start, start, end)
            || is_within(adapter, range_end, start, end)
            || (adapter.compare_date(range_start, start).is_le()
                && adapter.compare_date(end, range_end).is_le())
    }

    fn preview_range(&self, range: &DateRange<D>) -> DateRange<D> {
        let adapter = self.adapter.as_ref();
        let mut dates: Vec<&D> = [&range.start, &range.end, &self.start, &self.end]
            .into_iter()
            .flatten()
            .collect();
        dates.sort_by(|a, b| adapter.compare_date(a, b));
        DateRange::new(dates.first().copied().cloned(), dates.last().copied().cloned())
    }
}

impl<D: 'static> Drop for RangeSelectionModel<D> {
    fn drop(&mut self) {
        self.selection_changed.close();
    }
}

static_assertions::assert_impl_all!(RangeSelectionModel<NaiveDate>: Send, Sync);

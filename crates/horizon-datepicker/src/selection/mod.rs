//! Date selection models.
//!
//! A selection model holds what a date picker currently has selected and
//! answers the structural queries a calendar needs while rendering:
//! containment, overlap with a candidate range and the preview span to
//! highlight while a range is being picked.
//!
//! Two variants implement [`DateSelectionModel`]:
//!
//! - [`SingleSelectionModel`] holds at most one date.
//! - [`RangeSelectionModel`] holds a start and an end, filled in one
//!   [`add`](DateSelectionModel::add) at a time.
//!
//! Every model owns a `selection_changed` signal. Observers are notified
//! synchronously, after the state change, from inside the mutating call. The
//! signal is closed when the model is closed or dropped.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use chrono::NaiveDate;
//! use horizon_datepicker::{DateRange, DateSelectionModel, NaiveDateAdapter, RangeSelectionModel};
//!
//! let mut model = RangeSelectionModel::<NaiveDate>::new(Arc::new(NaiveDateAdapter::new()));
//! let changes = Arc::new(AtomicUsize::new(0));
//! let changes_clone = changes.clone();
//! model.selection_changed.connect(move |_| {
//!     changes_clone.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let start = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
//! model.add(Some(start), false);
//! model.add(Some(end), false);
//!
//! assert!(model.is_complete());
//! assert_eq!(model.range(), DateRange::between(start, end));
//! assert_eq!(changes.load(Ordering::SeqCst), 2);
//! ```

mod range;
mod single;

use std::fmt;
use std::sync::Arc;

use horizon_datepicker_core::logging::targets;
use horizon_datepicker_core::{PerfSpan, Signal};

use crate::adapter::DateAdapter;
use crate::range::DateRange;

pub use range::RangeSelectionModel;
pub use single::SingleSelectionModel;

/// Which variant a selection model is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionKind {
    /// One date at a time (default).
    #[default]
    Single,
    /// A start and an end date.
    Range,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Range => write!(f, "range"),
        }
    }
}

/// A snapshot of a model's selection, tagged with its variant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection<D> {
    /// Selection of a [`SingleSelectionModel`].
    Single(Option<D>),
    /// Selection of a [`RangeSelectionModel`].
    Range(DateRange<D>),
}

impl<D> Selection<D> {
    /// The variant tag of this selection.
    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::Single(_) => SelectionKind::Single,
            Self::Range(_) => SelectionKind::Range,
        }
    }

    /// Whether two selections are of the same variant and hold dates the
    /// adapter considers equal.
    pub fn is_same(&self, other: &Selection<D>, adapter: &dyn DateAdapter<D>) -> bool
    where
        D: 'static,
    {
        match (self, other) {
            (Self::Single(first), Self::Single(second)) => {
                adapter.same_date(first.as_ref(), second.as_ref())
            }
            (Self::Range(first), Self::Range(second)) => {
                adapter.same_date(first.start.as_ref(), second.start.as_ref())
                    && adapter.same_date(first.end.as_ref(), second.end.as_ref())
            }
            _ => false,
        }
    }
}

/// The contract shared by every date selection model.
pub trait DateSelectionModel<D: Clone + 'static> {
    /// The variant of this model.
    fn kind(&self) -> SelectionKind;

    /// The adapter this model compares and validates dates with.
    fn adapter(&self) -> &Arc<dyn DateAdapter<D>>;

    /// A tagged copy of the current selection.
    fn selection(&self) -> Selection<D>;

    /// Signal emitted (with no payload) whenever a non-silent `add` changes
    /// the selection.
    fn selection_changed(&self) -> &Signal<()>;

    /// Integrate `date` into the selection. Unless `silent`, observers of
    /// [`selection_changed`](Self::selection_changed) are notified before
    /// this returns.
    fn add(&mut self, date: Option<D>, silent: bool);

    /// Deserialize `value` with the adapter and [`add`](Self::add) it.
    ///
    /// Values that do not parse to a valid date are added as `None`.
    fn add_deserialized(&mut self, value: &str, silent: bool) {
        let _span = PerfSpan::new("add_deserialized");
        let adapter = Arc::clone(self.adapter());
        let date = adapter
            .deserialize(value)
            .and_then(|date| adapter.valid_date_or_none(&date));
        if date.is_none() {
            tracing::debug!(target: targets::SELECTION, value, "adding unparseable value as empty");
        }
        self.add(date, silent);
    }

    /// A new model of the same variant, sharing the adapter, with an
    /// independent copy of the selection and no observers.
    fn clone_model(&self) -> Box<dyn DateSelectionModel<D>>;

    /// The earliest date held, if any.
    fn first_selected_date(&self) -> Option<&D>;

    /// The latest date held, if any.
    fn last_selected_date(&self) -> Option<&D>;

    /// Whether the selection is whole for this variant.
    fn is_complete(&self) -> bool;

    /// Whether `other` is the same variant holding equal dates.
    fn is_same(&self, other: &dyn DateSelectionModel<D>) -> bool {
        self.selection()
            .is_same(&other.selection(), self.adapter().as_ref())
    }

    /// Whether every held date is a valid date instance. Empty selections
    /// are never valid.
    fn is_valid(&self) -> bool;

    /// Whether `value` falls within or equals the selection.
    fn contains(&self, value: &D) -> bool;

    /// Whether `range` intersects the selection.
    fn overlaps(&self, range: &DateRange<D>) -> bool;

    /// The span to highlight while previewing `range` against the selection.
    fn preview_range(&self, range: &DateRange<D>) -> DateRange<D>;

    /// Tear the model down, closing its change signal. Safe to call
    /// repeatedly; also done on drop.
    fn close(&self) {
        if self.selection_changed().close() {
            tracing::debug!(target: targets::SELECTION, kind = %self.kind(), "selection model closed");
        }
    }

    /// Whether [`close`](Self::close) has run.
    fn is_closed(&self) -> bool {
        self.selection_changed().is_closed()
    }
}

/// A date the adapter reports as both a date instance and valid.
fn is_valid_date<D: 'static>(adapter: &dyn DateAdapter<D>, date: &D) -> bool {
    adapter.is_date_instance(date) && adapter.is_valid(date)
}

/// `start <= date <= end` under the adapter's ordering.
fn is_within<D: 'static>(adapter: &dyn DateAdapter<D>, date: &D, start: &D, end: &D) -> bool {
    adapter.compare_date(start, date).is_le() && adapter.compare_date(date, end).is_le()
}

/// Notify observers of a mutation unless it was silent.
fn notify(signal: &Signal<()>, kind: SelectionKind, silent: bool) {
    tracing::trace!(target: targets::SELECTION, %kind, silent, "selection updated");
    if !silent {
        signal.emit(());
    }
}

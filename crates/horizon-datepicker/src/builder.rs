//! Builder for boxed selection models.
//!
//! Owners that decide the variant at runtime (for example from a "range"
//! flag on a picker) use [`SelectionModelBuilder`] instead of calling the
//! concrete constructors.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use horizon_datepicker::{NaiveDateAdapter, SelectionKind, SelectionModelBuilder};
//!
//! let model = SelectionModelBuilder::<NaiveDate>::new(SelectionKind::Range)
//!     .adapter(Arc::new(NaiveDateAdapter::new()))
//!     .on_selection_changed(|_| println!("selection changed"))
//!     .build()
//!     .unwrap();
//! assert_eq!(model.kind(), SelectionKind::Range);
//! ```

use std::sync::Arc;

use crate::adapter::DateAdapter;
use crate::error::{Error, Result};
use crate::selection::{
    DateSelectionModel, RangeSelectionModel, Selection, SelectionKind, SingleSelectionModel,
};

type Observer = Box<dyn Fn(&()) + Send + Sync>;

/// Builds a [`DateSelectionModel`] of a chosen variant.
pub struct SelectionModelBuilder<D: 'static> {
    kind: SelectionKind,
    adapter: Option<Arc<dyn DateAdapter<D>>>,
    initial: Option<Selection<D>>,
    observers: Vec<Observer>,
}

impl<D: Clone + 'static> SelectionModelBuilder<D> {
    /// Start building a model of the given variant.
    pub fn new(kind: SelectionKind) -> Self {
        Self {
            kind,
            adapter: None,
            initial: None,
            observers: Vec::new(),
        }
    }

    /// Set the date adapter. Required.
    pub fn adapter(mut self, adapter: Arc<dyn DateAdapter<D>>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Set the initial selection. Must match the builder's variant.
    pub fn initial(mut self, selection: Selection<D>) -> Self {
        self.initial = Some(selection);
        self
    }

    /// Connect an observer to the model's `selection_changed` signal.
    pub fn on_selection_changed<F>(mut self, slot: F) -> Self
    where
        F: Fn(&()) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(slot));
        self
    }

    /// Build the model.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingAdapter`] if no adapter was set
    /// - [`Error::KindMismatch`] if the initial selection is for the other
    ///   variant
    pub fn build(self) -> Result<Box<dyn DateSelectionModel<D>>> {
        let adapter = self
            .adapter
            .ok_or(Error::MissingAdapter { kind: self.kind })?;

        let model: Box<dyn DateSelectionModel<D>> = match (self.kind, self.initial) {
            (SelectionKind::Single, None) => Box::new(SingleSelectionModel::new(adapter)),
            (SelectionKind::Single, Some(Selection::Single(date))) => {
                Box::new(SingleSelectionModel::new(adapter).with_date(date))
            }
            (SelectionKind::Range, None) => Box::new(RangeSelectionModel::new(adapter)),
            (SelectionKind::Range, Some(Selection::Range(range))) => {
                Box::new(RangeSelectionModel::new(adapter).with_range(range))
            }
            (expected, Some(other)) => {
                return Err(Error::KindMismatch {
                    expected,
                    found: other.kind(),
                });
            }
        };

        for observer in self.observers {
            model.selection_changed().try_connect(observer)?;
        }
        Ok(model)
    }
}

//! Date and date-range selection models for Horizon Datepicker.
//!
//! This crate holds the domain logic behind a calendar date picker:
//!
//! - **Selection Models**: [`SingleSelectionModel`] and
//!   [`RangeSelectionModel`], both implementing [`DateSelectionModel`]
//! - **Date Ranges**: the [`DateRange`] value passed to overlap and preview
//!   queries
//! - **Date Adapters**: the [`DateAdapter`] capability trait and the chrono
//!   based [`NaiveDateAdapter`]
//! - **Builder**: [`SelectionModelBuilder`] for choosing the variant at runtime
//!
//! Rendering, focus handling and text input live elsewhere; they observe a
//! model through its `selection_changed` signal.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use horizon_datepicker::{
//!     DateRange, DateSelectionModel, NaiveDateAdapter, RangeSelectionModel,
//! };
//!
//! let adapter = Arc::new(NaiveDateAdapter::new());
//! let mut model = RangeSelectionModel::<NaiveDate>::new(adapter);
//!
//! let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
//! model.add(Some(day(3)), false);
//!
//! // While hovering day 7, highlight 3..=7
//! let preview = model.preview_range(&DateRange::new(model.start().cloned(), Some(day(7))));
//! assert_eq!(preview, DateRange::between(day(3), day(7)));
//!
//! model.add(Some(day(7)), false);
//! assert!(model.contains(&day(5)));
//! assert!(model.overlaps(&DateRange::between(day(6), day(10))));
//! ```

pub mod adapter;
pub mod builder;
mod error;
pub mod range;
pub mod selection;

pub use adapter::{DateAdapter, ISO_DATE_FORMAT, NaiveDateAdapter};
pub use builder::SelectionModelBuilder;
pub use error::{Error, Result};
pub use range::DateRange;
pub use selection::{
    DateSelectionModel, RangeSelectionModel, Selection, SelectionKind, SingleSelectionModel,
};

// Re-export core types that users need to observe models
pub use horizon_datepicker_core::{ConnectionId, Signal, SignalError};

//! Serialization of selections (requires the `serde` feature).

#![cfg(feature = "serde")]

use std::sync::Arc;

use chrono::NaiveDate;
use horizon_datepicker::{
    DateRange, DateSelectionModel, NaiveDateAdapter, RangeSelectionModel, Selection, SelectionKind,
    SelectionModelBuilder,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
}

#[test]
fn test_date_range_json_shape() {
    let range = DateRange::anchor(day(3));
    let json = serde_json::to_value(&range).unwrap();
    assert_eq!(json, serde_json::json!({ "start": "2025-01-03", "end": null }));
}

#[test]
fn test_restore_model_from_saved_selection() {
    let model = RangeSelectionModel::<NaiveDate>::new(Arc::new(NaiveDateAdapter::new()))
        .with_range(DateRange::between(day(2), day(9)));
    let saved = serde_json::to_string(&model.selection()).unwrap();

    let selection: Selection<NaiveDate> = serde_json::from_str(&saved).unwrap();
    assert_eq!(selection.kind(), SelectionKind::Range);

    let restored = SelectionModelBuilder::<NaiveDate>::new(selection.kind())
        .adapter(Arc::new(NaiveDateAdapter::new()))
        .initial(selection)
        .build()
        .unwrap();
    assert!(restored.is_same(&model));
}

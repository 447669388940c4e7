//! The [`DateRange`] value type.

/// A pair of optional dates.
///
/// Both ends present is a closed interval, `start` alone is an anchor of a
/// range still being picked, both absent is empty. Ordering of the two ends
/// is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange<D> {
    /// First date of the range.
    pub start: Option<D>,
    /// Last date of the range.
    pub end: Option<D>,
}

impl<D> Default for DateRange<D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<D> DateRange<D> {
    /// Create a range from optional ends.
    pub fn new(start: Option<D>, end: Option<D>) -> Self {
        Self { start, end }
    }

    /// A range with both ends present.
    pub fn between(start: D, end: D) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// A range with only its start anchor.
    pub fn anchor(start: D) -> Self {
        Self::new(Some(start), None)
    }

    /// A range with neither end.
    pub const fn empty() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Whether both ends are present.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether neither end is present.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Borrow both ends.
    pub fn as_ref(&self) -> DateRange<&D> {
        DateRange::new(self.start.as_ref(), self.end.as_ref())
    }
}

impl<D> From<(Option<D>, Option<D>)> for DateRange<D> {
    fn from((start, end): (Option<D>, Option<D>)) -> Self {
        Self::new(start, end)
    }
}

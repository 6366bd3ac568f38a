use core::ops::{Bound, RangeBounds};

/// A range resolved against a field length: `count` positions starting at
/// `begin`. The positions may run past the end of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) begin: usize,
    pub(crate) count: usize,
}

impl Span {
    /// One past the last position, clamped to `len`.
    #[inline]
    pub(crate) fn clamped_end(&self, len: usize) -> usize {
        self.begin.saturating_add(self.count).min(len)
    }
}

/// Resolves `range` against a field of `len` bits.
///
/// Negative endpoints count from the end. Returns `None` if the start is still
/// negative after that, or lies past `len`. An end before the start yields an
/// empty span. The end is not clamped to `len`.
pub(crate) fn normalize<R: RangeBounds<i64>>(range: &R, len: usize) -> Option<Span> {
    let len = i64::try_from(len).ok()?;
    let from_end = |idx: i64| if idx < 0 { idx + len } else { idx };

    let begin = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => from_end(end).saturating_add(1),
        Bound::Excluded(&end) => from_end(end),
        Bound::Unbounded => len,
    };

    let begin = from_end(begin);
    if begin < 0 || begin > len {
        return None;
    }
    let count = end.saturating_sub(begin).max(0);

    Some(Span {
        begin: usize::try_from(begin).ok()?,
        count: usize::try_from(count).ok()?,
    })
}

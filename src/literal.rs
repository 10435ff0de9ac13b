//! Keyed composite literals such as `{1, 5: 4, 6, 10, 100, 15}`.
//!
//! Unkeyed entries land at the cursor; a keyed entry jumps the cursor to
//! its index. Slots nobody mentions hold the zero value.

use crate::array::FixedArray;
use crate::error::{SliceError, SliceResult};
use crate::view::SliceView;

#[derive(Debug, Clone, Default)]
pub struct SparseLiteral<T> {
    entries: Vec<(usize, T)>,
    cursor: usize,
}

impl<T: Clone + Default> SparseLiteral<T> {
    pub fn new() -> Self {
        SparseLiteral {
            entries: Vec::new(),
            cursor: 0,
        }
    }

    pub fn value(mut self, value: T) -> Self {
        self.entries.push((self.cursor, value));
        self.cursor += 1;
        self
    }

    pub fn at(mut self, index: usize, value: T) -> Self {
        self.cursor = index;
        self.value(value)
    }

    /// Highest index mentioned, plus one.
    pub fn extent(&self) -> usize {
        self.entries.iter().map(|(i, _)| i + 1).max().unwrap_or(0)
    }

    fn fill(&self, slots: &mut [T]) -> SliceResult<()> {
        let mut seen = vec![false; slots.len()];
        for (index, value) in &self.entries {
            let Some(slot) = slots.get_mut(*index) else {
                return Err(SliceError::out_of_range("literal", *index, seen.len()));
            };
            if std::mem::replace(&mut seen[*index], true) {
                return Err(SliceError::invalid_argument(format!(
                    "duplicate index {index} in literal"
                )));
            }
            *slot = value.clone();
        }
        Ok(())
    }

    /// A slice literal, sized to [`SparseLiteral::extent`].
    pub fn into_view(self) -> SliceResult<SliceView<T>> {
        let mut slots = vec![T::default(); self.extent()];
        self.fill(&mut slots)?;
        Ok(SliceView::from_literal(slots))
    }

    /// An array literal of exactly `N` elements.
    pub fn into_array<const N: usize>(self) -> SliceResult<FixedArray<T, N>> {
        let mut slots: [T; N] = std::array::from_fn(|_| T::default());
        self.fill(&mut slots)?;
        Ok(FixedArray::from(slots))
    }
}

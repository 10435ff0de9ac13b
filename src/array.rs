//! Fixed-size arrays with value semantics.
//!
//! An array owns its store outright: cloning copies every element and
//! `==` compares contents. Its one escape hatch is [`FixedArray::as_view`],
//! the `arr[:]` expression, which hands out a view over the array's own
//! slots.

use std::fmt;

use itertools::Itertools;

use crate::error::{SliceError, SliceResult};
use crate::growth::GrowthPolicy;
use crate::store::BackingStore;
use crate::view::SliceView;

pub struct FixedArray<T, const N: usize> {
    store: BackingStore<T>,
}

impl<T: Clone + Default, const N: usize> FixedArray<T, N> {
    pub fn new() -> Self {
        FixedArray {
            store: BackingStore::zeroed(N),
        }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> SliceResult<T> {
        if index >= N {
            return Err(SliceError::out_of_range("index", index, N));
        }
        Ok(self.store.read(index))
    }

    pub fn set(&mut self, index: usize, value: T) -> SliceResult<()> {
        if index >= N {
            return Err(SliceError::out_of_range("index", index, N));
        }
        self.store.write(index, value);
        Ok(())
    }

    /// `arr[:]`: a full-length view sharing this array's slots.
    pub fn as_view(&self) -> SliceView<T> {
        SliceView::over(self.store.clone(), 0, N, N, GrowthPolicy::default())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.store.read_range(0, N)
    }
}

impl<T: Clone + Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default, const N: usize> Clone for FixedArray<T, N> {
    fn clone(&self) -> Self {
        FixedArray {
            store: self.store.duplicate(),
        }
    }
}

impl<T: Clone + Default, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(items: [T; N]) -> Self {
        FixedArray {
            store: BackingStore::from_vec(items.into()),
        }
    }
}

impl<T: Clone + Default + PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.to_vec() == other.to_vec()
    }
}

impl<T: Clone + Default + fmt::Display, const N: usize> fmt::Display for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_vec().iter().join(" "))
    }
}

impl<T: Clone + Default + fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedArray").field(&self.to_vec()).finish()
    }
}

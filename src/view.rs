//! Growable sequence views over shared backing stores.
//!
//! A [`SliceView`] is a small header: a handle to a [`BackingStore`], an
//! offset into it, a length and a capacity. Cloning a view copies only
//! the header, so every clone and every sub-slice sees the same elements.
//! An append that fits in the capacity writes into the shared store; one
//! that does not fit moves the result onto a fresh store that nobody else
//! can see.

use std::fmt;

use itertools::Itertools;

use crate::error::{SliceError, SliceResult};
use crate::growth::GrowthPolicy;
use crate::store::BackingStore;

pub struct SliceView<T> {
    store: Option<BackingStore<T>>,
    offset: usize,
    len: usize,
    cap: usize,
    policy: GrowthPolicy,
}

impl<T> Clone for SliceView<T> {
    fn clone(&self) -> Self {
        SliceView {
            store: self.store.clone(),
            offset: self.offset,
            len: self.len,
            cap: self.cap,
            policy: self.policy,
        }
    }
}

impl<T: Clone + Default> Default for SliceView<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T: Clone + Default> SliceView<T> {
    /// The zero value: no store, length 0, capacity 0.
    pub fn nil() -> Self {
        SliceView {
            store: None,
            offset: 0,
            len: 0,
            cap: 0,
            policy: GrowthPolicy::default(),
        }
    }

    /// A zero-filled view of `len` elements on a store of `cap` slots.
    pub fn make(len: usize, cap: usize) -> SliceResult<Self> {
        if cap < len {
            return Err(SliceError::invalid_argument(format!(
                "capacity {cap} is smaller than length {len}"
            )));
        }
        Ok(Self::over(BackingStore::zeroed(cap), 0, len, cap, GrowthPolicy::default()))
    }

    pub fn with_len(len: usize) -> Self {
        Self::over(BackingStore::zeroed(len), 0, len, len, GrowthPolicy::default())
    }

    /// A view over a store sized exactly to `items`.
    pub fn from_literal<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let len = items.len();
        Self::over(BackingStore::from_vec(items), 0, len, len, GrowthPolicy::default())
    }

    pub fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub(crate) fn over(
        store: BackingStore<T>,
        offset: usize,
        len: usize,
        cap: usize,
        policy: GrowthPolicy,
    ) -> Self {
        debug_assert!(len <= cap && offset + cap <= store.size());
        SliceView {
            store: Some(store),
            offset,
            len,
            cap,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_nil(&self) -> bool {
        self.store.is_none()
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    pub fn store(&self) -> Option<&BackingStore<T>> {
        self.store.as_ref()
    }

    pub fn shares_store_with(&self, other: &SliceView<T>) -> bool {
        match (&self.store, &other.store) {
            (Some(a), Some(b)) => a.same_block(b),
            _ => false,
        }
    }

    pub fn get(&self, index: usize) -> SliceResult<T> {
        match &self.store {
            Some(store) if index < self.len => Ok(store.read(self.offset + index)),
            _ => Err(SliceError::out_of_range("index", index, self.len)),
        }
    }

    pub fn set(&self, index: usize, value: T) -> SliceResult<()> {
        match &self.store {
            Some(store) if index < self.len => {
                store.write(self.offset + index, value);
                Ok(())
            }
            _ => Err(SliceError::out_of_range("index", index, self.len)),
        }
    }

    /// `view[lo:hi]`. The result keeps every slot up to the end of this
    /// view's capacity, not just up to `hi`.
    pub fn slice(&self, lo: usize, hi: usize) -> SliceResult<Self> {
        self.reslice("slice", lo, hi, self.cap)
    }

    /// `view[lo:hi:max]`. The result's capacity stops at `max`.
    pub fn slice_full(&self, lo: usize, hi: usize, max: usize) -> SliceResult<Self> {
        if max > self.cap {
            return Err(SliceError::out_of_range("slice_full", max, self.cap));
        }
        self.reslice("slice_full", lo, hi, max)
    }

    pub fn slice_from(&self, lo: usize) -> SliceResult<Self> {
        self.slice(lo, self.len)
    }

    pub fn slice_to(&self, hi: usize) -> SliceResult<Self> {
        self.slice(0, hi)
    }

    pub fn slice_all(&self) -> Self {
        self.clone()
    }

    fn reslice(&self, op: &'static str, lo: usize, hi: usize, max: usize) -> SliceResult<Self> {
        if hi > max {
            return Err(SliceError::out_of_range(op, hi, max));
        }
        if lo > hi {
            return Err(SliceError::out_of_range(op, lo, hi));
        }
        Ok(SliceView {
            store: self.store.clone(),
            offset: self.offset + lo,
            len: hi - lo,
            cap: max - lo,
            policy: self.policy,
        })
    }

    /// Returns `view` with `values` added at the end.
    ///
    /// When the values fit in the remaining capacity they are written into
    /// the shared store, where any other view covering those slots sees
    /// them. Otherwise the existing elements and the new values are copied
    /// to a fresh store and this view's store is left untouched.
    pub fn append(&self, values: &[T]) -> Self {
        if values.is_empty() {
            return self.clone();
        }
        let needed = self.len + values.len();

        if let Some(store) = self.store.as_ref().filter(|_| needed <= self.cap) {
            store.write_from(self.offset + self.len, values);
            return SliceView {
                store: self.store.clone(),
                offset: self.offset,
                len: needed,
                cap: self.cap,
                policy: self.policy,
            };
        }

        let new_cap = self.policy.next_capacity(self.cap, needed);
        log::debug!(
            "append: reallocating {} -> {} slots for length {}",
            self.cap,
            new_cap,
            needed
        );
        let mut items = Vec::with_capacity(new_cap);
        items.extend(self.to_vec());
        items.extend_from_slice(values);
        items.resize(new_cap, T::default());
        Self::over(BackingStore::from_vec(items), 0, needed, new_cap, self.policy)
    }

    /// `append(view, other...)`. Reads all of `other` before writing, so
    /// `other` may alias this view's store.
    pub fn append_view(&self, other: &SliceView<T>) -> Self {
        self.append(&other.to_vec())
    }

    /// Copies `min(dst.len(), src.len())` elements from `src` into `dst`
    /// and returns the count. Overlapping views on one store are handled
    /// like `memmove`.
    pub fn copy(dst: &SliceView<T>, src: &SliceView<T>) -> usize {
        let count = dst.len.min(src.len);
        let (Some(to), Some(from)) = (&dst.store, &src.store) else {
            return 0;
        };
        if count == 0 {
            return 0;
        }

        if to.same_block(from) {
            to.move_within(src.offset, dst.offset, count);
        } else {
            let values = from.read_range(src.offset, src.offset + count);
            to.write_from(dst.offset, &values);
        }
        count
    }

    /// Resets every element in the view to its zero value.
    pub fn clear(&self) {
        if let Some(store) = &self.store {
            store.reset(self.offset, self.offset + self.len);
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        match &self.store {
            Some(store) => store.read_range(self.offset, self.offset + self.len),
            None => Vec::new(),
        }
    }

    /// Iterates over a snapshot taken now; later writes are not seen.
    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.to_vec().into_iter()
    }

    /// Copies the first `N` elements into an array. Fails if the view is
    /// shorter than `N`.
    pub fn to_array<const N: usize>(&self) -> SliceResult<[T; N]> {
        if N > self.len {
            return Err(SliceError::out_of_range("to_array", N, self.len));
        }
        let head = self.slice_to(N)?.to_vec();
        <[T; N]>::try_from(head).map_err(|_| SliceError::out_of_range("to_array", N, self.len))
    }
}

impl<T: Clone + Default> From<Vec<T>> for SliceView<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_literal(items)
    }
}

impl<T: Clone + Default> FromIterator<T> for SliceView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_literal(iter)
    }
}

impl<T: Clone + Default + PartialEq> PartialEq for SliceView<T> {
    /// Element-wise comparison; headers and stores are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.to_vec() == other.to_vec()
    }
}

impl<T: Clone + Default + fmt::Display> fmt::Display for SliceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_vec().iter().join(" "))
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for SliceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceView")
            .field("len", &self.len)
            .field("cap", &self.cap)
            .field("nil", &self.is_nil())
            .field("items", &self.to_vec())
            .finish()
    }
}

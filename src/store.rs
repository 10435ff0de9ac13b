use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A fixed-size block of elements shared by every view cut from it.
///
/// The block never grows or shrinks after allocation. Views check their
/// own bounds before reaching in here, so the absolute positions passed
/// to these methods are always inside the block.
pub struct BackingStore<T> {
    slots: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for BackingStore<T> {
    /// Another handle to the same block, not a copy of its elements.
    fn clone(&self) -> Self {
        BackingStore {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T: Clone + Default> BackingStore<T> {
    pub fn zeroed(size: usize) -> Self {
        Self::from_vec(vec![T::default(); size])
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        BackingStore {
            slots: Rc::new(RefCell::new(items)),
        }
    }

    pub fn size(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Number of live handles (views, arrays) sharing this block.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.slots)
    }

    pub fn same_block(&self, other: &BackingStore<T>) -> bool {
        Rc::ptr_eq(&self.slots, &other.slots)
    }

    /// A new block holding a copy of every element.
    pub fn duplicate(&self) -> Self {
        Self::from_vec(self.slots.borrow().clone())
    }

    pub(crate) fn read(&self, pos: usize) -> T {
        self.slots.borrow()[pos].clone()
    }

    pub(crate) fn write(&self, pos: usize, value: T) {
        self.slots.borrow_mut()[pos] = value;
    }

    pub(crate) fn read_range(&self, start: usize, end: usize) -> Vec<T> {
        self.slots.borrow()[start..end].to_vec()
    }

    pub(crate) fn write_from(&self, start: usize, values: &[T]) {
        let mut slots = self.slots.borrow_mut();
        slots[start..start + values.len()].clone_from_slice(values);
    }

    pub(crate) fn reset(&self, start: usize, end: usize) {
        let mut slots = self.slots.borrow_mut();
        for slot in &mut slots[start..end] {
            *slot = T::default();
        }
    }

    /// Moves `count` elements from `src` to `dst` inside this block.
    /// Overlapping ranges behave like `memmove`.
    pub(crate) fn move_within(&self, src: usize, dst: usize, count: usize) {
        if count == 0 || src == dst {
            return;
        }
        let mut slots = self.slots.borrow_mut();
        if dst < src {
            for i in 0..count {
                slots[dst + i] = slots[src + i].clone();
            }
        } else {
            for i in (0..count).rev() {
                slots[dst + i] = slots[src + i].clone();
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BackingStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackingStore")
            .field("slots", &self.slots.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_store() {
        let store: BackingStore<i32> = BackingStore::zeroed(4);
        assert_eq!(store.size(), 4);
        assert_eq!(store.read_range(0, 4), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_clone_shares_block() {
        let store = BackingStore::from_vec(vec![1, 2, 3]);
        let handle = store.clone();
        handle.write(1, 20);

        assert!(store.same_block(&handle));
        assert_eq!(store.read(1), 20);
        assert_eq!(store.handle_count(), 2);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let store = BackingStore::from_vec(vec![1, 2, 3]);
        let copy = store.duplicate();
        copy.write(0, 100);

        assert!(!store.same_block(&copy));
        assert_eq!(store.read(0), 1);
        assert_eq!(copy.read(0), 100);
    }

    #[test]
    fn test_move_within_forward_overlap() {
        let store = BackingStore::from_vec(vec![1, 2, 3, 4, 5]);
        store.move_within(1, 0, 3);
        assert_eq!(store.read_range(0, 5), vec![2, 3, 4, 4, 5]);
    }

    #[test]
    fn test_move_within_backward_overlap() {
        let store = BackingStore::from_vec(vec![1, 2, 3, 4, 5]);
        store.move_within(0, 1, 3);
        assert_eq!(store.read_range(0, 5), vec![1, 1, 2, 3, 5]);
    }

    #[test]
    fn test_reset_range() {
        let store = BackingStore::from_vec(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        store.reset(0, 2);
        assert_eq!(store.read_range(0, 3), vec!["", "", "c"]);
    }
}

//! Capacity growth for appends that overflow a view.
//!
//! Small stores double. Past `threshold` the factor tapers smoothly from
//! 2x toward 1.25x so large sequences do not waste half their memory.

use serde::Deserialize;

pub const DEFAULT_THRESHOLD: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrowthPolicy {
    pub threshold: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl GrowthPolicy {
    pub fn new(threshold: usize) -> Self {
        GrowthPolicy { threshold }
    }

    /// Capacity of the store that replaces one of `old` slots when
    /// `needed` slots are required. Always `>= needed` and `>= old`.
    pub fn next_capacity(&self, old: usize, needed: usize) -> usize {
        let doubled = old.saturating_mul(2);
        if needed > doubled {
            return needed;
        }
        if old < self.threshold {
            return doubled;
        }

        let step_base = self.threshold.saturating_mul(3);
        let mut capacity = old;
        while capacity < needed {
            let step = (capacity.saturating_add(step_base) / 4).max(1);
            capacity = capacity.saturating_add(step);
        }
        capacity
    }
}

/// [`GrowthPolicy::next_capacity`] under the default threshold.
pub fn next_capacity(old: usize, needed: usize) -> usize {
    GrowthPolicy::default().next_capacity(old, needed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_capacities_double() {
        assert_eq!(next_capacity(1, 2), 2);
        assert_eq!(next_capacity(2, 3), 4);
        assert_eq!(next_capacity(5, 6), 10);
        assert_eq!(next_capacity(10, 11), 20);
        assert_eq!(next_capacity(128, 129), 256);
    }

    #[test]
    fn test_needed_beyond_double_wins() {
        assert_eq!(next_capacity(0, 1), 1);
        assert_eq!(next_capacity(0, 5), 5);
        assert_eq!(next_capacity(3, 9), 9);
    }

    #[test]
    fn test_growth_from_empty_sequence() {
        let mut cap = 0;
        let mut seen = Vec::new();
        for len in 1..=5 {
            if len > cap {
                cap = next_capacity(cap, len);
            }
            seen.push(cap);
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8]);
    }

    #[test]
    fn test_large_capacities_taper() {
        // 256 + (256 + 768) / 4
        assert_eq!(next_capacity(256, 257), 512);
        // 1024 + (1024 + 768) / 4
        assert_eq!(next_capacity(1024, 1025), 1472);

        let old = 1_000_000;
        let grown = next_capacity(old, old + 1);
        assert!(grown < old * 2);
        assert!(grown >= old + old / 4);
    }

    #[test]
    fn test_custom_threshold() {
        let policy = GrowthPolicy::new(4);
        assert_eq!(policy.next_capacity(2, 3), 4);
        // 8 + (8 + 12) / 4
        assert_eq!(policy.next_capacity(8, 9), 13);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let grown = next_capacity(usize::MAX - 1, usize::MAX);
        assert_eq!(grown, usize::MAX);
    }

    proptest! {
        #[test]
        fn test_next_capacity_covers_need(old in 0usize..1_000_000, extra in 1usize..10_000) {
            let needed = old + extra;
            let grown = next_capacity(old, needed);
            prop_assert!(grown >= needed);
            prop_assert!(grown >= old);
        }

        #[test]
        fn test_small_stores_take_max_of_double_and_need(old in 0usize..256, extra in 1usize..2_000) {
            let needed = old + extra;
            prop_assert_eq!(next_capacity(old, needed), needed.max(old * 2));
        }
    }
}

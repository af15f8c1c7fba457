//! Index arithmetic shared by both carousel variants.

/// Modular wraparound in both directions.
///
/// `len` of zero has no valid index; callers never construct an empty
/// carousel, but the guard keeps this total.
pub fn wrap_index(target: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    target.rem_euclid(len as isize) as usize
}

/// Highest start index that still fills the visible window.
pub fn max_index(item_count: usize, visible_count: usize) -> usize {
    item_count.saturating_sub(visible_count)
}

/// Step forward one item, jumping straight back to zero once the window
/// already shows the last item.
pub fn advance_or_reset(current: usize, max: usize) -> usize {
    if current < max { current + 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index_forward_and_backward() {
        assert_eq!(wrap_index(-1, 4), 3);
        assert_eq!(wrap_index(4, 4), 0);
        assert_eq!(wrap_index(0, 4), 0);
        assert_eq!(wrap_index(-9, 4), 3);
        assert_eq!(wrap_index(11, 4), 3);
        assert_eq!(wrap_index(5, 1), 0);
        assert_eq!(wrap_index(3, 0), 0);
    }

    #[test]
    fn test_wrap_index_matches_double_mod_formula() {
        for len in 1..=7usize {
            for k in -20isize..=20 {
                let n = len as isize;
                let expected = (((k % n) + n) % n) as usize;
                assert_eq!(wrap_index(k, len), expected, "k={k} len={len}");
            }
        }
    }

    #[test]
    fn test_max_index() {
        assert_eq!(max_index(5, 2), 3);
        assert_eq!(max_index(5, 3), 2);
        assert_eq!(max_index(2, 3), 0);
        assert_eq!(max_index(0, 1), 0);
    }

    #[test]
    fn test_advance_or_reset() {
        assert_eq!(advance_or_reset(0, 3), 1);
        assert_eq!(advance_or_reset(2, 3), 3);
        assert_eq!(advance_or_reset(3, 3), 0);
        assert_eq!(advance_or_reset(0, 0), 0);
        // Past the bound (before a clamp) still resets
        assert_eq!(advance_or_reset(5, 3), 0);
    }
}

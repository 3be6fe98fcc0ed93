//! Ordered checkpoint progression.
//!
//! `current_index` is the sequence number of the *next* checkpoint a
//! player has to reach. It only ever moves forward, one checkpoint at a
//! time; crossing any other checkpoint is ignored.

/// Advances progression when `reached_seq` is exactly the next checkpoint.
pub fn try_advance(current_index: u32, reached_seq: u32) -> Option<u32> {
    if reached_seq == current_index {
        return Some(current_index + 1);
    }

    None
}

/// Checkpoint to respawn at: the last one passed, or the first one when
/// nothing has been passed yet.
pub fn respawn_seq(current_index: u32) -> u32 {
    current_index.saturating_sub(1)
}

pub fn course_finished(current_index: u32, checkpoint_count: u32) -> bool {
    current_index >= checkpoint_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_next_checkpoint_advances() {
        assert_eq!(try_advance(0, 0), Some(1));
        assert_eq!(try_advance(1, 1), Some(2));

        // Skipping ahead or re-entering a passed gate does nothing.
        assert_eq!(try_advance(0, 2), None);
        assert_eq!(try_advance(3, 1), None);
        assert_eq!(try_advance(3, 4), None);
    }

    #[test]
    fn progression_is_monotonic_over_any_crossing_order() {
        // A player wandering back and forth through gates in arbitrary order
        // still only ever moves forward.
        let crossings = [2u32, 0, 0, 1, 0, 3, 2, 2, 3];
        let mut index = 0u32;

        let mut history = vec![index];
        for &seq in &crossings {
            if let Some(next) = try_advance(index, seq) {
                index = next;
            }
            history.push(index);
        }

        assert!(history.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(index, 4);
    }

    #[test]
    fn respawn_targets_the_last_passed_gate() {
        // Nothing passed: respawn at the first checkpoint.
        assert_eq!(respawn_seq(0), 0);
        // One passed (next is 1): respawn at 0, and so on.
        assert_eq!(respawn_seq(1), 0);
        assert_eq!(respawn_seq(3), 2);
    }

    #[test]
    fn finishing_requires_every_checkpoint() {
        assert!(!course_finished(3, 4));
        assert!(course_finished(4, 4));
        assert!(course_finished(5, 4));
    }
}

//! Playback state machine.
//!
//! The session itself is stateless: each transition is computed from the
//! index reported by the client and the catalog length resolved fresh for
//! the current invocation.

/// Transition taken when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartStep {
    Play { index: usize },
    NothingToPlay,
}

/// Transition taken when the client reports a finished video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceStep {
    Play { index: usize },
    Completed,
}

pub fn start_step(catalog_len: usize) -> StartStep {
    if catalog_len == 0 {
        StartStep::NothingToPlay
    } else {
        StartStep::Play { index: 0 }
    }
}

pub fn advance_step(reported_index: usize, catalog_len: usize) -> AdvanceStep {
    let next = reported_index.saturating_add(1);
    if next >= catalog_len {
        AdvanceStep::Completed
    } else {
        AdvanceStep::Play { index: next }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_plays_head_of_nonempty_catalog() {
        assert_eq!(start_step(1), StartStep::Play { index: 0 });
        assert_eq!(start_step(3), StartStep::Play { index: 0 });
    }

    #[test]
    fn start_reports_nothing_to_play_for_empty_catalog() {
        assert_eq!(start_step(0), StartStep::NothingToPlay);
    }

    #[test]
    fn advance_plays_successor_while_in_range() {
        assert_eq!(advance_step(0, 3), AdvanceStep::Play { index: 1 });
        assert_eq!(advance_step(1, 3), AdvanceStep::Play { index: 2 });
    }

    #[test]
    fn advance_completes_at_end_of_catalog() {
        assert_eq!(advance_step(2, 3), AdvanceStep::Completed);
        assert_eq!(advance_step(7, 3), AdvanceStep::Completed);
        assert_eq!(advance_step(0, 0), AdvanceStep::Completed);
    }

    #[test]
    fn advance_does_not_overflow_at_index_limit() {
        assert_eq!(advance_step(usize::MAX, 3), AdvanceStep::Completed);
    }
}

use std::time::Duration;

use super::card::{CardId, PlayCard};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardVisual {
    FaceDown,
    Flipped,
    Matched,
    Mismatched,
}

/// Display surface the session draws into. Cards are addressed by their [`CardId`].
pub trait Renderer {
    /// Drops everything drawn for the previous board.
    fn clear_board(&mut self);
    fn render_card(&mut self, id: CardId, card: &PlayCard);
    fn render_placeholder(&mut self, id: CardId);
    fn set_layout(&mut self, rows: u32, cols: u32);
    fn set_board_pixel_size(&mut self, width: u32, height: u32);
    fn set_card_visual(&mut self, id: CardId, visual: CardVisual);
    /// Matched cards are made permanently non-interactive through this.
    fn set_card_interactive(&mut self, id: CardId, interactive: bool);
    fn announce_win(&mut self);
    fn announce_config_error(&mut self, message: &str);
}

/// A delayed transition, tagged with the board generation that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    ResolveMatch {
        generation: u64,
        first: CardId,
        second: CardId,
    },
    ResolveMismatch {
        generation: u64,
        first: CardId,
        second: CardId,
    },
    AnnounceWin {
        generation: u64,
    },
}

impl TimerEvent {
    pub fn generation(&self) -> u64 {
        match *self {
            TimerEvent::ResolveMatch { generation, .. }
            | TimerEvent::ResolveMismatch { generation, .. }
            | TimerEvent::AnnounceWin { generation } => generation,
        }
    }
}

/// Fire-and-forget one-shot scheduler. The host hands the event back to
/// [`Session::timer_fired`](super::session::Session::timer_fired) once `delay` has elapsed.
pub trait Clock {
    fn after(&mut self, delay: Duration, event: TimerEvent);
}

/// A clock that only advances when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    pending: Vec<(Duration, u64, TimerEvent)>,
    seq: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Moves time forward and returns the events that came due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerEvent> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<_> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, event)| event).collect()
    }
}

impl Clock for ManualClock {
    fn after(&mut self, delay: Duration, event: TimerEvent) {
        self.seq += 1;
        self.pending.push((self.now + delay, self.seq, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_releases_due_events_in_order() {
        let mut clock = ManualClock::new();
        clock.after(Duration::from_millis(300), TimerEvent::AnnounceWin { generation: 2 });
        clock.after(Duration::from_millis(100), TimerEvent::AnnounceWin { generation: 1 });
        clock.after(Duration::from_millis(900), TimerEvent::AnnounceWin { generation: 3 });

        assert!(clock.advance(Duration::from_millis(50)).is_empty());
        let due = clock.advance(Duration::from_millis(250));
        assert_eq!(
            due,
            vec![
                TimerEvent::AnnounceWin { generation: 1 },
                TimerEvent::AnnounceWin { generation: 2 },
            ]
        );
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.now(), Duration::from_millis(300));
    }
}

use super::card::{CardId, CardSlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OneFlipped,
    Evaluating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    Locked,
    SameCard,
    AlreadyMatched,
    NotPlayable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored(Ignored),
    First(CardId),
    Match { first: CardId, second: CardId },
    Mismatch { first: CardId, second: CardId },
}

/// Flip/match bookkeeping for one board.
///
/// Either slot may be empty; `locked` is set exactly while both are occupied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    first_flipped: Option<CardId>,
    second_flipped: Option<CardId>,
    locked: bool,
    matches_found: usize,
    total_pairs: usize,
    attempts: u32,
}

impl GameState {
    pub fn new(total_pairs: usize) -> Self {
        GameState {
            total_pairs,
            ..GameState::default()
        }
    }

    pub fn first_flipped(&self) -> Option<CardId> {
        self.first_flipped
    }

    pub fn second_flipped(&self) -> Option<CardId> {
        self.second_flipped
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn matches_found(&self) -> usize {
        self.matches_found
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    /// Evaluated pairs, matched or not.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn phase(&self) -> Phase {
        match (self.first_flipped, self.second_flipped) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::OneFlipped,
            (Some(_), Some(_)) => Phase::Evaluating,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total_pairs > 0 && self.matches_found == self.total_pairs
    }

    /// Accepts or ignores a flip and, on the second card, evaluates the pair at once.
    ///
    /// A match marks both cards as matched immediately; the board stays locked until
    /// [`GameState::resolve`] is called for the same pair.
    pub fn request_flip(&mut self, card: CardId, slots: &mut [CardSlot]) -> FlipOutcome {
        if self.locked {
            return FlipOutcome::Ignored(Ignored::Locked);
        }
        if self.first_flipped == Some(card) {
            return FlipOutcome::Ignored(Ignored::SameCard);
        }
        let Some(play) = slots.get(card.0).and_then(CardSlot::as_play) else {
            return FlipOutcome::Ignored(Ignored::NotPlayable);
        };
        if play.matched {
            return FlipOutcome::Ignored(Ignored::AlreadyMatched);
        }

        let Some(first) = self.first_flipped else {
            self.first_flipped = Some(card);
            return FlipOutcome::First(card);
        };

        self.second_flipped = Some(card);
        self.locked = true;
        self.evaluate(first, card, slots)
    }

    fn evaluate(&mut self, first: CardId, second: CardId, slots: &mut [CardSlot]) -> FlipOutcome {
        self.attempts = self.attempts.saturating_add(1);
        let prefix_of = |slots: &[CardSlot], id: CardId| {
            slots
                .get(id.0)
                .and_then(CardSlot::as_play)
                .map(|card| card.prefix.clone())
        };
        let is_match = match (prefix_of(slots, first), prefix_of(slots, second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        if !is_match {
            return FlipOutcome::Mismatch { first, second };
        }

        for id in [first, second] {
            if let Some(card) = slots.get_mut(id.0).and_then(CardSlot::as_play_mut) {
                card.matched = true;
            }
        }
        self.matches_found += 1;
        FlipOutcome::Match { first, second }
    }

    /// Clears the flip slots and unlocks, but only if `first`/`second` is the pair
    /// currently under evaluation. Returns whether anything changed.
    pub fn resolve(&mut self, first: CardId, second: CardId) -> bool {
        if !self.locked
            || self.first_flipped != Some(first)
            || self.second_flipped != Some(second)
        {
            return false;
        }
        self.first_flipped = None;
        self.second_flipped = None;
        self.locked = false;
        true
    }
}

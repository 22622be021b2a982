use std::iter;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use super::card::{AssetId, CardId, CardSlot, PlayCard};
use super::collab::{CardVisual, Clock, Renderer, TimerEvent};
use super::layout::{BoardLayout, BoardSizing, LayoutPolicy, Viewport, compute_sizing};
use super::planner::{CardCount, InvalidConfiguration, plan};
use super::state::{FlipOutcome, GameState};

pub const DEFAULT_GAP_PX: u32 = 10;
pub const DEFAULT_MATCH_REVEAL_MS: u64 = 800;
pub const DEFAULT_MISMATCH_REVEAL_MS: u64 = 800;
pub const DEFAULT_WIN_DELAY_MS: u64 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// How long a found pair flashes as matched before it settles.
    pub match_reveal: Duration,
    /// How long a wrong pair stays visible before turning face-down.
    pub mismatch_reveal: Duration,
    /// Pause between the last match settling and the win announcement.
    pub win_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            match_reveal: Duration::from_millis(DEFAULT_MATCH_REVEAL_MS),
            mismatch_reveal: Duration::from_millis(DEFAULT_MISMATCH_REVEAL_MS),
            win_delay: Duration::from_millis(DEFAULT_WIN_DELAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub layout: LayoutPolicy,
    pub separator: char,
    pub gap_px: u32,
    pub timings: Timings,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            layout: LayoutPolicy::default(),
            separator: '_',
            gap_px: DEFAULT_GAP_PX,
            timings: Timings::default(),
        }
    }
}

/// One game window's worth of state: the current board and its flip/match machine.
///
/// Every successful [`Session::start`] bumps the generation; timer events from an
/// earlier generation are dropped when they fire.
#[derive(Debug)]
pub struct Session {
    settings: SessionSettings,
    generation: u64,
    slots: Vec<CardSlot>,
    layout: Option<BoardLayout>,
    state: GameState,
    win_scheduled: bool,
    win_announced: bool,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        Session {
            settings,
            generation: 0,
            slots: Vec::new(),
            layout: None,
            state: GameState::default(),
            win_scheduled: false,
            win_announced: false,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn layout(&self) -> Option<BoardLayout> {
        self.layout
    }

    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    pub fn is_won(&self) -> bool {
        self.win_announced
    }

    /// Plans and draws a fresh board.
    ///
    /// On error the message is announced and the current board is left as it was.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        assets: &[AssetId],
        count: CardCount,
        viewport: Viewport,
        renderer: &mut dyn Renderer,
        rng: &mut R,
    ) -> Result<(), InvalidConfiguration> {
        let board = match plan(
            assets,
            count,
            self.settings.layout,
            self.settings.separator,
            rng,
        ) {
            Ok(board) => board,
            Err(err) => {
                warn!(%err, "board generation rejected");
                renderer.announce_config_error(&err.to_string());
                return Err(err);
            }
        };

        let placeholders = board.placeholders();
        let separator = self.settings.separator;
        self.generation = self.generation.wrapping_add(1);
        self.slots = board
            .cards
            .into_iter()
            .map(|asset| CardSlot::Play(PlayCard::new(asset, separator)))
            .chain(iter::repeat_n(CardSlot::Placeholder, placeholders))
            .collect();
        self.layout = Some(board.layout);
        self.state = GameState::new(board.total_pairs);
        self.win_scheduled = false;
        self.win_announced = false;

        renderer.clear_board();
        renderer.set_layout(board.layout.rows, board.layout.cols);
        for (idx, slot) in self.slots.iter().enumerate() {
            match slot {
                CardSlot::Play(card) => renderer.render_card(CardId(idx), card),
                CardSlot::Placeholder => renderer.render_placeholder(CardId(idx)),
            }
        }
        self.resize(viewport, renderer);

        info!(
            generation = self.generation,
            pairs = board.total_pairs,
            rows = board.layout.rows,
            cols = board.layout.cols,
            placeholders,
            "new board"
        );
        Ok(())
    }

    pub fn card_clicked(
        &mut self,
        id: CardId,
        renderer: &mut dyn Renderer,
        clock: &mut dyn Clock,
    ) -> FlipOutcome {
        let outcome = self.state.request_flip(id, &mut self.slots);
        let generation = self.generation;
        let timings = self.settings.timings;
        match outcome {
            FlipOutcome::Ignored(reason) => {
                debug!(card = id.0, ?reason, "flip ignored");
            }
            FlipOutcome::First(card) => {
                renderer.set_card_visual(card, CardVisual::Flipped);
            }
            FlipOutcome::Match { first, second } => {
                renderer.set_card_visual(second, CardVisual::Flipped);
                renderer.set_card_visual(first, CardVisual::Matched);
                renderer.set_card_visual(second, CardVisual::Matched);
                debug!(
                    first = first.0,
                    second = second.0,
                    matches = self.state.matches_found(),
                    "match"
                );
                clock.after(
                    timings.match_reveal,
                    TimerEvent::ResolveMatch {
                        generation,
                        first,
                        second,
                    },
                );
            }
            FlipOutcome::Mismatch { first, second } => {
                renderer.set_card_visual(second, CardVisual::Flipped);
                renderer.set_card_visual(first, CardVisual::Mismatched);
                renderer.set_card_visual(second, CardVisual::Mismatched);
                debug!(first = first.0, second = second.0, "mismatch");
                clock.after(
                    timings.mismatch_reveal,
                    TimerEvent::ResolveMismatch {
                        generation,
                        first,
                        second,
                    },
                );
            }
        }
        outcome
    }

    /// Applies a delayed transition. Returns `false` when the event was stale.
    pub fn timer_fired(
        &mut self,
        event: TimerEvent,
        renderer: &mut dyn Renderer,
        clock: &mut dyn Clock,
    ) -> bool {
        if event.generation() != self.generation {
            debug!(
                event_generation = event.generation(),
                generation = self.generation,
                "stale timer discarded"
            );
            return false;
        }

        match event {
            TimerEvent::ResolveMatch { first, second, .. } => {
                if !self.state.resolve(first, second) {
                    return false;
                }
                for id in [first, second] {
                    renderer.set_card_visual(id, CardVisual::Flipped);
                    renderer.set_card_interactive(id, false);
                }
                if self.state.is_complete() && !self.win_scheduled {
                    self.win_scheduled = true;
                    clock.after(
                        self.settings.timings.win_delay,
                        TimerEvent::AnnounceWin {
                            generation: self.generation,
                        },
                    );
                }
                true
            }
            TimerEvent::ResolveMismatch { first, second, .. } => {
                if !self.state.resolve(first, second) {
                    return false;
                }
                for id in [first, second] {
                    renderer.set_card_visual(id, CardVisual::FaceDown);
                }
                true
            }
            TimerEvent::AnnounceWin { .. } => {
                if self.win_announced || !self.state.is_complete() {
                    return false;
                }
                self.win_announced = true;
                info!(
                    generation = self.generation,
                    attempts = self.state.attempts(),
                    "board cleared"
                );
                renderer.announce_win();
                true
            }
        }
    }

    /// Card and board pixel sizes for the stored layout, if a board exists.
    pub fn sizing(&self, viewport: Viewport) -> Option<BoardSizing> {
        self.layout
            .map(|layout| compute_sizing(layout, viewport, self.settings.gap_px))
    }

    /// Re-fits the current board to `viewport`. Never touches flip state or card order.
    pub fn resize(&self, viewport: Viewport, renderer: &mut dyn Renderer) -> Option<BoardSizing> {
        let sizing = self.sizing(viewport)?;
        debug!(
            card_size = sizing.card_size,
            width = sizing.board_width,
            height = sizing.board_height,
            "board resized"
        );
        renderer.set_board_pixel_size(sizing.board_width, sizing.board_height);
        Some(sizing)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionSettings::default())
    }
}

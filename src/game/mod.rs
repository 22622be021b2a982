//! Toolkit-free game logic: board planning and the flip/match machine.

pub mod card;
pub mod collab;
pub mod layout;
pub mod planner;
pub mod prefix;
pub mod session;
pub mod shuffle;
pub mod state;

pub use card::{AssetId, CardId, CardSlot, PlayCard};
pub use collab::{CardVisual, Clock, ManualClock, Renderer, TimerEvent};
pub use layout::{
    BoardLayout, BoardSizing, LayoutPolicy, Viewport, card_size_for_board_width, compute_sizing,
};
pub use planner::{BoardPlan, CardCount, InvalidConfiguration, plan};
pub use prefix::{PrefixGroups, group_by_prefix};
pub use session::{Session, SessionSettings, Timings};
pub use shuffle::shuffle;
pub use state::{FlipOutcome, GameState, Ignored, Phase};

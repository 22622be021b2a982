use std::cell::RefCell;
use std::rc::Weak;

use gtk4 as gtk;
use libadwaita as adw;

use crate::config::GameConfig;
use crate::game::{AssetId, CardCount, Session};

use super::board::GtkBoard;
use super::clock::GlibClock;

pub struct UiState {
    pub window: Option<adw::ApplicationWindow>,
    pub header: Option<adw::HeaderBar>,
    pub title_subtitle: Option<gtk::Label>,

    // Game state
    pub session: Session,
    pub board: GtkBoard,
    pub clock: GlibClock,
    pub assets: Vec<AssetId>,
    pub card_count: CardCount,
}

impl UiState {
    pub fn new(config: &GameConfig, self_ref: Weak<RefCell<UiState>>) -> Self {
        UiState {
            window: None,
            header: None,
            title_subtitle: None,
            session: Session::new(config.session_settings()),
            board: GtkBoard::new(config.image_dir.clone(), config.gap_px, self_ref.clone()),
            clock: GlibClock::new(self_ref),
            assets: config.asset_ids(),
            card_count: config.card_count(),
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use crate::game::Viewport;

use super::board::CONTENT_MARGIN;
use super::state::UiState;

pub(super) fn update_subtitle(st: &UiState) {
    if let Some(subtitle) = &st.title_subtitle {
        let game = st.session.state();
        if st.session.is_won() {
            subtitle.set_text(&format!("Cleared in {} attempts", game.attempts()));
        } else {
            subtitle.set_text(&format!(
                "Pairs {}/{} · Attempts {}",
                game.matches_found(),
                game.total_pairs(),
                game.attempts()
            ));
        }
    }
}

/// Space the board may use: the window minus margins and whatever sits above the board.
pub(super) fn current_viewport(st: &UiState) -> Viewport {
    let (width, height) = st
        .window
        .as_ref()
        .map(|win| (win.width(), win.height()))
        .unwrap_or((0, 0));
    let header_height = st.header.as_ref().map(|header| header.height()).unwrap_or(0);
    Viewport {
        width: width - CONTENT_MARGIN * 2,
        height: height - CONTENT_MARGIN,
        occupied_above: header_height + CONTENT_MARGIN,
    }
}

pub(super) fn refit_board(state: &Rc<RefCell<UiState>>) {
    let mut guard = state.borrow_mut();
    let st = &mut *guard;
    let viewport = current_viewport(st);
    st.session.resize(viewport, &mut st.board);
}

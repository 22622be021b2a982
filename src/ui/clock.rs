use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use crate::game::{Clock, TimerEvent};

use super::hud::update_subtitle;
use super::state::UiState;

/// Schedules timer events on the GLib main loop and feeds them back into the session.
pub struct GlibClock {
    state: Weak<RefCell<UiState>>,
}

impl GlibClock {
    pub fn new(state: Weak<RefCell<UiState>>) -> Self {
        GlibClock { state }
    }
}

impl Clock for GlibClock {
    fn after(&mut self, delay: Duration, event: TimerEvent) {
        let state_weak = self.state.clone();
        glib::timeout_add_local_once(delay, move || {
            let Some(state) = state_weak.upgrade() else {
                return;
            };
            let mut guard = state.borrow_mut();
            let st = &mut *guard;
            st.session.timer_fired(event, &mut st.board, &mut st.clock);
            update_subtitle(st);
        });
    }
}

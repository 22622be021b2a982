use std::cell::RefCell;
use std::rc::Rc;

use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::gdk;
use gtk4::prelude::*;
use libadwaita as adw;

use adw::prelude::*;
use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::game::CardId;

use super::board::CONTENT_MARGIN;
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{current_viewport, refit_board, update_subtitle};
use super::state::UiState;

const APP_ID: &str = "io.github.pairs.Pairs";
const STYLE_CSS: &str = include_str!("style.css");

pub fn handle_card_click(state: &Rc<RefCell<UiState>>, id: CardId) {
    let mut guard = state.borrow_mut();
    let st = &mut *guard;
    st.session.card_clicked(id, &mut st.board, &mut st.clock);
    update_subtitle(st);
}

/// Plans a fresh board from the catalog. A rejected plan leaves the current board in place.
pub fn start_new_game(state: &Rc<RefCell<UiState>>) {
    let mut guard = state.borrow_mut();
    let st = &mut *guard;
    let viewport = current_viewport(st);
    let mut rng = rand::rng();
    if let Err(err) = st.session.start(
        &st.assets,
        st.card_count,
        viewport,
        &mut st.board,
        &mut rng,
    ) {
        warn!(%err, "new game not started");
    }
    update_subtitle(st);
}

fn load_css() {
    let Some(display) = gdk::Display::default() else {
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(STYLE_CSS);
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn build_game_view(state: &Rc<RefCell<UiState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);
    root.set_margin_top(CONTENT_MARGIN);
    root.set_margin_start(CONTENT_MARGIN);
    root.set_margin_end(CONTENT_MARGIN);
    root.add_css_class("game-root");

    let st = state.borrow();
    root.append(st.board.widget());
    root
}

fn schedule_refit(state: &Rc<RefCell<UiState>>) {
    let state_weak = Rc::downgrade(state);
    // Allocation catches up with the new window size on the next main-loop turn.
    glib::idle_add_local_once(move || {
        if let Some(state) = state_weak.upgrade() {
            refit_board(&state);
        }
    });
}

pub fn run(config: GameConfig) -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        load_css();

        let state = Rc::new_cyclic(|weak| RefCell::new(UiState::new(&config, weak.clone())));

        let new_game_action = SimpleAction::new("new-game", None);
        new_game_action.connect_activate({
            let state = state.clone();
            move |_, _| start_new_game(&state)
        });
        app.add_action(&new_game_action);
        app.set_accels_for_action("app.new-game", &["<Control>n"]);

        let instructions_action = SimpleAction::new("instructions", None);
        instructions_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_instructions_dialog(&app);
            }
        });
        app.add_action(&instructions_action);

        let about_action = SimpleAction::new("about", None);
        about_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_about_dialog(&app);
            }
        });
        app.add_action(&about_action);

        let quit_action = SimpleAction::new("quit", None);
        quit_action.connect_activate({
            let app = app.clone();
            move |_, _| app.quit()
        });
        app.add_action(&quit_action);
        app.set_accels_for_action("app.quit", &["<Control>q"]);

        let title_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
        title_box.set_valign(gtk::Align::Center);
        title_box.set_halign(gtk::Align::Center);

        let title_main = gtk::Label::builder()
            .label("Pairs")
            .halign(gtk::Align::Center)
            .css_classes(vec!["game-title-main"])
            .build();
        let title_subtitle = gtk::Label::builder()
            .label("")
            .halign(gtk::Align::Center)
            .css_classes(vec!["game-title-subtitle", "caption"])
            .build();
        title_box.append(&title_main);
        title_box.append(&title_subtitle);

        let header = adw::HeaderBar::builder().title_widget(&title_box).build();
        header.add_css_class("app-header");
        header.add_css_class("flat");

        let restart_button = gtk::Button::builder()
            .icon_name("view-refresh-symbolic")
            .action_name("app.new-game")
            .build();
        restart_button.set_tooltip_text(Some("New Game"));
        header.pack_start(&restart_button);

        let menu_model = gio::Menu::new();
        menu_model.append(Some("New Game"), Some("app.new-game"));
        menu_model.append(Some("Instructions"), Some("app.instructions"));
        menu_model.append(Some("About Pairs"), Some("app.about"));
        menu_model.append(Some("Quit"), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu_model)
            .build();
        header.pack_end(&menu_button);

        let game_view = build_game_view(&state);
        let toolbar = adw::ToolbarView::new();
        toolbar.set_hexpand(true);
        toolbar.set_vexpand(true);
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&game_view));

        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title("Pairs")
            .default_width(960)
            .default_height(720)
            .content(&toolbar)
            .build();
        win.set_size_request(360, 480);
        win.add_css_class("app-window");

        for property in ["default-width", "default-height", "maximized", "fullscreened"] {
            win.connect_notify_local(Some(property), {
                let state = state.clone();
                move |_, _| schedule_refit(&state)
            });
        }

        {
            let mut st = state.borrow_mut();
            st.window = Some(win.clone());
            st.header = Some(header.clone());
            st.title_subtitle = Some(title_subtitle);
        }

        win.present();
        debug!("window presented");

        // The first board needs a realized window to size against.
        let state_start = state.clone();
        glib::idle_add_local_once(move || start_new_game(&state_start));
    });

    app.run()
}

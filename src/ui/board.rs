use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Weak;

use gtk4 as gtk;
use gtk4::pango;
use libadwaita as adw;

use adw::prelude::*;
use tracing::debug;

use crate::game::{CardId, CardVisual, PlayCard, Renderer, card_size_for_board_width};

use super::app::{handle_card_click, start_new_game};
use super::state::UiState;

pub const CONTENT_MARGIN: i32 = 12;

const VISUAL_CLASSES: [&str; 3] = ["flipped", "matched", "mismatched"];

/// Space kept between a card's edge and its image.
const FACE_INSET: i32 = 8;

struct CardWidgets {
    button: gtk::Button,
    faces: gtk::Stack,
    front: gtk::Image,
}

/// The board grid. Slot `i` sits at row `i / cols`, column `i % cols`.
///
/// Every slot is a square [`gtk::AspectFrame`] whose size is pinned by
/// [`Renderer::set_board_pixel_size`]; image natural sizes never reach the grid.
pub struct GtkBoard {
    grid: gtk::Grid,
    viewport: gtk::ScrolledWindow,
    cells: Vec<gtk::AspectFrame>,
    cards: Vec<Option<CardWidgets>>,
    cols: u32,
    gap_px: u32,
    card_size: i32,
    image_dir: PathBuf,
    state: Weak<RefCell<UiState>>,
}

impl GtkBoard {
    pub fn new(image_dir: PathBuf, gap_px: u32, state: Weak<RefCell<UiState>>) -> Self {
        let grid = gtk::Grid::new();
        grid.add_css_class("pairs-board");
        grid.set_row_spacing(gap_px);
        grid.set_column_spacing(gap_px);
        grid.set_row_homogeneous(true);
        grid.set_column_homogeneous(true);
        grid.set_halign(gtk::Align::Center);
        grid.set_valign(gtk::Align::Start);

        // External keeps the grid's size request from pinning the window's minimum size.
        let viewport = gtk::ScrolledWindow::builder()
            .hscrollbar_policy(gtk::PolicyType::External)
            .vscrollbar_policy(gtk::PolicyType::External)
            .hexpand(true)
            .vexpand(true)
            .child(&grid)
            .build();

        GtkBoard {
            grid,
            viewport,
            cells: Vec::new(),
            cards: Vec::new(),
            cols: 1,
            gap_px,
            card_size: 0,
            image_dir,
            state,
        }
    }

    pub fn widget(&self) -> &gtk::ScrolledWindow {
        &self.viewport
    }

    fn attach(&mut self, widget: &impl IsA<gtk::Widget>, id: CardId) {
        let cell = gtk::AspectFrame::builder()
            .ratio(1.0)
            .obey_child(false)
            .halign(gtk::Align::Fill)
            .valign(gtk::Align::Fill)
            .hexpand(false)
            .vexpand(false)
            .overflow(gtk::Overflow::Hidden)
            .child(widget)
            .build();
        cell.set_size_request(self.card_size, self.card_size);

        let cols = self.cols.max(1) as usize;
        let x = (id.0 % cols) as i32;
        let y = (id.0 / cols) as i32;
        self.grid.attach(&cell, x, y, 1, 1);
        self.cells.push(cell);
    }

    fn apply_card_size(&mut self, card_size: i32) {
        self.card_size = card_size;
        let face = (card_size - FACE_INSET * 2).max(1);
        for cell in &self.cells {
            cell.set_size_request(card_size, card_size);
        }
        for widgets in self.cards.iter().flatten() {
            widgets.front.set_pixel_size(face);
        }
    }

    fn store(&mut self, id: CardId, widgets: Option<CardWidgets>) {
        if self.cards.len() <= id.0 {
            self.cards.resize_with(id.0 + 1, || None);
        }
        self.cards[id.0] = widgets;
    }

    fn widgets(&self, id: CardId) -> Option<&CardWidgets> {
        self.cards.get(id.0)?.as_ref()
    }
}

fn build_card_back() -> gtk::DrawingArea {
    let area = gtk::DrawingArea::new();
    area.add_css_class("pairs-card-back");
    area.set_draw_func(|area, cr, width, height| {
        let min_dim = width.min(height) as f64;
        cr.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(cr);
        let mut font_desc = pango::FontDescription::new();
        font_desc.set_family("Cantarell, Noto Sans, sans");
        font_desc.set_weight(pango::Weight::Bold);
        font_desc.set_size((min_dim * 0.34 * pango::SCALE as f64) as i32);
        layout.set_font_description(Some(&font_desc));
        layout.set_text("?");

        let fg = area.style_context().color();
        cr.set_source_rgba(
            fg.red() as f64,
            fg.green() as f64,
            fg.blue() as f64,
            fg.alpha() as f64,
        );

        let (text_width, text_height) = layout.pixel_size();
        cr.move_to(
            (width as f64 - text_width as f64) / 2.0,
            (height as f64 - text_height as f64) / 2.0,
        );
        pangocairo::functions::show_layout(cr, &layout);
    });
    area
}

impl Renderer for GtkBoard {
    fn clear_board(&mut self) {
        while let Some(child) = self.grid.first_child() {
            self.grid.remove(&child);
        }
        self.cells.clear();
        self.cards.clear();
    }

    fn render_card(&mut self, id: CardId, card: &PlayCard) {
        let front = gtk::Image::from_file(self.image_dir.join(card.asset.as_str()));
        front.set_pixel_size((self.card_size - FACE_INSET * 2).max(1));
        front.set_tooltip_text(Some(card.asset.as_str()));
        front.add_css_class("pairs-card-front");

        let faces = gtk::Stack::new();
        faces.set_transition_type(gtk::StackTransitionType::Crossfade);
        faces.set_transition_duration(180);
        faces.add_named(&build_card_back(), Some("back"));
        faces.add_named(&front, Some("front"));
        faces.set_visible_child_name("back");

        let button = gtk::Button::builder()
            .css_classes(vec!["pairs-card"])
            .child(&faces)
            .build();

        let state_weak = self.state.clone();
        button.connect_clicked(move |_| {
            if let Some(state) = state_weak.upgrade() {
                handle_card_click(&state, id);
            }
        });

        self.attach(&button, id);
        self.store(
            id,
            Some(CardWidgets {
                button,
                faces,
                front,
            }),
        );
    }

    fn render_placeholder(&mut self, id: CardId) {
        let cell = gtk::Box::new(gtk::Orientation::Vertical, 0);
        cell.add_css_class("pairs-card");
        cell.add_css_class("placeholder");
        cell.set_can_target(false);
        self.attach(&cell, id);
        self.store(id, None);
    }

    fn set_layout(&mut self, rows: u32, cols: u32) {
        debug!(rows, cols, "grid layout");
        self.cols = cols;
    }

    fn set_board_pixel_size(&mut self, width: u32, height: u32) {
        let card_size = card_size_for_board_width(width, self.cols, self.gap_px) as i32;
        debug!(width, height, card_size, "board pixel size");
        self.apply_card_size(card_size);
        self.grid.set_size_request(width as i32, height as i32);
    }

    fn set_card_visual(&mut self, id: CardId, visual: CardVisual) {
        let Some(widgets) = self.widgets(id) else {
            return;
        };
        for class in VISUAL_CLASSES {
            widgets.button.remove_css_class(class);
        }
        match visual {
            CardVisual::FaceDown => widgets.faces.set_visible_child_name("back"),
            CardVisual::Flipped => {
                widgets.faces.set_visible_child_name("front");
                widgets.button.add_css_class("flipped");
            }
            CardVisual::Matched => {
                widgets.faces.set_visible_child_name("front");
                widgets.button.add_css_class("flipped");
                widgets.button.add_css_class("matched");
            }
            CardVisual::Mismatched => {
                widgets.faces.set_visible_child_name("front");
                widgets.button.add_css_class("flipped");
                widgets.button.add_css_class("mismatched");
            }
        }
    }

    fn set_card_interactive(&mut self, id: CardId, interactive: bool) {
        let Some(widgets) = self.widgets(id) else {
            return;
        };
        widgets.button.set_can_target(interactive);
        if interactive {
            widgets.button.remove_css_class("solved");
        } else {
            widgets.button.add_css_class("solved");
        }
    }

    fn announce_win(&mut self) {
        let dialog = adw::AlertDialog::new(Some("You won! 🎉"), Some("Every pair has been found."));
        dialog.add_response("close", "Close");
        dialog.add_response("again", "New Game");
        dialog.set_response_appearance("again", adw::ResponseAppearance::Suggested);
        dialog.set_default_response(Some("again"));
        dialog.set_close_response("close");
        let state_weak = self.state.clone();
        dialog.connect_response(Some("again"), move |_, _| {
            if let Some(state) = state_weak.upgrade() {
                start_new_game(&state);
            }
        });
        dialog.present(Some(&self.grid));
    }

    fn announce_config_error(&mut self, message: &str) {
        let dialog = adw::AlertDialog::new(Some("Cannot build the board"), Some(message));
        dialog.add_response("ok", "Got it");
        dialog.set_default_response(Some("ok"));
        dialog.set_close_response("ok");
        dialog.present(Some(&self.viewport));
    }
}

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some("Instructions"),
        Some(
            "Flip two cards at a time.\n\
Cards whose pictures share a name before the \"_\" are a pair.\n\
Find every pair to clear the board.",
        ),
    );
    dialog.add_response("ok", "Got it");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Pairs")
        .version(env!("CARGO_PKG_VERSION"))
        .comments("A memory game for finding pairs of pictures.")
        .build();
    dialog.add_legal_section("Pairs", None, gtk::License::MitX11, None);
    dialog.present(app.active_window().as_ref());
    dialog
}

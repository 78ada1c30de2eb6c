use eframe::{
    egui,
    epaint::text::{
        FontInsert,
        FontPriority,
        InsertFontFamily,
    },
};
use rfd::FileDialog;

use super::{
    create_view::{
        self,
        CardEditor,
    },
    error_modal::ErrorModal,
    review_view,
    search_view,
    side_panel::{
        SidePanel,
        SidePanelAction,
    },
    stats_view,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::core::{
    transfer,
    DeckStore,
    ReviewSession,
    StatsLog,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Review,
    Search,
    Create,
    Stats,
}

impl View {
    pub const ALL: [View; 4] = [View::Review, View::Search, View::Create, View::Stats];

    pub fn title(self) -> &'static str {
        match self {
            View::Review => "REVIEW",
            View::Search => "SEARCH",
            View::Create => "CREATE",
            View::Stats => "STATS",
        }
    }
}

pub struct AbhyasApp {
    // Domain state
    pub deck: DeckStore,
    pub session: ReviewSession,
    pub stats: StatsLog,

    // UI state
    pub view: View,
    pub search_query: String,
    pub editor: CardEditor,
    pub theme: Theme,
    pub error_modal: ErrorModal,
}

impl AbhyasApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::midnight();
        set_theme(&cc.egui_ctx, theme.clone());
        setup_fonts(&cc.egui_ctx);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Self {
            deck: DeckStore::load(),
            session: ReviewSession::new(),
            stats: StatsLog::new(),
            view: View::Review,
            search_query: String::new(),
            editor: CardEditor::default(),
            theme,
            error_modal: ErrorModal::new(),
        }
    }

    /// Review-view shortcuts: Space flips, arrows move, 1/0 grade.
    /// Inactive while a text field or the error modal has the keyboard.
    fn handle_review_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let deck_len = self.deck.len();
        if deck_len == 0 {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.session.flip();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.session.next(deck_len);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            self.session.prev(deck_len);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Num1)) {
            self.session.answer(true, deck_len, &mut self.stats);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Num0)) {
            self.session.answer(false, deck_len, &mut self.stats);
        }
    }

    fn import_deck(&mut self) {
        let path = match FileDialog::new()
            .add_filter("Flashcard decks", &["flashcards", "json"])
            .pick_file()
        {
            Some(path) => path,
            None => return,
        };

        match transfer::import_deck(&path) {
            Ok(cards) => {
                println!("Imported {} cards from {}", cards.len(), path.display());
                self.deck.merge(cards);
            }
            Err(e) => {
                self.error_modal.show_error(
                    "Import Failed",
                    "The selected file is not a valid deck. The deck was left unchanged.",
                    Some(e.to_string()),
                );
            }
        }
    }

    fn export_deck(&mut self) {
        let path = match FileDialog::new()
            .set_file_name(transfer::EXPORT_FILE_NAME)
            .add_filter("Flashcard decks", &[transfer::DECK_EXTENSION])
            .save_file()
        {
            Some(path) => path,
            None => return,
        };

        if let Err(e) = transfer::export_deck(self.deck.cards(), &path) {
            self.error_modal.show_error(
                "Export Failed",
                "Could not write the deck file.",
                Some(e.to_string()),
            );
        }
    }
}

impl eframe::App for AbhyasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = SidePanel::show(ctx, self.view, &self.theme) {
            match action {
                SidePanelAction::Select(view) => self.view = view,
                SidePanelAction::ImportDeck => self.import_deck(),
                SidePanelAction::ExportDeck => self.export_deck(),
            }
        }

        if self.view == View::Review && !self.error_modal.is_open() {
            self.handle_review_shortcuts(ctx);
        }

        match self.view {
            View::Review => review_view::show(ctx, self),
            View::Search => search_view::show(ctx, self),
            View::Create => create_view::show(ctx, self),
            View::Stats => stats_view::show(ctx, self),
        }

        self.error_modal.show(ctx);
    }
}

/// Card fronts are Devanagari out of the box, which the bundled egui
/// fonts cannot draw. Pull in the first system font that can.
const DEVANAGARI_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Kohinoor.ttc",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
];

fn setup_fonts(ctx: &egui::Context) {
    for path in DEVANAGARI_FONT_PATHS {
        if let Ok(bytes) = std::fs::read(path) {
            ctx.add_font(FontInsert::new(
                "devanagari",
                egui::FontData::from_owned(bytes),
                vec![InsertFontFamily {
                    family: egui::FontFamily::Proportional,
                    priority: FontPriority::Lowest,
                }],
            ));
            return;
        }
    }

    eprintln!("No Devanagari font found on this system; some card faces may render as boxes.");
}

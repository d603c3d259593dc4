//! Main application for the file-selection grid GUI

// UI icon decoding from embedded assets
mod icon;
// Row identifier derivation
mod ident;
// Data models for file records and derived download state
mod model;
// Checkbox selection state and the select-all tri-state
mod selection;
// Dataset source abstraction and the load pipeline
mod source;

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use model::{download_payload, FileRecord, FileStatus};
use selection::{SelectAllState, Selection};
use source::{load_records, StaticSource};

// eframe/egui for GUI application framework
use eframe::{egui, App, Frame};
use egui::{Color32, TextureOptions, Visuals};
// OnceCell for single-time runtime initialization
use once_cell::sync::OnceCell;
use tokio::runtime::Runtime;

/// Resource holding the dataset; shipped inside the binary.
const DATASET_RESOURCE: &str = "sample.json";

// Global Tokio runtime stored in a OnceCell for lazy init
static RUNTIME: OnceCell<Arc<Runtime>> = OnceCell::new();

/// Program entry point: initializes diagnostics and runtime, launches GUI
fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Create a new Tokio runtime and store it globally
    let rt = Arc::new(Runtime::new().expect("failed to create tokio runtime"));
    RUNTIME.set(rt).expect("runtime already initialized");

    // Configure default native options for egui window
    let options = eframe::NativeOptions::default();
    // Run the application
    eframe::run_native(
        "File Grid",
        options,
        Box::new(|cc| {
            // Use dark theme visuals
            cc.egui_ctx.set_visuals(Visuals::dark());
            Box::new(FileGridApp::new(&cc.egui_ctx))
        }),
    )
}

/// Application state for the GUI
struct FileGridApp {
    /// Rows of the current dataset, replaced wholesale by a load
    records: Vec<FileRecord>,
    /// Row ids currently checked, in insertion order
    selection: Selection,
    /// Dataset handed back by the background fetch, installed next frame
    fetched: Arc<Mutex<Option<Vec<FileRecord>>>>,
    /// Cached texture for the download button glyph
    download_icon: Option<egui::TextureHandle>,
}

impl FileGridApp {
    /// Builds the initial state and fires the one startup dataset fetch.
    fn new(ctx: &egui::Context) -> Self {
        let download_icon = icon::load_icon("down-arrow.png")
            .map(|img| ctx.load_texture("download-icon", img, TextureOptions::default()));

        let fetched = Arc::new(Mutex::new(None));
        // Fire-and-forget load: success queues the mapped rows for the next
        // frame, failure is logged and leaves the grid empty. No retry.
        {
            let results = Arc::clone(&fetched);
            let ctx_c = ctx.clone();
            RUNTIME
                .get()
                .expect("runtime not initialized")
                .spawn_blocking(move || match load_records(&StaticSource, DATASET_RESOURCE) {
                    Ok(records) => {
                        *results.lock().unwrap() = Some(records);
                        ctx_c.request_repaint();
                    }
                    Err(err) => tracing::error!(%err, "error fetching dataset"),
                });
        }

        Self {
            records: Vec::new(),
            selection: Selection::default(),
            fetched,
            download_icon,
        }
    }

    /// Header row: the selection counter and the gated download button.
    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.selection.is_empty() {
                ui.label("None Selected");
            } else {
                ui.label(format!("{} Selected", self.selection.len()));
            }

            ui.add_space(12.0);

            let enabled = model::download_enabled(&self.records, self.selection.ids());
            let button = match &self.download_icon {
                Some(tex) => egui::Button::image_and_text(
                    egui::Image::new(tex).fit_to_exact_size(egui::vec2(12.0, 12.0)),
                    "Download Selected",
                ),
                None => egui::Button::new("Download Selected"),
            };
            // add_enabled keeps the click a no-op while the gate is closed
            if ui.add_enabled(enabled, button).clicked() {
                self.show_download_dialog();
            }
        });
    }

    /// Resolves the selected rows against the live dataset and presents the
    /// serialized list in a blocking acknowledgment dialog. Stands in for a
    /// real transfer; no I/O happens here.
    fn show_download_dialog(&self) {
        if let Some(payload) = download_payload(&self.records, self.selection.ids()) {
            rfd::MessageDialog::new()
                .set_title("Download Selected")
                .set_description(&payload)
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }

    /// The table: one tri-state header checkbox, one checkbox per row,
    /// columns Name (showing the derived id), Device, Path, Status.
    fn table(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Grid::new("file-grid")
                    .num_columns(5)
                    .striped(true)
                    .min_col_width(40.0)
                    .show(ui, |ui| {
                        self.header_row(ui);
                        self.body_rows(ui);
                    });
            });
    }

    fn header_row(&mut self, ui: &mut egui::Ui) {
        let state = self.selection.select_all_state(self.records.len());
        let mut all = state == SelectAllState::Checked;
        let checkbox = egui::Checkbox::without_text(&mut all)
            .indeterminate(state == SelectAllState::Indeterminate);
        if ui.add(checkbox).changed() {
            let all_ids: Vec<String> = self.records.iter().map(|r| r.id.clone()).collect();
            self.selection.toggle_all(&all_ids);
        }
        ui.strong("Name");
        ui.strong("Device");
        ui.strong("Path");
        ui.strong("Status");
        ui.end_row();
    }

    fn body_rows(&mut self, ui: &mut egui::Ui) {
        for record in &self.records {
            let mut checked = self.selection.contains(&record.id);
            if ui.checkbox(&mut checked, "").changed() {
                self.selection.toggle_row(&record.id);
            }
            // The Name column shows the derived id, as the row's label
            ui.label(&record.id);
            ui.label(&record.device);
            ui.label(&record.path);
            ui.horizontal(|ui| {
                if record.status == FileStatus::Available {
                    status_dot(ui);
                }
                ui.label(record.status.label());
            });
            ui.end_row();
        }
    }
}

/// GUI update loop: called each frame to redraw and handle interactions
impl App for FileGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Install a freshly fetched dataset, dropping selection ids that no
        // longer resolve against it
        let loaded = self.fetched.lock().unwrap().take();
        if let Some(records) = loaded {
            {
                let known: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
                self.selection.prune(&known);
            }
            self.records = records;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("File Grid");
            ui.add_space(4.0);
            self.header(ui);
            ui.separator();
            self.table(ui);
        });
    }
}

/// Small green dot shown next to the status text of available rows.
fn status_dot(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter()
        .circle_filled(rect.center(), 4.0, Color32::from_rgb(0x6b, 0xc9, 0x3e));
}

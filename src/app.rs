use eframe::egui;

use crate::data::model::StrandingTable;
use crate::state::AppState;
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EncalhesApp {
    pub state: AppState,
}

impl EncalhesApp {
    pub fn new(table: StrandingTable) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for EncalhesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title banner ----
        egui::TopBottomPanel::top("banner").show(ctx, |ui| {
            panels::banner(ui, &self.state);
        });

        // ---- Bottom panel: attribution, always rendered ----
        egui::TopBottomPanel::bottom("attribution").show(ctx, |ui| {
            panels::attribution(ui);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            views::central_view(ui, &self.state);
        });
    }
}

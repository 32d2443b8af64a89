mod app;
mod color;
mod data;
mod state;
mod ui;

use app::EncalhesApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is a bundled artifact; failing to prepare it is fatal.
    let table = match data::loader::load_embedded() {
        Ok(table) => table,
        Err(err) => {
            log::error!("Failed to load dataset: {err:#}");
            return Err(err);
        }
    };
    log::info!(
        "Loaded {} stranding records, years {}–{}, {} species",
        table.len(),
        table.year_bounds.0,
        table.year_bounds.1,
        table.species.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Encalhes – Animais Marinhos PR/SC",
        options,
        Box::new(move |_cc| Ok(Box::new(EncalhesApp::new(table)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe error: {err}"))
}

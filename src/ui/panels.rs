use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::SpeciesFilter;
use crate::state::{AppState, View};

/// Fixed title banner, independent of filter state.
const TITLE: &str = "🐋 Mamíferos Marinhos, 🐢 Tartarugas Marinhas e 🐦 Aves \
Marinhas Encalhados no Paraná e Santa Catarina (2018–2023)";

/// Dataset citation, always rendered.
const CITATION: &str = "Baseado em: Barreto, André et al. (2023). Mamíferos \
marinhos, tartarugas marinhas e aves marinhas encalhados no Paraná e Santa \
Catarina de agosto de 2018 a agosto de 2023 [Conjunto de dados]. Dríade. \
https://doi.org/10.5061/dryad.2rbnzs7v9";

// ---------------------------------------------------------------------------
// Top banner
// ---------------------------------------------------------------------------

/// Render the title banner with live record counts.
pub fn banner(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(6.0);
        ui.label(RichText::new(TITLE).size(18.0).strong());
        ui.label(
            RichText::new(format!(
                "{} registros carregados · {} no filtro atual",
                state.table.len(),
                state.filtered().len()
            ))
            .weak(),
        );
        ui.add_space(6.0);
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel: species, year range, view selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Filtros");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            species_selector(ui, state);
            ui.separator();
            year_selector(ui, state);
            ui.separator();
            view_selector(ui, state);
        });
}

fn species_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Filtrar por Espécie");

    // Clone the option list so the combo closure can mutate state.
    let species = state.table.species.clone();
    let current = state.species_filter.label().to_string();

    egui::ComboBox::from_id_salt("species_filter")
        .selected_text(&current)
        .width(ui.available_width() * 0.95)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.species_filter == SpeciesFilter::All, "Todas as Espécies")
                .clicked()
            {
                state.species_filter = SpeciesFilter::All;
            }
            for sp in &species {
                let selected =
                    matches!(&state.species_filter, SpeciesFilter::Exactly(s) if s == sp);
                if ui.selectable_label(selected, sp).clicked() {
                    state.species_filter = SpeciesFilter::Exactly(sp.clone());
                }
            }
        });
}

fn year_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Filtrar por Ano");
    let (min_year, max_year) = state.table.year_bounds;

    // Moving one bound past the other drags the other along: low <= high.
    let low = ui.add(egui::Slider::new(&mut state.years.low, min_year..=max_year).text("de"));
    if low.changed() {
        state.years.high = state.years.high.max(state.years.low);
    }
    let high = ui.add(egui::Slider::new(&mut state.years.high, min_year..=max_year).text("até"));
    if high.changed() {
        state.years.low = state.years.low.min(state.years.high);
    }
}

fn view_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Selecione a visualização");
    egui::ComboBox::from_id_salt("view_selector")
        .selected_text(state.view.label())
        .width(ui.available_width() * 0.95)
        .show_ui(ui, |ui: &mut Ui| {
            for view in View::ALL {
                ui.selectable_value(&mut state.view, view, view.label());
            }
        });
}

// ---------------------------------------------------------------------------
// Attribution footer
// ---------------------------------------------------------------------------

/// Render the static citation footer.
pub fn attribution(ui: &mut Ui) {
    ui.add_space(2.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.small(CITATION);
    });
    ui.add_space(2.0);
}

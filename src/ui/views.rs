use eframe::egui::{Color32, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points, Polygon};

use crate::color::CategoryColors;
use crate::data::aggregate::{self, CategoryCount};
use crate::data::model::{Column, Stranding};
use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// View dispatch (central panel)
// ---------------------------------------------------------------------------

/// Render the active view. The filtered set is derived fresh here, every
/// render, from the read-only table and the current parameters.
pub fn central_view(ui: &mut Ui, state: &AppState) {
    let indices = state.filtered();

    match state.view {
        View::ByState => grouped_view(ui, state, &indices, Column::State, |r| r.state.as_deref()),
        View::ByCounty => {
            grouped_view(ui, state, &indices, Column::County, |r| r.county.as_deref())
        }
        View::ByBeach => grouped_view(ui, state, &indices, Column::Beach, |r| r.beach.as_deref()),
        View::ByClass => grouped_view(ui, state, &indices, Column::Class, |r| r.class.as_deref()),
        View::Condition => condition_pie(ui, state, &indices),
        View::Map => occurrence_map(ui, state, &indices),
    }
}

// ---------------------------------------------------------------------------
// Grouped bar chart + totals table
// ---------------------------------------------------------------------------

fn grouped_view<'a>(
    ui: &mut Ui,
    state: &'a AppState,
    indices: &[usize],
    column: Column,
    key: impl Fn(&'a Stranding) -> Option<&'a str>,
) {
    ui.heading(state.view.label());

    let counts = aggregate::count_by(&state.table, indices, key);
    let colors = CategoryColors::new(counts.iter().map(|c| c.label.as_str()));

    let chart_height = (ui.available_height() * 0.55).max(180.0);
    bar_chart(ui, column, &counts, &colors, chart_height);

    ui.add_space(8.0);
    ui.heading(format!("Totais por {}", column.label()));
    counts_table(ui, column, &counts);
}

fn bar_chart(
    ui: &mut Ui,
    column: Column,
    counts: &[CategoryCount],
    colors: &CategoryColors,
    height: f32,
) {
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .width(0.7)
                .name(&c.label)
                .fill(colors.color_for(&c.label))
        })
        .collect();

    let labels: Vec<String> = counts.iter().map(|c| c.label.clone()).collect();

    Plot::new(("distribution_bars", column.label()))
        .height(height)
        .y_axis_label("Ocorrências")
        .x_axis_formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn counts_table(ui: &mut Ui, column: Column, counts: &[CategoryCount]) {
    TableBuilder::new(ui)
        .striped(true)
        .column(TableColumn::remainder())
        .column(TableColumn::auto())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong(column.label());
            });
            header.col(|ui| {
                ui.strong("Total de Ocorrências");
            });
        })
        .body(|mut body| {
            for c in counts {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&c.label);
                    });
                    row.col(|ui| {
                        ui.label(c.count.to_string());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Condition pie chart
// ---------------------------------------------------------------------------

fn condition_pie(ui: &mut Ui, state: &AppState, indices: &[usize]) {
    ui.heading(View::Condition.label());

    let counts = aggregate::count_by(&state.table, indices, |r| r.condition.as_deref());
    let total = aggregate::total(&counts);
    let colors = CategoryColors::new(counts.iter().map(|c| c.label.as_str()));

    Plot::new("condition_pie")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            if total == 0 {
                return;
            }
            // Slices start at 12 o'clock and run clockwise, largest first.
            let mut start = std::f64::consts::FRAC_PI_2;
            for c in &counts {
                let fraction = c.count as f64 / total as f64;
                let sweep = fraction * std::f64::consts::TAU;
                let polygon = Polygon::new(PlotPoints::from(wedge_points(start, sweep)))
                    .fill_color(colors.color_for(&c.label))
                    .name(format!("{} ({:.1}%)", c.label, fraction * 100.0));
                plot_ui.polygon(polygon);
                start -= sweep;
            }
        });
}

/// Unit-circle sector from `start`, sweeping `sweep` radians clockwise.
fn wedge_points(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    const SEGMENTS: usize = 64;
    let mut points = Vec::with_capacity(SEGMENTS + 2);
    points.push([0.0, 0.0]);
    for i in 0..=SEGMENTS {
        let angle = start - sweep * (i as f64 / SEGMENTS as f64);
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Occurrence map
// ---------------------------------------------------------------------------

fn occurrence_map(ui: &mut Ui, state: &AppState, indices: &[usize]) {
    ui.heading(View::Map.label());

    let points = aggregate::map_points(&state.table, indices);

    Plot::new("occurrence_map")
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .radius(3.0)
                    .color(Color32::from_rgb(46, 134, 222))
                    .name("Ocorrências"),
            );
        });
}

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotPoint, PlotPoints, Polygon, Text,
};

use crate::color::{annotation_color, diverging_color, generate_palette};
use crate::eda::EdaReport;
use crate::state::{AppState, PlotKind};

// ---------------------------------------------------------------------------
// Central panel – one of the three EDA plots
// ---------------------------------------------------------------------------

/// Render the active plot in the central panel.
pub fn eda_plot(ui: &mut Ui, state: &AppState) {
    let report = match &state.report {
        Some(r) => r,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a data file to run the EDA  (File → Open…)");
            });
            return;
        }
    };

    match state.active_plot {
        PlotKind::Histogram => histogram_plot(ui, report),
        PlotKind::BoxPlot => box_plot(ui, report),
        PlotKind::Heatmap => heatmap(ui, report),
    }
}

// ---------------------------------------------------------------------------
// Histogram of average_score with density overlay
// ---------------------------------------------------------------------------

fn histogram_plot(ui: &mut Ui, report: &EdaReport) {
    let bars: Vec<Bar> = report
        .histogram
        .iter()
        .map(|bin| {
            let center = (bin.start + bin.end) / 2.0;
            Bar::new(center, bin.count as f64)
                .width(bin.end - bin.start)
                .fill(Color32::LIGHT_BLUE)
        })
        .collect();

    let density: PlotPoints = report.density.iter().map(|&[x, y]| [x, y]).collect();

    Plot::new("histogram_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Average Score")
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("average_score"));
            if !report.density.is_empty() {
                plot_ui.line(
                    Line::new(density)
                        .name("density")
                        .color(Color32::from_rgb(60, 100, 180))
                        .width(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Boxplot of average_score per gender
// ---------------------------------------------------------------------------

fn box_plot(ui: &mut Ui, report: &EdaReport) {
    let palette = generate_palette(report.boxes.len());

    let elems: Vec<BoxElem> = report
        .boxes
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, ((group, stats), color))| {
            BoxElem::new(
                i as f64,
                BoxSpread::new(
                    stats.lower_whisker,
                    stats.q1,
                    stats.median,
                    stats.q3,
                    stats.upper_whisker,
                ),
            )
            .name(group)
            .box_width(0.5)
            .fill(color.gamma_multiply(0.5))
            .stroke(Stroke::new(1.5, color))
        })
        .collect();

    let group_labels: Vec<String> = report.boxes.iter().map(|(g, _)| g.clone()).collect();

    Plot::new("box_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Gender")
        .y_axis_label("Average Score")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 {
                group_labels
                    .get(idx as usize)
                    .cloned()
                    .unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(elems).name("average_score"));
        });
}

// ---------------------------------------------------------------------------
// Annotated correlation heatmap
// ---------------------------------------------------------------------------

fn heatmap(ui: &mut Ui, report: &EdaReport) {
    let labels = report.correlation.labels.clone();
    let n = labels.len();

    let x_labels = labels.clone();
    // Row 0 renders at the top, so the y axis reads bottom-up.
    let y_labels: Vec<String> = labels.iter().rev().cloned().collect();

    Plot::new("correlation_heatmap")
        .data_aspect(1.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| axis_label(&x_labels, mark.value))
        .y_axis_formatter(move |mark, _range| axis_label(&y_labels, mark.value))
        .show(ui, |plot_ui| {
            for (i, row) in report.correlation.values.iter().enumerate() {
                // Row 0 at the top, matching the seaborn layout.
                let y = (n - 1 - i) as f64;
                for (j, &r) in row.iter().enumerate() {
                    let x = j as f64;
                    let cell: PlotPoints = vec![
                        [x - 0.5, y - 0.5],
                        [x + 0.5, y - 0.5],
                        [x + 0.5, y + 0.5],
                        [x - 0.5, y + 0.5],
                    ]
                    .into();
                    plot_ui.polygon(
                        Polygon::new(cell)
                            .fill_color(diverging_color(r))
                            .stroke(Stroke::new(0.5, Color32::DARK_GRAY)),
                    );

                    let annotation = if r.is_nan() {
                        "-".to_string()
                    } else {
                        format!("{r:.2}")
                    };
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(annotation).color(annotation_color(r)),
                        )
                        .anchor(Align2::CENTER_CENTER),
                    );
                }
            }
        });
}

fn axis_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() < 1e-6 && idx >= 0.0 {
        labels.get(idx as usize).cloned().unwrap_or_default()
    } else {
        String::new()
    }
}

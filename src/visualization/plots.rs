use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotPoints};

use anyhow::{bail, Result};

use crate::simulation::series::Downsampled;

const WINDOW_WIDTH: f32 = 1400.0;
const WINDOW_HEIGHT: f32 = 1000.0;

/// Vertical room taken by a chart heading and panel spacing
const HEADING_HEIGHT: f32 = 32.0;
const MIN_CHART_HEIGHT: f32 = 120.0;

const TIME_LABEL: &str = "Time (s)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceStyle {
    Solid,
    Dashed,
    Colored([u8; 3]),
}

/// One named line on a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub points: Vec<[f64; 2]>, // (time, value)
    pub style: TraceStyle,
}

impl Trace {
    fn new(name: &str, time: &[f64], values: &[f64], style: TraceStyle) -> Self {
        Self {
            name: name.to_owned(),
            points: time.iter().zip(values).map(|(&t, &v)| [t, v]).collect(),
            style,
        }
    }

    fn line(&self) -> Line {
        let line = Line::new(PlotPoints::new(self.points.clone())).name(&self.name);
        match self.style {
            TraceStyle::Solid => line,
            TraceStyle::Dashed => line.style(LineStyle::dashed_dense()),
            TraceStyle::Colored([r, g, b]) => line.color(egui::Color32::from_rgb(r, g, b)),
        }
    }
}

/// A titled time-series chart
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub y_label: &'static str,
    pub traces: Vec<Trace>,
}

/// Bevy resource with the three stacked charts: position, face pressures, net force
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlotData {
    pub charts: [Chart; 3],
}

impl PlotData {
    /// `frequency_label` is appended to every title, e.g. `80kHz`
    pub fn new(series: &Downsampled, frequency_label: &str) -> Self {
        let t = &series.time;

        let position = Chart {
            title: format!("Cube Position Over Time ({frequency_label})"),
            y_label: "Position (m)",
            traces: vec![Trace::new("Cube Position", t, &series.positions, TraceStyle::Solid)],
        };

        let pressures = Chart {
            title: format!("Pressures at Front and Back of Cube ({frequency_label})"),
            y_label: "Pressure (Pa)",
            traces: vec![
                Trace::new("Pressure Front", t, &series.pressures_front, TraceStyle::Solid),
                Trace::new("Pressure Back", t, &series.pressures_back, TraceStyle::Dashed),
            ],
        };

        let force = Chart {
            title: format!("Net Force on Cube Over Time ({frequency_label})"),
            y_label: "Force (N)",
            traces: vec![Trace::new(
                "Net Force on Cube",
                t,
                &series.net_forces,
                TraceStyle::Colored([128, 0, 128]), // purple
            )],
        };

        Self {
            charts: [position, pressures, force],
        }
    }
}

/// Open the plot window and block until it is closed
pub fn run_plots(data: PlotData) -> Result<()> {
    log::info!("run_plots: opening window with {} charts", data.charts.len());

    let exit = App::new()
        .insert_resource(data)
        .add_plugins(
            DefaultPlugins
                .build()
                // env_logger already owns the global logger
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "levsim".into(),
                        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin)
        .add_systems(Update, draw_charts_system)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("plot window exited with code {code}"),
    }
}

fn draw_charts_system(mut contexts: EguiContexts, data: Res<PlotData>) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        let n = data.charts.len() as f32;
        let height = ((ui.available_height() - n * HEADING_HEIGHT) / n).max(MIN_CHART_HEIGHT);

        for chart in &data.charts {
            ui.heading(&chart.title);

            Plot::new(&chart.title)
                .height(height)
                .legend(Legend::default().position(Corner::LeftTop))
                .x_axis_label(TIME_LABEL)
                .y_axis_label(chart.y_label)
                .show_grid(true)
                .show(ui, |plot_ui| {
                    for trace in &chart.traces {
                        plot_ui.line(trace.line());
                    }
                });
        }
    });
}

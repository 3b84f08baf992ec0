use std::time::Instant;

use eframe::egui;
use tracing::{error, info, warn};

use crate::config::SimConfig;
use crate::io::{csv, HighScoreStore};
use crate::sim::Session;
use crate::view::input::{self, Input};
use crate::view::{paint, plot, Layout};

// ---------------------------------------------------------------------------
// Window app: input → physics → paint, once per repaint
// ---------------------------------------------------------------------------

pub struct ThrustApp {
    config: SimConfig,
    session: Session,
    store: HighScoreStore,
    last_frame: Instant,
    sized_to_monitor: bool,
    show_telemetry: bool,
    started: bool,
    shut_down: bool,
}

impl ThrustApp {
    pub fn new(config: SimConfig, store: HighScoreStore, high_score: f64) -> Self {
        let session = Session::new(&config, high_score);
        Self {
            config,
            session,
            store,
            last_frame: Instant::now(),
            sized_to_monitor: false,
            show_telemetry: false,
            started: false,
            shut_down: false,
        }
    }

    /// Height follows the monitor once the toolkit reports its size.
    fn fit_to_monitor(&mut self, ctx: &egui::Context) {
        if self.sized_to_monitor {
            return;
        }
        if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
            let width = self.config.window_width;
            let height = (monitor.y - self.config.window_height_margin).max(1.0);
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(width, height)));
            info!(width, height, "window sized to monitor");
            self.sized_to_monitor = true;
        }
    }

    fn apply(&mut self, inputs: Vec<Input>, layout: &Layout) {
        for i in inputs {
            match i {
                Input::Pointer(event) => self.session.pointer(&layout.slider, event),
                Input::Command(command) => self.session.command(command),
                Input::ToggleTelemetry => self.show_telemetry = !self.show_telemetry,
            }
        }
    }

    /// Persist the record and export telemetry. Runs once, and only if a
    /// frame was ever shown.
    fn shutdown(&mut self) {
        if self.shut_down || !self.started {
            return;
        }
        self.shut_down = true;

        if let Err(e) = self.store.save(self.session.score_to_persist()) {
            error!(error = %e, "could not save high score");
        }
        if let Some(path) = &self.config.telemetry_csv {
            let telemetry = self.session.telemetry();
            match csv::write_telemetry_file(path, telemetry.iter()) {
                Ok(()) => info!(path = %path.display(), samples = telemetry.len(), "telemetry exported"),
                Err(e) => warn!(path = %path.display(), error = %e, "telemetry export failed"),
            }
        }
    }
}

impl eframe::App for ThrustApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.started = true;
        self.fit_to_monitor(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let layout = Layout::new(area.width(), area.height(), self.config.altitude_scale);

                self.apply(input::poll(ctx, area.min), &layout);

                let now = Instant::now();
                self.session.advance(now - self.last_frame);
                self.last_frame = now;

                paint::paint_scene(ui.painter(), area.min, &layout, self.session.state());
            });

        plot::telemetry_window(ctx, &mut self.show_telemetry, self.session.telemetry());

        if !self.session.is_running() {
            self.shutdown();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        ctx.request_repaint_after(self.session.until_next_tick());
    }
}

impl Drop for ThrustApp {
    fn drop(&mut self) {
        // Covers exits that bypass `update`
        self.shutdown();
    }
}

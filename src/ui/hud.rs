//! Overlay window with key bindings, clock status and orbital rates.
//!
//! Buttons push [`ControlCommand`]s into the [`ControlQueue`] exactly as the
//! keyboard does, so both paths reach the clock at the next tick.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::orbit::BodyId;
use crate::simulation::SimulationState;
use crate::types::{ControlCommand, ControlQueue, RAD_TO_DEG, SimulationClock};

use super::icons;

/// Bodies whose angular rates are listed in the overlay.
pub const RATE_READOUT: &[BodyId] = &[BodyId::Mercury, BodyId::Earth, BodyId::Jupiter];

mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 220);
    pub const RUNNING: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSED: Color32 = Color32::from_rgb(221, 170, 85);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
}

/// One-line clock summary, e.g. `"Time factor: 3.00x (running)"`.
pub fn status_text(clock: &SimulationClock) -> String {
    let state = if clock.is_paused() { "paused" } else { "running" };
    format!("Time factor: {:.2}x ({state})", clock.time_factor)
}

/// Angular rate of each readout body in degrees per unit of simulated time.
pub fn rate_rows(state: &SimulationState) -> Vec<(BodyId, f64)> {
    RATE_READOUT
        .iter()
        .filter_map(|&id| state.body(id).map(|body| (id, body.rate() * RAD_TO_DEG)))
        .collect()
}

/// System that renders the overlay.
pub fn hud_system(
    mut contexts: EguiContexts,
    clock: Res<SimulationClock>,
    state: Res<SimulationState>,
    mut queue: ResMut<ControlQueue>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Solar System")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .resizable(false)
        .collapsible(true)
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} + / - : change time factor, Space: pause/resume",
                    icons::KEYBOARD
                ))
                .color(colors::TEXT),
            );
            ui.label(
                egui::RichText::new(format!("{} Drag to rotate, scroll to zoom", icons::MOUSE))
                    .color(colors::TEXT),
            );

            ui.separator();

            let status_color = if clock.is_paused() {
                colors::PAUSED
            } else {
                colors::RUNNING
            };
            ui.label(egui::RichText::new(status_text(&clock)).color(status_color));

            ui.horizontal(|ui| {
                if ui.button(icons::SLOWER).on_hover_text("Slower (-)").clicked() {
                    queue.push(ControlCommand::DecreaseTimeFactor);
                }
                let (icon, tooltip) = if clock.is_paused() {
                    (icons::PLAY, "Resume (Space)")
                } else {
                    (icons::PAUSE, "Pause (Space)")
                };
                if ui.button(icon).on_hover_text(tooltip).clicked() {
                    queue.push(ControlCommand::TogglePause);
                }
                if ui.button(icons::FASTER).on_hover_text("Faster (+)").clicked() {
                    queue.push(ControlCommand::IncreaseTimeFactor);
                }
            });

            ui.separator();

            for (id, rate) in rate_rows(&state) {
                ui.label(
                    egui::RichText::new(format!("{id}: {rate:.2} deg/unit"))
                        .monospace()
                        .color(colors::TEXT),
                );
            }
        });
}

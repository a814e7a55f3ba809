//! Main application state and eframe integration.

use bandswatch_core::{map_rect, DemoConfig, DraggableRect, Size};
use egui::{CentralPanel, Context, CursorIcon, Key, Modifiers, Vec2};

use crate::canvas;
use crate::drag::DragTracker;
use crate::export;
use crate::layers::OverlayVisibility;
use crate::theme;
use crate::transform::ViewportTransform;

/// Main application state.
pub struct SwatchApp {
    /// Active configuration
    config: DemoConfig,
    /// The draggable rectangle; only the drag handler and Home reset write it
    rect: DraggableRect,
    /// Pointer grab state
    drag: DragTracker,
    /// Diagnostic overlay toggles
    overlays: OverlayVisibility,

    /// Viewport size from the last frame (for export)
    last_viewport: Option<Size>,

    /// Error message to display
    error_message: Option<String>,

    /// Show keyboard shortcuts help dialog
    show_shortcuts_dialog: bool,
}

/// Actions requested by key presses during a frame.
#[derive(Debug, Default)]
struct KeyActions {
    quit: bool,
    export: bool,
    reset: bool,
}

impl SwatchApp {
    /// Create a new application.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: DemoConfig,
        startup_error: Option<String>,
    ) -> Self {
        Self {
            rect: DraggableRect::new(config.initial_center, config.rect_size),
            config,
            drag: DragTracker::default(),
            overlays: OverlayVisibility::default(),
            last_viewport: None,
            error_message: startup_error,
            show_shortcuts_dialog: false,
        }
    }

    /// Render the current frame to a PNG chosen through a save dialog.
    fn export_to_png(&mut self) {
        let Some(viewport) = self.last_viewport.filter(Size::is_drawable) else {
            self.error_message = Some("Nothing to export yet".to_string());
            return;
        };

        let Some(save_path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(export::default_file_name(&self.rect))
            .save_file()
        else {
            return;
        };

        let pair = map_rect(&self.rect, viewport);
        let img = export::render_image(viewport, &self.rect, &pair, self.config.corner_radius);

        match img.save(&save_path) {
            Ok(()) => {
                tracing::info!("Exported PNG to {}", save_path.display());
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to save PNG: {}", e));
                tracing::error!("Failed to save PNG: {}", e);
            }
        }
    }

    /// Render the main canvas.
    fn render_canvas(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::CANVAS_BG))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                let transform = ViewportTransform::new(response.rect);
                let viewport = transform.viewport_size();
                self.last_viewport = Some(viewport);

                // Grab only when the press started on the rectangle
                if response.drag_started() {
                    if let Some(press) = ctx.input(|i| i.pointer.press_origin()) {
                        if self.drag.begin(&self.rect, transform.to_local(press)) {
                            tracing::debug!("Drag started at {:?}", self.rect.center);
                        }
                    }
                }

                if response.dragged() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.drag.update(&mut self.rect, transform.to_local(pos));
                    }
                }

                if response.drag_stopped() && self.drag.is_active() {
                    self.drag.end();
                    tracing::debug!("Drag ended at {:?}", self.rect.center);
                }

                // Cursor feedback
                if self.drag.is_active() {
                    ctx.set_cursor_icon(CursorIcon::Grabbing);
                } else if response
                    .hover_pos()
                    .is_some_and(|pos| self.rect.contains(transform.to_local(pos)))
                {
                    ctx.set_cursor_icon(CursorIcon::Grab);
                }

                let pair = map_rect(&self.rect, viewport);
                canvas::render_frame(
                    &painter,
                    &transform,
                    &self.rect,
                    &pair,
                    self.config.corner_radius,
                    &self.overlays,
                );
            });
    }

    /// Handle keyboard shortcuts.
    fn handle_keyboard(&mut self, ctx: &Context) {
        let mut actions = KeyActions::default();

        ctx.input(|i| {
            // Ctrl+Q: Quit
            if i.modifiers.ctrl && i.key_pressed(Key::Q) {
                actions.quit = true;
            }

            // Ctrl+E: Export PNG
            if i.modifiers.ctrl && i.key_pressed(Key::E) {
                actions.export = true;
            }

            // ?: Show keyboard shortcuts
            if i.key_pressed(Key::Questionmark) || (i.modifiers.shift && i.key_pressed(Key::Slash))
            {
                self.show_shortcuts_dialog = true;
            }

            // Home: Put the rectangle back at its starting point
            if i.key_pressed(Key::Home) {
                actions.reset = true;
            }

            // R / G: Overlay toggles
            if i.key_pressed(Key::R) && i.modifiers == Modifiers::NONE {
                self.overlays.readout = !self.overlays.readout;
            }
            if i.key_pressed(Key::G) && i.modifiers == Modifiers::NONE {
                self.overlays.guides = !self.overlays.guides;
            }

            // Escape: Close dialogs, then overlays
            if i.key_pressed(Key::Escape) {
                if self.show_shortcuts_dialog || self.error_message.is_some() {
                    self.show_shortcuts_dialog = false;
                    self.error_message = None;
                } else {
                    self.overlays.hide_all();
                }
            }
        });

        if actions.quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if actions.reset {
            self.drag.end();
            self.rect.move_to(self.config.initial_center);
            tracing::debug!("Rectangle reset to {:?}", self.rect.center);
        }
        if actions.export {
            self.export_to_png();
        }
    }

    /// Show error dialog if there's an error.
    fn show_error_dialog(&mut self, ctx: &Context) {
        if let Some(error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(&error);
                    ui.separator();
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }

    /// Show keyboard shortcuts help dialog.
    fn show_shortcuts_help(&mut self, ctx: &Context) {
        if !self.show_shortcuts_dialog {
            return;
        }

        egui::Window::new("Keyboard Shortcuts")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                egui::Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Drag");
                        ui.label("Move the rectangle");
                        ui.end_row();
                        ui.label("Home");
                        ui.label("Reset position");
                        ui.end_row();
                        ui.label("R");
                        ui.label("Toggle readout");
                        ui.end_row();
                        ui.label("G");
                        ui.label("Toggle guides");
                        ui.end_row();
                        ui.label("Ctrl+E");
                        ui.label("Export PNG");
                        ui.end_row();
                        ui.label("Escape");
                        ui.label("Close dialog / hide overlays");
                        ui.end_row();
                        ui.label("Ctrl+Q");
                        ui.label("Quit");
                        ui.end_row();
                    });

                ui.separator();
                if ui.button("Close").clicked() {
                    self.show_shortcuts_dialog = false;
                }
            });
    }
}

impl eframe::App for SwatchApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        self.render_canvas(ctx);
        self.show_error_dialog(ctx);
        self.show_shortcuts_help(ctx);

        // Only repaint on pointer activity
        if ctx.input(|i| i.pointer.is_moving() || i.pointer.any_down()) {
            ctx.request_repaint();
        }
    }
}

use std::collections::BTreeMap;
use std::path::PathBuf;

use egui::{Pos2, Rect, TextureHandle, TextureOptions, Vec2};
use futures::executor::block_on;

use crate::config::PainterConfig;
use crate::error::Outcome;
use crate::event::EditorEvent;
use crate::export::export_composite;
use crate::input::{PointerEvent, PointerPhase, SurfacePlacement, TouchContact};
use crate::painter::DrawingSurfaceManager;
use crate::panels::{central_panel, tools_panel};
use crate::photo::{FsPhotoLoader, PhotoSession, PreparedCanvas, prepare_canvas};

/// The markup window: one photo, a tool bar and the drawing surface on top
pub struct MarkupApp {
    session: PhotoSession,
    loader: FsPhotoLoader,
    painter: DrawingSurfaceManager,
    canvas: Option<PreparedCanvas>,
    // Set when preparing the current photo failed, so it is not retried every frame
    load_failed: bool,
    photo_texture: Option<TextureHandle>,
    drawing_texture: Option<TextureHandle>,
    drawing_dirty: bool,
    selected_color: Option<String>,
    touches: BTreeMap<u64, Pos2>,
    export_dir: PathBuf,
    status: Option<String>,
}

impl MarkupApp {
    /// Called once before the first frame.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: PainterConfig,
        photo: Option<String>,
        export_dir: PathBuf,
    ) -> Self {
        let mut session = PhotoSession::new();
        if let Some(photo) = photo {
            session.set_photo(photo);
        }

        let painter = DrawingSurfaceManager::new(config.clone());
        painter.events().subscribe(Box::new(|event: &EditorEvent| {
            log::debug!("editor event: {:?}", event);
        }));

        Self {
            session,
            loader: FsPhotoLoader,
            painter,
            canvas: None,
            load_failed: false,
            photo_texture: None,
            drawing_texture: None,
            drawing_dirty: true,
            selected_color: Some(config.initial_color),
            touches: BTreeMap::new(),
            export_dir,
            status: None,
        }
    }

    pub fn painter(&self) -> &DrawingSurfaceManager {
        &self.painter
    }

    pub fn palette(&self) -> &[String] {
        &self.painter.config().palette
    }

    pub fn selected_color(&self) -> Option<&str> {
        self.selected_color.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn canvas(&self) -> Option<&PreparedCanvas> {
        self.canvas.as_ref()
    }

    pub fn photo_texture(&self) -> Option<&TextureHandle> {
        self.photo_texture.as_ref()
    }

    pub fn drawing_texture(&self) -> Option<&TextureHandle> {
        self.drawing_texture.as_ref()
    }

    pub fn clear(&mut self) {
        if self.painter.clear_drawing().is_applied() {
            self.drawing_dirty = true;
        }
    }

    pub fn select_eraser(&mut self) {
        self.painter.set_eraser(true);
        self.selected_color = None;
    }

    /// Picking a swatch always leaves eraser mode
    pub fn select_color(&mut self, color: &str) {
        if self.painter.is_eraser() {
            self.painter.set_eraser(false);
        }
        if self.selected_color.as_deref() == Some(color) {
            return;
        }
        if self.painter.change_color(color) != Outcome::Rejected {
            self.selected_color = Some(color.to_owned());
        }
    }

    /// Composites photo and drawing and writes `image.png` to the export directory
    pub fn download(&mut self) {
        let Some(drawing) = self.painter.persisted() else {
            self.status = Some("Nothing to export yet".to_owned());
            return;
        };
        let result = block_on(export_composite(
            &self.loader,
            self.session.photo(),
            drawing,
            self.painter.events(),
        ))
        .and_then(|exported| exported.map(|image| image.save_in(&self.export_dir)).transpose());

        self.status = Some(match result {
            Ok(Some(path)) => format!("Saved {}", path.display()),
            Ok(None) => "No photo selected".to_owned(),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    /// Loads the photo and starts the painter once the container size is known
    pub(crate) fn ensure_canvas(&mut self, container: Vec2, ctx: &egui::Context) {
        if self.canvas.is_some() || self.load_failed || self.session.photo().is_empty() {
            return;
        }

        let prepared = block_on(prepare_canvas(
            &self.loader,
            self.session.photo(),
            container,
            self.painter.events(),
        ));
        match prepared {
            Ok(Some(prepared)) => {
                if let Err(err) = self.painter.init(&prepared.ready) {
                    log::warn!("Painter not started: {err}");
                }
                let size = [prepared.photo.width() as usize, prepared.photo.height() as usize];
                let image = egui::ColorImage::from_rgba_unmultiplied(size, prepared.photo.as_raw());
                self.photo_texture = Some(ctx.load_texture("photo", image, TextureOptions::LINEAR));
                self.drawing_dirty = true;
                self.canvas = Some(prepared);
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("Could not load {}: {err}", self.session.photo());
                self.status = Some(format!("Could not load photo: {err}"));
                self.load_failed = true;
            }
        }
    }

    /// Translates this frame's egui input into pointer events for the painter
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.painter.set_placement(SurfacePlacement {
            origin: canvas_rect.min,
            scroll: Vec2::ZERO,
        });

        let raw_events = ctx.input(|input| input.events.clone());
        let mut consumed = false;
        for event in raw_events {
            let Some(pointer_event) = self.translate(&event, canvas_rect) else {
                continue;
            };
            let response = self.painter.handle_event(&pointer_event);
            consumed |= response.consumed;
            if response.outcome.is_applied() {
                self.drawing_dirty = true;
            }
        }
        if consumed {
            ctx.request_repaint();
        }
    }

    fn translate(&mut self, event: &egui::Event, canvas_rect: Rect) -> Option<PointerEvent> {
        let local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();
        match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => {
                if *pressed && !canvas_rect.contains(*pos) {
                    return None;
                }
                let phase = if *pressed {
                    PointerPhase::Down
                } else {
                    PointerPhase::Up
                };
                Some(PointerEvent::Mouse {
                    phase,
                    offset: local(*pos),
                })
            }
            egui::Event::PointerMoved(pos) => Some(PointerEvent::Mouse {
                phase: PointerPhase::Move,
                offset: local(*pos),
            }),
            egui::Event::Touch { id, phase, pos, .. } => {
                let phase = match phase {
                    egui::TouchPhase::Start => {
                        if !canvas_rect.contains(*pos) {
                            return None;
                        }
                        self.touches.insert(id.0, *pos);
                        PointerPhase::Down
                    }
                    egui::TouchPhase::Move => {
                        // Contacts that started off the canvas are not tracked
                        let tracked = self.touches.get_mut(&id.0)?;
                        *tracked = *pos;
                        PointerPhase::Move
                    }
                    egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                        self.touches.remove(&id.0);
                        PointerPhase::Up
                    }
                };
                let contacts = self
                    .touches
                    .iter()
                    .map(|(&id, &page_pos)| TouchContact { id, page_pos })
                    .collect();
                Some(PointerEvent::Touch { phase, contacts })
            }
            _ => None,
        }
    }

    /// Re-uploads the visible drawing when it changed since the last frame
    pub(crate) fn refresh_drawing_texture(&mut self, ctx: &egui::Context) {
        if !self.drawing_dirty {
            return;
        }
        let Some(surface) = self.painter.visible_surface() else {
            return;
        };
        let image = surface.to_color_image();
        match &mut self.drawing_texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                let texture = ctx.load_texture("drawing", image, TextureOptions::LINEAR);
                self.drawing_texture = Some(texture);
            }
        }
        self.drawing_dirty = false;
    }
}

impl eframe::App for MarkupApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.painter.teardown();
    }
}

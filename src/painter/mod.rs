//! The drawing surface manager: two stacked rasters and the draw→commit cycle.
//!
//! A session owns a *persisted* surface holding every committed stroke and a
//! *scratch* surface used only while a stroke is in progress. Each pointer
//! move re-renders the whole in-progress stroke from a fixed baseline, so only
//! the current stroke ever changes on screen. Releasing the pointer folds the
//! scratch surface into the persisted one.
//!
//! # Example
//!
//! ```rust,no_run
//! use photo_markup::{CanvasReady, DrawingSurfaceManager, PainterConfig, SurfaceSize};
//! use photo_markup::input::{PointerEvent, PointerPhase};
//!
//! let mut painter = DrawingSurfaceManager::new(PainterConfig::default());
//! painter.init(&CanvasReady::with_size(SurfaceSize::new(640, 480)))?;
//!
//! let press = PointerEvent::Mouse { phase: PointerPhase::Down, offset: egui::pos2(10.0, 10.0) };
//! painter.handle_event(&press);
//! # Ok::<(), photo_markup::PainterError>(())
//! ```

use std::borrow::Cow;

use egui::Color32;
use uuid::Uuid;

use crate::brush::{Brush, DrawingMode, StrokeStyle};
use crate::color::parse_color;
use crate::config::{PainterConfig, RenderStrategy};
use crate::error::{Outcome, PainterError};
use crate::event::{EditorEvent, EventBus};
use crate::geometry::smooth;
use crate::input::{
    AdapterOutput, DeviceClass, InputAdapter, PointerEvent, SurfacePlacement, adapter_for,
};
use crate::photo::CanvasReady;
use crate::renderer::StrokeRenderer;
use crate::stroke::{Point, StrokeBuffer};
use crate::surface::{CompositeMode, Surface, SurfaceSize};

mod state;

pub use state::PainterState;

/// What handling one pointer event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    pub outcome: Outcome,
    /// The host should suppress its default handling (scrolling, text
    /// selection) for this event
    pub consumed: bool,
}

impl EventResponse {
    fn new(outcome: Outcome, consumed: bool) -> Self {
        Self { outcome, consumed }
    }
}

/// Everything that only exists between `init` and `teardown`
struct Session {
    id: Uuid,
    adapter: Box<dyn InputAdapter>,
    persisted: Surface,
    scratch: Surface,
    buffer: StrokeBuffer,
    state: PainterState,
}

/// Owns the drawing surfaces of one editing session and turns pointer input
/// into committed strokes.
///
/// Mode and color live on the manager itself and can be changed at any time;
/// everything that touches pixels needs a prior [`init`](Self::init) and
/// answers [`Outcome::NotReady`] otherwise.
pub struct DrawingSurfaceManager {
    config: PainterConfig,
    brush: Brush,
    renderer: StrokeRenderer,
    placement: SurfacePlacement,
    events: EventBus,
    session: Option<Session>,
}

impl std::fmt::Debug for DrawingSurfaceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingSurfaceManager")
            .field("brush", &self.brush)
            .field("strategy", &self.config.strategy)
            .field("session", &self.session.as_ref().map(|s| s.id))
            .field("state", &self.state().name())
            .finish()
    }
}

impl DrawingSurfaceManager {
    pub fn new(config: PainterConfig) -> Self {
        Self {
            brush: Brush::from_config(&config),
            renderer: StrokeRenderer::new(config.curve_tolerance),
            placement: SurfacePlacement::default(),
            events: EventBus::new(),
            session: None,
            config,
        }
    }

    /// Starts a session: picks the input adapter for the configured device
    /// class and allocates both surfaces at the canvas size.
    ///
    /// Refuses to run twice without a [`teardown`](Self::teardown) in between.
    pub fn init(&mut self, ready: &CanvasReady) -> Result<(), PainterError> {
        if self.session.is_some() {
            log::warn!("init called on an initialized painter; ignoring");
            return Err(PainterError::AlreadyInitialized);
        }
        let size = ready.surface_size;
        if size.is_empty() {
            return Err(PainterError::InvalidDimensions {
                width: size.width as f32,
                height: size.height as f32,
            });
        }

        let session = Session {
            id: Uuid::new_v4(),
            adapter: adapter_for(self.config.device_class),
            persisted: Surface::new(size),
            scratch: Surface::new(size),
            buffer: StrokeBuffer::new(),
            state: PainterState::Idle,
        };
        log::info!(
            "Painter session {} started: {}x{}, {:?} input, {:?} strategy",
            session.id,
            size.width,
            size.height,
            self.config.device_class,
            self.config.strategy
        );
        self.events.emit(EditorEvent::SessionStarted {
            session_id: session.id,
            size,
        });
        self.session = Some(session);
        Ok(())
    }

    /// Ends the session, dropping both surfaces and any stroke in progress
    pub fn teardown(&mut self) -> Outcome {
        let Some(session) = self.session.take() else {
            return Outcome::NotReady;
        };
        log::info!("Painter session {} ended", session.id);
        self.events.emit(EditorEvent::SessionEnded {
            session_id: session.id,
        });
        Outcome::Applied
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Feeds one raw pointer event through the adapter and the state machine
    pub fn handle_event(&mut self, event: &PointerEvent) -> EventResponse {
        let style = self.brush.style();
        let strategy = self.config.strategy;
        let Some(session) = self.session.as_mut() else {
            return EventResponse::new(Outcome::NotReady, false);
        };

        match session.adapter.normalize(event, &self.placement) {
            AdapterOutput::Unsubscribed => EventResponse::new(Outcome::Ignored, false),
            AdapterOutput::Rejected => {
                log::debug!("Rejected multi-touch input");
                EventResponse::new(Outcome::Rejected, session.state.is_stroking())
            }
            AdapterOutput::Down(point) => {
                if session.state.is_stroking() {
                    // A second press mid-gesture extends the stroke
                    session.extend_stroke(point, &style, strategy, &self.renderer);
                } else {
                    session.begin_stroke(point, &style, strategy, &self.renderer);
                    self.events.emit(EditorEvent::StrokeStarted {
                        at: point,
                        mode: style.mode,
                    });
                }
                EventResponse::new(Outcome::Applied, true)
            }
            AdapterOutput::Move(point) => {
                if !session.state.is_stroking() {
                    return EventResponse::new(Outcome::Ignored, false);
                }
                session.extend_stroke(point, &style, strategy, &self.renderer);
                EventResponse::new(Outcome::Applied, true)
            }
            AdapterOutput::Up => {
                let PainterState::Stroking { last_mode } = session.state else {
                    return EventResponse::new(Outcome::Ignored, false);
                };
                let points = session.commit(strategy);
                self.events.emit(EditorEvent::StrokeCommitted {
                    points,
                    mode: last_mode,
                });
                EventResponse::new(Outcome::Applied, false)
            }
        }
    }

    /// Updates where the surface sits on the page, for touch normalization
    pub fn set_placement(&mut self, placement: SurfacePlacement) {
        self.placement = placement;
    }

    /// Switches between drawing and erasing.
    ///
    /// The mode is read every time the stroke is re-rendered, so switching
    /// in the middle of a stroke changes how the rest of it is drawn.
    pub fn set_eraser(&mut self, enabled: bool) -> Outcome {
        let mode = if enabled {
            DrawingMode::Erase
        } else {
            DrawingMode::Draw
        };
        if !self.brush.set_mode(mode) {
            return Outcome::Ignored;
        }
        log::debug!("Drawing mode -> {:?}", mode);
        self.events.emit(EditorEvent::ModeChanged { mode });
        Outcome::Applied
    }

    pub fn toggle_eraser(&mut self) -> Outcome {
        self.set_eraser(!self.brush.is_eraser())
    }

    /// Sets the draw color from a CSS-style string. Unparsable colors are
    /// rejected and the current color stays.
    pub fn change_color(&mut self, color: &str) -> Outcome {
        match parse_color(color) {
            Ok(parsed) => self.set_color(parsed),
            Err(err) => {
                log::warn!("{err}");
                Outcome::Rejected
            }
        }
    }

    pub fn set_color(&mut self, color: Color32) -> Outcome {
        if !self.brush.set_color(color) {
            return Outcome::Ignored;
        }
        log::debug!("Draw color -> {:?}", color);
        self.events.emit(EditorEvent::ColorChanged { color });
        Outcome::Applied
    }

    /// Wipes both surfaces to transparent. There is no undo.
    ///
    /// A stroke in progress keeps going; its next render starts from the now
    /// empty baseline.
    pub fn clear_drawing(&mut self) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            return Outcome::NotReady;
        };
        session.persisted.clear();
        session.scratch.clear();
        log::info!("Drawing cleared");
        self.events.emit(EditorEvent::DrawingCleared);
        Outcome::Applied
    }

    /// Reallocates the surfaces at a new size, keeping committed pixels that
    /// still fit. Refused while a stroke is in progress.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<(), PainterError> {
        let session = self.session.as_mut().ok_or(PainterError::NotInitialized)?;
        if session.state.is_stroking() {
            return Err(PainterError::ResizeDuringStroke);
        }
        if size.is_empty() {
            return Err(PainterError::InvalidDimensions {
                width: size.width as f32,
                height: size.height as f32,
            });
        }
        let mut persisted = Surface::new(size);
        persisted.draw_surface(&session.persisted, CompositeMode::SourceOver);
        session.persisted = persisted;
        session.scratch = Surface::new(size);
        log::debug!("Surfaces resized to {}x{}", size.width, size.height);
        Ok(())
    }

    pub fn state(&self) -> PainterState {
        self.session
            .as_ref()
            .map(|session| session.state)
            .unwrap_or_default()
    }

    pub fn is_stroking(&self) -> bool {
        self.state().is_stroking()
    }

    pub fn mode(&self) -> DrawingMode {
        self.brush.mode()
    }

    pub fn is_eraser(&self) -> bool {
        self.brush.is_eraser()
    }

    pub fn color(&self) -> Color32 {
        self.brush.color()
    }

    pub fn line_width(&self) -> f32 {
        self.brush.line_width()
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    pub fn device_class(&self) -> Option<DeviceClass> {
        self.session.as_ref().map(|s| s.adapter.device_class())
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Points of the stroke in progress (empty while idle)
    pub fn stroke_points(&self) -> &[Point] {
        self.session
            .as_ref()
            .map(|s| s.buffer.points())
            .unwrap_or_default()
    }

    /// All committed strokes
    pub fn persisted(&self) -> Option<&Surface> {
        self.session.as_ref().map(|s| &s.persisted)
    }

    pub fn scratch(&self) -> Option<&Surface> {
        self.session.as_ref().map(|s| &s.scratch)
    }

    /// What the user should see right now: committed strokes plus the
    /// stroke in progress
    pub fn visible_surface(&self) -> Option<Cow<'_, Surface>> {
        let session = self.session.as_ref()?;
        let PainterState::Stroking { last_mode } = session.state else {
            return Some(Cow::Borrowed(&session.persisted));
        };
        match self.config.strategy {
            RenderStrategy::Snapshot => Some(Cow::Borrowed(&session.scratch)),
            RenderStrategy::Overlay => {
                let mut composed = session.persisted.clone();
                composed.draw_surface(&session.scratch, last_mode.composite_mode());
                Some(Cow::Owned(composed))
            }
        }
    }
}

impl Session {
    fn begin_stroke(
        &mut self,
        point: Point,
        style: &StrokeStyle,
        strategy: RenderStrategy,
        renderer: &StrokeRenderer,
    ) {
        self.buffer.clear();
        self.buffer.add_point(point);
        log::debug!("Stroke started at ({:.1}, {:.1})", point.x, point.y);
        self.render(style, strategy, renderer);
    }

    fn extend_stroke(
        &mut self,
        point: Point,
        style: &StrokeStyle,
        strategy: RenderStrategy,
        renderer: &StrokeRenderer,
    ) {
        self.buffer.add_point(point);
        self.render(style, strategy, renderer);
    }

    /// Redraws the scratch surface from the baseline plus the whole buffer
    fn render(&mut self, style: &StrokeStyle, strategy: RenderStrategy, renderer: &StrokeRenderer) {
        let commands = smooth(self.buffer.points(), style.width);
        match strategy {
            RenderStrategy::Snapshot => {
                self.scratch.copy_from(&self.persisted);
                renderer.render(&mut self.scratch, &commands, style);
            }
            RenderStrategy::Overlay => {
                // The overlay holds stroke coverage only; the mode is applied
                // when it is layered over the persisted surface. Erase coverage
                // is opaque whatever the draw color is.
                self.scratch.clear();
                let color = match style.mode {
                    DrawingMode::Draw => style.color,
                    DrawingMode::Erase => Color32::BLACK,
                };
                let coverage_style = StrokeStyle {
                    color,
                    mode: DrawingMode::Draw,
                    ..*style
                };
                renderer.render(&mut self.scratch, &commands, &coverage_style);
            }
        }
        self.state = PainterState::Stroking {
            last_mode: style.mode,
        };
    }

    /// Folds the scratch surface into the persisted one and resets transient
    /// state. Returns the number of points in the committed stroke.
    fn commit(&mut self, strategy: RenderStrategy) -> usize {
        let PainterState::Stroking { last_mode } = self.state else {
            return 0;
        };
        match strategy {
            RenderStrategy::Snapshot => self.persisted.copy_from(&self.scratch),
            RenderStrategy::Overlay => {
                self.persisted
                    .draw_surface(&self.scratch, last_mode.composite_mode())
            }
        }
        self.scratch.clear();
        let points = self.buffer.len();
        self.buffer.clear();
        self.state = PainterState::Idle;
        log::debug!("Committed {points}-point {:?} stroke", last_mode);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{PointerPhase, TouchContact};
    use egui::Pos2;

    fn ready(width: u32, height: u32) -> CanvasReady {
        CanvasReady::with_size(SurfaceSize::new(width, height))
    }

    fn mouse(phase: PointerPhase, x: f32, y: f32) -> PointerEvent {
        PointerEvent::Mouse {
            phase,
            offset: Pos2::new(x, y),
        }
    }

    fn painter(strategy: RenderStrategy) -> DrawingSurfaceManager {
        let mut painter = DrawingSurfaceManager::new(PainterConfig {
            strategy,
            ..PainterConfig::default()
        });
        painter.init(&ready(64, 64)).unwrap();
        painter
    }

    #[test]
    fn test_operations_before_init_are_not_ready() {
        let mut painter = DrawingSurfaceManager::new(PainterConfig::default());
        assert_eq!(painter.clear_drawing(), Outcome::NotReady);
        assert_eq!(
            painter.handle_event(&mouse(PointerPhase::Down, 1.0, 1.0)).outcome,
            Outcome::NotReady
        );
        assert_eq!(painter.teardown(), Outcome::NotReady);
        assert!(painter.visible_surface().is_none());
        assert!(matches!(
            painter.resize(SurfaceSize::new(4, 4)),
            Err(PainterError::NotInitialized)
        ));
    }

    #[test]
    fn test_double_init_refused() {
        let mut painter = painter(RenderStrategy::Snapshot);
        assert!(matches!(
            painter.init(&ready(10, 10)),
            Err(PainterError::AlreadyInitialized)
        ));
        assert_eq!(painter.teardown(), Outcome::Applied);
        assert!(painter.init(&ready(10, 10)).is_ok());
    }

    #[test]
    fn test_zero_sized_canvas_refused() {
        let mut painter = DrawingSurfaceManager::new(PainterConfig::default());
        assert!(matches!(
            painter.init(&ready(0, 10)),
            Err(PainterError::InvalidDimensions { .. })
        ));
        assert!(!painter.is_initialized());
    }

    #[test]
    fn test_state_machine_cycle() {
        for strategy in [RenderStrategy::Snapshot, RenderStrategy::Overlay] {
            let mut painter = painter(strategy);
            assert_eq!(painter.state(), PainterState::Idle);

            let down = painter.handle_event(&mouse(PointerPhase::Down, 10.0, 10.0));
            assert_eq!(down.outcome, Outcome::Applied);
            assert!(painter.is_stroking());

            let moved = painter.handle_event(&mouse(PointerPhase::Move, 20.0, 12.0));
            assert!(moved.consumed);
            painter.handle_event(&mouse(PointerPhase::Move, 30.0, 14.0));
            assert_eq!(painter.stroke_points().len(), 3);

            painter.handle_event(&mouse(PointerPhase::Up, 30.0, 14.0));
            assert_eq!(painter.state(), PainterState::Idle);
            assert!(painter.stroke_points().is_empty());
            assert!(painter.scratch().unwrap().is_blank());
            assert!(!painter.persisted().unwrap().is_blank());
        }
    }

    #[test]
    fn test_move_and_up_while_idle_are_ignored() {
        let mut painter = painter(RenderStrategy::Snapshot);
        let moved = painter.handle_event(&mouse(PointerPhase::Move, 5.0, 5.0));
        assert_eq!(moved, EventResponse::new(Outcome::Ignored, false));
        let up = painter.handle_event(&mouse(PointerPhase::Up, 5.0, 5.0));
        assert_eq!(up.outcome, Outcome::Ignored);
        assert!(painter.persisted().unwrap().is_blank());
    }

    #[test]
    fn test_mouse_session_ignores_touch() {
        let mut painter = painter(RenderStrategy::Snapshot);
        let touch = PointerEvent::Touch {
            phase: PointerPhase::Down,
            contacts: vec![TouchContact {
                id: 0,
                page_pos: Pos2::new(5.0, 5.0),
            }],
        };
        assert_eq!(painter.handle_event(&touch).outcome, Outcome::Ignored);
        assert!(!painter.is_stroking());
    }

    fn alpha_at(surface: &Surface, x: u32, y: u32) -> u8 {
        surface.pixel(x, y).map_or(0, |p| p[3])
    }

    /// Alpha may differ by one where overlay coverage was rounded to a byte
    fn assert_same_alpha(a: &Surface, b: &Surface) {
        assert_eq!(a.size(), b.size());
        for y in 0..a.height() {
            for x in 0..a.width() {
                let (left, right) = (alpha_at(a, x, y), alpha_at(b, x, y));
                assert!(left.abs_diff(right) <= 1, "({x}, {y}): {left} vs {right}");
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_visible_result() {
        let gesture = [
            mouse(PointerPhase::Down, 8.0, 8.0),
            mouse(PointerPhase::Move, 20.0, 30.0),
            mouse(PointerPhase::Move, 40.0, 20.0),
            mouse(PointerPhase::Move, 50.0, 50.0),
        ];
        let mut snapshot = painter(RenderStrategy::Snapshot);
        let mut overlay = painter(RenderStrategy::Overlay);
        for event in &gesture {
            snapshot.handle_event(event);
            overlay.handle_event(event);
            assert_eq!(
                snapshot.visible_surface().unwrap().image(),
                overlay.visible_surface().unwrap().image()
            );
        }
        snapshot.handle_event(&mouse(PointerPhase::Up, 50.0, 50.0));
        overlay.handle_event(&mouse(PointerPhase::Up, 50.0, 50.0));
        assert_eq!(snapshot.persisted(), overlay.persisted());

        // An eraser stroke that starts drawing and switches mid-gesture
        let erase_gesture = [
            mouse(PointerPhase::Down, 10.0, 40.0),
            mouse(PointerPhase::Move, 25.0, 25.0),
            mouse(PointerPhase::Move, 40.0, 22.0),
        ];
        for painter in [&mut snapshot, &mut overlay] {
            painter.change_color("rgba(0, 128, 0, 0.4)");
            for event in &erase_gesture {
                painter.handle_event(event);
            }
            painter.set_eraser(true);
            painter.handle_event(&mouse(PointerPhase::Move, 55.0, 45.0));
        }
        assert_same_alpha(
            &snapshot.visible_surface().unwrap(),
            &overlay.visible_surface().unwrap(),
        );

        snapshot.handle_event(&mouse(PointerPhase::Up, 55.0, 45.0));
        overlay.handle_event(&mouse(PointerPhase::Up, 55.0, 45.0));
        assert_same_alpha(snapshot.persisted().unwrap(), overlay.persisted().unwrap());
    }

    #[test]
    fn test_mid_stroke_mode_switch_affects_rest_of_stroke() {
        for strategy in [RenderStrategy::Snapshot, RenderStrategy::Overlay] {
            let mut painter = painter(strategy);
            // Commit a solid blob to erase into
            for event in [
                mouse(PointerPhase::Down, 32.0, 32.0),
                mouse(PointerPhase::Up, 32.0, 32.0),
            ] {
                painter.handle_event(&event);
            }
            assert_eq!(alpha_at(painter.persisted().unwrap(), 32, 32), 255);

            painter.handle_event(&mouse(PointerPhase::Down, 32.0, 32.0));
            painter.set_eraser(true);
            painter.handle_event(&mouse(PointerPhase::Move, 32.0, 32.0));
            assert_eq!(alpha_at(&painter.visible_surface().unwrap(), 32, 32), 0);
            painter.handle_event(&mouse(PointerPhase::Up, 32.0, 32.0));
            assert_eq!(alpha_at(painter.persisted().unwrap(), 32, 32), 0, "{strategy:?}");
        }
    }

    #[test]
    fn test_eraser_ignores_translucent_draw_color() {
        for color in ["transparent", "rgba(255, 0, 0, 0.25)"] {
            for strategy in [RenderStrategy::Snapshot, RenderStrategy::Overlay] {
                let mut painter = painter(strategy);
                painter.handle_event(&mouse(PointerPhase::Down, 20.0, 20.0));
                painter.handle_event(&mouse(PointerPhase::Up, 20.0, 20.0));
                assert_eq!(alpha_at(painter.persisted().unwrap(), 20, 20), 255);

                assert_eq!(painter.change_color(color), Outcome::Applied);
                painter.set_eraser(true);
                painter.handle_event(&mouse(PointerPhase::Down, 20.0, 20.0));
                painter.handle_event(&mouse(PointerPhase::Up, 20.0, 20.0));
                assert_eq!(
                    alpha_at(painter.persisted().unwrap(), 20, 20),
                    0,
                    "{color} with {strategy:?}"
                );
            }
        }
    }

    #[test]
    fn test_clear_mid_stroke_keeps_stroking() {
        let mut painter = painter(RenderStrategy::Snapshot);
        painter.handle_event(&mouse(PointerPhase::Down, 5.0, 5.0));
        painter.handle_event(&mouse(PointerPhase::Up, 5.0, 5.0));
        painter.handle_event(&mouse(PointerPhase::Down, 40.0, 40.0));
        assert_eq!(painter.clear_drawing(), Outcome::Applied);
        assert!(painter.is_stroking());
        painter.handle_event(&mouse(PointerPhase::Move, 41.0, 40.0));
        painter.handle_event(&mouse(PointerPhase::Up, 41.0, 40.0));
        let persisted = painter.persisted().unwrap();
        assert_eq!(persisted.pixel(5, 5).map(|p| p[3]), Some(0));
        assert_eq!(persisted.pixel(40, 40).map(|p| p[3]), Some(255));
    }

    #[test]
    fn test_resize_guarded_during_stroke() {
        let mut painter = painter(RenderStrategy::Snapshot);
        painter.handle_event(&mouse(PointerPhase::Down, 5.0, 5.0));
        assert!(matches!(
            painter.resize(SurfaceSize::new(32, 32)),
            Err(PainterError::ResizeDuringStroke)
        ));
        painter.handle_event(&mouse(PointerPhase::Up, 5.0, 5.0));
        painter.resize(SurfaceSize::new(32, 32)).unwrap();
        let persisted = painter.persisted().unwrap();
        assert_eq!(persisted.size(), SurfaceSize::new(32, 32));
        assert_eq!(persisted.pixel(5, 5).map(|p| p[3]), Some(255));
    }

    #[test]
    fn test_color_and_mode_work_before_init() {
        let mut painter = DrawingSurfaceManager::new(PainterConfig::default());
        assert_eq!(painter.change_color("black"), Outcome::Applied);
        assert_eq!(painter.change_color("black"), Outcome::Ignored);
        assert_eq!(painter.change_color("nope"), Outcome::Rejected);
        assert_eq!(painter.color(), Color32::BLACK);
        assert_eq!(painter.toggle_eraser(), Outcome::Applied);
        assert!(painter.is_eraser());
        assert_eq!(painter.line_width(), 10.0);
        assert_eq!(painter.set_eraser(true), Outcome::Ignored);
    }
}

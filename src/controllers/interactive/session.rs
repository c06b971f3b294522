use log::{debug, info};

use crate::config::ExplorerConfig;
use crate::controllers::interactive::data::{ExplorerState, RenderToggles};
use crate::controllers::interactive::events::{ButtonState, NavigationKey, PointerButton};
use crate::controllers::interactive::navigation::{
    KeyOutcome, NavigationController, NavigationSettings,
};
use crate::controllers::interactive::orchestrator::RenderOrchestrator;
use crate::controllers::interactive::ports::{ComputeStagePort, DisplayStagePort, RenderTargetPort};
use crate::core::data::complex::Complex;
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::resolution::{FrameResolutionPolicy, RenderTarget};
use crate::core::viewport::{ViewportError, ViewportState};

/// The host-facing side of the explorer.
///
/// A host loop forwards window events to the `on_*` methods and calls
/// [`tick`](Self::tick) once per frame until [`should_quit`](Self::should_quit)
/// turns true. Everything runs on the calling thread.
#[derive(Debug)]
pub struct ExplorerSession {
    state: ExplorerState,
    navigation: NavigationController,
    resolution: FrameResolutionPolicy,
    orchestrator: RenderOrchestrator,
    /// Latest pointer position in window pixels, normalised on use.
    pointer_px: (f64, f64),
    quit_requested: bool,
}

impl ExplorerSession {
    pub fn new(config: &ExplorerConfig, framebuffer: FramebufferSize) -> Result<Self, ViewportError> {
        let viewport = ViewportState::new(config.view.center(), config.view.size())?;
        let toggles = RenderToggles::from(&config.toggles);
        let resolution = FrameResolutionPolicy::new(
            framebuffer,
            config.render.supersample_factor,
            toggles.supersampling,
        );

        info!(
            "session started at {}x{} ({} mode)",
            framebuffer.width, framebuffer.height, toggles.fractal
        );

        Ok(Self {
            state: ExplorerState {
                viewport,
                toggles,
                seed: config.view.initial_seed(),
            },
            navigation: NavigationController::new(
                NavigationSettings::from(&config.view),
                ScreenPoint::CENTRE,
            ),
            resolution,
            orchestrator: RenderOrchestrator::new(&config.render),
            pointer_px: (
                f64::from(framebuffer.width) / 2.0,
                f64::from(framebuffer.height) / 2.0,
            ),
            quit_requested: false,
        })
    }

    /// Pushes the current resolution to the collaborator. Hosts call this once
    /// before the first frame.
    pub fn sync_render_target(&self, port: &mut impl RenderTargetPort) {
        port.apply(self.resolution.current_update());
    }

    /// A zero-sized framebuffer (minimized window) keeps the compute target
    /// but still empties the port's viewport, so the presenter stops drawing
    /// until a real size arrives.
    pub fn on_framebuffer_resize(&mut self, size: FramebufferSize, port: &mut impl RenderTargetPort) {
        match self
            .resolution
            .on_framebuffer_resize(size, self.state.toggles.supersampling)
        {
            Some(update) => {
                debug!(
                    "framebuffer {}x{}, compute target {}x{}",
                    size.width, size.height, update.target.h_res, update.target.v_res
                );
                port.apply(update);
            }
            None => {
                debug!("framebuffer empty, keeping compute target");
                port.set_viewport(size);
            }
        }
    }

    pub fn on_pointer_move(&mut self, x_px: f64, y_px: f64) {
        self.pointer_px = (x_px, y_px);
    }

    pub fn on_pointer_button(&mut self, button: PointerButton, state: ButtonState) {
        self.navigation.handle_button(button, state, &mut self.state);
    }

    pub fn on_scroll(&mut self, dy: f64) {
        let cursor = self.cursor();
        self.navigation
            .handle_scroll(dy, cursor, &mut self.state.viewport);
    }

    pub fn on_key(&mut self, key: NavigationKey, port: &mut impl RenderTargetPort) {
        let framebuffer = self.resolution.framebuffer();

        match self.navigation.handle_key(key, &mut self.state, framebuffer) {
            KeyOutcome::Handled => {}
            KeyOutcome::SupersamplingChanged => {
                let update = self
                    .resolution
                    .on_supersampling_toggled(self.state.toggles.supersampling);
                port.apply(update);
            }
            KeyOutcome::QuitRequested => {
                info!("quit requested");
                self.quit_requested = true;
            }
        }
    }

    /// One frame: sample the cursor, pan and track the seed, then render.
    pub fn tick<B>(&mut self, backend: &mut B)
    where
        B: ComputeStagePort + DisplayStagePort,
    {
        let cursor = self.cursor();
        self.navigation.begin_frame(cursor, &mut self.state);

        self.orchestrator
            .render_frame(backend, &self.state, &self.resolution.current());
    }

    /// Freezes the Julia seed at `seed`, as if the cursor lock had been
    /// switched on with the cursor over it.
    pub fn lock_seed(&mut self, seed: Complex) {
        self.state.seed = seed;
        self.state.toggles.cursor_locked = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.state.viewport
    }

    #[must_use]
    pub fn toggles(&self) -> &RenderToggles {
        &self.state.toggles
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.state.seed
    }

    #[must_use]
    pub fn render_target(&self) -> RenderTarget {
        self.resolution.current()
    }

    #[must_use]
    pub fn framebuffer(&self) -> FramebufferSize {
        self.resolution.framebuffer()
    }

    /// The pointer in normalised screen coordinates.
    #[must_use]
    pub fn cursor(&self) -> ScreenPoint {
        let (x_px, y_px) = self.pointer_px;
        ScreenPoint::from_window_position(x_px, y_px, self.resolution.framebuffer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::ports::recording::{Call, RecordingBackend};
    use crate::core::data::extent::Extent;
    use crate::core::fractals::FractalKinds;
    use crate::core::render::WorkgroupCount;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    fn session(width: u32, height: u32) -> ExplorerSession {
        ExplorerSession::new(&ExplorerConfig::default(), FramebufferSize::new(width, height))
            .unwrap()
    }

    #[test]
    fn starts_from_the_configured_view() {
        let session = session(800, 600);

        assert_eq!(session.viewport().center(), Complex::ORIGIN);
        assert_eq!(session.viewport().size(), Extent::square(4.0));
        assert_eq!(session.cursor(), ScreenPoint::CENTRE);
        assert!(!session.should_quit());
    }

    #[test]
    fn invalid_configured_size_is_rejected() {
        let mut config = ExplorerConfig::default();
        config.view.size = [-1.0, 4.0];

        let result = ExplorerSession::new(&config, FramebufferSize::new(10, 10));

        assert!(matches!(result, Err(ViewportError::InvalidSize { .. })));
    }

    #[test]
    fn sync_pushes_target_then_raw_viewport() {
        let session = session(800, 600);
        let mut backend = RecordingBackend::default();

        session.sync_render_target(&mut backend);

        assert_eq!(
            backend.take(),
            vec![
                Call::Reallocate(RenderTarget {
                    h_res: 1600,
                    v_res: 1200,
                    supersample_factor: 2,
                }),
                Call::SetViewport(FramebufferSize::new(800, 600)),
            ]
        );
    }

    #[test]
    fn tick_runs_the_full_pipeline() {
        let mut session = session(100, 100);
        let mut backend = RecordingBackend::default();

        session.tick(&mut backend);

        let calls = backend.take();
        assert_eq!(calls[0], Call::UseProgram(FractalKinds::Julia));
        assert_eq!(calls[2], Call::Dispatch(WorkgroupCount { x: 13, y: 13 }));
        assert_eq!(&calls[3..], &[Call::MemoryBarrier, Call::DrawQuad]);
    }

    #[test]
    fn drag_pans_the_view() {
        let mut session = session(800, 800);
        let mut backend = RecordingBackend::default();

        session.on_pointer_move(400.0, 400.0);
        session.tick(&mut backend);
        session.on_pointer_button(PointerButton::Primary, ButtonState::Pressed);
        session.on_pointer_move(600.0, 400.0);
        session.tick(&mut backend);

        assert_close(session.viewport().center().real, -1.0);
        assert_close(session.viewport().center().imag, 0.0);
    }

    #[test]
    fn scroll_zooms_around_the_pointer() {
        let mut session = session(800, 800);
        session.on_pointer_move(600.0, 400.0);
        let anchor = session.viewport().screen_point_to_world(session.cursor());

        session.on_scroll(1.0);

        assert_close(session.viewport().size().width, 3.2);
        let after = session.viewport().screen_point_to_world(session.cursor());
        assert_close(after.real, anchor.real);
        assert_close(after.imag, anchor.imag);
    }

    #[test]
    fn seed_follows_the_pointer_each_tick() {
        let mut session = session(800, 800);
        let mut backend = RecordingBackend::default();

        session.on_pointer_move(800.0, 0.0);
        session.tick(&mut backend);

        assert_close(session.seed().real, 2.0);
        assert_close(session.seed().imag, 2.0);
        assert_eq!(backend.last_uniforms().unwrap().seed, Some(session.seed()));
    }

    #[test]
    fn supersampling_key_reallocates_the_target() {
        let mut session = session(640, 480);
        let mut backend = RecordingBackend::default();

        session.on_key(NavigationKey::ToggleSupersampling, &mut backend);
        assert_eq!(
            backend.take(),
            vec![
                Call::Reallocate(RenderTarget {
                    h_res: 640,
                    v_res: 480,
                    supersample_factor: 1,
                }),
                Call::SetViewport(FramebufferSize::new(640, 480)),
            ]
        );

        session.on_key(NavigationKey::ToggleSupersampling, &mut backend);
        assert_eq!(session.render_target().h_res, 1280);
        assert_eq!(session.render_target().v_res, 960);
    }

    #[test]
    fn resize_reallocates_and_empty_resize_keeps_the_target() {
        let mut session = session(640, 480);
        let mut backend = RecordingBackend::default();

        session.on_framebuffer_resize(FramebufferSize::new(1024, 768), &mut backend);
        session.on_framebuffer_resize(FramebufferSize::new(0, 0), &mut backend);

        assert_eq!(backend.take().len(), 3);
        assert_eq!(session.framebuffer(), FramebufferSize::new(1024, 768));
        assert_eq!(session.render_target().h_res, 2048);
    }

    #[test]
    fn minimize_empties_the_viewport_and_restore_brings_it_back() {
        let mut session = session(640, 480);
        let mut backend = RecordingBackend::default();

        session.on_framebuffer_resize(FramebufferSize::new(0, 0), &mut backend);

        assert_eq!(backend.take(), vec![Call::SetViewport(FramebufferSize::new(0, 0))]);

        session.on_framebuffer_resize(FramebufferSize::new(640, 480), &mut backend);

        let calls = backend.take();
        assert_eq!(calls.len(), 2);
        assert!(matches!(calls[0], Call::Reallocate(_)));
        assert_eq!(calls[1], Call::SetViewport(FramebufferSize::new(640, 480)));
    }

    #[test]
    fn resize_does_not_change_the_view() {
        let mut session = session(640, 480);
        let mut backend = RecordingBackend::default();

        session.on_framebuffer_resize(FramebufferSize::new(1024, 768), &mut backend);

        assert_eq!(session.viewport().size(), Extent::square(4.0));
    }

    #[test]
    fn reset_uses_the_current_framebuffer_aspect() {
        let mut session = session(640, 480);
        let mut backend = RecordingBackend::default();
        session.on_framebuffer_resize(FramebufferSize::new(1024, 768), &mut backend);
        session.on_scroll(3.0);

        session.on_key(NavigationKey::ResetView, &mut backend);

        assert_close(session.viewport().size().width, 4.0 * 1024.0 / 768.0);
        assert_close(session.viewport().size().height, 4.0);
        assert_eq!(session.viewport().center(), Complex::ORIGIN);
    }

    #[test]
    fn quit_key_is_reported_to_the_host() {
        let mut session = session(64, 64);
        let mut backend = RecordingBackend::default();

        session.on_key(NavigationKey::Quit, &mut backend);

        assert!(session.should_quit());
        assert!(backend.calls.is_empty());
    }

    #[test]
    fn locked_seed_survives_ticks() {
        let mut session = session(64, 64);
        let mut backend = RecordingBackend::default();

        session.lock_seed(Complex::new(-0.7, 0.27));
        session.on_pointer_move(3.0, 60.0);
        session.tick(&mut backend);

        assert_eq!(session.seed(), Complex::new(-0.7, 0.27));
        assert!(session.toggles().cursor_locked);
    }
}

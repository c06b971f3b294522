use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::interactive::{ButtonState, ExplorerSession};
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::input::gui::app::fps_counter::FpsCounter;
use crate::input::gui::app::input_mapping::{
    button_state, key_binding, pointer_button, scroll_lines, KeyBinding, CONTROLS_HELP,
};
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::{OverlayPaint, PixelsPresenter, PresenterError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub struct GuiApp {
    window: &'static Window,
    session: ExplorerSession,
    presenter: PixelsPresenter,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    fps: FpsCounter,
    show_overlay: bool,
    title: String,
    pixels_per_scroll_line: f64,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        session: ExplorerSession,
        presenter: PixelsPresenter,
        title: String,
        pixels_per_scroll_line: f64,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            session,
            presenter,
            egui_ctx,
            egui_state,
            fps: FpsCounter::default(),
            show_overlay: true,
            title,
            pixels_per_scroll_line,
        }
    }

    /// Runs until the window closes or the session asks to quit.
    ///
    /// GPU resources are released on `LoopExiting`, while the device is
    /// still alive.
    pub fn run(self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let window_id = self.window.id();
        let mut app = Some(self);
        let mut failure = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { event, window_id: id } if id == window_id => {
                let Some(gui) = app.as_mut() else {
                    return;
                };

                match gui.handle_window_event(&event) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => elwt.exit(),
                    Err(err) => {
                        error!("render failed: {err}");
                        failure = Some(err);
                        elwt.exit();
                    }
                }
            }
            Event::AboutToWait => {
                if let Some(gui) = &app {
                    gui.window.request_redraw();
                }
            }
            Event::LoopExiting => {
                if app.take().is_some() {
                    info!("window closed, released GPU resources");
                }
            }
            _ => {}
        })?;

        failure.map_or(Ok(()), |err| Err(GuiError::Presenter(err)))
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> Result<LoopControl, PresenterError> {
        let consumed = self.egui_state.on_window_event(self.window, event).consumed;

        match event {
            WindowEvent::CloseRequested => return Ok(LoopControl::Exit),
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::Resized(size) => {
                self.session
                    .on_framebuffer_resize(FramebufferSize::new(size.width, size.height), &mut self.presenter);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.session.on_pointer_move(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let state = button_state(*state);
                // releases are never swallowed
                if consumed && state == ButtonState::Pressed {
                    return Ok(LoopControl::Continue);
                }
                if let Some(button) = pointer_button(*button) {
                    self.session.on_pointer_button(button, state);
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                self.session
                    .on_scroll(scroll_lines(*delta, self.pixels_per_scroll_line));
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } if !consumed => match key_binding(*code) {
                Some(KeyBinding::Navigation(key)) => {
                    debug!("key {code:?} -> {key:?}");
                    self.session.on_key(key, &mut self.presenter);
                }
                Some(KeyBinding::ToggleOverlay) => self.show_overlay = !self.show_overlay,
                None => {}
            },
            _ => {}
        }

        if self.session.should_quit() {
            return Ok(LoopControl::Exit);
        }

        Ok(LoopControl::Continue)
    }

    fn redraw(&mut self) -> Result<(), PresenterError> {
        let egui::FullOutput {
            platform_output,
            textures_delta,
            shapes,
            pixels_per_point,
            ..
        } = self.update_ui();

        self.egui_state
            .handle_platform_output(self.window, platform_output);

        let overlay = OverlayPaint {
            primitives: self.egui_ctx.tessellate(shapes, pixels_per_point),
            textures_delta,
            pixels_per_point,
        };

        self.presenter.render(&mut self.session, overlay)?;

        self.fps.frame_presented(Instant::now());
        self.window
            .set_title(&format!("{} - FPS: {:.0}", self.title, self.fps.fps()));

        Ok(())
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let show_overlay = self.show_overlay;
        let session = &self.session;
        let fps = self.fps.fps();
        let allocated = self.presenter.allocated_target();

        self.egui_ctx.run(raw_input, |ctx| {
            if !show_overlay {
                return;
            }

            egui::Window::new("Explorer")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 260.0])
                .show(ctx, |ui| {
                    let toggles = session.toggles();
                    let viewport = session.viewport();
                    let center = viewport.center();
                    let size = viewport.size();

                    ui.heading(toggles.fractal.display_name());
                    ui.separator();

                    if toggles.fractal.uses_seed() {
                        let seed = session.seed();
                        let lock = if toggles.cursor_locked { " (locked)" } else { "" };
                        ui.label(format!("Seed: {:.6} {:+.6}i{lock}", seed.real, seed.imag));
                    }
                    ui.label(format!("Centre: {:.6} {:+.6}i", center.real, center.imag));
                    ui.label(format!("Size: {:.3e} x {:.3e}", size.width, size.height));

                    ui.separator();
                    ui.label(format!("Black interior: {}", on_off(toggles.interior_black)));
                    ui.label(format!("Log colouring: {}", on_off(toggles.log_scale)));
                    ui.label(format!("Supersampling: {}", on_off(toggles.supersampling)));
                    ui.label(format!("Reset keeps aspect: {}", on_off(!toggles.aspect_unlocked)));

                    ui.separator();
                    ui.label(format!(
                        "Compute resolution: {}x{}",
                        allocated.h_res, allocated.v_res
                    ));
                    ui.label(format!("FPS: {fps:.0}"));

                    ui.collapsing("Controls", |ui| {
                        ui.monospace(CONTROLS_HELP);
                    });
                });
        })
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

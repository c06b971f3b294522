use log::info;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::ExplorerConfig;
use crate::controllers::interactive::ExplorerSession;
use crate::core::data::framebuffer_size::FramebufferSize;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::input_mapping::CONTROLS_HELP;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::PixelsPresenter;

pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(&self.config.window.title)
                .with_inner_size(PhysicalSize::new(self.config.window.width, self.config.window.height))
                .with_min_inner_size(PhysicalSize::new(64u32, 64u32))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let session = ExplorerSession::new(&self.config, FramebufferSize::new(size.width, size.height))?;
        let mut presenter = PixelsPresenter::new(window, session.render_target())?;
        session.sync_render_target(&mut presenter);

        info!(
            "opened {}x{} window, {} mode",
            size.width,
            size.height,
            session.toggles().fractal
        );
        println!("{CONTROLS_HELP}");

        let app = GuiApp::new(
            window,
            &event_loop,
            session,
            presenter,
            self.config.window.title,
            self.config.view.pixels_per_scroll_line,
        );

        app.run(event_loop)
    }
}

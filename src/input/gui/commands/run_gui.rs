use std::marker::PhantomData;

use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};
use crate::config::ViewerConfig;
use crate::controllers::interactive::InteractiveController;
use crate::errors::ViewerError;
use crate::input::gui::{app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort}, commands::ports::presenter_factory::GuiPresenterFactoryPort};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self { presenter_factory, config, _phantom: PhantomData }
    }

    /// Opens the window and blocks until the viewer is closed.
    pub fn execute(&self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()
            .map_err(|e| ViewerError::WindowCreationFailure(e.to_string()))?;

        let screen = self.config.viewport.screen;

        // Leaked for a 'static reference, which the pixels surface requires
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(LogicalSize::new(screen.width(), screen.height()))
                .build(&event_loop)
                .map_err(|e| ViewerError::WindowCreationFailure(e.to_string()))?,
        ));

        let presenter: P = self.presenter_factory.build(window, &self.config)?;
        let controller = InteractiveController::new(self.config.viewport);
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);

        // the physical size differs from the logical request on scaled displays
        let size = window.inner_size();
        app.resize(size.width, size.height);

        app.run(window, event_loop)
    }
}

use winit::window::Window;

use crate::config::ViewerConfig;
use crate::errors::ViewerError;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        config: &ViewerConfig,
    ) -> Result<PixelsPresenter, ViewerError> {
        PixelsPresenter::new(window, config)
    }
}

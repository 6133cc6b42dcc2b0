use winit::window::Window;

use crate::config::ViewerConfig;
use crate::errors::ViewerError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, config: &ViewerConfig) -> Result<T, ViewerError>;
}

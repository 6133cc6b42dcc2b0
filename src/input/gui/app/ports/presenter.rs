use egui::Context as EguiContext;

use crate::controllers::interactive::ViewUniforms;

pub trait GuiPresenterPort {
    fn render(
        &mut self,
        uniforms: &ViewUniforms,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}

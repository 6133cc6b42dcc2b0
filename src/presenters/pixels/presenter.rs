use crate::config::ViewerConfig;
use crate::controllers::interactive::ViewUniforms;
use crate::errors::ViewerError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::pixels::mandelbrot_renderer::{MandelbrotRenderer, ShaderSources};
use crate::storage::{read_gradient_image, read_shader_source};
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

// The fractal is drawn straight onto the surface, so the pixels frame buffer
// only has to exist.
const FRAME_BUFFER_SIZE: u32 = 1;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    mandelbrot_renderer: MandelbrotRenderer,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, config: &ViewerConfig) -> Result<Self, ViewerError> {
        let vertex_source = read_shader_source(&config.vertex_shader_path)?;
        let fragment_source = read_shader_source(&config.fragment_shader_path)?;
        let gradient = read_gradient_image(&config.gradient_path)?;

        log::debug!("vertex shader source:\n{}", vertex_source);

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(FRAME_BUFFER_SIZE, FRAME_BUFFER_SIZE, surface_texture)
            .map_err(|e| ViewerError::GraphicsLoaderFailure(e.to_string()))?;

        let adapter_info = pixels.adapter().get_info();
        log::info!(
            "using {} ({:?} backend)",
            adapter_info.name,
            adapter_info.backend
        );

        let mandelbrot_renderer = MandelbrotRenderer::new(
            pixels.device(),
            pixels.queue(),
            pixels.render_texture_format(),
            ShaderSources {
                vertex: &vertex_source,
                fragment: &fragment_source,
            },
            &gradient,
        )?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            mandelbrot_renderer,
            egui_renderer,
            width: size.width,
            height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        uniforms: &ViewUniforms,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mandelbrot_renderer = &self.mandelbrot_renderer;
        let egui_renderer = &mut self.egui_renderer;
        let size_in_pixels = [self.width, self.height];

        self.pixels.render_with(|encoder, render_target, context| {
            mandelbrot_renderer.render(encoder, render_target, &context.queue, uniforms);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_output.pixels_per_point);

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        if let Err(e) = self.pixels.resize_surface(width, height) {
            log::error!("couldn't resize surface to {}x{}: {}", width, height, e);
            return;
        }

        self.width = width;
        self.height = height;
    }
}

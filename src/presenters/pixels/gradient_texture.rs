use pixels::wgpu;
use crate::errors::ViewerError;
use crate::storage::GradientImage;

/// The colour lookup table sampled by the fragment shader. Uploaded once.
pub struct GradientTexture {
    // kept alive for the view and bind group that reference it
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl GradientTexture {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &GradientImage,
    ) -> Result<Self, ViewerError> {
        let max_width = device.limits().max_texture_dimension_1d;
        if image.width() > max_width {
            return Err(ViewerError::GraphicsLoaderFailure(format!(
                "gradient is {} texels wide, the device supports at most {}",
                image.width(),
                max_width
            )));
        }

        let size = wgpu::Extent3d {
            width: image.width(),
            height: 1,
            depth_or_array_layers: 1,
        };

        // 1-D textures cannot carry a mip chain, linear filtering only
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Gradient"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D1,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.texels(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width()),
                rows_per_image: None,
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Gradient view"),
            dimension: Some(wgpu::TextureViewDimension::D1),
            ..Default::default()
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Gradient sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        log::info!("gradient texture uploaded, {} texels", image.width());

        Ok(Self {
            _texture: texture,
            view,
            sampler,
        })
    }

    #[must_use]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[must_use]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

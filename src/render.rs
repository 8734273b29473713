mod helpers;

use figurine_core::{Camera, LightRig, Mannequin, RenderSurface, SceneFrame, SceneVertex};
use glam::Mat4;
use web_sys as web;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    eye: [f32; 4],
    ambient: [f32; 4],
    key_dir: [f32; 4],
    key_radiance: [f32; 4],
    accent_position: [f32; 4],
    accent_radiance: [f32; 4],
}

impl SceneUniforms {
    fn new(camera: &Camera, lights: &LightRig, model: Mat4) -> Self {
        let key_dir = lights.key.position.normalize_or_zero();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            eye: camera.eye().extend(1.0).to_array(),
            ambient: lights.ambient.extend(0.0).to_array(),
            key_dir: key_dir.extend(0.0).to_array(),
            key_radiance: lights.key.radiance.extend(0.0).to_array(),
            accent_position: lights.accent.position.extend(1.0).to_array(),
            accent_radiance: lights.accent.radiance.extend(0.0).to_array(),
        }
    }
}

/// WebGPU backend for the scene manager: one depth-tested pass drawing the
/// baked mannequin mesh.
pub struct GpuState {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    #[allow(dead_code)]
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
    // revision of the mannequin currently in `vertex_buffer`
    baked_revision: Option<u64>,
    scratch: Vec<SceneVertex>,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("figurine_shader"),
            source: wgpu::ShaderSource::Wgsl(figurine_core::FIGURINE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("figurine_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("figurine_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_scene_pipeline(&device, &layout, &shader, format);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("figurine_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("figurine_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        Ok(Self {
            canvas: canvas.clone(),
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            depth_tex,
            depth_view,
            vertex_buffer: None,
            vertex_count: 0,
            baked_revision: None,
            scratch: Vec::new(),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_tex = tex;
            self.depth_view = view;
        }
    }

    /// Re-bake and upload the mannequin mesh if it changed since the last
    /// upload.
    fn sync_mesh(&mut self, mannequin: &Mannequin) {
        if self.baked_revision == Some(mannequin.revision()) {
            return;
        }
        mannequin.bake(&mut self.scratch);
        let bytes: &[u8] = bytemuck::cast_slice(&self.scratch);
        let fits = self
            .vertex_buffer
            .as_ref()
            .is_some_and(|b| b.size() >= bytes.len() as u64);
        if !fits {
            self.vertex_buffer = Some(self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("figurine_vertices"),
                size: bytes.len().max(1) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
        if let Some(buffer) = &self.vertex_buffer {
            if !bytes.is_empty() {
                self.queue.write_buffer(buffer, 0, bytes);
            }
        }
        self.vertex_count = self.scratch.len() as u32;
        self.baked_revision = Some(mannequin.revision());
        log::debug!("[gpu] uploaded {} vertices", self.vertex_count);
    }
}

impl RenderSurface for GpuState {
    type Error = wgpu::SurfaceError;

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width.max(1));
        self.canvas.set_height(height.max(1));
        self.resize_if_needed(width, height);
    }

    fn draw(&mut self, frame: &SceneFrame<'_>) -> Result<(), Self::Error> {
        let model = match frame.mannequin {
            Some(m) => {
                self.sync_mesh(m);
                m.transform.matrix()
            }
            None => Mat4::IDENTITY,
        };
        let uniforms = SceneUniforms::new(frame.camera, frame.lights, model);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("figurine_encoder"),
            });
        {
            let bg = frame.lights.background;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("figurine_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.x as f64,
                            g: bg.y as f64,
                            b: bg.z as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let (Some(_), Some(buffer)) = (frame.mannequin, &self.vertex_buffer) {
                if self.vertex_count > 0 {
                    rpass.set_pipeline(&self.pipeline);
                    rpass.set_bind_group(0, &self.bind_group, &[]);
                    rpass.set_vertex_buffer(0, buffer.slice(..));
                    rpass.draw(0..self.vertex_count, 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

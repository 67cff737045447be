//! wgpu renderer: surface setup, line pipelines, per-frame trail upload.

mod lines;

use std::ops::Range;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::agent::Population;
use crate::camera::OrbitCamera;
use crate::config::{AGENT_COUNT, TRAIL_CAPACITY};
use crate::error::GpuError;
pub use lines::LineVertex;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
/// Far plane generous enough for the attractor at raw coordinates plus a
/// zoomed-out camera.
const FAR_PLANE: f32 = 2000.0;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

/// GPU resources and the per-frame render entry point.
///
/// The trail vertex buffer is allocated once at full capacity
/// (`AGENT_COUNT * TRAIL_CAPACITY` vertices) so steady-state rendering never
/// allocates GPU memory.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    depth_texture: wgpu::TextureView,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    scenery_pipeline: wgpu::RenderPipeline,
    trail_pipeline: wgpu::RenderPipeline,
    scenery_buffer: wgpu::Buffer,
    scenery_vertex_count: u32,
    trail_buffer: wgpu::Buffer,
    /// CPU staging for trail vertices, reused across frames.
    trail_scratch: Vec<LineVertex>,
    /// Per-agent vertex ranges into `trail_scratch`, rebuilt each frame.
    trail_runs: Vec<Range<u32>>,
}

impl GpuState {
    pub async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = create_depth_texture(&device, &config);

        let uniforms = Uniforms {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Uniform Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(lines::LINE_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        // Opaque scenery writes depth; glowing trails blend additively on top
        // without occluding each other.
        let scenery_pipeline = lines::create_line_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            config.format,
            wgpu::PrimitiveTopology::LineList,
            wgpu::BlendState::ALPHA_BLENDING,
            true,
            "Scenery Pipeline",
        );
        let trail_pipeline = lines::create_line_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            config.format,
            wgpu::PrimitiveTopology::LineStrip,
            lines::additive_blend(),
            false,
            "Trail Pipeline",
        );

        let scenery = lines::scenery_vertices();
        let scenery_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scenery Vertex Buffer"),
            contents: bytemuck::cast_slice(&scenery),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let trail_buffer_size =
            (AGENT_COUNT * TRAIL_CAPACITY * std::mem::size_of::<LineVertex>()) as u64;
        let trail_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Trail Vertex Buffer"),
            size: trail_buffer_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            uniform_buffer,
            uniform_bind_group,
            scenery_pipeline,
            trail_pipeline,
            scenery_buffer,
            scenery_vertex_count: scenery.len() as u32,
            trail_buffer,
            trail_scratch: Vec::with_capacity(AGENT_COUNT * TRAIL_CAPACITY),
            trail_runs: Vec::with_capacity(AGENT_COUNT),
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = create_depth_texture(&self.device, &self.config);
        }
    }

    fn update_uniforms(&mut self, camera: &OrbitCamera) {
        let aspect = self.config.width as f32 / self.config.height as f32;
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), aspect, 0.1, FAR_PLANE);
        let view_proj = proj * camera.view_matrix();

        let uniforms = Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Repack every agent's trail into the staging buffer, densely, and
    /// record one vertex range per drawable trail (>= 2 points).
    fn pack_trails(&mut self, population: &Population) {
        self.trail_scratch.clear();
        self.trail_runs.clear();

        for agent in population.agents() {
            if agent.trail.len() < 2 {
                continue;
            }
            let start = self.trail_scratch.len() as u32;
            self.trail_scratch
                .extend(agent.trail.iter().map(|p| LineVertex::new(p, agent.color)));
            self.trail_runs.push(start..self.trail_scratch.len() as u32);
        }
    }

    pub fn render(
        &mut self,
        camera: &OrbitCamera,
        population: &Population,
    ) -> Result<(), wgpu::SurfaceError> {
        self.update_uniforms(camera);
        self.pack_trails(population);

        if !self.trail_scratch.is_empty() {
            self.queue
                .write_buffer(&self.trail_buffer, 0, bytemuck::cast_slice(&self.trail_scratch));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.008,
                            g: 0.008,
                            b: 0.008,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

            render_pass.set_pipeline(&self.scenery_pipeline);
            render_pass.set_vertex_buffer(0, self.scenery_buffer.slice(..));
            render_pass.draw(0..self.scenery_vertex_count, 0..1);

            // One strip per agent; separate draws keep strips disconnected.
            render_pass.set_pipeline(&self.trail_pipeline);
            render_pass.set_vertex_buffer(0, self.trail_buffer.slice(..));
            for run in &self.trail_runs {
                render_pass.draw(run.clone(), 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn create_depth_texture(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

//! Line vertex format, shader, and pipeline construction.
//!
//! Both the floor grid and the trails are plain colored lines; they share a
//! vertex layout and shader and differ only in topology and blend state.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::DEPTH_FORMAT;

/// A colored line vertex uploaded straight from CPU-side trail data.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

pub(crate) const LINE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(position, 1.0);
    out.color = color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

/// Additive blend: overlapping low-alpha trail segments sum and glow.
pub(crate) fn additive_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Build a line-drawing pipeline over the shared shader and vertex layout.
pub(crate) fn create_line_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    blend: wgpu::BlendState,
    depth_write_enabled: bool,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[LineVertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Slices per side of the floor grid.
const GRID_SLICES: i32 = 20;
/// World units between grid lines.
const GRID_SPACING: f32 = 10.0;
/// Height of the vertical axis marker at the origin.
const AXIS_HEIGHT: f32 = 200.0;

const GRID_COLOR: [f32; 4] = [0.22, 0.22, 0.22, 1.0];
const AXIS_COLOR: [f32; 4] = [0.31, 0.31, 0.31, 1.0];

/// Static scenery: a floor grid at y=0 plus a vertical axis marker.
///
/// Line-list vertices, generated once at startup.
pub(crate) fn scenery_vertices() -> Vec<LineVertex> {
    let half = GRID_SLICES as f32 * GRID_SPACING / 2.0;
    let mut vertices = Vec::with_capacity(((GRID_SLICES as usize + 1) * 4) + 2);

    for i in 0..=GRID_SLICES {
        let offset = i as f32 * GRID_SPACING - half;
        // Line parallel to the x axis, then its z-parallel counterpart.
        vertices.push(LineVertex::new(Vec3::new(-half, 0.0, offset), GRID_COLOR));
        vertices.push(LineVertex::new(Vec3::new(half, 0.0, offset), GRID_COLOR));
        vertices.push(LineVertex::new(Vec3::new(offset, 0.0, -half), GRID_COLOR));
        vertices.push(LineVertex::new(Vec3::new(offset, 0.0, half), GRID_COLOR));
    }

    vertices.push(LineVertex::new(Vec3::ZERO, AXIS_COLOR));
    vertices.push(LineVertex::new(Vec3::new(0.0, AXIS_HEIGHT, 0.0), AXIS_COLOR));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenery_is_line_list_shaped() {
        let vertices = scenery_vertices();
        assert_eq!(vertices.len() % 2, 0);
        // 21 lines per direction plus the axis marker.
        assert_eq!(vertices.len(), (GRID_SLICES as usize + 1) * 4 + 2);
    }

    #[test]
    fn grid_lies_on_the_floor_plane() {
        let vertices = scenery_vertices();
        // All but the final axis segment sit at y=0.
        for v in &vertices[..vertices.len() - 2] {
            assert_eq!(v.position[1], 0.0);
        }
    }
}

//! The translucent rotating dodecahedron.
//!
//! Resources split into the two groups the scene teardown releases
//! separately: *geometry* (vertex and index buffers) and *material*
//! (pipeline, uniform buffer, bind group). Both are `Option`s so a release
//! can run before or after the other, or twice, without touching freed
//! handles.

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::geometry::{dodecahedron::DodecahedronMesh, MeshVertex};
use crate::camera::Camera;
use crate::gpu::pipeline_helpers;
use crate::options::SceneOptions;
use crate::scene::SceneState;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block for `solid.wgsl`.
pub struct SolidUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Object rotation.
    pub model: [[f32; 4]; 4],
    /// Linear RGB color and opacity.
    pub color: [f32; 4],
    /// Direction toward the light and its intensity.
    pub light: [f32; 4],
    /// Ambient intensity, premultiply flag, padding.
    pub params: [f32; 4],
}

impl SolidUniform {
    /// Uniform for an unrotated solid seen through `camera`.
    #[must_use]
    pub fn new(
        options: &SceneOptions,
        camera: &Camera,
        linear_output: bool,
        premultiplied: bool,
    ) -> Self {
        let rgb = if linear_output {
            options.color.map(srgb_to_linear)
        } else {
            options.color
        };
        let toward_light = Vec3::from(options.light_position).normalize_or_zero();
        Self {
            view_proj: camera.build_matrix().to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], options.opacity.clamp(0.0, 1.0)],
            light: toward_light.extend(options.light_intensity).to_array(),
            params: [
                options.ambient_intensity,
                if premultiplied { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
        }
    }

    /// Apply the scene's current orientation.
    pub fn set_rotation(&mut self, state: &SceneState) {
        self.model = model_matrix(state).to_cols_array_2d();
    }

    /// Apply a new camera projection.
    pub fn set_camera(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
    }
}

/// Rotation about X, then Y, applied to the solid.
#[must_use]
pub fn model_matrix(state: &SceneState) -> Mat4 {
    let (x, y) = state.wrapped_angles();
    Mat4::from_rotation_x(x) * Mat4::from_rotation_y(y)
}

/// sRGB transfer function inverse for one channel in 0..=1.
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

struct Geometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

struct Material {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Draws the dodecahedron into a transparent target.
pub struct SolidRenderer {
    geometry: Option<Geometry>,
    material: Option<Material>,
    camera: Camera,
    uniform: SolidUniform,
}

impl SolidRenderer {
    /// Upload the mesh and build the pipeline for `format`.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        premultiplied: bool,
        options: &SceneOptions,
        aspect: f32,
    ) -> Self {
        let camera = Camera::from_options(options, aspect);
        let uniform =
            SolidUniform::new(options, &camera, format.is_srgb(), premultiplied);

        let mesh = DodecahedronMesh::new(options.radius);
        let geometry = Geometry {
            vertex_buffer: device.create_buffer_init(
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Solid Vertices"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                },
            ),
            index_buffer: device.create_buffer_init(
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Solid Indices"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                },
            ),
            index_count: mesh.indices.len() as u32,
        };

        let material = Self::create_material(device, format, premultiplied, &uniform);

        Self {
            geometry: Some(geometry),
            material: Some(material),
            camera,
            uniform,
        }
    }

    fn create_material(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        premultiplied: bool,
        uniform: &SolidUniform,
    ) -> Material {
        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Solid Uniform"),
                contents: bytemuck::cast_slice(&[*uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Solid Bind Group Layout"),
                entries: &[pipeline_helpers::uniform_buffer(0)],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Solid Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Solid Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../../assets/shaders/raster/solid.wgsl").into(),
            ),
        });

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Solid Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Solid Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[MeshVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(pipeline_helpers::blend_for(premultiplied)),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                // Convex solid: with back faces culled no two fragments
                // overlap, so no depth buffer is needed.
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Material {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    /// Update the camera for a new surface aspect ratio.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
        self.uniform.set_camera(&self.camera);
    }

    /// Upload the orientation in `state`.
    pub fn prepare(&mut self, queue: &wgpu::Queue, state: &SceneState) {
        self.uniform.set_rotation(state);
        if let Some(material) = &self.material {
            queue.write_buffer(
                &material.uniform_buffer,
                0,
                bytemuck::cast_slice(&[self.uniform]),
            );
        }
    }

    /// Clear `view` to transparent and draw the solid. Draws nothing but
    /// the clear once geometry or material has been released.
    pub fn draw(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Solid Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        let (Some(geometry), Some(material)) = (&self.geometry, &self.material)
        else {
            return;
        };
        pass.set_pipeline(&material.pipeline);
        pass.set_bind_group(0, &material.bind_group, &[]);
        pass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
        pass.set_index_buffer(
            geometry.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        pass.draw_indexed(0..geometry.index_count, 0, 0..1);
    }

    /// Free the vertex and index buffers.
    pub fn release_geometry(&mut self) {
        if let Some(geometry) = self.geometry.take() {
            geometry.vertex_buffer.destroy();
            geometry.index_buffer.destroy();
        }
    }

    /// Free the pipeline, bind group and uniform buffer.
    pub fn release_material(&mut self) {
        if let Some(material) = self.material.take() {
            material.uniform_buffer.destroy();
        }
    }

    /// `true` once both resource groups have been released.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.geometry.is_none() && self.material.is_none()
    }

    /// Current camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SurfaceSize;

    #[test]
    fn uniform_block_is_std140_sized() {
        assert_eq!(size_of::<SolidUniform>(), 176);
        assert_eq!(size_of::<SolidUniform>() % 16, 0);
    }

    #[test]
    fn srgb_conversion_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.5) < 0.5);
    }

    #[test]
    fn uniform_carries_options() {
        let opts = SceneOptions::default();
        let camera = Camera::from_options(&opts, 2.0);
        let u = SolidUniform::new(&opts, &camera, false, true);
        assert_eq!(&u.color[..3], &opts.color);
        assert_eq!(u.color[3], opts.opacity);
        assert_eq!(u.params[0], opts.ambient_intensity);
        assert_eq!(u.params[1], 1.0);
        assert_eq!(u.light[3], opts.light_intensity);
        let dir = Vec3::new(u.light[0], u.light[1], u.light[2]);
        assert!((dir - Vec3::ONE.normalize()).length() < 1e-6);
    }

    #[test]
    fn srgb_target_gets_linear_color() {
        let opts = SceneOptions::default();
        let camera = Camera::from_options(&opts, 2.0);
        let u = SolidUniform::new(&opts, &camera, true, false);
        assert!(u.color[0] < opts.color[0]);
        assert_eq!(u.params[1], 0.0);
    }

    #[test]
    fn model_matrix_follows_rotation() {
        let mut state = SceneState::new(SurfaceSize { width: 1, height: 1 });
        assert_eq!(model_matrix(&state), Mat4::IDENTITY);
        state.rotation_y = std::f64::consts::FRAC_PI_2;
        let x = model_matrix(&state).transform_vector3(Vec3::X);
        assert!((x - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn model_matrix_ignores_whole_turns() {
        let mut state = SceneState::new(SurfaceSize { width: 1, height: 1 });
        state.rotation_x = 0.7;
        state.rotation_y = 1.3;
        let near = model_matrix(&state);
        state.rotation_x += 5000.0 * std::f64::consts::TAU;
        state.rotation_y += 9000.0 * std::f64::consts::TAU;
        let far = model_matrix(&state);
        assert!(near.abs_diff_eq(far, 1e-4));
    }
}

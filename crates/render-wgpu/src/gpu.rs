use crate::camera::WalkCamera;
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use promenade_assets::{Texture, TextureStore};
use promenade_scene::{Atmosphere, FloorMesh, Gallery};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    fog_color: [f32; 4],
    fog_range: [f32; 4],
    sky_color: [f32; 4],
    ground_color: [f32; 4],
    /// xyz = direction, w = intensity.
    light_dir: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct FloorVertex {
    position: [f32; 3],
    color: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct PanelVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct PropVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct PropInstance {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

/// Generate unit box vertices and indices for the prop stand-in.
fn box_mesh() -> (Vec<PropVertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        PropVertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        PropVertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        PropVertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        PropVertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        PropVertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        PropVertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        PropVertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        PropVertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        PropVertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        PropVertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        PropVertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        PropVertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        PropVertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        PropVertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        PropVertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        PropVertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        PropVertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        PropVertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        PropVertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        PropVertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        PropVertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        PropVertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        PropVertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        PropVertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// Six vertices (two triangles) for one panel quad, in world space.
/// Panels are axis-aligned, facing ±Z; the pipeline draws both sides.
fn panel_quad(center: [f32; 3], width: f32, height: f32) -> [PanelVertex; 6] {
    let [cx, cy, cz] = center;
    let (hw, hh) = (width * 0.5, height * 0.5);
    let bl = PanelVertex { position: [cx - hw, cy - hh, cz], uv: [0.0, 1.0] };
    let br = PanelVertex { position: [cx + hw, cy - hh, cz], uv: [1.0, 1.0] };
    let tr = PanelVertex { position: [cx + hw, cy + hh, cz], uv: [1.0, 0.0] };
    let tl = PanelVertex { position: [cx - hw, cy + hh, cz], uv: [0.0, 0.0] };
    [bl, br, tr, tr, tl, bl]
}

/// One panel's draw data: its slice of the shared vertex buffer plus the
/// bind group holding its texture.
struct PanelDraw {
    first_vertex: u32,
    bind_group: wgpu::BindGroup,
}

/// wgpu-based gallery renderer.
pub struct WgpuRenderer {
    floor_pipeline: wgpu::RenderPipeline,
    panel_pipeline: wgpu::RenderPipeline,
    prop_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    floor_vertex_buffer: wgpu::Buffer,
    floor_vertex_count: u32,
    panel_vertex_buffer: wgpu::Buffer,
    panel_draws: Vec<PanelDraw>,
    prop_vertex_buffer: wgpu::Buffer,
    prop_index_buffer: wgpu::Buffer,
    prop_index_count: u32,
    prop_instance_buffer: wgpu::Buffer,
    depth_texture: wgpu::TextureView,
    atmosphere: Atmosphere,
    background: wgpu::Color,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        gallery: &Gallery,
        textures: &TextureStore,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
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

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("panel_texture_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let depth_stencil = wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: Default::default(),
            bias: Default::default(),
        };

        // Floor pipeline
        let floor_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("floor_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::FLOOR_SHADER.into()),
        });
        let floor_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("floor_pipeline_layout"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });
        let floor_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("floor_pipeline"),
            layout: Some(&floor_layout),
            vertex: wgpu::VertexState {
                module: &floor_shader,
                entry_point: Some("vs_floor"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<FloorVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &floor_shader,
                entry_point: Some("fs_floor"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Displaced terrain is visible from any side.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_stencil.clone()),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Panel pipeline
        let panel_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("panel_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::PANEL_SHADER.into()),
        });
        let panel_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("panel_pipeline_layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });
        let panel_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("panel_pipeline"),
            layout: Some(&panel_layout),
            vertex: wgpu::VertexState {
                module: &panel_shader,
                entry_point: Some("vs_panel"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<PanelVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x2,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &panel_shader,
                entry_point: Some("fs_panel"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Panels are double-sided.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_stencil.clone()),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Prop pipeline
        let prop_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("prop_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::PROP_SHADER.into()),
        });
        let prop_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("prop_pipeline_layout"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });
        let prop_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("prop_pipeline"),
            layout: Some(&prop_layout),
            vertex: wgpu::VertexState {
                module: &prop_shader,
                entry_point: Some("vs_prop"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<PropVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<PropInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                            6 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &prop_shader,
                entry_point: Some("fs_prop"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(depth_stencil),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Floor mesh
        let floor = FloorMesh::generate(gallery.floor_seed);
        let floor_verts: Vec<FloorVertex> = floor
            .positions
            .iter()
            .zip(&floor.colors)
            .map(|(p, c)| FloorVertex {
                position: *p,
                color: *c,
            })
            .collect();
        let floor_vertex_count = floor_verts.len() as u32;
        let floor_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("floor_vertex_buffer"),
            contents: bytemuck::cast_slice(&floor_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Panel quads + per-panel textures
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("panel_sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            ..Default::default()
        });

        let mut panel_verts = Vec::with_capacity(gallery.panels.len() * 6);
        let mut panel_draws = Vec::with_capacity(gallery.panels.len());
        let fallback = Texture::placeholder("fallback");
        for (i, panel) in gallery.panels.iter().enumerate() {
            panel_verts.extend_from_slice(&panel_quad(
                panel.position.to_array(),
                panel.width,
                panel.height,
            ));

            let texture = textures
                .id_for(&panel.texture)
                .and_then(|id| textures.get(id).ok())
                .unwrap_or(&fallback);
            let bind_group =
                upload_texture(device, queue, &texture_layout, &sampler, texture);
            panel_draws.push(PanelDraw {
                first_vertex: (i * 6) as u32,
                bind_group,
            });
        }
        let panel_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("panel_vertex_buffer"),
            contents: bytemuck::cast_slice(&panel_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Prop stand-in box
        let (prop_verts, prop_indices) = box_mesh();
        let prop_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prop_vertex_buffer"),
            contents: bytemuck::cast_slice(&prop_verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let prop_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prop_index_buffer"),
            contents: bytemuck::cast_slice(&prop_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let prop_index_count = prop_indices.len() as u32;

        let model = gallery.prop.placement.matrix().to_cols_array_2d();
        let prop_instance = PropInstance {
            model_0: model[0],
            model_1: model[1],
            model_2: model[2],
            model_3: model[3],
            color: [0.6, 0.6, 0.65, 1.0],
        };
        let prop_instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("prop_instance_buffer"),
            contents: bytemuck::bytes_of(&prop_instance),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let depth_texture = Self::create_depth_texture(device, width, height);

        let [br, bg, bb] = gallery.atmosphere.background;
        let background = wgpu::Color {
            r: br as f64,
            g: bg as f64,
            b: bb as f64,
            a: 1.0,
        };

        tracing::info!(
            panels = panel_draws.len(),
            floor_vertices = floor_vertex_count,
            "gallery renderer ready"
        );

        Self {
            floor_pipeline,
            panel_pipeline,
            prop_pipeline,
            uniform_buffer,
            uniform_bind_group,
            floor_vertex_buffer,
            floor_vertex_count,
            panel_vertex_buffer,
            panel_draws,
            prop_vertex_buffer,
            prop_index_buffer,
            prop_index_count,
            prop_instance_buffer,
            depth_texture,
            atmosphere: gallery.atmosphere.clone(),
            background,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Render one frame: floor, panels, prop.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &WalkCamera,
    ) {
        let a = &self.atmosphere;
        let light = a.light_direction.normalize();
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_projection().to_cols_array_2d(),
                camera_pos: [camera.position.x, camera.position.y, camera.position.z, 1.0],
                fog_color: [a.fog_color[0], a.fog_color[1], a.fog_color[2], 1.0],
                fog_range: [a.fog_near, a.fog_far, 0.0, 0.0],
                sky_color: [a.sky_color[0], a.sky_color[1], a.sky_color[2], 1.0],
                ground_color: [a.ground_color[0], a.ground_color[1], a.ground_color[2], 1.0],
                light_dir: [light.x, light.y, light.z, a.light_intensity],
            }),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
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
                ..Default::default()
            });

            // Floor
            pass.set_pipeline(&self.floor_pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            pass.set_vertex_buffer(0, self.floor_vertex_buffer.slice(..));
            pass.draw(0..self.floor_vertex_count, 0..1);

            // Panels, one bind group each
            pass.set_pipeline(&self.panel_pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            pass.set_vertex_buffer(0, self.panel_vertex_buffer.slice(..));
            for draw in &self.panel_draws {
                pass.set_bind_group(1, &draw.bind_group, &[]);
                pass.draw(draw.first_vertex..draw.first_vertex + 6, 0..1);
            }

            // Prop
            pass.set_pipeline(&self.prop_pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            pass.set_vertex_buffer(0, self.prop_vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.prop_instance_buffer.slice(..));
            pass.set_index_buffer(self.prop_index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            pass.draw_indexed(0..self.prop_index_count, 0, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

/// Upload decoded RGBA8 pixels and build the panel bind group.
fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    texture: &Texture,
) -> wgpu::BindGroup {
    let size = wgpu::Extent3d {
        width: texture.width,
        height: texture.height,
        depth_or_array_layers: 1,
    };
    let gpu_texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(texture.name.as_str()),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &gpu_texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &texture.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * texture.width),
            rows_per_image: Some(texture.height),
        },
        size,
    );
    let view = gpu_texture.create_view(&Default::default());

    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("panel_texture_bind_group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_quad_spans_the_panel() {
        let quad = panel_quad([0.0, 50.0, -40.0], 20.0, 20.0);
        let xs: Vec<f32> = quad.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = quad.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 10.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
        assert!(quad.iter().all(|v| v.position[2] == -40.0));
    }

    #[test]
    fn box_mesh_is_a_cube() {
        let (verts, indices) = box_mesh();
        assert_eq!(verts.len(), 24);
        assert_eq!(indices.len(), 36);
        for v in &verts {
            let n = glam::Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-6);
        }
    }
}

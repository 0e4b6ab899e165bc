use crate::constants::SPARKLE_SEED;
use app_core::{
    beam_mesh, box_mesh, lens_mesh, plane_mesh, projector_group_matrix, projector_parts,
    reel_mesh, sparkle_field, static_scene, Camera, Instance, MeshData, SceneFrame,
    AMBIENT_INTENSITY, FOG_COLOR, FOG_FAR, FOG_NEAR, FX_WGSL, SCENE_WGSL, SPARKLE_COUNT,
    SPARKLE_OPACITY, SPARKLE_SPEED, SPOT_ANGLE_RAD, SPOT_COLOR,
};
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Uniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    cam_pos: [f32; 4],    // xyz eye, w elapsed seconds
    spot_pos: [f32; 4],   // xyz position, w cos(cone angle)
    spot_dir: [f32; 4],   // xyz normalized aim, w intensity
    spot_color: [f32; 4], // rgb, w beam opacity
    fog_color: [f32; 4],  // rgb, w ambient intensity
    params: [f32; 4],     // x fog near, y fog far, z sparkle opacity, w sparkle speed
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4], // rgb albedo, a emissive amount
}

impl InstanceRaw {
    fn from_instance(instance: &Instance) -> Self {
        Self {
            model: instance.model_matrix().to_cols_array_2d(),
            color: [
                instance.color[0],
                instance.color[1],
                instance.color[2],
                instance.emissive,
            ],
        }
    }

    fn from_part(group: Mat4, part: &Instance) -> Self {
        Self {
            model: (group * part.model_matrix()).to_cols_array_2d(),
            color: [part.color[0], part.color[1], part.color[2], part.emissive],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SparkleRaw {
    pos_size: [f32; 4], // xyz center, w half-size
    misc: [f32; 4],     // x phase
}

struct Mesh {
    vb: wgpu::Buffer,
    ib: wgpu::Buffer,
    index_count: u32,
}

fn upload_mesh(device: &wgpu::Device, label: &str, data: &MeshData) -> Mesh {
    let vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&data.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&data.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    Mesh {
        vb,
        ib,
        index_count: data.index_count(),
    }
}

fn upload_instances(device: &wgpu::Device, label: &str, instances: &[Instance]) -> wgpu::Buffer {
    let raw: Vec<InstanceRaw> = instances.iter().map(InstanceRaw::from_instance).collect();
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&raw),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: (std::mem::size_of::<f32>() * 6) as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 12,
            shader_location: 1,
        },
    ],
};

// Model matrix as four column vectors plus albedo/emissive.
const INSTANCE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<InstanceRaw>() as u64,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 0,
            shader_location: 2,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 16,
            shader_location: 3,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 32,
            shader_location: 4,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 48,
            shader_location: 5,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 64,
            shader_location: 6,
        },
    ],
};

const SPARKLE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<SparkleRaw>() as u64,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 16,
            shader_location: 1,
        },
    ],
};

const ADDITIVE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

// Byte offsets into the dynamic instance buffer: chassis, lens, reels, beam.
const INSTANCE_STRIDE: u64 = std::mem::size_of::<InstanceRaw>() as u64;
const CHASSIS_RANGE: std::ops::Range<u64> = 0..INSTANCE_STRIDE;
const LENS_RANGE: std::ops::Range<u64> = INSTANCE_STRIDE..2 * INSTANCE_STRIDE;
const REEL_RANGE: std::ops::Range<u64> = 2 * INSTANCE_STRIDE..4 * INSTANCE_STRIDE;
const BEAM_RANGE: std::ops::Range<u64> = 4 * INSTANCE_STRIDE..5 * INSTANCE_STRIDE;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene_pipeline: wgpu::RenderPipeline,
    beam_pipeline: wgpu::RenderPipeline,
    sparkle_pipeline: wgpu::RenderPipeline,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,

    cube: Mesh,
    plane: Mesh,
    lens: Mesh,
    reel: Mesh,
    beam: Mesh,

    static_boxes: wgpu::Buffer,
    static_box_count: u32,
    static_planes: wgpu::Buffer,
    static_plane_count: u32,
    dynamic_instances: wgpu::Buffer,
    sparkles: wgpu::Buffer,
    sparkle_count: u32,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, width, height);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let fx_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fx_shader"),
            source: wgpu::ShaderSource::Wgsl(FX_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
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
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_scene"),
                buffers: &[VERTEX_LAYOUT, INSTANCE_LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_scene"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // FX pipelines blend additively and test depth without writing it, so
        // the beam and sparkles layer over the set but stay behind the seats.
        let beam_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("beam_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &fx_shader,
                entry_point: Some("vs_beam"),
                buffers: &[VERTEX_LAYOUT, INSTANCE_LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &fx_shader,
                entry_point: Some("fs_beam"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let sparkle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sparkle_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &fx_shader,
                entry_point: Some("vs_sparkle"),
                buffers: &[SPARKLE_LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &fx_shader,
                entry_point: Some("fs_sparkle"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE_BLEND),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // Geometry: one unit cube and plane shared by every static group,
        // dedicated meshes for the projector parts.
        let cube = upload_mesh(&device, "cube", &box_mesh(1.0, 1.0, 1.0));
        let plane = upload_mesh(&device, "plane", &plane_mesh(1.0, 1.0));
        let lens = upload_mesh(&device, "lens", &lens_mesh());
        let reel = upload_mesh(&device, "reel", &reel_mesh());
        let beam = upload_mesh(&device, "beam", &beam_mesh());

        let scene = static_scene();
        let static_boxes = upload_instances(&device, "static_boxes", &scene.boxes);
        let static_planes = upload_instances(&device, "static_planes", &scene.planes);

        let dynamic_instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("dynamic_instances"),
            size: 5 * INSTANCE_STRIDE,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let field = sparkle_field(SPARKLE_SEED, SPARKLE_COUNT);
        let sparkle_raw: Vec<SparkleRaw> = field
            .iter()
            .map(|s| SparkleRaw {
                pos_size: [s.position.x, s.position.y, s.position.z, s.size],
                misc: [s.phase, 0.0, 0.0, 0.0],
            })
            .collect();
        let sparkles = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sparkles"),
            contents: bytemuck::cast_slice(&sparkle_raw),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_pipeline,
            beam_pipeline,
            sparkle_pipeline,
            uniform_buffer,
            bind_group,
            depth_view,
            cube,
            plane,
            lens,
            reel,
            beam,
            static_boxes,
            static_box_count: scene.boxes.len() as u32,
            static_planes,
            static_plane_count: scene.planes.len() as u32,
            dynamic_instances,
            sparkles,
            sparkle_count: field.len() as u32,
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    fn uniforms(&self, frame: &SceneFrame, elapsed: f32) -> Uniforms {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = Camera::auditorium(aspect);
        let view_proj = camera.projection_matrix() * camera.view_matrix();

        let forward = (camera.target - camera.eye).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);

        let aim = (frame.spotlight.target - frame.spotlight.position).normalize_or_zero();

        Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
            cam_right: [right.x, right.y, right.z, 0.0],
            cam_up: [up.x, up.y, up.z, 0.0],
            cam_pos: [camera.eye.x, camera.eye.y, camera.eye.z, elapsed],
            spot_pos: [
                frame.spotlight.position.x,
                frame.spotlight.position.y,
                frame.spotlight.position.z,
                SPOT_ANGLE_RAD.cos(),
            ],
            spot_dir: [aim.x, aim.y, aim.z, frame.spotlight.intensity],
            spot_color: [
                SPOT_COLOR[0],
                SPOT_COLOR[1],
                SPOT_COLOR[2],
                frame.beam_opacity,
            ],
            fog_color: [FOG_COLOR[0], FOG_COLOR[1], FOG_COLOR[2], AMBIENT_INTENSITY],
            params: [FOG_NEAR, FOG_FAR, SPARKLE_OPACITY, SPARKLE_SPEED],
        }
    }

    pub fn render(&mut self, frame: &SceneFrame, elapsed: f32) -> Result<(), wgpu::SurfaceError> {
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms(frame, elapsed)),
        );

        // Rebuild projector instances from this frame's director output.
        let group = projector_group_matrix(
            frame.projector.position,
            frame.projector.yaw,
            frame.hover_scale,
        );
        let parts = projector_parts(frame.reel_angle, frame.emissive);
        let dynamic = [
            InstanceRaw::from_part(group, &parts.chassis),
            InstanceRaw::from_part(group, &parts.lens),
            InstanceRaw::from_part(group, &parts.reels[0]),
            InstanceRaw::from_part(group, &parts.reels[1]),
            InstanceRaw::from_part(group, &parts.beam),
        ];
        self.queue
            .write_buffer(&self.dynamic_instances, 0, bytemuck::cast_slice(&dynamic));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rpass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: FOG_COLOR[0] as f64,
                        g: FOG_COLOR[1] as f64,
                        b: FOG_COLOR[2] as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        rpass.set_pipeline(&self.scene_pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);

        // Boxes: seats and screen frame, then the projector chassis.
        rpass.set_vertex_buffer(0, self.cube.vb.slice(..));
        rpass.set_index_buffer(self.cube.ib.slice(..), wgpu::IndexFormat::Uint32);
        rpass.set_vertex_buffer(1, self.static_boxes.slice(..));
        rpass.draw_indexed(0..self.cube.index_count, 0, 0..self.static_box_count);
        rpass.set_vertex_buffer(1, self.dynamic_instances.slice(CHASSIS_RANGE));
        rpass.draw_indexed(0..self.cube.index_count, 0, 0..1);

        // Planes: wall, surface, curtains, floor.
        rpass.set_vertex_buffer(0, self.plane.vb.slice(..));
        rpass.set_index_buffer(self.plane.ib.slice(..), wgpu::IndexFormat::Uint32);
        rpass.set_vertex_buffer(1, self.static_planes.slice(..));
        rpass.draw_indexed(0..self.plane.index_count, 0, 0..self.static_plane_count);

        // Projector lens and reels.
        rpass.set_vertex_buffer(0, self.lens.vb.slice(..));
        rpass.set_index_buffer(self.lens.ib.slice(..), wgpu::IndexFormat::Uint32);
        rpass.set_vertex_buffer(1, self.dynamic_instances.slice(LENS_RANGE));
        rpass.draw_indexed(0..self.lens.index_count, 0, 0..1);

        rpass.set_vertex_buffer(0, self.reel.vb.slice(..));
        rpass.set_index_buffer(self.reel.ib.slice(..), wgpu::IndexFormat::Uint32);
        rpass.set_vertex_buffer(1, self.dynamic_instances.slice(REEL_RANGE));
        rpass.draw_indexed(0..self.reel.index_count, 0, 0..2);

        // Light beam, skipped entirely while the projector is dark.
        if frame.beam_opacity > 0.0 {
            rpass.set_pipeline(&self.beam_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.beam.vb.slice(..));
            rpass.set_index_buffer(self.beam.ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_vertex_buffer(1, self.dynamic_instances.slice(BEAM_RANGE));
            rpass.draw_indexed(0..self.beam.index_count, 0, 0..1);
        }

        // Dust sparkles.
        rpass.set_pipeline(&self.sparkle_pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.sparkles.slice(..));
        rpass.draw(0..6, 0..self.sparkle_count);

        drop(rpass);
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

//! Desktop preview of the cinema scene.
//!
//! The mouse wheel stands in for the page scroll, the pointer picks the
//! projector the same way the web build does, and section changes land in
//! the log instead of a DOM caption.

use std::time::Instant;

use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use app_core::{
    beam_mesh, box_mesh, lens_mesh, plane_mesh, projector_group_matrix, projector_parts,
    ray_sphere, reel_mesh, slide_content, sparkle_field, static_scene, Camera, Instance, MeshData,
    ProjectorState, SceneDirector, SceneFrame, ScrollState, AMBIENT_INTENSITY, FOG_COLOR, FOG_FAR,
    FOG_NEAR, FX_WGSL, PROJECTOR_PICK_RADIUS, SCENE_WGSL, SPARKLE_COUNT, SPARKLE_OPACITY,
    SPARKLE_SPEED, SPOT_ANGLE_RAD, SPOT_COLOR,
};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;
const SPARKLE_SEED: u64 = 42;
const WHEEL_STEP: f32 = 0.05; // progress per wheel line

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    cam_pos: [f32; 4],
    spot_pos: [f32; 4],
    spot_dir: [f32; 4],
    spot_color: [f32; 4],
    fog_color: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
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
struct SparkleRaw {
    pos_size: [f32; 4],
    misc: [f32; 4],
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

const INSTANCE_STRIDE: u64 = std::mem::size_of::<InstanceRaw>() as u64;
const CHASSIS_RANGE: std::ops::Range<u64> = 0..INSTANCE_STRIDE;
const LENS_RANGE: std::ops::Range<u64> = INSTANCE_STRIDE..2 * INSTANCE_STRIDE;
const REEL_RANGE: std::ops::Range<u64> = 2 * INSTANCE_STRIDE..4 * INSTANCE_STRIDE;
const BEAM_RANGE: std::ops::Range<u64> = 4 * INSTANCE_STRIDE..5 * INSTANCE_STRIDE;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
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

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
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
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, config.width, config.height);

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
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let depth_write = |write: bool| {
            Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            })
        };

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
            depth_stencil: depth_write(true),
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
            depth_stencil: depth_write(false),
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
            depth_stencil: depth_write(false),
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

        let cube = upload_mesh(&device, "cube", &box_mesh(1.0, 1.0, 1.0));
        let plane = upload_mesh(&device, "plane", &plane_mesh(1.0, 1.0));
        let lens = upload_mesh(&device, "lens", &lens_mesh());
        let reel = upload_mesh(&device, "reel", &reel_mesh());
        let beam = upload_mesh(&device, "beam", &beam_mesh());

        let scene = static_scene();
        let box_raw: Vec<InstanceRaw> = scene.boxes.iter().map(InstanceRaw::from_instance).collect();
        let static_boxes = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("static_boxes"),
            contents: bytemuck::cast_slice(&box_raw),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let plane_raw: Vec<InstanceRaw> =
            scene.planes.iter().map(InstanceRaw::from_instance).collect();
        let static_planes = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("static_planes"),
            contents: bytemuck::cast_slice(&plane_raw),
            usage: wgpu::BufferUsages::VERTEX,
        });

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
            window,
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
            width: size.width.max(1),
            height: size.height.max(1),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.width, self.height);
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

    fn render(&mut self, frame: &SceneFrame, elapsed: f32) -> Result<(), wgpu::SurfaceError> {
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms(frame, elapsed)),
        );

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
        {
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

            rpass.set_vertex_buffer(0, self.cube.vb.slice(..));
            rpass.set_index_buffer(self.cube.ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_vertex_buffer(1, self.static_boxes.slice(..));
            rpass.draw_indexed(0..self.cube.index_count, 0, 0..self.static_box_count);
            rpass.set_vertex_buffer(1, self.dynamic_instances.slice(CHASSIS_RANGE));
            rpass.draw_indexed(0..self.cube.index_count, 0, 0..1);

            rpass.set_vertex_buffer(0, self.plane.vb.slice(..));
            rpass.set_index_buffer(self.plane.ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_vertex_buffer(1, self.static_planes.slice(..));
            rpass.draw_indexed(0..self.plane.index_count, 0, 0..self.static_plane_count);

            rpass.set_vertex_buffer(0, self.lens.vb.slice(..));
            rpass.set_index_buffer(self.lens.ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_vertex_buffer(1, self.dynamic_instances.slice(LENS_RANGE));
            rpass.draw_indexed(0..self.lens.index_count, 0, 0..1);

            rpass.set_vertex_buffer(0, self.reel.vb.slice(..));
            rpass.set_index_buffer(self.reel.ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_vertex_buffer(1, self.dynamic_instances.slice(REEL_RANGE));
            rpass.draw_indexed(0..self.reel.index_count, 0, 0..2);

            if frame.beam_opacity > 0.0 {
                rpass.set_pipeline(&self.beam_pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.beam.vb.slice(..));
                rpass.set_index_buffer(self.beam.ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.set_vertex_buffer(1, self.dynamic_instances.slice(BEAM_RANGE));
                rpass.draw_indexed(0..self.beam.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.sparkle_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sparkles.slice(..));
            rpass.draw(0..6, 0..self.sparkle_count);
        }
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

/// Pointer ray through the auditorium camera, mirroring the web picker.
fn cursor_ray(width: u32, height: u32, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let width = width.max(1) as f32;
    let height = height.max(1) as f32;
    let camera = Camera::auditorium(width / height);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    (camera.eye, (far - camera.eye).normalize())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("cinefolio (native preview)")
        .build(&event_loop)
        .expect("window");

    let mut gpu = pollster::block_on(GpuState::new(&window)).expect("gpu");

    let mut scroll = ScrollState::default();
    let mut projector = ProjectorState::default();
    let mut director = SceneDirector::authored();
    let mut pick_center = Vec3::ZERO;
    let mut wheel_progress = 0.0f32;
    let mut cursor_px = (0.0f32, 0.0f32);
    let mut last_section = usize::MAX;

    let start = Instant::now();
    let mut last_frame = start;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => gpu.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 40.0,
                };
                wheel_progress = (wheel_progress - lines * WHEEL_STEP).clamp(0.0, 1.0);
                scroll.set_target(wheel_progress);
            }
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                cursor_px = (position.x as f32, position.y as f32);
                let (ro, rd) = cursor_ray(gpu.width, gpu.height, cursor_px.0, cursor_px.1);
                let hit = ray_sphere(ro, rd, pick_center, PROJECTOR_PICK_RADIUS).is_some();
                projector.set_hovered(hit);
            }
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: ElementState::Released,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => {
                let (ro, rd) = cursor_ray(gpu.width, gpu.height, cursor_px.0, cursor_px.1);
                if ray_sphere(ro, rd, pick_center, PROJECTOR_PICK_RADIUS).is_some() {
                    projector.handle_click();
                    log::info!(
                        "projector now {}",
                        if projector.is_on() { "on" } else { "off" }
                    );
                }
            }
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = (now - last_frame).as_secs_f32();
                last_frame = now;
                let elapsed = start.elapsed().as_secs_f32();

                scroll.advance(dt);
                projector.advance_reels(dt);
                let frame = director.advance(scroll.offset(), &projector, elapsed, dt);
                pick_center = frame.projector.position;

                let section = scroll.current_section();
                if section != last_section {
                    last_section = section;
                    let slide = slide_content(section);
                    log::info!("[section {section}] {} / {}", slide.heading, slide.sub);
                }

                match gpu.render(&frame, elapsed) {
                    Ok(_) => gpu.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}

//! Procedural mesh builders for the cinema set.
//!
//! Indexed triangle lists with per-vertex position and normal; boxes carry
//! flat face normals, cylinder sides carry smooth slope normals so cones
//! shade correctly.

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Axis-aligned box centered at the origin. 24 vertices, 36 indices.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    // (normal, four corners CCW seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-hx, -hy, hz],
                [hx, -hy, hz],
                [hx, hy, hz],
                [-hx, hy, hz],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [hx, -hy, -hz],
                [-hx, -hy, -hz],
                [-hx, hy, -hz],
                [hx, hy, -hz],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [hx, -hy, hz],
                [hx, -hy, -hz],
                [hx, hy, -hz],
                [hx, hy, hz],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-hx, -hy, -hz],
                [-hx, -hy, hz],
                [-hx, hy, hz],
                [-hx, hy, -hz],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-hx, hy, hz],
                [hx, hy, hz],
                [hx, hy, -hz],
                [-hx, hy, -hz],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-hx, -hy, -hz],
                [hx, -hy, -hz],
                [hx, -hy, hz],
                [-hx, -hy, hz],
            ],
        ),
    ];

    let mut mesh = MeshData::default();
    for (normal, corners) in faces {
        let base = mesh.vertices.len() as u32;
        for position in corners {
            mesh.vertices.push(Vertex { position, normal });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Rectangle in the XY plane centered at the origin, normal +Z.
pub fn plane_mesh(width: f32, height: f32) -> MeshData {
    let (hx, hy) = (width * 0.5, height * 0.5);
    let normal = [0.0, 0.0, 1.0];
    MeshData {
        vertices: vec![
            Vertex {
                position: [-hx, -hy, 0.0],
                normal,
            },
            Vertex {
                position: [hx, -hy, 0.0],
                normal,
            },
            Vertex {
                position: [hx, hy, 0.0],
                normal,
            },
            Vertex {
                position: [-hx, hy, 0.0],
                normal,
            },
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Cylinder (or cone frustum) along the Y axis, centered at the origin.
///
/// Open-ended when `capped` is false, which the beam cone uses so the
/// camera can look straight up it without a lid.
pub fn cylinder_mesh(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: usize,
    capped: bool,
) -> MeshData {
    let segments = segments.max(3);
    let hy = height * 0.5;
    let slope = (radius_bottom - radius_top) / height.max(f32::EPSILON);

    let mut mesh = MeshData::default();

    // Side rings, with a duplicated seam vertex for clean normals.
    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let (sin, cos) = theta.sin_cos();
        let normal = glam::Vec3::new(cos, slope, sin).normalize().to_array();
        mesh.vertices.push(Vertex {
            position: [cos * radius_top, hy, sin * radius_top],
            normal,
        });
        mesh.vertices.push(Vertex {
            position: [cos * radius_bottom, -hy, sin * radius_bottom],
            normal,
        });
    }
    for i in 0..segments as u32 {
        let a = i * 2;
        let b = a + 1;
        let c = a + 2;
        let d = a + 3;
        mesh.indices.extend_from_slice(&[a, c, b, b, c, d]);
    }

    if capped {
        for (y, radius, normal_y) in [(hy, radius_top, 1.0f32), (-hy, radius_bottom, -1.0)] {
            if radius <= 0.0 {
                continue;
            }
            let normal = [0.0, normal_y, 0.0];
            let center = mesh.vertices.len() as u32;
            mesh.vertices.push(Vertex {
                position: [0.0, y, 0.0],
                normal,
            });
            for i in 0..=segments {
                let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
                let (sin, cos) = theta.sin_cos();
                mesh.vertices.push(Vertex {
                    position: [cos * radius, y, sin * radius],
                    normal,
                });
            }
            for i in 0..segments as u32 {
                let (first, second) = if normal_y > 0.0 {
                    (center + 1 + i, center + 2 + i)
                } else {
                    (center + 2 + i, center + 1 + i)
                };
                mesh.indices.extend_from_slice(&[center, second, first]);
            }
        }
    }

    mesh
}

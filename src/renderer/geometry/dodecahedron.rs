//! Flat-shaded regular dodecahedron mesh.
//!
//! Faces are found from the dual icosahedron: each icosahedron vertex
//! direction is the outward normal of one pentagonal face, and the five
//! dodecahedron vertices furthest along it are that face's corners. Every
//! face gets its own five vertices carrying the face normal, so the solid
//! shades flat with no smoothing across edges.

use glam::Vec3;

use super::MeshVertex;

/// Number of pentagonal faces.
pub const FACE_COUNT: usize = 12;
/// Vertices emitted (five per face, unshared).
pub const VERTEX_COUNT: usize = FACE_COUNT * 5;
/// Indices emitted (three triangles per face).
pub const INDEX_COUNT: usize = FACE_COUNT * 9;

/// Vertex and index data for a dodecahedron.
#[derive(Debug, Clone)]
pub struct DodecahedronMesh {
    /// Per-face vertices with flat normals.
    pub vertices: Vec<MeshVertex>,
    /// Counter-clockwise (outward-facing) triangle list.
    pub indices: Vec<u32>,
}

impl DodecahedronMesh {
    /// Build a dodecahedron centered on the origin with circumradius
    /// `radius`.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        let corners = corners(radius);
        let mut vertices = Vec::with_capacity(VERTEX_COUNT);
        let mut indices = Vec::with_capacity(INDEX_COUNT);

        for normal in face_normals() {
            let base = vertices.len() as u32;
            for position in face_ring(&corners, normal) {
                vertices.push(MeshVertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                });
            }
            // Fan around the first corner.
            for i in 1..4 {
                indices.extend_from_slice(&[base, base + i, base + i + 1]);
            }
        }

        Self { vertices, indices }
    }
}

fn golden_ratio() -> f32 {
    (1.0 + 5.0_f32.sqrt()) / 2.0
}

/// The 20 corners: (±1, ±1, ±1), (0, ±1/φ, ±φ), (±1/φ, ±φ, 0),
/// (±φ, 0, ±1/φ), scaled onto the circumsphere.
fn corners(radius: f32) -> Vec<Vec3> {
    let t = golden_ratio();
    let r = 1.0 / t;
    let signs = [-1.0_f32, 1.0];

    let mut out = Vec::with_capacity(20);
    for &x in &signs {
        for &y in &signs {
            for &z in &signs {
                out.push(Vec3::new(x, y, z));
            }
        }
    }
    for &a in &signs {
        for &b in &signs {
            out.push(Vec3::new(0.0, a * r, b * t));
            out.push(Vec3::new(a * r, b * t, 0.0));
            out.push(Vec3::new(a * t, 0.0, b * r));
        }
    }
    out.into_iter().map(|v| v.normalize() * radius).collect()
}

/// Outward face normals: the 12 vertex directions of the dual icosahedron,
/// (0, ±1, ±φ), (±1, ±φ, 0), (±φ, 0, ±1).
fn face_normals() -> Vec<Vec3> {
    let t = golden_ratio();
    let signs = [-1.0_f32, 1.0];
    let mut out = Vec::with_capacity(FACE_COUNT);
    for &a in &signs {
        for &b in &signs {
            out.push(Vec3::new(0.0, a, b * t).normalize());
            out.push(Vec3::new(a, b * t, 0.0).normalize());
            out.push(Vec3::new(a * t, 0.0, b).normalize());
        }
    }
    out
}

/// The five corners of the face with outward `normal`, ordered
/// counter-clockwise as seen from outside.
fn face_ring(corners: &[Vec3], normal: Vec3) -> Vec<Vec3> {
    let furthest = corners
        .iter()
        .map(|c| c.dot(normal))
        .fold(f32::NEG_INFINITY, f32::max);
    let tolerance = furthest.abs() * 1e-4;
    let mut ring: Vec<Vec3> = corners
        .iter()
        .copied()
        .filter(|c| c.dot(normal) >= furthest - tolerance)
        .collect();

    let center = ring.iter().copied().sum::<Vec3>() / ring.len() as f32;
    let u = (ring[0] - center).normalize();
    let w = normal.cross(u);
    ring.sort_by(|a, b| {
        let angle = |p: &Vec3| {
            let d = *p - center;
            d.dot(w).atan2(d.dot(u))
        };
        angle(a).total_cmp(&angle(b))
    });
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(mesh: &DodecahedronMesh, index: u32) -> Vec3 {
        Vec3::from(mesh.vertices[index as usize].position)
    }

    #[test]
    fn twelve_pentagons() {
        let mesh = DodecahedronMesh::new(2.0);
        assert_eq!(mesh.vertices.len(), VERTEX_COUNT);
        assert_eq!(mesh.indices.len(), INDEX_COUNT);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < VERTEX_COUNT));
    }

    #[test]
    fn every_face_has_exactly_five_corners() {
        let corners = corners(1.0);
        assert_eq!(corners.len(), 20);
        for normal in face_normals() {
            assert_eq!(face_ring(&corners, normal).len(), 5);
        }
    }

    #[test]
    fn vertices_lie_on_circumsphere() {
        let radius = 2.0;
        let mesh = DodecahedronMesh::new(radius);
        for v in &mesh.vertices {
            let len = Vec3::from(v.position).length();
            assert!((len - radius).abs() < 1e-5, "vertex at {len}");
        }
    }

    #[test]
    fn normals_are_unit_and_outward() {
        let mesh = DodecahedronMesh::new(1.5);
        for v in &mesh.vertices {
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.dot(Vec3::from(v.position)) > 0.0);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let mesh = DodecahedronMesh::new(1.0);
        for tri in mesh.indices.chunks_exact(3) {
            let (a, b, c) = (
                position(&mesh, tri[0]),
                position(&mesh, tri[1]),
                position(&mesh, tri[2]),
            );
            let geometric = (b - a).cross(c - a).normalize();
            let flat = Vec3::from(mesh.vertices[tri[0] as usize].normal);
            assert!(geometric.dot(flat) > 0.999);
        }
    }

    #[test]
    fn faces_are_regular_pentagons() {
        let mesh = DodecahedronMesh::new(1.0);
        let edge = position(&mesh, 0).distance(position(&mesh, 1));
        for face in 0..FACE_COUNT as u32 {
            for k in 0..5 {
                let a = position(&mesh, face * 5 + k);
                let b = position(&mesh, face * 5 + (k + 1) % 5);
                assert!((a.distance(b) - edge).abs() < 1e-4);
            }
        }
    }
}

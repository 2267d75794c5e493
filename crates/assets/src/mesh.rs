use cityscape_common::Vertex;

/// CPU-side indexed triangle list.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl StaticMesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

const GROUND: [f32; 3] = [0.0, 1.0, 0.0];
const WALL: [f32; 3] = [1.0, 1.0, 1.0];

/// Eight corners of an axis-aligned box standing on y = 0.
///
/// Bottom/top pairs walk the -Z face then the +Z face. The texture's v axis
/// runs top to bottom, so the top edge gets v = 0.
fn building(min: [f32; 2], max: [f32; 2], height: f32) -> [Vertex; 8] {
    let ([x0, z0], [x1, z1]) = (min, max);
    [
        Vertex::new([x0, 0.0, z0], WALL, [0.0, 1.0]),
        Vertex::new([x0, height, z0], WALL, [0.0, 0.0]),
        Vertex::new([x1, height, z0], WALL, [1.0, 0.0]),
        Vertex::new([x1, 0.0, z0], WALL, [1.0, 1.0]),
        Vertex::new([x0, 0.0, z1], WALL, [0.0, 1.0]),
        Vertex::new([x0, height, z1], WALL, [0.0, 0.0]),
        Vertex::new([x1, height, z1], WALL, [1.0, 0.0]),
        Vertex::new([x1, 0.0, z1], WALL, [1.0, 1.0]),
    ]
}

/// Six quads, two triangles each, over a `building` vertex block at `base`.
fn building_indices(base: u16) -> [u16; 36] {
    #[rustfmt::skip]
    let local: [u16; 36] = [
        0, 1, 2, 2, 3, 0, // -Z
        0, 1, 5, 5, 4, 0, // -X
        1, 2, 6, 6, 5, 1, // top
        2, 3, 7, 7, 6, 2, // +X
        3, 0, 4, 4, 7, 3, // bottom
        4, 5, 6, 6, 7, 4, // +Z
    ];
    local.map(|i| base + i)
}

/// Ground plane plus two textured buildings.
pub fn city_block() -> StaticMesh {
    // The ground has no texture coordinates of its own; it samples texel (0, 0)
    let mut vertices = vec![
        Vertex::new([-5.0, 0.0, -5.0], GROUND, [0.0, 0.0]),
        Vertex::new([5.0, 0.0, -5.0], GROUND, [0.0, 0.0]),
        Vertex::new([5.0, 0.0, 5.0], GROUND, [0.0, 0.0]),
        Vertex::new([-5.0, 0.0, 5.0], GROUND, [0.0, 0.0]),
    ];
    let mut indices = vec![0, 1, 2, 2, 3, 0];

    for (min, max, height) in [([-1.0, -1.0], [1.0, 1.0], 2.0), ([2.0, 2.0], [4.0, 4.0], 3.0)] {
        let base = vertices.len() as u16;
        vertices.extend(building(min, max, height));
        indices.extend(building_indices(base));
    }

    StaticMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_block_counts() {
        let mesh = city_block();
        assert_eq!(mesh.vertices.len(), 20);
        assert_eq!(mesh.index_count(), 78);
        assert_eq!(mesh.triangle_count(), 26);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn ground_plane_is_flat_and_green() {
        let mesh = city_block();
        for v in &mesh.vertices[..4] {
            assert_eq!(v.position[1], 0.0);
            assert_eq!(v.position[0].abs(), 5.0);
            assert_eq!(v.position[2].abs(), 5.0);
            assert_eq!(v.color, GROUND);
        }
    }

    #[test]
    fn building_heights() {
        let mesh = city_block();
        let top = |range: std::ops::Range<usize>| {
            mesh.vertices[range]
                .iter()
                .map(|v| v.position[1])
                .fold(f32::MIN, f32::max)
        };
        assert_eq!(top(4..12), 2.0);
        assert_eq!(top(12..20), 3.0);
    }

    #[test]
    fn second_building_indices_are_offset() {
        let mesh = city_block();
        let second = &mesh.indices[42..];
        assert_eq!(&second[..6], &[12, 13, 14, 14, 15, 12]);
        assert!(second.iter().all(|&i| (12..20).contains(&i)));
    }

    #[test]
    fn no_degenerate_triangles() {
        let mesh = city_block();
        for tri in mesh.indices.chunks(3) {
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
    }
}

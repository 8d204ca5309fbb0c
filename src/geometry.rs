//! Static geometry for the layered block logo.
//!
//! The emblem is two copies of the same "I" silhouette: a navy outer layer
//! and a slightly inset orange layer drawn over it. Both are hand-authored
//! triangle runs; every 3 consecutive vertices form one triangle and shared
//! corners are duplicated rather than indexed.

/// Floats per vertex position (x, y, z).
pub const POSITION_COMPONENTS: usize = 3;

/// Floats per vertex color (r, g, b, a).
pub const COLOR_COMPONENTS: usize = 4;

/// Navy fill of the outer layer.
pub const OUTER_RGBA: [f32; 4] = [19.0 / 256.0, 41.0 / 256.0, 74.0 / 256.0, 1.0];

/// Orange fill of the inset layer.
pub const INNER_RGBA: [f32; 4] = [234.0 / 256.0, 76.0 / 256.0, 39.0 / 256.0, 1.0];

/// Vertex positions for the whole emblem, 3 floats per vertex, z always 0.
///
/// The first half of the table is the outer layer, the second half the inset
/// layer; each layer is enumerated as top crossbar, stem, bottom crossbar.
pub const LOGO_POSITIONS: [f32; 234] = [
    // outer layer: top crossbar
    -0.55, 0.45, 0.0,
    -0.55, 0.85, 0.0,
    -0.35, 0.45, 0.0,
    -0.55, 0.85, 0.0,
    -0.35, 0.45, 0.0,
    0.0, 0.85, 0.0,
    -0.35, 0.45, 0.0,
    0.0, 0.85, 0.0,
    0.35, 0.45, 0.0,
    0.0, 0.85, 0.0,
    0.35, 0.45, 0.0,
    0.55, 0.85, 0.0,
    0.35, 0.45, 0.0,
    0.55, 0.85, 0.0,
    0.55, 0.45, 0.0,
    // outer layer: stem
    -0.35, 0.45, 0.0,
    0.35, 0.45, 0.0,
    -0.35, 0.0, 0.0,
    0.35, 0.45, 0.0,
    -0.35, 0.0, 0.0,
    0.35, -0.45, 0.0,
    -0.35, 0.0, 0.0,
    0.35, -0.45, 0.0,
    -0.35, -0.45, 0.0,
    // outer layer: bottom crossbar
    -0.55, -0.45, 0.0,
    -0.55, -0.85, 0.0,
    -0.35, -0.45, 0.0,
    -0.55, -0.85, 0.0,
    -0.35, -0.45, 0.0,
    0.0, -0.85, 0.0,
    -0.35, -0.45, 0.0,
    0.0, -0.85, 0.0,
    0.35, -0.45, 0.0,
    0.0, -0.85, 0.0,
    0.35, -0.45, 0.0,
    0.55, -0.85, 0.0,
    0.35, -0.45, 0.0,
    0.55, -0.85, 0.0,
    0.55, -0.45, 0.0,
    // inset layer: top crossbar
    -0.5, 0.5, 0.0,
    -0.5, 0.8, 0.0,
    -0.3, 0.5, 0.0,
    -0.5, 0.8, 0.0,
    -0.3, 0.5, 0.0,
    0.0, 0.8, 0.0,
    -0.3, 0.5, 0.0,
    0.0, 0.8, 0.0,
    0.3, 0.5, 0.0,
    0.0, 0.8, 0.0,
    0.3, 0.5, 0.0,
    0.5, 0.8, 0.0,
    0.3, 0.5, 0.0,
    0.5, 0.8, 0.0,
    0.5, 0.5, 0.0,
    // inset layer: stem
    -0.3, 0.5, 0.0,
    0.3, 0.5, 0.0,
    -0.3, 0.0, 0.0,
    0.3, 0.5, 0.0,
    -0.3, 0.0, 0.0,
    0.3, -0.5, 0.0,
    -0.3, 0.0, 0.0,
    0.3, -0.5, 0.0,
    -0.3, -0.5, 0.0,
    // inset layer: bottom crossbar
    -0.5, -0.5, 0.0,
    -0.5, -0.8, 0.0,
    -0.3, -0.5, 0.0,
    -0.5, -0.8, 0.0,
    -0.3, -0.5, 0.0,
    0.0, -0.8, 0.0,
    -0.3, -0.5, 0.0,
    0.0, -0.8, 0.0,
    0.3, -0.5, 0.0,
    0.0, -0.8, 0.0,
    0.3, -0.5, 0.0,
    0.5, -0.8, 0.0,
    0.3, -0.5, 0.0,
    0.5, -0.8, 0.0,
    0.5, -0.5, 0.0,
];

/// Number of vertices described by [`LOGO_POSITIONS`].
pub const fn vertex_count() -> usize {
    LOGO_POSITIONS.len() / POSITION_COMPONENTS
}

/// Builds the color sequence matching [`LOGO_POSITIONS`] vertex for vertex:
/// navy for the outer-layer half, orange for the inset half.
pub fn logo_colors() -> Vec<f32> {
    let n = vertex_count();
    let mut colors = Vec::with_capacity(n * COLOR_COMPONENTS);
    for i in 0..n {
        if i < n / 2 {
            colors.extend_from_slice(&OUTER_RGBA);
        } else {
            colors.extend_from_slice(&INNER_RGBA);
        }
    }
    colors
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const COLOR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x4];

/// Layout of the position buffer (attribute slot 0).
pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (POSITION_COMPONENTS * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRS,
    }
}

/// Layout of the color buffer (attribute slot 1).
pub fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: (COLOR_COMPONENTS * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_describe_the_same_vertices() {
        let colors = logo_colors();
        assert_eq!(LOGO_POSITIONS.len() % POSITION_COMPONENTS, 0);
        assert_eq!(colors.len() % COLOR_COMPONENTS, 0);
        assert_eq!(
            LOGO_POSITIONS.len() / POSITION_COMPONENTS,
            colors.len() / COLOR_COMPONENTS
        );
    }

    #[test]
    fn vertices_group_into_whole_triangles() {
        assert_eq!(vertex_count() % 3, 0);
    }

    #[test]
    fn layers_split_the_table_evenly() {
        assert_eq!(vertex_count() % 2, 0);
    }

    #[test]
    fn color_halves_are_uniform() {
        let colors = logo_colors();
        let n = vertex_count();
        for i in 0..n {
            let rgba = &colors[i * COLOR_COMPONENTS..(i + 1) * COLOR_COMPONENTS];
            let expected = if i < n / 2 { OUTER_RGBA } else { INNER_RGBA };
            assert_eq!(rgba, &expected[..], "vertex {i}");
        }
    }

    #[test]
    fn every_color_is_opaque() {
        for rgba in logo_colors().chunks_exact(COLOR_COMPONENTS) {
            assert_eq!(rgba[3], 1.0);
        }
    }

    #[test]
    fn emblem_is_flat() {
        for v in LOGO_POSITIONS.chunks_exact(POSITION_COMPONENTS) {
            assert_eq!(v[2], 0.0);
        }
    }

    #[test]
    fn positions_stay_inside_clip_space() {
        for v in LOGO_POSITIONS.chunks_exact(POSITION_COMPONENTS) {
            assert!(v[0].abs() <= 1.0, "x out of range: {}", v[0]);
            assert!(v[1].abs() <= 1.0, "y out of range: {}", v[1]);
        }
    }

    #[test]
    fn buffer_strides_match_component_counts() {
        assert_eq!(position_layout().array_stride, 12);
        assert_eq!(color_layout().array_stride, 16);
    }
}

use std::ops::Range;

use crate::coords::{OrthoBounds, Vec2, Viewport};
use crate::paint::Color;
use crate::scene::{ColoredPoint, DrawCmd, DrawList};

use super::common::Vertex;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Topology {
    Triangles,
    Lines,
}

/// A run of vertices drawn with one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Batch {
    pub topology: Topology,
    pub vertices: Range<u32>,
}

/// CPU-side geometry for one frame, reused across frames.
#[derive(Debug, Default)]
pub(crate) struct Tessellation {
    pub vertices: Vec<Vertex>,
    pub batches: Vec<Batch>,
}

impl Tessellation {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Rebuilds the geometry for `list`. `viewport` is the framebuffer size in
    /// physical pixels, used to size points.
    pub fn build(&mut self, list: &DrawList, viewport: Viewport) {
        self.clear();

        let projection = list.projection();
        for cmd in list.items() {
            let start = self.vertices.len();
            let topology = match cmd {
                DrawCmd::Points(c) => {
                    point_quads(&mut self.vertices, &c.points, c.size, projection, viewport);
                    Topology::Triangles
                }
                DrawCmd::Lines(c) => {
                    line_segments(&mut self.vertices, &c.points, c.closed);
                    Topology::Lines
                }
                DrawCmd::Polygon(c) => {
                    triangle_fan(&mut self.vertices, &c.vertices, c.color);
                    Topology::Triangles
                }
            };
            self.extend_batch(topology, start as u32..self.vertices.len() as u32);
        }
    }

    /// Appends `range`, merging with the previous batch when the topology
    /// matches so paint order is kept with the fewest draw calls.
    fn extend_batch(&mut self, topology: Topology, range: Range<u32>) {
        if range.is_empty() {
            return;
        }
        match self.batches.last_mut() {
            Some(last) if last.topology == topology && last.vertices.end == range.start => {
                last.vertices.end = range.end;
            }
            _ => self.batches.push(Batch { topology, vertices: range }),
        }
    }
}

#[inline]
fn vertex(pos: Vec2, color: Color) -> Vertex {
    Vertex { pos: [pos.x, pos.y], color: color.to_array() }
}

/// Each point becomes a screen-aligned square `size` pixels wide.
fn point_quads(
    out: &mut Vec<Vertex>,
    points: &[ColoredPoint],
    size: f32,
    projection: OrthoBounds,
    viewport: Viewport,
) {
    let half = projection.units_per_pixel(viewport) * (size * 0.5);

    for p in points {
        let min = p.pos - half;
        let max = p.pos + half;
        let corners = [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ];
        for i in [0, 1, 2, 0, 2, 3] {
            out.push(vertex(corners[i], p.color));
        }
    }
}

/// Consecutive pairs as a line list; `closed` adds the last-to-first segment.
fn line_segments(out: &mut Vec<Vertex>, points: &[ColoredPoint], closed: bool) {
    for pair in points.windows(2) {
        out.push(vertex(pair[0].pos, pair[0].color));
        out.push(vertex(pair[1].pos, pair[1].color));
    }

    // Two points already form the only segment of their loop.
    if closed && points.len() > 2 {
        if let (Some(last), Some(first)) = (points.last(), points.first()) {
            out.push(vertex(last.pos, last.color));
            out.push(vertex(first.pos, first.color));
        }
    }
}

/// Fan around the first vertex; valid for convex polygons.
fn triangle_fan(out: &mut Vec<Vertex>, vertices: &[Vec2], color: Color) {
    let Some((&apex, rest)) = vertices.split_first() else { return };
    for edge in rest.windows(2) {
        out.push(vertex(apex, color));
        out.push(vertex(edge[0], color));
        out.push(vertex(edge[1], color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(x: f32, y: f32) -> ColoredPoint {
        ColoredPoint::new(Vec2::new(x, y), Color::white())
    }

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(-0.5, 0.5),
        ]
    }

    // ── vertex counts ─────────────────────────────────────────────────────

    #[test]
    fn points_become_two_triangles_each() {
        let mut dl = DrawList::new();
        dl.push_points(vec![cp(0.0, 0.0), cp(0.5, 0.0), cp(0.0, 0.5)], 10.0);

        let mut t = Tessellation::default();
        t.build(&dl, Viewport::new(200.0, 200.0));
        assert_eq!(t.vertices.len(), 18);
        assert_eq!(t.batches, vec![Batch { topology: Topology::Triangles, vertices: 0..18 }]);
    }

    #[test]
    fn strip_and_loop_segment_counts() {
        let pts = vec![cp(0.0, 0.0), cp(1.0, 0.0), cp(1.0, 1.0), cp(0.0, 1.0)];

        let mut out = Vec::new();
        line_segments(&mut out, &pts, false);
        assert_eq!(out.len(), 6);

        out.clear();
        line_segments(&mut out, &pts, true);
        assert_eq!(out.len(), 8);
        assert_eq!(out[6].pos, [0.0, 1.0]);
        assert_eq!(out[7].pos, [0.0, 0.0]);
    }

    #[test]
    fn two_point_loop_is_a_single_segment() {
        let mut out = Vec::new();
        line_segments(&mut out, &[cp(0.0, 0.0), cp(1.0, 0.0)], true);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn polygon_fan_has_n_minus_two_triangles() {
        let mut out = Vec::new();
        triangle_fan(&mut out, &square(), Color::white());
        assert_eq!(out.len(), 6);

        out.clear();
        let circle: Vec<Vec2> =
            (0..36).map(|i| Vec2::from_polar(0.5, i as f32 * std::f32::consts::TAU / 36.0)).collect();
        triangle_fan(&mut out, &circle, Color::white());
        assert_eq!(out.len(), 3 * 34);
    }

    // ── sizing ────────────────────────────────────────────────────────────

    #[test]
    fn point_side_is_measured_in_pixels() {
        // 200 px over 2 units: 10 px is 0.1 units.
        let mut out = Vec::new();
        point_quads(&mut out, &[cp(0.0, 0.0)], 10.0, OrthoBounds::default(), Viewport::new(200.0, 200.0));

        let xs: Vec<f32> = out.iter().map(|v| v.pos[0]).collect();
        let min = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!((max - min - 0.1).abs() < 1e-6);
    }

    // ── batching ──────────────────────────────────────────────────────────

    #[test]
    fn same_topology_runs_merge_in_record_order() {
        let mut dl = DrawList::new();
        dl.push_polygon(square(), Color::rgb(1.0, 0.0, 0.0));
        dl.push_points(vec![cp(0.0, 0.0)], 4.0);
        dl.push_lines(vec![cp(0.0, 0.0), cp(1.0, 1.0)], false);
        dl.push_polygon(square(), Color::rgb(0.0, 1.0, 0.0));

        let mut t = Tessellation::default();
        t.build(&dl, Viewport::new(100.0, 100.0));

        let topologies: Vec<Topology> = t.batches.iter().map(|b| b.topology).collect();
        assert_eq!(topologies, vec![Topology::Triangles, Topology::Lines, Topology::Triangles]);
        assert_eq!(t.batches[0].vertices, 0..12);
        assert_eq!(t.batches[1].vertices, 12..14);
        assert_eq!(t.batches[2].vertices, 14..20);
    }

    #[test]
    fn rebuild_discards_previous_frame() {
        let mut dl = DrawList::new();
        dl.push_polygon(square(), Color::white());

        let mut t = Tessellation::default();
        t.build(&dl, Viewport::new(100.0, 100.0));
        dl.clear();
        t.build(&dl, Viewport::new(100.0, 100.0));
        assert!(t.is_empty());
        assert!(t.batches.is_empty());
    }
}

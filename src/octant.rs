use log::trace;

use crate::base::{slope, Point};
use crate::shadowcast::Settings;
use crate::shape::Shape;

//////////////////////////////////////////////////////////////////////////////

// Octant

/// One of the 8 reflections of the base octant. A local offset (dx, dy) with
/// 0 <= dy <= dx maps to (sign_x * dx, sign_y * dy), with the two components
/// exchanged when `swap` is set.
///
/// Each axis is shared by two octants and is scanned only by the one with
/// `sign_y > 0`. Each diagonal is shared by two octants and is scanned only
/// by the unswapped one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Octant {
    pub sign_x: i32,
    pub sign_y: i32,
    pub swap: bool,
}

impl Octant {
    // Named by compass wedge, with +y pointing south.
    pub const ESE: Octant = Octant::new(1, 1, false);
    pub const SSE: Octant = Octant::new(1, 1, true);
    pub const SSW: Octant = Octant::new(1, -1, true);
    pub const WSW: Octant = Octant::new(-1, 1, false);
    pub const WNW: Octant = Octant::new(-1, -1, false);
    pub const NNW: Octant = Octant::new(-1, -1, true);
    pub const NNE: Octant = Octant::new(-1, 1, true);
    pub const ENE: Octant = Octant::new(1, -1, false);

    /// The tiling in angular order, starting at +x and turning toward +y.
    /// Even octants start at an axis; odd octants start at a diagonal.
    pub const ALL: [Octant; 8] = [
        Octant::ESE, Octant::SSE, Octant::SSW, Octant::WSW,
        Octant::WNW, Octant::NNW, Octant::NNE, Octant::ENE,
    ];

    pub const fn new(sign_x: i32, sign_y: i32, swap: bool) -> Self {
        Self { sign_x, sign_y, swap }
    }

    #[inline(always)]
    pub fn apply_edge(self) -> bool {
        self.sign_y > 0
    }

    #[inline(always)]
    pub fn apply_diagonal(self) -> bool {
        !self.swap
    }

    #[inline(always)]
    pub fn transform(self, source: Point, dx: i32, dy: i32) -> Point {
        let (u, v) = (self.sign_x * dx, self.sign_y * dy);
        let offset = if self.swap { Point(v, u) } else { Point(u, v) };
        source + offset
    }

    fn column(self, shape: Shape, radius: i32, dx: i32, start: f64, end: f64) -> Option<Column> {
        let dx = dx.max(1);
        if dx > radius { return None; }

        let dy0 = (0.5 + dx as f64 * start) as i32;
        let mut dy1 = (0.5 + dx as f64 * end) as i32;
        if !self.apply_diagonal() && dy1 == dx { dy1 -= 1; }

        let h = shape.max_row(dx, radius);
        if dy1.abs() > h {
            if h == 0 { return None; }
            dy1 = h;
        }
        Some(Column { dx, dy: dy0, dy1, start, end, blocked: Blocked::Unknown })
    }

    /// Shadowcasts the wedge [start, end] of this octant, out to `radius`.
    ///
    /// Each paused column is a frame on an explicit stack. When a shadow
    /// begins, the wedge before it is pushed and scanned to completion before
    /// the rest of the column resumes. When a column ends clear, its frame
    /// is replaced by the next column. Callback order is that of the
    /// recursive formulation, while native stack use stays constant.
    pub(crate) fn scan<G: ?Sized, O, A>(
        self,
        settings: &mut Settings<O, A>,
        grid: &mut G,
        source: Point,
        radius: i32,
        start: f64,
        end: f64,
    ) where
        O: Fn(&G, Point) -> bool,
        A: FnMut(&mut G, Point, Point),
    {
        let shape = settings.shape;
        let mut stack: Vec<Column> = Vec::new();
        stack.extend(self.column(shape, radius, 1, start, end));

        while let Some(column) = stack.last_mut() {
            if column.dy > column.dy1 {
                let Column { dx, start, end, blocked, .. } = *column;
                stack.pop();
                if blocked == Blocked::No {
                    stack.extend(self.column(shape, radius, dx + 1, start, end));
                }
                continue;
            }

            let (dx, dy) = (column.dx, column.dy);
            column.dy += 1;
            let tile = self.transform(source, dx, dy);
            let owned = self.apply_edge() || dy > 0;

            if (settings.opaque)(&*grid, tile) {
                if settings.opaque_apply && owned { (settings.apply)(&mut *grid, tile, source); }
                let prev = std::mem::replace(&mut column.blocked, Blocked::Yes);
                if prev == Blocked::No {
                    let start = column.start;
                    let end = slope(dx as f64 + 0.5, dy as f64 - 0.5);
                    trace!("{:?}: shadow at ({}, {}), split [{}, {}]", self, dx, dy, start, end);
                    stack.extend(self.column(shape, radius, dx + 1, start, end));
                }
            } else {
                if owned { (settings.apply)(&mut *grid, tile, source); }
                if column.blocked == Blocked::Yes {
                    column.start = slope(dx as f64 - 0.5, dy as f64 - 0.5);
                }
                column.blocked = Blocked::No;
            }
        }
    }
}

//////////////////////////////////////////////////////////////////////////////

// Column

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Blocked { Unknown, Yes, No }

/// A partially-scanned column: rows dy..=dy1 remain.
#[derive(Clone, Copy, Debug)]
struct Column {
    dx: i32,
    dy: i32,
    dy1: i32,
    start: f64,
    end: f64,
    blocked: Blocked,
}

//////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Matrix;
    use std::collections::HashMap;

    struct Scene {
        walls: Matrix<bool>,
        seen: Vec<Point>,
    }

    impl Scene {
        fn new(walls: &[Point]) -> Self {
            let mut result = Self { walls: Matrix::new(Point(32, 32), false), seen: vec![] };
            walls.iter().for_each(|&x| result.walls.set(x + Point(16, 16), true));
            result
        }

        fn opaque(&self, p: Point) -> bool {
            self.walls.get(p + Point(16, 16))
        }

        fn apply(&mut self, p: Point, _: Point) {
            self.seen.push(p);
        }
    }

    type Opaque = fn(&Scene, Point) -> bool;
    type Apply = fn(&mut Scene, Point, Point);

    fn scan(octant: Octant, walls: &[Point], radius: i32, start: f64, end: f64) -> Vec<Point> {
        let mut scene = Scene::new(walls);
        let mut settings = Settings::new(Scene::opaque as Opaque, Scene::apply as Apply);
        octant.scan(&mut settings, &mut scene, Point(0, 0), radius, start, end);
        scene.seen
    }

    #[test]
    fn test_transform() {
        let source = Point(10, 20);
        let offsets: Vec<_> = Octant::ALL.iter().map(|x| x.transform(source, 3, 1) - source).collect();
        assert_eq!(offsets, vec![
            Point(3, 1), Point(1, 3), Point(-1, 3), Point(-3, 1),
            Point(-3, -1), Point(-1, -3), Point(1, -3), Point(3, -1),
        ]);
    }

    #[test]
    fn test_shared_rays_have_one_owner() {
        let mut owners: HashMap<Point, usize> = HashMap::new();
        for octant in Octant::ALL {
            if octant.apply_edge() { *owners.entry(octant.transform(Point(0, 0), 1, 0)).or_default() += 1; }
            if octant.apply_diagonal() { *owners.entry(octant.transform(Point(0, 0), 1, 1)).or_default() += 1; }
        }
        assert_eq!(owners.len(), 8);
        assert!(owners.values().all(|&x| x == 1));
    }

    #[test]
    fn test_open_octant() {
        let seen = scan(Octant::ESE, &[], 3, 0.0, 1.0);
        assert_eq!(seen, vec![
            Point(1, 0), Point(1, 1),
            Point(2, 0), Point(2, 1), Point(2, 2),
        ]);
    }

    #[test]
    fn test_swapped_octant_skips_edge_and_diagonal() {
        let seen = scan(Octant::SSW, &[], 3, 0.0, 1.0);
        assert_eq!(seen, vec![Point(-1, 2)]);
        let seen = scan(Octant::SSE, &[], 3, 0.0, 1.0);
        assert_eq!(seen, vec![Point(0, 1), Point(0, 2), Point(1, 2)]);
    }

    #[test]
    fn test_wall_casts_shadow() {
        let seen = scan(Octant::ESE, &[Point(1, 0)], 5, 0.0, 1.0);
        assert!(!seen.contains(&Point(1, 0)));
        assert!(seen.contains(&Point(1, 1)));
        for x in 2..=5 { assert!(!seen.contains(&Point(x, 0))); }
        assert!(!seen.contains(&Point(2, 1)));
        assert!(seen.contains(&Point(2, 2)));
    }

    #[test]
    fn test_split_explores_near_wedge_first() {
        // A wall at (2, 1) splits column 2: the wedge below it is finished
        // before the scan resumes with (2, 2).
        let seen = scan(Octant::ESE, &[Point(2, 1)], 4, 0.0, 1.0);
        let resume = seen.iter().position(|&x| x == Point(2, 2)).unwrap();
        let near = seen.iter().position(|&x| x == Point(3, 0)).unwrap();
        assert!(near < resume);
    }

    #[test]
    fn test_empty_wedge() {
        assert!(scan(Octant::ESE, &[], 0, 0.0, 1.0).is_empty());
        // The last column has no width (h == 0) but still holds its axis tile.
        let axis = vec![Point(1, 0), Point(2, 0), Point(3, 0), Point(4, 0)];
        assert_eq!(scan(Octant::ESE, &[], 4, 0.0, 0.0), axis);
    }

    #[test]
    fn test_empty_first_column_ends_the_wedge() {
        // Column 1 of [0.5, 1] holds only the diagonal, which a swapped
        // octant skips. With no rows scanned there is nothing to continue.
        assert!(scan(Octant::SSE, &[], 8, 0.5, 1.0).is_empty());
        assert!(scan(Octant::NNW, &[], 8, 0.6, 1.0).is_empty());
        // Below the half slope, column 1 keeps its axis row.
        assert!(!scan(Octant::SSE, &[], 8, 0.4, 1.0).is_empty());
        // The unswapped octant keeps the diagonal and carries on.
        assert!(scan(Octant::ESE, &[], 8, 0.5, 1.0).contains(&Point(5, 4)));
    }
}

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use log::debug;

use crate::base::{clamp01, Point, EPSILON};
use crate::config::Config;
use crate::direction::Direction;
use crate::octant::Octant;
use crate::shape::Shape;

//////////////////////////////////////////////////////////////////////////////

// Settings

/// Shadowcasting field-of-view over a caller-owned grid `G`.
///
/// The grid is only touched through the two callbacks:
///
///   - `opaque(grid, tile)` says whether `tile` blocks sight. It must be
///     deterministic for the duration of a call.
///   - `apply(grid, tile, source)` is invoked for each visible tile. It is
///     never invoked on `source` itself. It fires on opaque tiles only if
///     `opaque_apply` is set.
///
/// Within one octant, each tile is applied at most once, and shared axis
/// and diagonal rays are owned by a single octant. There is no ordering
/// across octants.
pub struct Settings<O, A> {
    pub shape: Shape,
    pub opaque: O,
    pub apply: A,
    pub opaque_apply: bool,
}

impl<O, A> Settings<O, A> {
    pub fn new(opaque: O, apply: A) -> Self {
        Self::with_config(&Config::default(), opaque, apply)
    }

    pub fn with_config(config: &Config, opaque: O, apply: A) -> Self {
        Self { shape: config.shape, opaque, apply, opaque_apply: config.opaque_apply }
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn opaque_apply(mut self, opaque_apply: bool) -> Self {
        self.opaque_apply = opaque_apply;
        self
    }

    /// Full field of view: all 8 octants.
    pub fn circle<G: ?Sized>(&mut self, grid: &mut G, source: Point, radius: u32)
    where
        O: Fn(&G, Point) -> bool,
        A: FnMut(&mut G, Point, Point),
    {
        debug!("circle: source={:?} radius={} shape={}", source, radius, self.shape);
        let radius = to_signed(radius);
        for octant in Octant::ALL {
            octant.scan(self, grid, source, radius, 0.0, 1.0);
        }
    }

    /// A beam centered on `direction`. The beam covers `angle * 2 / π`
    /// octant-widths on each side of its center line, so an `angle` of π
    /// sees the half-plane. Angles of 2π or more see the full circle.
    pub fn beam<G: ?Sized>(
        &mut self,
        grid: &mut G,
        source: Point,
        radius: u32,
        direction: Direction,
        angle: f64,
    ) where
        O: Fn(&G, Point) -> bool,
        A: FnMut(&mut G, Point, Point),
    {
        if angle <= EPSILON { return; }
        if angle >= TAU { return self.circle(grid, source, radius); }
        debug!("beam: source={:?} radius={} {} angle={}", source, radius, direction, angle);

        let radius = to_signed(radius);
        let a = angle / FRAC_PI_2;
        let [p1, p2, p3, p4, p5, p6, p7, p8] = direction.beam_octants();

        // Each band is (octants, start, end). Bands alternate between
        // growing away from the leading ray and growing back toward it.
        let bands = if direction.is_diagonal() {
            [
                ([p1, p2], clamp01(1.0 - a), 1.0),
                ([p3, p4], 0.0, clamp01(a - 1.0)),
                ([p5, p6], clamp01(3.0 - a), 1.0),
                ([p7, p8], 0.0, clamp01(a - 3.0)),
            ]
        } else {
            [
                ([p1, p2], 0.0, clamp01(a)),
                ([p3, p4], clamp01(2.0 - a), 1.0),
                ([p5, p6], 0.0, clamp01(a - 2.0)),
                ([p7, p8], clamp01(4.0 - a), 1.0),
            ]
        };
        for (i, (octants, start, end)) in bands.into_iter().enumerate() {
            if i > 0 && a - i as f64 <= EPSILON { break; }
            for octant in octants {
                octant.scan(self, grid, source, radius, start, end);
            }
        }
    }

    /// A beam of total width `spread` centered on `angle`. Both are in
    /// radians, measured from +x toward +y (see `Direction::angle`).
    ///
    /// A spread that wraps back into its starting octant scans that octant
    /// twice, once per disjoint piece. Rows are rounded to whole tiles, so a
    /// tile near the gap between the pieces may be applied by both passes.
    pub fn beam2<G: ?Sized>(&mut self, grid: &mut G, source: Point, radius: u32, angle: f64, spread: f64)
    where
        O: Fn(&G, Point) -> bool,
        A: FnMut(&mut G, Point, Point),
    {
        if spread <= EPSILON { return; }
        if spread >= TAU { return self.circle(grid, source, radius); }
        debug!("beam2: source={:?} radius={} angle={} spread={}", source, radius, angle, spread);

        let radius = to_signed(radius);
        let lo = snap(((angle - spread / 2.0) / FRAC_PI_4).rem_euclid(8.0)) % 8.0;
        let hi = snap(lo + spread / FRAC_PI_4);

        let mut k = lo.floor();
        while k < hi {
            let (left, right) = ((lo - k).max(0.0), (hi - k).min(1.0));
            let index = (k as usize) % 8;
            let octant = Octant::ALL[index];
            if index % 2 == 0 {
                octant.scan(self, grid, source, radius, left, right);
            } else {
                octant.scan(self, grid, source, radius, 1.0 - right, 1.0 - left);
            }
            k += 1.0;
        }
    }

    /// Shadowcasts a single octant over the slope interval [start, end].
    pub fn octant<G: ?Sized>(
        &mut self,
        grid: &mut G,
        source: Point,
        radius: u32,
        octant: Octant,
        start: f64,
        end: f64,
    ) where
        O: Fn(&G, Point) -> bool,
        A: FnMut(&mut G, Point, Point),
    {
        let (start, end) = (clamp01(start), clamp01(end));
        if start > end { return; }
        octant.scan(self, grid, source, to_signed(radius), start, end);
    }
}

//////////////////////////////////////////////////////////////////////////////

// Helpers

#[inline(always)]
fn to_signed(radius: u32) -> i32 {
    radius.min(i32::MAX as u32) as i32
}

// Fractional octant positions within EPSILON of an octant boundary are
// exactly on it.
#[inline(always)]
fn snap(x: f64) -> f64 {
    let rounded = x.round();
    if (x - rounded).abs() < EPSILON { rounded } else { x }
}

//////////////////////////////////////////////////////////////////////////////

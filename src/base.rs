use std::ops::{Add, Sub};

//////////////////////////////////////////////////////////////////////////////

// Slopes

/// Tolerance for every comparison against zero in slope arithmetic.
pub const EPSILON: f64 = 1e-8;

/// The slope dy / dx, or 0.0 when dx is (nearly) zero.
#[inline(always)]
pub fn slope(dx: f64, dy: f64) -> f64 {
    if dx.abs() > EPSILON { dy / dx } else { 0.0 }
}

/// Snaps x into [0, 1]. Values within EPSILON of a bound become that bound.
#[inline(always)]
pub fn clamp01(x: f64) -> f64 {
    if x < EPSILON { return 0.0; }
    if 1.0 - x < EPSILON { return 1.0; }
    x
}

//////////////////////////////////////////////////////////////////////////////

// Point

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point(pub i32, pub i32);

impl Point {
    pub fn len_l1(&self) -> i32 {
        self.0.abs().max(self.1.abs())
    }

    pub fn len_l2_squared(&self) -> i64 {
        let (x, y) = (self.0 as i64, self.1 as i64);
        x * x + y * y
    }

    /// Angle of this offset in radians, in [0, 2π), measured from +x toward +y.
    pub fn angle(&self) -> f64 {
        let radians = (self.1 as f64).atan2(self.0 as f64);
        radians.rem_euclid(std::f64::consts::TAU)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point(self.0 - other.0, self.1 - other.1)
    }
}

//////////////////////////////////////////////////////////////////////////////

// Matrix

/// A dense grid. Reads outside the grid return `default`; writes are dropped.
#[derive(Clone, Default)]
pub struct Matrix<T> {
    pub data: Vec<T>,
    pub size: Point,
    pub default: T,
}

// SAFETY: Non-none index() results are always valid indices into data.
impl<T: Clone> Matrix<T> {
    pub fn new(size: Point, value: T) -> Self {
        assert!(0 <= size.0);
        assert!(0 <= size.1);
        let mut data = Vec::new();
        data.resize((size.0 * size.1) as usize, value.clone());
        Self { data, size, default: value }
    }

    pub fn get(&self, point: Point) -> T {
        let Some(x) = self.index(point) else { return self.default.clone(); };
        unsafe { self.data.get_unchecked(x).clone() }
    }

    pub fn set(&mut self, point: Point, value: T) {
        let Some(x) = self.index(point) else { return; };
        unsafe { *self.data.get_unchecked_mut(x) = value; }
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    #[inline(always)]
    pub fn contains(&self, point: Point) -> bool {
        let Point(px, py) = point;
        let Point(sx, sy) = self.size;
        0 <= px && px < sx && 0 <= py && py < sy
    }

    #[inline(always)]
    pub fn index(&self, point: Point) -> Option<usize> {
        if !self.contains(point) { return None; }
        Some((point.0 + point.1 * self.size.0) as usize)
    }
}

//////////////////////////////////////////////////////////////////////////////

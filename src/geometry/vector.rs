//! `Vector<N>`: a point or displacement in N-dimensional affine space.
//!
//! The ambient dimension is a const generic, so vectors are plain
//! `[f64; N]` arrays with value semantics and no heap allocation.

use num_traits::Zero;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// Tolerance used when testing basis vectors for linear dependence.
pub const EPSILON: f64 = 1e-14;

/// Fixed-size vector of `N` coordinates.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>(pub [f64; N]);

impl<const N: usize> Vector<N> {
    /// Creates a vector from its coordinates.
    #[inline]
    pub const fn new(coords: [f64; N]) -> Self {
        Self(coords)
    }

    /// Creates a vector with every coordinate equal to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self([value; N])
    }

    /// Unit vector along `axis`.
    #[inline]
    pub fn unit(axis: usize) -> Self {
        let mut v = Self::zero();
        v.0[axis] = 1.0;
        v
    }

    /// Coordinates as an array.
    #[inline]
    pub const fn coords(&self) -> &[f64; N] {
        &self.0
    }

    /// Iterator over the coordinates.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.0.iter().zip(rhs.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn len2(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn len(&self) -> f64 {
        self.len2().sqrt()
    }

    /// Rotates by `angle` (radians) in the plane of axes `i` and `j`, about
    /// the origin.
    pub fn rot(&self, i: usize, j: usize, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut out = *self;
        out.0[i] = cos * self.0[i] - sin * self.0[j];
        out.0[j] = sin * self.0[i] + cos * self.0[j];
        out
    }

    /// Rotates in the `(i, j)` plane about `center`.
    pub fn rot_about(&self, center: &Self, i: usize, j: usize, angle: f64) -> Self {
        (*self - *center).rot(i, j, angle) + *center
    }

    /// Translates by `offset`.
    #[inline]
    pub fn mov(&self, offset: &Self) -> Self {
        *self + *offset
    }

    /// Mirror image through the hyperplane with the given `center` and
    /// `normal`. The normal need not be unit length.
    pub fn reflect(&self, center: &Self, normal: &Self) -> Self {
        let n2 = normal.len2();
        *self - *normal * (2.0 * (*self - *center).dot(normal) / n2)
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> Zero for Vector<N> {
    fn zero() -> Self {
        Self([0.0; N])
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|x| *x == 0.0)
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(coords: [f64; N]) -> Self {
        Self(coords)
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.0).finish()
    }
}

/// Tab-separated coordinates.
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "\t")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0.map(|x| x * rhs))
    }
}

impl<const N: usize> Mul<Vector<N>> for f64 {
    type Output = Vector<N>;
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}

impl<const N: usize> Div<f64> for Vector<N> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.0.map(|x| x / rhs))
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(self.0.map(|x| -x))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close<const N: usize>(a: Vector<N>, b: Vector<N>) -> bool {
        (a - b).len() < 1e-12
    }

    #[test]
    fn arithmetic() {
        let v1 = Vector::new([1.0, 2.0, 3.0]);
        let v2 = Vector::new([2.0, 4.0, 6.0]);
        assert_eq!(2.0 * v1, v2);
        assert_eq!(v1 * 2.0, v2);
        assert_eq!(v2 / 2.0, v1);
        assert_eq!(v1 + v2, Vector::new([3.0, 6.0, 9.0]));
        assert_eq!(v2 - v1, v1);
        assert_eq!(-v1, Vector::new([-1.0, -2.0, -3.0]));
        assert_eq!(v1.dot(&v2), 28.0);
        assert_eq!(v1.len2(), 14.0);
    }

    #[test]
    fn zero_and_unit() {
        assert!(Vector::<4>::zero().is_zero());
        assert_eq!(Vector::<3>::unit(1), Vector::new([0.0, 1.0, 0.0]));
        assert_eq!(Vector::<2>::splat(4.0), Vector::new([4.0, 4.0]));
    }

    #[test]
    fn rotation_in_plane() {
        let v = Vector::new([1.0, 0.0, 5.0]);
        assert!(close(v.rot(0, 1, FRAC_PI_2), Vector::new([0.0, 1.0, 5.0])));
        let c = Vector::new([1.0, 1.0, 0.0]);
        let w = Vector::new([2.0, 1.0, 0.0]);
        assert!(close(w.rot_about(&c, 0, 1, FRAC_PI_2), Vector::new([1.0, 2.0, 0.0])));
    }

    #[test]
    fn reflection_through_plane() {
        let v = Vector::new([1.0, 2.0, 3.0]);
        let c = Vector::new([0.0, 0.0, 1.0]);
        let n = Vector::new([0.0, 0.0, 2.0]);
        assert!(close(v.reflect(&c, &n), Vector::new([1.0, 2.0, -1.0])));
    }

    #[test]
    fn display_is_tab_separated() {
        assert_eq!(Vector::new([1.0, -0.5]).to_string(), "1\t-0.5");
    }
}

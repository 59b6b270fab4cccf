use crate::maths::errors::{Result, VectorError};
use derive_more::IntoIterator;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A fixed-size vector of `SIZE` `f32` components
///
/// `SIZE` must be non-zero, a zero-sized vector fails to compile as soon as it is constructed.
///
/// ```compile_fail
/// use vector_maths::Vector;
///
/// let v = Vector::<0>::zero();
/// ```
///
/// The number of components is part of the type:
///
/// ```compile_fail
/// use vector_maths::Vector;
///
/// let v: Vector<2> = Vector::new([1.0, 2.0, 3.0]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, IntoIterator)]
#[into_iterator(owned, ref, ref_mut)]
pub struct Vector<const SIZE: usize>([f32; SIZE]);

impl<const SIZE: usize> Vector<SIZE>
{
    const NON_ZERO: () = assert!(SIZE > 0, "Vector dimension cannot be zero");

    /// Number of components
    pub const DIMENSION: usize = SIZE;

    /// Creates a vector from its components in index order
    pub const fn new(values: [f32; SIZE]) -> Self
    {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        Vector(values)
    }

    /// The vector with every component set to 0
    pub const fn zero() -> Self { Self::new([0.0; SIZE]) }

    /// The vector with every component set to `value`
    pub const fn filled(value: f32) -> Self { Self::new([value; SIZE]) }

    /// Number of components, same as [`Vector::DIMENSION`]
    pub const fn dimension(&self) -> usize { SIZE }

    /// The components as an array
    pub const fn as_array(&self) -> &[f32; SIZE] { &self.0 }

    /// The components as a slice
    pub fn as_slice(&self) -> &[f32] { &self.0 }

    /// The components as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [f32] { &mut self.0 }

    /// Iterates over the components in index order
    pub fn iter(&self) -> std::slice::Iter<'_, f32> { self.0.iter() }

    /// Iterates mutably over the components in index order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, f32> { self.0.iter_mut() }

    /// Bounds checked read of the component at `index`
    pub fn component(&self, index: usize) -> Result<f32>
    {
        self.0.get(index).copied().ok_or(VectorError::IndexOutOfRange { index, dimension: SIZE })
    }

    /// Bounds checked mutable access to the component at `index`
    pub fn component_mut(&mut self, index: usize) -> Result<&mut f32>
    {
        self.0.get_mut(index).ok_or(VectorError::IndexOutOfRange { index, dimension: SIZE })
    }

    /// Sum of the squared components
    pub fn sqr_magnitude(&self) -> f32 { self.0.iter().fold(0.0, |mag, &c| mag + c * c) }

    /// Euclidean length
    pub fn magnitude(&self) -> f32 { self.sqr_magnitude().sqrt() }

    /// Unit length vector pointing the same way
    ///
    /// A vector with a magnitude of exactly 0 normalizes to [`Vector::zero`] instead of NaN.
    pub fn normalized(&self) -> Self
    {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            tracing::trace!(dimension = SIZE, "normalizing zero length vector");
            return Self::zero();
        }
        let inverse = 1.0 / magnitude;
        *self * inverse
    }

    /// Sum of the pairwise products of the components
    pub fn dot(&self, other: &Self) -> f32
    {
        self.0.iter().zip(other.0.iter()).fold(0.0, |product, (&a, &b)| product + a * b)
    }

    /// Dot product of the normalized vectors, without normalizing either of them
    ///
    /// NaN or infinite when either vector has zero length.
    pub fn un_normal_dot(&self, other: &Self) -> f32
    {
        self.dot(other) / (self.sqr_magnitude() * other.sqr_magnitude()).sqrt()
    }

    /// Squared Euclidean distance to `other`
    pub fn sqr_distance(&self, other: &Self) -> f32 { (*self - *other).sqr_magnitude() }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Self) -> f32 { (*self - *other).magnitude() }

    /// Writes the vector to stdout as `(v0, v1, ...)` followed by a newline
    pub fn print(&self) { println!("{self}") }

    fn operate(&self, other: &Self, operation: impl Fn(f32, f32) -> f32) -> Self
    {
        Vector(std::array::from_fn(|i| operation(self.0[i], other.0[i])))
    }

    fn operate_scalar(&self, scalar: f32, operation: impl Fn(f32, f32) -> f32) -> Self
    {
        Vector(self.0.map(|c| operation(c, scalar)))
    }
}

impl<const SIZE: usize> Default for Vector<SIZE>
{
    fn default() -> Self { Self::zero() }
}

impl<const SIZE: usize> From<[f32; SIZE]> for Vector<SIZE>
{
    fn from(values: [f32; SIZE]) -> Self { Self::new(values) }
}

impl<const SIZE: usize> From<Vector<SIZE>> for [f32; SIZE]
{
    fn from(vector: Vector<SIZE>) -> Self { vector.0 }
}

impl<const SIZE: usize> TryFrom<&[f32]> for Vector<SIZE>
{
    type Error = VectorError;

    fn try_from(values: &[f32]) -> Result<Self>
    {
        let array = <[f32; SIZE]>::try_from(values).map_err(|_| VectorError::DimensionMismatch {
            expected: SIZE,
            actual:   values.len(),
        })?;
        Ok(Self::new(array))
    }
}

impl<const SIZE: usize> Index<usize> for Vector<SIZE>
{
    type Output = f32;

    fn index(&self, index: usize) -> &f32
    {
        match self.0.get(index) {
            Some(component) => component,
            None => panic!("{}", VectorError::IndexOutOfRange { index, dimension: SIZE }),
        }
    }
}

impl<const SIZE: usize> IndexMut<usize> for Vector<SIZE>
{
    fn index_mut(&mut self, index: usize) -> &mut f32
    {
        match self.0.get_mut(index) {
            Some(component) => component,
            None => panic!("{}", VectorError::IndexOutOfRange { index, dimension: SIZE }),
        }
    }
}

impl<const SIZE: usize> Add for Vector<SIZE>
{
    type Output = Self;
    fn add(self, other: Self) -> Self { self.operate(&other, |a, b| a + b) }
}

impl<const SIZE: usize> Sub for Vector<SIZE>
{
    type Output = Self;
    fn sub(self, other: Self) -> Self { self.operate(&other, |a, b| a - b) }
}

impl<const SIZE: usize> Mul<f32> for Vector<SIZE>
{
    type Output = Self;
    fn mul(self, scalar: f32) -> Self { self.operate_scalar(scalar, |c, s| c * s) }
}

impl<const SIZE: usize> Mul<Vector<SIZE>> for f32
{
    type Output = Vector<SIZE>;
    fn mul(self, vector: Vector<SIZE>) -> Vector<SIZE> { vector * self }
}

// Division by zero is left to IEEE-754, unlike normalized()
impl<const SIZE: usize> Div<f32> for Vector<SIZE>
{
    type Output = Self;
    fn div(self, scalar: f32) -> Self { self.operate_scalar(scalar, |c, s| c / s) }
}

impl<const SIZE: usize> Neg for Vector<SIZE>
{
    type Output = Self;
    fn neg(self) -> Self { Vector(self.0.map(|c| -c)) }
}

impl<const SIZE: usize> AddAssign for Vector<SIZE>
{
    fn add_assign(&mut self, other: Self) { *self = *self + other; }
}

impl<const SIZE: usize> SubAssign for Vector<SIZE>
{
    fn sub_assign(&mut self, other: Self) { *self = *self - other; }
}

impl<const SIZE: usize> MulAssign<f32> for Vector<SIZE>
{
    fn mul_assign(&mut self, scalar: f32) { *self = *self * scalar; }
}

impl<const SIZE: usize> DivAssign<f32> for Vector<SIZE>
{
    fn div_assign(&mut self, scalar: f32) { *self = *self / scalar; }
}

impl<const SIZE: usize> fmt::Display for Vector<SIZE>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "(")?;
        for (i, component) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        write!(f, ")")
    }
}

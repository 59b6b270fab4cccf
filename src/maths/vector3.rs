//! Three dimensional specialization and the cross product

use crate::maths::vector::Vector;

/// Three dimensional vector with `x`/`y`/`z` accessors and the cross product
pub type Vector3 = Vector<3>;

impl Vector<3>
{
    /// Unit vector along the x axis
    pub const X_AXIS: Self = Self::from_xyz(1.0, 0.0, 0.0);
    /// Unit vector along the y axis
    pub const Y_AXIS: Self = Self::from_xyz(0.0, 1.0, 0.0);
    /// Unit vector along the z axis
    pub const Z_AXIS: Self = Self::from_xyz(0.0, 0.0, 1.0);

    /// Creates a vector from its x, y and z components
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self { Self::new([x, y, z]) }

    /// Component at index 0
    pub fn x(&self) -> f32 { self[0] }

    /// Component at index 1
    pub fn y(&self) -> f32 { self[1] }

    /// Component at index 2
    pub fn z(&self) -> f32 { self[2] }

    /// Mutable reference to the x component
    pub fn x_mut(&mut self) -> &mut f32 { &mut self[0] }

    /// Mutable reference to the y component
    pub fn y_mut(&mut self) -> &mut f32 { &mut self[1] }

    /// Mutable reference to the z component
    pub fn z_mut(&mut self) -> &mut f32 { &mut self[2] }

    /// Overwrites the x component
    pub fn set_x(&mut self, x: f32) { self[0] = x; }

    /// Overwrites the y component
    pub fn set_y(&mut self, y: f32) { self[1] = y; }

    /// Overwrites the z component
    pub fn set_z(&mut self, z: f32) { self[2] = z; }

    /// Right-handed cross product, zero when the vectors are parallel
    pub fn cross(&self, other: &Self) -> Self
    {
        Self::new(std::array::from_fn(|i| {
            self[(i + 1) % 3] * other[(i + 2) % 3] - self[(i + 2) % 3] * other[(i + 1) % 3]
        }))
    }
}

impl From<(f32, f32, f32)> for Vector3
{
    fn from((x, y, z): (f32, f32, f32)) -> Self { Self::from_xyz(x, y, z) }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn named_and_indexed_access_share_storage()
    {
        let mut v = Vector3::from_xyz(1.0, 2.0, 3.0);
        assert_eq!((v.x(), v.y(), v.z()), (v[0], v[1], v[2]));

        *v.z_mut() = 9.0;
        assert_eq!(v[2], 9.0);
        v[0] = 4.0;
        assert_eq!(v.x(), 4.0);
        v.set_y(-1.0);
        *v.y_mut() *= 2.0;
        assert_eq!(v, Vector3::from_xyz(4.0, -2.0, 9.0));
    }

    #[test]
    fn cross_of_basis_vectors()
    {
        assert_eq!(Vector3::X_AXIS.cross(&Vector3::Y_AXIS), Vector3::Z_AXIS);
        assert_eq!(Vector3::Y_AXIS.cross(&Vector3::Z_AXIS), Vector3::X_AXIS);
        assert_eq!(Vector3::Z_AXIS.cross(&Vector3::X_AXIS), Vector3::Y_AXIS);
        assert_eq!(Vector3::Y_AXIS.cross(&Vector3::X_AXIS), -Vector3::Z_AXIS);
    }

    #[test]
    fn cross_is_perpendicular_to_both()
    {
        let a = Vector3::from_xyz(1.0, 2.0, 3.0);
        let b = Vector3::from_xyz(-2.0, 0.5, 4.0);
        let c = a.cross(&b);
        assert_eq!(c, Vector3::from_xyz(6.5, -10.0, 4.5));
        assert_eq!(c.dot(&a), 0.0);
        assert_eq!(c.dot(&b), 0.0);
    }

    #[test]
    fn cross_of_parallel_is_zero()
    {
        let a = Vector3::from_xyz(1.0, -2.0, 0.5);
        assert_eq!(a.cross(&(a * 2.0)), Vector3::zero());
        assert_eq!(a.cross(&Vector3::zero()), Vector3::zero());
    }
}

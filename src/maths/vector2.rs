//! Two dimensional specialization

use crate::maths::vector::Vector;

/// Two dimensional vector with `x`/`y` accessors
pub type Vector2 = Vector<2>;

impl Vector<2>
{
    /// Unit vector along the x axis
    pub const X_AXIS: Self = Self::from_xy(1.0, 0.0);
    /// Unit vector along the y axis
    pub const Y_AXIS: Self = Self::from_xy(0.0, 1.0);

    /// Creates a vector from its x and y components
    pub const fn from_xy(x: f32, y: f32) -> Self { Self::new([x, y]) }

    /// Component at index 0
    pub fn x(&self) -> f32 { self[0] }

    /// Component at index 1
    pub fn y(&self) -> f32 { self[1] }

    /// Mutable reference to the x component
    pub fn x_mut(&mut self) -> &mut f32 { &mut self[0] }

    /// Mutable reference to the y component
    pub fn y_mut(&mut self) -> &mut f32 { &mut self[1] }

    /// Overwrites the x component
    pub fn set_x(&mut self, x: f32) { self[0] = x; }

    /// Overwrites the y component
    pub fn set_y(&mut self, y: f32) { self[1] = y; }

    /// The vector rotated a quarter turn counter-clockwise
    pub fn perpendicular(&self) -> Self { Self::from_xy(-self.y(), self.x()) }
}

impl From<(f32, f32)> for Vector2
{
    fn from((x, y): (f32, f32)) -> Self { Self::from_xy(x, y) }
}

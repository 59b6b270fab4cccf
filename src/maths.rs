//! Vector types and their errors

/// Error type shared by the checked operations
pub mod errors;
/// Generic `Vector<SIZE>`
pub mod vector;
pub mod vector2;
pub mod vector3;

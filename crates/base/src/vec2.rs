use std::{fmt, ops::Mul};

/// Two-component vector. Image sizes use `x` for width and `y` for height.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl<T: Default> Default for Vec2<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Mul<Output = T> + Copy> Vec2<T> {
    /// `x * y`, the pixel count of a size.
    pub fn area(self) -> T {
        self.x * self.y
    }
}

impl Vec2<usize> {
    /// Size of a 4:2:0 chroma plane for a luma plane of this size.
    pub fn half_rounded_up(self) -> Self {
        Self {
            x: self.x.div_ceil(2),
            y: self.y.div_ceil(2),
        }
    }
}

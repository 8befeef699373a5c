use crate::geometry::alias::Vector;
use cgmath::Zero;
use strum_macros::{EnumCount, EnumIter};

#[derive(EnumCount, EnumIter, Copy, Clone, Default, Debug, PartialEq)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn unit(self) -> Vector {
        let mut result = Vector::zero();
        result[self.as_index()] = 1.0;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Axis::X.unit(), Vector::new(1.0, 0.0, 0.0));
        assert_eq!(Axis::Y.unit(), Vector::new(0.0, 1.0, 0.0));
        assert_eq!(Axis::Z.unit(), Vector::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_iteration_order() {
        let indices: Vec<usize> = Axis::iter().map(|axis| axis.as_index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(Axis::COUNT, 3);
    }
}

use std::fmt;

/// Discrete map position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid distance used for every travel estimate. Saturates at `u32::MAX`.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Hit-point meter tracked for the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub current: u32,
    pub maximum: u32,
}

impl Vitals {
    pub const fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Current over maximum in `[0, 1]`. A zero maximum reads as empty.
    pub fn ratio(&self) -> f64 {
        if self.maximum == 0 {
            return 0.0;
        }
        (self.current as f64 / self.maximum as f64).clamp(0.0, 1.0)
    }

    /// Missing share of the meter in `[0, 1]`.
    pub fn deficit(&self) -> f64 {
        1.0 - self.ratio()
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(-2, 3);
        let b = Position::new(4, -1);
        assert_eq!(a.manhattan_distance(b), 10);
        assert_eq!(b.manhattan_distance(a), 10);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn manhattan_distance_saturates_at_the_extremes() {
        let corner = Position::new(i32::MIN, i32::MIN);
        let opposite = Position::new(i32::MAX, i32::MAX);
        assert_eq!(corner.manhattan_distance(opposite), u32::MAX);
    }

    #[test]
    fn vitals_ratio_handles_zero_maximum() {
        assert_eq!(Vitals::new(0, 0).ratio(), 0.0);
        assert_eq!(Vitals::new(50, 100).ratio(), 0.5);
        assert!((Vitals::new(20, 100).deficit() - 0.8).abs() < 1e-9);
    }
}

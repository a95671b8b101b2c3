//! Per-shape score table.

use std::ops::Index;

use crate::eval::pattern::Shape;

/// Score awarded for each recognized shape.
///
/// Indexed by [`Shape`]; weights must not increase from [`Shape::Five`] down
/// to [`Shape::One`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights([i32; Shape::COUNT]);

impl Weights {
    /// Build a table from weights listed in [`Shape::ALL`] order.
    pub const fn new(weights: [i32; Shape::COUNT]) -> Weights {
        Weights(weights)
    }

    /// Score for a shape.
    #[inline]
    pub fn score(&self, shape: Shape) -> i32 {
        self.0[shape.index()]
    }

    /// Replace the score for one shape.
    pub fn set(&mut self, shape: Shape, score: i32) {
        self.0[shape.index()] = score;
    }

    /// Return the first adjacent pair `(stronger, weaker)` whose weights
    /// increase, if any.
    pub fn first_inversion(&self) -> Option<(Shape, Shape)> {
        Shape::ALL
            .windows(2)
            .find(|pair| self.score(pair[1]) > self.score(pair[0]))
            .map(|pair| (pair[0], pair[1]))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights::new([100_000, 10_000, 1_000, 1_000, 100, 100, 10, 1])
    }
}

impl Index<Shape> for Weights {
    type Output = i32;

    #[inline]
    fn index(&self, shape: Shape) -> &i32 {
        &self.0[shape.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::Weights;
    use crate::eval::pattern::Shape;

    #[test]
    fn default_values() {
        let w = Weights::default();
        assert_eq!(w.score(Shape::Five), 100_000);
        assert_eq!(w.score(Shape::OpenFour), 10_000);
        assert_eq!(w[Shape::Four], 1_000);
        assert_eq!(w[Shape::OpenThree], 1_000);
        assert_eq!(w[Shape::Three], 100);
        assert_eq!(w[Shape::OpenTwo], 100);
        assert_eq!(w[Shape::Two], 10);
        assert_eq!(w[Shape::One], 1);
    }

    #[test]
    fn default_is_ordered() {
        assert_eq!(Weights::default().first_inversion(), None);
    }

    #[test]
    fn inversion_detected() {
        let mut w = Weights::default();
        w.set(Shape::Two, 500);
        assert_eq!(w.first_inversion(), Some((Shape::OpenTwo, Shape::Two)));
    }
}

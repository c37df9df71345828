//! Reference model families and the point correspondence they are fitted to.
//!
//! The engine itself never looks inside these types; they exist so that the
//! high-level API and the tests have concrete models to work with. Each model
//! measures the Euclidean transfer error `|apply(p1) - p2|`.

use nalgebra::{Isometry2, Matrix2, Point, Point2, SVector, Translation2, UnitComplex, Vector2};

use crate::core::{Function, WORST_COST};

/// Weighted correspondence `p1 -> p2`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMatch<const D: usize> {
    pub p1: Point<f64, D>,
    pub p2: Point<f64, D>,
    pub weight: f64,
}

pub type PointMatch2D = PointMatch<2>;
pub type PointMatch3D = PointMatch<3>;

impl<const D: usize> PointMatch<D> {
    pub fn new(p1: Point<f64, D>, p2: Point<f64, D>) -> Self {
        Self {
            p1,
            p2,
            weight: 1.0,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// Translation in `D` dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationModel<const D: usize> {
    pub translation: SVector<f64, D>,
    cost: f64,
}

pub type TranslationModel2D = TranslationModel<2>;
pub type TranslationModel3D = TranslationModel<3>;

impl<const D: usize> Default for TranslationModel<D> {
    fn default() -> Self {
        Self::new(SVector::zeros())
    }
}

impl<const D: usize> TranslationModel<D> {
    pub fn new(translation: SVector<f64, D>) -> Self {
        Self {
            translation,
            cost: WORST_COST,
        }
    }

    pub fn apply(&self, p: &Point<f64, D>) -> Point<f64, D> {
        p + self.translation
    }
}

impl<const D: usize> Function<PointMatch<D>> for TranslationModel<D> {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    fn min_num_fitables(&self) -> usize {
        1
    }

    fn distance(&self, fitable: &PointMatch<D>) -> f64 {
        (self.apply(&fitable.p1) - fitable.p2).norm()
    }
}

/// Planar affine transform `x -> matrix * x + translation`.
#[derive(Clone, Debug, PartialEq)]
pub struct AffineModel2D {
    pub matrix: Matrix2<f64>,
    pub translation: Vector2<f64>,
    cost: f64,
}

impl Default for AffineModel2D {
    fn default() -> Self {
        Self::new(Matrix2::identity(), Vector2::zeros())
    }
}

impl AffineModel2D {
    pub fn new(matrix: Matrix2<f64>, translation: Vector2<f64>) -> Self {
        Self {
            matrix,
            translation,
            cost: WORST_COST,
        }
    }

    pub fn apply(&self, p: &Point2<f64>) -> Point2<f64> {
        Point2::from(self.matrix * p.coords + self.translation)
    }
}

impl Function<PointMatch2D> for AffineModel2D {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    fn min_num_fitables(&self) -> usize {
        3
    }

    fn distance(&self, fitable: &PointMatch2D) -> f64 {
        (self.apply(&fitable.p1) - fitable.p2).norm()
    }
}

/// Planar rotation followed by translation.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidModel2D {
    pub isometry: Isometry2<f64>,
    cost: f64,
}

impl Default for RigidModel2D {
    fn default() -> Self {
        Self::new(Isometry2::identity())
    }
}

impl RigidModel2D {
    pub fn new(isometry: Isometry2<f64>) -> Self {
        Self {
            isometry,
            cost: WORST_COST,
        }
    }

    /// Build from a rotation angle (radians) and a translation.
    pub fn from_parts(angle: f64, translation: Vector2<f64>) -> Self {
        Self::new(Isometry2::from_parts(
            Translation2::from(translation),
            UnitComplex::new(angle),
        ))
    }

    pub fn angle(&self) -> f64 {
        self.isometry.rotation.angle()
    }

    pub fn translation(&self) -> Vector2<f64> {
        self.isometry.translation.vector
    }

    pub fn apply(&self, p: &Point2<f64>) -> Point2<f64> {
        self.isometry * p
    }
}

impl Function<PointMatch2D> for RigidModel2D {
    fn cost(&self) -> f64 {
        self.cost
    }

    fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    fn min_num_fitables(&self) -> usize {
        2
    }

    fn distance(&self, fitable: &PointMatch2D) -> f64 {
        (self.apply(&fitable.p1) - fitable.p2).norm()
    }
}

use crate::Point3D;

/// A named set of joints captured at one instant.
///
/// Points keep the order they were parsed or generated in. Joint names are
/// not unique; a posture may hold several points with the same label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Posture {
    pub(crate) points: Vec<Point3D>,
    pub(crate) name: String,
}

impl Posture {
    /// An empty, unnamed posture.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(name: impl Into<String>, points: Vec<Point3D>) -> Self {
        Self {
            points,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of squared Euclidean distances over every pair of same-named
    /// joints, one taken from each posture.
    ///
    /// Every matching pair counts, so duplicated names contribute once per
    /// combination. Unmatched joints contribute nothing.
    pub fn distance(&self, other: &Posture) -> f64 {
        let mut sum = 0.0;
        for a in &self.points {
            for b in &other.points {
                if a.name == b.name {
                    sum += a.sqr_euclidean_distance(b);
                }
            }
        }
        sum
    }
}

//! Terrain categories and their traversal costs.

use rand::Rng;
use rand::RngExt;

/// A terrain category with a fixed traversal cost.
///
/// `Terrace` is the only zero-cost category; it is the construction default
/// and is always forced onto the start and goal cells. The remaining
/// categories are the obstacles randomly scattered during generation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Terrace,
    Grass,
    Mud,
    Water,
}

impl Terrain {
    /// Every category.
    pub const ALL: [Terrain; 4] = [Terrain::Terrace, Terrain::Grass, Terrain::Mud, Terrain::Water];

    /// The positive-cost categories.
    pub const OBSTACLES: [Terrain; 3] = [Terrain::Grass, Terrain::Mud, Terrain::Water];

    /// Cost of stepping onto a cell of this terrain.
    #[inline]
    pub const fn cost(self) -> i32 {
        match self {
            Terrain::Terrace => 0,
            Terrain::Grass => 1,
            Terrain::Mud => 5,
            Terrain::Water => 10,
        }
    }

    /// Whether this terrain is one of the expensive obstacle categories.
    #[inline]
    pub const fn is_obstacle(self) -> bool {
        self.cost() > 0
    }

    /// A uniformly random category.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// A uniformly random obstacle category.
    pub fn random_obstacle(rng: &mut impl Rng) -> Self {
        Self::OBSTACLES[rng.random_range(0..Self::OBSTACLES.len())]
    }

    /// Character representation of terrain.
    pub const fn rune(self) -> char {
        match self {
            Terrain::Terrace => '.',
            Terrain::Grass => '"',
            Terrain::Mud => ',',
            Terrain::Water => '~',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn costs_are_non_negative_and_terrace_is_free() {
        for t in Terrain::ALL {
            assert!(t.cost() >= 0);
        }
        assert_eq!(Terrain::Terrace.cost(), 0);
        assert_eq!(Terrain::Water.cost(), 10);
    }

    #[test]
    fn obstacle_iff_positive_cost() {
        for t in Terrain::ALL {
            assert_eq!(t.is_obstacle(), t.cost() > 0);
        }
        assert!(!Terrain::Terrace.is_obstacle());
    }

    #[test]
    fn random_obstacle_never_free() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(Terrain::random_obstacle(&mut rng).is_obstacle());
        }
    }

    #[test]
    fn random_covers_all_categories() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let t = Terrain::random(&mut rng);
            seen[Terrain::ALL.iter().position(|&u| u == t).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn runes_are_distinct() {
        for a in Terrain::ALL {
            for b in Terrain::ALL {
                if a != b {
                    assert_ne!(a.rune(), b.rune());
                }
            }
        }
    }
}

//! Generation parameters and their validation.

use thiserror::Error;

/// Which spanning-tree algorithm carves the maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Randomized Prim: grow outward from the start cell. Long, winding
    /// branches.
    #[default]
    Prim,
    /// Randomized Kruskal: merge random disjoint sets. Shorter average
    /// branch length.
    Kruskal,
}

impl Algorithm {
    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Prim => "Prim",
            Algorithm::Kruskal => "Kruskal",
        }
    }
}

/// Invalid generation parameters, reported before any carving starts.
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("grid dimensions must be at least 2x2, got {cols}x{rows}")]
    Dimensions { cols: i32, rows: i32 },
    #[error("{name} must lie in [0, 1], got {value}")]
    UnitInterval { name: &'static str, value: f64 },
}

/// Everything [`MazeGen`](crate::MazeGen) needs to build one maze.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenParams {
    pub cols: i32,
    pub rows: i32,
    /// Per-cell chance of an obstacle terrain category.
    pub terrain_probability: f64,
    /// 1.0 keeps the perfect maze; lower values punch extra loops into it.
    pub wall_density: f64,
    pub algorithm: Algorithm,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            cols: 30,
            rows: 20,
            terrain_probability: 0.3,
            wall_density: 1.0,
            algorithm: Algorithm::Prim,
        }
    }
}

impl GenParams {
    /// Check dimensions and unit-interval inputs.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.cols < 2 || self.rows < 2 {
            return Err(ParamsError::Dimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        for (name, value) in [
            ("terrain_probability", self.terrain_probability),
            ("wall_density", self.wall_density),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::UnitInterval { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert_eq!(GenParams::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let mut p = GenParams::default();
        p.cols = 1;
        assert_eq!(
            p.validate(),
            Err(ParamsError::Dimensions { cols: 1, rows: 20 })
        );
        p.cols = 30;
        p.rows = 0;
        assert!(p.validate().is_err());
        p.rows = -3;
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        let mut p = GenParams::default();
        p.terrain_probability = 1.2;
        assert_eq!(
            p.validate(),
            Err(ParamsError::UnitInterval {
                name: "terrain_probability",
                value: 1.2
            })
        );
        p.terrain_probability = 0.5;
        p.wall_density = -0.1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ParamsError::UnitInterval {
            name: "wall_density",
            value: 2.0,
        };
        assert!(err.to_string().contains("wall_density"));
    }
}

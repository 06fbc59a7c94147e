//! Puzzle configuration.
//!
//! Policy
//! - Defaults reproduce the fixed 900×600 board. Overrides exist
//!   for headless runs and tests (e.g. a unit grid on small boards).
//! - `shrink_factor` and `regrow_factor` are deliberately not reciprocals:
//!   `0.999 * 1.001 = 0.999999`, so every completion check shrinks a piece by
//!   one part per million before grid alignment snaps it back.

use serde::{Deserialize, Serialize};

use crate::geom::Angle;
use crate::shapes::Color;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TangramCfg {
    /// Pixel quantum for drag deltas and vertex re-alignment.
    pub grid_step: f64,
    /// Interactive rotation increment, in degrees.
    pub rotation_step_degrees: f64,
    /// Epsilon downscale applied to piece bodies before checking.
    pub shrink_factor: f64,
    /// Scale applied after checking.
    pub regrow_factor: f64,
    /// Radius of the pivot handle drawn at each piece anchor.
    pub pivot_radius: f64,
    pub board_width: f64,
    pub board_height: f64,
    pub background: Color,
    pub win_background: Color,
}

impl Default for TangramCfg {
    fn default() -> Self {
        Self {
            grid_step: 10.0,
            rotation_step_degrees: 45.0,
            shrink_factor: 0.999,
            regrow_factor: 1.001,
            pivot_radius: 10.0,
            board_width: 900.0,
            board_height: 600.0,
            background: Color::LIGHT_GRAY,
            win_background: Color::BLACK,
        }
    }
}

impl TangramCfg {
    #[inline]
    pub fn rotation_step(&self) -> Angle {
        Angle::from_degrees(self.rotation_step_degrees)
    }

    /// Reject values that would produce NaN geometry or a degenerate rotation.
    ///
    /// The rotation step must lie in (0, 180]: larger values reduce to a
    /// negative bearing and 360 reduces to zero.
    pub fn validate(&self) -> Result<(), String> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be positive and finite, got {v}"))
            }
        };
        positive("grid_step", self.grid_step)?;
        positive("shrink_factor", self.shrink_factor)?;
        positive("regrow_factor", self.regrow_factor)?;
        positive("board_width", self.board_width)?;
        positive("board_height", self.board_height)?;
        let r = self.rotation_step_degrees;
        if !(r.is_finite() && r > 0.0 && r <= 180.0) {
            return Err(format!("rotation_step_degrees must be in (0, 180], got {r}"));
        }
        if !(self.pivot_radius.is_finite() && self.pivot_radius >= 0.0) {
            return Err(format!(
                "pivot_radius must be non-negative and finite, got {}",
                self.pivot_radius
            ));
        }
        Ok(())
    }

    /// Contract check for library callers; panics with the `validate` message.
    pub fn assert_valid(&self) {
        if let Err(msg) = self.validate() {
            panic!("invalid puzzle config: {msg}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TangramCfg::default().validate(), Ok(()));
    }

    #[test]
    fn full_turn_rotation_step_is_rejected() {
        let cfg = TangramCfg {
            rotation_step_degrees: 360.0,
            ..TangramCfg::default()
        };
        assert!(cfg.validate().unwrap_err().contains("rotation_step_degrees"));
        let reflex = TangramCfg {
            rotation_step_degrees: 270.0,
            ..TangramCfg::default()
        };
        assert!(reflex.validate().is_err());
        let half = TangramCfg {
            rotation_step_degrees: 180.0,
            ..TangramCfg::default()
        };
        assert!(half.validate().is_ok());
    }

    #[test]
    fn negative_pivot_radius_and_zero_factor_are_rejected() {
        let cfg = TangramCfg {
            pivot_radius: -1.0,
            ..TangramCfg::default()
        };
        assert!(cfg.validate().unwrap_err().contains("pivot_radius"));
        let cfg = TangramCfg {
            shrink_factor: 0.0,
            ..TangramCfg::default()
        };
        assert!(cfg.validate().unwrap_err().contains("shrink_factor"));
    }

    #[test]
    #[should_panic(expected = "invalid puzzle config")]
    fn assert_valid_panics_with_message() {
        TangramCfg {
            grid_step: f64::NAN,
            ..TangramCfg::default()
        }
        .assert_valid();
    }
}

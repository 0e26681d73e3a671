use core::fmt;
use core::str::FromStr;

use rc_core::Error;

pub const DEFAULT_ANGLE_BINS: usize = 360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    #[default]
    Nearest,
    Linear,
}

impl Interpolation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    /// Accepts exactly `nearest` or `linear`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(Self::Nearest),
            "linear" => Ok(Self::Linear),
            _ => Err(Error::InvalidInput(
                "interpolation must be `nearest` or `linear`",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolarConfig {
    pub interpolation: Interpolation,
    pub angle_bins: usize,
    /// Fail with [`Error::NumericDegeneracy`] instead of returning an empty
    /// polar image when the radius is zero.
    pub reject_degenerate: bool,
}

impl Default for PolarConfig {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Nearest,
            angle_bins: DEFAULT_ANGLE_BINS,
            reject_degenerate: false,
        }
    }
}

impl PolarConfig {
    pub fn with_interpolation(interpolation: Interpolation) -> Self {
        Self {
            interpolation,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use rc_core::Error;

    use super::{DEFAULT_ANGLE_BINS, Interpolation, PolarConfig};

    #[test]
    fn parses_exact_names_only() {
        assert_eq!("nearest".parse::<Interpolation>(), Ok(Interpolation::Nearest));
        assert_eq!("linear".parse::<Interpolation>(), Ok(Interpolation::Linear));

        for bad in ["Linear", "NEAREST", "bilinear", "near", ""] {
            assert!(matches!(
                bad.parse::<Interpolation>(),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in [Interpolation::Nearest, Interpolation::Linear] {
            assert_eq!(mode.to_string().parse::<Interpolation>(), Ok(mode));
        }
    }

    #[test]
    fn default_config() {
        let cfg = PolarConfig::default();
        assert_eq!(cfg.interpolation, Interpolation::Nearest);
        assert_eq!(cfg.angle_bins, DEFAULT_ANGLE_BINS);
        assert!(!cfg.reject_degenerate);

        let linear = PolarConfig::with_interpolation(Interpolation::Linear);
        assert_eq!(linear.angle_bins, 360);
        assert_eq!(linear.interpolation, Interpolation::Linear);
    }
}

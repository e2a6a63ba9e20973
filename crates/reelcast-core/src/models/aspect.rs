use std::fmt::{Display, Formatter, Result as FmtResult};

/// Relative tolerance when matching a measured ratio against 16:9 / 9:16.
const RATIO_TOLERANCE: f64 = 0.02;

/// Coarse aspect-ratio bucket for a video, used to partition storage keys.
/// Not persisted anywhere; derived from probed dimensions at publish time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectClass {
    Landscape,
    Portrait,
    Other,
}

impl AspectClass {
    /// Classify measured dimensions: 16:9 within tolerance is landscape,
    /// 9:16 within tolerance is portrait, anything else is other.
    pub fn from_dimensions(width: i64, height: i64) -> Self {
        if width <= 0 || height <= 0 {
            return AspectClass::Other;
        }
        let ratio = width as f64 / height as f64;
        if within_tolerance(ratio, 16.0 / 9.0) {
            AspectClass::Landscape
        } else if within_tolerance(ratio, 9.0 / 16.0) {
            AspectClass::Portrait
        } else {
            AspectClass::Other
        }
    }

    /// Storage key prefix for this class.
    pub fn prefix(&self) -> &'static str {
        match self {
            AspectClass::Landscape => "landscape",
            AspectClass::Portrait => "portrait",
            AspectClass::Other => "other",
        }
    }
}

fn within_tolerance(ratio: f64, target: f64) -> bool {
    ((ratio - target) / target).abs() <= RATIO_TOLERANCE
}

impl Display for AspectClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_16_9() {
        assert_eq!(AspectClass::from_dimensions(1280, 720), AspectClass::Landscape);
        assert_eq!(AspectClass::from_dimensions(1920, 1080), AspectClass::Landscape);
        // Slightly off but within tolerance (1366x768 is ~1.7786)
        assert_eq!(AspectClass::from_dimensions(1366, 768), AspectClass::Landscape);
    }

    #[test]
    fn test_portrait_9_16() {
        assert_eq!(AspectClass::from_dimensions(720, 1280), AspectClass::Portrait);
        assert_eq!(AspectClass::from_dimensions(1080, 1920), AspectClass::Portrait);
    }

    #[test]
    fn test_other() {
        assert_eq!(AspectClass::from_dimensions(1000, 1000), AspectClass::Other);
        assert_eq!(AspectClass::from_dimensions(640, 480), AspectClass::Other);
        assert_eq!(AspectClass::from_dimensions(0, 720), AspectClass::Other);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(AspectClass::Landscape.prefix(), "landscape");
        assert_eq!(AspectClass::Portrait.prefix(), "portrait");
        assert_eq!(AspectClass::Other.prefix(), "other");
        assert_eq!(AspectClass::Landscape.to_string(), "landscape");
    }
}

//! Error types surfaced by the gear override engine.
use std::fmt;

use super::components::GearId;

/// Raised when a module requests a gear the hero does not currently have
/// equipped (or that does not exist). The override state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearNotEquippedError {
    pub gear: GearId,
}

impl GearNotEquippedError {
    pub fn new(gear: GearId) -> Self {
        Self { gear }
    }
}

impl fmt::Display for GearNotEquippedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not equipped and cannot be requested", self.gear)
    }
}

impl std::error::Error for GearNotEquippedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_reports_offending_gear() {
        let error = GearNotEquippedError::new(GearId::new(9));
        assert_eq!(error.gear, GearId::new(9));
        assert!(error.to_string().contains("Gear-9"));
    }
}

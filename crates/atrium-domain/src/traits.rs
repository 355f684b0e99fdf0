//! Trait definitions shared across record types

use crate::{Artefact, Employee, InHouseProject};

/// Anything that carries a clearance or confidentiality level
///
/// Employees, in-house projects and artefacts all take part in the same
/// rule: an actor may only hold or touch a target whose level does not
/// exceed its own.
pub trait Clearance {
    /// The integer level (0 is the lowest)
    fn level(&self) -> u32;

    /// Whether `self` is cleared for `target`
    fn clears(&self, target: &impl Clearance) -> bool {
        self.level() >= target.level()
    }
}

impl Clearance for Employee {
    fn level(&self) -> u32 {
        Employee::level(self)
    }
}

impl Clearance for InHouseProject {
    fn level(&self) -> u32 {
        InHouseProject::level(self)
    }
}

impl Clearance for Artefact {
    fn level(&self) -> u32 {
        Artefact::level(self)
    }
}

/// A bare level, for checks against a requested value
impl Clearance for u32 {
    fn level(&self) -> u32 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_levels_clear() {
        assert!(2u32.clears(&2u32));
        assert!(3u32.clears(&2u32));
        assert!(!2u32.clears(&3u32));
    }
}

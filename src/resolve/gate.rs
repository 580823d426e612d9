//! Mode gate
//!
//! Pass-through to the capability flags. Every resolver asks the gate first;
//! demo mode hides both preference sources.

use crate::config::CapabilityFlags;

#[derive(Clone, Copy)]
pub struct ModeGate<'a> {
    flags: &'a dyn CapabilityFlags,
}

impl<'a> ModeGate<'a> {
    pub fn new(flags: &'a dyn CapabilityFlags) -> Self {
        Self { flags }
    }

    pub fn is_demo_mode(&self) -> bool {
        self.flags.demo_mode()
    }

    pub fn force_screenshot_icon(&self) -> bool {
        self.flags.force_screenshot_icon()
    }

    pub fn force_simple_mode(&self) -> bool {
        self.flags.force_simple_mode()
    }

    /// Whether profile and JSON sources may be consulted at all
    pub fn sources_enabled(&self) -> bool {
        !self.is_demo_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeFlags;

    #[test]
    fn test_gate_reflects_flags() {
        let flags = RuntimeFlags {
            force_screenshot_icon: true,
            ..RuntimeFlags::default()
        };
        let gate = ModeGate::new(&flags);
        assert!(!gate.is_demo_mode());
        assert!(gate.sources_enabled());
        assert!(gate.force_screenshot_icon());
        assert!(!gate.force_simple_mode());
    }

    #[test]
    fn test_demo_disables_sources() {
        let flags = RuntimeFlags::demo();
        let gate = ModeGate::new(&flags);
        assert!(gate.is_demo_mode());
        assert!(!gate.sources_enabled());
    }
}

//! Remediation policy adapters.

mod configured;
mod interactive;

pub use configured::ConfiguredPolicy;
pub use interactive::InteractivePolicy;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the transformation core to external systems:
//! - `dialogflow` - Reads an unpacked Dialogflow agent export
//! - `rasa` - Renders Rasa YAML and stores the target documents
//! - `policy` - Configured and interactive remediation policies

pub mod dialogflow;
pub mod policy;
pub mod rasa;

pub use dialogflow::FsExportSource;
pub use policy::{ConfiguredPolicy, InteractivePolicy};
pub use rasa::{FsTargetStore, RasaYamlRenderer};

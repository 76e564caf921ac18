//! Rasa project adapters: YAML rendering and document storage.

mod fs_target_store;
mod yaml_renderer;

pub use fs_target_store::FsTargetStore;
pub use yaml_renderer::RasaYamlRenderer;

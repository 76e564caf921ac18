//! Dialogflow export adapter.

mod dto;
mod fs_export_source;

pub use fs_export_source::FsExportSource;

//! Response export adapters.

mod text_exporter;

pub use text_exporter::TextResponseExporter;

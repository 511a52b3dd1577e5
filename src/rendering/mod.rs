pub mod export;

pub use export::{encode, export_file_name, ExportFormat};

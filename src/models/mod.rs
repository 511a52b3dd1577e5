pub mod config;
pub mod params;

pub use config::{AnalysisConfig, AppConfig, ExportConfig, LoaderConfig};
pub use params::RenderParams;

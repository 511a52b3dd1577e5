pub mod image_loader;
pub mod preview_session;
pub mod simulation_service;

pub use image_loader::{decode_image, ImageLoader, ImageSource};
pub use preview_session::{Preview, PreviewSession};
pub use simulation_service::{AnalysisReport, ExportedImage, GridCell, SimulationService};

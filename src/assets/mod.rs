pub mod collector;
pub mod download;

// Re-export commonly used items
pub use collector::{collect_image_assets, sanitize_file_name};
pub use download::{download_image_assets, DownloadTarget, DownloadedAsset, ImageFetcher};

// vitrine-api: Async HTTP client for the Vitrine directory service.

pub mod client;
pub mod error;
pub mod image;
pub mod transport;
pub mod types;

pub use client::DirectoryClient;
pub use error::Error;
pub use image::ImageClient;
pub use transport::TransportConfig;
pub use types::{ConfigurationResponse, PropertiesResponse, PropertyRecord};

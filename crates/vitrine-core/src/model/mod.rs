// ── Domain model ──

mod configuration;
mod property;

pub use configuration::Configuration;
pub use property::Property;

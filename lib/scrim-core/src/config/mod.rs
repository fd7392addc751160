#[allow(clippy::module_inception)]
mod config;
mod config_serializer;

pub use config::Config;
pub use config_serializer::{render_annotated, serialize_config};

pub mod branding_config;
pub mod config;
pub mod output_config;

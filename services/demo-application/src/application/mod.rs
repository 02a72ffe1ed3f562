pub mod context;
pub mod opentelemetry;
pub mod settings;

pub const APPLICATION_NAME: &str = "demo-application";

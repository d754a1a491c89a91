pub mod health;
pub mod metrics;
pub mod names;

pub use health::{health_check, readiness_check};
pub use self::metrics::metrics_endpoint;
pub use names::{add_name, list_names};

pub mod names;

pub use names::{AddNameRequest, AddNameResponse, HealthResponse, NamesResponse};

pub mod args;
pub mod cache;
pub mod model;
pub mod normalize;
pub mod schedule;
pub mod controller {
    pub mod accolades;
    pub mod api;
    pub mod cdn;
    pub mod provider;
    pub mod samples;
}

pub use model::UpstreamError;

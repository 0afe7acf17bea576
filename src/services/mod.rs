pub mod api_client;
pub mod query;
pub mod resources;

pub use api_client::ApiClient;
pub use resources::ResourceClient;

//! Shared mocks and fixtures for integration tests

pub mod fixtures;
pub mod test_server;
pub mod upstream;

#[allow(unused_imports)]
pub use fixtures::PropertyFixtures;
#[allow(unused_imports)]
pub use test_server::TestServer;
#[allow(unused_imports)]
pub use upstream::{MockPropertyService, UpstreamBehavior};

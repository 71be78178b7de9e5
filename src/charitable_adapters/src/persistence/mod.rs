pub mod hashmap_auth_gateway;

pub use hashmap_auth_gateway::HashMapAuthGateway;

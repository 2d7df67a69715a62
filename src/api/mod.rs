pub mod client;
pub mod gateway;
pub mod models;
pub mod route53;

pub use client::{DnsApiClient, ProviderClient};
pub use gateway::GatewayClient;
pub use route53::Route53Client;

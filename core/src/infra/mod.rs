//! Concrete adapters: the network client and the HTTP gateway.

pub mod http_client;
pub mod to_do_http_gateway;

pub use http_client::ReqwestHttpClient;
pub use to_do_http_gateway::ToDoHttpGateway;

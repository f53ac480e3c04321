//! HTTP adapter for the shortening service.

pub mod dto;
mod http_gateway;

pub use http_gateway::HttpShortenerGateway;

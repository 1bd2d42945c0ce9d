pub mod bridge;

pub use bridge::HostBridgeClient;

// Interface adapters: host-facing HTTP surface and the host bridge client.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;

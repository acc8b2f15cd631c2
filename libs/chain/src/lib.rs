pub mod events;
pub mod rpc;

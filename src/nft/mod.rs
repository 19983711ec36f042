pub mod abi;
pub mod chain;
pub mod service;
pub mod types;

pub use chain::RpcChainClient;
pub use service::{NftService, ServiceSettings};
pub use types::{MintRequest, PageParams, SortBy};

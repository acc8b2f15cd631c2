use alloy::eips::BlockNumberOrTag;
use alloy::primitives::{Address, BlockNumber};
use alloy::providers::Identity;
use alloy::providers::RootProvider;
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller,
};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::Filter;
use alloy::rpc::types::Log;
use alloy::transports::RpcError;
use alloy::transports::TransportErrorKind;
use alloy::transports::http::reqwest::Url;
use eyre::Result;

type NodeClientProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider,
>;

/// Read-only JSON-RPC access to the chain the bounty contracts live on.
#[derive(Clone)]
pub struct NodeClient {
    provider: NodeClientProvider,
}

impl NodeClient {
    pub fn new(rpc_url: Url) -> Self {
        let rpc_client = RpcClient::new_http(rpc_url);
        let provider = ProviderBuilder::new().connect_client(rpc_client);
        Self { provider }
    }

    pub fn borrow_provider(&self) -> &NodeClientProvider {
        &self.provider
    }

    pub async fn get_latest_block_number(
        &self,
    ) -> Result<BlockNumber, RpcError<TransportErrorKind>> {
        self.provider.get_block_number().await
    }

    /// `eth_getLogs` over an inclusive block range. Without an address the
    /// filter matches the event signature emitted by any contract.
    pub async fn get_logs(
        &self,
        address: Option<Address>,
        event: &str,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> Result<Vec<Log>, RpcError<TransportErrorKind>> {
        let mut filter = Filter::new().event(event).from_block(from_block).to_block(to_block);
        if let Some(address) = address {
            filter = filter.address(address);
        }

        self.provider.get_logs(&filter).await
    }
}

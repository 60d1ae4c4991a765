pub mod artifact;

#[cfg(feature = "yew")]
pub mod yew;

use artifact::ContractArtifact;
use async_trait::async_trait;
use ethers::{
    providers::{Http, HttpClientError, JsonRpcClient, JsonRpcError, Provider, ProviderError, RpcError},
    types::Address,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use thiserror::Error;
use url::Url;

/// Endpoint of a locally running development node (ganache's default).
pub const DEFAULT_RPC_NODE: &str = "http://127.0.0.1:7545";

pub struct SessionBuilder {
    pub rpc_node: String,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self { rpc_node: DEFAULT_RPC_NODE.to_string() }
    }

    pub fn rpc_node(&mut self, rpc_node: &str) -> &Self {
        self.rpc_node = rpc_node.to_string();
        self
    }

    pub fn build(&self) -> DappSession {
        DappSession::new(self.rpc_node.clone())
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug)]
pub enum DappError {
    #[error("Not connected")]
    NotConnected,

    #[error("Already connected")]
    AlreadyConnected,

    #[error("Contract not deployed on network {0}")]
    NotDeployed(u64),

    #[error(transparent)]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Malformed network id: {0}")]
    BadNetworkId(#[from] std::num::ParseIntError),

    #[error(transparent)]
    Transport(#[from] HttpClientError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<DappError> for ProviderError {
    fn from(src: DappError) -> Self {
        ProviderError::JsonRpcClientError(Box::new(src))
    }
}

impl RpcError for DappError {
    fn as_error_response(&self) -> Option<&JsonRpcError> {
        match self {
            DappError::Transport(e) => e.as_error_response(),
            _ => None,
        }
    }

    fn is_error_response(&self) -> bool {
        self.as_error_response().is_some()
    }

    fn as_serde_error(&self) -> Option<&serde_json::Error> {
        match self {
            DappError::Json(e) => Some(e),
            DappError::Transport(e) => e.as_serde_error(),
            _ => None,
        }
    }

    fn is_serde_error(&self) -> bool {
        self.as_serde_error().is_some()
    }
}

#[derive(Clone, Debug)]
enum Transport {
    None,
    Http(Http),
}

/// A dApp's connection to a development node: one HTTP JSON-RPC channel plus the
/// network identity and unlocked accounts resolved from it. Built unconnected;
/// `connect` runs once per application lifetime.
#[derive(Clone, Debug)]
pub struct DappSession {
    pub rpc_node: String,

    transport: Transport,
    network_id: Option<u64>,
    accounts: Option<Vec<Address>>,
}

impl DappSession {
    fn new(rpc_node: String) -> Self {
        DappSession { rpc_node, transport: Transport::None, network_id: None, accounts: None }
    }

    pub fn is_connected(&self) -> bool {
        !matches!(self.transport, Transport::None)
    }

    /// Opens the channel and resolves network id and account list. There is no
    /// retry and no reconnect; a second call is an error.
    pub async fn connect(&mut self) -> Result<(), DappError> {
        if self.is_connected() {
            return Err(DappError::AlreadyConnected);
        }

        let url = Url::parse(&self.rpc_node)?;
        self.transport = Transport::Http(Http::new(url));

        self.network_id = Some(self.request_network_id().await?);
        self.accounts = Some(self.request_accounts().await?);

        Ok(())
    }

    /// Network identifier the node reported on connect, used to pick the right
    /// deployment out of a contract artifact.
    pub fn network_id(&self) -> Option<u64> {
        self.network_id
    }

    pub fn accounts(&self) -> Option<&Vec<Address>> {
        self.accounts.as_ref()
    }

    /// First unlocked account of the node; transactions are attributed to it.
    pub fn account(&self) -> Address {
        self.accounts
            .as_ref()
            .and_then(|a| a.first())
            .copied()
            .unwrap_or_else(Address::zero)
    }

    /// Gets a provider you can feed to ethers constructors to start interaction
    /// with the contract on this session's network
    pub fn provider(&self) -> Provider<DappSession> {
        Provider::new(self.clone())
    }

    /// Resolves the artifact's deployed address for this session's network.
    pub fn deployment(&self, artifact: &ContractArtifact) -> Result<Address, DappError> {
        let network_id = self.network_id.ok_or(DappError::NotConnected)?;
        artifact.address_for(network_id).ok_or(DappError::NotDeployed(network_id))
    }

    async fn request_network_id(&self) -> Result<u64, DappError> {
        // net_version answers with a decimal string, not a quantity
        let version: String = self.request("net_version", ()).await?;
        Ok(version.parse()?)
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, DappError> {
        Ok(self.request("eth_accounts", ()).await?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl JsonRpcClient for DappSession {
    type Error = DappError;

    async fn request<T, R>(&self, method: &str, params: T) -> Result<R, Self::Error>
    where
        T: Debug + Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        match &self.transport {
            Transport::None => Err(DappError::NotConnected),
            Transport::Http(provider) => Ok(provider.request(method, params).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn builder_defaults_to_local_node() {
        let session = SessionBuilder::new().build();
        assert_eq!(session.rpc_node, DEFAULT_RPC_NODE);
        assert!(!session.is_connected());
        assert_eq!(session.network_id(), None);
    }

    #[test]
    fn builder_overrides_rpc_node() {
        let mut builder = SessionBuilder::new();
        builder.rpc_node("http://127.0.0.1:8545");
        assert_eq!(builder.build().rpc_node, "http://127.0.0.1:8545");
    }

    #[test]
    fn unconnected_session_has_no_deployment() {
        let session = SessionBuilder::new().build();
        let artifact = ContractArtifact {
            contract_name: "SimpleStorage".to_string(),
            abi: Default::default(),
            networks: HashMap::new(),
        };
        assert!(matches!(session.deployment(&artifact), Err(DappError::NotConnected)));
    }

    #[test]
    fn unconnected_session_attributes_to_zero_address() {
        let session = SessionBuilder::new().build();
        assert_eq!(session.account(), Address::zero());
        assert!(session.accounts().is_none());
    }
}

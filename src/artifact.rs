use std::collections::HashMap;

use ethers::{
    abi::Abi,
    types::{Address, H256},
};
use serde::Deserialize;

/// A contract build artifact as emitted by the compile/deploy toolchain: the
/// interface description plus one deployment record per network it was migrated
/// to. Bundled with the client and consumed read-only.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Abi,
    #[serde(default)]
    pub networks: HashMap<String, NetworkDeployment>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDeployment {
    pub address: Address,
    pub transaction_hash: Option<H256>,
}

impl ContractArtifact {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The deployment record for a network, if the contract was migrated there.
    /// Artifact keys are decimal network ids.
    pub fn deployment_for(&self, network_id: u64) -> Option<&NetworkDeployment> {
        self.networks.get(&network_id.to_string())
    }

    pub fn address_for(&self, network_id: u64) -> Option<Address> {
        self.deployment_for(network_id).map(|d| d.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTIFACT: &str = r#"{
        "contractName": "SimpleStorage",
        "abi": [
            {
                "inputs": [],
                "name": "getter",
                "outputs": [{ "internalType": "uint256", "name": "", "type": "uint256" }],
                "stateMutability": "view",
                "type": "function"
            },
            {
                "inputs": [{ "internalType": "uint256", "name": "x", "type": "uint256" }],
                "name": "setter",
                "outputs": [],
                "stateMutability": "nonpayable",
                "type": "function"
            }
        ],
        "networks": {
            "5777": {
                "address": "0x44692f04CF113a67CD111F3982185bd90856b76A",
                "transactionHash": "0x9f1e38b6b8b8e4f974ad8f1ae1b1c7ab6b0d4a0f6fa8c7c3c61563302c1d9c10"
            }
        }
    }"#;

    #[test]
    fn parses_artifact_and_resolves_known_network() {
        let artifact = ContractArtifact::from_json(ARTIFACT).unwrap();

        assert_eq!(artifact.contract_name, "SimpleStorage");
        assert!(artifact.abi.function("getter").is_ok());
        assert!(artifact.abi.function("setter").is_ok());

        let deployment = artifact.deployment_for(5777).unwrap();
        assert!(deployment.transaction_hash.is_some());
        assert_eq!(
            artifact.address_for(5777),
            Some("0x44692f04CF113a67CD111F3982185bd90856b76A".parse().unwrap())
        );
    }

    #[test]
    fn unknown_network_resolves_to_none() {
        let artifact = ContractArtifact::from_json(ARTIFACT).unwrap();
        assert_eq!(artifact.address_for(1), None);
        assert!(artifact.deployment_for(1337).is_none());
    }

    #[test]
    fn artifact_without_networks_section_parses_empty() {
        let artifact =
            ContractArtifact::from_json(r#"{ "contractName": "SimpleStorage", "abi": [] }"#)
                .unwrap();
        assert!(artifact.networks.is_empty());
        assert_eq!(artifact.address_for(5777), None);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(ContractArtifact::from_json("{ \"abi\": ").is_err());
    }
}

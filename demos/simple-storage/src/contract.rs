use dapp_web::{artifact::ContractArtifact, yew::UseSession, DappError, DappSession};
use ethers::{contract::abigen, providers::Provider};

abigen!(SimpleStorage, "abi/SimpleStorage.json");

/// Build artifact bundled at deploy time; carries the interface description and
/// the address the contract was migrated to per network.
pub const ARTIFACT_JSON: &str = include_str!("../abi/SimpleStorage.json");

/// Binds the storage contract to its deployment on the session's network.
pub fn storage_contract(
    session: &UseSession,
) -> Result<SimpleStorage<Provider<DappSession>>, DappError> {
    let artifact = ContractArtifact::from_json(ARTIFACT_JSON)?;
    let address = session.deployment(&artifact)?;
    Ok(SimpleStorage::new(address, session.provider().into()))
}

use crate::state::UploadRequest;
use dapp_web::{artifact::ContractArtifact, yew::UseSession, DappError, DappSession};
use ethers::{
    contract::{abigen, ContractCall},
    providers::{Middleware, Provider},
    types::{Address, U256},
};

abigen!(SongMarket, "abi/SongMarket.json");

/// Build artifact bundled at deploy time; carries the interface description and
/// the address the contract was migrated to per network.
pub const ARTIFACT_JSON: &str = include_str!("../abi/SongMarket.json");

/// Binds the marketplace contract to its deployment on the session's network.
pub fn market_contract(
    session: &UseSession,
) -> Result<SongMarket<Provider<DappSession>>, DappError> {
    let artifact = ContractArtifact::from_json(ARTIFACT_JSON)?;
    let address = session.deployment(&artifact)?;
    Ok(SongMarket::new(address, session.provider().into()))
}

/// Rental submission; the attached payment must equal the listed rent price.
pub fn rent_call<M: Middleware>(
    contract: &SongMarket<M>,
    index: U256,
    price: U256,
    from: Address,
) -> ContractCall<M, ()> {
    contract.rent_song(index).value(price).from(from)
}

/// Listing submission; carries no payment.
pub fn add_call<M: Middleware>(
    contract: &SongMarket<M>,
    request: UploadRequest,
    from: Address,
) -> ContractCall<M, ()> {
    contract
        .add_song(request.title, request.ipfs_hash, request.rent_price)
        .from(from)
}

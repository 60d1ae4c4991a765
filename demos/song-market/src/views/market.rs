use crate::{
    contract::{add_call, market_contract, rent_call, SongMarket},
    state::{MarketEvent, MarketModel, UploadRequest},
    views::{song_list::SongList, upload_form::UploadForm},
};
use dapp_web::{yew::UseSession, DappSession};
use ethers::{contract::ContractCall, providers::Provider, types::U256};
use log::{error, info};
use yew::{platform::spawn_local, prelude::*};

type MarketContract = SongMarket<Provider<DappSession>>;

async fn refresh_songs(contract: MarketContract, model: UseReducerHandle<MarketModel>) {
    match contract.get_all_songs().call().await {
        Ok(songs) => model.dispatch(MarketEvent::SongsLoaded(songs)),
        Err(err) => error!("Reading song list failed {err:?}"),
    }
}

async fn submit(
    contract: MarketContract,
    call: ContractCall<Provider<DappSession>, ()>,
    model: UseReducerHandle<MarketModel>,
) {
    info!("Trying to execute transaction...");
    match call.send().await {
        Ok(pending) => match pending.await {
            // re-fetch only after the transaction is confirmed
            Ok(_) => match contract.get_all_songs().call().await {
                Ok(songs) => model.dispatch(MarketEvent::SongsLoaded(songs)),
                Err(err) => {
                    error!("Refreshing song list failed {err:?}");
                    model.dispatch(MarketEvent::SubmitFailed(format!("Refresh failed: {err}")));
                }
            },
            Err(err) => {
                error!("Transaction not mined {err:?}");
                model.dispatch(MarketEvent::SubmitFailed(format!("Transaction failed: {err}")));
            }
        },
        Err(err) => {
            error!("Transaction rejected {err:?}");
            model.dispatch(MarketEvent::SubmitFailed(format!("Transaction rejected: {err}")));
        }
    }
}

#[function_component(MarketPanel)]
pub fn market_panel() -> Html {
    let session = use_context::<UseSession>()
        .expect("No session found. You must wrap your components in a <SessionContextProvider />");
    let model = use_reducer(MarketModel::default);
    let contract = use_state(|| None as Option<MarketContract>);

    {
        let contract = contract.clone();
        let model = model.clone();
        use_effect_with(session.clone(), move |session| {
            if session.is_connected() {
                match market_contract(session) {
                    Ok(bound) => {
                        contract.set(Some(bound.clone()));
                        // one read pass per proxy (re)construction
                        spawn_local(refresh_songs(bound, model));
                    }
                    Err(err) => error!("Contract not deployed on this network. {err}"),
                }
            }
        });
    }

    let on_upload = {
        let session = session.clone();
        let model = model.clone();
        let contract = contract.clone();
        Callback::from(move |request: UploadRequest| {
            let Some(contract) = (*contract).clone() else {
                error!("No contract bound, ignoring listing");
                return;
            };
            let call = add_call(&contract, request, session.account());
            model.dispatch(MarketEvent::SubmitStarted);
            spawn_local(submit(contract, call, model.clone()));
        })
    };

    let on_rent = {
        let session = session.clone();
        let model = model.clone();
        let contract = contract.clone();
        Callback::from(move |index: usize| {
            let Some(contract) = (*contract).clone() else {
                error!("No contract bound, ignoring rental");
                return;
            };
            let Some(song) = model.songs.get(index) else {
                error!("No song at index {index}");
                return;
            };
            let call = rent_call(&contract, U256::from(index), song.rent_price, session.account());
            model.dispatch(MarketEvent::SubmitStarted);
            spawn_local(submit(contract, call, model.clone()));
        })
    };

    html! {
        <div class="app">
            <h1>{"Song Marketplace"}</h1>
            <UploadForm disabled={model.pending} on_upload={on_upload} />
            <SongList songs={model.songs.clone()} disabled={model.pending} on_rent={on_rent} />
            if let Some(status) = &model.status {
                <p class="error">{status.clone()}</p>
            }
        </div>
    }
}

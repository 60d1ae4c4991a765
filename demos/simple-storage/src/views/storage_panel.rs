use crate::{
    contract::{storage_contract, SimpleStorage},
    state::{parse_value, StorageEvent, StorageModel},
};
use dapp_web::{yew::UseSession, DappSession};
use ethers::{
    providers::Provider,
    types::{Address, U256},
};
use log::{error, info};
use web_sys::HtmlInputElement;
use yew::{platform::spawn_local, prelude::*};

type StorageContract = SimpleStorage<Provider<DappSession>>;

async fn submit_value(
    contract: StorageContract,
    from: Address,
    value: U256,
    model: UseReducerHandle<StorageModel>,
) {
    info!("Trying to execute transaction...");
    match contract.setter(value).from(from).send().await {
        Ok(pending) => match pending.await {
            // re-read only after the transaction is confirmed
            Ok(_) => match contract.getter().call().await {
                Ok(fresh) => model.dispatch(StorageEvent::DataLoaded(fresh.to_string())),
                Err(err) => {
                    error!("Refreshing stored data failed {err:?}");
                    model.dispatch(StorageEvent::SubmitFailed(format!("Refresh failed: {err}")));
                }
            },
            Err(err) => {
                error!("Transaction not mined {err:?}");
                model.dispatch(StorageEvent::SubmitFailed(format!("Transaction failed: {err}")));
            }
        },
        Err(err) => {
            error!("Transaction rejected {err:?}");
            model.dispatch(StorageEvent::SubmitFailed(format!("Transaction rejected: {err}")));
        }
    }
}

#[function_component(StoragePanel)]
pub fn storage_panel() -> Html {
    let session = use_context::<UseSession>()
        .expect("No session found. You must wrap your components in a <SessionContextProvider />");
    let model = use_reducer(StorageModel::default);
    let contract = use_state(|| None as Option<StorageContract>);

    {
        let contract = contract.clone();
        let model = model.clone();
        use_effect_with(session.clone(), move |session| {
            if session.is_connected() {
                match storage_contract(session) {
                    Ok(bound) => {
                        let reader = bound.clone();
                        contract.set(Some(bound));
                        // one read pass per proxy (re)construction
                        spawn_local(async move {
                            match reader.getter().call().await {
                                Ok(value) => {
                                    model.dispatch(StorageEvent::DataLoaded(value.to_string()))
                                }
                                Err(err) => error!("Reading stored data failed {err:?}"),
                            }
                        });
                    }
                    Err(err) => error!("Contract not deployed on this network. {err}"),
                }
            }
        });
    }

    let oninput = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            model.dispatch(StorageEvent::DraftChanged(input.value()));
        })
    };

    let onclick = {
        let session = session.clone();
        let model = model.clone();
        let contract = contract.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(contract) = (*contract).clone() else {
                error!("No contract bound, ignoring submission");
                return;
            };
            match parse_value(&model.draft) {
                Ok(value) => {
                    model.dispatch(StorageEvent::SubmitStarted);
                    spawn_local(submit_value(contract, session.account(), value, model.clone()));
                }
                Err(err) => {
                    error!("{err}");
                    model.dispatch(StorageEvent::SubmitFailed(err.to_string()));
                }
            }
        })
    };

    html! {
        <div class="app">
            <h1>{format!("Contract Data : {}", model.data)}</h1>
            <input type="text" value={model.draft.clone()} {oninput} />
            <button {onclick} disabled={model.pending}>{"Change data"}</button>
            if let Some(status) = &model.status {
                <p class="error">{status.clone()}</p>
            }
        </div>
    }
}

use crate::{artifact::ContractArtifact, DappError, DappSession, SessionBuilder};
use ethers::{providers::Provider, types::Address};
use log::error;
use yew::{
    function_component, html, platform::spawn_local, prelude::*, Children, ContextProvider, Html,
    Properties,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &Props) -> Html {
    let session = use_session();

    html! {
        <ContextProvider<UseSession> context={session}>
            {for props.children.iter()}
        </ContextProvider<UseSession>>
    }
}

#[derive(Clone, Debug)]
pub struct UseSession {
    pub session: UseStateHandle<DappSession>,
    pub connected: UseStateHandle<bool>,
}

impl PartialEq for UseSession {
    fn eq(&self, other: &Self) -> bool {
        self.connected == other.connected
            && (*self.session).network_id() == (*other.session).network_id()
    }
}

impl UseSession {
    /// Checks if the session reached its node
    pub fn is_connected(&self) -> bool {
        *self.connected
    }

    /// Gets current network id of the connected node
    pub fn network_id(&self) -> u64 {
        (*self.session).network_id().unwrap_or(0)
    }

    /// Gets the account transactions are attributed to
    pub fn account(&self) -> Address {
        (*self.session).account()
    }

    /// Gets a provider you can feed to ethers constructors to start interaction
    /// with contracts on this session's network
    pub fn provider(&self) -> Provider<DappSession> {
        (*self.session).provider()
    }

    /// Resolves a contract artifact's deployed address for this session's network
    pub fn deployment(&self, artifact: &ContractArtifact) -> Result<Address, DappError> {
        (*self.session).deployment(artifact)
    }
}

#[hook]
pub fn use_session() -> UseSession {
    let mut builder = SessionBuilder::new();

    if let Some(rpc_url) = std::option_env!("RPC_URL") {
        builder.rpc_node(rpc_url);
    }
    let connected = use_state(move || false);
    let session = use_state(move || builder.build());

    let con = connected.clone();
    let sess = session.clone();

    yew_hooks::use_effect_once(move || {
        spawn_local(async move {
            let mut s = (*sess).clone();
            match s.connect().await {
                Ok(()) => {
                    sess.set(s);
                    con.set(true);
                }
                Err(err) => error!("Failed to reach the node: {err}"),
            }
        });
        || {}
    });

    UseSession { session, connected }
}

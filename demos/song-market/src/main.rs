use dapp_web::yew::SessionContextProvider;
use log::Level;
use song_market_app::views::market::MarketPanel;
use yew::prelude::*;

#[function_component]
fn App() -> Html {
    html! {
        <SessionContextProvider>
            <MarketPanel />
        </SessionContextProvider>
    }
}

fn main() {
    _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

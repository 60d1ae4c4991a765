use dapp_web::yew::SessionContextProvider;
use log::Level;
use simple_storage_app::views::storage_panel::StoragePanel;
use yew::prelude::*;

#[function_component]
fn App() -> Html {
    html! {
        <SessionContextProvider>
            <StoragePanel />
        </SessionContextProvider>
    }
}

fn main() {
    _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

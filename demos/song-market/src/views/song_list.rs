use crate::{contract::Song, state::EMPTY_LIST_NOTE};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub songs: Vec<Song>,
    pub disabled: bool,
    pub on_rent: Callback<usize>,
}

#[function_component(SongList)]
pub fn song_list(props: &Props) -> Html {
    if props.songs.is_empty() {
        return html! { <p class="empty">{EMPTY_LIST_NOTE}</p> };
    }

    html! {
        <ul class="songs">
            { for props.songs.iter().enumerate().map(|(index, song)| {
                let on_rent = props.on_rent.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_rent.emit(index));
                html! {
                    <li key={index}>
                        <span class="title">{song.title.clone()}</span>
                        <a href={format!("https://ipfs.io/ipfs/{}", song.ipfs_hash)}>
                            {song.ipfs_hash.clone()}
                        </a>
                        <span class="price">{format!("{} wei", song.rent_price)}</span>
                        <button {onclick} disabled={props.disabled}>{"Rent"}</button>
                    </li>
                }
            })}
        </ul>
    }
}

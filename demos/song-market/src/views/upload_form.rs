use crate::state::{UploadDraft, UploadRequest};
use log::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub disabled: bool,
    pub on_upload: Callback<UploadRequest>,
}

#[function_component(UploadForm)]
pub fn upload_form(props: &Props) -> Html {
    let draft = use_state(UploadDraft::default);
    let note = use_state(|| None as Option<String>);

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.title = input.value();
            draft.set(next);
        })
    };

    let on_hash = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.ipfs_hash = input.value();
            draft.set(next);
        })
    };

    let on_price = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.rent_price = input.value();
            draft.set(next);
        })
    };

    let onclick = {
        let draft = draft.clone();
        let note = note.clone();
        let on_upload = props.on_upload.clone();
        Callback::from(move |_: MouseEvent| match draft.validate() {
            Ok(request) => {
                note.set(None);
                draft.set(UploadDraft::default());
                on_upload.emit(request);
            }
            Err(err) => {
                error!("{err}");
                note.set(Some(err.to_string()));
            }
        })
    };

    html! {
        <div class="upload">
            <input type="text" placeholder="Title" value={draft.title.clone()} oninput={on_title} />
            <input type="text" placeholder="IPFS hash" value={draft.ipfs_hash.clone()} oninput={on_hash} />
            <input type="text" placeholder="Rent price (wei)" value={draft.rent_price.clone()} oninput={on_price} />
            <button {onclick} disabled={props.disabled}>{"Upload song"}</button>
            if let Some(note) = &*note {
                <p class="error">{note.clone()}</p>
            }
        </div>
    }
}

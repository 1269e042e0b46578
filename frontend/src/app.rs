use cardpager_common::sample::{self, Record};

use crate::component::paginator::Paginator;
use crate::component::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: PagerConfig,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    let config = &props.config;
    let records = use_memo(|_| sample::records(), ());
    let template: fn(&Record) -> String = sample::card;

    html! {
        <main>
            <div class="label">{ "Cards: " }{ records.len() }</div>
            <Paginator<Record>
                items={records}
                {template}
                page_size={config.page_size}
                item_id={config.item_container.clone()}
                button_id={config.button_container.clone()}
            />
        </main>
    }
}

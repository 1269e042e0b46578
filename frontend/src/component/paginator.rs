use tracing::{debug, error};
use web_sys::Element;

use super::prelude::*;
use crate::surface::DomSurface;

#[derive(Properties, PartialEq)]
pub struct Props<T: PartialEq> {
    pub items: Rc<Vec<T>>,
    /// Item markup
    pub template: fn(&T) -> String,
    /// Raw configured page size, checked on render
    pub page_size: i64,

    #[prop_or("cards".into())]
    pub item_id: AttrValue,
    #[prop_or("pages".into())]
    pub button_id: AttrValue,
}

/// Mount a DOM element as render surface.
/// Missing element turns into no-op surface
fn mount(node: &NodeRef, name: &str) -> Option<DomSurface> {
    let surface = node.cast::<Element>().map(DomSurface::new);
    if surface.is_none() {
        debug!(name, "container is not mounted, writes will be skipped");
    }
    surface
}

/// Item list with page buttons.
///
/// Yew owns only the two containers, their content is written by
/// the pagination session whenever a page button is clicked.
#[function_component]
pub fn Paginator<T>(props: &Props<T>) -> Html
where T: PartialEq + Clone + 'static {
    let item_ref = use_node_ref();
    let button_ref = use_node_ref();
    let failure = use_state(|| None::<String>);
    // Session must outlive the effect, buttons only hold weak refs to it
    let session = use_mut_ref(|| None::<Session<T, Option<DomSurface>>>);

    {
        let item_ref = item_ref.clone();
        let button_ref = button_ref.clone();
        let failure = failure.clone();
        use_effect_with_deps(move |(items, template, page_size)| {
            let new = Session::new(
                (**items).clone(),
                *template,
                *page_size,
                mount(&item_ref, "items"),
                mount(&button_ref, "buttons"),
            );

            match new.paginate() {
                Ok(()) => failure.set(None),
                Err(e) => {
                    error!(%e, "pagination failed");
                    failure.set(Some(e.to_string()));
                }
            }

            *session.borrow_mut() = Some(new);
            || ()
        }, (props.items.clone(), props.template, props.page_size));
    }

    html! {
        <div class="paginator">
            if let Some(msg) = &*failure {
                <div class="error">{ msg }</div>
            }
            <div id={props.item_id.clone()} class="card-list" ref={item_ref} />
            <div id={props.button_id.clone()} class="page-buttons" ref={button_ref} />
        </div>
    }
}

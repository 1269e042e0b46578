use std::{cell::RefCell, rc::Rc};

use cardpager_common::{Activate, Surface};
use gloo::{events::EventListener, utils::document};
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlTemplateElement};

/// Attribute that maps a clicked element to its handler
const CONTROL_ATTR: &str = "data-control";

/// Render surface on top of a DOM element.
///
/// Clicks are caught by a single listener on the element itself,
/// handlers live in a registry that is reset on every `clear`.
#[derive(Clone)]
pub struct DomSurface {
    element: Element,
    controls: Rc<RefCell<Vec<Activate>>>,
    _listener: Rc<EventListener>,
}

impl DomSurface {
    pub fn new(element: Element) -> Self {
        let controls: Rc<RefCell<Vec<Activate>>> = Default::default();

        let listener = {
            let controls = controls.clone();
            EventListener::new(&element, "click", move |ev| {
                let Some(idx) = control_index(ev) else {
                    return
                };
                // Registry is released before the call, handler re-renders
                let handler = controls.borrow().get(idx).cloned();
                if let Some(handler) = handler {
                    handler();
                }
            })
        };

        Self {
            element,
            controls,
            _listener: Rc::new(listener),
        }
    }

    fn append_template(&self, markup: &str, control: usize) -> Result<(), wasm_bindgen::JsValue> {
        let template: HtmlTemplateElement = document()
            .create_element("template")?
            .dyn_into()?;
        template.set_inner_html(markup);

        let fragment = template.content();
        if let Some(el) = fragment.first_element_child() {
            el.set_attribute(CONTROL_ATTR, &control.to_string())?;
        }
        self.element.append_child(&fragment)?;
        Ok(())
    }
}

/// Find registry index of the clicked control
fn control_index(ev: &Event) -> Option<usize> {
    let target: Element = ev.target()?.dyn_into().ok()?;
    let control = target.closest(&format!("[{CONTROL_ATTR}]")).ok()??;
    control.get_attribute(CONTROL_ATTR)?.parse().ok()
}

impl Surface for DomSurface {
    fn clear(&self) {
        self.element.set_inner_html("");
        self.controls.borrow_mut().clear();
    }

    fn append_markup(&self, markup: &str) {
        if let Err(e) = self.element.insert_adjacent_html("beforeend", markup) {
            error!(?e, "failed to append markup");
        }
    }

    fn append_control(&self, markup: &str, on_activate: Activate) {
        let idx = {
            let mut controls = self.controls.borrow_mut();
            controls.push(on_activate);
            controls.len() - 1
        };

        if let Err(e) = self.append_template(markup, idx) {
            error!(?e, "failed to append control");
        }
    }
}

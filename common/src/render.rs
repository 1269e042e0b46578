use std::rc::Rc;

use crate::{
    markup,
    pages::{clamp_page, page_window, WindowEntry},
    surface::Surface,
};

/// Replace surface content with rendered `items`
pub fn render_items<T, S, F>(surface: &S, items: &[T], template: F)
where
    S: Surface + ?Sized,
    F: Fn(&T) -> String,
{
    surface.clear();
    for item in items {
        surface.append_markup(&template(item));
    }
}

/// Replace surface content with page selector controls.
///
/// Every button calls `on_select` with its page once per activation.
pub fn render_buttons<S>(
    surface: &S,
    total_pages: u32,
    current: u32,
    on_select: Rc<dyn Fn(u32)>,
) where
    S: Surface + ?Sized,
{
    let current = clamp_page(current, total_pages);
    surface.clear();
    for &entry in page_window(current, total_pages).iter() {
        match (entry.page(), markup::button(entry, current)) {
            (Some(page), Some(button)) => {
                let on_select = on_select.clone();
                surface.append_control(&button, Rc::new(move || on_select(page)));
            }
            _ => {
                debug_assert_eq!(entry, WindowEntry::Ellipsis);
                surface.append_markup(markup::ELLIPSIS);
            }
        }
    }
}

//! Mount points renderers write markup into
use std::{cell::RefCell, rc::Rc};

/// Handler invoked when an interactive control is activated
pub type Activate = Rc<dyn Fn()>;

/// Mountable surface.
///
/// Implementors are shared handles (like DOM element handles),
/// so every method takes `&self`.
pub trait Surface {
    /// Remove all content
    fn clear(&self);
    /// Append markup to the end of content
    fn append_markup(&self, markup: &str);
    /// Append interactive markup. `on_activate` must be invoked once per activation
    fn append_control(&self, markup: &str, on_activate: Activate);
}

/// Missing mount point: writes are silently skipped
impl<S: Surface> Surface for Option<S> {
    fn clear(&self) {
        if let Some(s) = self {
            s.clear()
        }
    }

    fn append_markup(&self, markup: &str) {
        if let Some(s) = self {
            s.append_markup(markup)
        }
    }

    fn append_control(&self, markup: &str, on_activate: Activate) {
        if let Some(s) = self {
            s.append_control(markup, on_activate)
        }
    }
}

/// Headless surface, keeps everything in memory
#[derive(Clone, Default)]
pub struct MemorySurface(Rc<RefCell<MemoryContent>>);

#[derive(Default)]
struct MemoryContent {
    fragments: Vec<String>,
    /// (fragment index, handler)
    controls: Vec<(usize, Activate)>,
    clears: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appended fragments, in order
    pub fn fragments(&self) -> Vec<String> {
        self.0.borrow().fragments.clone()
    }

    /// Whole content as a single string
    pub fn text(&self) -> String {
        self.0.borrow().fragments.concat()
    }

    /// How many times surface was cleared
    pub fn clear_count(&self) -> usize {
        self.0.borrow().clears
    }

    pub fn control_count(&self) -> usize {
        self.0.borrow().controls.len()
    }

    /// Activate the first control whose markup contains `needle`.
    ///
    /// Returns `false` if there is no such control.
    pub fn activate(&self, needle: &str) -> bool {
        // Handler is taken out before the call, it may write to this surface
        let handler = {
            let content = self.0.borrow();
            content.controls
                .iter()
                .find(|(idx, _)| content.fragments[*idx].contains(needle))
                .map(|(_, handler)| handler.clone())
        };

        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Activate page button with `data-page` equal to `page`
    pub fn activate_page(&self, page: u32) -> bool {
        self.activate(&format!(r#"data-page="{page}""#))
    }
}

impl Surface for MemorySurface {
    fn clear(&self) {
        let mut content = self.0.borrow_mut();
        content.fragments.clear();
        content.controls.clear();
        content.clears += 1;
    }

    fn append_markup(&self, markup: &str) {
        self.0.borrow_mut().fragments.push(markup.to_string());
    }

    fn append_control(&self, markup: &str, on_activate: Activate) {
        let mut content = self.0.borrow_mut();
        let idx = content.fragments.len();
        content.fragments.push(markup.to_string());
        content.controls.push((idx, on_activate));
    }
}

impl std::fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let content = self.0.borrow();
        f.debug_struct("MemorySurface")
            .field("fragments", &content.fragments)
            .field("controls", &content.controls.len())
            .field("clears", &content.clears)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn missing_surface_is_noop() {
        let missing: Option<MemorySurface> = None;
        missing.clear();
        missing.append_markup("<p>lost</p>");
        missing.append_control("<button>x</button>", Rc::new(|| {}));
    }

    #[test]
    fn memory_surface_records_and_activates() {
        let surface = MemorySurface::new();
        let hits = Rc::new(Cell::new(0));

        surface.append_markup("<p>a</p>");
        {
            let hits = hits.clone();
            surface.append_control(r#"<button data-page="2">2</button>"#, Rc::new(move || {
                hits.set(hits.get() + 1)
            }));
        }

        assert_eq!(surface.text(), r#"<p>a</p><button data-page="2">2</button>"#);
        assert_eq!(surface.control_count(), 1);
        assert!(surface.activate_page(2));
        assert!(!surface.activate_page(3));
        assert_eq!(hits.get(), 1);

        surface.clear();
        assert_eq!(surface.text(), "");
        assert_eq!(surface.clear_count(), 1);
        assert!(!surface.activate_page(2));
    }
}

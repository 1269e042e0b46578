//! Pagination session: state plus the render cycle that drives it
use std::{cell::RefCell, rc::{Rc, Weak}};

use tracing::{debug, error, warn};

use crate::{
    config::PagerConfig,
    error::ConfigError,
    pages::{clamp_page, page_slice, PageSize},
    render::{render_buttons, render_items},
    surface::Surface,
};

/// Produces markup for a single item
pub type ItemTemplate<T> = Box<dyn Fn(&T) -> String>;

/// Session state
pub struct Pager<T, S> {
    items: Vec<T>,
    template: ItemTemplate<T>,
    /// Raw configured value, checked on every render cycle
    page_size: i64,
    /// Always in `1..=total_pages`
    current: u32,
    item_surface: S,
    button_surface: S,
    renders: u64,
}

/// Shared handle to a pagination session.
///
/// Page buttons hold weak references to the session,
/// so they become inert once every handle is dropped.
pub struct Session<T, S>(Rc<RefCell<Pager<T, S>>>);

impl<T, S> Clone for Session<T, S> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: 'static, S: Surface + 'static> Session<T, S> {
    /// Create session on page 1. Nothing is rendered until [`Session::paginate`]
    pub fn new<F>(
        items: Vec<T>,
        template: F,
        page_size: i64,
        item_surface: S,
        button_surface: S,
    ) -> Self
    where F: Fn(&T) -> String + 'static {
        Self(Rc::new(RefCell::new(Pager {
            items,
            template: Box::new(template),
            page_size,
            current: 1,
            item_surface,
            button_surface,
            renders: 0,
        })))
    }

    pub fn from_config<F>(
        items: Vec<T>,
        template: F,
        config: &PagerConfig,
        item_surface: S,
        button_surface: S,
    ) -> Self
    where F: Fn(&T) -> String + 'static {
        Self::new(items, template, config.page_size, item_surface, button_surface)
    }

    pub fn current_page(&self) -> u32 {
        self.0.borrow().current
    }

    pub fn total_pages(&self) -> Result<u32, ConfigError> {
        let pager = self.0.borrow();
        Ok(PageSize::new(pager.page_size)?.total_pages(pager.items.len()))
    }

    /// Count of completed render cycles
    pub fn render_count(&self) -> u64 {
        self.0.borrow().renders
    }

    /// Render current page items and page buttons.
    ///
    /// Invalid page size is reported before anything is written.
    pub fn paginate(&self) -> Result<(), ConfigError> {
        {
            let pager = self.0.borrow();
            let page_size = PageSize::new(pager.page_size)?;
            let total = page_size.total_pages(pager.items.len());
            let current = clamp_page(pager.current, total);
            let range = page_slice(current, pager.page_size, pager.items.len())?;

            debug!(current, total, start = range.start, end = range.end, "rendering page");
            render_items(&pager.item_surface, &pager.items[range], &pager.template);

            render_buttons(&pager.button_surface, total, current, self.on_select());
        }

        self.0.borrow_mut().renders += 1;
        Ok(())
    }

    /// Switch to `page` and render once.
    /// Page is clamped into the valid range
    pub fn select(&self, page: u32) -> Result<(), ConfigError> {
        {
            let mut pager = self.0.borrow_mut();
            let total = PageSize::new(pager.page_size)?.total_pages(pager.items.len());
            let clamped = clamp_page(page, total);
            if clamped != page {
                warn!(page, total, "selected page is out of range");
            }
            pager.current = clamped;
        }
        self.paginate()
    }

    fn on_select(&self) -> Rc<dyn Fn(u32)> {
        let pager: Weak<_> = Rc::downgrade(&self.0);
        Rc::new(move |page: u32| {
            let Some(pager) = pager.upgrade() else {
                debug!(page, "session is gone, ignoring selection");
                return;
            };
            if let Err(e) = Session(pager).select(page) {
                error!(?e, page, "failed to select page");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample, surface::MemorySurface};

    fn sample_session(page_size: i64) -> (Session<sample::Record, MemorySurface>, MemorySurface, MemorySurface) {
        let items = MemorySurface::new();
        let buttons = MemorySurface::new();
        let session = Session::new(
            sample::records(),
            sample::card,
            page_size,
            items.clone(),
            buttons.clone(),
        );
        (session, items, buttons)
    }

    #[test]
    fn initial_render() {
        let (session, items, buttons) = sample_session(6);
        session.paginate().unwrap();

        assert_eq!(session.current_page(), 1);
        assert_eq!(session.total_pages(), Ok(7));
        assert_eq!(items.fragments().len(), 6);
        assert!(items.text().contains("Lighthouse #1"));
        assert!(!items.text().contains("#7<"));
        // first, 2, 3, 4, ellipsis, last
        assert_eq!(buttons.fragments().len(), 6);
        assert_eq!(buttons.control_count(), 5);
        assert!(buttons.fragments()[0].contains("active"));
    }

    #[test]
    fn select_renders_once() {
        let (session, items, buttons) = sample_session(6);
        session.paginate().unwrap();

        assert!(buttons.activate_page(4));
        assert_eq!(session.current_page(), 4);
        assert_eq!(session.render_count(), 2);
        assert_eq!(items.clear_count(), 2);
        assert_eq!(buttons.clear_count(), 2);

        let text = items.text();
        assert!(text.contains("Harbor #19<"));
        assert!(text.contains("Windmill #21<"));
        assert!(!text.contains("Harbor #26<"));
        assert!(buttons.text().contains(r#"data-page="4" aria-current="page""#));

        assert!(buttons.activate_page(7));
        assert_eq!(session.current_page(), 7);
        assert_eq!(items.fragments().len(), 6);
        assert_eq!(session.render_count(), 3);
    }

    #[test]
    fn repeated_paginate_is_idempotent() {
        let (session, items, buttons) = sample_session(5);
        session.select(3).unwrap();
        let before = (items.text(), buttons.text());
        session.paginate().unwrap();
        assert_eq!(before, (items.text(), buttons.text()));
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let (session, _, _) = sample_session(10);
        session.select(99).unwrap();
        assert_eq!(session.current_page(), 5);
        session.select(0).unwrap();
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn bad_page_size_renders_nothing() {
        for page_size in [0, -1] {
            let (session, items, buttons) = sample_session(page_size);
            assert_eq!(session.paginate(), Err(ConfigError::PageSize(page_size)));
            assert_eq!(items.clear_count(), 0);
            assert_eq!(buttons.clear_count(), 0);
            assert_eq!(session.render_count(), 0);
        }
    }

    #[test]
    fn empty_dataset_has_single_page() {
        let items = MemorySurface::new();
        let buttons = MemorySurface::new();
        let session = Session::new(Vec::<u32>::new(), |n| n.to_string(), 4, items.clone(), buttons.clone());
        session.paginate().unwrap();

        assert_eq!(items.text(), "");
        assert_eq!(buttons.control_count(), 1);
        assert!(buttons.activate_page(1));
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn sessions_are_independent() {
        let (first, first_items, first_buttons) = sample_session(6);
        let (second, second_items, _) = sample_session(6);
        first.paginate().unwrap();
        second.paginate().unwrap();

        first_buttons.activate_page(3);
        assert_eq!(first.current_page(), 3);
        assert_eq!(second.current_page(), 1);
        assert_ne!(first_items.text(), second_items.text());
    }

    #[test]
    fn dropped_session_ignores_clicks() {
        let (session, _, buttons) = sample_session(6);
        session.paginate().unwrap();
        drop(session);

        assert!(buttons.activate_page(2));
        assert_eq!(buttons.clear_count(), 1);
    }

    #[test]
    fn missing_containers_are_skipped() {
        let session = Session::new(
            sample::records(),
            sample::card,
            6,
            None::<MemorySurface>,
            None,
        );
        session.paginate().unwrap();
        session.select(2).unwrap();
        assert_eq!(session.render_count(), 2);
    }
}

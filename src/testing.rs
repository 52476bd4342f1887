//! Testing utilities for voxpick
//!
//! Shared catalog fixtures and a `CallLog` that records host callbacks so
//! tests can count commits and open/close requests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::Item;
use std::cell::RefCell;
use std::rc::Rc;

/// The two-voice catalog used by the picker scenarios
#[must_use]
pub fn rachel_and_adam() -> Vec<Item> {
    vec![Item::new("v1", "Rachel"), Item::new("v2", "Adam")]
}

/// A larger catalog with metadata, in a fixed order
#[must_use]
pub fn sample_voices() -> Vec<Item> {
    vec![
        Item::new("v1", "Rachel")
            .with_tag("accent", "american")
            .with_tag("gender", "female")
            .with_description("Calm young adult voice for narration")
            .with_preview("previews/rachel.mp3"),
        Item::new("v2", "Adam")
            .with_tag("accent", "american")
            .with_tag("gender", "male")
            .with_description("Deep middle-aged voice"),
        Item::new("v3", "Antoni").with_tag("accent", "american"),
        Item::new("v4", "Bella").with_tag("use_case", "audiobook"),
        Item::new("v5", "Domi"),
        Item::new("v6", "Elli").with_preview("previews/elli.mp3"),
        Item::new("v7", "Josh Brown"),
    ]
}

/// Ids of a slice of item references
#[must_use]
pub fn ids<'a>(items: &[&'a Item]) -> Vec<&'a str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

/// Records every host callback invocation
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    values: Rc<RefCell<Vec<String>>>,
    open_requests: Rc<RefCell<Vec<bool>>>,
}

impl CallLog {
    /// Closure suitable for `on_value_change`
    pub fn value_sink(&self) -> impl FnMut(&str) + 'static {
        let values = Rc::clone(&self.values);
        move |id| values.borrow_mut().push(id.to_string())
    }

    /// Closure suitable for `on_open_change`
    pub fn open_sink(&self) -> impl FnMut(bool) + 'static {
        let requests = Rc::clone(&self.open_requests);
        move |open| requests.borrow_mut().push(open)
    }

    /// Committed ids, in order
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.values.borrow().clone()
    }

    /// Open/close requests sent to the host, in order
    #[must_use]
    pub fn open_requests(&self) -> Vec<bool> {
        self.open_requests.borrow().clone()
    }
}

/// Rendered buffer contents, one line per row
#[must_use]
pub fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width.max(1))
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

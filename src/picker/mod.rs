//! Searchable single-select picker
//!
//! A headless state machine that filters a host catalog by free-text query
//! and commits exactly one selection back to the host.
//!
//! # Ownership
//!
//! | State          | Owner                                   |
//! |----------------|-----------------------------------------|
//! | catalog        | host, passed in on every call           |
//! | selected value | host, passed in on every call           |
//! | open flag      | picker (uncontrolled) or host (controlled) |
//! | query          | picker                                  |
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use voxpick::catalog::Item;
//! use voxpick::picker::{Picker, PickerEvent};
//!
//! let items = vec![Item::new("v1", "Rachel"), Item::new("v2", "Adam")];
//! let value = Rc::new(RefCell::new(None::<String>));
//!
//! let sink = Rc::clone(&value);
//! let mut picker = Picker::builder()
//!     .on_value_change(move |id| *sink.borrow_mut() = Some(id.to_string()))
//!     .build()
//!     .unwrap();
//!
//! picker.handle(PickerEvent::ActivateTrigger, &items);
//! picker.handle(PickerEvent::Input('a'), &items);
//! picker.handle(PickerEvent::Input('d'), &items);
//! picker.handle(PickerEvent::Commit, &items);
//!
//! assert_eq!(value.borrow().as_deref(), Some("v2"));
//! assert!(!picker.is_open());
//! assert_eq!(picker.trigger_label(&items, value.borrow().as_deref()), "Adam");
//! ```

mod error;
mod events;
mod filter;
mod open_state;
mod state;
mod view;

pub use error::{PickerError, Result};
pub use events::{EventOutcome, PickerEvent};
pub use filter::{Filtered, MatchMode, filter};
pub use open_state::{OpenChange, OpenState};
pub use state::{DEFAULT_PLACEHOLDER, Picker, PickerBuilder, QueryRetention, ValueChange};
pub use view::{NO_RESULTS_MESSAGE, PickerView};

//! Whimsical excuse generation.
//!
//! [`generator`] turns a situation and a reason into excuse text;
//! [`store`] keeps favorites in a key-value store. The rest is the
//! terminal front end.

pub mod banner;
pub mod category;
pub mod commands;
pub mod config;
pub mod consts;
pub mod excuse;
pub mod generator;
pub mod logging;
pub mod render;
pub mod session;
pub mod spinner;
pub mod store;
pub mod templates;

pub use category::{Category, categorize};
pub use excuse::{Excuse, ValidationError, validate_request};
pub use generator::{ExcuseGenerator, generate_excuse, generate_multiple_excuses};
pub use store::{ExcuseStore, KeyValueStore};

//! Default bus instance.

use std::rc::Rc;

use super::MessageBus;
use crate::config::BusConfig;

thread_local! {
    static DEFAULT_BUS: Rc<MessageBus> = Rc::new(MessageBus::from_config(BusConfig::default()));
}

/// The default bus, shared by code that does not build its own.
///
/// Created on first access with [`BusConfig::default`] (immediate delivery,
/// not verbose) and never torn down. Its configuration cannot change
/// afterwards. The bus is single-threaded, so each thread that touches the
/// default gets its own instance.
///
/// ```
/// use std::rc::Rc;
///
/// let a = courier::default_bus();
/// let b = courier::default_bus();
/// assert!(Rc::ptr_eq(&a, &b));
/// assert!(a.is_immediate());
/// ```
pub fn default_bus() -> Rc<MessageBus> {
    DEFAULT_BUS.with(Rc::clone)
}

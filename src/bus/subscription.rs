//! Scoped subscriptions.

use super::handler::Handler;
use super::MessageBus;
use crate::message::Message;

/// Guard returned by [`MessageBus::subscribe`]. Dropping it removes the
/// handler from the bus.
///
/// ```
/// use courier::{Handler, Message, MessageBus};
///
/// struct Ping;
/// impl Message for Ping {}
///
/// let bus = MessageBus::new(true, false);
/// let handler = Handler::new(|_: &Ping| {});
/// {
///     let _subscription = bus.subscribe(&handler);
///     assert!(bus.is_listener(&handler));
/// }
/// assert!(!bus.is_listener(&handler));
/// ```
#[must_use = "dropping a Subscription immediately removes its handler"]
pub struct Subscription<'a, T: Message> {
    bus: &'a MessageBus,
    handler: Handler<T>,
    active: bool,
}

impl<'a, T: Message> Subscription<'a, T> {
    pub(crate) fn new(bus: &'a MessageBus, handler: Handler<T>, active: bool) -> Self {
        Self {
            bus,
            handler,
            active,
        }
    }

    pub fn handler(&self) -> &Handler<T> {
        &self.handler
    }

    /// Whether dropping this guard will remove a registration.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remove the handler now. Returns `false` if this guard did not own a
    /// registration or it was already removed through the bus.
    pub fn unsubscribe(mut self) -> bool {
        self.release()
    }

    /// Give up the guard and leave the handler registered.
    pub fn detach(mut self) -> Handler<T> {
        self.active = false;
        self.handler.clone()
    }

    fn release(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.bus.remove_listener(&self.handler)
    }
}

impl<T: Message> Drop for Subscription<'_, T> {
    fn drop(&mut self) {
        self.release();
    }
}

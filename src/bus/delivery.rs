//! Delivery strategies. A bus picks one at construction and keeps it.

use super::MessageBus;
use crate::config::DeliveryMode;
use crate::message::AnyMessage;

/// What `send` does with a message.
pub(crate) trait Delivery {
    fn dispatch(&self, bus: &MessageBus, message: Box<dyn AnyMessage>);
}

/// Runs every handler before `send` returns.
struct Immediate;

impl Delivery for Immediate {
    fn dispatch(&self, bus: &MessageBus, message: Box<dyn AnyMessage>) {
        bus.deliver(message.as_ref());
    }
}

/// Appends to the pending queue; handlers run on drain.
struct Queued;

impl Delivery for Queued {
    fn dispatch(&self, bus: &MessageBus, message: Box<dyn AnyMessage>) {
        bus.enqueue(message);
    }
}

pub(crate) fn strategy(mode: DeliveryMode) -> Box<dyn Delivery> {
    match mode {
        DeliveryMode::Immediate => Box::new(Immediate),
        DeliveryMode::Queued => Box::new(Queued),
    }
}

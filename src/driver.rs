//! Driver for queued delivery.
//!
//! A frame loop (game loop, UI tick, poll loop) owns a [`QueueDriver`] and
//! calls [`QueueDriver::tick`] once per iteration. The driver drains its bus
//! completely on every tick. Bound to an immediate bus it has nothing to do,
//! so it disables itself at construction.

use std::rc::Rc;

use crate::bus::{default_bus, MessageBus};

/// Counters accumulated by a [`QueueDriver`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriverStats {
    pub ticks: usize,
    pub messages_delivered: usize,
}

/// Drains a queued [`MessageBus`] once per tick.
///
/// ```
/// use std::rc::Rc;
/// use courier::{Message, MessageBus, QueueDriver};
///
/// struct Frame;
/// impl Message for Frame {}
///
/// let bus = Rc::new(MessageBus::new(false, false));
/// let mut driver = QueueDriver::new(bus.clone());
///
/// bus.send(Frame);
/// assert_eq!(driver.tick(), 1);
/// assert_eq!(bus.pending_len(), 0);
/// ```
#[derive(Debug)]
pub struct QueueDriver {
    bus: Rc<MessageBus>,
    enabled: bool,
    stats: DriverStats,
}

impl QueueDriver {
    pub fn new(bus: Rc<MessageBus>) -> Self {
        let enabled = !bus.is_immediate();
        if !enabled {
            bus.warn("Queue driver is only needed when delivery is queued; disabling driver.");
        }
        Self {
            bus,
            enabled,
            stats: DriverStats::default(),
        }
    }

    /// Driver for the [default bus](crate::default_bus).
    pub fn for_default() -> Self {
        Self::new(default_bus())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn bus(&self) -> &Rc<MessageBus> {
        &self.bus
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    /// Deliver everything pending. Returns the number of messages delivered,
    /// always 0 for a disabled driver.
    pub fn tick(&mut self) -> usize {
        if !self.enabled {
            return 0;
        }
        let delivered = self.bus.deliver_all();
        self.stats.ticks += 1;
        self.stats.messages_delivered += delivered;
        delivered
    }
}

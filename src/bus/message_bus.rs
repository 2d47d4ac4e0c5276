//! The message bus.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::default::default_bus;
use super::delivery::{self, Delivery};
use super::handler::Handler;
use super::queue::PendingQueue;
use super::registry::Registry;
use super::subscription::Subscription;
use crate::config::BusConfig;
use crate::error::BusError;
use crate::log::{Logger, TracingLogger};
use crate::message::{AnyMessage, Message, MessageKind};

/// Typed publish/subscribe bus with immediate or queued delivery.
///
/// Handlers subscribe per message kind and run in registration order. The
/// delivery mode and verbosity are fixed at construction.
///
/// Every method takes `&self`, so handlers may send, subscribe, or
/// unsubscribe on the bus that is currently delivering to them. The bus is
/// single-threaded (`!Send`, `!Sync`).
///
/// ## Immediate delivery
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use courier::{Handler, Message, MessageBus};
///
/// struct Tick;
/// impl Message for Tick {}
///
/// let bus = MessageBus::new(true, false);
/// let ticks = Rc::new(Cell::new(0));
/// let counter = ticks.clone();
/// bus.add_listener(&Handler::new(move |_: &Tick| counter.set(counter.get() + 1)));
///
/// bus.send(Tick);
/// assert_eq!(ticks.get(), 1);
/// ```
///
/// ## Queued delivery
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use courier::{Handler, Message, MessageBus};
///
/// struct Tick;
/// impl Message for Tick {}
///
/// let bus = MessageBus::new(false, false);
/// let ticks = Rc::new(Cell::new(0));
/// let counter = ticks.clone();
/// bus.add_listener(&Handler::new(move |_: &Tick| counter.set(counter.get() + 1)));
///
/// bus.send(Tick);
/// bus.send(Tick);
/// assert_eq!(ticks.get(), 0);
/// assert_eq!(bus.pending_len(), 2);
///
/// assert_eq!(bus.deliver_all(), 2);
/// assert_eq!(ticks.get(), 2);
/// ```
pub struct MessageBus {
    config: BusConfig,
    delivery: Box<dyn Delivery>,
    registry: RefCell<Registry>,
    pending: RefCell<PendingQueue>,
    logger: Box<dyn Logger>,
}

impl MessageBus {
    /// Create a bus that logs through [`TracingLogger`].
    pub fn new(immediate_delivery: bool, verbose: bool) -> Self {
        Self::from_config(BusConfig::new(immediate_delivery, verbose))
    }

    pub fn from_config(config: BusConfig) -> Self {
        Self::with_logger(config, TracingLogger)
    }

    pub fn with_logger(config: BusConfig, logger: impl Logger + 'static) -> Self {
        let bus = Self {
            config,
            delivery: delivery::strategy(config.delivery),
            registry: RefCell::new(Registry::new()),
            pending: RefCell::new(PendingQueue::new()),
            logger: Box::new(logger),
        };

        if config.is_immediate() {
            bus.info(|| "Starting message bus with immediate delivery.".to_string());
        } else {
            bus.info(|| "Starting message bus with queued delivery.".to_string());
        }

        bus
    }

    /// The process default bus, created on first access with
    /// [`BusConfig::default`]. See [`default_bus`](crate::default_bus).
    pub fn default_instance() -> Rc<MessageBus> {
        default_bus()
    }

    pub fn config(&self) -> BusConfig {
        self.config
    }

    pub fn is_immediate(&self) -> bool {
        self.config.is_immediate()
    }

    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Subscribe `handler` to messages of kind `T`.
    ///
    /// Registering the same handler (or a clone of it) twice is rejected with
    /// a warning and leaves the bus unchanged.
    pub fn add_listener<T: Message>(&self, handler: &Handler<T>) {
        self.register(handler);
    }

    /// Unsubscribe `handler`. Returns `false` if it was not registered.
    pub fn remove_listener<T: Message>(&self, handler: &Handler<T>) -> bool {
        let removed = self.registry.borrow_mut().remove(handler.id());
        match removed {
            Some(kind) => {
                self.info(|| format!("Removed listener for: {}", kind));
                true
            }
            None => false,
        }
    }

    pub fn is_listener<T: Message>(&self, handler: &Handler<T>) -> bool {
        self.registry.borrow().contains(handler.id())
    }

    pub fn has_listeners<T: Message>(&self) -> bool {
        self.registry.borrow().has_route(&MessageKind::of::<T>())
    }

    pub fn listener_count<T: Message>(&self) -> usize {
        self.registry.borrow().count(&MessageKind::of::<T>())
    }

    /// Kinds that currently have at least one listener, in no particular order.
    pub fn listened_kinds(&self) -> Vec<MessageKind> {
        self.registry.borrow().kinds()
    }

    /// Subscribe `handler` for as long as the returned guard lives.
    ///
    /// If the handler was already registered the guard is inert: dropping it
    /// leaves the existing registration alone.
    pub fn subscribe<T: Message>(&self, handler: &Handler<T>) -> Subscription<'_, T> {
        let registered = self.register(handler);
        Subscription::new(self, handler.clone(), registered)
    }

    fn register<T: Message>(&self, handler: &Handler<T>) -> bool {
        let kind = MessageKind::of::<T>();
        let inserted = self.registry.borrow_mut().insert(handler);
        if inserted {
            self.info(|| format!("Added listener for: {}", kind));
        } else {
            self.warn(&format!(
                "Listener already registered for {}; ignoring duplicate registration.",
                kind
            ));
        }
        inserted
    }

    // ------------------------------------------------------------------
    // Sending
    // ------------------------------------------------------------------

    /// Send `message` using the bus's delivery mode.
    ///
    /// In immediate mode every handler for the message's kind has run when
    /// this returns, including messages sent by those handlers. In queued
    /// mode the message is appended to the pending queue.
    pub fn send<T: Message>(&self, message: T) {
        self.delivery.dispatch(self, Box::new(message));
    }

    /// Build a `T` from `args` and send it.
    ///
    /// A failed conversion is returned as [`BusError::Construction`] and
    /// nothing is sent.
    pub fn send_with<T, A>(&self, args: A) -> Result<(), BusError>
    where
        T: Message + TryFrom<A>,
        <T as TryFrom<A>>::Error: fmt::Display,
    {
        let message =
            T::try_from(args).map_err(|e| BusError::construction(MessageKind::of::<T>(), e))?;
        self.send(message);
        Ok(())
    }

    /// Deserialize a `T` from a JSON value and send it.
    pub fn send_json<T>(&self, args: serde_json::Value) -> Result<(), BusError>
    where
        T: Message + DeserializeOwned,
    {
        let message: T = serde_json::from_value(args)
            .map_err(|e| BusError::construction(MessageKind::of::<T>(), e))?;
        self.send(message);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queue and delivery
    // ------------------------------------------------------------------

    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.borrow().is_empty()
    }

    /// Kinds of the pending messages, oldest first.
    pub fn pending_kinds(&self) -> Vec<MessageKind> {
        self.pending.borrow().kinds()
    }

    /// Deliver the oldest pending message.
    ///
    /// Fails with [`BusError::EmptyQueue`] when nothing is pending, which is
    /// always the case in immediate mode.
    pub fn deliver_next(&self) -> Result<(), BusError> {
        let message = self.pop_pending().ok_or(BusError::EmptyQueue)?;
        self.deliver(message.as_ref());
        self.info(|| format!("Delivered. Left: {}", self.pending_len()));
        Ok(())
    }

    /// Deliver pending messages until the queue is empty and return how many
    /// were delivered.
    ///
    /// Messages that handlers send during the drain are delivered by the same
    /// call.
    pub fn deliver_all(&self) -> usize {
        let mut delivered = 0;
        while let Some(message) = self.pop_pending() {
            self.deliver(message.as_ref());
            delivered += 1;
        }
        if delivered > 0 {
            self.info(|| format!("Drained {} message(s).", delivered));
        }
        delivered
    }

    pub(crate) fn enqueue(&self, message: Box<dyn AnyMessage>) {
        let pending = {
            let mut queue = self.pending.borrow_mut();
            queue.push(message);
            queue.len()
        };
        self.info(|| format!("Enqueued message. Pending: {}", pending));
    }

    /// Invoke the handlers registered for the message's kind, in order.
    ///
    /// The handler list is copied before the first call and no borrow is held
    /// while handlers run.
    pub(crate) fn deliver(&self, message: &dyn AnyMessage) {
        let kind = message.kind();
        self.info(|| format!("Delivered: {}", kind));

        let handlers = self.registry.borrow().snapshot(&kind);
        for dispatch in handlers {
            dispatch(message);
        }
    }

    fn pop_pending(&self) -> Option<Box<dyn AnyMessage>> {
        self.pending.borrow_mut().pop()
    }

    pub(crate) fn warn(&self, message: &str) {
        self.logger.log_warning(message);
    }

    fn info(&self, line: impl FnOnce() -> String) {
        if self.config.verbose {
            self.logger.log(&line());
        }
    }
}

impl Drop for MessageBus {
    fn drop(&mut self) {
        let undelivered = self.pending.get_mut().len();
        if undelivered > 0 {
            self.warn(&format!(
                "Message bus dropped with {} undelivered message(s).",
                undelivered
            ));
        }
    }
}

impl fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBus")
            .field("config", &self.config)
            .field("listened_kinds", &self.registry.borrow().kinds().len())
            .field("pending", &self.pending.borrow().len())
            .finish_non_exhaustive()
    }
}

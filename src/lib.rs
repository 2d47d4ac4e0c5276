//! # courier
//!
//! A typed, in-process publish/subscribe message bus.
//!
//! Handlers subscribe to a message type; senders hand the bus a value of that
//! type. A bus is built with one of two delivery modes, fixed for its
//! lifetime:
//!
//! - **immediate**: handlers run inside `send`;
//! - **queued**: messages wait in a FIFO until `deliver_next`/`deliver_all`
//!   (usually called by a [`QueueDriver`] from a frame loop).
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use courier::{Handler, Message, MessageBus};
//!
//! struct Greeting(&'static str);
//! impl Message for Greeting {}
//!
//! let bus = MessageBus::new(false, false);
//! let heard = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = heard.clone();
//! let handler = Handler::new(move |g: &Greeting| sink.borrow_mut().push(g.0));
//! bus.add_listener(&handler);
//!
//! bus.send(Greeting("hello"));
//! bus.send(Greeting("world"));
//! assert!(heard.borrow().is_empty());
//!
//! bus.deliver_all();
//! assert_eq!(*heard.borrow(), vec!["hello", "world"]);
//! ```

pub mod bus;
pub mod config;
pub mod driver;
mod error;
pub mod log;
pub mod message;

pub use bus::{default_bus, Handler, HandlerId, MessageBus, Subscription};
pub use config::{BusConfig, DeliveryMode};
pub use driver::{DriverStats, QueueDriver};
pub use error::BusError;
pub use message::{AnyMessage, Message, MessageKind};

// Re-export the derive macro under the trait's name
#[cfg(feature = "derive")]
pub use courier_macros::Message;

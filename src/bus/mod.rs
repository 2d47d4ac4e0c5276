//! Message bus - typed publish/subscribe with immediate or queued delivery.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        MessageBus                            │
//! │  - add_listener / remove_listener / is_listener              │
//! │  - send / send_with / send_json                              │
//! │  - deliver_next / deliver_all                                │
//! └─────────────────────────────────────────────────────────────┘
//!          │ send                              │ deliver
//!          ▼                                   ▼
//! ┌─────────────────────┐          ┌───────────────────────────┐
//! │  Delivery (fixed)   │          │         Registry          │
//! │  Immediate ─────────┼─────────►│ kind → [dispatch, ...]    │
//! │  Queued ──┐         │          │ handler → dispatch        │
//! └───────────┼─────────┘          └───────────────────────────┘
//!             ▼                                ▲
//!     ┌───────────────┐   deliver_next/all     │
//!     │ PendingQueue  │────────────────────────┘
//!     │    (FIFO)     │
//!     └───────────────┘
//! ```
//!
//! ## Re-entrancy
//!
//! Handlers receive `&T` and may hold an `Rc<MessageBus>`. While a handler
//! runs the bus holds no internal borrow, so it may:
//! - `send` again: delivered recursively in immediate mode, or appended to
//!   the queue and picked up by the running `deliver_all`;
//! - add or remove listeners: the current message still goes to the list
//!   captured when its delivery started.
//!
//! Nested immediate sends are not depth-limited. A handler that sends the
//! message kind it handles, unconditionally, recurses until the stack runs out.

mod default;
mod delivery;
mod handler;
mod message_bus;
mod queue;
mod registry;
mod subscription;

pub use default::default_bus;
pub use handler::{Handler, HandlerId};
pub use message_bus::MessageBus;
pub use subscription::Subscription;


use std::cell::RefCell;
use std::rc::Rc;

use courier::{BusConfig, BusError, Handler, MessageBus, MessageKind, QueueDriver};

use messages::{Ping, Pong, Spawn};

type Seen = Rc<RefCell<Vec<String>>>;

fn record_pings(seen: &Seen, tag: &'static str) -> Handler<Ping> {
    let seen = seen.clone();
    Handler::new(move |ping: &Ping| seen.borrow_mut().push(format!("{}:ping{}", tag, ping.seq)))
}

fn record_pongs(seen: &Seen, tag: &'static str) -> Handler<Pong> {
    let seen = seen.clone();
    Handler::new(move |pong: &Pong| seen.borrow_mut().push(format!("{}:pong{}", tag, pong.seq)))
}

// =============================================================================
// Buffering
// =============================================================================

#[test]
fn send_returns_before_any_handler_runs() {
    let bus = MessageBus::from_config(BusConfig::queued());
    let seen: Seen = Rc::default();
    bus.add_listener(&record_pings(&seen, "A"));

    bus.send(Ping { seq: 1 });

    assert!(seen.borrow().is_empty());
    assert_eq!(bus.pending_len(), 1);
    assert!(bus.has_pending());
}

#[test]
fn three_pings_are_delivered_in_order_and_drained() {
    let bus = MessageBus::new(false, false);
    let seen: Seen = Rc::default();
    bus.add_listener(&record_pings(&seen, "A"));

    bus.send(Ping { seq: 1 });
    bus.send(Ping { seq: 2 });
    bus.send(Ping { seq: 3 });
    assert_eq!(bus.pending_len(), 3);

    assert_eq!(bus.deliver_all(), 3);

    assert_eq!(*seen.borrow(), vec!["A:ping1", "A:ping2", "A:ping3"]);
    assert_eq!(bus.pending_len(), 0);
}

#[test]
fn drain_is_fifo_across_kinds() {
    let bus = MessageBus::new(false, false);
    let seen: Seen = Rc::default();
    bus.add_listener(&record_pings(&seen, "A"));
    bus.add_listener(&record_pongs(&seen, "B"));
    bus.add_listener(&record_pings(&seen, "C"));

    bus.send(Ping { seq: 1 });
    bus.send(Pong { seq: 1 });
    bus.send(Ping { seq: 2 });

    assert_eq!(
        bus.pending_kinds(),
        vec![
            MessageKind::of::<Ping>(),
            MessageKind::of::<Pong>(),
            MessageKind::of::<Ping>(),
        ]
    );

    bus.deliver_all();

    assert_eq!(
        *seen.borrow(),
        vec!["A:ping1", "C:ping1", "B:pong1", "A:ping2", "C:ping2"]
    );
}

#[test]
fn listeners_are_resolved_at_delivery_time() {
    let bus = MessageBus::new(false, false);
    let seen: Seen = Rc::default();
    let early = record_pings(&seen, "early");
    bus.add_listener(&early);

    bus.send(Ping { seq: 1 });
    bus.remove_listener(&early);
    bus.add_listener(&record_pings(&seen, "late"));
    bus.deliver_all();

    assert_eq!(*seen.borrow(), vec!["late:ping1"]);
}

#[test]
fn unheard_messages_still_leave_the_queue() {
    let bus = MessageBus::new(false, false);

    bus.send(Pong { seq: 9 });

    assert_eq!(bus.deliver_all(), 1);
    assert!(!bus.has_pending());
}

// =============================================================================
// Single-step delivery
// =============================================================================

#[test]
fn deliver_next_steps_through_the_queue() {
    let bus = MessageBus::new(false, false);
    let seen: Seen = Rc::default();
    bus.add_listener(&record_pings(&seen, "A"));

    bus.send(Ping { seq: 1 });
    bus.send(Ping { seq: 2 });

    bus.deliver_next().unwrap();
    assert_eq!(*seen.borrow(), vec!["A:ping1"]);
    bus.deliver_next().unwrap();
    assert_eq!(*seen.borrow(), vec!["A:ping1", "A:ping2"]);

    assert_eq!(bus.deliver_next(), Err(BusError::EmptyQueue));
    assert_eq!(seen.borrow().len(), 2);
}

// =============================================================================
// Constructed sends
// =============================================================================

#[test]
fn send_with_enqueues_constructed_message() {
    let bus = MessageBus::new(false, false);
    let spawned = Rc::new(RefCell::new(Vec::new()));
    let sink = spawned.clone();
    bus.add_listener(&Handler::new(move |s: &Spawn| {
        sink.borrow_mut().push((s.name.clone(), s.x, s.y))
    }));

    bus.send_with::<Spawn, _>(("orc", 3, 4)).unwrap();
    assert_eq!(bus.pending_len(), 1);

    bus.deliver_all();
    assert_eq!(*spawned.borrow(), vec![("orc".to_string(), 3, 4)]);
}

#[test]
fn send_with_rejects_bad_arguments() {
    let bus = MessageBus::new(false, false);

    let err = bus.send_with::<Spawn, _>(("", 0, 0)).unwrap_err();

    assert_eq!(err.to_string(), "failed to construct message spawn: spawn needs a name");
    assert_eq!(bus.pending_len(), 0);
}

#[test]
fn send_json_builds_from_named_arguments() {
    let bus = MessageBus::new(false, false);

    bus.send_json::<Spawn>(serde_json::json!({ "name": "elf", "x": 1, "y": -2 }))
        .unwrap();
    let err = bus
        .send_json::<Spawn>(serde_json::json!({ "name": "elf" }))
        .unwrap_err();

    match err {
        BusError::Construction { kind, reason } => {
            assert_eq!(kind, MessageKind::of::<Spawn>());
            assert!(reason.contains("missing field"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(bus.pending_len(), 1);
}

// =============================================================================
// Driver
// =============================================================================

#[test]
fn driver_drains_each_frame() {
    let bus = Rc::new(MessageBus::new(false, false));
    let seen: Seen = Rc::default();
    bus.add_listener(&record_pings(&seen, "A"));
    let mut driver = QueueDriver::new(bus.clone());

    for frame in 1..=3 {
        bus.send(Ping { seq: frame });
        bus.send(Ping { seq: frame * 10 });
        assert_eq!(driver.tick(), 2);
    }

    assert_eq!(seen.borrow().len(), 6);
    assert_eq!(driver.stats().ticks, 3);
    assert_eq!(driver.stats().messages_delivered, 6);
}

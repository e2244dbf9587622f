//! Crate-level helpers and behaviour tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::binding::Binding;
use crate::error::Outcome;
use crate::operation::Operation;
use crate::scratchpad::TypeHint;
use crate::thing::Thing;


/// Names of the handlers that ran, in call order.
pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

pub(crate) fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Binding whose handler appends `name` to `log` and returns `outcome`.
pub(crate) fn recording_binding(
    path: &str,
    operation: Operation,
    name: &str,
    log: &CallLog,
    outcome: Outcome,
) -> Binding {
    let calls = Rc::clone(log);
    let name = name.to_owned();
    Binding::new(path, operation, move |_, _| {
        calls.borrow_mut().push(name.clone());
        outcome
    })
}

/// Binding whose handler writes `body` as plain text into the output.
pub(crate) fn text_binding(path: &str, operation: Operation, body: &str) -> Binding {
    let body = body.to_owned();
    Binding::new(path, operation, move |_, output| {
        let Some(pad) = output else {
            return Err(crate::ThingError::General);
        };
        pad.append_str(&body)?;
        pad.set_type_hint(TypeHint::TextPlain);
        Ok(())
    })
}

/// `/led` accepts writes through `write_led` and reads through `read_led`.
pub(crate) fn led_thing(log: &CallLog) -> Thing {
    Thing::new(vec![
        recording_binding("/led", Operation::WriteProperty, "write_led", log, Ok(())),
        recording_binding("/led", Operation::ReadProperty, "read_led", log, Ok(())),
    ])
}

#[test]
fn led_thing_resolves_each_operation_to_its_own_handler() {
    let log = call_log();
    let thing = led_thing(&log);
    thing.write_property("/led", None).expect("write handler");
    thing.read_property("/led", None).expect("read handler");
    assert_eq!(*log.borrow(), ["write_led", "read_led"]);
}

#[test]
fn call_log_records_runtime_handler_names() {
    let log = call_log();
    let thing: Thing = (0..3)
        .map(|index| {
            let name = format!("slot_{index}");
            recording_binding(
                &format!("/slot/{index}"),
                Operation::ReadProperty,
                &name,
                &log,
                Ok(()),
            )
        })
        .collect();
    thing.read_property("/slot/2", None).expect("handler runs");
    thing.read_property("/slot/0", None).expect("handler runs");
    assert_eq!(*log.borrow(), ["slot_2", "slot_0"]);
}

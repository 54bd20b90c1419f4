#![allow(dead_code)]

use zerobasics::config::Config;
use zerobasics::mach::{Event, Runtime};

/// A runtime with a fixed seed holding `script`, already started.
pub fn script(text: &str) -> Runtime {
    let mut runtime = Runtime::with_config(Config::default().with_seed(7));
    runtime.load(text, None);
    runtime.run().unwrap();
    runtime
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Printed output, one line per print event. Errors are printed with a
/// leading `?`, an input request ends the output with its prompt.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    for event in events_n(runtime, cycles) {
        match event {
            Event::Print(text, _) => s.push_str(&format!("{}\n", text)),
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("?{}\n", error));
                }
            }
            Event::Input(prompt) => s.push_str(&prompt.unwrap_or_default()),
            _ => {}
        }
    }
    s
}

pub fn events(runtime: &mut Runtime) -> Vec<Event> {
    events_n(runtime, 5000)
}

/// Every event up to `Stopped` or the first `Input`.
pub fn events_n(runtime: &mut Runtime, cycles: usize) -> Vec<Event> {
    let mut events = vec![];
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Running => {
                if prev_running {
                    panic!("{} execution cycles exceeded", cycles);
                }
            }
            Event::Input(_) => {
                events.push(event);
                break;
            }
            _ => events.push(event.clone()),
        }
        prev_running = matches!(event, Event::Running);
    }
    events
}

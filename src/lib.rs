//! A small terminal disk I/O monitor.
//!
//! Cumulative disk counters are sampled on a collection thread and sent to the
//! main thread, which turns them into rates, filters and formats them, and
//! prints the result.

#![warn(rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod collection;
pub mod constants;
pub mod event;
pub mod options;
pub mod utils {
    pub mod conversion;
    pub mod data_units;
    pub mod logging;
}

use std::{
    io::{stdout, IsTerminal},
    panic::PanicHookInfo,
    sync::{mpsc::Sender, Arc, Condvar, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};

use crossterm::{
    event::{poll, read, Event, KeyEventKind},
    execute,
    style::Print,
    terminal::disable_raw_mode,
};

use collection::{disks::Sampler, DataCollector};
use event::DiskmonEvent;

/// Shared flag used to tell the worker threads to stop.
pub type TerminationLock = Arc<(Mutex<bool>, Condvar)>;

/// Whether we're attached to a terminal we can read keys from and write to.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && stdout().is_terminal()
}

/// Whether termination has been requested. Doesn't block if the lock is busy.
fn is_terminated(termination: &TerminationLock) -> bool {
    termination
        .0
        .try_lock()
        .map(|is_terminated| *is_terminated)
        .unwrap_or(false)
}

/// Tells all threads waiting on `termination` to stop.
pub fn request_termination(termination: &TerminationLock) {
    let (lock, cvar) = &**termination;
    if let Ok(mut is_terminated) = lock.lock() {
        *is_terminated = true;
    }
    cvar.notify_all();
}

/// Based on <https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs>
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let stacktrace = format!("{:?}", backtrace::Backtrace::new());

    let _ = disable_raw_mode();

    // Print stack trace. Must be done after!
    if let Some(location) = panic_info.location() {
        let _ = execute!(
            stdout,
            Print(format!(
                "thread '<unnamed>' panicked at '{msg}', {location}\n\r{stacktrace}",
            )),
        );
    }
}

/// Spawns a thread that forwards key presses to the main thread.
pub fn create_input_thread(
    sender: Sender<DiskmonEvent>, termination: TerminationLock,
) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            if is_terminated(&termination) {
                break;
            }

            if let Ok(true) = poll(Duration::from_millis(20)) {
                if let Ok(Event::Key(key)) = read() {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }

                    if sender.send(DiskmonEvent::KeyInput(key)).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

/// Spawns the thread that samples disk counters every `update_rate` and sends
/// them to the main thread. A failed sample skips that tick.
pub fn create_collection_thread(
    sender: Sender<DiskmonEvent>, termination: TerminationLock, sampler: Box<dyn Sampler>,
    update_rate: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut collector = DataCollector::new(sampler);

        loop {
            // Check once at the very top...
            if is_terminated(&termination) {
                break;
            }

            if let Some(data) = collector.update_data() {
                if sender.send(DiskmonEvent::Update(Box::new(data))).is_err() {
                    break;
                }
            }

            let (lock, cvar) = &*termination;
            let Ok(guard) = lock.lock() else {
                break;
            };

            match cvar.wait_timeout_while(guard, update_rate, |is_terminated| !*is_terminated) {
                Ok((is_terminated, _)) if !*is_terminated => {}
                _ => break,
            }
        }
    })
}

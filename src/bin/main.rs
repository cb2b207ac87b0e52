#![warn(rust_2018_idioms)]

use std::{
    io::{stdout, Write},
    panic,
    sync::{
        mpsc::{self, RecvTimeoutError},
        Arc, Condvar, Mutex,
    },
};

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use diskmon::{
    app::rates::UnitMode,
    canvas::Painter,
    collection::disks::platform_sampler,
    constants::STALL_FACTOR,
    create_collection_thread, create_input_thread,
    event::{handle_key_event, DiskmonEvent, KeyOutcome},
    is_interactive,
    options::{get_args, get_or_create_config, init_app},
    panic_hook, request_termination, TerminationLock,
};

fn main() -> Result<()> {
    let args = get_args();

    #[cfg(all(feature = "logging", debug_assertions))]
    {
        diskmon::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    let config = get_or_create_config(args.config_location())
        .context("Unable to properly parse or create the config file.")?;

    let mut app = init_app(&args, &config).context("Found an issue while setting up diskmon.")?;

    let termination: TerminationLock = Arc::new((Mutex::new(false), Condvar::new()));
    let (sender, receiver) = mpsc::channel();

    // Set up Ctrl-C/SIGTERM handling.
    {
        let sender = sender.clone();
        ctrlc::set_handler(move || {
            let _ = sender.send(DiskmonEvent::Terminate);
        })
        .context("Unable to set up the termination handler.")?;
    }

    let interactive = is_interactive();
    if interactive {
        enable_raw_mode().context("Unable to enable raw mode.")?;
        panic::set_hook(Box::new(panic_hook));
        let _input_thread = create_input_thread(sender.clone(), termination.clone());
    }

    let update_rate = app.app_config_fields.update_rate;
    let _collection_thread =
        create_collection_thread(sender, termination.clone(), platform_sampler(), update_rate);

    let painter = Painter::new(interactive);
    let stall_timeout = update_rate * STALL_FACTOR;
    let mut stdout = stdout().lock();
    let mut drawn_once = false;

    let result = loop {
        match receiver.recv_timeout(stall_timeout) {
            Ok(DiskmonEvent::KeyInput(event)) => match handle_key_event(event, &mut app) {
                KeyOutcome::Quit => break Ok(()),
                KeyOutcome::ModeChanged => {
                    let status = match app.unit_mode() {
                        UnitMode::Bytes => "Showing throughput from the next refresh.",
                        UnitMode::Ops => "Showing IOPS from the next refresh.",
                    };
                    if let Err(err) = painter.draw_status(&mut stdout, status) {
                        break Err(err);
                    }
                }
                KeyOutcome::Reset => {
                    let status = "Cleared previous samples, rates resume after the next refresh.";
                    if let Err(err) = painter.draw_status(&mut stdout, status) {
                        break Err(err);
                    }
                }
                KeyOutcome::Nothing => {}
            },
            Ok(DiskmonEvent::Update(data)) => {
                if app.eat_data(*data) {
                    if drawn_once {
                        if let Err(err) = painter.draw_status(&mut stdout, "") {
                            break Err(err);
                        }
                    }

                    if let Err(err) = painter.draw_rows(&mut stdout, app.rows(), app.unit_mode()) {
                        break Err(err);
                    }
                    drawn_once = true;

                    if app.is_done() {
                        break Ok(());
                    }
                }
            }
            Ok(DiskmonEvent::Terminate) => break Ok(()),
            Err(RecvTimeoutError::Timeout) => {
                log::warn!("no disk data received in the last {stall_timeout:?}, sampler may be stalled");
            }
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    request_termination(&termination);
    if interactive {
        disable_raw_mode()?;
    }
    stdout.flush()?;

    result.context("Unable to write to stdout.")
}

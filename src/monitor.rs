use crate::config::Config;
use crate::consts::*;
use crate::symbols::{AliasSymbols, KeySymbol};
use crate::tracker::KeyTracker;
use anyhow::{Result, bail};
use colored::Colorize;
use crossbeam_channel::{select, unbounded};
use evdev::Device as EvDevDevice;
use evdev::{EventType, InputEvent, KeyCode};
use log::{debug, info, warn};
use udev::Enumerator;

pub struct Keyboard {
    pub device: EvDevDevice,
    pub name: String,
}

pub fn open_keyboard_devices(config: &Config) -> Result<Vec<Keyboard>> {
    debug!("Detecting keyboards");

    let mut enumerator = Enumerator::new()?;
    enumerator.match_subsystem("input")?;
    enumerator.match_property("ID_INPUT_KEYBOARD", "1")?;

    let mut keyboards = Vec::new();

    for device in enumerator.scan_devices()? {
        if let Some(devnode) = device.devnode()
            && let Ok(keyboard) = EvDevDevice::open(devnode)
        {
            let name = match keyboard.name() {
                Some(name) => name.to_owned(),
                None => continue,
            };

            // Empty list means watch everything that looks like a keyboard.
            let name_matches =
                config.keyboards.is_empty() || config.keyboards.iter().any(|k| *k == name);

            if name_matches {
                info!("Keyboard watched: {}", name);
                keyboards.push(Keyboard {
                    device: keyboard,
                    name,
                });
            } else {
                debug!("Keyboard ignored: {:?}", name);
            }
        }
    }

    if keyboards.is_empty() {
        bail!("No keyboards found");
    } else {
        Ok(keyboards)
    }
}

/// Read events from one keyboard until it goes away, threading a
/// [`KeyTracker`] value through each press and release.
pub fn watch(keyboard: Keyboard, config: &Config) -> Result<()> {
    let symbols = AliasSymbols::new(config.aliases.clone());
    let show_raw = config.globals.show_raw;
    let name = keyboard.name;
    let mut device = keyboard.device;
    let mut tracker = KeyTracker::new();
    let (tx, rx) = unbounded::<InputEvent>();

    std::thread::spawn(move || {
        loop {
            match device.fetch_events() {
                Err(_) => {
                    break;
                }
                Ok(events) => {
                    for event in events {
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                }
            }
        }
    });

    loop {
        select! {
            recv(rx) -> ev => {
                let event = match ev { Ok(e) => e, Err(_) => break };
                if event.event_type() != EventType::KEY {
                    if show_raw {
                        debug!("[raw] {:?} [{}]", event, name.purple());
                    }
                    continue;
                }
                let state = event.value();
                if state > PRESS {
                    // Autorepeat; the tracker only cares about edges.
                    if show_raw && state == REPEAT {
                        debug!("[rep] {:?} [{}]", KeyCode(event.code()), name.purple());
                    }
                    continue;
                }

                let sym = if state == PRESS {
                    tracker = tracker.key_down(event.code(), &symbols);
                    tracker.last_pressed()
                } else {
                    tracker = tracker.key_up(event.code(), &symbols);
                    tracker.last_released()
                };

                if let Some(sym) = sym {
                    log_transition(&name, sym, state, &tracker);
                }
            }
        }
    }

    warn!("Keyboard gone: {}", name);

    Ok(())
}

fn log_transition(name: &str, sym: KeySymbol, state: i32, tracker: &KeyTracker) {
    debug!(
        "{}[{}] {:?} held {:?} released {:?} [{}]",
        if is_modifier(sym) { "    " } else { "" },
        if state == PRESS {
            "↓".green().bold()
        } else {
            "↑".red().bold()
        },
        sym,
        tracker.combo().pressed(),
        tracker.combo().released(),
        name.purple(),
    );
}

fn is_modifier(sym: KeySymbol) -> bool {
    matches!(
        sym.0,
        KeyCode::KEY_LEFTSHIFT
            | KeyCode::KEY_RIGHTSHIFT
            | KeyCode::KEY_LEFTCTRL
            | KeyCode::KEY_RIGHTCTRL
            | KeyCode::KEY_LEFTALT
            | KeyCode::KEY_RIGHTALT
            | KeyCode::KEY_LEFTMETA
            | KeyCode::KEY_RIGHTMETA
    )
}

//! FOLIO_DESK headless host.
//!
//! Loads `desktop.toml` (first non-flag argument or `FOLIO_CONFIG`),
//! replays a gesture script read from stdin against the desktop, and
//! prints the terminal pane. Pass `--json` for a machine-readable
//! snapshot.

mod render;
mod script;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use folio_core::Desktop;
use folio_core::config::DesktopConfig;
use folio_core::input::{Element, InputEvent};
use folio_core::platform::DesktopPlatform;
use folio_core::platform::audio::AudioChunk;

use render::Snapshot;
use script::Command;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let config_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from);

    let config = match &config_path {
        Some(path) => DesktopConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            log::info!("No config given, using built-in desktop");
            DesktopConfig::default()
        },
    };

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading gesture script from stdin")?;
    let commands = script::parse_script(&input)?;
    log::info!("Replaying {} script commands", commands.len());

    let mut desktop = Desktop::new(config, DesktopPlatform::new());
    for command in commands {
        match command {
            Command::Event(event) => {
                desktop.handle_event(event);
            },
            Command::Wait(ms) => {
                desktop.tick(ms);
            },
            Command::Chunk(bytes) => {
                if !desktop.deliver_chunk(AudioChunk(vec![0; bytes])) {
                    log::warn!("chunk of {bytes} bytes dropped: not recording");
                }
            },
            Command::Volume(value) => {
                desktop.handle_event(InputEvent::Value {
                    target: Element::VolumeSlider,
                    value,
                });
            },
        }
    }

    let snapshot = Snapshot::capture(&desktop);
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", snapshot.to_text());
    }

    let platform = desktop.platform();
    log::info!(
        "Done: location {}, {} tab(s) opened",
        platform.location(),
        platform.opened_tabs().len()
    );
    Ok(())
}

mod ui;

use std::fs::{self, File};
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use dragdom::Terminal;
use handlekit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::ui::{Scene, SEEK_TRACK, VOLUME_TRACK};

const FRAME: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
enum DemoError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Handle(#[from] HandleError),
}

/// Load seek handle overrides from the JSON file named on the command line.
fn seek_options() -> Result<HandleOptions, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading handle options from {path}");
            Ok(HandleOptions::from_json(&fs::read_to_string(path)?)?)
        }
        None => Ok(HandleOptions::new().snap(0.5, 0.03)),
    }
}

async fn run() -> Result<(), DemoError> {
    let options = seek_options()?;
    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let scene = Scene::new(width, height);
    let cx = ModuleContext::new(scene.document(), term.viewport());

    let (seek_observer, mut seek_rx) = channel();
    let mut seek = Handle::new(
        options.parent(SEEK_TRACK).on_progress(seek_observer),
        &cx,
    )?;

    let (volume_observer, mut volume_rx) = channel();
    let mut volume = Handle::new(
        HandleOptions::new()
            .parent(VOLUME_TRACK)
            .direction(Direction::Y)
            .on_progress(volume_observer),
        &cx,
    )?;
    volume.set_progress(0.8, true);

    let mut seek_value = seek.progress();
    let mut volume_value = volume.progress();
    let mut bounded = false;

    loop {
        while let Ok(p) = seek_rx.try_recv() {
            seek_value = p;
        }
        while let Ok(p) = volume_rx.try_recv() {
            volume_value = p;
        }

        let status = format!(
            "seek {:>3.0}%  volume {:>3.0}%   [b] bounds  [r] reset  [q] quit",
            seek_value * 100.0,
            volume_value * 100.0
        );
        let (root, layout) = scene.frame(&seek, &volume, &status);
        term.render(&root, &layout, &ui::stylesheet())?;

        let raw = term.poll(Some(FRAME))?;
        seek.process_events(&raw, &layout);
        volume.process_events(&raw, &layout);

        for event in &raw {
            let CrosstermEvent::Key(key) = event else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    seek.destroy();
                    volume.destroy();
                    return Ok(());
                }
                KeyCode::Char('b') => {
                    bounded = !bounded;
                    if bounded {
                        seek.set_bounds(0.25, 0.75);
                    } else {
                        seek.set_bounds(0.0, 1.0);
                    }
                }
                KeyCode::Char('r') => {
                    seek.set_progress(0.5, true);
                }
                _ => {}
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let log_file = File::create("handle-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        log::error!("{e}");
        eprintln!("Error: {}", e);
    }
}

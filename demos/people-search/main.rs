//! People search demo.
//!
//! Type part of a name, wait a second for the suggestions to settle, move with
//! the arrow keys and press enter to choose. `esc` or `ctrl+c` quits.
//!
//! Set `PEOPLE_SEARCH_LOG=/tmp/people-search.log` (and e.g. `RUST_LOG=debug`)
//! to write the widget's trace to a file while the terminal is in use.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use people_autocomplete::prelude::*;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

struct App {
    search: SearchBox,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let (mut search, cmd) = <SearchBox as Model>::init();
        search.on_focus();
        (Self { search: search.with_width(40) }, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let ctrl_c =
                key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if key.key == KeyCode::Esc || ctrl_c {
                self.search.close();
                return Some(quit());
            }
        }
        self.search.update(msg)
    }

    fn view(&self) -> String {
        format!("{}\n\nesc quit\n", self.search.view())
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(path) = std::env::var("PEOPLE_SEARCH_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;
    program.run().await?;
    Ok(())
}

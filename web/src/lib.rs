use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod input;
mod utils;

/// Options read from the page's location hash, e.g. `index.html#-vv&--seed=42`.
#[derive(Parser, Debug)]
#[command(name = "sweeper", version, about = "Minesweeper in the browser", long_about = None)]
struct Args {
    /// Console log level, repeat `-v` for more detail
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Deal the first board from this seed, restarts are always random
    #[arg(short, long)]
    seed: Option<u64>,
}

/// The leading `#` stands in for the program name clap expects first.
fn parse_hash(hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(hash.split(['#', '&']))
}

/// Mounts the game into the `#game` element once the wasm module loads.
#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = parse_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("forced seed: {:?}", args.seed);

    let root: web_sys::Element = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("mounting game");
    let props = game::GameProps { seed: args.seed };
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

/// Options read from the page's location hash, e.g. `#-vv&--seed=42`.
#[derive(Parser, Debug)]
#[command(version, about = "Find the ball under the shell", long_about = None)]
struct Args {
    /// Console log level, repeat for more detail
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Session seed, the same seed replays every marker placement and every shuffle
    #[arg(short, long)]
    seed: Option<u64>,
}

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

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("seed: {}", seed);

    log::debug!("mounting shell game");
    let props = game::GameProps { seed };
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

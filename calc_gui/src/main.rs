//! # Bangun GUI Application
//!
//! Graphical front end for the material estimators: a home card grid, one
//! screen per calculator, and the "coming soon" / "not found" views.
//! Built with Iced for native desktops and for the browser (WASM/WebGPU).
//!
//! The initial screen comes from a route argument on native
//! (`calc_gui /calculator/brick-wall`) or from the URL hash in the browser
//! (`#/calculator/brick-wall`).

mod app;
mod ui;

use app::{App, Message};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    use calc_core::settings::{load_settings, settings_path_in};

    use crate::App;

    /// Bangun - construction material calculator
    #[derive(Parser, Debug)]
    #[command(name = "calc_gui", version, about)]
    pub struct Args {
        /// Screen to open, e.g. `/calculator/brick-wall`
        #[arg(default_value = "/")]
        pub route: String,

        /// Settings file (defaults to the platform config directory)
        #[arg(long, value_name = "PATH")]
        pub config: Option<PathBuf>,

        /// Enable debug logging
        #[arg(short, long)]
        pub verbose: bool,
    }

    fn init_logger(verbose: bool) {
        let default_filter = if verbose { "calc_gui=debug,calc_core=debug,warn" } else { "calc_gui=info,warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init();
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        init_logger(args.verbose);

        let settings_path = args
            .config
            .or_else(|| dirs::config_dir().map(|dir| settings_path_in(&dir)));
        let settings = match &settings_path {
            Some(path) => load_settings(path).with_context(|| format!("loading {}", path.display()))?,
            None => Default::default(),
        };
        tracing::info!(route = %args.route, settings = ?settings_path, "starting");

        let route = args.route;
        iced::application(move || App::new(&route, settings.clone(), settings_path.clone()), App::update, App::view)
            .title(App::title)
            .theme(App::theme)
            .window_size((960.0, 760.0))
            .run()
            .context("GUI event loop failed")
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use calc_core::Settings;

    use crate::App;

    /// Current `location.hash`, empty when unavailable
    pub fn initial_route() -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    /// Mirror the current route into the address bar
    pub fn set_hash(path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(path);
        }
    }

    pub fn run() -> iced::Result {
        console_error_panic_hook::set_once();

        let route = initial_route();
        iced::application(move || App::new(&route, Settings::default(), None), App::update, App::view)
            .title(App::title)
            .theme(App::theme)
            .run()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() -> iced::Result {
    web::run()
}

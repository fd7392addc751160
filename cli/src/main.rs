use log::warn;
use scrim_core::host::{MemoryDocument, Viewport};
use scrim_core::{config, device, paths, Config, ScrimResult};

mod cli;
mod demo;
mod logger;

use cli::Command;

/// User agent assumed when none is supplied on the command line.
pub const FALLBACK_UA: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 Safari/537.36";

fn main() -> ScrimResult<()> {
    let args = cli::parse_args();

    if let Err(e) = logger::init_logger(args.quiet, args.verbose) {
        eprintln!("Failed to initialise logger: {e}");
    }

    if !args.use_defaults {
        let path = args.config_path.as_ref().and_then(|p| p.to_str());
        match Config::load(path, true) {
            Ok(config) => Config::set_config(config),
            Err(e) => warn!("Falling back to default config: {e}"),
        }
    }

    match args.command {
        Command::Demo { forever } => demo::run(forever),
        Command::Device {
            user_agent,
            width,
            height,
        } => {
            device_report(user_agent, width, height);
            Ok(())
        }
        Command::Config { write } => config_report(write),
    }
}

fn device_report(user_agent: Option<String>, width: u32, height: u32) {
    let user_agent = user_agent.unwrap_or_else(|| FALLBACK_UA.to_owned());
    let document = MemoryDocument::new(Viewport::new(width, height), &user_agent);

    println!("view:   {:?}", device::view_of(&document));
    println!("device: {:?}", device::device_of(&document));
}

fn config_report(write: bool) -> ScrimResult<()> {
    let config = Config::current();

    if write {
        if paths::ensure_config_dir().is_none() {
            return Err("Could not determine config directory".into());
        }
        let path =
            Config::default_config_path().ok_or("Could not determine config directory")?;
        config::serialize_config(&config, &path)
            .map_err(|e| format!("Failed to write config: {e}"))?;
        println!("Wrote {}", path.display());
    } else {
        print!("{}", config::render_annotated(&config));
    }

    Ok(())
}

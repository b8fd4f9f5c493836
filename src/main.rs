// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the default log filter.
const ENV_LOG: &str = "ICED_FOLIO_LOG";
const DEFAULT_LOG_FILTER: &str = "iced_folio=info,warn";

const USAGE: &str = "\
Usage: iced_folio [OPTIONS]

Options:
  --lang <id>          Interface language (en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --assets-dir <dir>   Root directory of gallery images
  --gallery <id>       Open this gallery at startup
  --log <filter>       Log filter, e.g. iced_folio=debug
  -h, --help           Print this help";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    assets_dir: Option<String>,
    gallery: Option<String>,
    log: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
        gallery: args.opt_value_from_str("--gallery")?,
        log: args.opt_value_from_str("--log")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unused arguments: {remaining:?}");
    }
    Ok(Some(parsed))
}

fn init_tracing(cli_filter: Option<&str>) {
    // An invalid filter falls through to the next source.
    let filter = cli_filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_env(ENV_LOG).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    init_tracing(args.log.as_deref());
    paths::init_cli_overrides(args.config_dir, args.assets_dir);

    app::run(Flags {
        lang: args.lang,
        gallery: args.gallery,
    })
}

// SPDX-License-Identifier: MPL-2.0
use album_gallery::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
album_gallery - browse albums from a paginated listing endpoint

USAGE:
    album_gallery [OPTIONS]

OPTIONS:
    --api-url <URL>        Listing endpoint (overrides [api] base_url)
    --page-size <N>        Albums per page (overrides [api] page_size)
    --lang <LOCALE>        Interface language, e.g. en-US or fr
    --config-dir <DIR>     Directory holding settings.toml
    -h, --help             Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "album_gallery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        page_size: args.opt_value_from_str("--page-size")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

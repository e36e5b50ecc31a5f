// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, App, Flags};
use iced_gallery::config::{self, Config};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_gallery - animated artwork gallery

USAGE:
  iced_gallery [OPTIONS]

OPTIONS:
  --catalog <FILE>        Show the artworks listed in FILE instead of the built-in catalog
  --config-dir <DIR>      Read settings.toml from DIR
  --start <N>             Index of the artwork shown first (0-based)
  --write-default-config  Write a settings.toml with default values and exit
  -h, --help              Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let write_default = args.contains("--write-default-config");
    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{HELP}");
            return ExitCode::FAILURE;
        }
    };

    if write_default {
        return write_default_config(flags.config_dir.map(PathBuf::from));
    }

    let app = match App::from_flags(flags) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        catalog: args.opt_value_from_os_str("--catalog", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        start: args.opt_value_from_str("--start")?,
    };

    let rest = args.finish();
    if let Some(unexpected) = rest.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {}", unexpected.to_string_lossy()),
        });
    }
    Ok(flags)
}

fn write_default_config(base_dir: Option<PathBuf>) -> ExitCode {
    match config::save_with_override(&Config::default(), base_dir) {
        Ok(Some(path)) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("error: no config directory available");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

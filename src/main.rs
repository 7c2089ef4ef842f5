// SPDX-License-Identifier: MPL-2.0
use lang_messages::config::{self, Config};
use lang_messages::domain::Lang;
use lang_messages::i18n::{parse_accept_language, MessagesApi};
use lang_messages::infrastructure::FsResourceLoader;
use lang_messages::FluentValue;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: lang-messages [--config FILE] [--dir DIR]... <command>

Commands:
  check                              Load every bundle and report its size
  preferred [--accept HEADER] [TAG]...
                                     Print the language selected for the ranges
  resolve --lang TAG KEY... [-- ARG...]
                                     Print the message for the first known key

Options:
  --config FILE   Configuration file (default: platform config dir)
  --dir DIR       Messages directory, repeatable; later ones override
  -h, --help      Show this help
";

struct Flags {
    config: Option<PathBuf>,
    dirs: Vec<PathBuf>,
    lang: Option<String>,
    accept: Option<String>,
    free: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match parse_flags(args).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("lang-messages: {message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let err = |e: pico_args::Error| e.to_string();
    Ok(Flags {
        config: args.opt_value_from_str("--config").map_err(err)?,
        dirs: args.values_from_str("--dir").map_err(err)?,
        lang: args.opt_value_from_str("--lang").map_err(err)?,
        accept: args.opt_value_from_str("--accept").map_err(err)?,
        free: args
            .finish()
            .into_iter()
            .map(|arg| arg.into_string().map_err(|_| "arguments must be UTF-8".to_string()))
            .collect::<Result<_, _>>()?,
    })
}

fn load_config(flags: &Flags) -> Result<Config, String> {
    let mut config = match &flags.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
    .map_err(|e| e.to_string())?;

    if !flags.dirs.is_empty() {
        config.i18n.messages_dirs = flags.dirs.clone();
    }
    if config.i18n.messages_dirs.is_empty() {
        config.i18n.messages_dirs.push(PathBuf::from("."));
    }
    Ok(config)
}

fn run(flags: Flags) -> Result<(), String> {
    let config = load_config(&flags)?;
    let loader = FsResourceLoader::new(config.i18n.messages_dirs.clone());
    let api = MessagesApi::load(&config.i18n, &loader).map_err(|e| e.to_string())?;

    let (command, rest) = flags
        .free
        .split_first()
        .ok_or_else(|| format!("missing command\n\n{USAGE}"))?;

    match command.as_str() {
        "check" => {
            for code in api.catalog().bundle_codes() {
                let size = api.catalog().bundle(code).map_or(0, |bundle| bundle.len());
                println!("{code}\t{size}");
            }
        }
        "preferred" => {
            let mut candidates = flags
                .accept
                .as_deref()
                .map(parse_accept_language)
                .unwrap_or_default();
            for tag in rest {
                candidates.push(Lang::parse(tag).map_err(|e| e.to_string())?);
            }
            println!("{}", api.langs().preferred(&candidates));
        }
        "resolve" => {
            let tag = flags.lang.as_deref().ok_or("resolve needs --lang")?;
            let lang = Lang::parse(tag).map_err(|e| e.to_string())?;
            let (keys, values) = split_keys_and_values(rest);
            if keys.is_empty() {
                return Err("resolve needs at least one key".to_string());
            }
            let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            let values: Vec<FluentValue<'_>> = values.iter().map(|v| argument(v)).collect();
            println!("{}", api.resolve(&lang, &keys, &values));
        }
        other => return Err(format!("unknown command '{other}'\n\n{USAGE}")),
    }
    Ok(())
}

/// Splits `KEY... [-- ARG...]` at the first `--`.
fn split_keys_and_values(rest: &[String]) -> (&[String], &[String]) {
    match rest.iter().position(|arg| arg == "--") {
        Some(split) => (&rest[..split], &rest[split + 1..]),
        None => (rest, &[][..]),
    }
}

/// Numbers on the command line are passed as numbers so they get localized.
fn argument(raw: &str) -> FluentValue<'_> {
    if let Ok(int) = raw.parse::<i64>() {
        FluentValue::from(int)
    } else if let Ok(float) = raw.parse::<f64>() {
        FluentValue::from(float)
    } else {
        FluentValue::from(raw)
    }
}

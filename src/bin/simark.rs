//! Command-line interface for simark
//!
//! Usage:
//!   simark `<path>` [--format html|plain|tree|json] [--config `<file>`] [--set key=value]...
//!
//! The rendered document is written to stdout. Log output goes to stderr and is controlled
//! by `RUST_LOG` (default `warn`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use simark::simark::config::Loader;
use simark::simark::formats::FormatRegistry;
use simark::simark::{parse, SimarkError, SimarkResult};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("simark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render simark documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the simark file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (html, plain, tree, json)")
                .default_value("html"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .value_name("KEY=VALUE")
                .help("Override a render setting, e.g. --set table_label=Tab.")
                .action(ArgAction::Append),
        )
        .get_matches();

    init_tracing();

    match run(&matches) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("simark: {e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> SimarkResult<String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for item in matches.get_many::<String>("set").into_iter().flatten() {
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| SimarkError::InvalidOverride(item.clone()))?;
        let key = match key.trim() {
            "" => return Err(SimarkError::InvalidOverride(item.clone())),
            key if key.contains('.') => key.to_string(),
            key => format!("render.{key}"),
        };
        loader = match value {
            "true" | "false" => loader.set_override(&key, value == "true")?,
            _ => loader.set_override(&key, value)?,
        };
    }
    let config = loader.build()?;

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let source = std::fs::read_to_string(path)?;
    let mut doc = parse(&source);

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");
    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&mut doc, format, &config.render)?;
    Ok(match format {
        "html" => format!(
            "<div class=\"{}document\">\n{output}</div>\n",
            config.render.html_class_prefix
        ),
        _ => output,
    })
}

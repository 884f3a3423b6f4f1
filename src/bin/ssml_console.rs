use std::env;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use ssmlbase::chat::{ConversationTurns, IntentDispatcher};
use ssmlbase::config::load_or_default;
use ssmlbase::log::IntentLog;

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let config = load_or_default()?;
    let mut dispatcher = IntentDispatcher::shared();
    if config.debug {
        dispatcher = dispatcher.with_log(IntentLog::open(config.intent_log_path()?)?);
    }

    let mut turns = ConversationTurns::new();
    let dispatched = dispatcher.dispatch_named(&args.intent, args.parameters, &mut turns)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(turns.turns())?);
    } else {
        for turn in turns.turns() {
            println!("{turn}\n");
        }
    }
    if let Some(err) = dispatched.log_error {
        eprintln!("Warning: intent log not updated: {err:#}");
    }
    Ok(())
}

struct CliArgs {
    intent: String,
    parameters: Map<String, Value>,
    json: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut intent = None;
        let mut parameters = Map::new();
        let mut json = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--intent" => {
                    let value = args
                        .next()
                        .context("Expected an intent name after --intent")?;
                    intent = Some(value);
                }
                "--param" => {
                    let pair = args
                        .next()
                        .context("Expected key=value after --param")?;
                    let (key, value) = pair
                        .split_once('=')
                        .with_context(|| format!("Parameter `{pair}` is not key=value"))?;
                    parameters.insert(key.trim().to_string(), Value::String(value.to_string()));
                }
                "--json" => json = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("Unknown argument `{other}`. Use --help for usage."),
            }
        }
        Ok(Self {
            intent: intent.unwrap_or_else(|| "Welcome".to_string()),
            parameters,
            json,
        })
    }
}

fn print_usage() {
    println!(
        "Usage: ssml_console [--intent <name>] [--param key=value]... [--json]\n\
         Intents: Welcome (default), Fallback, Choose Example (param: element)."
    );
}

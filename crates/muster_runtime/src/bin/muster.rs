//! Muster CLI entry point.
//!
//! Starts an interactive console over a small demo roster and a few
//! demo commands, useful for exploring the invocation grammar by hand.

use std::env;
use std::process::ExitCode;

use muster_foundation::{PlayerId, Roster, TableRoster, Value};
use muster_parser::CallData;
use muster_runtime::{Command, CommandRegistry, Console};
use muster_schema::{Schema, SchemaBuilder};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    caller: Option<u32>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--caller" => {
                i += 1;
                if i >= args.len() {
                    return Err("--caller requires a player key".into());
                }
                config.caller = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --caller value: {}", args[i]))?,
                );
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("muster {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let roster = demo_roster();
    let caller = PlayerId(config.caller.unwrap_or(1));
    if !roster.players().contains(&caller) {
        return Err(format!("no player with key {} in the demo roster", caller.key()).into());
    }

    let mut registry = CommandRegistry::new();
    registry.register(Box::new(Give::new()))?;
    registry.register(Box::new(Heal::new()))?;
    registry.register(Box::new(Say::new()))?;

    let mut console = Console::new(registry, roster, caller)?;
    console.run()?;
    Ok(())
}

fn demo_roster() -> TableRoster {
    let mut roster = TableRoster::new();
    roster.add(1, "Alice", true);
    roster.add(2, "Bob", false);
    roster.add(3, "Carol", true);
    roster.add(4, "Dave", false);
    roster
}

fn names(targets: &[PlayerId], roster: &dyn Roster) -> String {
    targets
        .iter()
        .map(|p| roster.display_name(*p))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `/give <targets> <item> [amount] [--silent]`
struct Give {
    schema: Schema,
}

impl Give {
    fn new() -> Self {
        let mut b = SchemaBuilder::new("give");
        b.summary("give items to players")
            .group("admin")
            .requires_target()
            .param_text("item")
            .optional_params()
            .param_int("amount");
        b.option("silent", None).description("no chat feedback");
        Self { schema: b.build() }
    }
}

impl Command for Give {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn run(&self, call: &CallData, roster: &dyn Roster) -> String {
        let item = call
            .param("item")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let amount = call.param("amount").and_then(Value::as_int).unwrap_or(1);
        if call.has_option("silent") {
            return String::new();
        }
        format!("gave {amount} {item} to {}", names(&call.targets, roster))
    }
}

/// `/heal <targets> [amount]`
struct Heal {
    schema: Schema,
}

impl Heal {
    fn new() -> Self {
        let mut b = SchemaBuilder::new("heal");
        b.summary("restore player health")
            .group("admin")
            .requires_target()
            .optional_params()
            .param_int("amount");
        Self { schema: b.build() }
    }
}

impl Command for Heal {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn run(&self, call: &CallData, roster: &dyn Roster) -> String {
        let amount = call.param("amount").and_then(Value::as_int).unwrap_or(20);
        format!("healed {} by {amount}", names(&call.targets, roster))
    }
}

/// `/say <message...>`
struct Say {
    schema: Schema,
}

impl Say {
    fn new() -> Self {
        let mut b = SchemaBuilder::new("say");
        b.summary("broadcast a chat message")
            .param_remainder("message");
        Self { schema: b.build() }
    }
}

impl Command for Say {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn run(&self, call: &CallData, _roster: &dyn Roster) -> String {
        let message = call
            .param("message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        format!("[broadcast] {message}")
    }
}

fn print_help() {
    println!(
        "\x1b[1mMuster\x1b[0m - Chat command invocation engine

\x1b[1mUSAGE:\x1b[0m
    muster [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --caller N         Issue invocations as the player with key N

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    /give <targets> <item> [amount]   Give items (try: /give @all apple 3)
    /heal <targets> [amount]          Restore health
    /say <message...>                 Broadcast a message
    :help [name]                      Show help
    :who                              List players
    Ctrl+D                            Exit"
    );
}

use anyhow::{bail, Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use command::{
    CommandAction, CommandRequest, CommandResponse, CompareOutput, EncodeOutput, ResponseMeta,
};
use config::{CliConfig, OutputFormat};
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

mod command;
pub mod config;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "soundex")]
#[command(about = "Soundex phonetic codes for fuzzy name matching", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// TOML config file (overrides SOUNDEX_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a word as a Soundex code
    Encode(EncodeArgs),

    /// Check whether two words share a Soundex code
    Compare(CompareArgs),

    /// Execute a JSON Command API request
    Command(CommandArgs),
}

impl Commands {
    /// Output format and pretty flag requested on the command line
    fn output_flags(&self) -> (Option<OutputFormat>, bool) {
        match self {
            Commands::Encode(args) => args.output.requested(),
            Commands::Compare(args) => args.output.requested(),
            Commands::Command(args) => (Some(OutputFormat::Json), args.pretty),
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Print the JSON response envelope
    #[arg(long)]
    json: bool,

    /// Print bare codes even if the config selects JSON
    #[arg(long, conflicts_with_all = ["json", "pretty"])]
    text: bool,

    /// Pretty-print JSON response (implies --json)
    #[arg(long)]
    pretty: bool,
}

impl OutputArgs {
    fn requested(&self) -> (Option<OutputFormat>, bool) {
        let format = if self.text {
            Some(OutputFormat::Text)
        } else if self.json || self.pretty {
            Some(OutputFormat::Json)
        } else {
            None
        };
        (format, self.pretty)
    }
}

#[derive(Args)]
struct EncodeArgs {
    /// Word to encode
    #[arg(allow_hyphen_values = true)]
    word: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct CompareArgs {
    /// First word
    #[arg(allow_hyphen_values = true)]
    left: String,

    /// Second word
    #[arg(allow_hyphen_values = true)]
    right: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct CommandArgs {
    /// Inline JSON payload (mutually exclusive with --file)
    #[arg(long, conflicts_with = "file")]
    json: Option<String>,

    /// Path to file containing JSON payload
    #[arg(long)]
    file: Option<PathBuf>,

    /// Pretty-print JSON response
    #[arg(long)]
    pretty: bool,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    let (format_flag, pretty_flag) = cli.command.output_flags();
    let config = match CliConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config.with_flags(format_flag, pretty_flag),
        Err(err) if format_flag == Some(OutputFormat::Json) => {
            let response =
                command::error_response(format!("{err:#}"), None, ResponseMeta::default());
            print_json(&response, pretty_flag)?;
            std::process::exit(1);
        }
        Err(err) => return Err(err),
    };

    // stdout is reserved for JSON
    if config.format == OutputFormat::Json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Encode(args) => run_request(
            CommandRequest {
                action: CommandAction::Encode,
                payload: json!({ "word": args.word }),
            },
            &config,
        )?,
        Commands::Compare(args) => run_request(
            CommandRequest {
                action: CommandAction::Compare,
                payload: json!({ "left": args.left, "right": args.right }),
            },
            &config,
        )?,
        Commands::Command(args) => run_command(args, &config)?,
    }

    Ok(())
}

fn run_command(args: CommandArgs, config: &CliConfig) -> Result<()> {
    let request = match parse_request(&args) {
        Ok(request) => request,
        Err(err) => {
            let response =
                command::error_response(format!("{err:#}"), None, ResponseMeta::default());
            print_json(&response, config.pretty)?;
            std::process::exit(1);
        }
    };
    run_request(request, config)
}

fn parse_request(args: &CommandArgs) -> Result<CommandRequest> {
    let raw = read_payload(args)?;
    serde_json::from_str(&raw).context("Invalid JSON passed to --json/--file")
}

fn read_payload(args: &CommandArgs) -> Result<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read JSON from stdin")?;

    if buffer.trim().is_empty() {
        bail!("Command request is empty. Provide --json, --file, or pipe JSON via stdin.");
    }

    Ok(buffer)
}

fn run_request(request: CommandRequest, config: &CliConfig) -> Result<()> {
    let action = request.action;
    let response = command::execute(request);

    match config.format {
        OutputFormat::Json => {
            print_json(&response, config.pretty)?;
            if response.is_error() {
                std::process::exit(1);
            }
        }
        OutputFormat::Text => {
            if response.is_error() {
                bail!(response.message.unwrap_or_default());
            }
            print_stdout(&render_text(action, response.data)?)?;
        }
    }
    Ok(())
}

fn print_json(response: &CommandResponse, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    print_stdout(&output)
}

fn render_text(action: CommandAction, data: Value) -> Result<String> {
    let text = match action {
        CommandAction::Encode => {
            let out: EncodeOutput = serde_json::from_value(data)?;
            out.code
        }
        CommandAction::Compare => {
            let out: CompareOutput = serde_json::from_value(data)?;
            let verdict = if out.matches { "match" } else { "differ" };
            format!("{} {} {verdict}", out.left.code, out.right.code)
        }
    };
    Ok(text)
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use xml_prompt_config::{Config, MarkdownConfig};
use xml_prompt_engine::models::ContentNode;
use xml_prompt_engine::tree::{count_nodes, estimate_tokens};
use xml_prompt_engine::{
    ParseOptions, io, parse_markdown_with, parse_xml, render_document, render_to_xml, validate_xml,
};

#[derive(Parser)]
#[command(name = "xml-prompt", version, about = "Convert Markdown prompts into XML")]
struct Cli {
    /// Config file to use instead of ~/.config/xml-prompt/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Markdown file to XML
    Markdown(ConvertArgs),

    /// Re-serialize an XML fragment
    Xml(ConvertArgs),

    /// Check that an XML fragment is well-formed
    Validate {
        /// Input file, or `-` for stdin
        input: String,
    },

    /// Write a config file holding the default settings
    InitConfig {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Input file, or `-` for stdin
    input: String,

    /// Wrap the output in this root element
    #[arg(long)]
    root: Option<String>,

    /// Print the node tree as JSON instead of XML
    #[arg(long)]
    json: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Markdown(args) => {
            let config = load_config(config_path)?;
            let text = read_input(&args.input)?;
            let forest = parse_markdown_with(&text, &parse_options(&config.markdown));
            emit(&forest, &args, &config)
        }
        Command::Xml(args) => {
            let config = load_config(config_path)?;
            let text = read_input(&args.input)?;
            let forest = parse_xml(&text).with_context(|| format!("Failed to parse {}", args.input))?;
            emit(&forest, &args, &config)
        }
        Command::Validate { input } => {
            let text = read_input(&input)?;
            validate_xml(&text).with_context(|| format!("{input} is not well-formed"))?;
            println!("{input}: ok");
            Ok(())
        }
        Command::InitConfig { force } => init_config(config_path, force),
    }
}

fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let target = path.map_or_else(Config::config_path, Config::expand_path);
    if target.exists() && !force {
        log::warn!("{} already exists, pass --force to replace it", target.display());
        return Ok(());
    }

    let config = Config::default();
    match path {
        Some(_) => config.save_to_path(&target)?,
        None => config.save()?,
    }
    println!("Wrote {}", target.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let path = Config::expand_path(path);
            log::debug!("Config path: {}", path.display());
            Config::load_from_path(&path)?
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };
    Ok(loaded.unwrap_or_default())
}

fn parse_options(markdown: &MarkdownConfig) -> ParseOptions {
    ParseOptions {
        tables: markdown.tables,
        footnotes: markdown.footnotes,
        strikethrough: markdown.strikethrough,
        task_lists: markdown.task_lists,
        smart_punctuation: markdown.smart_punctuation,
        containers: markdown.containers,
        emoji: markdown.emoji,
        definition_lists: markdown.definition_lists,
        superscript: markdown.superscript,
        subscript: markdown.subscript,
        linkify: markdown.linkify,
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    let path = Config::expand_path(Path::new(input));
    Ok(io::read_file(&path)?)
}

/// Serialized output: JSON, a bare fragment, or a fragment wrapped in the
/// root element from the flag or config
fn render(forest: &[ContentNode], args: &ConvertArgs, config: &Config) -> Result<String> {
    if args.json {
        let mut json = serde_json::to_string_pretty(forest)?;
        json.push('\n');
        return Ok(json);
    }
    let root = args.root.as_deref().or(config.root_element.as_deref());
    Ok(match root {
        Some(root) => render_document(forest, root),
        None => render_to_xml(forest),
    })
}

fn emit(forest: &[ContentNode], args: &ConvertArgs, config: &Config) -> Result<()> {
    let out = render(forest, args, config)?;
    log::info!(
        "{} nodes, ~{} tokens",
        count_nodes(forest),
        estimate_tokens(&out)
    );

    match &args.output {
        Some(path) => {
            let path = Config::expand_path(path);
            io::write_file(&path, &out)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{out}"),
    }
    Ok(())
}

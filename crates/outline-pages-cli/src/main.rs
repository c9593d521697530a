use anyhow::{Context, Result};
use clap::Parser;
use outline_pages_config::Config;
use outline_pages_engine::{Document, IndexOptions, OutputDir, PageRenderer, Template, io};
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_OUTPUT: &str = "output";
const DEFAULT_TEMPLATE: &str = "template.html";

/// Converts a tab-indented outline into a set of linked HTML pages
#[derive(Debug, Parser)]
#[command(name = "outline-pages", version, about)]
struct Args {
    /// Outline file to convert
    filename: PathBuf,

    /// Output directory; deleted and recreated on every run [default: output]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template with <!--BACK-->, <!--TITLE--> and <!--CONTENT--> placeholders
    /// [default: template.html]
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// URL the "< HOME" link of index.html points to
    #[arg(short = 'H', long)]
    home: Option<String>,

    /// Title of index.html (defaults to the outline's `name` property)
    #[arg(short = 'T', long)]
    title: Option<String>,

    /// Config file to read defaults from
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Command line flags merged over config file values and built-in defaults.
#[derive(Debug, PartialEq)]
struct Settings {
    input: PathBuf,
    output: PathBuf,
    template: Option<PathBuf>,
    home: Option<String>,
    title: Option<String>,
}

impl Settings {
    fn resolve(args: Args, config: Config) -> Self {
        Self {
            input: args.filename,
            output: args
                .output
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            template: args.template.or(config.template),
            home: args.home.or(config.home),
            title: args.title.or(config.title),
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args, config);

    let text = io::read_file(&settings.input)
        .with_context(|| format!("Failed to read outline '{}'", settings.input.display()))?;
    let template = load_template(settings.template.as_deref())?;

    let document = Document::from_text(&text)
        .with_context(|| format!("Failed to parse outline '{}'", settings.input.display()))?;
    let props: Vec<String> = document
        .properties()
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    log::info!("Page properties: {{{}}}", props.join(", "));

    io::reset_output_dir(&settings.output).with_context(|| {
        format!(
            "Failed to recreate output directory '{}'",
            settings.output.display()
        )
    })?;
    let mut sink = OutputDir::new(&settings.output)?;

    let options = IndexOptions {
        home_url: settings.home.as_deref(),
        title: settings.title.as_deref(),
    };
    let written = PageRenderer::new(&document, &template)
        .write_all(&mut sink, &options)
        .context("Failed to write pages")?;

    log::info!(
        "Wrote {written} pages for {} blocks to {}",
        document.len(),
        settings.output.display()
    );
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file '{}' not found", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    Ok(config)
}

/// Reads the template file. Without an explicit template, a missing
/// `template.html` falls back to the built-in template.
fn load_template(path: Option<&Path>) -> Result<Template> {
    let template = match path {
        Some(path) => io::read_template(path)
            .with_context(|| format!("Failed to read template '{}'", path.display()))?,
        None => {
            let default = Path::new(DEFAULT_TEMPLATE);
            if default.exists() {
                io::read_template(default)
                    .with_context(|| format!("Failed to read template '{DEFAULT_TEMPLATE}'"))?
            } else {
                log::warn!("{DEFAULT_TEMPLATE} not found, using the built-in template");
                Template::builtin()
            }
        }
    };

    let missing = template.missing_placeholders();
    if !missing.is_empty() {
        log::warn!("Template lacks placeholders: {}", missing.join(", "));
    }
    Ok(template)
}

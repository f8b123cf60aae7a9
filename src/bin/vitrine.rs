use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "vitrine", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a page from a layout and content sources.
    Compose(ComposeArgs),
    /// Render one custom-code template.
    Template(TemplateArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Layout configuration JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Content sources JSON (products, collections, slides, videos).
    #[arg(long)]
    sources: PathBuf,

    /// Id of the active product, for product detail pages.
    #[arg(long)]
    product: Option<String>,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TemplateArgs {
    /// Template source (JSON document as text).
    #[arg(long)]
    code: PathBuf,

    /// Render context JSON object.
    #[arg(long)]
    context: Option<PathBuf>,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Template(args) => cmd_template(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<vitrine::EngineConfig> {
    match path {
        Some(p) => vitrine::EngineConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(vitrine::EngineConfig::default()),
    }
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let layout = vitrine::LayoutConfig::from_path(&args.layout)
        .with_context(|| format!("load layout '{}'", args.layout.display()))?;
    let sources = vitrine::ContentSources::from_path(&args.sources)
        .with_context(|| format!("load sources '{}'", args.sources.display()))?;

    let page_ctx = match args.product.as_deref() {
        Some(id) => vitrine::PageContext::for_product(&sources, id),
        None => vitrine::PageContext::default(),
    };

    let compositor = vitrine::PageCompositor::new(config);
    let page = compositor.compose(&layout, &sources, &page_ctx);
    tracing::info!(fingerprint = %page.fingerprint(), sections = page.sections.len(), "composed");

    let text = match args.format {
        Format::Json => page.to_json_pretty()?,
        Format::Html => page.to_html(compositor.config()),
    };
    write_output(args.out.as_deref(), &text)
}

fn cmd_template(args: TemplateArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let code = std::fs::read_to_string(&args.code)
        .with_context(|| format!("read template '{}'", args.code.display()))?;

    let ctx = match &args.context {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("open context '{}'", path.display()))?;
            let v: serde_json::Value = serde_json::from_reader(BufReader::new(f))
                .with_context(|| "parse context JSON")?;
            let obj = v
                .as_object()
                .with_context(|| "context must be a JSON object")?;
            vitrine::RenderContext::from_json_object(obj)
        }
        None => vitrine::RenderContext::new(),
    };

    let interpreter =
        vitrine::TemplateInterpreter::new(vitrine::WidgetRegistry::new(config.clone()));
    let tree = interpreter.render(&code, &ctx);

    let text = match args.format {
        Format::Json => serde_json::to_string_pretty(&tree)?,
        Format::Html => vitrine::ui_to_html(
            &tree,
            vitrine::HtmlOptions {
                breakpoints: config.breakpoints,
            },
        ),
    };
    write_output(args.out.as_deref(), &text)
}

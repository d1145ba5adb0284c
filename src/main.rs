use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stylistic_scroll::{
    generate, generate_scoped, Injector, MemoryDocument, ScrollbarColors, StyleHost, StyleOptions,
    Target,
};

#[derive(Parser)]
#[command(name = "stylistic-scroll", version)]
#[command(about = "Customizable transparent scrollbar styles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print scrollbar CSS for the given options
    Generate {
        #[command(flatten)]
        style: StyleArgs,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Print the default options as JSON
    Defaults,

    /// Inject into a headless document and report what was attached
    Preview {
        #[command(flatten)]
        style: StyleArgs,
    },
}

#[derive(Args)]
struct StyleArgs {
    /// JSON file with (partial) options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Thumb color (hex, rgb(), rgba() or named)
    #[arg(long)]
    color: Option<String>,

    /// Scrollbar thickness (CSS length)
    #[arg(long)]
    width: Option<String>,

    /// Thumb corner radius (CSS length)
    #[arg(long)]
    thumb_radius: Option<String>,

    /// Track background color
    #[arg(long)]
    track_background: Option<String>,

    #[arg(long)]
    thumb_opacity: Option<f64>,

    #[arg(long)]
    thumb_hover_opacity: Option<f64>,

    #[arg(long)]
    track_opacity: Option<f64>,

    /// Hide the scrollbar entirely
    #[arg(long)]
    hide: bool,

    /// Scope the rules to this class instead of every element
    #[arg(long = "class")]
    class_name: Option<String>,
}

impl StyleArgs {
    /// Defaults, then the config file, then flags.
    fn resolve(&self) -> Result<StyleOptions> {
        let mut opts = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("cannot read '{}'", path.display()))?;
                StyleOptions::from_json(&json)
                    .with_context(|| format!("in '{}'", path.display()))?
            }
            None => StyleOptions::default(),
        };

        if let Some(v) = &self.color {
            opts.color = v.clone();
        }
        if let Some(v) = &self.width {
            opts.width = v.clone();
        }
        if let Some(v) = &self.thumb_radius {
            opts.thumb_radius = v.clone();
        }
        if let Some(v) = &self.track_background {
            opts.track_background = v.clone();
        }
        if let Some(v) = self.thumb_opacity {
            opts.thumb_opacity = v;
        }
        if let Some(v) = self.thumb_hover_opacity {
            opts.thumb_hover_opacity = v;
        }
        if let Some(v) = self.track_opacity {
            opts.track_opacity = v;
        }
        if self.hide {
            opts.hide_scrollbar = true;
        }
        Ok(opts)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate { style, o } => {
            let opts = style.resolve()?;
            let css = match &style.class_name {
                Some(class) => generate_scoped(&opts, class),
                None => generate(&opts),
            };
            match o {
                Some(path) => {
                    fs::write(&path, &css)
                        .with_context(|| format!("cannot write '{}'", path.display()))?;
                    eprintln!("wrote {}", path.display());
                }
                None => print!("{css}"),
            }
        }

        Commands::Defaults => {
            println!("{}", StyleOptions::default().to_json_pretty());
        }

        Commands::Preview { style } => {
            let opts = style.resolve()?;
            let doc = MemoryDocument::new();
            let injector = Injector::new(doc.clone());

            let cancel = match &style.class_name {
                // Stand-in element carrying the requested class, targeted by selector.
                Some(class) => {
                    let el = doc.create_element("div", None);
                    doc.add_class(&el, class)?;
                    injector.apply_to(Target::Selector(format!(".{class}")), &opts)
                }
                None => injector.apply(&opts),
            };
            let id = cancel
                .style_id()
                .context("styles were not injected")?
                .to_string();

            eprintln!("style node: {id}");
            if let Some(class) = cancel.class_name() {
                eprintln!("class:      {class}");
            }
            if opts.hide_scrollbar {
                eprintln!("mode:       hidden");
            } else {
                let colors = ScrollbarColors::derive(&opts);
                eprintln!("thumb:      {}", colors.thumb);
                eprintln!("hover:      {}", colors.thumb_hover);
                eprintln!("track:      {}", colors.track);
            }
            print!("{}", doc.style_text(&id).unwrap_or_default());
        }
    }
    Ok(())
}

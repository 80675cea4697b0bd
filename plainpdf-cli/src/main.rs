use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use plainpdf::batch::{jobs_for_inputs, BatchOptions, BatchProcessor};
use plainpdf::{DocumentInfo, LayoutConfig, StandardFont, TextConverter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "plainpdf",
    about = "Convert plain text files to PDF",
    version,
    author
)]
struct Cli {
    /// Show debug output (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one text file
    Convert {
        /// Input text file (UTF-8)
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Document title stored in the info dictionary
        #[arg(long)]
        title: Option<String>,

        /// Document author stored in the info dictionary
        #[arg(long)]
        author: Option<String>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Convert many text files into a directory
    Batch {
        /// Input text files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory receiving `<input stem>.pdf` files
        #[arg(short = 'd', long)]
        out_dir: PathBuf,

        /// Number of parallel workers
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Skip remaining files after the first failure
        #[arg(long)]
        stop_on_error: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Layout overrides applied on top of the defaults or `--config`.
#[derive(Args)]
struct LayoutArgs {
    /// JSON file with layout settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page width in points
    #[arg(long)]
    page_width: Option<f64>,

    /// Page height in points
    #[arg(long)]
    page_height: Option<f64>,

    /// Text origin distance from the left edge
    #[arg(long)]
    left_margin: Option<f64>,

    /// Baseline of the first line, from the bottom edge
    #[arg(long)]
    top_offset: Option<f64>,

    /// Standard font name (e.g. Helvetica, Times-Roman, Courier)
    #[arg(long)]
    font: Option<StandardFont>,

    /// Font size in points
    #[arg(long)]
    font_size: Option<f64>,

    /// Distance between baselines
    #[arg(long)]
    leading: Option<f64>,

    /// Maximum characters per line
    #[arg(short, long)]
    wrap_width: Option<usize>,

    /// Maximum lines per page
    #[arg(short, long)]
    lines_per_page: Option<usize>,
}

impl LayoutArgs {
    fn resolve(&self) -> Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => LayoutConfig::default(),
        };

        let overrides = [
            (&mut config.page_width, self.page_width),
            (&mut config.page_height, self.page_height),
            (&mut config.left_margin, self.left_margin),
            (&mut config.top_offset, self.top_offset),
            (&mut config.font_size, self.font_size),
            (&mut config.leading, self.leading),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(font) = self.font {
            config.font = font;
        }
        if let Some(columns) = self.wrap_width {
            config.wrap_width = columns;
        }
        if let Some(lines) = self.lines_per_page {
            config.lines_per_page = lines;
        }
        tracing::debug!(?config, "resolved layout");
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<LayoutConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid layout config in {}", path.display()))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "plainpdf=info",
        1 => "plainpdf=debug",
        _ => "plainpdf=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            title,
            author,
            layout,
        } => {
            let info = DocumentInfo {
                title,
                author,
                ..DocumentInfo::default()
            };
            let converter = TextConverter::new(layout.resolve()?)?.with_info(info);
            let report = converter
                .convert_file(&input, &output)
                .with_context(|| format!("Failed to convert {}", input.display()))?;

            println!(
                "Converted {} -> {} ({} pages, {} bytes)",
                input.display(),
                output.display(),
                report.pages,
                report.bytes
            );
        }

        Commands::Batch {
            inputs,
            out_dir,
            jobs,
            stop_on_error,
            layout,
        } => {
            let converter = TextConverter::new(layout.resolve()?)?;
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("Failed to create {}", out_dir.display()))?;

            let mut options = BatchOptions::default().stop_on_error(stop_on_error);
            if let Some(jobs) = jobs {
                options = options.with_parallelism(jobs);
            }

            let mut processor = BatchProcessor::new(converter, options);
            processor.add_jobs(jobs_for_inputs(&inputs, &out_dir)?);
            let summary = processor.execute();

            for result in &summary.results {
                println!("{result}");
            }
            println!();
            print!("{summary}");

            if !summary.all_successful() {
                bail!(
                    "{} of {} conversions did not complete",
                    summary.total_jobs - summary.successful,
                    summary.total_jobs
                );
            }
        }
    }

    Ok(())
}

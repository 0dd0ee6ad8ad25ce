use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    match option_env!("VERGEN_GIT_DESCRIBE") {
        Some(describe) if !describe.is_empty() => {
            format!("{}-{}", env!("CARGO_PKG_VERSION"), describe)
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
});

#[derive(Parser)]
#[command(name="locusview",
          version=&**FULL_VERSION,
          about="Correlates locus sequences with per-base predictions",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(global = true)]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Render alignment tables as an image or HTML page")]
    Plot(PlotArgs),
    #[clap(about = "Write joined cells as a tab-separated table")]
    Export(ExportArgs),
    #[clap(about = "Check both input files and report malformed rows")]
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "predictions")]
    #[clap(help = "CSV file with per-base predictions (id, index and probability columns)")]
    #[clap(value_name = "PREDICTIONS")]
    #[arg(value_parser = check_file_exists)]
    pub predictions_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'l')]
    #[clap(long = "loci")]
    #[clap(help = "Output CSV file with locus ids and sequences")]
    #[clap(value_name = "OUTPUT_CSV")]
    #[arg(value_parser = check_file_exists)]
    pub loci_path: PathBuf,

    #[clap(long = "strict")]
    #[clap(help = "Fail on the first malformed row instead of skipping it")]
    pub strict: bool,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("plot")))]
#[command(arg_required_else_help(true))]
pub struct PlotArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path (.svg, .png, .pdf or .html)")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: String,

    #[clap(long = "locus-id")]
    #[clap(value_name = "LOCUS_ID")]
    #[clap(help = "Only plot loci with this id")]
    pub locus_id: Option<String>,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "cell-width")]
    #[clap(value_name = "WIDTH")]
    #[clap(help = "Width of a single base cell")]
    #[clap(default_value = "32")]
    #[arg(value_parser = cell_width_in_range)]
    pub cell_width: u32,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "font-family")]
    #[clap(value_name = "FONT_FAMILY")]
    #[clap(help = "Font family used for labels")]
    pub font_family: Option<String>,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("export")))]
#[command(arg_required_else_help(true))]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output TSV path (stdout if omitted)")]
    #[clap(value_name = "TSV")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: Option<String>,

    #[clap(long = "locus-id")]
    #[clap(value_name = "LOCUS_ID")]
    #[clap(help = "Only export loci with this id")]
    pub locus_id: Option<String>,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("validate")))]
#[command(arg_required_else_help(true))]
pub struct ValidateArgs {
    #[clap(required = true)]
    #[clap(short = 'p')]
    #[clap(long = "predictions")]
    #[clap(help = "CSV file with per-base predictions (id, index and probability columns)")]
    #[clap(value_name = "PREDICTIONS")]
    #[arg(value_parser = check_file_exists)]
    pub predictions_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'l')]
    #[clap(long = "loci")]
    #[clap(help = "Output CSV file with locus ids and sequences")]
    #[clap(value_name = "OUTPUT_CSV")]
    #[arg(value_parser = check_file_exists)]
    pub loci_path: PathBuf,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn check_image_path(s: &str) -> Result<String> {
    let prefix_check = check_prefix_path(s)?;
    let path = Path::new(s);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(cellgrid::FileType::from_extension);
    match extension {
        Some(_) => Ok(prefix_check),
        None => Err("Image must have an extension of .svg, .png, .pdf or .html".to_string()),
    }
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn cell_width_in_range(s: &str) -> Result<u32> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid cell width", s))?;
    if (8..=256).contains(&width) {
        Ok(width)
    } else {
        Err(format!("Cell width must be between 8 and 256, got: {}", width))
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

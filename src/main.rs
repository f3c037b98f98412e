use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pencel::error::RenderError;
use pencel::models::{AppConfig, CONFIG_ENV};
use pencel::rendering::{self, terminal, RenderMode};
use pencel::services::{load_palette, load_png};
use pencil_quantize::{DistanceMetric, KernelType, Sketcher};

#[derive(Parser)]
#[command(name = "pencel")]
#[command(about = "Render images as pencil sketches from a two-tone material palette")]
struct Cli {
    /// YAML config file (defaults to $PENCEL_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sketch a PNG image on the terminal
    Render {
        /// Input PNG file
        #[arg(short, long)]
        image: PathBuf,

        /// Palette definition file
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Grid width in cells
        #[arg(long)]
        width: Option<u32>,

        /// Grid height in cells
        #[arg(long)]
        height: Option<u32>,

        /// Resampling kernel (see `pencel kernels`)
        #[arg(short, long)]
        kernel: Option<KernelType>,

        /// Color distance metric: "redmean" or "euclidean"
        #[arg(short, long)]
        metric: Option<DistanceMetric>,

        /// Cell rendering
        #[arg(long, value_enum, default_value_t = RenderMode::Blocks)]
        mode: RenderMode,

        /// Also write the sketch as a PNG file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixels per cell in the PNG output
        #[arg(short, long)]
        scale: Option<u32>,
    },
    /// List palette entries as colored swatches
    Palette {
        /// Palette definition file
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
    /// List resampling kernels and whether they are implemented
    Kernels,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pencel=info,pencil_quantize=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Render {
            image,
            palette,
            width,
            height,
            kernel,
            metric,
            mode,
            output,
            scale,
        }) => {
            let config = AppConfig::load(cli.config.as_deref())?;
            run_render_command(
                &config,
                RenderArgs {
                    image,
                    palette,
                    width,
                    height,
                    kernel,
                    metric,
                    mode,
                    output,
                    scale,
                },
            )
        }
        Some(Commands::Palette { palette }) => {
            let config = AppConfig::load(cli.config.as_deref())?;
            run_palette_command(palette.as_deref().unwrap_or(&config.palette))
        }
        Some(Commands::Kernels) => {
            run_kernels_command();
            Ok(())
        }
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

/// Command-line overrides for `render`
struct RenderArgs {
    image: PathBuf,
    palette: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
    kernel: Option<KernelType>,
    metric: Option<DistanceMetric>,
    mode: RenderMode,
    output: Option<PathBuf>,
    scale: Option<u32>,
}

/// Decode, sketch and print an image
fn run_render_command(config: &AppConfig, args: RenderArgs) -> anyhow::Result<()> {
    let kernel = args.kernel.unwrap_or(config.kernel);
    let metric = args.metric.unwrap_or(config.metric);
    let width = args.width.unwrap_or(config.grid.width);
    let height = args.height.unwrap_or(config.grid.height);
    let scale = args.scale.unwrap_or(config.scale);
    let palette_path = args.palette.as_deref().unwrap_or(&config.palette);

    // Both inputs are validated before any resampling happens
    let palette = load_palette(palette_path)?;
    let source = load_png(&args.image)?;

    tracing::info!(width, height, %kernel, %metric, "Sketching");

    let sketcher = Sketcher::new(palette)
        .grid(width, height)
        .kernel(kernel)
        .distance_metric(metric);
    let sketch = sketcher.sketch(&source).map_err(RenderError::from)?;

    print!("{}", terminal::render(&sketch, args.mode));
    println!();
    print!("{}", terminal::render_legend(&sketch));

    if let Some(output) = args.output {
        rendering::write_png(&output, &sketch, scale)
            .with_context(|| format!("Failed to write {}", output.display()))?;
    }

    Ok(())
}

/// Print every palette entry
fn run_palette_command(path: &Path) -> anyhow::Result<()> {
    let palette = load_palette(path)?;
    print!("{}", terminal::render_palette(&palette));
    Ok(())
}

/// Print the kernel table
fn run_kernels_command() {
    for kernel in KernelType::ALL {
        let status = if kernel.is_implemented() {
            "available"
        } else {
            "not implemented"
        };
        let default = if kernel == KernelType::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<12} {status}{default}", kernel.name());
    }
}

/// Show configuration and usage when no command is given
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Pencel v{VERSION} - pencil sketches from a two-tone palette\n");

    let env_config = std::env::var(CONFIG_ENV).ok();
    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        env_config.as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    match AppConfig::load(config_path) {
        Ok(config) => {
            let palette_state = if config.palette.exists() {
                "found"
            } else {
                "missing"
            };
            println!(
                "  Palette: {} ({palette_state})",
                config.palette.display()
            );
            println!("  Grid:    {}x{}", config.grid.width, config.grid.height);
            println!("  Kernel:  {}", config.kernel);
            println!("  Metric:  {}", config.metric);
            println!("  Scale:   {}", config.scale);
        }
        Err(e) => println!("  Error: {e}"),
    }

    println!("\nUsage:");
    println!("  pencel render --image <PNG>   Sketch an image");
    println!("  pencel palette                List palette entries");
    println!("  pencel kernels                List resampling kernels");
    println!("  pencel --help                 Show all options");
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tdsp::commands::{self, MixOp};
use tdsp::config::{AppConfig, Base};
use tdsp_color::{EightBit, FadeKind, Normal};

#[derive(Parser)]
#[command(name = "tdsp")]
#[command(about = "Named colors, color arithmetic and fades")]
struct Cli {
    /// YAML config file (defaults to $TDSP_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Channel units: "unit" (0..1) or "byte" (0..255)
    #[arg(long, global = true, value_enum)]
    base: Option<Base>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the named colors
    Names {
        /// Only names containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Print name, channels and hex of each color
    Show {
        /// Color names, hex codes, "gray N" or "r, g, b"
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Print a fade from one color to another
    Fade {
        from: String,
        to: String,

        /// Number of colors, both ends included
        #[arg(short, long)]
        steps: Option<usize>,

        /// Fade curve: linear, sqr or sqrt
        #[arg(short, long)]
        kind: Option<FadeKind>,
    },
    /// Combine two colors
    Mix {
        a: String,
        b: String,

        #[arg(short, long, value_enum, default_value_t = MixOp::Add)]
        op: MixOp,

        /// Position for interpolate: 0 gives A, 1 gives B
        #[arg(short, long, default_value_t = 0.5)]
        t: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tdsp=warn,tdsp_color=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let (config, source) = AppConfig::load(cli.config.as_deref())?;
    let base = cli.base.unwrap_or(config.base);

    let lines: Vec<String> = match cli.command {
        Some(Commands::Names { filter }) => commands::names(filter.as_deref())
            .into_iter()
            .map(String::from)
            .collect(),
        Some(Commands::Show { colors }) => match base {
            Base::Unit => commands::show::<Normal>(&config, &colors)?,
            Base::Byte => commands::show::<EightBit>(&config, &colors)?,
        },
        Some(Commands::Fade {
            from,
            to,
            steps,
            kind,
        }) => {
            let mut fade = config.fade.fade();
            if let Some(kind) = kind {
                fade.kind = kind;
            }
            let steps = steps.unwrap_or(config.fade.steps);
            match base {
                Base::Unit => commands::fade::<Normal>(&config, &from, &to, steps, &fade)?,
                Base::Byte => commands::fade::<EightBit>(&config, &from, &to, steps, &fade)?,
            }
        }
        Some(Commands::Mix { a, b, op, t }) => vec![match base {
            Base::Unit => commands::mix::<Normal>(&config, &a, &b, op, t)?,
            Base::Byte => commands::mix::<EightBit>(&config, &a, &b, op, t)?,
        }],
        None => commands::status(&config, &source),
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

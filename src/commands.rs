//! Command implementations, returning the lines the CLI prints.

use tdsp_color::names::{canonicalize, table};
use tdsp_color::{fade_steps, ColorValue, Fade, Number, Range};

use crate::config::{AppConfig, Base, ConfigSource};
use crate::error::CommandError;

/// Binary operation applied by the `mix` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MixOp {
    #[default]
    Add,
    Sub,
    Mul,
    Interpolate,
}

/// Parse a color, trying the configured aliases first.
pub fn resolve<R: Range>(config: &AppConfig, input: &str) -> Result<ColorValue<R>, CommandError> {
    if let Some(value) = config.alias(input) {
        return value.parse().map_err(|source| CommandError::InvalidAlias {
            alias: input.to_string(),
            value: value.to_string(),
            source,
        });
    }
    input.parse().map_err(|source| CommandError::InvalidColor {
        input: input.to_string(),
        source,
    })
}

/// One line per color: display name, channels and hex.
pub fn describe<R: Range>(color: ColorValue<R>) -> String {
    let [r, g, b] = color.channels();
    format!("{color} ({r}, {g}, {b}) #{:06X}", color.to_hex())
}

/// Table names containing `filter`, in table order.
pub fn names(filter: Option<&str>) -> Vec<&'static str> {
    let filter = filter.map(canonicalize);
    table()
        .names()
        .filter(|name| filter.as_deref().map_or(true, |f| name.contains(f)))
        .collect()
}

pub fn show<R: Range>(config: &AppConfig, inputs: &[String]) -> Result<Vec<String>, CommandError> {
    inputs
        .iter()
        .map(|input| resolve::<R>(config, input).map(describe))
        .collect()
}

pub fn fade<R: Range>(
    config: &AppConfig,
    from: &str,
    to: &str,
    steps: usize,
    fade: &Fade,
) -> Result<Vec<String>, CommandError> {
    let from = resolve::<R>(config, from)?;
    let to = resolve::<R>(config, to)?;
    tracing::debug!(%from, %to, steps, kind = %fade.kind, "Fading");
    Ok(fade_steps(fade, from, to, steps)
        .into_iter()
        .map(describe)
        .collect())
}

/// `t` is only used by [`MixOp::Interpolate`].
pub fn mix<R: Range>(
    config: &AppConfig,
    a: &str,
    b: &str,
    op: MixOp,
    t: f64,
) -> Result<String, CommandError> {
    let a = resolve::<R>(config, a)?;
    let b = resolve::<R>(config, b)?;
    let result = match op {
        MixOp::Add => a + b,
        MixOp::Sub => a - b,
        // Product of two scaled colors carries the ratio twice
        MixOp::Mul => (a * b).map(|c| c / R::RATIO),
        MixOp::Interpolate => a.interpolate(b, R::Number::from_f64(t)),
    };
    Ok(describe(result))
}

pub fn status(config: &AppConfig, source: &ConfigSource) -> Vec<String> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    let aliases: Vec<&str> = config.aliases.keys().map(String::as_str).collect();

    vec![
        format!("tdsp v{VERSION}"),
        String::new(),
        format!("  Named colors: {}", table().len()),
        format!("  Config:       {source}"),
        format!(
            "  Base:         {}",
            match config.base {
                Base::Unit => "unit (0..1)",
                Base::Byte => "byte (0..255)",
            }
        ),
        format!(
            "  Fade:         {} x{} ({}..{})",
            config.fade.kind, config.fade.steps, config.fade.begin, config.fade.end
        ),
        format!(
            "  Aliases:      {}",
            if aliases.is_empty() {
                "(none)".to_string()
            } else {
                aliases.join(", ")
            }
        ),
    ]
}

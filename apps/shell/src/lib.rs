//! The `sitely` command: resolves a plan, shows its entitlements and renders the
//! dashboard header.

use anyhow::{Context, anyhow};
use clap::Parser;
use sitely::domain::PlanType;
use sitely::domain::config::ShellConfig;
use sitely::features::billing::Entitlements;
use sitely::kernel::config::load_config;
use sitely::ui::ssr::render_component;
use sitely::ui::{PlanOverview, PlanOverviewProps};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Default, Parser)]
#[command(name = "sitely")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Show plan entitlements and render the Sitely dashboard header")]
pub struct Cli {
    /// Plan identifier reported by the subscription service (e.g. 'basic', 'pro')
    #[arg(short, long)]
    pub plan: Option<String>,
    /// Fail on unknown plan identifiers instead of falling back to 'basic'
    #[arg(long)]
    pub strict: bool,
    /// Header title
    #[arg(short, long)]
    pub title: Option<String>,
    /// Header description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Config file (TOML, JSON or YAML); SITELY__* variables override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Run the billing upgrade hook before rendering
    #[arg(long)]
    pub upgrade: bool,
    /// Print the plan's feature set as JSON instead of HTML
    #[arg(long)]
    pub json: bool,
    /// Default log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Loads the config file when one is given, then applies command-line overrides.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn effective_config(cli: &Cli) -> anyhow::Result<ShellConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config::<ShellConfig>(Some(path))
            .with_context(|| format!("loading {}", path.display()))?,
        None => ShellConfig::default(),
    };

    if let Some(plan) = &cli.plan {
        config.plan = Some(plan.clone());
    }
    if let Some(title) = &cli.title {
        config.title.clone_from(title);
    }
    if let Some(description) = &cli.description {
        config.description = Some(description.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log.level.clone_from(level);
    }
    Ok(config)
}

/// Resolves the plan. Lenient mode never fails; strict mode rejects unknown identifiers.
///
/// # Errors
/// In strict mode, returns an error naming the unknown identifier.
pub fn resolve_entitlements(plan: Option<&str>, strict: bool) -> anyhow::Result<Entitlements> {
    match plan {
        Some(raw) if strict => raw
            .parse::<PlanType>()
            .map(Entitlements::from)
            .map_err(|_| anyhow!("unknown plan '{raw}', expected 'basic' or 'pro'")),
        _ => Ok(Entitlements::resolve(plan)),
    }
}

/// Produces the command output: header HTML, or the feature set as JSON.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(
    config: &ShellConfig,
    entitlements: &Entitlements,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        return serde_json::to_string_pretty(entitlements.features())
            .context("serializing plan features");
    }

    Ok(render_component(
        PlanOverview,
        PlanOverviewProps {
            title: config.title.clone(),
            description: config.description.clone(),
            plan: entitlements.plan(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli::parse_from(["sitely", "--plan", "pro", "--title", "Dashboard"]);
        let config = effective_config(&cli).unwrap();
        assert_eq!(config.plan.as_deref(), Some("pro"));
        assert_eq!(config.title, "Dashboard");
        assert!(config.description.is_none());
    }

    #[test]
    fn lenient_resolution_falls_back() {
        let entitlements = resolve_entitlements(Some("gold"), false).unwrap();
        assert_eq!(entitlements.plan(), PlanType::Basic);
    }

    #[test]
    fn strict_resolution_rejects_unknown_ids() {
        let err = resolve_entitlements(Some("gold"), true).unwrap_err();
        assert!(err.to_string().contains("unknown plan 'gold'"));
        assert!(resolve_entitlements(None, true).is_ok());
    }

    #[test]
    fn json_output_uses_camel_case() {
        let output =
            render(&ShellConfig::default(), &Entitlements::from(PlanType::Pro), true).unwrap();
        assert!(output.contains("\"maxSites\": 10"));
        assert!(output.contains("\"customDomain\": true"));
    }

    #[test]
    fn html_output_contains_header_and_badge() {
        let output = render(&ShellConfig::default(), &Entitlements::default(), false).unwrap();
        assert!(output.contains("My Sites"));
        assert!(output.contains("plan-badge-basic"));
    }
}

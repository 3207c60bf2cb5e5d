//! # Rendering
//!
//! Turns command results into output lines.
//!
//! ## Text Layout
//! ```text
//! selected stock
//!   [x] Core    Included (~$185~)
//!   [x] Stock   $370                core inc.
//!   [ ] Maps    ~$250~ $65          core inc.
//!   [ ] Gantt   ~$222~ $37          core inc.
//!   Total $370   bundle owner: stock
//!   Core is included, add-on pricing applied
//! ```
//!
//! JSON mode writes one document per result: the tagged [`Response`] on
//! success, the [`ApiError`] on failure.

use std::fmt::Write as _;

use bundle_core::{Product, Quote, QuoteLine, ToggleOutcome};

use crate::commands::{Response, SelectionResponse};
use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

/// Renders a command result according to the configured output format.
pub fn render(config: &ConfigState, result: &Result<Response, ApiError>) -> Result<String, ApiError> {
    match config.output {
        OutputFormat::Json => match result {
            Ok(response) => Ok(serde_json::to_string(response)?),
            Err(err) => Ok(serde_json::to_string(err)?),
        },
        OutputFormat::Text => Ok(match result {
            Ok(response) => render_text(config, response),
            Err(err) => format!("error: {}", err.message),
        }),
    }
}

fn render_text(config: &ConfigState, response: &Response) -> String {
    match response {
        Response::Selection(selection) => render_selection(config, selection),
        Response::Catalog(products) => render_catalog(config, products),
        Response::Config(config) => format!(
            "currency {} ({} decimals), output {:?}, log filter {}",
            config.currency_symbol,
            config.currency_decimals,
            config.output,
            config.log_filter.as_deref().unwrap_or("-"),
        ),
        Response::Help(lines) => lines.join("\n"),
        Response::Quit => "bye".to_string(),
    }
}

fn render_selection(config: &ConfigState, response: &SelectionResponse) -> String {
    let mut out = String::new();

    if let Some(outcome) = response.outcome {
        let summary = match outcome {
            ToggleOutcome::Selected => "selected",
            ToggleOutcome::Deselected => "deselected",
            ToggleOutcome::Rejected => "core is supplied by a selected product, not changed",
        };
        let _ = writeln!(out, "{}", summary);
    }

    render_quote(config, &response.quote, &mut out);
    out.trim_end().to_string()
}

fn render_quote(config: &ConfigState, quote: &Quote, out: &mut String) {
    for line in &quote.lines {
        let _ = writeln!(
            out,
            "  [{}] {:<7} {:<20} {}",
            if line.active { 'x' } else { ' ' },
            line.name,
            price_label(config, line),
            line.subtitle.as_deref().unwrap_or(""),
        );
    }

    let _ = write!(out, "  Total {}", config.format_currency(quote.total.cents()));
    if let Some(owner) = &quote.bundle_owner {
        let _ = write!(out, "   bundle owner: {}", owner);
    }
    out.push('\n');

    if quote.addon_pricing_applied {
        let _ = writeln!(out, "  Core is included, add-on pricing applied");
    }
}

fn price_label(config: &ConfigState, line: &QuoteLine) -> String {
    let list = config.format_currency(line.list_price.cents());
    match line.display_price {
        None => format!("Included (~{}~)", list),
        Some(price) if line.discounted => {
            format!("~{}~ {}", list, config.format_currency(price.cents()))
        }
        Some(price) => config.format_currency(price.cents()),
    }
}

fn render_catalog(config: &ConfigState, products: &[Product]) -> String {
    products
        .iter()
        .map(|p| {
            let addon = p
                .addon_price
                .map(|a| format!(" (add-on {})", config.format_currency(a.cents())))
                .unwrap_or_default();
            format!(
                "  {:<7} {:<7} {}{}",
                p.id,
                p.name,
                config.format_currency(p.base_price.cents()),
                addon
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{dispatch, Command};
    use crate::Shell;

    fn run(shell: &Shell, line: &str) -> String {
        let command: Command = line.parse().unwrap();
        render(&shell.config, &dispatch(shell, &command)).unwrap()
    }

    #[test]
    fn test_text_shows_included_core() {
        let shell = Shell::default();
        let out = run(&shell, "toggle stock");

        assert!(out.starts_with("selected"));
        assert!(out.contains("[x] Core"));
        assert!(out.contains("Included (~$185~)"));
        assert!(out.contains("~$250~ $65"));
        assert!(out.contains("Total $370   bundle owner: stock"));
        assert!(out.contains("add-on pricing applied"));
    }

    #[test]
    fn test_text_rejected_core() {
        let shell = Shell::default();
        run(&shell, "toggle gantt");
        let out = run(&shell, "toggle core");
        assert!(out.starts_with("core is supplied"));
        assert!(out.contains("Total $222"));
    }

    #[test]
    fn test_text_error() {
        let shell = Shell::default();
        let out = render(
            &shell.config,
            &Err(ApiError::not_found("Product", "charts")),
        )
        .unwrap();
        assert_eq!(out, "error: Product not found: charts");
    }

    #[test]
    fn test_json_output() {
        let mut shell = Shell::default();
        shell.config.output = OutputFormat::Json;

        let out = run(&shell, "toggle maps");
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["type"], "selection");
        assert_eq!(json["data"]["outcome"], "selected");
        assert_eq!(json["data"]["order"][0], "maps");
        assert_eq!(json["data"]["quote"]["total"], 250);

        let err = render(&shell.config, &Err(ApiError::not_found("Product", "x"))).unwrap();
        let json: serde_json::Value = serde_json::from_str(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[test]
    fn test_catalog_listing() {
        let shell = Shell::default();
        let out = run(&shell, "catalog");
        assert!(out.contains("maps    Maps    $250 (add-on $65)"));
        assert!(out.lines().next().unwrap().contains("core"));
    }
}

//! Check command implementation

use std::process::ExitCode;

use super::{Context, EXIT_ERROR, EXIT_SUCCESS};
use crate::catalog::TokenSource;

fn source_line(label: &str, source: &TokenSource) -> String {
    let mark = if source.exists() { "✅ Found" } else { "⚠️  Missing" };
    format!("{} {} ({})", mark, label, source.label().display())
}

/// Report configured sources and what the catalog contains
pub fn run_check(context: &Context) -> ExitCode {
    match &context.config_path {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: defaults (no vita.toml found)"),
    }
    println!("Root:   {}", context.root.display());
    println!();

    let engine = context.engine();
    let sources = engine.store().sources();
    println!("{}", source_line("token source", &sources.primary));
    if let Some(secondary) = &sources.secondary {
        println!("{}", source_line("figma export", secondary));
    }

    let catalog = engine.catalog();
    println!();
    println!("Colors:     {}", catalog.colors.len());
    println!("Typography: {}", catalog.typography.len());
    println!("Spacing:    {}", catalog.spacing.len());
    println!(
        "Components: {}",
        catalog.components.buttons.len()
            + catalog.components.inputs.len()
            + catalog.components.cards.len()
    );
    println!("Layouts:    {}", catalog.examples.layouts.len());

    if sources.primary.exists() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

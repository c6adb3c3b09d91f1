//! `nexaforge show`: print a stored blueprint.

use anyhow::{Result, bail};
use console::style;

use nexaforge_core::repository::blueprint::BlueprintStore;
use nexaforge_types::forge::{BillingInterval, ForgeResponse};

use crate::state::AppState;

pub async fn show_project(state: &AppState, slug: &str, json: bool) -> Result<()> {
    let Some(store) = state.pipeline.store() else {
        bail!("blueprint storage is not configured (set SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY or use storage = \"sqlite\")");
    };

    let Some(blueprint) = store.get(slug).await? else {
        bail!("project '{slug}' not found");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&blueprint)?);
        return Ok(());
    }

    print_blueprint(&blueprint);
    Ok(())
}

/// Styled summary of a blueprint, shared with `nexaforge forge`.
pub fn print_blueprint(blueprint: &ForgeResponse) {
    println!();
    println!(
        "  {}  {}",
        style("Slug:").bold(),
        style(&blueprint.project_slug).cyan()
    );
    println!(
        "  {}  {}",
        style("Generated:").bold(),
        style(blueprint.generated_at.to_rfc3339()).dim()
    );
    println!(
        "  {}  {} / {}",
        style("Positioning:").bold(),
        blueprint.architect.industry,
        blueprint.architect.theme
    );
    println!("    {}", blueprint.architect.positioning);
    println!();

    println!("  {}", style("Sitemap").bold().underlined());
    for node in &blueprint.architect.sitemap {
        println!(
            "    {} {}  {}",
            style("•").dim(),
            style(&node.title).cyan(),
            style(&node.description).dim()
        );
    }
    println!();

    println!(
        "  {}  {}",
        style("Headline:").bold(),
        blueprint.copywriter.hero_headline
    );
    println!("    {}", blueprint.copywriter.sub_headline);
    println!();

    let visual = &blueprint.visual;
    println!(
        "  {}  {} ({})",
        style("Palette:").bold(),
        visual.palette_name,
        visual.color_palette.accents.join(" ")
    );
    match &visual.hero_image_url {
        Some(url) => println!("  {}  {}", style("Hero image:").bold(), style(url).underlined()),
        None => println!(
            "  {}  {}",
            style("Hero image:").bold(),
            style("none").dim()
        ),
    }
    println!();

    println!("  {}", style("Products").bold().underlined());
    for product in &blueprint.integration.stripe_products {
        let cadence = match product.interval {
            BillingInterval::Monthly => "/month",
            BillingInterval::OneTime => " once",
        };
        println!(
            "    {} {}  {}{}",
            style("•").dim(),
            product.name,
            style(format_cents(product.price)).green(),
            cadence
        );
    }
    if let Some(booking) = &blueprint.integration.booking_configuration {
        println!("  {}  {:?}", style("Booking:").bold(), booking.provider);
        println!("    {}", style(&booking.setup_guide).dim());
    }
    println!();
}

fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

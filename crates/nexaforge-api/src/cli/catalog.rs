//! `nexaforge catalog`: the fixed option lists a request is validated against.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use nexaforge_types::catalog::{INDUSTRY_OPTIONS, THEME_OPTIONS};
use nexaforge_types::forge::Tone;

pub fn show_catalog(json: bool) -> Result<()> {
    let tones: Vec<String> = Tone::ALL.iter().map(ToString::to_string).collect();

    if json {
        let catalog = serde_json::json!({
            "industries": INDUSTRY_OPTIONS,
            "themes": THEME_OPTIONS,
            "tones": tones,
        });
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Industry").fg(Color::White),
        Cell::new("Theme").fg(Color::White),
    ]);

    let rows = INDUSTRY_OPTIONS.len().max(THEME_OPTIONS.len());
    for i in 0..rows {
        table.add_row(vec![
            Cell::new(i + 1).fg(Color::DarkGrey),
            Cell::new(INDUSTRY_OPTIONS.get(i).copied().unwrap_or("")),
            Cell::new(THEME_OPTIONS.get(i).copied().unwrap_or("")),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!("  {}  {}", style("Tones:").bold(), tones.join(", "));
    println!();

    Ok(())
}

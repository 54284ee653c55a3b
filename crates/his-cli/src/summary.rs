//! Terminal rendering of the report.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use his_ingest::{any_to_f64, any_to_string};
use his_model::{DayConvention, columns::display};

use crate::types::ReportResult;

pub fn print_report(result: &ReportResult) {
    println!("Fuente de Datos: HISMINSA");
    println!("Última Actualización: {}", result.updated);
    if result.used_demo_data {
        println!("(datos de ejemplo: fuente no encontrada)");
    }
    println!();

    let top = result.summary.top(result.top_n);
    print_production_table(result, &top);
    println!();
    print_trend_table(result);
    println!();
    print_headline_totals(result);

    if let Some(path) = &result.exported {
        println!();
        println!("Resumen completo exportado a: {}", path.display());
    }
}

/// Ranked production table: base columns, then the day columns and TOTAL
/// when requested. Header names are uppercased like the on-screen report.
fn print_production_table(result: &ReportResult, top: &DataFrame) {
    let metric_column = result.summary.metric.column();
    let mut wanted: Vec<&str> = vec![
        display::PROFESSIONAL,
        display::PROFESSION,
        display::ESTABLISHMENT,
        display::SERVED,
        metric_column,
    ];
    if result.with_days {
        wanted.extend(result.summary.day_display.iter().map(String::as_str));
        wanted.push(display::TOTAL);
    }
    let table_columns: Vec<(&str, &polars::prelude::Column)> = wanted
        .into_iter()
        .filter_map(|name| top.column(name).ok().map(|column| (name, column)))
        .collect();

    let mut table = Table::new();
    styled(&mut table);
    let mut header = vec![header_cell("ITEM")];
    for (name, _) in &table_columns {
        // The fallback metric is still shown under the attentions label.
        let label = if *name == display::DAY_SUM {
            display::ATTENTIONS
        } else {
            name
        };
        header.push(header_cell(&label.to_uppercase()));
    }
    table.set_header(header);

    for row in 0..top.height() {
        let mut cells = vec![Cell::new(row + 1).set_alignment(CellAlignment::Center)];
        for (_, column) in &table_columns {
            let value = column.get(row).unwrap_or(AnyValue::Null);
            cells.push(value_cell(&value));
        }
        table.add_row(cells);
    }
    println!("{table}");
}

fn print_trend_table(result: &ReportResult) {
    if result.trend.is_empty() {
        let span = match result.schema.convention {
            DayConvention::Bare => "'1' a '31'",
            DayConvention::Suffixed => "'1.1' a '31.1'",
        };
        println!(
            "Sin datos de producción diaria (columnas {span}) para la tendencia."
        );
        return;
    }
    let mut table = Table::new();
    styled(&mut table);
    table.set_header(vec![header_cell("DÍA"), header_cell("ATENCIONES")]);
    for point in &result.trend {
        table.add_row(vec![
            Cell::new(point.day).set_alignment(CellAlignment::Center),
            Cell::new(format_thousands(point.total)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("Tendencia Diaria de Producción General");
    println!("{table}");
}

/// Headline totals over the FULL summary, not the top-N view. A missing
/// served column degrades to zero like the on-screen metric.
fn print_headline_totals(result: &ReportResult) {
    let served = result
        .summary
        .column_total(display::SERVED)
        .unwrap_or(0.0);
    let attentions = result
        .summary
        .column_total(result.summary.metric.column())
        .unwrap_or(0.0);
    println!("Total Atendidos: {}", format_thousands(served));
    println!(
        "Total Atenciones Registradas: {}",
        format_thousands(attentions)
    );
}

pub fn print_schema(result: &ReportResult) {
    let schema = &result.schema;
    println!("Source: {}", result.source.display());
    println!("Última Actualización: {}", result.updated);
    let convention = match schema.convention {
        DayConvention::Bare => "bare (\"1\"..\"31\")",
        DayConvention::Suffixed => "suffixed (\"1.1\"..\"31.1\")",
    };
    if schema.has_day_columns() {
        let first = schema.day_columns.first().map(|c| c.day).unwrap_or(0);
        let last = schema.day_columns.last().map(|c| c.day).unwrap_or(0);
        println!(
            "Day columns: {} ({convention}), days {first}..{last}",
            schema.day_columns.len()
        );
    } else {
        println!("Day columns: none (no daily view available)");
    }
    println!(
        "Attentions column: {}",
        schema.attention_total.as_deref().unwrap_or("absent (day-sum fallback)")
    );
    println!(
        "Served column: {}",
        schema.served_total.as_deref().unwrap_or("absent")
    );
    println!("Group columns: {}", schema.group_columns().join(", "));
    println!("Professionals in summary: {}", result.summary.height());
}

fn styled(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &AnyValue<'_>) -> Cell {
    match any_to_f64(value) {
        Some(number) => Cell::new(format_thousands(number)).set_alignment(CellAlignment::Right),
        None => Cell::new(any_to_string(value)),
    }
}

/// Integer rendering with thousands separators ("12,345").
pub fn format_thousands(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, byte) in bytes.iter().enumerate() {
        if idx > 0 && (bytes.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*byte as char);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(-4500.0), "-4,500");
    }
}

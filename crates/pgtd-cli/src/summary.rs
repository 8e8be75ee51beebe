use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pgtd_model::{FieldSpec, Finding, RequirementRule, RuleVariant, Severity};
use pgtd_report::Summary;
use pgtd_standards::field_table;
use pgtd_validate::ValidationRun;

const MAX_VALUE_WIDTH: usize = 40;

pub fn print_run_tables(run: &ValidationRun) {
    if let Some(context) = run.context() {
        println!("Exchange: {}", context.variant.exchange_label());
        println!("Broker Code (FIRM_ID): {}", context.issuer_id);
        println!(
            "Submission Date: {}",
            context.submission_date.format("%Y-%m-%d")
        );
    }

    let summary = Summary::from_run(run);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Result"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new(summary.total_rows),
        Cell::new(summary.valid_rows),
        count_cell(summary.invalid_rows, Color::Red),
        count_cell(summary.total_errors, Color::Red),
        count_cell(summary.total_warnings, Color::Yellow),
        result_cell(summary.is_valid()),
    ]);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    println!("{table}");

    if run.findings().is_empty() {
        return;
    }
    println!();
    println!("Findings:");
    println!("{}", findings_table(run.findings()));
}

fn findings_table(findings: &[Finding]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Severity"),
        header_cell("Col"),
        header_cell("Field"),
        header_cell("Code"),
        header_cell("Message"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for finding in findings {
        let column = if finding.field.is_file_level() {
            dim_cell("-")
        } else {
            Cell::new(finding.field.column)
        };
        table.add_row(vec![
            Cell::new(finding.row),
            severity_cell(finding.severity()),
            column,
            Cell::new(&finding.field.canonical_name),
            Cell::new(finding.code()),
            Cell::new(finding.message()),
            Cell::new(truncate(&finding.value)),
        ]);
    }
    table
}

pub fn print_fields(variant: RuleVariant) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Col"),
        header_cell("Field"),
        header_cell("Header"),
        header_cell("Max"),
        header_cell("Required"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for spec in field_table(variant) {
        table.add_row(vec![
            Cell::new(spec.column()),
            Cell::new(spec.canonical_name()).fg(Color::Cyan),
            Cell::new(spec.local_name),
            Cell::new(spec.max_length),
            requirement_cell(spec),
            Cell::new(values_label(spec)),
        ]);
    }
    println!("{} ({} columns)", variant.exchange_label(), variant.column_count());
    println!("{table}");
}

fn requirement_cell(spec: &FieldSpec) -> Cell {
    if spec.always_required {
        return Cell::new("always").fg(Color::Green);
    }
    match &spec.requirement {
        Some(rule) => Cell::new(requirement_label(rule)),
        None => dim_cell("-"),
    }
}

fn requirement_label(rule: &RequirementRule) -> &'static str {
    match rule {
        RequirementRule::ReportTypeIn { .. } => "first/change",
        RequirementRule::OptionSelected { .. } => "option selected",
        RequirementRule::ValueEquals { .. } => "value equals",
        RequirementRule::ValuePresent { .. } => "value present",
        RequirementRule::HighFrequencyUnexempt { .. } => "high-frequency",
        RequirementRule::HighFrequencyWithoutUpload { .. } => "high-frequency, no report",
    }
}

fn values_label(spec: &FieldSpec) -> String {
    let Some(values) = spec.allowed_values else {
        return String::new();
    };
    let mut label = values.join(" | ");
    if spec.multi_value {
        match spec.max_multi_count {
            Some(max) => label.push_str(&format!(" (multi, max {max})")),
            None => label.push_str(" (multi)"),
        }
    }
    label
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_VALUE_WIDTH {
        return value.to_string();
    }
    let mut out: String = value.chars().take(MAX_VALUE_WIDTH).collect();
    out.push('…');
    out
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    };
    Cell::new(severity.as_str()).fg(color)
}

fn result_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("PASS").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("FAIL").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

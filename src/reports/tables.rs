use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use scorelens::analysis::correlation::CorrelationResult;
use scorelens::analysis::timeseries::SeriesPoint;
use scorelens::analysis::SegmentStats;
use scorelens::AnalysisReport;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn pct_cell(value: f64) -> Cell {
    let cell = Cell::new(format!("{:+.2}%", value));
    if value >= 0.0 {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}

fn rate_text(stats: &SegmentStats) -> String {
    format!(
        "{:.1}% ({}/{})",
        stats.positive_rate * 100.0,
        stats.positive,
        stats.count
    )
}

pub fn overview(report: &AnalysisReport) {
    let o = &report.overall;
    let f = &report.filter;
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Sample").add_attribute(Attribute::Bold),
        Cell::new("Records"),
        Cell::new("Mean").fg(Color::Cyan),
        Cell::new("Median"),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Positive").fg(Color::Green),
        Cell::new("Non-pos").fg(Color::Red),
        Cell::new("Score Avg"),
    ]);
    align_right(&mut table, 1..=8);

    table.add_row(vec![
        Cell::new(o.count).add_attribute(Attribute::Bold),
        Cell::new(f.total_records),
        pct_cell(o.mean_return),
        Cell::new(format!("{:+.2}%", o.median_return)),
        Cell::new(format!("{:+.2}%", o.min_return)),
        Cell::new(format!("{:+.2}%", o.max_return)),
        Cell::new(format!("{} ({:.1}%)", o.positive, o.positive_rate * 100.0)),
        Cell::new(format!(
            "{} ({:.1}%)",
            o.non_positive,
            (1.0 - o.positive_rate) * 100.0
        )),
        Cell::new(format!("{:.2}", o.mean_score)),
    ]);
    println!("\n{}", table);
}

pub fn correlation(c: &CorrelationResult) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Correlation").add_attribute(Attribute::Bold),
        Cell::new("Value"),
        Cell::new("Strength"),
    ]);
    align_right(&mut table, 1..=1);

    let strong = |v: f64| v.abs() > 0.3;
    for (name, value, label) in [
        ("Pearson (linear)", c.pearson, c.strength),
        ("Spearman (rank)", c.spearman, c.spearman_strength),
    ] {
        let value_cell = Cell::new(format!("{:.4}", value));
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            if strong(value) {
                value_cell.fg(Color::Cyan)
            } else {
                value_cell
            },
            Cell::new(label.to_string()),
        ]);
    }
    println!("\n{}", table);
}

pub fn bands(bands: &[SegmentStats], unbanded: usize) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Score Band").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Mean"),
        Cell::new("Range"),
        Cell::new("Positive Rate"),
    ]);
    align_right(&mut table, 1..=4);

    for s in bands {
        table.add_row(vec![
            Cell::new(&s.label).add_attribute(Attribute::Bold),
            Cell::new(s.count),
            pct_cell(s.mean_return),
            Cell::new(format!("{:.2}% ~ {:.2}%", s.min_return, s.max_return)),
            Cell::new(rate_text(s)),
        ]);
    }
    println!("\n{}", table);

    if unbanded > 0 {
        println!("({} records scored outside 0-100 and fall in no band)", unbanded);
    }
}

pub fn industries(industries: &[SegmentStats]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Industry").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Mean"),
        Cell::new("r"),
        Cell::new("Positive Rate"),
    ]);
    align_right(&mut table, 1..=4);

    for s in industries {
        let r_cell = match s.pearson {
            Some(r) if r.abs() > 0.3 => Cell::new(format!("{:.2}", r)).fg(Color::Cyan),
            Some(r) => Cell::new(format!("{:.2}", r)),
            None => Cell::new("-"),
        };
        table.add_row(vec![
            Cell::new(&s.label).add_attribute(Attribute::Bold),
            Cell::new(s.count),
            pct_cell(s.mean_return),
            r_cell,
            Cell::new(rate_text(s)),
        ]);
    }
    println!("\n{}", table);
}

pub fn segment(s: &SegmentStats) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(&s.label).add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 1..=1);

    table.add_row(vec![Cell::new("Count"), Cell::new(s.count)]);
    table.add_row(vec![Cell::new("Mean"), pct_cell(s.mean_return)]);
    table.add_row(vec![
        Cell::new("Range"),
        Cell::new(format!("{:.2}% ~ {:.2}%", s.min_return, s.max_return)),
    ]);
    table.add_row(vec![Cell::new("Positive Rate"), Cell::new(rate_text(s))]);
    println!("\n{}", table);
}

pub fn series(points: &[SeriesPoint]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Segment"),
        Cell::new("Mean"),
        Cell::new("Count"),
    ]);
    align_right(&mut table, 3..=4);

    for p in points {
        table.add_row(vec![
            Cell::new(&p.date).add_attribute(Attribute::Bold),
            Cell::new(p.kind.to_string()),
            Cell::new(&p.label),
            pct_cell(p.mean_return),
            Cell::new(p.count),
        ]);
    }
    println!("\n{}", table);
}

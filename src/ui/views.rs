//! Terminal rendering of the three views and of the option listings.

use crate::core::drilldown::UserReport;
use crate::core::summary::Summary;
use crate::export::model::DetailTable;
use crate::ui::messages::{header, metric};
use crate::utils::formatting::{bold, delta2readable, hour_bucket, mins2readable};
use crate::utils::table::Table;

fn counts_table(label: &str, counts: &[(String, usize)]) -> String {
    let mut table = Table::new(&[label, "COUNT"]);
    for (key, count) in counts {
        table.add_row(vec![key.clone(), count.to_string()]);
    }
    table.render()
}

pub fn print_summary(summary: &Summary) {
    header("After-hours activity summary (role accounts excluded)");
    metric("Total activity", summary.total);
    metric("Distinct users", summary.distinct_users);
    metric(
        "Most active user",
        format!("{} ({})", summary.top_user.0, summary.top_user.1),
    );
    match summary.busiest_hour {
        Some((hour, count)) => metric("Busiest hour", format!("{} ({count})", hour_bucket(hour))),
        None => metric("Busiest hour", "--"),
    }

    header("Most used programs");
    print!("{}", counts_table("PROGRAM", &summary.top_programs));

    header("Activity per user");
    print!("{}", counts_table("NAMAUSER", &summary.per_user));

    header("Latest activity");
    let mut table = Table::new(&["JAM_TEXT", "NAMAUSER", "PROGRAM"]);
    for r in &summary.latest {
        table.add_row(vec![r.time_str(), r.user.clone(), r.program.clone()]);
    }
    print!("{}", table.render());
}

pub fn print_detail(detail: &DetailTable, per_user: &[(String, usize)]) {
    header("After-hours activity log (role accounts excluded)");
    println!(
        "Showing {} activities from {} users.\n",
        bold(&detail.len().to_string()),
        bold(&per_user.len().to_string())
    );

    let mut table = Table::new(&detail.headers());
    for row in detail.to_table() {
        table.add_row(row);
    }
    print!("{}", table.render());

    header("Activity per user");
    print!("{}", counts_table("NAMAUSER", per_user));
}

pub fn print_user_report(report: &UserReport) {
    header(format!("Activity of {}", report.user));

    let fmt_ts = |ts: Option<chrono::NaiveDateTime>| {
        ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "--".to_string())
    };

    metric("Total activity", report.total());
    metric("First activity", fmt_ts(report.first));
    metric("Last activity", fmt_ts(report.last));
    metric(
        "Working span",
        report
            .span_minutes()
            .map(|m| mins2readable(m))
            .unwrap_or_else(|| "--".to_string()),
    );

    header("Activity log");
    let mut table = Table::new(&["NAMAUSER", "TANGGAL", "JAM_TEXT", "PROGRAM"]);
    for r in &report.timeline.records {
        table.add_row(vec![
            r.user.clone(),
            r.date_str(),
            r.time_str(),
            r.program.clone(),
        ]);
    }
    print!("{}", table.render());

    header("Top programs");
    print!("{}", counts_table("PROGRAM", &report.top_programs));

    header("Longest pauses");
    if report.gaps.is_empty() {
        println!("No pause longer than the threshold.");
        return;
    }
    let mut table = Table::new(&["RESUMED AT", "PAUSE"]);
    for gap in &report.gaps {
        table.add_row(vec![
            gap.end.format("%Y-%m-%d %H:%M:%S").to_string(),
            delta2readable(gap.duration),
        ]);
    }
    print!("{}", table.render());
}

pub fn print_list(title: &str, items: &[String]) {
    header(title);
    for item in items {
        println!("  {item}");
    }
}

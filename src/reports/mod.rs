use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyalt::finger::Finger;
use keyalt::optimizer::runner::CorpusOptimization;
use keyalt::optimizer::Optimized;
use keyalt::resolver::AssignmentRecord;
use keyalt::stats::StatsReport;

fn pct(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

fn show_char(c: char) -> String {
    if c == ' ' {
        "␣".to_string()
    } else {
        c.to_string()
    }
}

fn finger_row(fingers: &[Finger]) -> String {
    fingers
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_assignment_trace(records: &[AssignmentRecord]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["#", "Char", "Finger", "Age"]);

    for (i, r) in records.iter().enumerate() {
        let finger = match r.finger {
            Some(f) => Cell::new(f.to_string()),
            None => Cell::new("?").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(i),
            Cell::new(show_char(r.character)).set_alignment(CellAlignment::Center),
            finger,
            Cell::new(r.age).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_stats_report(layout_name: &str, max_age: u8, report: &StatsReport) {
    println!(
        "\n🔎 === {} (max age {}) | {} chars ===",
        layout_name, max_age, report.total_chars
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Rate"),
    ]);

    let rows = [
        ("SFB", report.sfb_count, report.sfb_rate(), Color::Red),
        ("RPT", report.repeat_count, report.repeat_rate(), Color::Yellow),
        ("ALTS", report.alt_count, report.alt_rate(), Color::Cyan),
        ("UNKNOWN", report.unknown_count, report.unknown_rate(), Color::Grey),
    ];
    for (name, count, rate, color) in rows {
        table.add_row(vec![
            Cell::new(name).fg(color),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(pct(rate)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);

    match &report.ages {
        Some(a) => println!(
            "AGES: avg = {:.3}, median = {}, mode = {}",
            a.mean, a.median, a.mode
        ),
        None => println!("AGES: n/a"),
    }

    if !report.sfb_bigrams.is_empty() {
        let mut sfbs = Table::new();
        sfbs.load_preset(ASCII_FULL);
        sfbs.set_header(vec!["Bigram", "Finger"]);
        for b in &report.sfb_bigrams {
            sfbs.add_row(vec![
                format!("{}{}", show_char(b.first), show_char(b.second)),
                b.finger.to_string(),
            ]);
        }
        println!("{}", sfbs);
    }

    let mut usage = Table::new();
    usage.load_preset(ASCII_FULL);
    usage.set_header(
        report
            .finger_usage
            .iter()
            .map(|u| Cell::new(u.finger.to_string()).set_alignment(CellAlignment::Center))
            .collect::<Vec<_>>(),
    );
    usage.add_row(
        report
            .finger_usage
            .iter()
            .map(|u| Cell::new(pct(report.finger_share(u.finger))).set_alignment(CellAlignment::Right))
            .collect::<Vec<_>>(),
    );
    println!("{}", usage);

    if !report.unknown_chars.is_empty() {
        let chars: String = report.unknown_chars.iter().map(|&c| show_char(c)).collect();
        println!("Unknown characters: {}", chars);
    }
}

pub fn print_optimized(best: &Optimized) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(
        best.word
            .chars()
            .map(|c| Cell::new(show_char(c)).set_alignment(CellAlignment::Center))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        best.fingers
            .iter()
            .map(|f| Cell::new(f.to_string()).set_alignment(CellAlignment::Center))
            .collect::<Vec<_>>(),
    );
    println!("\nWord: {} ({} sequences searched)", best.word, best.combinations);
    println!("{}", table);
    println!("Score: {}", best.score);
}

pub fn print_corpus_report(report: &CorpusOptimization, show_words: bool) {
    if show_words {
        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Word", "Fingers", "SFB", "Reuse", "Dist"]);
        for r in &report.results {
            table.add_row(vec![
                Cell::new(&r.word),
                Cell::new(finger_row(&r.fingers)),
                Cell::new(r.score.sfb).set_alignment(CellAlignment::Right),
                Cell::new(r.score.reuse).set_alignment(CellAlignment::Right),
                Cell::new(r.score.distance).set_alignment(CellAlignment::Right),
            ]);
        }
        println!("{}", table);
    }

    println!("-----------");
    println!(
        "Words: {} ({} optimized, {} chars)",
        report.words,
        report.results.len(),
        report.chars
    );
    println!("SFBs: {}", pct(report.sfb_rate()));

    if !report.failures.is_empty() {
        let mut failed = Table::new();
        failed.load_preset(ASCII_FULL);
        failed.set_header(vec![
            Cell::new("Failed word").fg(Color::Red),
            Cell::new("Reason"),
        ]);
        for f in &report.failures {
            failed.add_row(vec![f.word.clone(), f.reason.clone()]);
        }
        println!("{}", failed);
    }
}

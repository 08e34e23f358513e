use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gamerwords::api::AnalysisReport;
use gamerwords::cohort::CohortProfile;
use gamerwords::profile::ProfileCard;
use gamerwords::stats::Population;
use gamerwords::table::{most_frequent, CountTable};
use std::path::Path;
use strum::IntoEnumIterator;

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

pub fn print_tokenize_summary(output: &Path, counts: &CountTable) {
    let total: u64 = counts.values().sum();
    println!(
        "\n✅ Wrote {} distinct words ({} tokens) to {:?}",
        counts.len(),
        total,
        output
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ]);
    for (word, count) in most_frequent(counts, 10) {
        table.add_row(vec![Cell::new(word), Cell::new(count)]);
    }
    align_right(&mut table, 1..=1);
    println!("{}", table);
}

pub fn print_cohort_profile(profile: &CohortProfile, top_n: usize) {
    println!("\n📚 === COHORT PROFILE === 📚");

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Population").add_attribute(Attribute::Bold),
        Cell::new("Tokens"),
        Cell::new("Vocabulary"),
    ]);
    for population in Population::iter() {
        let (tokens, vocab) = match population {
            Population::General => (profile.general_tokens, profile.general.len()),
            Population::Target => (profile.target_tokens, profile.target.len()),
        };
        table.add_row(vec![
            Cell::new(population).add_attribute(Attribute::Bold),
            Cell::new(tokens),
            Cell::new(vocab),
        ]);
    }
    align_right(&mut table, 1..=2);
    println!("{}", table);

    println!(
        "Ignored (similar usage): {}   Distinctive: {}",
        profile.ignored.len(),
        profile.distinctive.len()
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Distinctive Word").add_attribute(Attribute::Bold),
        Cell::new("Target %").fg(Color::Cyan),
        Cell::new("General %"),
    ]);
    for (word, ratio) in profile.ranked_distinctive(top_n) {
        let general = profile
            .general
            .get(&word)
            .map(|g| format!("{:.4}", g * 100.0))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(word),
            Cell::new(format!("{:.4}", ratio * 100.0)).fg(Color::Cyan),
            Cell::new(general),
        ]);
    }
    align_right(&mut table, 1..=2);
    println!("{}", table);
}

pub fn print_cohort_summary(report: &AnalysisReport) {
    let s = &report.summary;
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Closeness").add_attribute(Attribute::Bold),
        Cell::new("Mean"),
        Cell::new("Std Dev"),
    ]);
    for population in Population::iter() {
        let (mean, std) = match population {
            Population::General => (s.mean_general, s.std_general),
            Population::Target => (s.mean_target, s.std_target),
        };
        table.add_row(vec![
            Cell::new(population).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.6}", mean)),
            Cell::new(format!("{:.6}", std)),
        ]);
    }
    align_right(&mut table, 1..=2);
    println!("\n{}", table);
    println!(
        "Mean distinctive-word ratio: {:.4}",
        s.mean_distinctive_ratio
    );
}

pub fn print_user_scores(report: &AnalysisReport) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("User").add_attribute(Attribute::Bold),
        Cell::new("General"),
        Cell::new("Target").fg(Color::Cyan),
        Cell::new("zGeneral"),
        Cell::new("zTarget").fg(Color::Cyan),
        Cell::new("Distinct"),
        Cell::new("Class").add_attribute(Attribute::Bold),
    ]);

    for card in &report.cards {
        let Some(score) = report.scores.get(&card.user) else {
            continue;
        };
        let class_color = if card.is_target_member() {
            Color::Green
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(&card.user).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.5}", score.general_closeness)),
            Cell::new(format!("{:.5}", score.target_closeness)).fg(Color::Cyan),
            Cell::new(format!("{:+.3}", card.z_general)),
            Cell::new(format!("{:+.3}", card.z_target)).fg(Color::Cyan),
            Cell::new(format!("{:.4}", score.distinctive_ratio)),
            Cell::new(card.classification).fg(class_color),
        ]);
    }
    align_right(&mut table, 1..=5);
    println!("\n{}", table);
}

pub fn print_profile_cards(cards: &[ProfileCard]) {
    for card in cards {
        let status = if card.is_target_member() {
            "TARGET MEMBER"
        } else {
            "NOT A MEMBER"
        };

        let mut table = new_table();
        table.add_row(vec![
            Cell::new(&card.user).add_attribute(Attribute::Bold),
            Cell::new(status).add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("Target z-score"),
            Cell::new(format!("{:.4}", card.z_target)),
        ]);
        table.add_row(vec![
            Cell::new("General z-score"),
            Cell::new(format!("{:.4}", card.z_general)),
        ]);
        table.add_row(vec![
            Cell::new("Distinctive:all ratio"),
            Cell::new(format!("{:.4}", card.distinctive_ratio)),
        ]);
        table.add_row(vec![
            Cell::new("Top distinctive words"),
            Cell::new(if card.top_words.is_empty() {
                "-".to_string()
            } else {
                card.top_words.join(", ")
            }),
        ]);
        println!("\n{}", table);
    }
}

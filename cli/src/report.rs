use energy_dash_core::{content, Classification, PredictionResult, PredictionTable};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Avg (MW)")]
    average: String,
    #[tabled(rename = "Kind")]
    kind: String,
}

pub fn print_table(table: &PredictionTable, region: Option<&str>) {
    let rows: Vec<PredictionRow> = table
        .records()
        .iter()
        .filter(|r| region.map_or(true, |region| r.region == region))
        .map(|r| PredictionRow {
            region: r.region.clone(),
            year: r.year.clone(),
            month: r.month.clone(),
            average: format!("{:.2}", r.average_prediction),
            kind: Classification::for_period(&r.year, &r.month)
                .map(|c| c.label().to_string())
                .unwrap_or_else(|_| "-".to_string()),
        })
        .collect();

    if rows.is_empty() {
        println!("No prediction rows found.");
        return;
    }

    let mut output = Table::new(rows);
    output
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color

    println!("{}", output);
}

pub fn print_list(title: &str, values: &[&str]) {
    println!("\x1b[1;36m{}\x1b[0m", title);
    if values.is_empty() {
        println!("  (none)");
    }
    for value in values {
        println!("  {}", value);
    }
}

pub fn print_prediction(result: &PredictionResult) {
    println!("{}", content::PREDICTION_METHOD_NOTE);
    println!("\x1b[1;34m{}\x1b[0m", result.headline());
    println!("\x1b[1;31m{}\x1b[0m", result.formatted_value());
    println!("[{}] {}", result.classification.label(), result.caption());
}

pub fn print_authors() {
    println!("\x1b[1;36mAuthors\x1b[0m");
    for author in content::AUTHORS {
        println!("\n  {}\n  {}", author.name, author.profile_url);
    }
}

pub fn print_about(presentation_url: Option<&str>) {
    println!("\x1b[1;36m{}\x1b[0m\n", content::HOME_TITLE);
    for paragraph in content::HOME_PARAGRAPHS {
        println!("{}\n", paragraph);
    }
    for line in content::presentation_lines(presentation_url) {
        println!("{}", line);
    }
}

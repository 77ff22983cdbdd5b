//! Text rendering of the dataset header, summary cards, case table and
//! facet lists.

use std::fmt::Write;

use crate::consts::{REPO, UNKNOWN_CATEGORY, VERSION, format_number};
use crate::engine::{Aggregates, Facets, FilterConfig, View, rank};
use crate::model::{SubsidyCase, SubsidyDataset};

/// Industries listed in the post-parse summary.
const PARSE_SUMMARY_INDUSTRIES: usize = 10;

/// Title block shown when a session starts.
pub fn header(dataset: &SubsidyDataset, data_label: &str) -> String {
    format!(
        r#"
   {}
   {}

   source    {}
   updated   {}
   cases     {}
   data      {}

   awaji {} · {}
"#,
        dataset.title,
        dataset.description,
        dataset.source,
        dataset.last_updated,
        format_number(dataset.total_cases),
        data_label,
        VERSION,
        REPO,
    )
}

/// One line describing the active filters.
pub fn filter_line(filters: &FilterConfig) -> String {
    let search = if filters.search.is_empty() {
        "-".to_string()
    } else {
        format!("\"{}\"", filters.search)
    };
    format!(
        "search {search}  city {}  industry {}  round {}",
        filters.city, filters.industry, filters.round
    )
}

/// Filtered-of-total count plus the top entries per city and industry.
///
/// `total_cases` is printed as declared by the dataset.
pub fn summary_cards(view: &View, total_cases: u64, top_n: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  総採択件数  {}件 （全{}件中）",
        format_number(view.len() as u64),
        format_number(total_cases)
    );

    out.push_str("  市別件数\n");
    for (city, count) in rank(&view.aggregates.by_city, top_n) {
        let _ = writeln!(out, "    {city}  {count}件");
    }

    let _ = writeln!(out, "  業種別TOP{top_n}");
    for (industry, count) in rank(&view.aggregates.by_industry, top_n) {
        let _ = writeln!(out, "    {industry}  {count}件");
    }
    out
}

/// Cut `text` to `width` characters, marking the cut with an ellipsis.
pub fn clamp(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut s: String = text.chars().take(width).collect();
    s.push('…');
    s
}

fn category_badge(category: &str) -> String {
    if category == UNKNOWN_CATEGORY {
        format!("({category})")
    } else {
        format!("[{category}]")
    }
}

/// One row of the case table.
pub fn case_row(case: &SubsidyCase, description_width: usize) -> String {
    let mut row = format!(
        "第{}回 | {} | {} | {} | {} | {}",
        case.round,
        case.company_name,
        case.city,
        case.industry,
        clamp(&case.business_description, description_width),
        category_badge(&case.application_category),
    );
    if !case.notes.is_empty() {
        let _ = write!(row, " | {}", case.notes.join(", "));
    }
    row
}

/// Up to `limit` rows, then a line counting what was left out.
pub fn case_table<'a, I>(cases: I, limit: usize, description_width: usize) -> String
where
    I: IntoIterator<Item = &'a SubsidyCase>,
{
    let mut out = String::new();
    let mut shown = 0usize;
    let mut hidden = 0usize;
    for case in cases {
        if shown < limit {
            let _ = writeln!(out, "  {}", case_row(case, description_width));
            shown += 1;
        } else {
            hidden += 1;
        }
    }
    if shown == 0 {
        out.push_str("  no matching cases\n");
    }
    if hidden > 0 {
        let _ = writeln!(out, "  … {} more", format_number(hidden as u64));
    }
    out
}

/// Available filter values per dimension.
pub fn facets(facets: &Facets) -> String {
    let rounds: Vec<String> = facets.rounds.iter().map(|r| format!("第{r}回")).collect();
    format!(
        "  cities      {}\n  industries  {}\n  rounds      {}\n",
        facets.cities.join(", "),
        facets.industries.join(", "),
        rounds.join(", "),
    )
}

/// Full per-dimension counts: cities by count, the top industries, rounds
/// in order.
pub fn breakdown(aggregates: &Aggregates, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "総採択件数: {}件", format_number(total as u64));

    out.push_str("\n=== 市別採択件数 ===\n");
    for (city, count) in rank(&aggregates.by_city, usize::MAX) {
        let _ = writeln!(out, "{city}: {count}件");
    }

    let _ = writeln!(
        out,
        "\n=== 業種別採択件数（上位{PARSE_SUMMARY_INDUSTRIES}業種） ==="
    );
    for (industry, count) in rank(&aggregates.by_industry, PARSE_SUMMARY_INDUSTRIES) {
        let _ = writeln!(out, "{industry}: {count}件");
    }

    out.push_str("\n=== 公募回別採択件数 ===\n");
    for (round, count) in &aggregates.by_round {
        let _ = writeln!(out, "第{round}回: {count}件");
    }
    out
}

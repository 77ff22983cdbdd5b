//! Announcement text → dataset.
//!
//! The published award list is plain text: a bold header per public-call
//! round followed by one bullet per awarded company. Category and note tags
//! are inferred from keywords in the business description.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::consts::UNKNOWN_CATEGORY;
use crate::model::{SubsidyCase, SubsidyDataset};

static ROUND_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*第(\d+)回公募（(\d{4})年(\d+)月.*）\*\*").expect("valid round header regex")
});

static COMPANY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^•\s+(.+?)（(.+?)）\s+[–-]\s+(.+?)。(.+?)$").expect("valid company line regex")
});

/// Checked in order; the first one found in the description wins.
const CATEGORIES: &[&str] = &[
    "通常枠",
    "最低賃金枠",
    "卒業枠",
    "グローバルV字回復枠",
    "大規模賃金引上枠",
    "緊急事態宣言特別枠",
];

/// Object-replacement artifact left by copy-pasting from the PDF.
const PASTE_ARTIFACT: &str = " \u{FFFC}";

/// Descriptive fields of a generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetHeader {
    pub title: String,
    pub description: String,
    pub source: String,
    pub last_updated: String,
}

impl Default for DatasetHeader {
    fn default() -> Self {
        Self {
            title: "淡路島事業再構築補助金採択事例一覧".to_string(),
            description: "淡路島（洲本市・淡路市・南あわじ市）における事業再構築補助金の採択事例データ"
                .to_string(),
            source: "経済産業省 中小企業庁公式発表資料".to_string(),
            last_updated: "2024年11月（第12回公募まで）".to_string(),
        }
    }
}

/// Round currently in effect while scanning.
struct RoundContext {
    round: u32,
    date: String,
}

/// Parse every company line that follows a round header.
///
/// Lines before the first header, lines under a header whose round is zero
/// or out of range, and lines matching neither pattern are skipped.
pub fn parse_cases(text: &str) -> Vec<SubsidyCase> {
    let mut cases = Vec::new();
    let mut current: Option<RoundContext> = None;

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = ROUND_HEADER.captures(line) {
            let round = match caps[1].parse::<u32>() {
                Ok(round) if round > 0 => round,
                _ => {
                    debug!("line {}: round number out of range", lineno + 1);
                    current = None;
                    continue;
                }
            };
            current = Some(RoundContext {
                round,
                date: format!("{}年{}月", &caps[2], &caps[3]),
            });
            debug!("line {}: round {round}", lineno + 1);
            continue;
        }

        let Some(caps) = COMPANY_LINE.captures(line) else {
            continue;
        };
        let Some(ctx) = &current else {
            debug!("line {}: company line before any round header", lineno + 1);
            continue;
        };

        let description = caps[4].trim();
        cases.push(SubsidyCase {
            round: ctx.round,
            announcement_date: ctx.date.clone(),
            company_name: caps[1].trim().to_string(),
            city: caps[2].trim().to_string(),
            industry: caps[3].trim().to_string(),
            business_description: description.replace(PASTE_ARTIFACT, ""),
            application_category: infer_category(description).to_string(),
            notes: infer_notes(description),
            address: None,
        });
    }

    cases
}

/// Parse announcement text into a full dataset.
///
/// `total_cases` is set from the parsed records.
pub fn parse_dataset(text: &str, header: DatasetHeader) -> SubsidyDataset {
    let cases = parse_cases(text);
    SubsidyDataset {
        title: header.title,
        description: header.description,
        source: header.source,
        last_updated: header.last_updated,
        total_cases: cases.len() as u64,
        cases,
    }
}

pub fn infer_category(description: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| description.contains(**c))
        .copied()
        .unwrap_or(UNKNOWN_CATEGORY)
}

pub fn infer_notes(description: &str) -> Vec<String> {
    let has = |needle: &str| description.contains(needle);
    let rules: [(bool, &str); 6] = [
        (has("連携"), "連携採択案件"),
        (has("第") && has("回採択"), "既出案件"),
        (has("環境") || has("エコ"), "環境対応型"),
        (has("DX") || has("ICT") || has("IoT"), "DX・デジタル化"),
        (has("地域課題"), "地域課題解決型"),
        (has("インバウンド"), "インバウンド対応"),
    ];
    rules
        .into_iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, tag)| tag.to_string())
        .collect()
}

//! Terminal rendering of creature cards

use crate::prefs::Theme;
use colored::{ColoredString, Colorize};
use mob_core::Card;
use std::ops::Range;

/// Split an "English (Local)" name into its two parts
///
/// The local part is taken from the last `(` that has a `)` after it, up to
/// the last `)`. Names without brackets return an empty local part.
pub fn split_name(full: &str) -> (&str, &str) {
    let full = full.trim();
    for (open, _) in full.rmatch_indices('(') {
        let rest = &full[open + 1..];
        if let Some(close) = rest.rfind(')') {
            return (full[..open].trim(), rest[..close].trim());
        }
    }
    (full, "")
}

/// Byte ranges of `text` that match `query`, ignoring case
///
/// The query is trimmed and matched literally. Matches do not overlap.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = query.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        match match_len(&text[pos..], &needle) {
            Some(len) => {
                ranges.push(pos..pos + len);
                pos += len;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

/// Length in bytes of the prefix of `rest` that lowercases to `needle`
fn match_len(rest: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (offset, ch) in rest.char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}

fn emphasize(s: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Light => s.black().on_yellow(),
        Theme::Dark => s.bright_yellow().bold().underline(),
    }
}

/// Split `text` into segments, flagging the ones that match `query`
pub fn segments<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let mut out = Vec::new();
    let mut last = 0;
    for range in highlight_ranges(text, query) {
        if last < range.start {
            out.push((&text[last..range.start], false));
        }
        out.push((&text[range.clone()], true));
        last = range.end;
    }
    if last < text.len() {
        out.push((&text[last..], false));
    }
    out
}

/// Style every segment on its own, so a reset after one match does not
/// undo `bold` for the rest of the text
fn styled(text: &str, query: &str, theme: Theme, bold: bool) -> String {
    segments(text, query)
        .into_iter()
        .map(|(seg, matched)| match (matched, bold) {
            (true, true) => emphasize(seg, theme).bold().to_string(),
            (true, false) => emphasize(seg, theme).to_string(),
            (false, true) => seg.bold().to_string(),
            (false, false) => seg.to_string(),
        })
        .collect()
}

/// `text` with every match of `query` emphasized
pub fn highlight(text: &str, query: &str, theme: Theme) -> String {
    styled(text, query, theme, false)
}

/// Render one card as a few lines of text
pub fn render_card(card: &Card<'_>, query: &str, theme: Theme) -> String {
    let record = card.record;
    let (english, local) = split_name(&record.name);

    let mut name = styled(english, query, theme, true);
    if !local.is_empty() {
        name.push_str("  ");
        name.push_str(&highlight(local, query, theme));
    }

    let stats = format!(
        "Lv. {}  HP: {}  EXP: {}  HP/EXP: {}",
        record.level, record.health, record.base_experience, card.hp_per_exp
    );
    let stats = match theme {
        Theme::Light => stats.blue(),
        Theme::Dark => stats.cyan(),
    };

    let drops: Vec<String> = record
        .drops
        .iter()
        .map(|d| highlight(d, query, theme))
        .collect();
    let drops = if drops.is_empty() {
        "-".dimmed().to_string()
    } else {
        drops.join(" · ")
    };

    format!("{}\n  {}\n  {}", name, stats, drops)
}

/// Render all cards, or a placeholder when there are none
pub fn render_cards(cards: &[Card<'_>], query: &str, theme: Theme) -> String {
    if cards.is_empty() {
        return "No results.".to_string();
    }
    cards
        .iter()
        .map(|c| render_card(c, query, theme))
        .collect::<Vec<_>>()
        .join("\n\n")
}

//! Aligned plain-text tables.
//!
//! Widths are counted in chars, not bytes, so curriculum labels with
//! diacritics ("Giải tích 12") line up.

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`. Missing cells print as `-`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| char_len(cell))
                .chain([char_len(header), MIN_COLUMN_WIDTH])
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(widths.iter().sum::<usize>() + SEPARATOR.len() * widths.len().saturating_sub(1)));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), width);
                let right = is_numeric(&cell);
                let padded = pad(&cell, width, right);
                if options.color {
                    colorize_mastery(&padded, cell.trim())
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Narrow the widest shrinkable column one char at a time until the table fits.
fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = SEPARATOR.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|&(index, &width)| width > char_len(headers[index]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|&(_, &width)| width)
            .map(|(index, _)| index);

        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if char_len(value) <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(char_len(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Numbers and percentages are right-aligned.
fn is_numeric(value: &str) -> bool {
    let digits = value.trim().trim_end_matches('%');
    !digits.is_empty() && digits.parse::<f64>().is_ok()
}

/// Mastery tiers take the same colors as the mind-map nodes.
fn colorize_mastery(padded: &str, cell: &str) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "mastered" => "32",
        "learning" => "33",
        "not_started" | "not started" => "34",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

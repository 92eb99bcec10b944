use wordfreq_core::{AppViewModel, ExportOutcome, Phase, RankedEntry};

use super::constants::*;

/// Projects the view model into terminal lines. Pure: same view, same lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), action_line(view), String::new()];

    if view.show_chart {
        lines.extend(chart_lines(&view.entries, view.max_count()));
        lines.push(String::new());
        if let Some(stats) = view.stats {
            lines.push(format!(
                "Tokens: {} total, {} distinct",
                format_with_commas(stats.total),
                format_with_commas(stats.distinct as u64)
            ));
        }
        lines.push(format!("{EXPORT_LABEL} type `export` to save the table"));
    } else if view.phase == Phase::Ready {
        lines.push("The document contains no words.".to_string());
    }

    if let Some(reason) = &view.last_failure {
        lines.push(format!("Fetch failed: {reason}"));
    }
    match &view.last_export {
        Some(ExportOutcome::Written { path, rows }) => {
            lines.push(format!("Exported {rows} rows to {path}"));
        }
        Some(ExportOutcome::Failed { reason }) => {
            lines.push(format!("Export failed: {reason}"));
        }
        None => {}
    }

    lines
}

fn action_line(view: &AppViewModel) -> String {
    if !view.busy {
        return SUBMIT_LABEL.to_string();
    }
    match view.downloaded_bytes {
        Some(bytes) => format!("{LOADING_LABEL} {} bytes", format_with_commas(bytes)),
        None => LOADING_LABEL.to_string(),
    }
}

fn chart_lines(entries: &[RankedEntry], max_count: u64) -> Vec<String> {
    let labels: Vec<String> = entries.iter().map(|e| truncate_label(&e.word)).collect();
    let label_width = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .zip(&labels)
        .map(|(entry, label)| {
            let pad = label_width - label.chars().count();
            format!(
                "{label}{} | {} {}",
                " ".repeat(pad),
                bar(entry.count, max_count),
                format_with_commas(entry.count)
            )
        })
        .collect()
}

fn bar(count: u64, max_count: u64) -> String {
    if max_count == 0 {
        return String::new();
    }
    let cells = (u128::from(count) * BAR_WIDTH as u128 / u128::from(max_count)) as usize;
    BAR_GLYPH.to_string().repeat(cells.max(1))
}

fn truncate_label(word: &str) -> String {
    if word.chars().count() <= LABEL_MAX_CHARS {
        return word.to_string();
    }
    let mut label: String = word.chars().take(LABEL_MAX_CHARS - 1).collect();
    label.push('…');
    label
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wordfreq_core::{update, AppState, Msg, TokenStats};

    use super::*;

    fn ready_view(text: &str) -> AppViewModel {
        let (state, _) = update(AppState::new(), Msg::ComputeClicked);
        let (state, _) = update(
            state,
            Msg::DocumentFetched {
                text: text.to_string(),
            },
        );
        state.view()
    }

    #[test]
    fn idle_shows_only_submit() {
        let lines = render(&AppState::new().view());
        assert_eq!(lines, vec![TITLE.to_string(), SUBMIT_LABEL.to_string(), String::new()]);
    }

    #[test]
    fn loading_shows_indicator_with_bytes() {
        let (state, _) = update(AppState::new(), Msg::ComputeClicked);
        assert_eq!(render(&state.view())[1], LOADING_LABEL);

        let (state, _) = update(state, Msg::FetchProgress { bytes: 12_345 });
        assert_eq!(render(&state.view())[1], format!("{LOADING_LABEL} 12,345 bytes"));
    }

    #[test]
    fn chart_bars_scale_to_largest_count() {
        let view = ready_view("the cat the the cat sat");
        let lines = render(&view);

        let full = BAR_GLYPH.to_string().repeat(BAR_WIDTH);
        assert_eq!(lines[3], format!("the | {full} 3"));
        assert_eq!(
            lines[4],
            format!("cat | {} 2", BAR_GLYPH.to_string().repeat(BAR_WIDTH * 2 / 3))
        );
        assert_eq!(
            lines[5],
            format!("sat | {} 1", BAR_GLYPH.to_string().repeat(BAR_WIDTH / 3))
        );
        assert!(lines.contains(&"Tokens: 6 total, 3 distinct".to_string()));
        assert!(lines.iter().any(|line| line.starts_with(EXPORT_LABEL)));
    }

    #[test]
    fn labels_are_padded_and_truncated() {
        let view = AppViewModel {
            show_chart: true,
            entries: vec![
                RankedEntry::new("a", 1),
                RankedEntry::new("abcdefghijklmnopqrstuvwxyz", 1),
            ],
            stats: Some(TokenStats {
                total: 2,
                distinct: 2,
            }),
            ..AppViewModel::default()
        };
        let lines = render(&view);
        let long_label = format!("{}…", "abcdefghijklmno");
        assert!(lines[3].starts_with(&format!("a{} | ", " ".repeat(LABEL_MAX_CHARS - 1))));
        assert!(lines[4].starts_with(&format!("{long_label} | ")));
    }

    #[test]
    fn tiny_counts_still_get_one_cell() {
        assert_eq!(bar(1, 1_000), BAR_GLYPH.to_string());
        assert_eq!(bar(0, 0), "");
    }

    #[test]
    fn empty_document_has_no_chart() {
        let lines = render(&ready_view(""));
        assert!(lines.contains(&"The document contains no words.".to_string()));
        assert!(!lines.iter().any(|line| line.starts_with(EXPORT_LABEL)));
    }

    #[test]
    fn failure_and_export_status_lines() {
        let view = AppViewModel {
            phase: Phase::Failed,
            last_failure: Some("timeout: operation timed out".to_string()),
            last_export: Some(ExportOutcome::Written {
                path: "/tmp/word_frequency.csv".to_string(),
                rows: 20,
            }),
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert!(lines.contains(&"Fetch failed: timeout: operation timed out".to_string()));
        assert!(lines.contains(&"Exported 20 rows to /tmp/word_frequency.csv".to_string()));
    }

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
    }
}

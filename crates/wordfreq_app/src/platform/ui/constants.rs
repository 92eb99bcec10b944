/// Width in cells of the longest bar.
pub const BAR_WIDTH: usize = 40;
pub const BAR_GLYPH: char = '█';
/// Longer words are cut and suffixed with an ellipsis.
pub const LABEL_MAX_CHARS: usize = 16;

pub const TITLE: &str = "Word frequency";
pub const SUBMIT_LABEL: &str = "[Submit]";
pub const LOADING_LABEL: &str = "[Loading...]";
pub const EXPORT_LABEL: &str = "[Export]";

pub const PROMPT: &str = "> ";
pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  compute (c, submit)  fetch the document and chart the top words",
    "  export  (e)          save the chart data as word_frequency.csv",
    "  help    (h, ?)       show this help",
    "  quit    (q, exit)    leave",
];

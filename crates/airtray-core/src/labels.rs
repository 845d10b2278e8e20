//! Display labels for service tokens
//!
//! The remote service speaks in raw tokens (`"cool"`, `"auto"`, `"3"`);
//! the tray shows Japanese labels for the ones we know. Tokens without an
//! entry are rendered verbatim — option lists vary by appliance firmware,
//! so the table is best-effort by design.

/// Known token → display label pairs.
pub const DISPLAY_LABELS: &[(&str, &str)] = &[
    ("auto", "自動"),
    ("cool", "冷房"),
    ("dry", "ドライ"),
    ("warm", "暖房"),
];

/// Look up the display label for a token, falling back to the raw token.
pub fn display_label(token: &str) -> &str {
    DISPLAY_LABELS
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, label)| *label)
        .unwrap_or(token)
}

// src/core/sanitize.rs

use crate::config::consts::MAX_FILENAME_BYTES;

// DOS device names Windows refuses as a file stem, with or without extension.
const RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL",
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

fn is_forbidden(ch: char) -> bool {
    ch.is_control() || matches!(ch, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}

/// Make a URL path segment safe as a file name on Windows and Linux.
///
/// Forbidden characters and whitespace become `_`, runs of `_` collapse,
/// leading/trailing dots and underscores are trimmed and the result is capped
/// at `MAX_FILENAME_BYTES` (stem is cut, extension kept).
/// May return an empty string; callers pick a fallback.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        let ch = if is_forbidden(ch) || ch.is_whitespace() { '_' } else { ch };
        if ch == '_' {
            if !last_us { out.push('_'); }
            last_us = true;
        } else {
            out.push(ch);
            last_us = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut name = cap_len(trimmed, MAX_FILENAME_BYTES);

    let stem = name.split('.').next().unwrap_or("");
    if RESERVED.iter().any(|r| r.eq_ignore_ascii_case(stem)) {
        name.insert(0, '_');
    }
    name
}

fn cut_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}

fn cap_len(name: &str, max: usize) -> String {
    if name.len() <= max {
        return s!(name);
    }
    match super::naming::split_name(name) {
        (stem, Some(ext)) if ext.len() + 1 < max => {
            let stem = cut_at_boundary(stem, max - ext.len() - 1);
            format!("{stem}.{ext}")
        }
        _ => s!(cut_at_boundary(name, max)),
    }
}

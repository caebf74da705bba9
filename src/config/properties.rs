//! Line-oriented `.properties` reader.
//!
//! Implements the classic `key=value` property format: `#`/`!` comment
//! lines, `=`/`:`/whitespace separators, backslash line continuation, and
//! `\t` `\n` `\r` `\f` `\uXXXX` escapes. Parsing streams from any `BufRead`
//! into a caller-owned map, so an I/O error mid-read leaves everything
//! parsed so far in place.

use std::collections::HashMap;
use std::io::{self, BufRead};

/// Read property pairs from `reader` into `map`.
///
/// Later occurrences of a key overwrite earlier ones. Returns `Err` only
/// for I/O failures; malformed escape sequences are tolerated per format.
pub fn read_properties<R: BufRead>(
    mut reader: R,
    map: &mut HashMap<String, String>,
) -> io::Result<()> {
    let mut raw = String::new();
    let mut logical = String::new();

    loop {
        raw.clear();
        if reader.read_line(&mut raw)? == 0 {
            // EOF with an unterminated continuation still yields a pair.
            if !logical.is_empty() {
                parse_logical_line(&logical, map);
            }
            return Ok(());
        }

        let fragment = raw.trim_end_matches(['\n', '\r']).trim_start();

        // Comments and blanks only apply at the start of a logical line; a
        // continuation line beginning with '#' is data.
        if logical.is_empty()
            && (fragment.is_empty() || fragment.starts_with('#') || fragment.starts_with('!'))
        {
            continue;
        }

        if has_continuation(fragment) {
            logical.push_str(&fragment[..fragment.len() - 1]);
            continue;
        }

        logical.push_str(fragment);
        parse_logical_line(&logical, map);
        logical.clear();
    }
}

/// A line ending in an odd number of backslashes continues onto the next.
fn has_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn parse_logical_line(line: &str, map: &mut HashMap<String, String>) {
    let mut separator = None;
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                separator = Some((idx, true));
                break;
            }
            c if c.is_whitespace() => {
                separator = Some((idx, false));
                break;
            }
            _ => {}
        }
    }

    let (raw_key, raw_value) = match separator {
        None => (line, ""),
        Some((idx, explicit)) => {
            let key = &line[..idx];
            let mut rest = if explicit {
                &line[idx + 1..]
            } else {
                // Whitespace separator may still be followed by one '=' or
                // ':' that belongs to the separator, not the value.
                let trimmed = line[idx..].trim_start();
                match trimmed.as_bytes().first() {
                    Some(b'=') | Some(b':') => &trimmed[1..],
                    _ => trimmed,
                }
            };
            rest = rest.trim_start();
            (key, rest)
        }
    };

    if raw_key.is_empty() {
        return;
    }
    map.insert(unescape(raw_key), unescape(raw_value));
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() == 4 {
                    if let Some(ch) = u32::from_str_radix(&hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                    {
                        out.push(ch);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

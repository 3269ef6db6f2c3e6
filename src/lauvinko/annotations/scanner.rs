use super::nodes::{AnnotatedText, Annotation};
use crate::lauvinko::error::{Delimiter, ScanError};
use once_cell::sync::Lazy;
use regex::Regex;

static ABBREVIATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$([a-z0-9:]+)\$").unwrap());
static BRACED_SUPERSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\^\{([^}]+)\}").unwrap());
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^⟨([^⟩]+)⟩").unwrap());

/// Scan a text span into annotations.
pub fn scan(text: &str) -> Result<AnnotatedText, ScanError> {
    let mut out = Vec::new();
    let mut run = String::new();

    let mut i = 0;
    while let Some(ch) = text[i..].chars().next() {
        let rest = &text[i..];

        match ch {
            '$' => {
                flush(&mut run, &mut out);
                let caps = ABBREVIATION
                    .captures(rest)
                    .ok_or_else(|| mismatched(Delimiter::Dollar, text))?;
                out.push(Annotation::Abbreviation(caps[1].to_string()));
                i += caps[0].len();
            }
            '^' => {
                let mut after = rest[1..].chars();
                match after.next() {
                    Some('{') => {
                        flush(&mut run, &mut out);
                        let caps = BRACED_SUPERSCRIPT
                            .captures(rest)
                            .ok_or_else(|| mismatched(Delimiter::Brace, text))?;
                        out.push(Annotation::Superscript {
                            text: caps[1].to_string(),
                            braced: true,
                        });
                        i += caps[0].len();
                    }
                    Some(single) => {
                        flush(&mut run, &mut out);
                        out.push(Annotation::Superscript {
                            text: single.to_string(),
                            braced: false,
                        });
                        i += 1 + single.len_utf8();
                    }
                    None => {
                        // Trailing caret has nothing to raise.
                        run.push('^');
                        i += 1;
                    }
                }
            }
            '⟨' => {
                flush(&mut run, &mut out);
                let caps = BRACKETED
                    .captures(rest)
                    .ok_or_else(|| mismatched(Delimiter::AngleBracket, text))?;
                out.push(Annotation::Bracketed(caps[1].to_string()));
                i += caps[0].len();
            }
            '@' => {
                flush(&mut run, &mut out);
                out.push(Annotation::Placeholder);
                i += 1;
            }
            _ => {
                run.push(ch);
                i += ch.len_utf8();
            }
        }
    }

    flush(&mut run, &mut out);
    Ok(out)
}

fn flush(run: &mut String, out: &mut AnnotatedText) {
    if !run.is_empty() {
        out.push(Annotation::Plain(std::mem::take(run)));
    }
}

fn mismatched(delimiter: Delimiter, text: &str) -> ScanError {
    ScanError {
        delimiter,
        text: text.to_string(),
    }
}

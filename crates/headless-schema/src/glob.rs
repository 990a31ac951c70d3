//! Shell-style wildcard patterns over class names.
//!
//! `*` matches any run of characters, `?` matches one character and `[...]` matches a set
//! (`[!...]` or `[^...]` for the complement, `a-z` for ranges). Backslashes are ordinary
//! characters since they separate namespace segments in class names.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    chars: Vec<char>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let chars = source.chars().collect();

        Self { source, chars }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        glob_match(&self.chars, &text)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn glob_match(pattern: &[char], text: &[char]) -> bool {
    let mut p = 0;
    let mut t = 0;
    // Position of the last `*` and the text position it currently absorbs up to.
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() {
            match pattern[p] {
                '*' => {
                    star = Some((p, t));
                    p += 1;
                    continue;
                }
                '?' => {
                    p += 1;
                    t += 1;
                    continue;
                }
                '[' => match match_set(&pattern[p..], text[t]) {
                    Some((true, consumed)) => {
                        p += consumed;
                        t += 1;
                        continue;
                    }
                    Some((false, _)) => {}
                    // unterminated set, the bracket is literal
                    None if text[t] == '[' => {
                        p += 1;
                        t += 1;
                        continue;
                    }
                    None => {}
                },
                c if c == text[t] => {
                    p += 1;
                    t += 1;
                    continue;
                }
                _ => {}
            }
        }

        match star {
            Some((star_p, star_t)) => {
                p = star_p + 1;
                t = star_t + 1;
                star = Some((star_p, star_t + 1));
            }
            None => return false,
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

/// Matches `c` against the set starting at `pattern[0] == '['`.
///
/// Returns whether it matched and how many pattern characters the set spans, or `None`
/// when the set is not terminated.
fn match_set(pattern: &[char], c: char) -> Option<(bool, usize)> {
    let mut i = 1;

    let negated = matches!(pattern.get(i), Some('!' | '^'));
    if negated {
        i += 1;
    }

    let mut matched = false;
    let mut first = true;

    loop {
        let start = *pattern.get(i)?;

        if start == ']' && !first {
            return Some((matched != negated, i + 1));
        }
        first = false;

        match (pattern.get(i + 1), pattern.get(i + 2)) {
            (Some('-'), Some(&end)) if end != ']' => {
                matched |= start <= c && c <= end;
                i += 3;
            }
            _ => {
                matched |= start == c;
                i += 1;
            }
        }
    }
}

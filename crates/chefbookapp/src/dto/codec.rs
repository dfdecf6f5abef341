//! String encoding for list-valued DTO columns.
//!
//! A list column holds its items joined with `;`. Items are escaped with a
//! backslash so that a literal `;` (or `\`) inside an item survives:
//!
//! ```text
//! ["0501112233", "0509998877"]   ->  0501112233;0509998877
//! ["soup; no salt"]              ->  soup\; no salt
//! ```
//!
//! Empty segments are dropped on the way in, so `"a;;b;"` reads as `["a", "b"]`.
//!
//! A note item is its text, then `#` and a comma-separated tag list when the
//! note has tags. A literal `#` in the text is escaped the same way:
//!
//! ```text
//! ("table by the window", ["vip", "regular"])  ->  table by the window#vip,regular
//! ("room #2 only", [])                          ->  room \#2 only
//! ```
//!
//! Tag names cannot contain `#`, `,` or `;`, so the tag list needs no escaping.

const LIST_SEPARATOR: char = ';';
const TAG_MARKER: char = '#';
const TAG_SEPARATOR: &str = ",";
const ESCAPE: char = '\\';

fn escape(raw: &str, special: char, out: &mut String) {
    for ch in raw.chars() {
        if ch == ESCAPE || ch == special {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
}

pub fn join_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(LIST_SEPARATOR);
        }
        escape(item.as_ref(), LIST_SEPARATOR, &mut out);
    }
    out
}

pub fn split_list(raw: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE => current.push(chars.next().unwrap_or(ESCAPE)),
            LIST_SEPARATOR => {
                if !current.is_empty() {
                    items.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        items.push(current);
    }
    items
}

pub fn encode_note(text: &str, tags: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    escape(text, TAG_MARKER, &mut out);
    if !tags.is_empty() {
        out.push(TAG_MARKER);
        out.push_str(&tags.join(TAG_SEPARATOR));
    }
    out
}

pub fn decode_note(raw: &str) -> (String, Vec<String>) {
    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE => text.push(chars.next().unwrap_or(ESCAPE)),
            TAG_MARKER => {
                let tags = chars
                    .as_str()
                    .split(TAG_SEPARATOR)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect();
                return (text, tags);
            }
            _ => text.push(ch),
        }
    }
    (text, Vec::new())
}

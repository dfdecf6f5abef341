//! Note tag names.
//!
//! A tag is a word of ASCII letters, digits, `_` and `-`. It starts with a
//! letter, and hyphens only ever join two words (`gluten-free`, never
//! `gluten--free` or `vip-`).
//!
//! None of `;`, `#` or `,` can appear in a tag, so the note encoding in
//! [`super::note`] never has to escape one.

use super::Violation;

/// Checks a tag name, reporting the first rule it breaks.
///
/// # Examples
/// ```
/// use chefbookapp::fields::{validate_tag_name, Violation};
///
/// assert!(validate_tag_name("vip").is_ok());
/// assert!(validate_tag_name("gluten-free").is_ok());
/// assert!(validate_tag_name("table_4").is_ok());
///
/// assert_eq!(validate_tag_name(""), Err(Violation::Empty));
/// assert_eq!(validate_tag_name("4table"), Err(Violation::TagStart('4')));
/// assert_eq!(validate_tag_name("vip-"), Err(Violation::TagTrailingHyphen));
/// assert_eq!(validate_tag_name("no--nuts"), Err(Violation::TagDoubleHyphen));
/// ```
pub fn validate_tag_name(name: &str) -> Result<(), Violation> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(Violation::Empty),
        Some(first) if !first.is_ascii_alphabetic() => return Err(Violation::TagStart(first)),
        Some(_) => {}
    }

    let mut after_hyphen = false;
    for ch in chars {
        match ch {
            '-' if after_hyphen => return Err(Violation::TagDoubleHyphen),
            '-' => after_hyphen = true,
            c if c.is_ascii_alphanumeric() || c == '_' => after_hyphen = false,
            c => return Err(Violation::TagCharacter(c)),
        }
    }

    if after_hyphen {
        return Err(Violation::TagTrailingHyphen);
    }
    Ok(())
}

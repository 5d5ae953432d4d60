//! Tone rendering: numeric-tone syllables to diacritic-marked pinyin.
//!
//! Input syllables are lowercase ASCII with `v` standing in for `ü`, so
//! `bei` + tone 3 becomes `běi` and `lv` + tone 3 becomes `lǚ`. Tone marks
//! are emitted as combining codepoints placed after the base vowel.

/// Vowels that can carry a tone mark, in marking priority order.
/// The first of these found anywhere in the syllable gets the mark,
/// regardless of character position ("hao" marks the `a`, not the `o`).
const VOWEL_PRIORITY: [char; 6] = ['a', 'o', 'e', 'i', 'u', 'v'];

/// Combining diacritic for a tone, `None` for the neutral tone (5)
/// and for anything outside 1..=5.
pub const fn tone_combining_mark(tone: u8) -> Option<char> {
    Some(match tone {
        1 => '\u{0304}', // macron
        2 => '\u{0301}', // acute
        3 => '\u{030C}', // caron
        4 => '\u{0300}', // grave
        _ => {
            return None;
        }
    })
}

/// The vowel that should carry the tone mark, by priority scan.
/// `None` for vowel-less input (no such syllable exists in the catalog).
fn tone_vowel(syllable: &str) -> Option<char> {
    VOWEL_PRIORITY
        .iter()
        .copied()
        .find(|&v| syllable.contains(v))
}

/// Render a syllable with the given tone.
///
/// The mark goes on the leftmost occurrence of the priority vowel; every
/// `v` is rendered as `ü`, so a mark selected for `v` ends up attached to
/// the `ü`. Tone 5 and vowel-less input fall through to plain `v → ü`
/// substitution with no mark.
///
/// Note on compressed diphthongs: syllables spelled `iu`, `ui`, `un` are
/// contractions of `iou`, `uei`, `uen`; strict orthography would mark the
/// second vowel, but the priority scan marks `i` before `u`. This matches
/// the behavior of the catalog's source table and is kept as-is.
pub fn add_tone(syllable: &str, tone: u8) -> String {
    let mark = tone_combining_mark(tone);
    let marked_vowel = match mark {
        Some(_) => tone_vowel(syllable),
        None => None,
    };

    let mut rendered = String::with_capacity(syllable.len() + 4);
    let mut mark_placed = false;
    for c in syllable.chars() {
        rendered.push(if c == 'v' { 'ü' } else { c });
        if !mark_placed && marked_vowel == Some(c) {
            if let Some(m) = mark {
                rendered.push(m);
            }
            mark_placed = true;
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_combining_mark() {
        assert_eq!(tone_combining_mark(1), Some('\u{0304}'));
        assert_eq!(tone_combining_mark(2), Some('\u{0301}'));
        assert_eq!(tone_combining_mark(3), Some('\u{030C}'));
        assert_eq!(tone_combining_mark(4), Some('\u{0300}'));
        assert_eq!(tone_combining_mark(5), None);
        assert_eq!(tone_combining_mark(0), None);
        assert_eq!(tone_combining_mark(6), None);
    }

    #[test]
    fn test_tone_vowel_priority() {
        assert_eq!(tone_vowel("hao"), Some('a'));
        assert_eq!(tone_vowel("bei"), Some('e'));
        assert_eq!(tone_vowel("zhong"), Some('o'));
        assert_eq!(tone_vowel("liu"), Some('i'));
        assert_eq!(tone_vowel("gui"), Some('i'));
        assert_eq!(tone_vowel("lun"), Some('u'));
        assert_eq!(tone_vowel("lv"), Some('v'));
        assert_eq!(tone_vowel("shi"), Some('i'));
        assert_eq!(tone_vowel("ng"), None);
        assert_eq!(tone_vowel(""), None);
    }

    #[test]
    fn test_add_tone() {
        // expected strings spell the combining mark explicitly so that
        // editor NFC normalization can never silently change them
        assert_eq!(add_tone("ma", 1), "ma\u{0304}");
        assert_eq!(add_tone("ma", 2), "ma\u{0301}");
        assert_eq!(add_tone("ma", 3), "ma\u{030C}");
        assert_eq!(add_tone("ma", 4), "ma\u{0300}");
        assert_eq!(add_tone("ma", 5), "ma");

        // priority picks a over o, e over i
        assert_eq!(add_tone("hao", 3), "ha\u{030C}o");
        assert_eq!(add_tone("bei", 3), "be\u{030C}i");
        assert_eq!(add_tone("bao", 1), "ba\u{0304}o");
        assert_eq!(add_tone("zhuai", 4), "zhua\u{0300}i");

        // mark lands on the leftmost occurrence of the chosen vowel
        assert_eq!(add_tone("zhong", 1), "zho\u{0304}ng");
        assert_eq!(add_tone("xiong", 2), "xio\u{0301}ng");
        assert_eq!(add_tone("er", 2), "e\u{0301}r");
        assert_eq!(add_tone("chi", 1), "chi\u{0304}");
        assert_eq!(add_tone("yun", 2), "yu\u{0301}n");

        // compressed diphthongs keep the priority-scan placement
        assert_eq!(add_tone("liu", 2), "li\u{0301}u");
        assert_eq!(add_tone("gui", 4), "gui\u{0300}");
        assert_eq!(add_tone("dun", 4), "du\u{0300}n");

        // v renders as ü, mark attached after it
        assert_eq!(add_tone("lv", 3), "lü\u{030C}");
        assert_eq!(add_tone("nv", 3), "nü\u{030C}");
        assert_eq!(add_tone("nve", 4), "nüe\u{0300}");
        assert_eq!(add_tone("lve", 4), "lüe\u{0300}");

        // neutral tone substitutes but never marks
        assert_eq!(add_tone("nv", 5), "nü");
        assert_eq!(add_tone("lve", 5), "lüe");
        assert_eq!(add_tone("hao", 5), "hao");

        // vowel-less input degrades to the neutral-tone path
        assert_eq!(add_tone("ng", 3), "ng");
        assert_eq!(add_tone("", 3), "");
    }
}

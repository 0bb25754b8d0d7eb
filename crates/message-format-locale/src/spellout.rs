//! English rule-based number spellout and ordinal suffixes.

use crate::plural::PluralCategory;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Spells out `1..=999`, pushing words onto `words`.
fn spell_group(n: u64, words: &mut Vec<String>) {
    let hundreds = n.div_euclid(100);
    let rest = n % 100;
    if hundreds > 0 {
        words.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest == 0 {
        return;
    }
    if rest < 20 {
        words.push(ONES[rest as usize].to_string());
        return;
    }
    let tens = TENS[rest.div_euclid(10) as usize];
    match rest % 10 {
        0 => words.push(tens.to_string()),
        unit => words.push(format!("{tens}-{}", ONES[unit as usize])),
    }
}

fn spell_integer(n: i64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let mut groups = Vec::new();
    let mut rest = n.unsigned_abs();
    while rest > 0 {
        groups.push(rest % 1000);
        rest = rest.div_euclid(1000);
    }
    let mut words = Vec::new();
    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        spell_group(*group, &mut words);
        if scale > 0 {
            words.push(SCALES[scale].to_string());
        }
    }
    let text = words.join(" ");
    if n < 0 { format!("minus {text}") } else { text }
}

/// Spells out a number in English words.
///
/// Fractional digits are read one by one after "point". Returns `None` when
/// `text` is not a plain decimal literal.
///
/// ```
/// use message_format_locale::spell_out_english;
///
/// assert_eq!(spell_out_english("1234").as_deref(), Some("one thousand two hundred thirty-four"));
/// assert_eq!(spell_out_english("-2.05").as_deref(), Some("minus two point zero five"));
/// ```
pub fn spell_out_english(text: &str) -> Option<String> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let negative = whole.starts_with('-');
    let integer: i64 = whole.parse().ok()?;
    let mut spelled = spell_integer(integer);
    if negative && integer == 0 {
        spelled = format!("minus {spelled}");
    }
    let Some(fraction) = fraction else {
        return Some(spelled);
    };
    let mut digits = Vec::with_capacity(fraction.len());
    for c in fraction.chars() {
        let digit = c.to_digit(10)?;
        digits.push(ONES[digit as usize]);
    }
    if digits.is_empty() {
        return Some(spelled);
    }
    Some(format!("{spelled} point {}", digits.join(" ")))
}

/// The English ordinal suffix for an ordinal plural category.
pub fn english_ordinal_suffix(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::One => "st",
        PluralCategory::Two => "nd",
        PluralCategory::Few => "rd",
        PluralCategory::Zero | PluralCategory::Many | PluralCategory::Other => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(text: &str) -> String {
        spell_out_english(text).unwrap()
    }

    #[test]
    fn spells_small_numbers() {
        assert_eq!(spell("0"), "zero");
        assert_eq!(spell("7"), "seven");
        assert_eq!(spell("13"), "thirteen");
        assert_eq!(spell("40"), "forty");
        assert_eq!(spell("42"), "forty-two");
    }

    #[test]
    fn spells_hundreds_and_scales() {
        assert_eq!(spell("100"), "one hundred");
        assert_eq!(spell("101"), "one hundred one");
        assert_eq!(spell("1000"), "one thousand");
        assert_eq!(spell("1000001"), "one million one");
        assert_eq!(
            spell("9223372036854775807"),
            "nine quintillion two hundred twenty-three quadrillion three hundred \
             seventy-two trillion thirty-six billion eight hundred fifty-four million \
             seven hundred seventy-five thousand eight hundred seven"
        );
    }

    #[test]
    fn spells_negative_and_fractional_numbers() {
        assert_eq!(spell("-5"), "minus five");
        assert_eq!(spell("1.5"), "one point five");
        assert_eq!(spell("-0.25"), "minus zero point two five");
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(spell_out_english("abc"), None);
        assert_eq!(spell_out_english("1.x"), None);
    }
}

//! Word spans from the Unicode word boundary rules

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};
use unicode_segmentation::UnicodeSegmentation;

/// Spans between UAX #29 word boundaries that contain a letter or digit
///
/// Whitespace and punctuation runs are boundary-delimited spans of their own
/// and are skipped.
pub fn words(line: &str) -> impl Iterator<Item = &str> + '_ {
    line.split_word_bounds().filter(|span| is_word(span))
}

/// True if any codepoint in `span` is a letter or digit
pub fn is_word(span: &str) -> bool {
    span.chars().any(is_letter_or_digit)
}

/// Letters (any `L*` category) and decimal digits (`Nd`)
///
/// Other numerics such as superscripts, fractions and roman numerals do not
/// count.
pub fn is_letter_or_digit(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
        || c.general_category() == GeneralCategory::DecimalNumber
}

use itertools::Itertools;

/// Characters treated as vowels, `y` included
pub const VOWELS: &str = "aeiouyAEIOUY";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Copy of `s` with every vowel removed
pub fn remove_vowels(s: &str) -> String {
    s.chars().filter(|&c| !is_vowel(c)).collect()
}

/// Whether `s` contains the same character twice in a row
pub fn has_adjacent_repeat(s: &str) -> bool {
    s.chars().tuple_windows().any(|(a, b)| a == b)
}

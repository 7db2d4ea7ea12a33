//! Text folding shared by search and sorting.

/// Accented characters that show up in catalog names, folded to ASCII.
const FOLDED: &[(char, char)] = &[('é', 'e'), ('É', 'e')];

/// Lowercases `s` and folds known diacritics, so "Varré" matches "varre".
pub fn fold(s: &str) -> String {
    s.chars()
        .map(|c| {
            FOLDED
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .flat_map(char::to_lowercase)
        .collect()
}

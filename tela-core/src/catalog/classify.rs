use tela_model::{ContentKind, Genre};

/// Label used when no genre is present or none matches the synonym table.
pub const FALLBACK_CATEGORY: &str = "Sem categoria";

/// Lowercase genre fragments mapped to canonical category labels. Matching is
/// by substring, so "ação e aventura" still lands in "Ação".
const GENRE_SYNONYMS: &[(&str, &str)] = &[
    ("ação", "Ação"),
    ("action", "Ação"),
    ("terror", "Terror"),
    ("horror", "Terror"),
    ("crime", "Crime"),
    ("drama", "Drama"),
    ("thriller", "Crime"),
    ("mistério", "Crime"),
    ("mystery", "Crime"),
];

/// Map a title's genre tags to its primary category label.
///
/// Only the first genre is consulted. The result is prefixed per kind
/// (`Filme ~ ` / `Séries ~ `); unmatched or missing genres fall back to
/// [`FALLBACK_CATEGORY`]. Always returns a label.
pub fn classify(genres: &[Genre], kind: ContentKind) -> String {
    let prefix = kind.category_prefix();

    let Some(first) = genres.first() else {
        return format!("{prefix}{FALLBACK_CATEGORY}");
    };

    let name = first.name.to_lowercase();
    for (needle, label) in GENRE_SYNONYMS {
        if name.contains(needle) {
            return format!("{prefix}{label}");
        }
    }

    format!("{prefix}{FALLBACK_CATEGORY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(names: &[&str]) -> Vec<Genre> {
        names
            .iter()
            .map(|n| Genre {
                name: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn maps_known_synonyms_with_kind_prefix() {
        assert_eq!(
            classify(&genres(&["Action"]), ContentKind::Movie),
            "Filme ~ Ação"
        );
        assert_eq!(
            classify(&genres(&["Horror"]), ContentKind::Movie),
            "Filme ~ Terror"
        );
        assert_eq!(
            classify(&genres(&["Thriller"]), ContentKind::Series),
            "Séries ~ Crime"
        );
        assert_eq!(
            classify(&genres(&["Mistério"]), ContentKind::Series),
            "Séries ~ Crime"
        );
        assert_eq!(
            classify(&genres(&["Drama"]), ContentKind::Movie),
            "Filme ~ Drama"
        );
    }

    #[test]
    fn matches_by_substring_and_case_insensitively() {
        assert_eq!(
            classify(&genres(&["Ação e Aventura"]), ContentKind::Series),
            "Séries ~ Ação"
        );
        assert_eq!(
            classify(&genres(&["HORROR"]), ContentKind::Movie),
            "Filme ~ Terror"
        );
    }

    #[test]
    fn only_the_first_genre_is_consulted() {
        // Drama would match, but it is not first.
        assert_eq!(
            classify(&genres(&["Faroeste", "Drama"]), ContentKind::Movie),
            "Filme ~ Sem categoria"
        );
    }

    #[test]
    fn falls_back_when_empty_or_unrecognized() {
        assert_eq!(classify(&[], ContentKind::Movie), "Filme ~ Sem categoria");
        assert_eq!(
            classify(&genres(&["Documentário"]), ContentKind::Series),
            "Séries ~ Sem categoria"
        );
    }
}

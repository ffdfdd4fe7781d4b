use regex::Regex;

use crate::model::Roster;

/// Build the matcher for a search term: a case-insensitive literal, so the
/// search behaves as substring match. Whitespace-only terms mean "no
/// filter" and return None.
pub fn search_matcher(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(term))).ok()
}

/// Roster indices whose names match `term`, in original order. A pure view:
/// the roster is never mutated and the result is recomputed on every call,
/// so callers can map visible rows back to true indices without caching.
pub fn match_indices(roster: &Roster, term: &str) -> Vec<usize> {
    match search_matcher(term) {
        None => (0..roster.len()).collect(),
        Some(re) => roster
            .names()
            .iter()
            .enumerate()
            .filter(|(_, name)| re.is_match(name))
            .map(|(i, _)| i)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::from_names(["Alice", "Bob", "Charlie"])
    }

    #[test]
    fn substring_match_preserves_order() {
        let roster = sample_roster();
        let hits = match_indices(&roster, "li");
        assert_eq!(hits, vec![0, 2]);
        // roster itself untouched
        assert_eq!(roster.names(), &["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let roster = sample_roster();
        assert_eq!(match_indices(&roster, "BOB"), vec![1]);
        assert_eq!(match_indices(&roster, "aLiCe"), vec![0]);
    }

    #[test]
    fn blank_term_matches_everything() {
        let roster = sample_roster();
        assert_eq!(match_indices(&roster, ""), vec![0, 1, 2]);
        assert_eq!(match_indices(&roster, "   "), vec![0, 1, 2]);
    }

    #[test]
    fn no_matches_gives_empty_view() {
        let roster = sample_roster();
        assert!(match_indices(&roster, "zzz").is_empty());
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let roster = Roster::from_names(["A.C", "ABC"]);
        assert_eq!(match_indices(&roster, "A.C"), vec![0]);
    }
}

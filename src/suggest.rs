//! "Did you mean" hints for mistyped utility names and values

/// Edit distance between two strings (insertions, deletions, substitutions).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows are enough
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Up to three candidates within `max_distance` of `query`, closest first.
///
/// Comparison ignores ASCII case, so `fadein` finds `fadeIn` at distance 0.
pub fn closest_matches<'a, I>(query: &str, candidates: I, max_distance: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.to_lowercase();

    let mut scored: Vec<(&'a str, usize)> = candidates
        .into_iter()
        .map(|candidate| (candidate, levenshtein_distance(&query, &candidate.to_lowercase())))
        .filter(|(_, distance)| *distance <= max_distance)
        .collect();

    // Stable sort keeps declaration order between equal distances
    scored.sort_by_key(|(_, distance)| *distance);
    scored.dedup_by_key(|(candidate, _)| *candidate);
    scored.into_iter().take(3).map(|(candidate, _)| candidate).collect()
}

/// Render a hint suffix such as ` (did you mean 'fadeIn'?)`, or an empty
/// string when there is nothing to suggest.
pub fn did_you_mean(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(" (did you mean '{}'?)", only),
        many => {
            let quoted: Vec<String> = many.iter().map(|s| format!("'{}'", s)).collect();
            format!(" (did you mean one of {}?)", quoted.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("pulse", "pulse"), 0);
        assert_eq!(levenshtein_distance("bounse", "bounce"), 1);
    }

    #[test]
    fn test_closest_matches_ignores_case() {
        let matches = closest_matches("fadein", ["fadeIn", "fadeOut", "zoomIn"], 2);
        assert_eq!(matches[0], "fadeIn");
    }

    #[test]
    fn test_closest_matches_orders_by_distance() {
        let matches = closest_matches("shak", ["shakeY", "shake", "swing"], 2);
        assert_eq!(matches, vec!["shake", "shakeY"]);
    }

    #[test]
    fn test_closest_matches_limits_results() {
        let matches = closest_matches("a", ["b", "c", "d", "e"], 1);
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_closest_matches_none_in_range() {
        let matches = closest_matches("completely-different", ["fadeIn", "pulse"], 3);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_did_you_mean() {
        assert_eq!(did_you_mean(&[]), "");
        assert_eq!(did_you_mean(&["pulse".to_string()]), " (did you mean 'pulse'?)");
        assert_eq!(
            did_you_mean(&["shake".to_string(), "shakeY".to_string()]),
            " (did you mean one of 'shake', 'shakeY'?)"
        );
    }
}

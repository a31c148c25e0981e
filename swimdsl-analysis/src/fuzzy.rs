//! Nearest-neighbor string lookup by edit distance

/// The maximum Levenshtein distance between a typed identifier and a valid
/// one for a "did you mean" suggestion to be offered.
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// The candidate closest to `target` by Levenshtein distance, with its
/// distance. Ties resolve to the earliest candidate; `None` only when the
/// candidate set is empty.
pub fn closest<'a, I>(target: &str, candidates: I) -> Option<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let distance = strsim::levenshtein(target, candidate);
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }
    best
}

/// The closest candidate, if it is within [`MAX_SUGGESTION_DISTANCE`].
pub fn suggest<'a, I>(target: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    closest(target, candidates)
        .filter(|&(_, distance)| distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bord", &["Board", "Pads", "Fins"], Some(("Board", 1)))]
    #[case("Fins", &["Board", "Pads", "Fins"], Some(("Fins", 0)))]
    #[case("Snorkle", &["Snorkel", "Chute"], Some(("Snorkel", 2)))]
    fn closest_picks_the_minimum_distance(
        #[case] target: &str,
        #[case] candidates: &[&str],
        #[case] expected: Option<(&str, usize)>,
    ) {
        assert_eq!(closest(target, candidates.iter().copied()), expected);
    }

    #[test]
    fn ties_resolve_to_the_earliest_candidate() {
        // "ax" and "bx" are both distance 1 from "x".
        assert_eq!(closest("x", ["ax", "bx"]), Some(("ax", 1)));
        assert_eq!(closest("x", ["bx", "ax"]), Some(("bx", 1)));
    }

    #[test]
    fn empty_candidate_set_yields_none() {
        assert_eq!(closest("anything", []), None);
        assert_eq!(suggest("anything", []), None);
    }

    #[test]
    fn suggest_enforces_the_distance_threshold() {
        assert_eq!(suggest("Bord", ["Board", "Pads"]), Some("Board"));
        assert_eq!(suggest("Airplane", ["Board", "Pads"]), None);
    }
}

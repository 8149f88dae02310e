//! Typo suggestions for manifest keys

/// Suggestions further than this many edits away are not offered.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Levenshtein distance between `a` and `b`, counted in chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    // row[j] holds the distance between the prefix of `a` seen so far and b[..j].
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}

/// The candidate closest to `unknown`, if one is close enough to be a typo.
///
/// Ties go to the candidate listed first.
pub fn closest<'a>(unknown: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, edit_distance(unknown, candidate)))
        .filter(|&(_, dist)| dist <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|&(_, dist)| dist)
        .map(|(candidate, _)| candidate)
}

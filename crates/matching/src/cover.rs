use crate::query::Query;

/// Choose the items that together explain why a record matched `query`.
///
/// Items are `(key, text)` pairs and their order is significant: when two items
/// cover the same number of outstanding words the earlier one is chosen. An
/// item equal to the whole query (ignoring case) is returned on its own, even
/// when both are empty. Words that no item contains are left uncovered.
pub fn matching_subset<K: Clone>(query: &str, items: &[(K, &str)]) -> Vec<K> {
    let query = Query::parse(query);
    cover(&query, items)
}

/// [`matching_subset`] over plain strings, returning the chosen strings.
pub fn matching_items<'a, S: AsRef<str>>(query: &str, items: &'a [S]) -> Vec<&'a str> {
    let keyed: Vec<(&'a str, &'a str)> = items
        .iter()
        .map(|item| (item.as_ref(), item.as_ref()))
        .collect();
    matching_subset(query, &keyed)
}

pub(crate) fn cover<K: Clone>(query: &Query, items: &[(K, &str)]) -> Vec<K> {
    if let Some((key, _)) = items.iter().find(|(_, text)| query.is_exact(text)) {
        return vec![key.clone()];
    }

    if query.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(&K, Vec<&str>)> = items
        .iter()
        .map(|(key, text)| (key, query.matched_words(text)))
        .filter(|(_, words)| !words.is_empty())
        .collect();

    let mut uncovered = query.distinct_words();
    let mut chosen = Vec::new();

    while !uncovered.is_empty() {
        let mut best: Option<(usize, usize)> = None;
        for (position, (_, words)) in candidates.iter().enumerate() {
            let gain = words.iter().filter(|word| uncovered.contains(word)).count();
            if gain > best.map_or(0, |(_, best_gain)| best_gain) {
                best = Some((position, gain));
            }
        }

        let Some((position, _)) = best else {
            break;
        };

        let (key, words) = candidates.remove(position);
        uncovered.retain(|word| !words.contains(word));
        chosen.push(key.clone());
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_item_short_circuits() {
        let items = ["Acute Pain", "Pain, acute", "Acute"];
        assert_eq!(matching_items("Acute Pain", &items), vec!["Acute Pain"]);
    }

    #[test]
    fn exact_item_wins_even_when_listed_late() {
        let items = ["acute pain syndrome", "ACUTE PAIN"];
        assert_eq!(matching_items("acute pain", &items), vec!["ACUTE PAIN"]);
    }

    #[test]
    fn tie_goes_to_the_first_field() {
        let items = [
            ("notes", "patient reports acute symptoms"),
            ("diagnosis", "chronic pain"),
        ];
        assert_eq!(matching_subset("acute pain", &items), vec!["notes", "diagnosis"]);

        let reversed = [
            ("diagnosis", "chronic pain"),
            ("notes", "patient reports acute symptoms"),
        ];
        assert_eq!(matching_subset("acute pain", &reversed), vec!["diagnosis", "notes"]);
    }

    #[test]
    fn larger_coverage_is_preferred() {
        let items = [
            ("a", "alpha"),
            ("b", "beta gamma"),
            ("c", "alpha beta gamma delta"),
        ];
        assert_eq!(matching_subset("alpha beta gamma", &items), vec!["c"]);
    }

    #[test]
    fn redundant_items_are_skipped() {
        let items = [
            ("first", "red blue"),
            ("second", "blue"),
            ("third", "green"),
        ];
        assert_eq!(
            matching_subset("red blue green", &items),
            vec!["first", "third"]
        );
    }

    #[test]
    fn uncovered_words_are_tolerated() {
        let items = [("only", "red")];
        assert_eq!(matching_subset("red purple", &items), vec!["only"]);
        assert!(matching_subset::<&str>("purple", &items).is_empty());
    }

    #[test]
    fn empty_inputs_select_nothing() {
        let items = [("x", "pain")];
        assert!(matching_subset("", &items).is_empty());
        assert!(matching_subset::<&str>("red", &[]).is_empty());
    }

    #[test]
    fn empty_query_still_matches_an_empty_item_exactly() {
        let items = [("x", "pain"), ("y", ""), ("z", "")];
        assert_eq!(matching_subset("", &items), vec!["y"]);
    }

    #[test]
    fn repeated_words_count_once() {
        let items = [("a", "pain"), ("b", "pain pain acute")];
        assert_eq!(matching_subset("pain pain acute", &items), vec!["b"]);
    }
}

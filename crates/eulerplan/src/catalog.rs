//! Named example descriptions used by demos, benches and tests.

use crate::description::Description;

/// `(name, description text)` pairs.
pub const EXAMPLES: [(&str, &str); 10] = [
    ("Venn-3", "a b c abc ab ac bc"),
    ("Venn-4", "a b c d ab ac ad bc bd cd abc abd acd bcd abcd"),
    (
        "Venn-5",
        "a b c d e ab ac ad ae bc bd be cd ce de abc abd abe acd ace ade bcd bce bde cde abcd abce abde acde bcde abcde",
    ),
    (
        "Double Piercing",
        "a b c ab ac af ag bc be cd abc abe abf abg acd acf afg bcd bce abcd abce abcf abfg",
    ),
    (
        "Double Piercing 1",
        "a b c d ab ac ad ae bc bd cd abc abd acd ace bcd abcd acde",
    ),
    ("Double Piercing 2", "p q r pq pr qr qs rs pqs prs qrs qrt pqrs"),
    (
        "Double Piercing 3",
        "a b c d ac ad bc bd cd ce df abd acd ace bcd bce bdf cdf abcd abce bcdf",
    ),
    (
        "Edge Route",
        "a b c ab ac bc bd bf abc abd abf bcd bcf bdf abcd abdf bcdf",
    ),
    (
        "Edge Route 1",
        "a b c d ab ac ad bc bd be cd abc abd abe acd bcd bce bde abcd abce abde",
    ),
    (
        "Edge Route 2",
        "a b c d ab ac ad ae af bc bd cd abc abd acd ace acf adf bcd abcd acde adef",
    ),
];

/// Look up an example by name (case-insensitive) and parse it.
pub fn example(name: &str) -> Option<Description> {
    EXAMPLES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(_, text)| Description::from_informal(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_example_parses() {
        for (name, text) in EXAMPLES {
            let d = Description::from_informal(text);
            assert!(d.num_curves() >= 3, "{name}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let d = example("venn-4").unwrap();
        assert_eq!(d.num_curves(), 4);
        assert_eq!(d.num_zones(), 16);
        assert!(example("Venn-9").is_none());
    }
}

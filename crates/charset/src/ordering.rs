//! Canonical ordering of the filtered character set.

use crate::CharClass;

/// One labelled group in a [`CharsetOrdering`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingGroup {
    pub label: String,
    pub classes: Vec<CharClass>,
}

impl OrderingGroup {
    pub fn new(label: impl Into<String>, classes: impl Into<Vec<CharClass>>) -> Self {
        Self { label: label.into(), classes: classes.into() }
    }

    /// Settings key for the group: lowercase label with spaces as `_`.
    pub fn key(&self) -> String {
        self.label.to_lowercase().replace(' ', "_")
    }

    pub fn matches(&self, class: CharClass) -> bool {
        self.classes.contains(&class)
    }
}

/// Policy table for the character-set proof.
///
/// Groups are emitted in table order. A character goes to the first group
/// whose classes contain it; characters matching no group are dropped. Within
/// a group, characters are in ascending codepoint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetOrdering {
    groups: Vec<OrderingGroup>,
}

impl Default for CharsetOrdering {
    fn default() -> Self {
        use CharClass::*;

        Self {
            groups: vec![
                OrderingGroup::new("Uppercase", [UppercaseBase]),
                // Caseless letters sit with lowercase.
                OrderingGroup::new("Lowercase", [LowercaseBase, ModifierLetter, OtherLetter]),
                OrderingGroup::new("Figures", [Digit, OtherNumber]),
                OrderingGroup::new("Punctuation", [Punctuation]),
                OrderingGroup::new("Accented", [Accented]),
                OrderingGroup::new(
                    "Symbols",
                    [MathSymbol, CurrencySymbol, ModifierSymbol, OtherSymbol, Mark],
                ),
            ],
        }
    }
}

impl CharsetOrdering {
    pub fn new(groups: Vec<OrderingGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[OrderingGroup] {
        &self.groups
    }

    /// Keep only the groups for which `enabled(key)` holds.
    pub fn retain(mut self, mut enabled: impl FnMut(&str) -> bool) -> Self {
        self.groups.retain(|g| enabled(&g.key()));
        self
    }

    /// Split `chars` into labelled groups, skipping empty ones.
    pub fn grouped(&self, chars: impl IntoIterator<Item = char>) -> Vec<(&str, Vec<char>)> {
        let mut buckets: Vec<Vec<char>> = vec![Vec::new(); self.groups.len()];
        for c in chars {
            let class = CharClass::of(c);
            if let Some(idx) = self.groups.iter().position(|g| g.matches(class)) {
                buckets[idx].push(c);
            }
        }

        self.groups
            .iter()
            .zip(buckets)
            .filter(|(_, chars)| !chars.is_empty())
            .map(|(group, mut chars)| {
                chars.sort_unstable();
                chars.dedup();
                (group.label.as_str(), chars)
            })
            .collect()
    }

    /// Flattened ordering of `chars`.
    pub fn order(&self, chars: impl IntoIterator<Item = char>) -> Vec<char> {
        self.grouped(chars).into_iter().flat_map(|(_, chars)| chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_groups_in_canonical_order() {
        let ordering = CharsetOrdering::default();
        let ordered: String = ordering.order("é!b2A€aB1".chars()).into_iter().collect();
        assert_eq!(ordered, "ABab12!é€");
    }

    #[test]
    fn drops_unmatched_characters() {
        let ordering = CharsetOrdering::default();
        assert_eq!(ordering.order(" \t\u{E000}A".chars()), vec!['A']);
    }

    #[test]
    fn disabled_groups_are_skipped() {
        let ordering = CharsetOrdering::default().retain(|key| key != "accented");
        let groups: Vec<&str> =
            ordering.grouped("Aé1".chars()).into_iter().map(|(label, _)| label).collect();
        assert_eq!(groups, vec!["Uppercase", "Figures"]);
    }

    #[test]
    fn custom_table_reorders_groups() {
        let ordering = CharsetOrdering::new(vec![
            OrderingGroup::new("Figures", [CharClass::Digit]),
            OrderingGroup::new("Letters", [CharClass::UppercaseBase, CharClass::LowercaseBase]),
        ]);
        assert_eq!(ordering.order("a1B".chars()), vec!['1', 'B', 'a']);
    }

    #[test]
    fn group_key_is_snake_case() {
        assert_eq!(OrderingGroup::new("Other Letters", Vec::new()).key(), "other_letters");
    }
}

use std::collections::HashMap;

use super::card::AssetId;

/// Prefix → members, in first-seen order within each group.
#[derive(Clone, Debug, Default)]
pub struct PrefixGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<AssetId>>,
}

impl PrefixGroups {
    pub fn get(&self, prefix: &str) -> Option<&[AssetId]> {
        self.groups.get(prefix).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Prefixes in the order they were first seen.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Prefixes that can form at least one pair.
    pub fn valid_prefixes(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|prefix| self.groups.get(*prefix).is_some_and(|members| members.len() >= 2))
            .cloned()
            .collect()
    }
}

pub fn group_by_prefix(assets: &[AssetId], separator: char) -> PrefixGroups {
    let mut grouped = PrefixGroups::default();
    for asset in assets {
        let prefix = asset.prefix(separator);
        match grouped.groups.get_mut(prefix) {
            Some(members) => members.push(asset.clone()),
            None => {
                grouped.order.push(prefix.to_string());
                grouped
                    .groups
                    .insert(prefix.to_string(), vec![asset.clone()]);
            }
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<AssetId> {
        names.iter().map(|name| AssetId::new(*name)).collect()
    }

    #[test]
    fn groups_keep_insertion_order() {
        let assets = ids(&["A_2.png", "B_1.png", "A_1.png", "A_3.png"]);
        let grouped = group_by_prefix(&assets, '_');
        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped.get("A").unwrap(),
            ids(&["A_2.png", "A_1.png", "A_3.png"]).as_slice()
        );
        assert_eq!(grouped.get("B").unwrap(), ids(&["B_1.png"]).as_slice());
    }

    #[test]
    fn identifier_without_separator_forms_its_own_group() {
        let assets = ids(&["solo.png", "A_1.png"]);
        let grouped = group_by_prefix(&assets, '_');
        assert_eq!(grouped.get("solo.png").unwrap().len(), 1);
        assert_eq!(grouped.prefixes().collect::<Vec<_>>(), vec!["solo.png", "A"]);
    }

    #[test]
    fn valid_prefixes_need_two_members() {
        let assets = ids(&["A_1.png", "A_2.png", "B_1.png", "C_1.png", "C_2.png", "C_3.png"]);
        let grouped = group_by_prefix(&assets, '_');
        assert_eq!(grouped.valid_prefixes(), vec!["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let grouped = group_by_prefix(&[], '_');
        assert!(grouped.is_empty());
        assert!(grouped.valid_prefixes().is_empty());
    }
}

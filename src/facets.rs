//! Facet option indexes: the distinct tags and districts present in a
//! collection, for populating filter controls.

use std::collections::BTreeSet;

use crate::entity::Entity;

/// Rank used for the numeric district sort; labels without a leading integer
/// sort after all numeric ones.
const NON_NUMERIC_RANK: u32 = 999;

/// Distinct tags across `entities`, lexicographically sorted.
pub fn all_tags(entities: &[&Entity]) -> Vec<String> {
    let set: BTreeSet<&String> = entities.iter().flat_map(|e| e.tags.iter()).collect();
    set.into_iter().cloned().collect()
}

/// Distinct non-empty districts across `entities`, sorted by leading integer.
///
/// District labels are mostly district numbers ("3", "21") with the odd plain
/// name mixed in; names without a parseable leading integer trail the numeric
/// ones, keeping their lexical order among themselves.
pub fn all_districts(entities: &[&Entity]) -> Vec<String> {
    let set: BTreeSet<&String> = entities
        .iter()
        .filter(|e| !e.location.district.is_empty())
        .map(|e| &e.location.district)
        .collect();

    let mut districts: Vec<String> = set.into_iter().cloned().collect();
    districts.sort_by_key(|d| district_rank(d));
    districts
}

fn district_rank(district: &str) -> u32 {
    let digits: String = district.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(NON_NUMERIC_RANK)
}

#[cfg(test)]
mod tests {
    use super::district_rank;

    #[test]
    fn numeric_districts_rank_by_leading_integer() {
        assert_eq!(district_rank("3"), 3);
        assert_eq!(district_rank("21"), 21);
        assert_eq!(district_rank("7. Neubau"), 7);
    }

    #[test]
    fn non_numeric_districts_rank_last() {
        assert_eq!(district_rank("Floridsdorf"), 999);
        assert_eq!(district_rank(""), 999);
    }
}

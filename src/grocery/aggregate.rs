use std::collections::BTreeMap;

use tracing::warn;
use uuid::Uuid;

use super::dto::GrocerySection;
use super::repo::CookedMealRow;

/// Project cooked-meal rows into display sections.
///
/// Pure and idempotent: the same rows always yield element-wise equal
/// sections. A row whose `ingredients` text fails to decode is excluded and
/// logged; the rest of the list still renders.
pub fn load(rows: &[CookedMealRow]) -> Vec<GrocerySection> {
    rows.iter()
        .filter_map(|row| match serde_json::from_str::<Vec<String>>(&row.ingredients) {
            Ok(ingredients) => Some(GrocerySection {
                meal_id: row.meal_id,
                meal_name: row.meal_name.clone(),
                ingredients,
            }),
            Err(e) => {
                warn!(meal_id = %row.meal_id, error = %e, "undecodable ingredients, row excluded");
                None
            }
        })
        .collect()
}

/// Drop the row matching `meal_id`. Pure; the backend delete is a separate
/// repo call, and a successful delete is followed by a fresh `load`.
pub fn remove(rows: Vec<CookedMealRow>, meal_id: Uuid) -> Vec<CookedMealRow> {
    rows.into_iter().filter(|r| r.meal_id != meal_id).collect()
}

/// Ephemeral tick state for the grocery checklist, keyed by
/// (section index, ingredient index). Absent means unchecked. Scoped to one
/// loaded list: every reload starts from `CheckState::default()`, so stale
/// indices never leak into a re-ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckState(BTreeMap<(usize, usize), bool>);

impl CheckState {
    pub fn is_checked(&self, section: usize, ingredient: usize) -> bool {
        self.0.get(&(section, ingredient)).copied().unwrap_or(false)
    }

    /// Invert one key, leaving every other key untouched. Unchecking drops
    /// the entry rather than storing `false`, so toggling twice returns a
    /// state equal to the original.
    #[must_use]
    pub fn toggle(&self, section: usize, ingredient: usize) -> CheckState {
        let mut next = self.0.clone();
        if self.is_checked(section, ingredient) {
            next.remove(&(section, ingredient));
        } else {
            next.insert((section, ingredient), true);
        }
        CheckState(next)
    }

    pub fn checked_count(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn row(meal_id: Uuid, name: &str, ingredients: &str) -> CookedMealRow {
        CookedMealRow {
            meal_id,
            meal_name: name.into(),
            ingredients: ingredients.into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn load_projects_sections_with_decoded_ingredients() {
        let soup = Uuid::new_v4();
        let toast = Uuid::new_v4();
        let rows = vec![
            row(soup, "Soup", r#"["Carrot","Salt"]"#),
            row(toast, "Toast", r#"["Bread"]"#),
        ];

        let sections = load(&rows);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].meal_id, soup);
        assert_eq!(sections[0].ingredients, vec!["Carrot", "Salt"]);
        assert_eq!(sections[1].meal_name, "Toast");
        assert_eq!(sections[1].ingredients, vec!["Bread"]);
    }

    #[test]
    fn load_is_idempotent() {
        let rows = vec![
            row(Uuid::new_v4(), "Soup", r#"["Carrot","Salt"]"#),
            row(Uuid::new_v4(), "Toast", r#"["Bread"]"#),
        ];
        assert_eq!(load(&rows), load(&rows));
    }

    #[test]
    fn undecodable_row_is_excluded_rest_still_renders() {
        let good = Uuid::new_v4();
        let rows = vec![
            row(Uuid::new_v4(), "Mystery", "not json at all"),
            row(Uuid::new_v4(), "AlsoBad", r#"{"not":"an array"}"#),
            row(good, "Toast", r#"["Bread"]"#),
        ];

        let sections = load(&rows);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].meal_id, good);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let state = CheckState::default().toggle(2, 0);
        assert_eq!(state.toggle(0, 1).toggle(0, 1), state);
    }

    #[test]
    fn toggle_absent_key_checks_it_and_touches_nothing_else() {
        let state = CheckState::default();
        let toggled = state.toggle(0, 1);
        assert!(toggled.is_checked(0, 1));
        assert!(!toggled.is_checked(0, 0));
        assert!(!toggled.is_checked(1, 1));
        // Input was not mutated.
        assert!(!state.is_checked(0, 1));
    }

    #[test]
    fn reload_resets_checks() {
        let rows = vec![row(Uuid::new_v4(), "Soup", r#"["Carrot","Salt"]"#)];
        let _sections = load(&rows);
        let checks = CheckState::default().toggle(0, 1);
        assert!(checks.is_checked(0, 1));

        // A refetch builds both the sections and the check state afresh.
        let _sections = load(&rows);
        let checks = CheckState::default();
        assert_eq!(checks.checked_count(), 0);
        assert!(!checks.is_checked(0, 1));
    }

    #[test]
    fn remove_drops_only_the_matching_meal() {
        let target = Uuid::new_v4();
        let keep = Uuid::new_v4();
        let rows = vec![
            row(target, "Soup", r#"["Carrot"]"#),
            row(keep, "Toast", r#"["Bread"]"#),
        ];

        let remaining = remove(rows, target);
        let sections = load(&remaining);
        assert!(sections.iter().all(|s| s.meal_id != target));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].meal_id, keep);
    }

    #[test]
    fn remove_of_unknown_id_is_a_no_op() {
        let rows = vec![row(Uuid::new_v4(), "Toast", r#"["Bread"]"#)];
        let remaining = remove(rows.clone(), Uuid::new_v4());
        assert_eq!(remaining.len(), rows.len());
    }
}

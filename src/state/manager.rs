use crate::error::{CalcError, Result};
use crate::models::{Constraint, Constraints, Ingredient, RequiredSupplement, Supplement};
use crate::state::Workspace;

/// Fields to change on an existing supplement; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct SupplementEdit {
    pub name: Option<String>,
    pub maker: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
}

/// Manages supplements, constraints and requirements of one workspace.
pub struct WorkspaceManager {
    supplements: Vec<Supplement>,
    constraints: Constraints,
    requirements: Vec<RequiredSupplement>,
}

impl WorkspaceManager {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            supplements: workspace.supplements,
            constraints: workspace.constraints,
            requirements: workspace.requirements,
        }
    }

    /// Add a supplement under the next free id, enabled. Returns the id.
    pub fn add_supplement(&mut self, mut supplement: Supplement) -> u32 {
        let id = self.supplements.iter().map(|s| s.id).max().map_or(1, |m| m + 1);
        supplement.id = id;
        supplement.disabled = false;
        self.supplements.push(supplement);
        id
    }

    /// Remove a supplement and any requirement pointing at it.
    pub fn remove_supplement(&mut self, id: u32) -> bool {
        let before = self.supplements.len();
        self.supplements.retain(|s| s.id != id);
        self.requirements.retain(|r| r.supplement_id != id);
        self.supplements.len() != before
    }

    /// Replace the supplement with the same id, keeping its disabled flag.
    pub fn update_supplement(&mut self, mut supplement: Supplement) -> bool {
        match self.supplements.iter_mut().find(|s| s.id == supplement.id) {
            Some(existing) => {
                supplement.disabled = existing.disabled;
                *existing = supplement;
                true
            }
            None => false,
        }
    }

    /// Apply `edit` to the supplement with `id`.
    pub fn edit_supplement(&mut self, id: u32, edit: SupplementEdit) -> Result<()> {
        let mut supplement = self
            .get_supplement(id)
            .cloned()
            .ok_or_else(|| CalcError::SupplementNotFound(format!("#{}", id)))?;

        if let Some(name) = edit.name {
            supplement.name = name;
        }
        if let Some(maker) = edit.maker {
            supplement.maker = maker;
        }
        if let Some(ingredients) = edit.ingredients {
            supplement.ingredients = ingredients;
        }

        self.update_supplement(supplement);
        Ok(())
    }

    pub fn set_supplement_disabled(&mut self, id: u32, disabled: bool) -> bool {
        match self.supplements.iter_mut().find(|s| s.id == id) {
            Some(supplement) => {
                supplement.disabled = disabled;
                true
            }
            None => false,
        }
    }

    pub fn get_supplement(&self, id: u32) -> Option<&Supplement> {
        self.supplements.iter().find(|s| s.id == id)
    }

    /// Case-insensitive lookup by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Supplement> {
        let name = name.to_lowercase();
        self.supplements.iter().find(|s| s.name.to_lowercase() == name)
    }

    pub fn all_supplements(&self) -> &[Supplement] {
        &self.supplements
    }

    pub fn set_constraint(&mut self, ingredient: impl Into<String>, constraint: Constraint) {
        self.constraints.insert(ingredient.into(), constraint);
    }

    pub fn remove_constraint(&mut self, ingredient: &str) -> bool {
        self.constraints.remove(ingredient).is_some()
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Require at least `amount` units of a supplement, replacing any
    /// existing requirement for it.
    pub fn set_requirement(&mut self, supplement_id: u32, amount: u32) -> Result<()> {
        if self.get_supplement(supplement_id).is_none() {
            return Err(CalcError::SupplementNotFound(format!("#{}", supplement_id)));
        }

        let requirement = RequiredSupplement::new(supplement_id, amount);
        match self
            .requirements
            .iter_mut()
            .find(|r| r.supplement_id == supplement_id)
        {
            Some(existing) => *existing = requirement,
            None => self.requirements.push(requirement),
        }
        Ok(())
    }

    pub fn remove_requirement(&mut self, supplement_id: u32) -> bool {
        let before = self.requirements.len();
        self.requirements.retain(|r| r.supplement_id != supplement_id);
        self.requirements.len() != before
    }

    pub fn requirements(&self) -> &[RequiredSupplement] {
        &self.requirements
    }

    /// Requirements whose supplement is missing or disabled.
    ///
    /// Any of these makes every combination infeasible.
    pub fn unsatisfiable_requirements(&self) -> Vec<RequiredSupplement> {
        self.requirements
            .iter()
            .filter(|r| {
                self.get_supplement(r.supplement_id)
                    .is_none_or(|s| s.disabled)
            })
            .copied()
            .collect()
    }

    /// Convert state back to a workspace for JSON serialization.
    pub fn to_workspace(&self) -> Workspace {
        Workspace {
            supplements: self.supplements.clone(),
            constraints: self.constraints.clone(),
            requirements: self.requirements.clone(),
        }
    }

    /// Count of supplements in the manager.
    pub fn len(&self) -> usize {
        self.supplements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supplements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manager() -> WorkspaceManager {
        let mut manager = WorkspaceManager::new(Workspace::default());
        manager.add_supplement(
            Supplement::new(0, "Vitamin D3", "Acme").with_ingredient("vitaminD", 25.0),
        );
        manager.add_supplement(Supplement::new(0, "Zinc", "Acme").with_ingredient("zinc", 15.0));
        manager
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let manager = sample_manager();
        let ids: Vec<u32> = manager.all_supplements().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let manager = sample_manager();
        assert_eq!(manager.find_by_name("vitamin d3").map(|s| s.id), Some(1));
        assert!(manager.find_by_name("iron").is_none());
    }

    #[test]
    fn test_update_preserves_disabled() {
        let mut manager = sample_manager();
        assert!(manager.set_supplement_disabled(2, true));

        let replacement = Supplement::new(2, "Zinc Plus", "Acme").with_ingredient("zinc", 25.0);
        assert!(manager.update_supplement(replacement));

        let zinc = manager.get_supplement(2).unwrap();
        assert_eq!(zinc.name, "Zinc Plus");
        assert!(zinc.disabled);
        assert!(!manager.update_supplement(Supplement::new(42, "Ghost", "")));
    }

    #[test]
    fn test_edit_supplement_keeps_unset_fields_and_disabled() {
        let mut manager = sample_manager();
        manager.set_supplement_disabled(1, true);

        let edit = SupplementEdit {
            maker: Some("Other Labs".to_string()),
            ingredients: Some(vec![Ingredient::new("vitaminD", 50.0)]),
            ..Default::default()
        };
        manager.edit_supplement(1, edit).unwrap();

        let d3 = manager.get_supplement(1).unwrap();
        assert_eq!(d3.name, "Vitamin D3");
        assert_eq!(d3.maker, "Other Labs");
        assert_eq!(d3.ingredients, vec![Ingredient::new("vitaminD", 50.0)]);
        assert!(d3.disabled);
    }

    #[test]
    fn test_edit_unknown_supplement_fails() {
        let mut manager = sample_manager();
        assert!(matches!(
            manager.edit_supplement(42, SupplementEdit::default()),
            Err(CalcError::SupplementNotFound(_))
        ));
    }

    #[test]
    fn test_remove_supplement_drops_requirements() {
        let mut manager = sample_manager();
        manager.set_requirement(1, 2).unwrap();
        assert!(manager.remove_supplement(1));
        assert!(manager.requirements().is_empty());
        assert!(!manager.remove_supplement(1));
    }

    #[test]
    fn test_set_requirement_replaces_and_validates() {
        let mut manager = sample_manager();
        manager.set_requirement(1, 1).unwrap();
        manager.set_requirement(1, 3).unwrap();
        assert_eq!(manager.requirements(), &[RequiredSupplement::new(1, 3)]);

        assert!(matches!(
            manager.set_requirement(99, 1),
            Err(CalcError::SupplementNotFound(_))
        ));
    }

    #[test]
    fn test_unsatisfiable_requirements() {
        let mut manager = sample_manager();
        manager.set_requirement(2, 1).unwrap();
        assert!(manager.unsatisfiable_requirements().is_empty());

        manager.set_supplement_disabled(2, true);
        assert_eq!(manager.unsatisfiable_requirements().len(), 1);
    }

    #[test]
    fn test_constraints_crud() {
        let mut manager = sample_manager();
        manager.set_constraint("vitaminD", Constraint::new(50.0, 150.0));
        assert_eq!(manager.constraints().len(), 1);
        assert!(manager.remove_constraint("vitaminD"));
        assert!(!manager.remove_constraint("vitaminD"));
    }
}

use serde::{Deserialize, Serialize};

/// One named ingredient contributed by a single unit of a supplement.
///
/// Amounts are always in mg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// A purchasable supplement: a fixed bundle of ingredient amounts.
///
/// Disabled supplements stay in the workspace but are ignored by the solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplement {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub maker: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub disabled: bool,
}

impl Supplement {
    pub fn new(id: u32, name: impl Into<String>, maker: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            maker: maker.into(),
            image: None,
            ingredients: Vec::new(),
            disabled: false,
        }
    }

    /// Builder-style helper to append an ingredient.
    pub fn with_ingredient(mut self, name: impl Into<String>, amount: f64) -> Self {
        self.ingredients.push(Ingredient::new(name, amount));
        self
    }

    /// One-line summary for listings.
    pub fn summary(&self) -> String {
        let ingredients: Vec<String> = self
            .ingredients
            .iter()
            .map(|i| format!("{} {}mg", i.name, i.amount))
            .collect();
        format!(
            "#{} {} ({}) - {}",
            self.id,
            self.name,
            if self.maker.is_empty() { "unknown" } else { &self.maker },
            ingredients.join(", ")
        )
    }
}

impl PartialEq for Supplement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Supplement {}

#[cfg(test)]
mod tests {
    use super::*;

    fn multivitamin() -> Supplement {
        Supplement::new(1, "Multi", "Acme")
            .with_ingredient("vitaminC", 100.0)
            .with_ingredient("vitaminD", 0.025)
    }

    #[test]
    fn test_disabled_defaults_to_false() {
        let json = r#"{"id": 3, "name": "Zinc", "maker": "Acme", "ingredients": [{"name": "zinc", "amount": 15}]}"#;
        let supplement: Supplement = serde_json::from_str(json).unwrap();
        assert!(!supplement.disabled);
        assert_eq!(supplement.ingredients.len(), 1);
    }

    #[test]
    fn test_equality_by_id() {
        let a = multivitamin();
        let mut b = multivitamin();
        b.name = "Renamed".to_string();
        assert_eq!(a, b);
    }
}

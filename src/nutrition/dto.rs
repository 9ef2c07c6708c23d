use serde::Deserialize;

use super::repo::NewNutritionEntry;
use crate::{error::AppError, utils::required};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNutritionRequest {
    pub name: Option<String>,
    pub meal_type: Option<String>,
    pub protein_grams: Option<f64>,
    pub fat_grams: Option<f64>,
}

impl TryFrom<CreateNutritionRequest> for NewNutritionEntry {
    type Error = AppError;

    fn try_from(r: CreateNutritionRequest) -> Result<Self, Self::Error> {
        Ok(NewNutritionEntry {
            name: required(r.name).ok_or_else(|| AppError::Validation("name is required".into()))?,
            meal_type: r.meal_type,
            protein_grams: r.protein_grams,
            fat_grams: r.fat_grams,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_body_uses_camel_case() {
        let req: CreateNutritionRequest = serde_json::from_str(
            r#"{"name":"Oats","mealType":"breakfast","proteinGrams":12.5,"fatGrams":6}"#,
        )
        .unwrap();
        let e = NewNutritionEntry::try_from(req).unwrap();
        assert_eq!(e.meal_type.as_deref(), Some("breakfast"));
        assert_eq!(e.protein_grams, Some(12.5));
        assert_eq!(e.fat_grams, Some(6.0));
    }

    #[test]
    fn blank_name_is_rejected() {
        let req: CreateNutritionRequest = serde_json::from_str(r#"{"name":"  "}"#).unwrap();
        assert!(NewNutritionEntry::try_from(req).is_err());
    }
}

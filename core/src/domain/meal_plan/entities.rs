use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Key used in meal plan objects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// Meal slots of a day, declared in chronological order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum MealType {
    Breakfast,
    MorningSnack,
    Lunch,
    EveningSnack,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::MorningSnack,
        MealType::Lunch,
        MealType::EveningSnack,
        MealType::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::MorningSnack => "morningSnack",
            MealType::Lunch => "lunch",
            MealType::EveningSnack => "eveningSnack",
            MealType::Dinner => "dinner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::MorningSnack => "Morning snack",
            MealType::Lunch => "Lunch",
            MealType::EveningSnack => "Evening snack",
            MealType::Dinner => "Dinner",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DietaryPreferences {
    pub is_vegetarian: bool,
    /// Days on which meat, fish and eggs are allowed. Empty means any day.
    pub non_veg_days: BTreeSet<Weekday>,
    pub gluten_free: bool,
    pub nuts_free: bool,
    pub lactose_intolerant: bool,
    pub prefer_healthy: bool,
    pub show_calories: bool,
    pub daily_calorie_target: Option<u32>,
}

impl DietaryPreferences {
    /// Calorie target if set to something meaningful.
    pub fn calorie_target(&self) -> Option<u32> {
        self.daily_calorie_target.filter(|target| *target > 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DishPreferences {
    pub breakfast: Vec<String>,
    pub lunch_dinner: Vec<String>,
}

impl DishPreferences {
    pub fn is_empty(&self) -> bool {
        self.breakfast.is_empty() && self.lunch_dinner.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawMealSettings {
    enabled_meal_types: Vec<MealType>,
}

impl TryFrom<RawMealSettings> for MealSettings {
    type Error = CoreError;

    fn try_from(raw: RawMealSettings) -> Result<Self, Self::Error> {
        MealSettings::new(raw.enabled_meal_types)
    }
}

/// Meal types a user plans for, kept sorted chronologically and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "RawMealSettings", rename_all = "camelCase")]
pub struct MealSettings {
    enabled_meal_types: Vec<MealType>,
}

impl MealSettings {
    pub fn new(meal_types: impl IntoIterator<Item = MealType>) -> Result<Self, CoreError> {
        let enabled: BTreeSet<MealType> = meal_types.into_iter().collect();

        if enabled.is_empty() {
            return Err(CoreError::Invalid(
                "at least one meal type must be enabled".to_string(),
            ));
        }

        Ok(Self {
            enabled_meal_types: enabled.into_iter().collect(),
        })
    }

    pub fn enabled_meal_types(&self) -> &[MealType] {
        &self.enabled_meal_types
    }
}

impl Default for MealSettings {
    fn default() -> Self {
        Self {
            enabled_meal_types: vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner],
        }
    }
}

/// Weekly grid as returned by the model: weekday -> meal type -> name or `{name, calories}`.
///
/// The content is kept as loose JSON; accessors read it defensively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyMealPlan(Map<String, Value>);

impl WeeklyMealPlan {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Name assigned to a slot, for either the bare-string or the `{name, calories}` shape.
    pub fn meal_name(&self, day: Weekday, meal_type: MealType) -> Option<&str> {
        match self.slot(day, meal_type)? {
            Value::String(name) => Some(name.as_str()),
            Value::Object(entry) => entry.get("name").and_then(Value::as_str),
            _ => None,
        }
    }

    pub fn calories(&self, day: Weekday, meal_type: MealType) -> Option<u32> {
        self.slot(day, meal_type)?
            .get("calories")
            .and_then(Value::as_f64)
            .filter(|calories| *calories >= 0.0)
            .map(|calories| calories.round() as u32)
    }

    pub fn is_day_empty(&self, day: Weekday, enabled: &[MealType]) -> bool {
        !enabled.iter().any(|meal_type| {
            self.meal_name(day, *meal_type)
                .is_some_and(|name| !name.trim().is_empty())
        })
    }

    pub fn is_week_empty(&self, enabled: &[MealType]) -> bool {
        Weekday::ALL
            .iter()
            .all(|day| self.is_day_empty(*day, enabled))
    }

    /// Distinct non-blank meal names in day then meal order.
    pub fn meal_names(&self, enabled: &[MealType]) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut names = Vec::new();

        for day in Weekday::ALL {
            for meal_type in enabled {
                if let Some(name) = self.meal_name(day, *meal_type).map(str::trim) {
                    if !name.is_empty() && seen.insert(name.to_lowercase()) {
                        names.push(name.to_string());
                    }
                }
            }
        }

        names
    }

    /// Sum of the calories the model reported for each day that has any.
    pub fn daily_calories(&self, enabled: &[MealType]) -> BTreeMap<Weekday, u32> {
        Weekday::ALL
            .iter()
            .filter_map(|day| {
                let values: Vec<u32> = enabled
                    .iter()
                    .filter_map(|meal_type| self.calories(*day, *meal_type))
                    .collect();
                (!values.is_empty())
                    .then(|| (*day, values.into_iter().fold(0, u32::saturating_add)))
            })
            .collect()
    }

    fn slot(&self, day: Weekday, meal_type: MealType) -> Option<&Value> {
        self.0.get(day.as_str())?.get(meal_type.as_str())
    }
}

impl From<Map<String, Value>> for WeeklyMealPlan {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealHistoryEntry {
    /// ISO date of the first day of the week.
    pub week_start_date: String,
    #[schema(value_type = Object)]
    pub meals: WeeklyMealPlan,
}

/// Rendered prompt plus the JSON shape the model is asked to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPrompt {
    pub prompt: String,
    pub response_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    #[schema(value_type = Object)]
    pub meals: WeeklyMealPlan,
    /// Per-day calorie totals, present when calorie tracking is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calories: Option<BTreeMap<Weekday, u32>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plan(value: Value) -> WeeklyMealPlan {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_meal_settings_are_sorted_and_deduplicated() {
        let settings =
            MealSettings::new([MealType::Dinner, MealType::Breakfast, MealType::Dinner]).unwrap();
        assert_eq!(
            settings.enabled_meal_types(),
            &[MealType::Breakfast, MealType::Dinner]
        );
    }

    #[test]
    fn test_empty_meal_settings_are_rejected() {
        assert!(MealSettings::new([]).is_err());
        let parsed: Result<MealSettings, _> =
            serde_json::from_value(json!({"enabledMealTypes": []}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_meal_settings_deserialize_camel_case_meal_types() {
        let settings: MealSettings = serde_json::from_value(
            json!({"enabledMealTypes": ["eveningSnack", "morningSnack"]}),
        )
        .unwrap();
        assert_eq!(
            settings.enabled_meal_types(),
            &[MealType::MorningSnack, MealType::EveningSnack]
        );
    }

    #[test]
    fn test_meal_name_reads_both_shapes() {
        let plan = plan(json!({
            "monday": {
                "breakfast": "Poha",
                "lunch": {"name": "Dal rice", "calories": 450},
                "dinner": 42
            }
        }));
        assert_eq!(plan.meal_name(Weekday::Monday, MealType::Breakfast), Some("Poha"));
        assert_eq!(plan.meal_name(Weekday::Monday, MealType::Lunch), Some("Dal rice"));
        assert_eq!(plan.meal_name(Weekday::Monday, MealType::Dinner), None);
        assert_eq!(plan.meal_name(Weekday::Tuesday, MealType::Lunch), None);
    }

    #[test]
    fn test_week_is_empty_when_only_disabled_slots_are_filled() {
        let plan = plan(json!({
            "monday": {"breakfast": "  ", "dinner": "Khichdi"},
            "tuesday": {}
        }));
        assert!(plan.is_week_empty(&[MealType::Breakfast, MealType::Lunch]));
        assert!(!plan.is_week_empty(&[MealType::Dinner]));
        assert!(plan.is_day_empty(Weekday::Tuesday, &[MealType::Dinner]));
    }

    #[test]
    fn test_meal_names_are_distinct_and_ordered() {
        let plan = plan(json!({
            "tuesday": {"breakfast": "Idli"},
            "monday": {"breakfast": "Poha", "dinner": {"name": "idli", "calories": 300}}
        }));
        assert_eq!(
            plan.meal_names(&[MealType::Breakfast, MealType::Dinner]),
            vec!["Poha".to_string(), "idli".to_string()]
        );
    }

    #[test]
    fn test_daily_calories_saturate_on_huge_values() {
        let plan = plan(json!({
            "monday": {
                "lunch": {"name": "Feast", "calories": 3000000000u64},
                "dinner": {"name": "Feast again", "calories": 3000000000u64}
            }
        }));

        let totals = plan.daily_calories(&[MealType::Lunch, MealType::Dinner]);

        assert_eq!(totals.get(&Weekday::Monday), Some(&u32::MAX));
    }

    #[test]
    fn test_dietary_preferences_use_camel_case() {
        let preferences: DietaryPreferences = serde_json::from_value(json!({
            "isVegetarian": true,
            "glutenFree": true,
            "nonVegDays": ["friday"],
            "dailyCalorieTarget": 1800
        }))
        .unwrap();

        assert!(preferences.is_vegetarian);
        assert!(preferences.gluten_free);
        assert!(preferences.non_veg_days.contains(&Weekday::Friday));
        assert_eq!(preferences.calorie_target(), Some(1800));
    }

    #[test]
    fn test_unknown_preference_fields_are_rejected() {
        let parsed: Result<DietaryPreferences, _> =
            serde_json::from_value(json!({"is_vegetarian": true}));
        assert!(parsed.is_err());

        let parsed: Result<MealSettings, _> =
            serde_json::from_value(json!({"enabled_meal_types": ["lunch"]}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_daily_calories_skips_days_without_numbers() {
        let plan = plan(json!({
            "monday": {
                "breakfast": {"name": "Poha", "calories": 250},
                "dinner": {"name": "Roti sabzi", "calories": 520.4}
            },
            "tuesday": {"breakfast": "Idli"}
        }));
        let totals = plan.daily_calories(&[MealType::Breakfast, MealType::Dinner]);
        assert_eq!(totals.get(&Weekday::Monday), Some(&770));
        assert!(!totals.contains_key(&Weekday::Tuesday));
    }
}

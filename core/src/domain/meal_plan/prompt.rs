use crate::domain::meal_plan::{
    entities::{
        DietaryPreferences, DishPreferences, MealHistoryEntry, MealPrompt, MealType, Weekday,
    },
    value_objects::SuggestMealsInput,
};

/// Weeks of history shown to the model.
pub const MAX_HISTORY_WEEKS: usize = 2;

pub(crate) const VEGETARIAN_RULE: &str =
    "The user is strictly vegetarian. Never include meat, fish or eggs in any dish, on any day.";
pub(crate) const NON_VEG_DAYS_RULE: &str =
    "Meat, fish and egg dishes are allowed ONLY on these days:";
pub(crate) const NON_VEG_ANY_DAY_RULE: &str =
    "The user eats non-vegetarian food. Meat, fish and egg dishes may be suggested on any day.";
pub(crate) const NO_HISTORY: &str = "No previous meal history available.";
pub(crate) const NO_DISH_PREFERENCE: &str = "No specific dish preference.";
pub(crate) const NO_CUISINE_PREFERENCE: &str = "No specific cuisine preference.";

/// Builds the weekly suggestion prompt and the response template it embeds.
pub fn build_meal_prompt(input: &SuggestMealsInput) -> MealPrompt {
    let enabled = input.meal_settings.enabled_meal_types();
    let preferences = &input.dietary_preferences;
    let show_calories = preferences.show_calories;

    let history = select_history(&input.meal_history, enabled);
    let response_template = render_response_template(enabled, show_calories);

    let planned = enabled
        .iter()
        .map(MealType::label)
        .collect::<Vec<_>>()
        .join(", ");

    let mut sections = vec![format!(
        "You are a meal planning assistant. Suggest meals for every day of the week, \
         Monday to Sunday, for these meal types: {planned}."
    )];

    sections.push(format!(
        "Dietary information:\n{}",
        render_dietary_info(preferences)
    ));

    if let Some(ingredients) = render_ingredient_info(&input.pantry_ingredients) {
        sections.push(ingredients);
    }

    sections.push(format!(
        "Cuisine information:\n{}",
        render_cuisine_info(&input.cuisine_preferences, &input.dish_preferences)
    ));

    sections.push(format!(
        "Previous meal history:\n{}",
        render_history(&history, enabled)
    ));

    sections.push(format!(
        "Instructions:\n{}",
        render_instructions(input, !history.is_empty())
    ));

    if show_calories {
        sections.push(render_calorie_instructions(preferences));
    }

    sections.push(format!(
        "Return the response in this exact JSON format, with no other text:\n{response_template}"
    ));

    MealPrompt {
        prompt: sections.join("\n\n"),
        response_template,
    }
}

/// Non-empty weeks from the front of the history, at most [`MAX_HISTORY_WEEKS`].
pub fn select_history<'a>(
    history: &'a [MealHistoryEntry],
    enabled: &[MealType],
) -> Vec<&'a MealHistoryEntry> {
    history
        .iter()
        .filter(|entry| !entry.meals.is_week_empty(enabled))
        .take(MAX_HISTORY_WEEKS)
        .collect()
}

fn render_dietary_info(preferences: &DietaryPreferences) -> String {
    let mut lines = Vec::new();

    if preferences.is_vegetarian {
        lines.push(VEGETARIAN_RULE.to_string());
    } else if !preferences.non_veg_days.is_empty() {
        let days = preferences
            .non_veg_days
            .iter()
            .map(Weekday::label)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{NON_VEG_DAYS_RULE} {days}. Every other day must be fully vegetarian."
        ));
    } else {
        lines.push(NON_VEG_ANY_DAY_RULE.to_string());
    }

    if preferences.gluten_free {
        lines.push("Do not include any dish that contains gluten (wheat, barley, rye).".into());
    }
    if preferences.nuts_free {
        lines.push("Do not include any dish that contains nuts.".into());
    }
    if preferences.lactose_intolerant {
        lines.push("Do not include any dish that contains lactose or dairy products.".into());
    }
    if preferences.prefer_healthy {
        lines.push("Prefer healthy, balanced and nutritious dishes.".into());
    }
    if preferences.show_calories {
        match preferences.calorie_target() {
            Some(target) => lines.push(format!(
                "The user tracks calories with a daily target of {target} kcal."
            )),
            None => lines.push("The user tracks calories.".into()),
        }
    }

    lines.join("\n")
}

fn render_ingredient_info(pantry: &[String]) -> Option<String> {
    let ingredients = non_blank(pantry);
    if ingredients.is_empty() {
        return None;
    }

    Some(format!(
        "Available ingredients:\nThe plan must use all of the following ingredients in at least one dish: {}.",
        ingredients.join(", ")
    ))
}

fn render_cuisine_info(cuisines: &[String], dishes: &DishPreferences) -> String {
    let mut lines = Vec::new();

    let cuisines = non_blank(cuisines);
    if cuisines.is_empty() {
        lines.push(NO_CUISINE_PREFERENCE.to_string());
    } else {
        lines.push(format!("Preferred cuisines: {}.", cuisines.join(", ")));
    }

    let breakfast = non_blank(&dishes.breakfast);
    let lunch_dinner = non_blank(&dishes.lunch_dinner);
    if breakfast.is_empty() && lunch_dinner.is_empty() {
        lines.push(NO_DISH_PREFERENCE.to_string());
    } else {
        if !breakfast.is_empty() {
            lines.push(format!("Preferred breakfast dishes: {}.", breakfast.join(", ")));
        }
        if !lunch_dinner.is_empty() {
            lines.push(format!(
                "Preferred lunch and dinner dishes: {}.",
                lunch_dinner.join(", ")
            ));
        }
    }

    lines.join("\n")
}

fn render_history(history: &[&MealHistoryEntry], enabled: &[MealType]) -> String {
    if history.is_empty() {
        return NO_HISTORY.to_string();
    }

    history
        .iter()
        .map(|entry| {
            let days = Weekday::ALL
                .iter()
                .filter(|day| !entry.meals.is_day_empty(**day, enabled))
                .map(|day| {
                    let meals = enabled
                        .iter()
                        .filter_map(|meal_type| entry.meals.meal_name(*day, *meal_type))
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .collect::<Vec<_>>()
                        .join(" / ");
                    format!("{}: {meals}", day.label())
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("Week of {}:\n{days}", entry.week_start_date)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_instructions(input: &SuggestMealsInput, has_history: bool) -> String {
    let mut instructions =
        vec!["Strictly respect every dietary restriction listed above.".to_string()];

    if !non_blank(&input.pantry_ingredients).is_empty() {
        instructions
            .push("Use each of the available ingredients in at least one dish.".to_string());
    }

    if non_blank(&input.cuisine_preferences).is_empty() {
        instructions.push("Use any appropriate cuisine.".to_string());
    } else {
        instructions.push("Prefer dishes from the preferred cuisines.".to_string());
    }

    if has_history {
        instructions.push(
            "Vary the meals from the previous weeks' history; avoid suggesting the same dishes again."
                .to_string(),
        );
    } else {
        instructions.push(
            "There is no meal history, so base the suggestions on the dish preferences."
                .to_string(),
        );
    }

    instructions.push("Do not repeat the same dish anywhere in this response.".to_string());
    instructions.push("Fill every listed meal type for every day of the week.".to_string());

    instructions
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{}. {line}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_calorie_instructions(preferences: &DietaryPreferences) -> String {
    let mut lines = vec![
        "Calorie instructions:".to_string(),
        "- Give every meal an estimated calorie count as a whole number of kcal, never 0."
            .to_string(),
    ];

    if let Some(target) = preferences.calorie_target() {
        lines.push(format!(
            "- Keep the total of each day close to {target} kcal."
        ));
    }

    lines.join("\n")
}

/// JSON skeleton with one key per weekday and one key per enabled meal type.
pub fn render_response_template(enabled: &[MealType], show_calories: bool) -> String {
    let entry = if show_calories {
        r#"{"name": "meal name", "calories": 0}"#
    } else {
        r#""meal name""#
    };

    let days = Weekday::ALL
        .iter()
        .map(|day| {
            let meals = enabled
                .iter()
                .map(|meal_type| format!("    \"{}\": {entry}", meal_type.as_str()))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("  \"{}\": {{\n{meals}\n  }}", day.as_str())
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{{\n{days}\n}}")
}

fn non_blank(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect()
}

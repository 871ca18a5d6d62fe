/// Prompt asking the model to list ingredients for each meal and a combined shopping list.
pub fn build_ingredient_prompt(meals: &[String]) -> String {
    let meal_list = meals
        .iter()
        .map(|meal| format!("- {meal}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"List the ingredients needed to cook each of the following meals.

Meals:
{meal_list}

Rules:
1. Use short, common ingredient names without quantities or units.
2. "grouped" has one entry per meal, in the same order as the list above.
3. "consolidated" lists every ingredient needed across all meals exactly once.

Return ONLY JSON in this exact format, with no other text:
{{
  "grouped": [
    {{"meal": "meal name", "ingredients": ["ingredient", "ingredient"]}}
  ],
  "consolidated": ["ingredient", "ingredient"]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_every_meal() {
        let prompt = build_ingredient_prompt(&["Poha".to_string(), "Dal rice".to_string()]);
        assert!(prompt.contains("Meals:\n- Poha\n- Dal rice\n"));
        assert!(prompt.contains("\"grouped\""));
        assert!(prompt.contains("\"consolidated\""));
    }
}

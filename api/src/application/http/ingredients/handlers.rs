pub mod extract_ingredients;

//! Objective form: picking an existing ability locks the "new ability" input

/// Whether the new-ability input must be disabled for the selected value of
/// the existing-ability select. The empty option means "create a new one".
pub fn create_ability_disabled(selected_existing: &str) -> bool {
    !selected_existing.is_empty()
}

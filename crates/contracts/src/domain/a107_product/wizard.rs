//! Steps of the product create / clone wizard

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    Main,
    Extras,
    Digital,
    Stock,
    Gallery,
    Properties,
    Finish,
}

/// Full step list in display order
pub const PRODUCT_STEPS: [WizardStep; 7] = [
    WizardStep::Main,
    WizardStep::Extras,
    WizardStep::Digital,
    WizardStep::Stock,
    WizardStep::Gallery,
    WizardStep::Properties,
    WizardStep::Finish,
];

impl WizardStep {
    /// i18n key of the step title
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Main => "product",
            WizardStep::Extras => "product.extras",
            WizardStep::Digital => "product.digital",
            WizardStep::Stock => "stocks",
            WizardStep::Gallery => "Gallery",
            WizardStep::Properties => "product.properties",
            WizardStep::Finish => "finish",
        }
    }
}

/// Steps shown for a product.
///
/// * digital product: no extras step
/// * physical product: no digital-file step
/// * unknown (`None`): both
/// * no color extra: no gallery step
pub fn visible_steps(digital: Option<bool>, has_color: bool) -> Vec<WizardStep> {
    PRODUCT_STEPS
        .iter()
        .copied()
        .filter(|step| match step {
            WizardStep::Extras => digital != Some(true),
            WizardStep::Digital => digital != Some(false),
            WizardStep::Gallery => has_color,
            _ => true,
        })
        .collect()
}

/// Read the `step` query value; garbage and out-of-range values go to
/// the nearest valid index.
pub fn step_from_query(raw: Option<&str>, step_count: usize) -> usize {
    let parsed = raw.and_then(|s| s.trim().parse::<usize>().ok()).unwrap_or(0);
    parsed.min(step_count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digital_hides_extras() {
        let steps = visible_steps(Some(true), true);
        assert!(!steps.contains(&WizardStep::Extras));
        assert!(steps.contains(&WizardStep::Digital));
        assert!(steps.contains(&WizardStep::Gallery));
    }

    #[test]
    fn test_physical_without_color() {
        let steps = visible_steps(Some(false), false);
        assert_eq!(
            steps,
            vec![
                WizardStep::Main,
                WizardStep::Extras,
                WizardStep::Stock,
                WizardStep::Properties,
                WizardStep::Finish
            ]
        );
    }

    #[test]
    fn test_unknown_digital_keeps_both() {
        let steps = visible_steps(None, true);
        assert_eq!(steps.len(), PRODUCT_STEPS.len());
    }

    #[test]
    fn test_step_from_query() {
        assert_eq!(step_from_query(Some("2"), 5), 2);
        assert_eq!(step_from_query(Some("9"), 5), 4);
        assert_eq!(step_from_query(Some("x"), 5), 0);
        assert_eq!(step_from_query(None, 0), 0);
    }
}

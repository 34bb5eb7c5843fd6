use serde::{Deserialize, Serialize};

/// Шаги мастера создания магазина
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopStep {
    Main,
    Map,
    Social,
    Delivery,
}

pub const SHOP_STEPS: [ShopStep; 4] = [
    ShopStep::Main,
    ShopStep::Map,
    ShopStep::Social,
    ShopStep::Delivery,
];

impl ShopStep {
    /// i18n key of the step title
    pub fn title(&self) -> &'static str {
        match self {
            ShopStep::Main => "shop",
            ShopStep::Map => "map",
            ShopStep::Social => "shop.social",
            ShopStep::Delivery => "delivery",
        }
    }
}

/// Position inside a fixed list of wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardCursor {
    pub current: usize,
    pub len: usize,
}

impl WizardCursor {
    /// Start at `current` (e.g. a step restored from menu data), clamped
    pub fn new(current: usize, len: usize) -> Self {
        Self {
            current: current.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.len {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.len
    }

    pub fn step(&self) -> Option<ShopStep> {
        SHOP_STEPS.get(self.current).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_is_clamped() {
        let mut cursor = WizardCursor::new(0, SHOP_STEPS.len());
        cursor.prev();
        assert!(cursor.is_first());
        for _ in 0..10 {
            cursor.next();
        }
        assert!(cursor.is_last());
        assert_eq!(cursor.step(), Some(ShopStep::Delivery));
    }

    #[test]
    fn test_restored_step() {
        let cursor = WizardCursor::new(7, SHOP_STEPS.len());
        assert_eq!(cursor.current, 3);
        assert_eq!(WizardCursor::new(1, 4).step().map(|s| s.title()), Some("map"));
    }
}

//! "Learn more" toggles on the program cards.
//!
//! Each card swaps between a short and a full description; the button
//! label and `aria-expanded` track the state.

pub const EXPAND_LABEL: &str = "Learn more";
pub const COLLAPSE_LABEL: &str = "Show less";

/// View effects for one card toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffect {
    SetFullVisible(bool),
    SetShortVisible(bool),
    SetButtonLabel(&'static str),
    SetAriaExpanded(bool),
}

/// One program card. The shell owns one per card on the page; cards do
/// not coordinate.
#[derive(Debug, Default)]
pub struct ProgramCard {
    expanded: bool,
}

impl ProgramCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) -> Vec<CardEffect> {
        self.expanded = !self.expanded;
        vec![
            CardEffect::SetFullVisible(self.expanded),
            CardEffect::SetShortVisible(!self.expanded),
            CardEffect::SetButtonLabel(if self.expanded {
                COLLAPSE_LABEL
            } else {
                EXPAND_LABEL
            }),
            CardEffect::SetAriaExpanded(self.expanded),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expands_then_collapses() {
        let mut card = ProgramCard::new();

        let effects = card.toggle();
        assert!(card.is_expanded());
        assert_eq!(
            effects,
            vec![
                CardEffect::SetFullVisible(true),
                CardEffect::SetShortVisible(false),
                CardEffect::SetButtonLabel(COLLAPSE_LABEL),
                CardEffect::SetAriaExpanded(true),
            ]
        );

        let effects = card.toggle();
        assert!(!card.is_expanded());
        assert_eq!(
            effects,
            vec![
                CardEffect::SetFullVisible(false),
                CardEffect::SetShortVisible(true),
                CardEffect::SetButtonLabel(EXPAND_LABEL),
                CardEffect::SetAriaExpanded(false),
            ]
        );
    }

    #[test]
    fn test_cards_are_independent() {
        let mut first = ProgramCard::new();
        let second = ProgramCard::new();

        first.toggle();
        assert!(first.is_expanded());
        assert!(!second.is_expanded());
    }
}

pub const SHOW_MORE_LABEL: &str = "See More Episodes";
pub const SHOW_LESS_LABEL: &str = "Show Less";

/// Whether a season's extra episodes are revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpanderState {
    expanded: bool,
}

impl ExpanderState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn label(&self) -> &'static str {
        if self.expanded {
            SHOW_LESS_LABEL
        } else {
            SHOW_MORE_LABEL
        }
    }

    pub fn container_class(&self) -> &'static str {
        if self.expanded {
            "hidden-episodes show"
        } else {
            "hidden-episodes"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_label_and_hides() {
        let mut expander = ExpanderState::default();
        assert_eq!(expander.label(), SHOW_MORE_LABEL);

        expander.toggle();
        assert_eq!(expander.label(), SHOW_LESS_LABEL);
        assert_eq!(expander.container_class(), "hidden-episodes show");

        expander.toggle();
        assert_eq!(expander.label(), SHOW_MORE_LABEL);
        assert!(!expander.is_expanded());
        assert!(!expander.container_class().contains("show"));
    }
}

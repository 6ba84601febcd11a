/// Visual phase of the panel that was just activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Faded out and shifted down, waiting for the settle timer.
    Entering,
    Settled,
}

impl TransitionPhase {
    pub fn style(self) -> &'static str {
        match self {
            TransitionPhase::Entering => "opacity: 0; transform: translateY(20px);",
            TransitionPhase::Settled => {
                "opacity: 1; transform: translateY(0); transition: all 0.3s ease;"
            }
        }
    }
}

/// One group of season tabs. Exactly one tab is active at any time.
#[derive(Debug, Clone, PartialEq)]
pub struct TabGroup {
    ids: Vec<String>,
    active: usize,
    phase: TransitionPhase,
    generation: u64,
}

impl TabGroup {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            active: 0,
            phase: TransitionPhase::Settled,
            generation: 0,
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Make `id` the active tab and restart its entry transition.
    /// Returns the token to pass to [`TabGroup::settle`], or `None` for an
    /// unknown id (the group is left untouched).
    pub fn activate(&mut self, id: &str) -> Option<u64> {
        let index = self.ids.iter().position(|candidate| candidate == id)?;
        self.active = index;
        self.phase = TransitionPhase::Entering;
        self.generation += 1;
        Some(self.generation)
    }

    /// Finish the transition started by the matching `activate` call. Stale
    /// tokens from earlier clicks are ignored.
    pub fn settle(&mut self, token: u64) {
        if token == self.generation {
            self.phase = TransitionPhase::Settled;
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Inline style for a panel; only the active one carries the transition.
    pub fn panel_style(&self, id: &str) -> &'static str {
        if self.is_active(id) {
            self.phase.style()
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seasons() -> TabGroup {
        TabGroup::new(["1", "2", "3"])
    }

    #[test]
    fn first_tab_starts_active() {
        let tabs = seasons();
        assert_eq!(tabs.active_id(), Some("1"));
        assert_eq!(tabs.phase(), TransitionPhase::Settled);
    }

    #[test]
    fn exactly_one_tab_active_after_any_click_sequence() {
        let mut tabs = seasons();
        for click in ["2", "3", "3", "1", "missing", "2", "1", "3"] {
            tabs.activate(click);
            let active: Vec<_> = ["1", "2", "3"]
                .into_iter()
                .filter(|id| tabs.is_active(id))
                .collect();
            assert_eq!(active.len(), 1, "after clicking {click}");
        }
        assert_eq!(tabs.active_id(), Some("3"));
    }

    #[test]
    fn unknown_tab_is_ignored() {
        let mut tabs = seasons();
        tabs.activate("2");
        assert_eq!(tabs.activate("9"), None);
        assert_eq!(tabs.active_id(), Some("2"));
    }

    #[test]
    fn transition_settles_only_for_latest_click() {
        let mut tabs = seasons();
        let first = tabs.activate("2").expect("known tab");
        let second = tabs.activate("3").expect("known tab");
        assert_eq!(tabs.panel_style("3"), TransitionPhase::Entering.style());
        assert_eq!(tabs.panel_style("2"), "");

        tabs.settle(first);
        assert_eq!(tabs.phase(), TransitionPhase::Entering);
        tabs.settle(second);
        assert_eq!(tabs.phase(), TransitionPhase::Settled);
    }
}

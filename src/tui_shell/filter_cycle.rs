use crate::listing::FILTER_ALL;

/// Quick filter stepped from the keyboard: each press advances to the next
/// value and wraps back through "all" (filter removed).
#[derive(Debug)]
pub(super) struct CyclicFilter {
    pub(super) param: &'static str,
    values: &'static [&'static str],
    selected: Option<usize>,
}

impl CyclicFilter {
    pub(super) fn status() -> Self {
        Self {
            param: "status",
            values: &["draft", "published"],
            selected: None,
        }
    }

    pub(super) fn subscriber_status() -> Self {
        Self {
            param: "status",
            values: &["subscribed", "unsubscribed"],
            selected: None,
        }
    }

    /// Advances and returns the value to apply, `FILTER_ALL` on wrap.
    pub(super) fn cycle(&mut self) -> &'static str {
        self.selected = match self.selected {
            None => Some(0),
            Some(i) if i + 1 < self.values.len() => Some(i + 1),
            Some(_) => None,
        };
        self.value()
    }

    pub(super) fn value(&self) -> &'static str {
        match self.selected {
            Some(i) => self.values[i],
            None => FILTER_ALL,
        }
    }

    /// Keeps the cycle position in step with a filter applied by name.
    pub(super) fn set_from(&mut self, value: &str) {
        self.selected = self.values.iter().position(|v| *v == value);
    }

    pub(super) fn reset(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/filter_cycle_tests.rs"]
mod tests;

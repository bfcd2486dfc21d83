use super::scheduler::Refresh;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Containers,
    Notifications,
    Events,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Containers, Tab::Notifications, Tab::Events];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Containers => "Containers",
            Tab::Notifications => "Notifications",
            Tab::Events => "Events",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Containers => 1,
            Tab::Notifications => 2,
            Tab::Events => 3,
        }
    }

    /// The list this tab shows, if any. Reloaded whenever the tab is activated.
    pub fn refresh(self) -> Option<Refresh> {
        match self {
            Tab::Overview => None,
            Tab::Containers => Some(Refresh::Containers),
            Tab::Notifications => Some(Refresh::Notifications),
            Tab::Events => Some(Refresh::Events),
        }
    }
}

/// Owns which tab is visible.
#[derive(Debug, Clone, Default)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Makes `tab` the only visible panel. Re-activating the current tab
    /// still reloads its list.
    pub fn activate(&mut self, tab: Tab) -> Option<Refresh> {
        self.active = tab;
        tab.refresh()
    }

    /// Selects by zero-based position; out of range is ignored.
    pub fn activate_index(&mut self, index: usize) -> Option<Refresh> {
        let tab = *Tab::ALL.get(index)?;
        self.activate(tab)
    }

    pub fn next(&mut self) -> Option<Refresh> {
        let index = (self.active.index() + 1) % Tab::ALL.len();
        self.activate_index(index)
    }

    pub fn previous(&mut self) -> Option<Refresh> {
        let len = Tab::ALL.len();
        let index = (self.active.index() + len - 1) % len;
        self.activate_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_overview() {
        assert_eq!(TabController::new().active(), Tab::Overview);
    }

    #[test]
    fn test_list_tabs_request_refresh() {
        let mut tabs = TabController::new();
        assert_eq!(tabs.activate(Tab::Containers), Some(Refresh::Containers));
        assert_eq!(tabs.activate(Tab::Notifications), Some(Refresh::Notifications));
        assert_eq!(tabs.activate(Tab::Events), Some(Refresh::Events));
        assert_eq!(tabs.activate(Tab::Overview), None);
        assert_eq!(tabs.active(), Tab::Overview);
    }

    #[test]
    fn test_reactivating_refreshes_again() {
        let mut tabs = TabController::new();
        tabs.activate(Tab::Events);
        assert_eq!(tabs.activate(Tab::Events), Some(Refresh::Events));
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut tabs = TabController::new();
        tabs.previous();
        assert_eq!(tabs.active(), Tab::Events);
        tabs.next();
        assert_eq!(tabs.active(), Tab::Overview);
        tabs.next();
        assert_eq!(tabs.active(), Tab::Containers);
    }

    #[test]
    fn test_activate_index_out_of_range_ignored() {
        let mut tabs = TabController::new();
        tabs.activate(Tab::Notifications);
        assert_eq!(tabs.activate_index(7), None);
        assert_eq!(tabs.active(), Tab::Notifications);
    }
}

//! App shell: tab navigation and the executive session gate.

/// The seven navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Dashboard,
    Governance,
    Esg,
    Tech,
    Resolver,
    Curator,
    TrackRecord,
}

impl AppTab {
    pub const ALL: [AppTab; 7] = [
        AppTab::Dashboard,
        AppTab::Governance,
        AppTab::Esg,
        AppTab::Tech,
        AppTab::Resolver,
        AppTab::Curator,
        AppTab::TrackRecord,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "Executive Dashboard",
            AppTab::Governance => "Corp Governance",
            AppTab::Esg => "ESG Strategy",
            AppTab::Tech => "Tech & AI Trends",
            AppTab::Resolver => "Resolution Resolver",
            AppTab::Curator => "Minutes Curator",
            AppTab::TrackRecord => "My Track Record",
        }
    }
}

/// Logged-in director profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
}

/// App shell state: which tab is active and who is logged in. Screens render
/// only when a session exists.
#[derive(Default)]
pub struct AppShell {
    active_tab: AppTab,
    session: Option<UserProfile>,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> AppTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: AppTab) {
        self.active_tab = tab;
    }

    pub fn session(&self) -> Option<&UserProfile> {
        self.session.as_ref()
    }

    pub fn login(&mut self, name: &str, role: &str) {
        self.session = Some(UserProfile {
            name: name.to_string(),
            role: role.to_string(),
        });
    }

    /// Logout clears the session and returns navigation to the dashboard.
    pub fn logout(&mut self) {
        self.session = None;
        self.active_tab = AppTab::Dashboard;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_starts_logged_out_on_dashboard() {
        let shell = AppShell::new();
        assert!(shell.session().is_none());
        assert_eq!(shell.active_tab(), AppTab::Dashboard);
    }

    #[test]
    fn logout_resets_navigation() {
        let mut shell = AppShell::new();
        shell.login("A. Mehta", "Independent Director");
        shell.set_active_tab(AppTab::Resolver);
        shell.logout();
        assert!(shell.session().is_none());
        assert_eq!(shell.active_tab(), AppTab::Dashboard);
    }

    #[test]
    fn all_tabs_have_distinct_labels() {
        let mut labels: Vec<_> = AppTab::ALL.iter().map(|t| t.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), AppTab::ALL.len());
    }
}

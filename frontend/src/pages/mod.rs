pub mod about;
pub mod admin;
pub mod experience;
pub mod home;
pub mod login;
pub mod projects;

/// Top-level screens. Navigation swaps the rendered page; there is no URL routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Experience,
    Login,
    Admin,
}

impl Page {
    /// Pages linked from the navbar, in display order
    pub const PUBLIC: [Page; 4] = [Page::Home, Page::About, Page::Projects, Page::Experience];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Experience => "Experience",
            Page::Login => "Login",
            Page::Admin => "Admin",
        }
    }
}

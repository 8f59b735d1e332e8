pub mod category_tabs;
pub mod experience_card;
pub mod experience_modal;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod project_card;
pub mod project_modal;
pub mod repo_card;
pub mod skill_grid;

pub mod contact;
pub mod footer;
pub mod hero;
pub mod life_grid;
pub mod navbar;
pub mod projects;
pub mod skill_graph;
pub mod skills;
pub mod ui;

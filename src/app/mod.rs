pub mod menu;

pub use menu::run_menu;

// Widget components mounted by main.rs.

pub mod contact_form;
pub mod daily_quotes;
pub mod mobile_menu;
pub mod nav_tabs;
pub mod notification;

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod grocery;
pub mod mealplan;
pub mod pantry;
pub mod preferences;
pub mod receipts;
pub mod state;
pub mod storage;

pub mod asset;
pub mod config;
pub mod icons;
pub mod home;
pub mod streaming;
pub mod webutils;
pub mod site;

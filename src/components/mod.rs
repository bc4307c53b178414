//! Reusable UI components shared by pages.

pub mod nav_bar;

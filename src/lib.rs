// ABOUTME: Library crate for alert-wizard exposing the wizard, API client and front ends

#![allow(missing_docs)]

pub mod alerts;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod view;
pub mod wizard;

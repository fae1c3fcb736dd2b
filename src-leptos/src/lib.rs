//! Agora - Leptos web client library

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod dom;
pub mod files;
pub mod pages;
pub mod storage;
pub mod tasks;

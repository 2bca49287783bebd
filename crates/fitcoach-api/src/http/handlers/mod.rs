//! HTTP request handlers for the REST API.

pub mod activity;
pub mod chat;
pub mod profile;

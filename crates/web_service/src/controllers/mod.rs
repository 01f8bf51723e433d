//! HTTP controllers.

pub mod webhook_controller;

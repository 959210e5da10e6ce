//! Travel agency server.
//!
//! The domain model of a travel agency (client demands, packages, hotels,
//! bookable items) with shape validation at the JSON boundary, plus a small
//! web frontend: a localized landing page with a floating call-to-action
//! and a dashboard of headline metrics.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod i18n;
pub mod web;

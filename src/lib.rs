//! smart-vehicle CLI
//!
//! 検証のコアは `smart_vehicle_common` にあり、ここでは設定・対話・表示を扱う。

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod review;
pub mod selector;

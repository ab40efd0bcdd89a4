// ABOUTME: Display colors for obesity categories in rendered results
// ABOUTME: One hex color per known category plus the fallback color
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// `Insufficient_Weight`
pub const INSUFFICIENT_WEIGHT_COLOR: &str = "#22c55e";
/// `Normal_Weight`
pub const NORMAL_WEIGHT_COLOR: &str = "#00f5d4";
/// `Overweight_Level_I`
pub const OVERWEIGHT_LEVEL_I_COLOR: &str = "#facc15";
/// `Overweight_Level_II`
pub const OVERWEIGHT_LEVEL_II_COLOR: &str = "#fb923c";
/// `Obesity_Type_I`
pub const OBESITY_TYPE_I_COLOR: &str = "#f97316";
/// `Obesity_Type_II`
pub const OBESITY_TYPE_II_COLOR: &str = "#ef4444";
/// `Obesity_Type_III`
pub const OBESITY_TYPE_III_COLOR: &str = "#dc2626";
/// Labels outside the known table
pub const DEFAULT_CATEGORY_COLOR: &str = "#00bbf9";

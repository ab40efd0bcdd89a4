// ABOUTME: Re-exports helper modules for obesity-cli
// ABOUTME: Provides output display utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod export_test;
pub mod find_opportunities_test;
pub mod helpers;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::io::{BufRead, Read};

/// 读取候选URL
///
/// CSV 第一列为URL，无表头；空行跳过
pub fn read_candidate_urls<R: Read>(reader: R) -> Result<Vec<String>, csv::Error> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut urls = Vec::new();
    for record in csv.records() {
        let record = record?;
        if let Some(url) = record.get(0).filter(|u| !u.is_empty()) {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

/// 读取关键词，每行一个；空行跳过
pub fn read_terms<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut terms = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let term = line.trim();
        if !term.is_empty() {
            terms.push(term.to_string());
        }
    }
    Ok(terms)
}

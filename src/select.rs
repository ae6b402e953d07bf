//! Comma/range selection parsing over an ordered file listing.

use anyhow::{anyhow, bail, Result};

/// Parse a selection expression such as `1`, `1-3`, or `1-3,5` against an
/// ordered listing.
///
/// Indices are 1-based and ranges are inclusive on both ends. Duplicate
/// indices collapse to their first occurrence, and the output preserves the
/// order of first appearance rather than numeric order. Any malformed or
/// out-of-bounds token fails the whole parse; no partial result is returned.
pub fn parse_selection(input: &str, files: &[String]) -> Result<Vec<String>> {
    let mut seen = vec![false; files.len() + 1];
    let mut selected = Vec::new();

    for part in input.split(',') {
        let part = part.trim();

        // Range token, e.g. 2-5. Exactly one separator.
        if part.contains('-') {
            let bounds: Vec<&str> = part.split('-').collect();
            if bounds.len() != 2 {
                bail!("invalid range: {part}");
            }
            let start: usize = bounds[0]
                .trim()
                .parse()
                .map_err(|_| anyhow!("invalid range: {part}"))?;
            let end: usize = bounds[1]
                .trim()
                .parse()
                .map_err(|_| anyhow!("invalid range: {part}"))?;
            if start < 1 || end > files.len() || start > end {
                bail!("invalid range: {part}");
            }
            for i in start..=end {
                if !seen[i] {
                    seen[i] = true;
                    selected.push(files[i - 1].clone());
                }
            }
            continue;
        }

        let index: usize = part
            .parse()
            .map_err(|_| anyhow!("invalid number: {part}"))?;
        if index < 1 || index > files.len() {
            bail!("invalid number: {part}");
        }
        if !seen[index] {
            seen[index] = true;
            selected.push(files[index - 1].clone());
        }
    }

    Ok(selected)
}

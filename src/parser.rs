//! Tree builder and validator: raw lines in, validated [`ScaleTree`] out.
//!
//! Each non-blank, non-comment line declares one scale:
//! `<name> <pan> <pan>`, fields separated by whitespace or commas. A pan
//! token starting with a digit is a fixed mass, one starting with a letter
//! references another scale.
//!
//! Root detection uses a signed per-name reference counter: `+1` for a
//! declaration, `-1` for each reference. In a well-formed tree every
//! non-root scale nets to zero (declared once, referenced once by its
//! single parent) and the root alone nets to `+1`. Cycles, shared
//! references and dangling references all perturb that invariant, so no
//! separate cycle detection pass is needed.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use crate::errors::{ScaleError, ScaleResult};
use crate::model::{Pan, Scale, ScaleTree};

/// Parse a scale description file into a validated tree.
pub fn parse_file(path: &Path) -> ScaleResult<ScaleTree> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parse scale description lines from any buffered reader.
///
/// Fails on the first malformed line; on structural problems (duplicate
/// names, no scales, no unique root) after all lines are consumed. No
/// partial tree is ever returned.
pub fn parse_reader(reader: impl BufRead) -> ScaleResult<ScaleTree> {
    let mut scales: HashMap<String, Scale> = HashMap::new();
    // Signed counter per name: +1 per declaration, -1 per reference.
    let mut link_tracker: HashMap<String, i64> = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Commas count as separators; normalize before tokenizing.
        let normalized = line.replace(',', " ");
        let mut tokens = normalized.split_ascii_whitespace();

        let name = tokens
            .next()
            .ok_or(ScaleError::MissingScaleName { line: lineno })?
            .to_string();

        *link_tracker.entry(name.clone()).or_insert(0) += 1;

        let (left_tok, right_tok) = match (tokens.next(), tokens.next()) {
            (Some(l), Some(r)) => (l, r),
            _ => return Err(ScaleError::MissingPans { line: lineno, name }),
        };

        let left = parse_pan(left_tok, lineno, &mut link_tracker)?;
        let right = parse_pan(right_tok, lineno, &mut link_tracker)?;

        if scales.insert(name.clone(), Scale { left, right }).is_some() {
            return Err(ScaleError::DuplicateScale { line: lineno, name });
        }
    }

    if scales.is_empty() {
        return Err(ScaleError::EmptyTree);
    }

    let root = find_root(&link_tracker)?;
    debug!(root = %root, scales = scales.len(), "parsed scale tree");
    Ok(ScaleTree::new(scales, root))
}

/// Classify one pan token by its first byte: digit -> mass, letter ->
/// scale reference, anything else is rejected.
fn parse_pan(
    token: &str,
    line: usize,
    link_tracker: &mut HashMap<String, i64>,
) -> ScaleResult<Pan> {
    // Tokens come from split_ascii_whitespace and are never empty.
    let first = token.as_bytes()[0];
    if first.is_ascii_digit() {
        let mass = token.parse().map_err(|_| ScaleError::InvalidMass {
            line,
            token: token.to_string(),
        })?;
        Ok(Pan::Mass(mass))
    } else if first.is_ascii_alphabetic() {
        *link_tracker.entry(token.to_string()).or_insert(0) -= 1;
        Ok(Pan::Scale(token.to_string()))
    } else {
        Err(ScaleError::InvalidToken {
            line,
            token: token.to_string(),
        })
    }
}

/// The root is the single name with a non-zero counter, and its counter
/// must be exactly +1 (declared once, never referenced).
fn find_root(link_tracker: &HashMap<String, i64>) -> ScaleResult<String> {
    let ill_formed: Vec<(&String, i64)> = link_tracker
        .iter()
        .filter(|(_, &count)| count != 0)
        .map(|(name, &count)| (name, count))
        .collect();

    match ill_formed.as_slice() {
        [(name, 1)] => Ok((*name).clone()),
        [(name, _)] => Err(ScaleError::NotARoot {
            name: (*name).clone(),
        }),
        _ => Err(ScaleError::AmbiguousRoot {
            // Sorted so the message is deterministic.
            names: ill_formed
                .iter()
                .map(|(name, _)| name.as_str())
                .sorted()
                .join(", "),
        }),
    }
}

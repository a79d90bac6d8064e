//! Line breaking for descriptions in help tables

/// Descriptions shorter than this many characters are never broken
pub const WRAP_WIDTH: usize = 80;

/**
Break a description into lines.

A description of [`WRAP_WIDTH`] characters or more is broken at the last
space at or before character index 79. If there is no such space (the
description starts with a long unbreakable run), it's broken at the first
space after that instead, and if there's no space at all it stays whole. The
space a line is broken at is dropped, and the rest is broken the same way.
*/
pub fn wrap(description: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = description;

    while let Some(space) = break_point(rest) {
        lines.push(&rest[..space]);
        rest = &rest[space + 1..];
    }

    lines.push(rest);
    lines
}

/// The byte index of the space to break `line` at, if it should be broken
fn break_point(line: &str) -> Option<usize> {
    let mut preferred = None;

    for (position, (index, c)) in line.char_indices().enumerate() {
        if c != ' ' {
            continue;
        }

        if position < WRAP_WIDTH {
            preferred = Some(index);
        } else {
            return preferred.or(Some(index));
        }
    }

    // Short lines are never broken
    match line.chars().count() < WRAP_WIDTH {
        true => None,
        false => preferred,
    }
}

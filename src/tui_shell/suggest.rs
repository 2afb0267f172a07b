use std::cmp::Ordering;
use std::collections::HashMap;

use super::CommandDef;

/// Ranks `candidate` against the partially typed `q`. Exact beats prefix,
/// prefix beats substring, and among prefixes the shorter candidate wins.
pub(super) fn score_match(q: &str, candidate: &str) -> i32 {
    let q = q.to_lowercase();
    let c = candidate.to_lowercase();
    if c == q {
        return 100;
    }
    if c.starts_with(&q) {
        return 50 - (c.len() as i32 - q.len() as i32);
    }
    if c.contains(&q) {
        return 10;
    }
    0
}

/// Orders suggestions so the commands currently shown as hints come first (in
/// hint order), with the rest by score and then name.
pub(super) fn sort_scored_suggestions(scored: &mut [(i32, CommandDef)], hint_order: &[String]) {
    let hint_pos: HashMap<&str, usize> = hint_order
        .iter()
        .enumerate()
        .map(|(i, h)| (h.as_str(), i))
        .collect();
    let pin = |def: &CommandDef| {
        hint_pos.get(def.name).copied().or_else(|| {
            def.aliases
                .iter()
                .find_map(|alias| hint_pos.get(*alias).copied())
        })
    };

    scored.sort_by(|(sa, a), (sb, b)| match (pin(a), pin(b)) {
        (Some(ia), Some(ib)) => ia.cmp(&ib),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => sb.cmp(sa).then_with(|| a.name.cmp(b.name)),
    });
}

#[cfg(test)]
#[path = "../tests/tui_shell/suggest_tests.rs"]
mod tests;

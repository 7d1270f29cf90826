use crate::parse::{numbers, paragraphs};
use anyhow::{bail, ensure, Result};
use rustc_hash::FxHashMap;

/// Page -> pages that must come after it.
type Rules = FxHashMap<u32, Vec<u32>>;

fn parse(input: &str) -> Result<(Rules, Vec<Vec<u32>>)> {
    let sections = paragraphs(input);
    let [rule_lines, update_lines] = &sections[..] else {
        bail!("expected rules and updates separated by a blank line")
    };
    let mut rules = Rules::default();
    for line in rule_lines {
        let [before, after] = numbers::<u32>(line)?[..] else {
            bail!("cannot parse rule {:?}", line)
        };
        rules.entry(before).or_default().push(after);
    }
    let updates = update_lines.iter().map(|line| -> Result<Vec<u32>> {
        let update = numbers::<u32>(line)?;
        ensure!(!update.is_empty(), "empty update");
        Ok(update)
    }).collect::<Result<Vec<_>>>()?;
    Ok((rules, updates))
}

fn in_order(update: &[u32], rules: &Rules) -> bool {
    update.iter().enumerate().all(|(i, page)|
        rules.get(page).map_or(true, |later| later.iter().all(|page| !update[.. i].contains(page)))
    )
}

/// Pushes every page that must follow `page` before `page` itself.
fn insert_page(page: u32, update: &[u32], rules: &Rules, visited: &mut Vec<u32>, reversed: &mut Vec<u32>) {
    if visited.contains(&page) {return}
    visited.push(page);
    for &after in rules.get(&page).into_iter().flatten() {
        if update.contains(&after) {
            insert_page(after, update, rules, visited, reversed);
        }
    }
    reversed.push(page);
}

fn reorder(update: &[u32], rules: &Rules) -> Vec<u32> {
    let mut visited = Vec::with_capacity(update.len());
    let mut reversed = Vec::with_capacity(update.len());
    for &page in update {
        insert_page(page, update, rules, &mut visited, &mut reversed);
    }
    reversed.reverse();
    reversed
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (rules, updates) = parse(input)?;
    let middle = |update: &[u32]| update[update.len() / 2];
    let total: u32 = if part == 1 {
        updates.iter().filter(|update| in_order(update, &rules)).map(|update| middle(update)).sum()
    } else {
        updates.iter()
               .filter(|update| !in_order(update, &rules))
               .map(|update| middle(&reorder(update, &rules)))
               .sum()
    };
    Ok(total.to_string())
}

use crate::parse::lines;
use anyhow::{bail, Result};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

type Network<'a> = FxHashMap<&'a str, FxHashSet<&'a str>>;

/// Every clique of one size, keyed by its sorted members and mapped to the
/// computers connected to all of them.
type Cliques<'a> = FxHashMap<Vec<&'a str>, FxHashSet<&'a str>>;

fn parse(input: &str) -> Result<Network<'_>> {
    let mut network = Network::default();
    for line in lines(input) {
        let Some((a, b)) = line.split_once('-') else {bail!("bad connection {:?}", line)};
        network.entry(a).or_default().insert(b);
        network.entry(b).or_default().insert(a);
    }
    Ok(network)
}

fn singletons<'a>(network: &Network<'a>) -> Cliques<'a> {
    network.iter().map(|(&computer, links)| (vec![computer], links.clone())).collect()
}

fn grow<'a>(network: &Network<'a>, cliques: &Cliques<'a>) -> Cliques<'a> {
    let mut bigger = Cliques::default();
    for (members, common) in cliques {
        for &computer in common {
            let mut grown = members.clone();
            grown.push(computer);
            grown.sort_unstable();
            if bigger.contains_key(&grown) {continue}
            let still_common = common.intersection(&network[computer]).copied().collect();
            bigger.insert(grown, still_common);
        }
    }
    bigger
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let network = parse(input)?;
    let mut cliques = singletons(&network);
    if part == 1 {
        for _ in 0 .. 2 {
            cliques = grow(&network, &cliques);
        }
        let chief = cliques.keys().filter(|members| members.iter().any(|c| c.starts_with('t'))).count();
        return Ok(chief.to_string());
    }
    loop {
        let bigger = grow(&network, &cliques);
        if bigger.is_empty() {break}
        cliques = bigger;
    }
    let Ok(party) = cliques.keys().exactly_one() else {
        bail!("{} largest cliques instead of one", cliques.len())
    };
    Ok(party.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_plus_tail() {
        let input = "ta-b\nb-c\nc-ta\nc-d\n";
        assert_eq!(solve(1, input).unwrap(), "1");
        assert_eq!(solve(2, input).unwrap(), "b,c,ta");
    }
}

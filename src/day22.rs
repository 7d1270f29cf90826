use crate::parse::numbers;
use anyhow::Result;
use bitvec::prelude::*;

const PRUNE: u64 = 0xFF_FFFF;
const SECRETS_PER_DAY: usize = 2000;
/// Price changes lie in -9..=9, so four of them index into 19^4 slots.
const SEQUENCES: usize = 19 * 19 * 19 * 19;

fn next_secret(mut secret: u64) -> u64 {
    secret = (secret ^ secret << 6) & PRUNE;
    secret = (secret ^ secret >> 5) & PRUNE;
    (secret ^ secret << 11) & PRUNE
}

/// Adds what this buyer pays the first time each four-change sequence shows
/// up. Returns the buyer's last secret.
fn trade(mut secret: u64, bananas: &mut [u32], seen: &mut BitSlice) -> u64 {
    seen.fill(false);
    let mut price = secret % 10;
    let mut sequence = 0;
    for n in 1 ..= SECRETS_PER_DAY {
        secret = next_secret(secret);
        let next_price = secret % 10;
        sequence = (sequence * 19 + (next_price + 9 - price) as usize) % SEQUENCES;
        price = next_price;
        if n >= 4 && !seen.replace(sequence, true) {
            bananas[sequence] += price as u32;
        }
    }
    secret
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut bananas = vec![0; SEQUENCES];
    let mut seen = bitvec![0; SEQUENCES];
    let secrets: u64 = numbers::<u64>(input)?.into_iter()
                                               .map(|secret| trade(secret, &mut bananas, &mut seen))
                                               .sum();
    if part == 1 {
        return Ok(secrets.to_string());
    }
    Ok(bananas.iter().max().unwrap_or(&0).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_sequence() {
        let secrets: Vec<u64> = std::iter::successors(Some(123), |&s| Some(next_secret(s))).skip(1).take(10).collect();
        assert_eq!(secrets, [
            15887950, 16495136, 527345, 704524, 1553684,
            12683156, 11100544, 12249484, 7753432, 5908254,
        ]);
    }

    #[test]
    fn best_sequence_for_one_buyer() {
        let mut bananas = vec![0; SEQUENCES];
        let mut seen = bitvec![0; SEQUENCES];
        trade(123, &mut bananas, &mut seen);
        // -1,-1,0,2 is first seen with a price of 6
        let index = [8, 8, 9, 11].iter().fold(0, |i, &d| i * 19 + d);
        assert_eq!(bananas[index], 6);
    }
}

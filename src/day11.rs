use crate::parse::numbers;
use anyhow::Result;
use rustc_hash::FxHashMap;

type Memo = FxHashMap<(u64, u32), u64>;

fn blink(stone: u64, blinks: u32, memo: &mut Memo) -> u64 {
    if blinks == 0 {return 1}
    if let Some(&count) = memo.get(&(stone, blinks)) {return count}
    let count = if stone == 0 {
        blink(1, blinks - 1, memo)
    } else {
        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            blink(stone / half, blinks - 1, memo) + blink(stone % half, blinks - 1, memo)
        } else {
            blink(stone * 2024, blinks - 1, memo)
        }
    };
    memo.insert((stone, blinks), count);
    count
}

pub fn count_stones(stones: &[u64], blinks: u32) -> u64 {
    let mut memo = Memo::default();
    stones.iter().map(|&stone| blink(stone, blinks, &mut memo)).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let stones = numbers(input)?;
    Ok(count_stones(&stones, if part == 1 {25} else {75}).to_string())
}

use anyhow::{ensure, Result};

fn parse(input: &str) -> Result<Vec<u64>> {
    let diskmap = input.trim().bytes().map(|b| -> Result<u64> {
        ensure!(b.is_ascii_digit(), "unexpected {:?} in diskmap", b as char);
        Ok((b - b'0') as u64)
    }).collect::<Result<Vec<_>>>()?;
    ensure!(!diskmap.is_empty(), "empty diskmap");
    Ok(diskmap)
}

/// Checksum contribution of `len` blocks of file `id` starting at `start`.
fn blocks_checksum(id: u64, start: u64, len: u64) -> u64 {
    id * (len * start + len * len.saturating_sub(1) / 2)
}

/// Moves single blocks from the back into the front gaps without laying out
/// the disk: one cursor walks forward, the other eats files from the back.
fn compact_blocks(diskmap: &[u64]) -> u64 {
    let mut left = diskmap.to_vec();
    let mut back = (diskmap.len() - 1) & !1;
    let mut position = 0;
    let mut checksum = 0;
    let mut front = 0;
    while front <= back {
        if front % 2 == 0 {
            checksum += blocks_checksum(front as u64 / 2, position, left[front]);
            position += left[front];
            front += 1;
        } else if left[front] == 0 {
            front += 1;
        } else if left[back] == 0 {
            back -= 2;
        } else {
            let moved = left[front].min(left[back]);
            checksum += blocks_checksum(back as u64 / 2, position, moved);
            position += moved;
            left[front] -= moved;
            left[back] -= moved;
        }
    }
    checksum
}

#[derive(Clone, Copy)]
struct Span {
    start: u64,
    len: u64,
}

/// Moves whole files, highest id first, into the leftmost gap that fits.
fn compact_files(diskmap: &[u64]) -> u64 {
    let mut files = vec![];
    let mut gaps = vec![];
    let mut start = 0;
    for (i, &len) in diskmap.iter().enumerate() {
        let span = Span { start, len };
        if i % 2 == 0 {files.push(span)} else {gaps.push(span)}
        start += len;
    }

    for file in files.iter_mut().rev() {
        let gap = gaps.iter_mut()
                      .take_while(|gap| gap.start < file.start)
                      .find(|gap| gap.len >= file.len);
        if let Some(gap) = gap {
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }
    }

    files.iter().enumerate().map(|(id, file)| blocks_checksum(id as u64, file.start, file.len)).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let diskmap = parse(input)?;
    let checksum = if part == 1 {compact_blocks(&diskmap)} else {compact_files(&diskmap)};
    Ok(checksum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_diskmap() {
        // 0..111....22222 compacts to 022111222
        assert_eq!(compact_blocks(&[1, 2, 3, 4, 5]), 60);
        // nothing fits to the left, so nothing moves
        assert_eq!(compact_files(&[1, 2, 3, 4, 5]), 132);
    }
}

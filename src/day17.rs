use crate::parse::numbers;
use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;

/// Registers A, B and C.
type Registers = [u64; 3];

#[derive(Clone, Debug)]
struct Computer {
    registers: Registers,
    program: Vec<u8>,
}

fn combo(operand: u8, [a, b, c]: Registers) -> Result<u64> {
    Ok(match operand {
        0 ..= 3 => operand as u64,
        4 => a,
        5 => b,
        6 => c,
        _ => bail!("invalid combo operand {}", operand),
    })
}

fn shr(value: u64, amount: u64) -> u64 {
    u32::try_from(amount).ok().and_then(|n| value.checked_shr(n)).unwrap_or(0)
}

impl Computer {
    fn parse(input: &str) -> Result<Computer> {
        let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());
        let mut register = |name: &str| -> Result<u64> {
            let line = lines.next().with_context(|| format!("missing register {}", name))?;
            let Some(value) = line.strip_prefix(&format!("Register {}:", name)) else {
                bail!("expected register {}, got {:?}", name, line)
            };
            Ok(value.trim().parse()?)
        };
        let registers = [register("A")?, register("B")?, register("C")?];
        let program = lines.next()
                           .and_then(|line| line.strip_prefix("Program:"))
                           .context("missing program")?;
        let program = numbers::<u8>(program)?;
        ensure!(program.iter().all(|&n| n < 8), "program words are 3-bit");
        Ok(Computer { registers, program })
    }

    fn run(&self, mut registers: Registers, first_output_only: bool) -> Result<Vec<u8>> {
        let mut output = vec![];
        let mut ip = 0;
        while let Some(&[opcode, operand]) = self.program.get(ip .. ip + 2) {
            let value = combo(operand, registers);
            let [a, b, c] = &mut registers;
            match opcode {
                0 => *a = shr(*a, value?),
                1 => *b ^= operand as u64,
                2 => *b = value? % 8,
                3 if *a != 0 => {
                    ip = operand as usize;
                    continue;
                }
                3 => (),
                4 => *b ^= *c,
                5 => {
                    output.push((value? % 8) as u8);
                    if first_output_only {break}
                }
                6 => *b = shr(*a, value?),
                7 => *c = shr(*a, value?),
                _ => bail!("invalid opcode {}", opcode),
            }
            ip += 2;
        }
        Ok(output)
    }

    /// Builds A three bits at a time, matching the program's outputs from the
    /// last one backwards. Candidates are tried in increasing order, so the
    /// first complete match is the smallest.
    fn quine(&self, index: usize, known: u64) -> Result<Option<u64>> {
        for n in 0 .. 8 {
            let a = known << 3 | n;
            if self.run([a, 0, 0], true)?.first() != Some(&self.program[index]) {continue}
            let found = if index == 0 {Some(a)} else {self.quine(index - 1, a)?};
            if found.is_some() {return Ok(found)}
        }
        Ok(None)
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let computer = Computer::parse(input)?;
    if part == 1 {
        return Ok(computer.run(computer.registers, false)?.iter().join(","));
    }
    ensure!(!computer.program.is_empty(), "empty program");
    let a = computer.quine(computer.program.len() - 1, 0)?
                    .context("no value of register A reproduces the program")?;
    Ok(a.to_string())
}

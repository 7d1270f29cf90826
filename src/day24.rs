use crate::parse::paragraphs;
use anyhow::{bail, ensure, Context, Result};
use bitvec::prelude::*;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Xor,
}

#[derive(Clone, Copy, Debug)]
struct Gate {
    op: Op,
    inputs: [usize; 2],
}

struct Device<'a> {
    names: Vec<&'a str>,
    initial: Vec<bool>,
    /// Indexed by the gate's output wire.
    gates: Vec<Option<Gate>>,
    x: Vec<usize>,
    y: Vec<usize>,
    z: Vec<usize>,
}

impl<'a> Device<'a> {
    fn parse(input: &'a str) -> Result<Device<'a>> {
        let sections = paragraphs(input);
        let [wires, gates] = &sections[..] else {
            bail!("expected initial wires and gates, got {} sections", sections.len())
        };
        let mut ids = FxHashMap::default();
        let mut names = vec![];
        let mut wire = |name: &'a str| {
            *ids.entry(name).or_insert_with(|| {
                names.push(name);
                names.len() - 1
            })
        };

        let mut initial = vec![];
        for &line in wires {
            let Some((name, value)) = line.split_once(": ") else {bail!("bad wire {:?}", line)};
            let value = match value.trim() {
                "0" => false,
                "1" => true,
                _ => bail!("wire {} has value {:?}", name, value),
            };
            initial.push((wire(name), value));
        }

        let mut defined = vec![];
        for &line in gates {
            let [a, op, b, "->", out] = line.split_whitespace().collect::<Vec<_>>()[..] else {
                bail!("bad gate {:?}", line)
            };
            let op = match op {
                "AND" => Op::And,
                "OR" => Op::Or,
                "XOR" => Op::Xor,
                _ => bail!("unknown operation {:?}", op),
            };
            defined.push((wire(out), Gate { op, inputs: [wire(a), wire(b)] }));
        }

        let mut device = Device {
            initial: vec![false; names.len()],
            gates: vec![None; names.len()],
            x: vec![],
            y: vec![],
            z: vec![],
            names,
        };
        let mut driven = bitvec![0; device.names.len()];
        for (w, value) in initial {
            device.initial[w] = value;
            driven.set(w, true);
        }
        for (w, gate) in defined {
            ensure!(!driven.replace(w, true), "wire {} is driven twice", device.names[w]);
            device.gates[w] = Some(gate);
        }
        if let Some(w) = driven.iter_zeros().next() {
            bail!("wire {} is never driven", device.names[w]);
        }
        for (w, name) in device.names.iter().enumerate().sorted_by_key(|&(_, name)| *name) {
            match name.chars().next() {
                Some('x') => device.x.push(w),
                Some('y') => device.y.push(w),
                Some('z') => device.z.push(w),
                _ => (),
            }
        }
        ensure!(!device.z.is_empty(), "device has no output wires");
        Ok(device)
    }

    /// Wires in an order where every gate comes after its inputs, or `None`
    /// if the gates form a loop.
    fn order(&self) -> Option<Vec<usize>> {
        const NEW: u8 = 0;
        const OPEN: u8 = 1;
        const DONE: u8 = 2;
        fn visit(device: &Device, w: usize, state: &mut [u8], order: &mut Vec<usize>) -> bool {
            match state[w] {
                DONE => return true,
                OPEN => return false,
                _ => (),
            }
            state[w] = OPEN;
            if let Some(gate) = device.gates[w] {
                if !gate.inputs.iter().all(|&i| visit(device, i, state, order)) {return false}
            }
            state[w] = DONE;
            order.push(w);
            true
        }
        let mut state = vec![NEW; self.names.len()];
        let mut order = vec![];
        self.z.iter().all(|&z| visit(self, z, &mut state, &mut order)).then_some(order)
    }

    fn run(&self, order: &[usize], x: u64, y: u64) -> u64 {
        let mut values = self.initial.clone();
        for (bit, &w) in self.x.iter().enumerate() {values[w] = x >> bit & 1 == 1}
        for (bit, &w) in self.y.iter().enumerate() {values[w] = y >> bit & 1 == 1}
        for &w in order {
            if let Some(Gate { op, inputs: [a, b] }) = self.gates[w] {
                values[w] = match op {
                    Op::And => values[a] & values[b],
                    Op::Or => values[a] | values[b],
                    Op::Xor => values[a] ^ values[b],
                };
            }
        }
        self.z.iter().rev().fold(0, |n, &w| n << 1 | values[w] as u64)
    }

    fn initial_number(&self, wires: &[usize]) -> u64 {
        wires.iter().rev().fold(0, |n, &w| n << 1 | self.initial[w] as u64)
    }

    fn output(&self) -> Option<u64> {
        let order = self.order()?;
        Some(self.run(&order, self.initial_number(&self.x), self.initial_number(&self.y)))
    }

    /// Whether the device adds correctly the inputs that exercise output `bit`
    /// and the carry into it.
    fn bit_ok(&self, bit: usize) -> bool {
        let Some(order) = self.order() else {return false};
        let adds = |x: u64, y: u64| self.run(&order, x, y) == x + y;
        let one = 1 << bit;
        // Only outputs up to `bit`, the carry out belongs to the next bit.
        let low = (one << 1) - 1;
        let adds_low = |x: u64, y: u64| ((self.run(&order, x, y) ^ (x + y)) & low) == 0;
        adds(one, 0)
            && adds(0, one)
            && (bit == 0 || adds(one >> 1, one >> 1))
            && (bit == 0 || adds_low(one | one >> 1, one >> 1))
            && adds(0, 0)
            && (bit + 1 < self.x.len() || adds(one, one))
    }

    /// Sums that ripple a carry through many bits at once.
    fn adds_mixed(&self) -> bool {
        let Some(order) = self.order() else {return false};
        let mask = u64::MAX >> (64 - self.x.len());
        [
            (mask, 1),
            (mask, mask),
            (0x5555_5555_5555_5555, 0x3333_3333_3333_3333),
            (0x0f0f_0f0f_0f0f_0f0f, 0x00ff_00ff_00ff_00ff),
        ].into_iter().all(|(x, y)| {
            let (x, y) = (x & mask, y & mask);
            self.run(&order, x, y) == x + y
        })
    }

    fn first_bad_bit(&self) -> Option<usize> {
        (0 .. self.x.len()).find(|&bit| !self.bit_ok(bit))
    }

    /// Wires that output `bit` of a ripple-carry adder depends on, itself
    /// included. Each bit adds six: two inputs, their XOR and AND, the carry
    /// AND and the carry OR.
    fn cone_size(bit: usize) -> usize {
        if bit == 0 {3} else {6 * bit + 1}
    }

    /// Every wire `w` depends on, itself included.
    fn cone(&self, w: usize) -> BitVec {
        let mut seen = bitvec![0; self.names.len()];
        let mut stack = vec![w];
        while let Some(w) = stack.pop() {
            if seen.replace(w, true) {continue}
            if let Some(gate) = self.gates[w] {stack.extend(gate.inputs)}
        }
        seen
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.gates.swap(a, b);
    }

    /// Exchanges pairs of gate outputs until the device adds, fixing the
    /// lowest broken bit first. Gates feeding the bits that already work are
    /// left alone, and a repaired output must depend on exactly as many wires
    /// as in a ripple-carry adder.
    fn find_swaps(&mut self, swapped: &mut Vec<(usize, usize)>, max_swaps: usize) -> bool {
        let Some(bad) = self.first_bad_bit() else {return self.adds_mixed()};
        if swapped.len() == max_swaps {return false}

        let mut trusted = bitvec![0; self.names.len()];
        for &w in self.x.iter().chain(&self.y) {trusted.set(w, true)}
        for &z in &self.z[.. bad] {
            for w in self.cone(z).iter_ones() {trusted.set(w, true)}
        }
        for &(a, b) in swapped.iter() {
            trusted.set(a, true);
            trusted.set(b, true);
        }
        let cone_size = Self::cone_size(bad);
        let free = (0 .. self.names.len()).filter(|&w| self.gates[w].is_some() && !trusted[w]).collect_vec();

        let mut candidates = vec![];
        for (i, &a) in free.iter().enumerate() {
            for &b in &free[i + 1 ..] {
                self.swap(a, b);
                let fixed = self.bit_ok(bad) && self.cone(self.z[bad]).count_ones() == cone_size;
                self.swap(a, b);
                if fixed {candidates.push((a, b))}
            }
        }
        debug!(bit = bad, candidates = candidates.len(), "looking for swaps");

        for (a, b) in candidates {
            self.swap(a, b);
            swapped.push((a, b));
            if self.find_swaps(swapped, max_swaps) {return true}
            swapped.pop();
            self.swap(a, b);
        }
        false
    }
}

/// The sorted, comma separated names of the wires whose gates must be
/// exchanged for the device to add.
pub fn repair(input: &str, max_swaps: usize) -> Result<String> {
    let mut device = Device::parse(input)?;
    ensure!(device.x.len() == device.y.len() && device.z.len() > device.x.len(),
            "device does not look like an adder");
    ensure!(!device.x.is_empty() && device.x.len() < 64, "cannot add {}-bit numbers", device.x.len());
    let mut swapped = vec![];
    ensure!(device.find_swaps(&mut swapped, max_swaps), "no way to repair with {} swaps", max_swaps);
    for &(a, b) in &swapped {
        debug!(a = device.names[a], b = device.names[b], "swapped");
    }
    Ok(swapped.iter().flat_map(|&(a, b)| [device.names[a], device.names[b]]).sorted().join(","))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part == 1 {
        let device = Device::parse(input)?;
        return Ok(device.output().context("gates form a loop")?.to_string());
    }
    repair(input, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A ripple-carry adder over `bits` bits with the named outputs exchanged.
    fn adder(bits: usize, swaps: &[(&str, &str)]) -> String {
        let mut gates = vec![("x00".to_string(), "XOR", "y00".to_string(), "z00".to_string())];
        gates.push(("x00".into(), "AND", "y00".into(), "c00".into()));
        for k in 1 .. bits {
            let carry_out = if k + 1 == bits {format!("z{:02}", bits)} else {format!("c{:02}", k)};
            gates.extend([
                (format!("x{:02}", k), "XOR", format!("y{:02}", k), format!("b{:02}", k)),
                (format!("x{:02}", k), "AND", format!("y{:02}", k), format!("a{:02}", k)),
                (format!("b{:02}", k), "AND", format!("c{:02}", k - 1), format!("d{:02}", k)),
                (format!("b{:02}", k), "XOR", format!("c{:02}", k - 1), format!("z{:02}", k)),
                (format!("a{:02}", k), "OR", format!("d{:02}", k), carry_out),
            ]);
        }
        for &(p, q) in swaps {
            for gate in &mut gates {
                if gate.3 == p {gate.3 = q.to_string()} else if gate.3 == q {gate.3 = p.to_string()}
            }
        }
        let wires = (0 .. bits).flat_map(|k| [format!("x{:02}: 0", k), format!("y{:02}: 0", k)]).join("\n");
        let gates = gates.iter().map(|(a, op, b, out)| format!("{} {} {} -> {}", a, op, b, out)).join("\n");
        format!("{}\n\n{}\n", wires, gates)
    }

    #[test]
    fn intact_adder_adds() {
        let input = adder(6, &[]);
        let device = Device::parse(&input).unwrap();
        let order = device.order().unwrap();
        assert_eq!(device.run(&order, 45, 27), 72);
        assert_eq!(device.run(&order, 63, 63), 126);
        assert_eq!(device.first_bad_bit(), None);
        assert_eq!(repair(&input, 4).unwrap(), "");
    }

    #[test]
    fn swapped_outputs_are_found() {
        let input = adder(6, &[("z02", "c02"), ("a04", "b04")]);
        assert_eq!(Device::parse(&input).unwrap().first_bad_bit(), Some(2));
        assert_eq!(repair(&input, 2).unwrap(), "a04,b04,c02,z02");
    }

    #[test]
    fn swap_must_fix_sum_and_carry_together() {
        let input = adder(6, &[("z01", "c01")]);
        let device = Device::parse(&input).unwrap();
        assert_eq!(device.first_bad_bit(), Some(1));
        // Exchanging a01 and c01 makes z01 = b01 | c00, right for every sum but 3 + 1.
        let mut wrong = Device::parse(&input).unwrap();
        let id = |name: &str| wrong.names.iter().position(|&n| n == name).unwrap();
        let (a01, c01) = (id("a01"), id("c01"));
        wrong.swap(a01, c01);
        assert!(!wrong.bit_ok(1));
        assert_eq!(wrong.run(&wrong.order().unwrap(), 3, 1), 2);
        assert_eq!(repair(&input, 4).unwrap(), "c01,z01");
    }

    #[test]
    fn cone_sizes_of_an_intact_adder() {
        let input = adder(6, &[]);
        let device = Device::parse(&input).unwrap();
        for bit in 0 .. 6 {
            assert_eq!(device.cone(device.z[bit]).count_ones(), Device::cone_size(bit), "z{:02}", bit);
        }
        assert!(device.adds_mixed());
    }

    #[test]
    fn looped_gates_have_no_order() {
        let input = "x00: 1\ny00: 0\n\nx00 AND q -> z00\nz00 OR y00 -> q\n";
        let device = Device::parse(input).unwrap();
        assert!(device.order().is_none());
        assert!(!device.bit_ok(0));
    }
}

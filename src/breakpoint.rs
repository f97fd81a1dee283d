use crate::cpu::{Cpu, Flag};
use crate::cycle::Cycle;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// The piece of processor state a condition observes. Flag conditions see
/// the raw masked bit, so "negative set" matches against 0x80, not 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Watch {
    Opcode,
    Pc,
    A,
    X,
    Y,
    Sp,
    Flag(Flag),
}

impl Watch {
    pub fn observe(self, cpu: &Cpu, cycle: &Cycle) -> u16 {
        match self {
            Watch::Opcode => u16::from(cpu.opcode),
            Watch::Pc => cycle.start_pc,
            Watch::A => u16::from(cpu.a),
            Watch::X => u16::from(cpu.x),
            Watch::Y => u16::from(cpu.y),
            Watch::Sp => u16::from(cpu.sp),
            Watch::Flag(flag) => u16::from(cpu.flags & flag.mask()),
        }
    }
}

/// A single condition: the watched element equals the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub watch: Watch,
    pub value: u16,
}

impl Breakpoint {
    pub fn matches(&self, cpu: &Cpu, cycle: &Cycle) -> bool {
        self.watch.observe(cpu, cycle) == self.value
    }
}

/// An ordered group of conditions that must all hold on the same
/// instruction. The set fires on the match that brings its hit counter to
/// exactly zero; the counter keeps falling on later matches, so a fired
/// set never fires again. A set with no conditions matches every
/// instruction.
pub struct BreakpointSet {
    name: Option<String>,
    breakpoints: Vec<Breakpoint>,
    remaining: i32,
}

impl BreakpointSet {
    /// A set that fires on the `count`th full match.
    pub fn new(count: i32) -> BreakpointSet {
        BreakpointSet {
            name: None,
            breakpoints: Vec::new(),
            remaining: count,
        }
    }

    pub fn named(count: i32, name: &str) -> BreakpointSet {
        BreakpointSet {
            name: Some(name.to_string()),
            ..BreakpointSet::new(count)
        }
    }

    pub fn add(&mut self, watch: Watch, value: u16) {
        self.breakpoints.push(Breakpoint { watch, value });
    }

    /// Evaluates the set against the state left by one instruction. The
    /// hit counter only moves when every condition matches; this is the
    /// single place it is ever mutated.
    fn check(&mut self, cpu: &Cpu, cycle: &Cycle) -> bool {
        if !self.breakpoints.iter().all(|bp| bp.matches(cpu, cycle)) {
            return false;
        }

        self.remaining -= 1;
        self.remaining == 0
    }
}

impl Default for BreakpointSet {
    fn default() -> BreakpointSet {
        BreakpointSet::new(1)
    }
}

impl fmt::Display for BreakpointSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "break point > {}", name),
            None => write!(f, "break point > (unnamed)"),
        }
    }
}

impl FromStr for BreakpointSet {
    type Err = String;

    /// Parses a command line breakpoint spec: comma separated
    /// `element=value` conditions with an optional `*count` suffix, e.g.
    /// `pc=0x700e*5` or `a=0x08,y=0x02`. Elements are the registers
    /// (`a`, `x`, `y`), `pc`, `sp`, `opcode` and the single letter flags
    /// (`c`, `z`, `i`, `d`, `v`, `n`). Values are hex with an `0x` prefix
    /// or decimal; for flags any non-zero value means "set".
    fn from_str(spec: &str) -> Result<BreakpointSet, String> {
        lazy_static! {
            static ref COUNT_RE: Regex = Regex::new(r"^(.+)\*([0-9]{1,9})$").unwrap();
            static ref CONDITION_RE: Regex =
                Regex::new(r"^([a-z]+)=(?:0x([0-9a-f]{1,4})|([0-9]{1,5}))$").unwrap();
        }

        let lowered = spec.trim().to_lowercase();
        let (conditions, count) = match COUNT_RE.captures(&lowered) {
            Some(caps) => {
                let count = caps[2]
                    .parse::<i32>()
                    .map_err(|_| format!("bad hit count in {:?}", spec))?;
                (caps[1].to_string(), count)
            }
            None => (lowered.clone(), 1),
        };

        if count < 1 {
            return Err(format!("hit count must be at least 1 in {:?}", spec));
        }

        let mut set = BreakpointSet::named(count, spec.trim());

        for part in conditions.split(',') {
            let caps = CONDITION_RE
                .captures(part.trim())
                .ok_or_else(|| format!("bad breakpoint condition {:?}", part))?;

            let value = match caps.get(2) {
                Some(hex) => u16::from_str_radix(hex.as_str(), 16)
                    .map_err(|_| format!("bad value in {:?}", part))?,
                None => caps[3]
                    .parse::<u16>()
                    .map_err(|_| format!("value out of range in {:?}", part))?,
            };

            let watch = match &caps[1] {
                "opcode" => Watch::Opcode,
                "pc" => Watch::Pc,
                "sp" => Watch::Sp,
                "a" => Watch::A,
                "x" => Watch::X,
                "y" => Watch::Y,
                "c" => Watch::Flag(Flag::Carry),
                "z" => Watch::Flag(Flag::Zero),
                "i" => Watch::Flag(Flag::InterruptDisable),
                "d" => Watch::Flag(Flag::Decimal),
                "v" => Watch::Flag(Flag::Overflow),
                "n" => Watch::Flag(Flag::Negative),
                element => return Err(format!("unknown breakpoint element {:?}", element)),
            };

            // Flag comparisons work on the raw masked bit.
            let value = match watch {
                Watch::Flag(flag) if value != 0 => u16::from(flag.mask()),
                _ => value,
            };

            set.add(watch, value);
        }

        Ok(set)
    }
}

/// Holds every registered set in order and answers, once per executed
/// instruction, whether one of them wants execution halted. The first set
/// to fire wins; sets after it are not consulted for that instruction.
pub struct BreakpointManager {
    sets: Vec<BreakpointSet>,
    pub step_mode: bool,
}

impl BreakpointManager {
    pub fn new() -> BreakpointManager {
        BreakpointManager {
            sets: Vec::new(),
            step_mode: false,
        }
    }

    pub fn add(&mut self, set: BreakpointSet) {
        self.sets.push(set);
    }

    pub fn should_break(&mut self, cpu: &Cpu, cycle: &Cycle) -> Option<&BreakpointSet> {
        let hit = self
            .sets
            .iter_mut()
            .position(|set| set.check(cpu, cycle))?;
        Some(&self.sets[hit])
    }
}

impl Default for BreakpointManager {
    fn default() -> BreakpointManager {
        BreakpointManager::new()
    }
}

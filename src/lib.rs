pub mod breakpoint;
pub mod config;
pub mod cpu;
pub mod cycle;
pub mod demo;
pub mod file_loader;
pub mod instruction;
pub mod memory;
pub mod opcode;
pub mod runner;
pub mod trace;

pub use crate::config::Config;

use crate::breakpoint::{BreakpointManager, BreakpointSet};
use crate::cpu::Cpu;
use std::error::Error;

pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let mut cpu = Cpu::new();

    match &config.program {
        Some(filename) => {
            file_loader::load_file(filename, &mut cpu.memory)?;
        }
        None => demo::load_program(&mut cpu.memory),
    }

    let mut manager = BreakpointManager::new();
    manager.step_mode = config.step;

    // The demo carries its own breakpoints, unless the caller brought some.
    if config.program.is_none() && config.breakpoints.is_empty() {
        demo::install_breakpoints(&mut manager);
    }
    for spec in &config.breakpoints {
        manager.add(spec.parse::<BreakpointSet>()?);
    }

    runner::run(&mut cpu, &mut manager)
}

use crate::breakpoint::BreakpointManager;
use crate::cpu::Cpu;
use crate::trace;
use std::error::Error;
use std::io::{self, Read, Write};

const HEADER_EVERY: usize = 10;

/// Resets the processor and drives it until the halt sentinel is fetched,
/// an unsupported opcode turns up, or the user quits from the prompt.
///
/// After every instruction a trace row is printed and the breakpoint
/// manager is consulted. On a hit, or while single stepping, execution
/// pauses for one key: Enter leaves step mode and continues, `q` stops the
/// run, anything else steps to the next instruction. This prompt is the
/// only place the whole emulator blocks.
pub fn run(cpu: &mut Cpu, manager: &mut BreakpointManager) -> Result<(), Box<dyn Error>> {
    cpu.reset();

    let mut executed = 0;
    while !cpu.halted() {
        let cycle = cpu.step()?;

        if executed % HEADER_EVERY == 0 {
            println!("{}", trace::header());
        }
        executed += 1;
        println!("{}", trace::row(cpu, &cycle));

        let hit = manager.should_break(cpu, &cycle).map(|set| set.to_string());
        if hit.is_some() || manager.step_mode {
            if let Some(message) = &hit {
                println!("{}", message);
            }
            match wait_for_key()? {
                b'\r' | b'\n' => manager.step_mode = false,
                b'q' => return Ok(()),
                _ => manager.step_mode = true,
            }
        }

        cpu.fetch_next();
    }

    Ok(())
}

fn wait_for_key() -> io::Result<u8> {
    io::stdout().flush()?;

    let mut buffer = [0; 1];
    io::stdin().read_exact(&mut buffer)?;

    Ok(buffer[0])
}

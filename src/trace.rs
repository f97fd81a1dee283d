use crate::cpu::Cpu;
use crate::cycle::Cycle;

/// Column header, reprinted by the runner every few rows.
pub fn header() -> &'static str {
    "PC   : OP BYTES     : INSTRUCTION        A  X  Y  SP NV-BDIZC CYCLES"
}

/// One trace row: where the instruction started, its raw bytes, its
/// disassembly, the registers and flags it left behind, and the expected
/// against actual cycle counts.
pub fn row(cpu: &Cpu, cycle: &Cycle) -> String {
    let mut bytes = String::new();
    for byte in &cycle.operands {
        bytes.push_str(&format!("{:02x} ", byte));
    }
    let body = format!("{:<10}: {}", bytes, disassemble(cycle));

    format!(
        "{:04x} : {:02x} {:<30} {:02x} {:02x} {:02x} {:02x} {:08b} {}+{}:{}",
        cycle.start_pc,
        cycle.instruction.code,
        body,
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.sp,
        cpu.flags,
        cycle.instruction.cycles,
        cycle.instruction.extra_cycles,
        cycle.actual_cycles,
    )
}

pub fn disassemble(cycle: &Cycle) -> String {
    format_operands(cycle.instruction.format, &cycle.operands)
}

/// Substitutes `{0}`, `{1}`, ... in a descriptor template with the operand
/// bytes rendered as two digit hex.
fn format_operands(template: &str, operands: &[u8]) -> String {
    let mut out = template.to_string();
    for (index, byte) in operands.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", index), &format!("{:02x}", byte));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::InstructionTable;

    fn cycle_for(code: u8, pc: u16, operands: &[u8]) -> Cycle {
        let table = InstructionTable::new();
        let mut cycle = Cycle::new(pc, table.lookup(code).unwrap());
        cycle.operands = operands.to_vec();
        cycle
    }

    #[test]
    fn immediate_template() {
        let cycle = cycle_for(0xa9, 0x5000, &[0x05]);

        assert_eq!(disassemble(&cycle), "LDA #$05");
    }

    #[test]
    fn absolute_template_prints_the_address_high_byte_first() {
        let cycle = cycle_for(0x4c, 0x5000, &[0x00, 0x70]);

        assert_eq!(disassemble(&cycle), "JMP $7000");
    }

    #[test]
    fn implied_template_has_no_placeholders() {
        let cycle = cycle_for(0xea, 0x5000, &[]);

        assert_eq!(disassemble(&cycle), "NOP");
    }

    #[test]
    fn row_lays_out_every_column() {
        let mut cpu = Cpu::new();
        cpu.a = 0x05;
        cpu.sp = 0xff;
        let mut cycle = cycle_for(0xa9, 0x5000, &[0x05]);
        cycle.actual_cycles = 2;

        assert_eq!(
            row(&cpu, &cycle),
            "5000 : a9 05        : LDA #$05           05 00 00 ff 00000000 2+0:2"
        );
    }

    #[test]
    fn row_renders_flags_as_bits() {
        let mut cpu = Cpu::new();
        cpu.flags = 0x82;
        let cycle = cycle_for(0xea, 0x5000, &[]);

        assert!(row(&cpu, &cycle).contains("10000010"));
    }
}

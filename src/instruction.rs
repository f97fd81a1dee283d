use crate::opcode::AddressingMode::*;
use crate::opcode::Opcode::{self, *};

/// Everything known about a single opcode: its decoded form, its total
/// length in bytes (opcode included), its base cycle count, the largest
/// number of extra cycles it can take, and the template the trace output
/// uses to render it. Descriptors are built once and never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
    pub code: u8,
    pub opcode: Opcode,
    pub bytes: u8,
    pub cycles: u8,
    pub extra_cycles: u8,
    pub format: &'static str,
}

/// The fixed lookup table from opcode byte to descriptor. Only a hand
/// picked subset of the processor's instruction set is registered; looking
/// up anything else yields `None` and the execution engine reports it as an
/// unsupported opcode.
pub struct InstructionTable {
    instructions: [Option<Instruction>; 256],
}

impl InstructionTable {
    pub fn new() -> InstructionTable {
        let mut table = InstructionTable {
            instructions: [None; 256],
        };

        table.add(0xa9, 2, 2, 0, Lda(Immediate), "LDA #${0}");
        table.add(0xad, 3, 4, 0, Lda(Absolute), "LDA ${1}{0}");
        table.add(0xbd, 3, 4, 1, Lda(AbsoluteX), "LDA ${1}{0}, X");
        table.add(0xa1, 2, 6, 0, Lda(IndirectX), "LDA (${0}, X)");
        table.add(0xb1, 2, 5, 1, Lda(IndirectY), "LDA (${0}), Y");
        table.add(0xa2, 2, 2, 0, Ldx(Immediate), "LDX #${0}");
        table.add(0xa0, 2, 2, 0, Ldy(Immediate), "LDY #${0}");
        table.add(0x8d, 3, 4, 0, Sta(Absolute), "STA ${1}{0}");
        table.add(0x8e, 3, 4, 0, Stx(Absolute), "STX ${1}{0}");
        table.add(0x6d, 3, 4, 0, Adc(Absolute), "ADC ${1}{0}");
        table.add(0xd0, 2, 2, 2, Bne, "BNE ${0}");
        table.add(0x4c, 3, 3, 0, Jmp(Absolute), "JMP ${1}{0}");
        table.add(0x6c, 3, 5, 0, Jmp(Indirect), "JMP (${1}{0})");
        table.add(0x20, 3, 6, 0, Jsr, "JSR ${1}{0}");
        table.add(0x60, 1, 6, 0, Rts, "RTS");
        table.add(0xea, 1, 2, 0, Nop, "NOP");
        table.add(0xaa, 1, 2, 0, Tax, "TAX");
        table.add(0x8a, 1, 2, 0, Txa, "TXA");
        table.add(0xa8, 1, 2, 0, Tay, "TAY");
        table.add(0x98, 1, 2, 0, Tya, "TYA");
        table.add(0xe8, 1, 2, 0, Inx, "INX");
        table.add(0xca, 1, 2, 0, Dex, "DEX");
        table.add(0xc8, 1, 2, 0, Iny, "INY");
        table.add(0x88, 1, 2, 0, Dey, "DEY");
        table.add(0x18, 1, 2, 0, Clc, "CLC");
        table.add(0x38, 1, 2, 0, Sec, "SEC");
        table.add(0x58, 1, 2, 0, Cli, "CLI");
        table.add(0x78, 1, 2, 0, Sei, "SEI");
        table.add(0xb8, 1, 2, 0, Clv, "CLV");
        table.add(0xd8, 1, 2, 0, Cld, "CLD");
        table.add(0xf8, 1, 2, 0, Sed, "SED");

        table
    }

    fn add(
        &mut self,
        code: u8,
        bytes: u8,
        cycles: u8,
        extra_cycles: u8,
        opcode: Opcode,
        format: &'static str,
    ) {
        self.instructions[code as usize] = Some(Instruction {
            code,
            opcode,
            bytes,
            cycles,
            extra_cycles,
            format,
        });
    }

    pub fn lookup(&self, code: u8) -> Option<Instruction> {
        self.instructions[code as usize]
    }
}

impl Default for InstructionTable {
    fn default() -> InstructionTable {
        InstructionTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_opcode() {
        let table = InstructionTable::new();
        let lda = table.lookup(0xa9).unwrap();

        assert_eq!(lda.code, 0xa9);
        assert_eq!(lda.opcode, Lda(Immediate));
        assert_eq!(lda.bytes, 2);
        assert_eq!(lda.cycles, 2);
        assert_eq!(lda.extra_cycles, 0);
    }

    #[test]
    fn lookup_unknown_opcode() {
        let table = InstructionTable::new();

        assert_eq!(table.lookup(0x00), None);
        assert_eq!(table.lookup(0xff), None);
    }

    #[test]
    fn branch_carries_its_extra_cycles() {
        let table = InstructionTable::new();
        let bne = table.lookup(0xd0).unwrap();

        assert_eq!(bne.cycles, 2);
        assert_eq!(bne.extra_cycles, 2);
    }

    #[test]
    fn every_descriptor_spans_at_least_the_opcode_byte() {
        let table = InstructionTable::new();
        let registered: Vec<_> = (0..=255u8).filter_map(|code| table.lookup(code)).collect();

        assert_eq!(registered.len(), 31);
        for instruction in registered {
            assert!(instruction.bytes >= 1);
            assert!(instruction.cycles >= 1);
        }
    }
}

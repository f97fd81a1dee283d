/// How an instruction finds its operand. Implied operations carry no mode
/// and appear as bare `Opcode` variants instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddressingMode {
    /// The operand byte follows the opcode directly.
    Immediate,
    /// A full 16 bit address follows the opcode.
    Absolute,
    /// Absolute address plus the X register.
    AbsoluteX,
    /// Zero page pointer, indexed by X before the dereference.
    IndirectX,
    /// Zero page pointer, dereferenced and then indexed by Y.
    IndirectY,
    /// A pointer word holding the real target. Jump targets only.
    Indirect,
}

/// The instructions this emulator knows, one variant per behavior. Variants
/// with several encodings carry their addressing mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opcode {
    Lda(AddressingMode),
    Ldx(AddressingMode),
    Ldy(AddressingMode),
    Sta(AddressingMode),
    Stx(AddressingMode),
    Adc(AddressingMode),
    Inx,
    Dex,
    Iny,
    Dey,
    Tax,
    Txa,
    Tay,
    Tya,
    Clc,
    Sec,
    Cli,
    Sei,
    Clv,
    Cld,
    Sed,
    Bne,
    Jmp(AddressingMode),
    Jsr,
    Rts,
    Nop,
}

use mipsasm_rs::{assemble, assemble_at};

fn opcode(word: u32) -> u32 {
    word >> 26
}

fn rs(word: u32) -> u32 {
    (word >> 21) & 0x1F
}

fn rt(word: u32) -> u32 {
    (word >> 16) & 0x1F
}

fn imm16(word: u32) -> i16 {
    (word & 0xFFFF) as i16
}

#[test]
fn backward_branch_offset() {
    // start at base, beq at base+4: offset = (base - (base+4+4)) / 4 = -2
    let src = "start: nop\nbeq $t0, $t1, start";
    let words = assemble_at(src, 0x100).unwrap();
    let beq = words[1];
    assert_eq!(opcode(beq), 4);
    assert_eq!(rs(beq), 8);
    assert_eq!(rt(beq), 9);
    assert_eq!(imm16(beq), -2);
}

#[test]
fn forward_branch_offset() {
    let src = "\
beq $t0, $t1, done
addi $t0, $t0, 1
done: nop
";
    let words = assemble(src).unwrap();
    // done is two instructions past the delay point: (base+8 - (base+4)) / 4
    assert_eq!(imm16(words[0]), 1);
    assert_eq!(words[0], 0x1109_0001);
}

#[test]
fn branch_to_next_instruction_is_zero() {
    let src = "bne $a0, $a1, next\nnext: nop";
    let words = assemble(src).unwrap();
    assert_eq!(opcode(words[0]), 5);
    assert_eq!(imm16(words[0]), 0);
}

#[test]
fn branch_offset_law_holds_at_any_base() {
    // The encoded field must equal (target - (addr + 4)) / 4 regardless of
    // where the program is loaded.
    for base in [0u32, 0x100, 0x0040_0000, 0x8000_0000] {
        let src = "top: nop\nnop\nbeq $s0, $s1, top";
        let words = assemble_at(src, base).unwrap();
        let beq_addr = i64::from(base) + 8;
        let expected = (i64::from(base) - (beq_addr + 4)) / 4;
        assert_eq!(i64::from(imm16(words[2])), expected);
    }
}

#[test]
fn beq_and_bne_share_field_layout() {
    let src = "x: beq $t0, $zero, x\nbne $t0, $zero, x";
    let words = assemble(src).unwrap();
    assert_eq!(opcode(words[0]), 4);
    assert_eq!(opcode(words[1]), 5);
    // same rs/rt, offsets -1 and -2
    assert_eq!(rs(words[0]), rs(words[1]));
    assert_eq!(imm16(words[0]), -1);
    assert_eq!(imm16(words[1]), -2);
}

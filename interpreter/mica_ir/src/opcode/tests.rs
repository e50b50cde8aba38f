use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_mnemonic_parses_back_to_itself() {
    for op in Opcode::ALL {
        assert_eq!(Opcode::parse(op.mnemonic()), Some(op));
    }
}

#[test]
fn mnemonics_are_unique() {
    let mut seen: Vec<&str> = Opcode::ALL.iter().map(|op| op.mnemonic()).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), Opcode::ALL.len());
}

#[test]
fn unknown_tokens_do_not_decode() {
    // No fallback on the leading character: these all start like real
    // mnemonics but must not decode.
    for token in ["iconst2", "f", "ad", "iaddq", "fdivv", "IADD", ""] {
        assert_eq!(Opcode::parse(token), None);
    }
}

#[test]
fn operand_kinds() {
    assert_eq!(Opcode::Iconst.operand_kind(), OperandKind::Int);
    assert_eq!(Opcode::Fconst.operand_kind(), OperandKind::Float);
    for op in [
        Opcode::Iload,
        Opcode::Fload,
        Opcode::Istore,
        Opcode::Fstore,
        Opcode::Val,
        Opcode::Par,
    ] {
        assert_eq!(op.operand_kind(), OperandKind::Name);
    }
    assert_eq!(Opcode::Iadd.operand_kind(), OperandKind::None);
    assert_eq!(Opcode::Top.operand_kind(), OperandKind::None);
    assert_eq!(Opcode::I2f.operand_kind(), OperandKind::None);
}

#[test]
fn display_matches_mnemonic() {
    assert_eq!(Opcode::Ibnot.to_string(), "ibnot");
    assert_eq!(Opcode::F2i.to_string(), "f2i");
}

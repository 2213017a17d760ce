//! # Control Flow Tests
//!
//! Jumps, conditional branches and subroutine linkage.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::VmError;
use ls8_core::common::SP_INIT;
use ls8_core::config::Config;
use ls8_core::core::Control;
use rstest::rstest;

#[test]
fn test_jmp_sets_pc_without_advancing() {
    let image = ProgramBuilder::new().jmp(4).build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.set_reg(4, 0x40);

    assert_eq!(ctx.step(), Control::Jump(0x40));
    assert_eq!(ctx.cpu.pc, 0x40);
}

#[test]
fn test_jmp_to_own_address_spins() {
    let image = ProgramBuilder::new().jmp(0).build();
    let mut ctx = TestContext::new().load_program(&image);

    ctx.step_n(5);

    assert_eq!(ctx.cpu.pc, 0);
    assert!(!ctx.cpu.is_halted());
}

#[rstest]
#[case::jeq_taken(true, true, 0x20)]
#[case::jeq_not_taken(true, false, 2)]
#[case::jne_taken(false, false, 0x20)]
#[case::jne_not_taken(false, true, 2)]
fn test_conditional_branch(
    #[case] is_jeq: bool,
    #[case] flag: bool,
    #[case] expected_pc: u8,
) {
    let program = ProgramBuilder::new();
    let image = if is_jeq { program.jeq(1) } else { program.jne(1) }.build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.set_reg(1, 0x20);
    ctx.cpu.equal = flag;

    let _ = ctx.step();

    assert_eq!(ctx.cpu.pc, expected_pc);
    assert_eq!(ctx.cpu.equal, flag);
}

#[rstest]
#[case::jeq_after_equal(true, 5, 5, 20)]
#[case::jeq_after_unequal(true, 5, 6, 14)]
#[case::jne_after_equal(false, 5, 5, 14)]
#[case::jne_after_unequal(false, 5, 6, 20)]
fn test_cmp_then_conditional_branch(
    #[case] is_jeq: bool,
    #[case] a: u8,
    #[case] b: u8,
    #[case] expected_pc: u8,
) {
    // 0: LDI R0,a  3: LDI R1,b  6: LDI R2,20  9: CMP R0,R1  12: JEQ/JNE R2
    // 14: LDI R3,1  17: PRN R3  19: HLT
    // 20: LDI R3,2  23: PRN R3  25: HLT
    let program = ProgramBuilder::new().ldi(0, a).ldi(1, b).ldi(2, 20).cmp(0, 1);
    let program = if is_jeq { program.jeq(2) } else { program.jne(2) };
    let image = program
        .ldi(3, 1)
        .prn(3)
        .hlt()
        .ldi(3, 2)
        .prn(3)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    ctx.step_n(5);
    assert_eq!(ctx.cpu.pc, expected_pc);
    ctx.run().unwrap();

    let taken = expected_pc == 20;
    assert_eq!(ctx.printed(), vec![if taken { 2 } else { 1 }]);
    assert_eq!(ctx.cpu.stats.branches_taken, u64::from(taken));
    assert_eq!(ctx.cpu.stats.branches_not_taken, u64::from(!taken));
}

#[test]
fn test_call_pushes_return_address_and_jumps() {
    let image = ProgramBuilder::new().ldi(1, 0x30).call(1).build();
    let mut ctx = TestContext::new().load_program(&image);

    ctx.step_n(2);

    assert_eq!(ctx.cpu.pc, 0x30);
    assert_eq!(ctx.cpu.sp(), SP_INIT - 1);
    assert_eq!(ctx.cpu.ram_read(SP_INIT - 1), 5);
}

#[test]
fn test_ret_pops_into_pc() {
    let image = ProgramBuilder::new().ret().build();
    let mut ctx = TestContext::new().load_program(&image);
    ctx.cpu.regs.set_sp(0xF0);
    ctx.cpu.ram_write(0xF0, 0x77);

    assert_eq!(ctx.step(), Control::Jump(0x77));
    assert_eq!(ctx.cpu.pc, 0x77);
    assert_eq!(ctx.cpu.sp(), 0xF1);
}

#[test]
fn test_call_r7_jumps_to_decremented_sp() {
    let image = ProgramBuilder::new().call(7).build();
    let mut ctx = TestContext::new().load_program(&image);

    let _ = ctx.step();

    assert_eq!(ctx.cpu.pc, SP_INIT - 1);
    assert_eq!(ctx.cpu.ram_read(SP_INIT - 1), 2);
}

#[test]
fn test_call_with_full_stack_overflows() {
    let mut config = Config::default();
    config.general.initial_sp = 0;
    let image = ProgramBuilder::new().call(0).build();
    let mut ctx = TestContext::with_config(&config).load_program(&image);

    let err = ctx.cpu.step().unwrap_err();

    assert!(matches!(err, VmError::StackOverflow { pc: 0 }), "{err}");
    assert_eq!(ctx.cpu.pc, 0);
}

#[test]
fn test_ret_with_sp_255_underflows() {
    let mut config = Config::default();
    config.general.initial_sp = 0xFF;
    let image = ProgramBuilder::new().ret().build();
    let mut ctx = TestContext::with_config(&config).load_program(&image);

    let err = ctx.cpu.step().unwrap_err();

    assert!(matches!(err, VmError::StackUnderflow { pc: 0 }), "{err}");
    assert_eq!(ctx.cpu.pc, 0);
}

#[test]
fn test_subroutine_doubles_value() {
    // 0: LDI R1,11  3: LDI R0,10  6: CALL R1  8: PRN R0  10: HLT
    // 11: ADD R0,R0  14: RET
    let image = ProgramBuilder::new()
        .ldi(1, 11)
        .ldi(0, 10)
        .call(1)
        .prn(0)
        .hlt()
        .add(0, 0)
        .ret()
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    ctx.run().unwrap();

    assert_eq!(ctx.output(), "20\n");
    assert_eq!(ctx.cpu.sp(), SP_INIT);
}

#[test]
fn test_nested_calls_unwind_in_order() {
    // 0: LDI R1,a  3: LDI R2,b  6: CALL R1  8: PRN R0  10: HLT
    // a: LDI R0,1  CALL R2  ADD R0,R0  RET
    // b: LDI R3,5  ADD R0,R3  RET
    let a = 11;
    let b = a + 3 + 2 + 3 + 1;
    let image = ProgramBuilder::new()
        .ldi(1, a)
        .ldi(2, b)
        .call(1)
        .prn(0)
        .hlt()
        .ldi(0, 1)
        .call(2)
        .add(0, 0)
        .ret()
        .ldi(3, 5)
        .add(0, 3)
        .ret()
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    ctx.run().unwrap();

    assert_eq!(ctx.printed(), vec![12]);
    assert_eq!(ctx.cpu.sp(), SP_INIT);
}

#[test]
fn test_counting_loop() {
    // 0: LDI R0,0  3: LDI R1,1  6: LDI R2,3  9: LDI R3,12
    // 12: ADD R0,R1  15: PRN R0  17: CMP R0,R2  20: JNE R3  22: HLT
    let image = ProgramBuilder::new()
        .ldi(0, 0)
        .ldi(1, 1)
        .ldi(2, 3)
        .ldi(3, 12)
        .add(0, 1)
        .prn(0)
        .cmp(0, 2)
        .jne(3)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&image);

    ctx.run().unwrap();

    assert_eq!(ctx.output(), "1\n2\n3\n");
    assert_eq!(ctx.cpu.stats.branches_taken, 2);
    assert_eq!(ctx.cpu.stats.branches_not_taken, 1);
}

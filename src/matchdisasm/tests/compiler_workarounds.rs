/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use matchdisasm::{
    addresses::{AddressRange, Rom, RomVramRange, Size, Vram},
    config::{Compiler, Endian, GlobalConfig},
    context::ContextBuilder,
    isa::{InstructionDisplayFlags, InstructionFlags, IsaVersion},
    parent_segment_info::ParentSegmentInfo,
    sections::ExecutableSectionSettings,
    symbols::display::FunctionDisplaySettings,
};

fn disassemble_function(bytes: &[u8], compiler: Option<Compiler>) -> String {
    let rom = Rom::new(0x1000);
    let vram = Vram::new(0x80000000);
    let size = Size::new(0x1000);

    let text_settings =
        ExecutableSectionSettings::new(compiler, InstructionFlags::new(IsaVersion::MIPS_III));
    let global_config = GlobalConfig::new(Endian::Big);
    let global_ranges = RomVramRange::new(
        AddressRange::new(rom, rom + size),
        AddressRange::new(vram, vram + size),
    );

    let mut context = ContextBuilder::new(global_config, global_ranges).build();

    let section_text = context
        .create_section_text(
            &text_settings,
            "test".into(),
            bytes,
            rom,
            vram,
            ParentSegmentInfo::new(rom, vram, None),
        )
        .unwrap();
    let section_text_processed = section_text.post_process(&mut context).unwrap();

    let function_display_settings = FunctionDisplaySettings::new(InstructionDisplayFlags::new());
    section_text_processed.functions()[0]
        .display(&function_display_settings)
        .to_string()
}

static DIV_TRAP_BYTES: [u8; 7 * 4] = [
    0x00, 0x85, 0x00, 0x1A, // div   $zero, $a0, $a1
    0x14, 0xA0, 0x00, 0x02, // bnez  $a1, . + 0xC
    0x00, 0x00, 0x00, 0x00, //  nop
    0x00, 0x07, 0x00, 0x0D, // break 7
    0x00, 0x00, 0x10, 0x12, // mflo  $v0
    0x03, 0xE0, 0x00, 0x08, // jr    $ra
    0x00, 0x00, 0x00, 0x00, //  nop
];

#[test]
fn sn64_div_trap_collapses_to_plain_div() {
    let func_display = disassemble_function(&DIV_TRAP_BYTES, Some(Compiler::SN64));
    println!("{}", func_display);

    assert_eq!(
        func_display,
        "\
glabel func_80000000
    div         $a0, $a1
    mflo        $v0
    jr          $ra
    nop
"
    );
}

#[test]
fn psyq_gets_the_same_div_fixup() {
    let func_display = disassemble_function(&DIV_TRAP_BYTES, Some(Compiler::PSYQ));

    assert!(func_display.contains("div         $a0, $a1"));
    assert!(!func_display.contains("break"));
    assert!(!func_display.contains("bnez"));
}

#[test]
fn other_compilers_keep_the_expansion() {
    let func_display = disassemble_function(&DIV_TRAP_BYTES, Some(Compiler::IDO));
    println!("{}", func_display);

    // Without the workaround the trap stays visible, rendered with the
    // explicit $zero so the assembler doesn't re-expand it.
    assert!(func_display.contains("div         $zero, $a0, $a1"));
    assert!(func_display.contains("break       7"));
    assert!(func_display.contains(".L80000010:"));
}

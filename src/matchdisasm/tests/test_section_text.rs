/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use matchdisasm::{
    addresses::{AddressRange, Rom, RomVramRange, Size, Vram},
    config::{Endian, GlobalConfig},
    context::ContextBuilder,
    isa::{InstructionDisplayFlags, InstructionFlags, IsaVersion},
    parent_segment_info::ParentSegmentInfo,
    sections::ExecutableSectionSettings,
    symbols::display::FunctionDisplaySettings,
    symbols::Symbol,
};

#[test]
fn test_section_text_1() {
    let bytes = [
        // 0x80000400
        0x27, 0xBD, 0xFF, 0xE8, // addiu
        0xAF, 0xB0, 0x00, 0x10, // sw
        0xAF, 0xBF, 0x00, 0x14, // sw
        0x0C, 0x00, 0x01, 0x3F, // jal
        0x00, 0x80, 0x80, 0x21, //  addu
        0x0C, 0x00, 0x01, 0x3F, // jal
        0x02, 0x00, 0x20, 0x21, //  addu
        0x3C, 0x03, 0x80, 0x1A, // lui
        0x8C, 0x63, 0x6D, 0x7C, // lw
        0x24, 0x02, 0x00, 0x02, // addiu
        0x14, 0x62, 0x00, 0x08, // bne
        0x00, 0x00, 0x00, 0x00, //  nop
        0x0C, 0x00, 0x01, 0x3F, // jal
        0x02, 0x00, 0x20, 0x21, //  addu
        0x8F, 0xBF, 0x00, 0x14, // lw
        0x8F, 0xB0, 0x00, 0x10, // lw
        0x27, 0xBD, 0x00, 0x18, // addiu
        0x03, 0xE0, 0x00, 0x08, // jr
        0x00, 0x00, 0x00, 0x00, //  nop
        0x8F, 0xBF, 0x00, 0x14, // lw
        0x8F, 0xB0, 0x00, 0x10, // lw
        0x27, 0xBD, 0x00, 0x18, // addiu
        0x03, 0xE0, 0x00, 0x08, // jr
        0x00, 0x00, 0x00, 0x00, //  nop
        // 0x80000460
        0x27, 0xBD, 0xFF, 0xD0, // addiu
        0x3C, 0x04, 0x01, 0x07, // lui
        0x24, 0x84, 0x7C, 0x60, // addiu
        0xAF, 0xB1, 0x00, 0x24, // sw
        0x3C, 0x11, 0x80, 0x1C, // lui
        0x8E, 0x31, 0x70, 0xB0, // lw
        0x3C, 0x05, 0x01, 0x08, // lui
        0x24, 0xA5, 0x35, 0xA0, // addiu
        0x00, 0xA4, 0x28, 0x23, // subu
        0xAF, 0xBF, 0x00, 0x28, // sw
        0x0C, 0x02, 0x66, 0x00, // jal
        0xAF, 0xB0, 0x00, 0x20, //  sw
        0x3C, 0x04, 0x00, 0x58, // lui
        0x24, 0x84, 0x1D, 0xF0, // addiu
        0x3C, 0x10, 0x00, 0x59, // lui
        0x26, 0x10, 0xD7, 0x30, // addiu
        0x02, 0x04, 0x80, 0x23, // subu
        0x02, 0x00, 0x30, 0x21, // addu
        0x0C, 0x00, 0x04, 0xC4, // jal
        0x02, 0x20, 0x28, 0x21, //  addu
        0x02, 0x20, 0x20, 0x21, // addu
        0x3C, 0x02, 0x80, 0x1C, // lui
        0x8C, 0x42, 0x70, 0xB0, // lw
        0x24, 0x05, 0xFF, 0xFF, // addiu
        0x00, 0x00, 0x30, 0x21, // addu
        0xAF, 0xA0, 0x00, 0x10, // sw
        0xAF, 0xA0, 0x00, 0x14, // sw
        0xAF, 0xA0, 0x00, 0x18, // sw
        0x00, 0x50, 0x10, 0x21, // addu
        0x3C, 0x01, 0x80, 0x1C, // lui
        0xAC, 0x22, 0x70, 0xB0, // sw
        0x0C, 0x01, 0x39, 0x39, // jal
        0x24, 0x07, 0x00, 0x02, //  addiu
        0x8F, 0xBF, 0x00, 0x28, // lw
        0x8F, 0xB1, 0x00, 0x24, // lw
        0x8F, 0xB0, 0x00, 0x20, // lw
        0x27, 0xBD, 0x00, 0x30, // addiu
        0x03, 0xE0, 0x00, 0x08, // jr
        0x00, 0x00, 0x00, 0x00, //  nop
        // 0x800004FC
        0x27, 0xBD, 0xFF, 0xE8, // addiu
        0xAF, 0xBF, 0x00, 0x10, // sw
        0x3C, 0x01, 0x80, 0x22, // lui
        0xAC, 0x20, 0xAD, 0x28, // sw
        0x0C, 0x01, 0xD2, 0xBB, // jal
        0x00, 0x00, 0x00, 0x00, //  nop
        0x8F, 0xBF, 0x00, 0x10, // lw
        0x27, 0xBD, 0x00, 0x18, // addiu
        0x03, 0xE0, 0x00, 0x08, // jr
        0x00, 0x00, 0x00, 0x00, //  nop
    ];
    let rom = Rom::new(0x001050);
    let vram = Vram::new(0x80000400);
    let size = Size::new(0x21FC00);

    let text_settings =
        ExecutableSectionSettings::new(None, InstructionFlags::new(IsaVersion::MIPS_III));

    let global_config = GlobalConfig::new(Endian::Big);
    let global_ranges = RomVramRange::new(
        AddressRange::new(rom, rom + size),
        AddressRange::new(vram, vram + size),
    );

    let mut context = {
        let mut builder = ContextBuilder::new(global_config, global_ranges);
        builder.preheat_text(&text_settings, &bytes, rom, vram);
        builder.build()
    };

    let parent_segment_info = ParentSegmentInfo::new(rom, vram, None);
    let section_text = context
        .create_section_text(
            &text_settings,
            "test".into(),
            &bytes,
            rom,
            vram,
            parent_segment_info,
        )
        .unwrap();

    assert_eq!(section_text.functions().len(), 3);
    assert_eq!(
        section_text.functions()[0].vram_range().start(),
        Vram::new(0x80000400),
    );
    assert_eq!(
        section_text.functions()[1].vram_range().start(),
        Vram::new(0x80000460),
    );
    assert_eq!(
        section_text.functions()[2].vram_range().start(),
        Vram::new(0x800004FC),
    );

    let symbols = context.global_segment().symbols();
    for (vram, sym) in symbols {
        println!("{:?} {}", vram, sym);
    }
    assert_eq!(symbols.len(), 11);

    let section_text_processed = section_text.post_process(&mut context).unwrap();

    let function_display_settings = FunctionDisplaySettings::new(InstructionDisplayFlags::new());
    let func_display = section_text_processed.functions()[0]
        .display(&function_display_settings)
        .to_string();
    println!("{}", func_display);

    let expected = "\
glabel func_80000400
    addiu       $sp, $sp, -0x18
    sw          $s0, 0x10($sp)
    sw          $ra, 0x14($sp)
    jal         func_800004FC
    move        $s0, $a0
    jal         func_800004FC
    move        $a0, $s0
    lui         $v1, %hi(D_801A6D7C)
    lw          $v1, %lo(D_801A6D7C)($v1)
    li          $v0, 0x2
    bne         $v1, $v0, .L8000044C
    nop
    jal         func_800004FC
    move        $a0, $s0
    lw          $ra, 0x14($sp)
    lw          $s0, 0x10($sp)
    addiu       $sp, $sp, 0x18
    jr          $ra
    nop
.L8000044C:
    lw          $ra, 0x14($sp)
    lw          $s0, 0x10($sp)
    addiu       $sp, $sp, 0x18
    jr          $ra
    nop
";
    assert_eq!(func_display, expected);
}

#[test]
fn simple_function_with_hi_lo_pair() {
    let bytes = [
        0x3C, 0x1C, 0x80, 0x00, // lui
        0x27, 0x9C, 0x00, 0x10, // addiu
        0x03, 0xE0, 0x00, 0x08, // jr
        0x00, 0x00, 0x00, 0x00, //  nop
    ];
    let rom = Rom::new(0x001000);
    let vram = Vram::new(0x80000000);
    let size = Size::new(0x1000);

    let text_settings =
        ExecutableSectionSettings::new(None, InstructionFlags::new(IsaVersion::MIPS_III));
    let global_config = GlobalConfig::new(Endian::Big);
    let global_ranges = RomVramRange::new(
        AddressRange::new(rom, rom + size),
        AddressRange::new(vram, vram + size),
    );

    let mut context = ContextBuilder::new(global_config, global_ranges).build();

    let parent_segment_info = ParentSegmentInfo::new(rom, vram, None);
    let section_text = context
        .create_section_text(
            &text_settings,
            "test".into(),
            &bytes,
            rom,
            vram,
            parent_segment_info,
        )
        .unwrap();

    assert_eq!(section_text.functions().len(), 1);
    assert!(section_text.functions()[0]
        .referenced_vrams()
        .contains(&Vram::new(0x80000010)));

    let section_text_processed = section_text.post_process(&mut context).unwrap();

    let function_display_settings = FunctionDisplaySettings::new(InstructionDisplayFlags::new());
    let func_display = section_text_processed.functions()[0]
        .display(&function_display_settings)
        .to_string();

    let expected = "\
glabel func_80000000
    lui         $gp, %hi(D_80000010)
    addiu       $gp, $gp, %lo(D_80000010)
    jr          $ra
    nop
";
    assert_eq!(func_display, expected);
}

#[test]
fn unpaired_address_keeps_its_raw_immediate() {
    // The `lui`/`addiu` pair reconstructs 0x01077C60, which is outside of
    // every known range.
    let bytes = [
        0x3C, 0x04, 0x01, 0x07, // lui
        0x24, 0x84, 0x7C, 0x60, // addiu
        0x03, 0xE0, 0x00, 0x08, // jr
        0x00, 0x00, 0x00, 0x00, //  nop
    ];
    let rom = Rom::new(0x001000);
    let vram = Vram::new(0x80000000);
    let size = Size::new(0x1000);

    let text_settings =
        ExecutableSectionSettings::new(None, InstructionFlags::new(IsaVersion::MIPS_III));
    let global_config = GlobalConfig::new(Endian::Big);
    let global_ranges = RomVramRange::new(
        AddressRange::new(rom, rom + size),
        AddressRange::new(vram, vram + size),
    );

    let mut context = ContextBuilder::new(global_config, global_ranges).build();

    let parent_segment_info = ParentSegmentInfo::new(rom, vram, None);
    let section_text = context
        .create_section_text(
            &text_settings,
            "test".into(),
            &bytes,
            rom,
            vram,
            parent_segment_info,
        )
        .unwrap();

    let section_text_processed = section_text.post_process(&mut context).unwrap();

    let function_display_settings = FunctionDisplaySettings::new(InstructionDisplayFlags::new());
    let func_display = section_text_processed.functions()[0]
        .display(&function_display_settings)
        .to_string();

    let expected = "\
glabel func_80000000
    lui         $a0, 0x107
    addiu       $a0, $a0, 0x7C60
    jr          $ra
    nop
";
    assert_eq!(func_display, expected);
}

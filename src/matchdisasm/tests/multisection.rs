/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use matchdisasm::{
    addresses::{AddressRange, Rom, RomVramRange, Size, Vram},
    config::{Endian, GlobalConfig},
    context::ContextBuilder,
    isa::{InstructionDisplayFlags, InstructionFlags, IsaVersion},
    metadata::{AutogenPrefixMode, SymbolNameGenerationSettings, SymbolType},
    migration::FuncRodataPairing,
    parent_segment_info::ParentSegmentInfo,
    sections::{DataSectionSettings, ExecutableSectionSettings, NoloadSectionSettings},
    symbols::display::{FunctionDisplaySettings, SymDataDisplaySettings, SymNoloadDisplaySettings},
    symbols::Symbol,
};

static TEXT_BYTES: [u8; 0x44] = [
    // func_80000100: loads a string and writes to a bss word
    0x3C, 0x04, 0x80, 0x01, // lui   $a0, %hi(STR_80010000)
    0x24, 0x84, 0x00, 0x00, // addiu $a0, $a0, %lo(STR_80010000)
    0x3C, 0x02, 0x80, 0x02, // lui   $v0, %hi(B_80020000)
    0xAC, 0x40, 0x00, 0x00, // sw    $zero, %lo(B_80020000)($v0)
    0x03, 0xE0, 0x00, 0x08, // jr    $ra
    0x00, 0x00, 0x00, 0x00, //  nop
    // func_80000118: a switch driven by a jumptable
    0x3C, 0x08, 0x80, 0x01, // lui   $t0, %hi(jtbl_80010008)
    0x01, 0x0E, 0x40, 0x21, // addu  $t0, $t0, $t6
    0x8D, 0x08, 0x00, 0x08, // lw    $t0, %lo(jtbl_80010008)($t0)
    0x01, 0x00, 0x00, 0x08, // jr    $t0
    0x00, 0x00, 0x00, 0x00, //  nop
    0x10, 0x00, 0x00, 0x03, // b     L8000013C
    0x00, 0x00, 0x00, 0x00, //  nop
    0x10, 0x00, 0x00, 0x01, // b     L8000013C
    0x00, 0x00, 0x00, 0x00, //  nop
    0x03, 0xE0, 0x00, 0x08, // jr    $ra
    0x00, 0x00, 0x00, 0x00, //  nop
];

static RODATA_BYTES: [u8; 0x14] = [
    // STR_80010000
    0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x00, 0x00, 0x00, // "Hello" + padding
    // jtbl_80010008
    0x80, 0x00, 0x01, 0x2C, //
    0x80, 0x00, 0x01, 0x34, //
    0x80, 0x00, 0x01, 0x3C, //
];

const TEXT_ROM: Rom = Rom::new(0x1000);
const TEXT_VRAM: Vram = Vram::new(0x80000100);
const RODATA_ROM: Rom = Rom::new(0x2000);
const RODATA_VRAM: Vram = Vram::new(0x80010000);
const BSS_VRAM: Vram = Vram::new(0x80020000);

fn make_context() -> (
    matchdisasm::context::Context,
    ExecutableSectionSettings,
    DataSectionSettings,
    ParentSegmentInfo,
) {
    let global_config = GlobalConfig::new(Endian::Big).with_name_generation(
        SymbolNameGenerationSettings::new().with_prefix_mode(AutogenPrefixMode::Type),
    );
    let global_ranges = RomVramRange::new(
        AddressRange::new(Rom::new(0x0), Rom::new(0x21000)),
        AddressRange::new(Vram::new(0x80000000), Vram::new(0x80021000)),
    );

    let text_settings =
        ExecutableSectionSettings::new(None, InstructionFlags::new(IsaVersion::MIPS_III));
    let data_settings = DataSectionSettings::new(None);

    let mut builder = ContextBuilder::new(global_config, global_ranges);
    builder.preheat_text(&text_settings, &TEXT_BYTES, TEXT_ROM, TEXT_VRAM);
    builder.preheat_data(&data_settings, &RODATA_BYTES, RODATA_ROM, RODATA_VRAM);

    let parent_segment_info = ParentSegmentInfo::new(TEXT_ROM, TEXT_VRAM, None);

    (builder.build(), text_settings, data_settings, parent_segment_info)
}

#[test]
fn multisection_analysis_and_migration() {
    let (mut context, text_settings, data_settings, parent_segment_info) = make_context();

    let section_text = context
        .create_section_text(
            &text_settings,
            "test_text".into(),
            &TEXT_BYTES,
            TEXT_ROM,
            TEXT_VRAM,
            parent_segment_info.clone(),
        )
        .unwrap();

    assert_eq!(section_text.functions().len(), 2);

    let section_rodata = context
        .create_section_rodata(
            &data_settings,
            "test_rodata".into(),
            &RODATA_BYTES,
            RODATA_ROM,
            RODATA_VRAM,
            parent_segment_info.clone(),
        )
        .unwrap();

    assert_eq!(section_rodata.data_symbols().len(), 2);

    let section_bss = context
        .create_section_bss(
            &NoloadSectionSettings::new(None),
            "test_bss".into(),
            AddressRange::new(BSS_VRAM, BSS_VRAM + Size::new(0x100)),
            parent_segment_info.clone(),
        )
        .unwrap();

    assert_eq!(section_bss.noload_symbols().len(), 1);

    // The string was typed and got a typed autogenerated name.
    {
        let segment = context.global_segment();
        let string_sym = segment
            .find_symbol(
                RODATA_VRAM,
                matchdisasm::collections::addended_ordered_map::FindSettings::new(false),
            )
            .unwrap();
        assert_eq!(string_sym.sym_type(), Some(SymbolType::CString));

        let jumptable_sym = segment
            .find_symbol(
                Vram::new(0x80010008),
                matchdisasm::collections::addended_ordered_map::FindSettings::new(false),
            )
            .unwrap();
        assert_eq!(jumptable_sym.sym_type(), Some(SymbolType::Jumptable));
        assert_eq!(jumptable_sym.table_labels().len(), 3);
    }

    // Each rodata symbol is referenced by exactly one function, so both
    // migrate.
    let pairings =
        FuncRodataPairing::pair_sections(&context, Some(&section_text), Some(&section_rodata));
    assert_eq!(
        pairings,
        vec![
            FuncRodataPairing::Pairing {
                function_index: 0,
                rodata_indices: vec![0],
                late_rodata_indices: vec![],
            },
            FuncRodataPairing::Pairing {
                function_index: 1,
                rodata_indices: vec![1],
                late_rodata_indices: vec![],
            },
        ]
    );

    let section_text_processed = section_text.post_process(&mut context).unwrap();
    let section_rodata_processed = section_rodata.post_process(&mut context).unwrap();
    let section_bss_processed = section_bss.post_process(&mut context).unwrap();

    let function_display_settings = FunctionDisplaySettings::new(InstructionDisplayFlags::new());
    let data_display_settings = SymDataDisplaySettings::new();

    let func0_display = section_text_processed.functions()[0]
        .display(&function_display_settings)
        .to_string();
    println!("{}", func0_display);
    assert_eq!(
        func0_display,
        "\
glabel func_80000100
    lui         $a0, %hi(STR_80010000)
    addiu       $a0, $a0, %lo(STR_80010000)
    lui         $v0, %hi(B_80020000)
    sw          $zero, %lo(B_80020000)($v0)
    jr          $ra
    nop
"
    );

    let func1_display = section_text_processed.functions()[1]
        .display(&function_display_settings)
        .to_string();
    println!("{}", func1_display);
    assert_eq!(
        func1_display,
        "\
glabel func_80000118
    lui         $t0, %hi(jtbl_80010008)
    addu        $t0, $t0, $t6
    lw          $t0, %lo(jtbl_80010008)($t0)
    jr          $t0
    nop
L8000012C:
    b           L8000013C
    nop
L80000134:
    b           L8000013C
    nop
L8000013C:
    jr          $ra
    nop
"
    );

    let string_display = section_rodata_processed.data_symbols()[0]
        .display(&data_display_settings)
        .to_string();
    println!("{}", string_display);
    assert_eq!(
        string_display,
        "glabel STR_80010000\n.asciz \"Hello\"\n.balign 4\n"
    );

    let jumptable_display = section_rodata_processed.data_symbols()[1]
        .display(&data_display_settings)
        .to_string();
    println!("{}", jumptable_display);
    assert_eq!(
        jumptable_display,
        "glabel jtbl_80010008\n.word L8000012C\n.word L80000134\n.word L8000013C\n"
    );

    let bss_display = section_bss_processed.noload_symbols()[0]
        .display(&SymNoloadDisplaySettings::new())
        .to_string();
    assert_eq!(bss_display, "glabel B_80020000\n.space 0x100\n");

    // Rendering a pairing puts the migrated rodata next to its function.
    let pairing_display = pairings[0]
        .display(
            Some(&section_text_processed),
            &function_display_settings,
            Some(&section_rodata_processed),
            &data_display_settings,
            Some(".section .text".into()),
            Some(".section .rodata".into()),
        )
        .unwrap()
        .to_string();
    println!("{}", pairing_display);
    assert!(pairing_display.starts_with(".section .rodata\nglabel STR_80010000\n"));
    assert!(pairing_display.contains(".section .text\nglabel func_80000100\n"));
}

#[test]
fn bss_sizes_come_from_text_references() {
    let (mut context, text_settings, _data_settings, parent_segment_info) = make_context();

    let _section_text = context
        .create_section_text(
            &text_settings,
            "test_text".into(),
            &TEXT_BYTES,
            TEXT_ROM,
            TEXT_VRAM,
            parent_segment_info.clone(),
        )
        .unwrap();

    // Only 0x80020000 is referenced from text, so the whole range belongs to
    // that single symbol.
    let section_bss = context
        .create_section_bss(
            &NoloadSectionSettings::new(None),
            "test_bss".into(),
            AddressRange::new(BSS_VRAM, BSS_VRAM + Size::new(0x100)),
            parent_segment_info.clone(),
        )
        .unwrap();

    assert_eq!(section_bss.noload_symbols().len(), 1);
    assert_eq!(
        section_bss.noload_symbols()[0].vram_range().size(),
        Size::new(0x100)
    );
}

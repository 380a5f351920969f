/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::borrow::Cow;
use core::fmt;

use crate::sections::{DataSectionProcessed, ExecutableSectionProcessed};
use crate::symbols::display::{FunctionDisplaySettings, SymDataDisplaySettings};

use super::{FuncRodataPairing, PairingError};

impl FuncRodataPairing {
    /// Render this entry: the function body followed by the rodata migrated
    /// into it, with optional section switch labels in-between.
    #[allow(clippy::too_many_arguments)]
    pub fn display<'pairing, 'text, 'text_settings, 'rodata, 'rodata_settings, 'label>(
        &'pairing self,
        text_section: Option<&'text ExecutableSectionProcessed>,
        function_display_settings: &'text_settings FunctionDisplaySettings,
        rodata_section: Option<&'rodata DataSectionProcessed>,
        rodata_display_settings: &'rodata_settings SymDataDisplaySettings,
        section_label_text: Option<Cow<'label, str>>,
        section_label_rodata: Option<Cow<'label, str>>,
    ) -> Result<
        FuncRodataPairingDisplay<
            'pairing,
            'text,
            'text_settings,
            'rodata,
            'rodata_settings,
            'label,
        >,
        PairingError,
    > {
        // Validate the indices early so the Display impl can't fail.
        match self {
            FuncRodataPairing::SingleFunction { function_index }
            | FuncRodataPairing::Pairing { function_index, .. } => {
                let text_section = text_section.ok_or(PairingError::MissingTextSection)?;
                let len = text_section.functions().len();
                if *function_index >= len {
                    return Err(PairingError::FunctionOutOfBounds {
                        index: *function_index,
                        len,
                        section_name: crate::sections::Section::name(text_section),
                    });
                }
            }
            FuncRodataPairing::SingleRodata { .. } => {}
        }
        match self {
            FuncRodataPairing::SingleRodata { rodata_index } => {
                let rodata_section = rodata_section.ok_or(PairingError::MissingRodataSection)?;
                let len = rodata_section.data_symbols().len();
                if *rodata_index >= len {
                    return Err(PairingError::RodataOutOfBounds {
                        index: *rodata_index,
                        len,
                        section_name: crate::sections::Section::name(rodata_section),
                    });
                }
            }
            FuncRodataPairing::Pairing {
                rodata_indices,
                late_rodata_indices,
                ..
            } => {
                let rodata_section = rodata_section.ok_or(PairingError::MissingRodataSection)?;
                let len = rodata_section.data_symbols().len();
                for index in rodata_indices.iter().chain(late_rodata_indices.iter()) {
                    if *index >= len {
                        return Err(PairingError::RodataOutOfBounds {
                            index: *index,
                            len,
                            section_name: crate::sections::Section::name(rodata_section),
                        });
                    }
                }
            }
            FuncRodataPairing::SingleFunction { .. } => {}
        }

        Ok(FuncRodataPairingDisplay {
            pairing: self,
            text_section,
            function_display_settings,
            rodata_section,
            rodata_display_settings,
            section_label_text,
            section_label_rodata,
        })
    }
}

pub struct FuncRodataPairingDisplay<
    'pairing,
    'text,
    'text_settings,
    'rodata,
    'rodata_settings,
    'label,
> {
    pairing: &'pairing FuncRodataPairing,
    text_section: Option<&'text ExecutableSectionProcessed>,
    function_display_settings: &'text_settings FunctionDisplaySettings,
    rodata_section: Option<&'rodata DataSectionProcessed>,
    rodata_display_settings: &'rodata_settings SymDataDisplaySettings,
    section_label_text: Option<Cow<'label, str>>,
    section_label_rodata: Option<Cow<'label, str>>,
}

impl fmt::Display for FuncRodataPairingDisplay<'_, '_, '_, '_, '_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_end = self.function_display_settings.line_end();

        let rodata_indices: &[usize] = match self.pairing {
            FuncRodataPairing::SingleFunction { .. } => &[],
            FuncRodataPairing::SingleRodata { rodata_index } => {
                core::slice::from_ref(rodata_index)
            }
            FuncRodataPairing::Pairing { rodata_indices, .. } => rodata_indices,
        };
        let late_rodata_indices: &[usize] = match self.pairing {
            FuncRodataPairing::Pairing {
                late_rodata_indices,
                ..
            } => late_rodata_indices,
            _ => &[],
        };

        // Rodata goes first, preserving original section ordering: the
        // assembler sees the literals before the code that uses them, except
        // for late rodata which the original compiler emitted after.
        if !rodata_indices.is_empty() {
            if let (Some(label), Some(_)) = (&self.section_label_rodata, &self.rodata_section) {
                write!(f, "{}{}", label, line_end)?;
            }
            if let Some(rodata_section) = self.rodata_section {
                for rodata_index in rodata_indices {
                    let sym = &rodata_section.data_symbols()[*rodata_index];
                    write!(f, "{}{}", sym.display(self.rodata_display_settings), line_end)?;
                }
            }
        }

        if let (
            FuncRodataPairing::SingleFunction { function_index }
            | FuncRodataPairing::Pairing { function_index, .. },
            Some(text_section),
        ) = (self.pairing, self.text_section)
        {
            if let Some(label) = &self.section_label_text {
                write!(f, "{}{}", label, line_end)?;
            }
            let function = &text_section.functions()[*function_index];
            write!(f, "{}", function.display(self.function_display_settings))?;
        }

        if !late_rodata_indices.is_empty() {
            if let Some(rodata_section) = self.rodata_section {
                if let Some(label) = &self.section_label_rodata {
                    write!(f, "{}{}", label, line_end)?;
                }
                for rodata_index in late_rodata_indices {
                    let sym = &rodata_section.data_symbols()[*rodata_index];
                    write!(f, "{}{}", sym.display(self.rodata_display_settings), line_end)?;
                }
            }
        }

        Ok(())
    }
}

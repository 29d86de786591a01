use log::info;
use text_conversion_source::CharacterTable;

use crate::config::CompilerConfig;
use crate::error::PrepareError;
use crate::tables::{self, ConversionTables};

/// загружаем данные UCD и готовим рабочую таблицу: вырезаем диапазоны, строим индекс названий,
/// применяем ручные замены
pub fn load(
    unicode_data: &str,
    case_folding: &str,
    config: &CompilerConfig,
) -> Result<CharacterTable, PrepareError>
{
    info!("читаем UnicodeData");
    let mut table = CharacterTable::new();
    table.load_unicode_data(unicode_data)?;

    info!("читаем CaseFolding");
    table.load_case_folding(case_folding)?;

    for excluded in config.excluded_ranges.iter() {
        let removed = table.remove_range(excluded.range.clone());
        info!("вырезаем {}: {} символов", excluded.name, removed);
    }

    info!("строим индекс названий");
    table.build_name_index();

    for replacement in config.overrides.iter() {
        table.register_override(replacement.from, replacement.to)?;
    }

    Ok(table)
}

/// полный цикл: рабочая таблица и таблицы преобразования
pub fn compile(
    unicode_data: &str,
    case_folding: &str,
    config: &CompilerConfig,
) -> Result<(CharacterTable, ConversionTables), PrepareError>
{
    let mut table = load(unicode_data, case_folding, config)?;
    let tables = tables::prepare(&mut table, config)?;

    Ok((table, tables))
}

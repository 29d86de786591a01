use text_conversion_prepare::tables::ConversionTables;
use text_conversion_prepare::{compile, CompilerConfig};
use text_conversion_source::CharacterTable;

/// выборка из UnicodeData.txt
pub const UNICODE_DATA: &str = include_str!("./../../data/sample/UnicodeData.txt");
/// выборка из CaseFolding.txt
pub const CASE_FOLDING: &str = include_str!("./../../data/sample/CaseFolding.txt");

lazy_static! {
    /// таблицы, построенные по выборке с настройками по умолчанию
    pub static ref SAMPLE: (CharacterTable, ConversionTables) = match compile(
        UNICODE_DATA,
        CASE_FOLDING,
        &CompilerConfig::default()
    ) {
        Ok(compiled) => compiled,
        Err(error) => panic!("выборка UCD: {}", error),
    };

    /// исходные данные выборки без какой-либо подготовки
    pub static ref RAW: CharacterTable = match CharacterTable::from_sources(UNICODE_DATA, CASE_FOLDING) {
        Ok(table) => table,
        Err(error) => panic!("выборка UCD: {}", error),
    };
}

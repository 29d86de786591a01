use std::ops::RangeInclusive;

/// диапазон, вырезаемый из рабочей таблицы до построения таблиц
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedRange
{
    pub name: &'static str,
    pub range: RangeInclusive<u32>,
}

/// ручная замена при очистке строки, символы задаются названиями из UnicodeData.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override
{
    pub from: &'static str,
    pub to: &'static str,
}

macro_rules! excluded {
    ($name: expr, $range: expr) => {
        ExcludedRange {
            name: $name,
            range: $range,
        }
    };
}

macro_rules! replace {
    ($from: expr => $to: expr) => {
        Override {
            from: $from,
            to: $to,
        }
    };
}

lazy_static! {
    /// письменности, которые не поддерживаются
    pub static ref EXCLUDED_RANGES: Vec<ExcludedRange> = vec![
        excluded!("Glagolitic", 0x2C00 ..= 0x2C5E),
        excluded!("N'Ko", 0x07C0 ..= 0x07FF),
        excluded!("Coptic", 0x2C80 ..= 0x2CFF),
        excluded!("Balinese", 0x1B00 ..= 0x1B7F),
        excluded!("Tifinagh", 0x2D30 ..= 0x2D7F),
        excluded!("Cuneiform", 0x12000 ..= 0x123FF),
        excluded!("Phoenician", 0x10900 ..= 0x1091F),
        excluded!("Syloti Nagri", 0xA800 ..= 0xA82F),
        excluded!("Phags-pa", 0xA840 ..= 0xA87F),
        excluded!("Old Persian", 0x103A0 ..= 0x103DF),
        excluded!("Gothic", 0x10330 ..= 0x1034F),
        excluded!("Kharoshthi", 0x10A00 ..= 0x10A5F),
        excluded!("Ethiopic", 0x1200 ..= 0x137F),
        excluded!("Ethiopic Extended", 0x2D80 ..= 0x2DDF),
    ];

    /// замены, которых нет в данных Unicode
    pub static ref OVERRIDES: Vec<Override> = vec![
        // датский, норвежский
        replace!("LATIN CAPITAL LETTER O WITH STROKE" => "LATIN CAPITAL LETTER O"),
        replace!("LATIN SMALL LETTER O WITH STROKE" => "LATIN SMALL LETTER O"),
        replace!("LATIN CAPITAL LETTER AE" => "LATIN SMALL LETTER A"),
        replace!("LATIN SMALL LETTER AE" => "LATIN SMALL LETTER A"),
        // греческие буквы, похожие на латинские
        replace!("GREEK CAPITAL LETTER ALPHA" => "LATIN CAPITAL LETTER A"),
        replace!("GREEK CAPITAL LETTER BETA" => "LATIN CAPITAL LETTER B"),
        replace!("GREEK CAPITAL LETTER EPSILON" => "LATIN CAPITAL LETTER E"),
        replace!("GREEK CAPITAL LETTER ETA" => "LATIN CAPITAL LETTER H"),
        replace!("GREEK CAPITAL LETTER IOTA" => "LATIN CAPITAL LETTER I"),
        replace!("GREEK CAPITAL LETTER KAPPA" => "LATIN CAPITAL LETTER K"),
        replace!("GREEK CAPITAL LETTER OMICRON" => "LATIN CAPITAL LETTER O"),
        replace!("GREEK CAPITAL LETTER RHO" => "LATIN CAPITAL LETTER P"),
        replace!("GREEK CAPITAL LETTER TAU" => "LATIN CAPITAL LETTER T"),
        replace!("GREEK CAPITAL LETTER UPSILON" => "LATIN CAPITAL LETTER U"),
        replace!("GREEK CAPITAL LETTER ZETA" => "LATIN CAPITAL LETTER Z"),
        // польский
        replace!("LATIN CAPITAL LETTER L WITH STROKE" => "LATIN CAPITAL LETTER L"),
        replace!("LATIN SMALL LETTER L WITH STROKE" => "LATIN SMALL LETTER L"),
    ];
}

/// диапазон иероглифов CJK Unified Ideographs
pub const CJK_RANGE: RangeInclusive<u32> = 0x4E00 ..= 0x9FFF;

/// настройки компилятора таблиц
#[derive(Debug, Clone)]
pub struct CompilerConfig
{
    pub excluded_ranges: Vec<ExcludedRange>,
    pub overrides: Vec<Override>,
    pub cjk_range: RangeInclusive<u32>,
    /// записывать ли таблицу Latin-1 в выходные файлы
    pub latin1: bool,
}

impl Default for CompilerConfig
{
    fn default() -> Self
    {
        Self {
            excluded_ranges: EXCLUDED_RANGES.clone(),
            overrides: OVERRIDES.clone(),
            cjk_range: CJK_RANGE,
            latin1: false,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn stock_lists()
    {
        let config = CompilerConfig::default();

        assert_eq!(config.excluded_ranges.len(), 14);
        assert_eq!(config.overrides.len(), 17);
        assert_eq!(config.cjk_range, 0x4E00 ..= 0x9FFF);
        assert!(!config.latin1);

        // диапазоны не пересекаются с CJK
        assert!(config
            .excluded_ranges
            .iter()
            .all(|r| r.range.end() < config.cjk_range.start() || r.range.start() > config.cjk_range.end()));
    }
}

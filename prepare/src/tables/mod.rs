use std::ops::RangeInclusive;

use log::{debug, info};
use text_conversion_source::properties::{Codepoint, SimpleCaseMapping};
use text_conversion_source::CharacterTable;

use crate::config::CompilerConfig;
use crate::encode::{latin1_octal, utf8_octal, MAX_UNICODE_CODE};
use crate::error::PrepareError;
use crate::resolve::{Latin1, StripStrange};

mod cjk;

pub use cjk::inject_cjk;

/// таблица перевода в нижний регистр
pub const LOWER_TABLE: &str = "c_lowerTable";
/// таблица перевода в верхний регистр
pub const UPPER_TABLE: &str = "c_upperTable";
/// таблица очистки строки
pub const STRIP_STRANGE_TABLE: &str = "c_removeStrange";
/// таблица приведения к Latin-1
pub const LATIN1_TABLE: &str = "c_toLatin1";

/// в каком виде записывается результат преобразования
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEncoding
{
    Utf8,
    /// по одному байту на кодпоинт, все кодпоинты < 256
    Latin1,
}

/// запись таблицы: кодпоинт -> последовательность кодпоинтов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvEntry
{
    pub code: u32,
    pub target: Vec<u32>,
    /// количество ручных замен, примененных при разрешении
    pub overrides: u32,
}

impl ConvEntry
{
    pub fn new(code: u32, target: Vec<u32>, overrides: u32) -> Self
    {
        Self {
            code,
            target,
            overrides,
        }
    }

    /// строка и её длина в байтах - то, что получит пользователь таблицы
    pub fn encoded(&self, encoding: TargetEncoding) -> Result<(String, usize), PrepareError>
    {
        let mut result = String::new();
        let mut length = 0;

        for &code in self.target.iter() {
            let encoded = match encoding {
                TargetEncoding::Utf8 => utf8_octal(code)?,
                TargetEncoding::Latin1 => latin1_octal(code)?,
            };

            length += encoded.matches('\\').count();
            result.push_str(encoded.as_str());
        }

        Ok((result, length))
    }
}

/// готовая таблица преобразования, отсортированная по кодпоинтам
#[derive(Debug, Clone)]
pub struct ConvTable
{
    pub name: &'static str,
    pub description: &'static str,
    pub encoding: TargetEncoding,
    entries: Vec<ConvEntry>,
}

impl ConvTable
{
    /// записи сортируются по возрастанию кода, после этого таблица не меняется
    pub fn new(
        name: &'static str,
        description: &'static str,
        encoding: TargetEncoding,
        mut entries: Vec<ConvEntry>,
    ) -> Self
    {
        entries.sort_by_key(|entry| entry.code);

        debug_assert!(entries.windows(2).all(|w| w[0].code < w[1].code));
        debug!("{}: {} записей", name, entries.len());

        Self {
            name,
            description,
            encoding,
            entries,
        }
    }

    #[inline]
    pub fn entries(&self) -> &[ConvEntry]
    {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// поиск так же, как это делает findInTable в сгенерированном коде:
    /// первая запись с кодом >= искомого, успех только при точном совпадении
    pub fn find(&self, code: u32) -> Option<&ConvEntry>
    {
        let position = self.entries.partition_point(|entry| entry.code < code);

        self.entries.get(position).filter(|entry| entry.code == code)
    }

    /// все коды таблицы должны быть кодпоинтами Unicode
    pub fn validate(&self) -> Result<(), PrepareError>
    {
        for entry in self.entries.iter() {
            for &code in std::iter::once(&entry.code).chain(entry.target.iter()) {
                if code > MAX_UNICODE_CODE {
                    return Err(PrepareError::CodeOutOfRange(code));
                }
            }
        }

        Ok(())
    }
}

/// все таблицы преобразования
#[derive(Debug, Clone)]
pub struct ConversionTables
{
    pub lower: ConvTable,
    pub upper: ConvTable,
    pub strip_strange: ConvTable,
    pub latin1: ConvTable,
}

impl ConversionTables
{
    /// таблицы, которые попадают в сгенерированные файлы, в порядке записи
    pub fn emitted(&self, with_latin1: bool) -> Vec<&ConvTable>
    {
        let mut tables = vec![&self.lower, &self.upper, &self.strip_strange];

        if with_latin1 {
            tables.push(&self.latin1);
        }

        tables
    }
}

/// строим таблицы по подготовленной рабочей таблице (после вырезания диапазонов и ручных замен)
///
/// в таблицу добавляются записи иероглифов CJK, поэтому она передается изменяемой
pub fn prepare(
    table: &mut CharacterTable,
    config: &CompilerConfig,
) -> Result<ConversionTables, PrepareError>
{
    info!("таблица нижнего регистра");
    let lower = case_table(
        table,
        LOWER_TABLE,
        "Table to convert from upper to lower case. If a character does not exist in the table, \
        it should be kept as is",
        |c| c.simple_lowercase_mapping,
    );

    info!("таблица верхнего регистра");
    let upper = case_table(
        table,
        UPPER_TABLE,
        "Table to convert from lower to uppercase. If a character does not exist in the table, \
        it should be kept as is.",
        |c| c.simple_uppercase_mapping,
    );

    info!("таблица очистки строк");
    let mut strip_strange = strip_strange_entries(table)?;

    info!("добавляем иероглифы CJK: U+{:04X} ..= U+{:04X}", config.cjk_range.start(), config.cjk_range.end());
    inject_cjk(table, &mut strip_strange, config.cjk_range.clone());

    let strip_strange = ConvTable::new(
        STRIP_STRANGE_TABLE,
        "Table remove strange characters and convert accented characters to non-accented ones. \
        For use in the SM. If a character does not exist in the table, it should be removed. If a space is returned, \
        the character corresponds to a space.",
        TargetEncoding::Utf8,
        strip_strange,
    );

    info!("таблица Latin-1");
    let latin1 = ConvTable::new(
        LATIN1_TABLE,
        "Table to convert characters outside Latin-1 to their closest Latin-1 representation. \
        If a character does not exist in the table, it cannot be represented in Latin-1.",
        TargetEncoding::Latin1,
        latin1_entries(table)?,
    );

    let tables = ConversionTables {
        lower,
        upper,
        strip_strange,
        latin1,
    };

    for conv_table in tables.emitted(true) {
        conv_table.validate()?;
    }

    Ok(tables)
}

/// таблица регистра: все символы с простым соответствием в другом регистре,
/// кроме соответствий, указывающих в вырезанные диапазоны
fn case_table(
    table: &CharacterTable,
    name: &'static str,
    description: &'static str,
    mapping: fn(&Codepoint) -> SimpleCaseMapping,
) -> ConvTable
{
    let entries = table
        .iter()
        .filter_map(|codepoint| match mapping(codepoint).code() {
            Some(target) if !table.is_removed(target) => {
                Some(ConvEntry::new(codepoint.code, vec![target], 0))
            }
            _ => None,
        })
        .collect();

    ConvTable::new(name, description, TargetEncoding::Utf8, entries)
}

/// записи таблицы очистки. символы, которые разрешаются в пустую строку, в таблицу не попадают
fn strip_strange_entries(table: &CharacterTable) -> Result<Vec<ConvEntry>, PrepareError>
{
    let resolver = StripStrange::new(table);
    let mut entries = vec![];

    for codepoint in table.iter() {
        let resolved = resolver.resolve(codepoint.code)?;

        if !resolved.codes.is_empty() {
            entries.push(ConvEntry::new(codepoint.code, resolved.codes, resolved.overrides));
        }
    }

    Ok(entries)
}

/// записи таблицы Latin-1: только символы за пределами Latin-1, которые к нему приводятся
fn latin1_entries(table: &CharacterTable) -> Result<Vec<ConvEntry>, PrepareError>
{
    let resolver = Latin1::new(table);
    let mut entries = vec![];

    for codepoint in table.iter().filter(|c| c.code > crate::resolve::latin1::LAST_LATIN1_CODE) {
        let resolved = resolver.resolve(codepoint.code)?;

        if !resolved.is_empty() {
            entries.push(ConvEntry::new(codepoint.code, resolved, 0));
        }
    }

    Ok(entries)
}

/// коды, на которые ссылаются записи таблицы (исходные и результирующие)
pub fn referenced_codes(conv_table: &ConvTable) -> impl Iterator<Item = u32> + '_
{
    conv_table
        .entries()
        .iter()
        .flat_map(|entry| std::iter::once(entry.code).chain(entry.target.iter().copied()))
}

/// пересекается ли диапазон с кодами, на которые ссылается таблица
pub fn references_range(conv_table: &ConvTable, range: &RangeInclusive<u32>) -> bool
{
    referenced_codes(conv_table).any(|code| range.contains(&code))
}

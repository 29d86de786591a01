use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use log::debug;

use crate::error::SourceError;
use crate::properties::*;

/// количество полей в строке UnicodeData.txt
pub const UNICODE_DATA_FIELDS: usize = 15;

/// рабочая таблица символов: кодпоинт -> запись, и индекс по названиям
///
/// BTreeMap, а не HashMap: проходы по таблице идут в порядке возрастания кодов,
/// и результат генерации не зависит от порядка хеширования
#[derive(Debug, Default, Clone)]
pub struct CharacterTable
{
    codepoints: BTreeMap<u32, Codepoint>,
    names: BTreeMap<String, u32>,
    /// вырезанные диапазоны
    removed: Vec<RangeInclusive<u32>>,
}

impl CharacterTable
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// разбор UnicodeData.txt и CaseFolding.txt
    pub fn from_sources(unicode_data: &str, case_folding: &str) -> Result<Self, SourceError>
    {
        let mut table = Self::new();

        table.load_unicode_data(unicode_data)?;
        table.load_case_folding(case_folding)?;

        Ok(table)
    }

    /// разбор UnicodeData.txt: одна запись на строку, 15 полей через точку с запятой.
    /// возвращает количество прочитанных записей
    pub fn load_unicode_data(&mut self, data: &str) -> Result<usize, SourceError>
    {
        let mut count = 0;

        for (i, line) in data.lines().enumerate() {
            let line_number = i + 1;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                continue;
            }

            let codepoint = parse_unicode_data_line(line, line_number)?;

            if self.codepoints.contains_key(&codepoint.code) {
                return Err(SourceError::DuplicateCode {
                    line: line_number,
                    code: codepoint.code,
                });
            }

            self.codepoints.insert(codepoint.code, codepoint);
            count += 1;
        }

        debug!("UnicodeData: {} записей", count);

        Ok(count)
    }

    /// разбор CaseFolding.txt: код; статус; приведение; # комментарий
    ///
    /// если код встречается несколько раз, остается последняя строка
    /// (в файле строка F идет перед S, т.е. в итоге остается простое приведение)
    pub fn load_case_folding(&mut self, data: &str) -> Result<usize, SourceError>
    {
        let mut count = 0;

        for (i, line) in data.lines().enumerate() {
            let line_number = i + 1;

            let line = match line.split_once('#') {
                Some((line, _)) => line,
                None => line,
            }
            .trim();

            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(';').collect();

            // после приведения стоит точка с запятой, т.е. четвертое поле пустое
            if fields.len() < 3 || fields.len() > 4 || fields.iter().skip(3).any(|f| !f.trim().is_empty()) {
                return Err(SourceError::CaseFoldingFieldCount {
                    line: line_number,
                    found: fields.len(),
                });
            }

            let code = parse_code(fields[0], line_number, "code")?;
            let case_folding = CaseFolding::try_from((fields[1], fields[2])).map_err(|_| {
                SourceError::InvalidProperty {
                    line: line_number,
                    field: "case folding",
                    value: format!("{};{}", fields[1], fields[2]),
                }
            })?;

            match self.codepoints.get_mut(&code) {
                Some(codepoint) => codepoint.case_folding = Some(case_folding),
                None => {
                    return Err(SourceError::UnknownCaseFoldingCode {
                        line: line_number,
                        code,
                    })
                }
            }

            count += 1;
        }

        debug!("CaseFolding: {} записей", count);

        Ok(count)
    }

    /// удалить все записи диапазона (включительно). возвращает количество удаленных записей
    pub fn remove_range(&mut self, range: RangeInclusive<u32>) -> usize
    {
        let before = self.codepoints.len();

        self.codepoints.retain(|code, _| !range.contains(code));
        self.names.retain(|_, code| !range.contains(code));
        self.removed.push(range);

        before - self.codepoints.len()
    }

    /// код попадает в один из вырезанных диапазонов
    pub fn is_removed(&self, code: u32) -> bool
    {
        self.removed.iter().any(|range| range.contains(&code))
    }

    /// построить индекс по названиям символов.
    /// у повторяющихся названий (например, <control>) индекс ссылается на наименьший код
    pub fn build_name_index(&mut self)
    {
        self.names.clear();

        for (code, codepoint) in self.codepoints.iter() {
            if codepoint.name.is_empty() {
                continue;
            }

            self.names.entry(codepoint.name.clone()).or_insert(*code);
        }

        debug!("индекс названий: {} записей", self.names.len());
    }

    /// ручная замена: при очистке строки символ from считается символом to
    pub fn register_override(&mut self, from: &str, to: &str) -> Result<(), SourceError>
    {
        let target = self
            .by_name(to)
            .ok_or_else(|| SourceError::UnknownName(to.to_owned()))?
            .code;

        let source = self
            .names
            .get(from)
            .copied()
            .ok_or_else(|| SourceError::UnknownName(from.to_owned()))?;

        if let Some(codepoint) = self.codepoints.get_mut(&source) {
            codepoint.override_target = Some(target);
        }

        Ok(())
    }

    /// добавить (или заменить) запись. в индекс названий она не попадает
    pub fn insert(&mut self, codepoint: Codepoint) -> Option<Codepoint>
    {
        self.codepoints.insert(codepoint.code, codepoint)
    }

    #[inline]
    pub fn get(&self, code: u32) -> Option<&Codepoint>
    {
        self.codepoints.get(&code)
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.codepoints.contains_key(&code)
    }

    /// запись по названию символа (нужен построенный индекс)
    pub fn by_name(&self, name: &str) -> Option<&Codepoint>
    {
        self.names.get(name).and_then(|code| self.codepoints.get(code))
    }

    /// записи в порядке возрастания кодов
    pub fn iter(&self) -> impl Iterator<Item = &Codepoint>
    {
        self.codepoints.values()
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.codepoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.codepoints.is_empty()
    }
}

/// разбор строки UnicodeData.txt
///
/// колонки 3, 4, 6 - 11 (CCC, Bidi, числовые значения, устаревшие названия) нам не нужны
fn parse_unicode_data_line(line: &str, line_number: usize) -> Result<Codepoint, SourceError>
{
    let props: Vec<&str> = line.split(';').collect();

    if props.len() != UNICODE_DATA_FIELDS {
        return Err(SourceError::FieldCount {
            line: line_number,
            found: props.len(),
        });
    }

    macro_rules! property {
        ($type: ty, $index: expr, $field: expr) => {
            <$type>::try_from(props[$index]).map_err(|_| SourceError::InvalidProperty {
                line: line_number,
                field: $field,
                value: props[$index].to_owned(),
            })?
        };
    }

    Ok(Codepoint {
        code: parse_code(props[0], line_number, "code")?,
        name: props[1].to_owned(),
        gc: property!(GeneralCategory, 2, "general category"),
        decomposition: property!(Decomposition, 5, "decomposition"),
        simple_uppercase_mapping: property!(SimpleCaseMapping, 12, "uppercase mapping"),
        simple_lowercase_mapping: property!(SimpleCaseMapping, 13, "lowercase mapping"),
        simple_titlecase_mapping: property!(SimpleCaseMapping, 14, "titlecase mapping"),
        case_folding: None,
        override_target: None,
    })
}

/// код в шестнадцатеричном виде
fn parse_code(value: &str, line_number: usize, field: &'static str) -> Result<u32, SourceError>
{
    u32::from_str_radix(value.trim(), 16).map_err(|_| SourceError::InvalidProperty {
        line: line_number,
        field,
        value: value.to_owned(),
    })
}

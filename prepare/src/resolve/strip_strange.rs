use log::warn;
use text_conversion_source::properties::Codepoint;
use text_conversion_source::CharacterTable;

use super::{Resolved, ResolutionPath};
use crate::error::PrepareError;

/// пробел U+0020 - на него заменяются все разделители-пробелы
pub const SPACE: u32 = 0x20;

/// "очистка" символа: оставляем только буквы и цифры без диакритики, в нижнем регистре
///
/// функция только читает таблицу, повторные вызовы дают тот же результат
pub struct StripStrange<'a>
{
    table: &'a CharacterTable,
}

impl<'a> StripStrange<'a>
{
    pub fn new(table: &'a CharacterTable) -> Self
    {
        Self { table }
    }

    /// разрешить символ
    pub fn resolve(&self, code: u32) -> Result<Resolved, PrepareError>
    {
        self.resolve_code(code, &mut ResolutionPath::default())
    }

    fn resolve_code(&self, code: u32, path: &mut ResolutionPath) -> Result<Resolved, PrepareError>
    {
        let codepoint = self.table.get(code).ok_or(PrepareError::UnknownCode(code))?;

        path.enter(code)?;
        let resolved = self.resolve_codepoint(codepoint, path);
        path.leave();

        resolved
    }

    fn resolve_codepoint(
        &self,
        codepoint: &Codepoint,
        path: &mut ResolutionPath,
    ) -> Result<Resolved, PrepareError>
    {
        // ручная замена - берем результат для замещающего символа, отмечая замену
        if let Some(target) = codepoint.override_target {
            let mut resolved = self.resolve_code(target, path)?;
            resolved.overrides += 1;

            return Ok(resolved);
        }

        if codepoint.decomposition.is_empty() {
            return Ok(Resolved::new(self.without_decomposition(codepoint)));
        }

        // разворачиваем декомпозицию (тег отбрасывается), элементы, вырезанные из таблицы, пропускаем.
        // от разрешения элемента остаются только буквы и цифры таблицы; если не осталось ничего,
        // берем сам элемент (если он буква или цифра)
        let mut codes = vec![];
        let mut overrides = 0;

        for &code in codepoint.decomposition.codes.iter() {
            if !self.table.contains(code) {
                continue;
            }

            let resolved = self.resolve_code(code, path)?;
            overrides += resolved.overrides;

            let kept: Vec<u32> = resolved
                .codes
                .into_iter()
                .filter(|code| self.is_alphanumeric(*code))
                .collect();

            match kept.is_empty() {
                true if self.is_alphanumeric(code) => codes.push(code),
                true => (),
                false => codes.extend(kept),
            }
        }

        Ok(Resolved { codes, overrides })
    }

    /// символ без декомпозиции:
    ///     - буква или цифра: приведение регистра (кроме турецкого), иначе строчная буква, иначе сам символ
    ///     - пробел: U+0020
    ///     - всё остальное удаляется
    fn without_decomposition(&self, codepoint: &Codepoint) -> Vec<u32>
    {
        if codepoint.is_alphanumeric() {
            let mapping = match &codepoint.case_folding {
                Some(folding) if !folding.status.is_turkic() && !folding.mapping.is_empty() => {
                    folding.mapping.clone()
                }
                _ => match codepoint.simple_lowercase_mapping.code() {
                    Some(code) => vec![code],
                    None => vec![codepoint.code],
                },
            };

            return self.without_removed(codepoint, mapping);
        }

        if codepoint.is_space() {
            return vec![SPACE];
        }

        vec![]
    }

    /// убираем из результата кодпоинты вырезанных диапазонов, остальное остается как есть
    fn without_removed(&self, codepoint: &Codepoint, mapping: Vec<u32>) -> Vec<u32>
    {
        let (removed, kept): (Vec<u32>, Vec<u32>) =
            mapping.into_iter().partition(|code| self.table.is_removed(*code));

        for code in removed {
            warn!(
                "U+{:04X} {}: U+{:04X} вырезан из таблицы, пропускаем",
                codepoint.code, codepoint.name, code
            );
        }

        kept
    }

    /// буква или цифра из рабочей таблицы
    fn is_alphanumeric(&self, code: u32) -> bool
    {
        matches!(self.table.get(code), Some(c) if c.is_alphanumeric())
    }
}

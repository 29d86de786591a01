use super::PropertiesError;

/// декомпозиция
/// берется из UCD: 5 колонка UnicodeData.txt
///
/// хранится в сжатом виде: элементы декомпозиции могут иметь собственную декомпозицию,
/// разворачивают её резолверы
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition
{
    /// декомпозиция
    pub codes: Vec<u32>,
    /// тег декомпозиции (только у декомпозиций совместимости)
    pub tag: Option<DecompositionTag>,
}

impl Decomposition
{
    /// у символа нет декомпозиции
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.codes.is_empty()
    }

    /// каноническая декомпозиция (без тега)
    #[inline]
    pub fn is_canonical(&self) -> bool
    {
        !self.is_empty() && self.tag.is_none()
    }
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        // тег в угловых скобках всегда стоит первым
        let (tag, decomposition_string) = match value.starts_with('<') {
            true => match value.split_once('>') {
                Some((tag, rest)) => (Some(DecompositionTag::from(&tag[1 ..])), rest),
                None => return Err(PropertiesError::UnknownPropertyValue),
            },
            false => (None, value),
        };

        let codes = decomposition_string
            .split_whitespace()
            .map(|v| u32::from_str_radix(v, 16))
            .collect::<Result<Vec<u32>, _>>()?;

        Ok(Self { codes, tag })
    }
}

/// тег декомпозиции
/// берется из UCD: 5 колонка UnicodeData.txt
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font,
    /// неразрывная версия пробела или дефиса
    NoBreak,
    /// начальная форма представления (арабский)
    Initial,
    /// средняя форма представления (арабский)
    Medial,
    /// конечная форма представления (арабский)
    Final,
    /// изолированная форма представления (арабский)
    Isolated,
    /// окруженная форма
    Circle,
    /// надстрочная форма
    Super,
    /// подстрочная форма
    Sub,
    /// вертикальная форма представления
    Vertical,
    /// совместимый символ широкого формата (или зэнкаку)
    Wide,
    /// совместимый символ узкого формата (или ханкаку)
    Narrow,
    /// малая вариантная форма (совместимость CNS (Chinese National Standard))
    Small,
    /// вариант шрифта в квадрате CJK
    Square,
    /// форма обыкновенной дроби
    Fraction,
    /// неопределенный символ для обеспечения совместимости
    Compat,
    /// тег, появившийся в более новой версии UCD - резолверы его всё равно отбрасывают
    Other,
}

impl From<&str> for DecompositionTag
{
    #[inline]
    fn from(name: &str) -> Self
    {
        match name {
            "font" => Self::Font,
            "noBreak" => Self::NoBreak,
            "initial" => Self::Initial,
            "medial" => Self::Medial,
            "final" => Self::Final,
            "isolated" => Self::Isolated,
            "circle" => Self::Circle,
            "super" => Self::Super,
            "sub" => Self::Sub,
            "vertical" => Self::Vertical,
            "wide" => Self::Wide,
            "narrow" => Self::Narrow,
            "small" => Self::Small,
            "square" => Self::Square,
            "fraction" => Self::Fraction,
            "compat" => Self::Compat,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn canonical()
    {
        let decomposition = Decomposition::try_from("0041 0300").unwrap();

        assert_eq!(decomposition.codes, [0x41, 0x300]);
        assert!(decomposition.is_canonical());
    }

    #[test]
    fn tagged()
    {
        let decomposition = Decomposition::try_from("<fraction> 0031 2044 0032").unwrap();

        assert_eq!(decomposition.tag, Some(DecompositionTag::Fraction));
        assert_eq!(decomposition.codes, [0x31, 0x2044, 0x32]);
        assert!(!decomposition.is_canonical());

        let decomposition = Decomposition::try_from("<someday> 0020").unwrap();
        assert_eq!(decomposition.tag, Some(DecompositionTag::Other));
    }

    #[test]
    fn empty_and_broken()
    {
        assert!(Decomposition::try_from("").unwrap().is_empty());
        assert!(Decomposition::try_from("<noBreak 0020").is_err());
        assert!(Decomposition::try_from("0041 XYZ").is_err());
    }
}

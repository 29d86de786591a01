use super::PropertiesError;

/// Simple Uppercase/Lowercase/Titlecase Mapping
/// берется из UCD: 12, 13, 14 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная/заглавная буква, один символ
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SimpleCaseMapping
{
    None,
    Some(u32),
}

impl SimpleCaseMapping
{
    /// код соответствующего символа, если он есть
    #[inline]
    pub fn code(&self) -> Option<u32>
    {
        match self {
            Self::None => None,
            Self::Some(code) => Some(*code),
        }
    }
}

impl TryFrom<&str> for SimpleCaseMapping
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        Ok(match value.is_empty() {
            true => Self::None,
            false => Self::Some(u32::from_str_radix(value, 16)?),
        })
    }
}

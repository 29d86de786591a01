use super::PropertiesError;

/// статус строки CaseFolding.txt
///
/// C - общее приведение, F - полное (в несколько символов), S - простое, T - только для турецкого
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CaseFoldingStatus
{
    Common,
    Full,
    Simple,
    Turkic,
}

impl CaseFoldingStatus
{
    /// приведение, специфичное для турецкой локали - в общем случае не применяется
    #[inline]
    pub fn is_turkic(&self) -> bool
    {
        *self == Self::Turkic
    }
}

impl TryFrom<&str> for CaseFoldingStatus
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.trim() {
            "C" => Self::Common,
            "F" => Self::Full,
            "S" => Self::Simple,
            "T" => Self::Turkic,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}

/// приведение регистра символа
/// берется из UCD: CaseFolding.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFolding
{
    pub status: CaseFoldingStatus,
    /// результат приведения, у статуса F - несколько кодпоинтов
    pub mapping: Vec<u32>,
}

impl TryFrom<(&str, &str)> for CaseFolding
{
    type Error = PropertiesError;

    fn try_from((status, mapping): (&str, &str)) -> Result<Self, Self::Error>
    {
        let status = CaseFoldingStatus::try_from(status)?;
        let mapping = mapping
            .split_whitespace()
            .map(|v| u32::from_str_radix(v, 16))
            .collect::<Result<Vec<u32>, _>>()?;

        Ok(Self { status, mapping })
    }
}

use core::fmt;

use text_conversion_source::SourceError;

/// ошибки построения и записи таблиц преобразования
#[derive(Debug, PartialEq, Eq)]
pub enum PrepareError
{
    /// ошибка данных UCD или подготовки рабочей таблицы
    Source(SourceError),
    /// разрешение кодпоинта вернулось к уже разрешаемому - данные содержат цикл
    ResolutionCycle
    {
        path: Vec<u32>,
    },
    /// обращение к кодпоинту, которого нет в рабочей таблице
    UnknownCode(u32),
    /// кодпоинт не может быть записан в UTF-8
    CodeOutOfRange(u32),
    /// кодпоинт не может быть записан в Latin-1
    Latin1OutOfRange(u32),
}

impl fmt::Display for PrepareError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Source(error) => write!(f, "{}", error),
            Self::ResolutionCycle { path } => {
                let path: Vec<String> = path.iter().map(|c| format!("U+{:04X}", c)).collect();
                write!(f, "цикл при разрешении: {}", path.join(" -> "))
            }
            Self::UnknownCode(code) => write!(f, "кодпоинт U+{:04X} отсутствует в таблице", code),
            Self::CodeOutOfRange(code) => {
                write!(f, "кодпоинт 0x{:X} не может быть записан в UTF-8", code)
            }
            Self::Latin1OutOfRange(code) => {
                write!(f, "кодпоинт U+{:04X} не может быть записан в Latin-1", code)
            }
        }
    }
}

impl std::error::Error for PrepareError
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match self {
            Self::Source(error) => Some(error),
            _ => None,
        }
    }
}

impl From<SourceError> for PrepareError
{
    fn from(error: SourceError) -> Self
    {
        Self::Source(error)
    }
}

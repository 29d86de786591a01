use core::fmt;

/// ошибки чтения данных UCD и подготовки рабочей таблицы
#[derive(Debug, PartialEq, Eq)]
pub enum SourceError
{
    /// строка UnicodeData.txt содержит не 15 полей
    FieldCount
    {
        line: usize,
        found: usize,
    },
    /// строка CaseFolding.txt не разбивается на код, статус и приведение
    CaseFoldingFieldCount
    {
        line: usize,
        found: usize,
    },
    /// поле не удалось разобрать
    InvalidProperty
    {
        line: usize,
        field: &'static str,
        value: String,
    },
    /// кодпоинт встречается в UnicodeData.txt повторно
    DuplicateCode
    {
        line: usize,
        code: u32,
    },
    /// CaseFolding.txt ссылается на кодпоинт, которого нет в таблице
    UnknownCaseFoldingCode
    {
        line: usize,
        code: u32,
    },
    /// символ с таким названием не найден
    UnknownName(String),
}

impl fmt::Display for SourceError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::FieldCount { line, found } => write!(
                f,
                "UnicodeData, строка {}: ожидалось 15 полей, найдено {}",
                line, found
            ),
            Self::CaseFoldingFieldCount { line, found } => write!(
                f,
                "CaseFolding, строка {}: ожидалось 3 поля, найдено {}",
                line, found
            ),
            Self::InvalidProperty { line, field, value } => write!(
                f,
                "строка {}: некорректное значение поля {}: {:?}",
                line, field, value
            ),
            Self::DuplicateCode { line, code } => {
                write!(f, "UnicodeData, строка {}: повтор кодпоинта U+{:04X}", line, code)
            }
            Self::UnknownCaseFoldingCode { line, code } => write!(
                f,
                "CaseFolding, строка {}: кодпоинт U+{:04X} отсутствует в UnicodeData",
                line, code
            ),
            Self::UnknownName(name) => write!(f, "символ не найден: {}", name),
        }
    }
}

impl std::error::Error for SourceError {}

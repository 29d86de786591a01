mod case_folding;
mod decomposition;
mod general_category;
mod simple_case_mapping;

pub use case_folding::CaseFolding;
pub use case_folding::CaseFoldingStatus;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use general_category::GeneralCategory;
pub use simple_case_mapping::SimpleCaseMapping;

/// Кодпоинт Unicode
/// источник - UCD, UnicodeData.txt, дополняется данными из CaseFolding.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// декомпозиция и её тег
    pub decomposition: Decomposition,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: SimpleCaseMapping,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: SimpleCaseMapping,
    /// соответствующая заглавная буква
    pub simple_titlecase_mapping: SimpleCaseMapping,
    /// приведение регистра (CaseFolding.txt)
    pub case_folding: Option<CaseFolding>,
    /// ручная замена: при очистке строки символ считается равным указанному
    pub override_target: Option<u32>,
}

impl Codepoint
{
    /// запись без данных UCD, известен только код
    pub fn synthesized(code: u32) -> Self
    {
        Self {
            code,
            name: String::new(),
            gc: GeneralCategory::Unassigned,
            decomposition: Decomposition::default(),
            simple_uppercase_mapping: SimpleCaseMapping::None,
            simple_lowercase_mapping: SimpleCaseMapping::None,
            simple_titlecase_mapping: SimpleCaseMapping::None,
            case_folding: None,
            override_target: None,
        }
    }

    /// буква (кроме модификаторов) или цифра
    #[inline]
    pub fn is_alphanumeric(&self) -> bool
    {
        self.gc.is_alphanumeric()
    }

    /// пробел
    #[inline]
    pub fn is_space(&self) -> bool
    {
        self.gc.is_space()
    }

    /// название для комментариев в сгенерированных файлах
    pub fn display_name(&self) -> String
    {
        match self.name.is_empty() {
            true => format!("U+{:04X}", self.code),
            false => self.name.clone(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum PropertiesError
{
    UnknownPropertyValue,
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue
    }
}

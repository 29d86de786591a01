use crate::error::PrepareError;

pub mod latin1;
pub mod strip_strange;

pub use latin1::Latin1;
pub use strip_strange::StripStrange;

/// результат разрешения символа
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved
{
    /// последовательность кодпоинтов, на которую заменяется символ. пустая - символ удаляется
    pub codes: Vec<u32>,
    /// сколько ручных замен было применено по пути
    pub overrides: u32,
}

impl Resolved
{
    pub fn new(codes: Vec<u32>) -> Self
    {
        Self { codes, overrides: 0 }
    }
}

/// цепочка кодпоинтов, разрешаемых в данный момент.
/// данные UCD ацикличны, но если это не так - возвращаем ошибку вместо бесконечной рекурсии
#[derive(Debug, Default)]
pub(crate) struct ResolutionPath(Vec<u32>);

impl ResolutionPath
{
    pub(crate) fn enter(&mut self, code: u32) -> Result<(), PrepareError>
    {
        if self.0.contains(&code) {
            let mut path = self.0.clone();
            path.push(code);

            return Err(PrepareError::ResolutionCycle { path });
        }

        self.0.push(code);

        Ok(())
    }

    pub(crate) fn leave(&mut self)
    {
        self.0.pop();
    }
}

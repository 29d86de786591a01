use crate::error::PrepareError;
use crate::tables::ConvTable;

/// информация о таблице преобразования
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStats
{
    pub name: &'static str,
    /// количество записей
    pub entries: usize,
    /// записи, которые преобразуются в несколько символов
    pub expansions: usize,
    /// записи с ручной заменой
    pub overridden: usize,
    /// сумма длин закодированных строк, в байтах
    pub encoded_bytes: usize,
}

impl TableStats
{
    pub fn collect(conv_table: &ConvTable) -> Result<Self, PrepareError>
    {
        let mut stats = Self {
            name: conv_table.name,
            entries: conv_table.len(),
            ..Default::default()
        };

        for entry in conv_table.entries() {
            if entry.target.len() > 1 {
                stats.expansions += 1;
            }

            if entry.overrides != 0 {
                stats.overridden += 1;
            }

            stats.encoded_bytes += entry.encoded(conv_table.encoding)?.1;
        }

        Ok(stats)
    }
}

/// отчет по всем таблицам
pub fn format(stats: &[TableStats]) -> String
{
    let mut output = String::new();

    for table in stats {
        output.push_str(
            format!(
                "\n{}:\n  \
                записей: {}\n  \
                несколько символов: {}\n  \
                ручных замен: {}\n  \
                размер строк: {}\n",
                table.name, table.entries, table.expansions, table.overridden, table.encoded_bytes,
            )
            .as_str(),
        );
    }

    output
}

/// выводим отчет в stdout
pub fn print(stats: &[TableStats])
{
    println!("{}", format(stats));
}

use text_conversion_source::CharacterTable;

use crate::error::PrepareError;
use crate::tables::{ConvEntry, TargetEncoding};

/// отступ внутри класса и в списках записей
pub const INDENT: &str = "   ";

/// разбить текст на строки не длиннее width (кроме слов, которые длиннее сами по себе)
///
/// каждое слово попадает в результат ровно один раз
pub fn wrap_text(text: &str, width: usize) -> Vec<String>
{
    let mut rows = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        match current.is_empty() {
            true => current.push_str(word),
            false => match current.len() + 1 + word.len() >= width {
                true => {
                    rows.push(core::mem::take(&mut current));
                    current.push_str(word);
                }
                false => {
                    current.push(' ');
                    current.push_str(word);
                }
            },
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

/// комментарий в стиле C, текст выровнен по ширине
pub fn wrapped_comment(text: &str, width: usize, indent: &str) -> String
{
    let rows = wrap_text(text, width);

    if rows.is_empty() {
        return String::new();
    }

    let mut output = format!("{}/*\n", indent);

    for row in rows {
        output.push_str(format!("{} *  {}\n", indent, row).as_str());
    }

    output.push_str(format!("{} */\n", indent).as_str());

    output
}

/// комментарий к записи: откуда и во что преобразуется символ
///
/// ```text
///    // LATIN CAPITAL LETTER A WITH GRAVE
///    //   -> LATIN SMALL LETTER A
/// ```
pub fn entry_comment(table: &CharacterTable, entry: &ConvEntry) -> String
{
    let mut output = format!("{}// {}\n", INDENT, display_name(table, entry.code));

    let mut separator = "  -> ";

    for &code in entry.target.iter() {
        output.push_str(format!("{}// {}{}\n", INDENT, separator, display_name(table, code)).as_str());
        separator = "   + ";
    }

    if entry.overrides != 0 {
        output.push_str(format!("{}// (override)\n", INDENT).as_str());
    }

    output
}

/// запись массива вместе с комментарием
pub fn entry(
    table: &CharacterTable,
    entry: &ConvEntry,
    encoding: TargetEncoding,
) -> Result<String, PrepareError>
{
    let (encoded, length) = entry.encoded(encoding)?;

    Ok(format!(
        "{}{}{{ 0x{:04X}, \"{}\", {} }},\n",
        entry_comment(table, entry),
        INDENT,
        entry.code,
        encoded,
        length
    ))
}

/// название символа, для символов без названия - U+XXXX
fn display_name(table: &CharacterTable, code: u32) -> String
{
    match table.get(code) {
        Some(codepoint) => codepoint.display_name(),
        None => format!("U+{:04X}", code),
    }
}

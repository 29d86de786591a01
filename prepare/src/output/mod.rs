use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use text_conversion_source::CharacterTable;

use crate::error::PrepareError;
use crate::tables::ConvTable;

pub mod format;
pub mod stats;

/// ширина текста в комментариях
const COMMENT_WIDTH: usize = 70;

/// название генерируемого класса
pub const CLASS_NAME: &str = "TextConversionTables";
/// тип записи таблицы
pub const ENTRY_TYPE: &str = "convTable_entry";
/// тип таблицы
pub const TABLE_TYPE: &str = "convTable";

/// общее начало обоих файлов
const COMMON_HEADER: &str = "\
/*
 *    Unicode text conversion tables
 */
";

const INCLUDE_GUARD: &str = "TEXT_CONVERSION_TABLES_H";

/// объявление класса: типы записей и поиск по таблице
const CLASS_DECLARATION: &str = r#"
#include "config.h"
#include <algorithm>

class TextConversionTables {
public:
   /**
    *   One entry in a conv table.
    */
   struct convTable_entry {
      /// The unicode character to be converted
      const uint32 unicodeChar;
      /// The utf-8 string of the converted character
      const char* const utf8String;
      /// Length of the utf-8 string.
      const int utf8Length;
   };

   /**
    *    A table of convTable_entry. Also contains the number
    *    of entries in the table.
    */
   struct convTable {
      uint32 nbrEntries;
      const convTable_entry* const entries;
   };

   class ConvEntryComp {
     public:
      bool operator()(const convTable_entry& a, const convTable_entry& b) {
         return a.unicodeChar < b.unicodeChar;
      }
      bool operator()(const convTable_entry& a, uint32 code ) {
         return a.unicodeChar < code;
      }
   };

   /// Result of a findInTable operation.
   struct convTableFindRes {
      convTableFindRes( const char* aStr, int aLen ) : resString(aStr),
                                                       resStringLength(aLen) {}
      const char* resString;
      int resStringLength;
   };

   /**
    *   Looks for the code <code>code</code> in the table <code>table</code>.
    *   @param table Table to search.
    *   @param code  Code to look for.
    *   @return Result with string set to NULL and length set to zero
    *           if not found.
    */
   static convTableFindRes findInTable( const convTable& table,
                                        uint32 code ) {
      const convTable_entry* begin = table.entries;
      const convTable_entry* end   = table.entries + table.nbrEntries;
      const convTable_entry* found = std::lower_bound( begin, end,
                                                       code,
                                                       ConvEntryComp() );
      if ( found != end && found->unicodeChar == code ) {
         return convTableFindRes( found->utf8String,
                                  found->utf8Length );
      } else {
         return convTableFindRes( NULL, 0 );
      }
   }

"#;

/// сгенерированные файлы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts
{
    pub header: String,
    pub source: String,
}

/// собираем заголовочный файл и файл с определениями таблиц.
///
/// оба файла формируются целиком в памяти: если какую-то запись не удалось закодировать,
/// не будет записан ни один из них
pub fn render(
    table: &CharacterTable,
    tables: &[&ConvTable],
    header_name: &str,
    command_line: &str,
) -> Result<Artifacts, PrepareError>
{
    let note = format!(
        "NOTE! This file is machine generated - do not edit directly!!!\ncmdline: {}",
        command_line
    );

    let common = format!("{}{}", COMMON_HEADER, format::wrapped_comment(note.as_str(), COMMENT_WIDTH, ""));

    let header = format!("{}{}", common, declarations(tables));

    let mut source = format!("{}\n#include \"{}\"\n\n", common, header_name);

    for conv_table in tables {
        conv_table.validate()?;
        source.push_str(definition(table, conv_table)?.as_str());
    }

    debug!("заголовок: {} байт, определения: {} байт", header.len(), source.len());

    Ok(Artifacts { header, source })
}

impl Artifacts
{
    /// записываем оба файла: сначала во временные рядом с целевыми, затем переименовываем.
    /// при ошибке временные файлы удаляются, целевые не создаются
    pub fn write(&self, header_path: &Path, source_path: &Path) -> io::Result<()>
    {
        let header_tmp = temporary(header_path);
        let source_tmp = temporary(source_path);

        let written = fs::write(&header_tmp, &self.header)
            .and_then(|_| fs::write(&source_tmp, &self.source))
            .and_then(|_| fs::rename(&header_tmp, header_path))
            .and_then(|_| fs::rename(&source_tmp, source_path));

        if written.is_err() {
            // временного файла может и не быть
            let _ = fs::remove_file(&header_tmp);
            let _ = fs::remove_file(&source_tmp);
        }

        written
    }
}

/// путь временного файла: file.h -> file.h.tmp
fn temporary(path: &Path) -> PathBuf
{
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");

    PathBuf::from(name)
}

/// заголовочный файл: класс, публичные таблицы и закрытые массивы записей
fn declarations(tables: &[&ConvTable]) -> String
{
    let mut output = format!(
        "\n#ifndef {guard}\n#define {guard}\n{}",
        CLASS_DECLARATION,
        guard = INCLUDE_GUARD
    );

    for conv_table in tables {
        output.push_str(
            format::wrapped_comment(conv_table.description, COMMENT_WIDTH, format::INDENT).as_str(),
        );
        output.push_str(
            format!("{}static {} {};\n", format::INDENT, TABLE_TYPE, conv_table.name).as_str(),
        );
    }

    output.push_str("\nprivate:\n\n");

    for conv_table in tables {
        output.push_str(
            format!(
                "{}static {} {}Entries [{}];\n\n",
                format::INDENT,
                ENTRY_TYPE,
                conv_table.name,
                conv_table.len()
            )
            .as_str(),
        );
    }

    output.push_str(format!("\n}};\n#endif // {}\n", INCLUDE_GUARD).as_str());

    output
}

/// определение массива записей и структуры таблицы
fn definition(table: &CharacterTable, conv_table: &ConvTable) -> Result<String, PrepareError>
{
    let mut output = format!(
        "{class}::{entry}\n{class}::{name}Entries[{count}] = {{\n",
        class = CLASS_NAME,
        entry = ENTRY_TYPE,
        name = conv_table.name,
        count = conv_table.len()
    );

    for entry in conv_table.entries() {
        output.push_str(format::entry(table, entry, conv_table.encoding)?.as_str());
    }

    output.push_str("};\n\n");

    output.push_str(
        format!(
            "{class}::{table_type}\n{class}::{name} = {{\n{indent}{count},\n{indent}{name}Entries,\n}};\n\n",
            class = CLASS_NAME,
            table_type = TABLE_TYPE,
            name = conv_table.name,
            indent = format::INDENT,
            count = conv_table.len()
        )
        .as_str(),
    );

    Ok(output)
}

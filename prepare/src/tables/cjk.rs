use std::ops::RangeInclusive;

use log::debug;
use text_conversion_source::properties::Codepoint;
use text_conversion_source::CharacterTable;

use super::ConvEntry;

/// иероглифы CJK остаются в строке как есть: каждый код диапазона отображается сам в себя.
///
/// записи диапазона заменяют собой всё, что было в рабочей таблице и в таблице очистки,
/// в рабочую таблицу добавляется запись без названия (в комментариях будет U+XXXX).
/// коды из вырезанных диапазонов пропускаются
pub fn inject_cjk(table: &mut CharacterTable, entries: &mut Vec<ConvEntry>, range: RangeInclusive<u32>)
{
    let before = entries.len();
    entries.retain(|entry| !range.contains(&entry.code));

    let replaced = before - entries.len();
    let mut added = 0;

    for code in range {
        if table.is_removed(code) {
            continue;
        }

        table.insert(Codepoint::synthesized(code));
        entries.push(ConvEntry::new(code, vec![code], 0));
        added += 1;
    }

    debug!("CJK: добавлено {} записей, заменено {}", added, replaced);
}

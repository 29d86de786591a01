use text_conversion_source::properties::Codepoint;
use text_conversion_source::CharacterTable;

use super::ResolutionPath;
use crate::error::PrepareError;

/// последний кодпоинт Latin-1
pub const LAST_LATIN1_CODE: u32 = 0xFF;

/// разделитель в названии символа, после которого идет описание диакритики
const NAME_MODIFIER_SEPARATOR: &str = " WITH";

/// приведение символа к ближайшему представлению в Latin-1 (U+0000 ..= U+00FF)
///
/// ручные замены и приведение регистра не учитываются.
/// пустой результат - символ не представим в Latin-1 и в таблицу не попадает
pub struct Latin1<'a>
{
    table: &'a CharacterTable,
}

impl<'a> Latin1<'a>
{
    pub fn new(table: &'a CharacterTable) -> Self
    {
        Self { table }
    }

    pub fn resolve(&self, code: u32) -> Result<Vec<u32>, PrepareError>
    {
        self.resolve_code(code, &mut ResolutionPath::default())
    }

    fn resolve_code(&self, code: u32, path: &mut ResolutionPath) -> Result<Vec<u32>, PrepareError>
    {
        let codepoint = self.table.get(code).ok_or(PrepareError::UnknownCode(code))?;

        if code <= LAST_LATIN1_CODE {
            return Ok(vec![code]);
        }

        path.enter(code)?;
        let resolved = self.resolve_codepoint(codepoint, path);
        path.leave();

        resolved
    }

    fn resolve_codepoint(
        &self,
        codepoint: &Codepoint,
        path: &mut ResolutionPath,
    ) -> Result<Vec<u32>, PrepareError>
    {
        if codepoint.decomposition.is_empty() {
            return Ok(self.by_name(codepoint));
        }

        let mut expanded = vec![];

        for &code in codepoint.decomposition.codes.iter() {
            if !self.table.contains(code) {
                continue;
            }

            let resolved = self.resolve_code(code, path)?;

            match resolved.is_empty() {
                true => expanded.push(code),
                false => expanded.extend(resolved),
            }
        }

        // фильтруем по коду самого элемента, а не по его разрешению
        Ok(expanded
            .into_iter()
            .filter(|code| *code <= LAST_LATIN1_CODE && self.table.contains(*code))
            .collect())
    }

    /// декомпозиции нет - пробуем найти символ по названию без описания диакритики:
    /// LATIN CAPITAL LETTER L WITH STROKE -> LATIN CAPITAL LETTER L
    fn by_name(&self, codepoint: &Codepoint) -> Vec<u32>
    {
        let base_name = match codepoint.name.split_once(NAME_MODIFIER_SEPARATOR) {
            Some((base_name, _)) => base_name,
            None => codepoint.name.as_str(),
        };

        match self.table.by_name(base_name) {
            Some(base) if base.code <= LAST_LATIN1_CODE => vec![base.code],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    const UNICODE_DATA: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
004C;LATIN CAPITAL LETTER L;Lu;0;L;;;;;N;;;;006C;
00C2;LATIN CAPITAL LETTER A WITH CIRCUMFLEX;Lu;0;L;0041 0302;;;;N;LATIN CAPITAL LETTER A CIRCUMFLEX;;;00E2;
0141;LATIN CAPITAL LETTER L WITH STROKE;Lu;0;L;;;;;N;LATIN CAPITAL LETTER L SLASH;;;0142;
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING GRAVE;;;;
0302;COMBINING CIRCUMFLEX ACCENT;Mn;230;NSM;;;;;N;NON-SPACING CIRCUMFLEX;;;;
0391;GREEK CAPITAL LETTER ALPHA;Lu;0;L;;;;;N;;;;03B1;
1EA6;LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND GRAVE;Lu;0;L;00C2 0300;;;;N;;;;1EA7;
";

    fn table() -> CharacterTable
    {
        let mut table = CharacterTable::from_sources(UNICODE_DATA, "").unwrap();
        table.build_name_index();
        table
    }

    #[test]
    fn already_latin1()
    {
        let table = table();
        let resolver = Latin1::new(&table);

        assert_eq!(resolver.resolve(0x41).unwrap(), [0x41]);
        assert_eq!(resolver.resolve(0xC2).unwrap(), [0xC2]);
    }

    #[test]
    fn decomposition()
    {
        let table = table();

        assert_eq!(Latin1::new(&table).resolve(0x1EA6).unwrap(), [0xC2]);
    }

    #[test]
    fn name_heuristic()
    {
        let table = table();
        let resolver = Latin1::new(&table);

        assert_eq!(resolver.resolve(0x141).unwrap(), [0x4C]);
        assert!(resolver.resolve(0x391).unwrap().is_empty());
        assert!(resolver.resolve(0x300).unwrap().is_empty());
    }

    #[test]
    fn decomposition_cycle()
    {
        let unicode_data = "\
0100;FIRST;Lu;0;L;0101;;;;N;;;;;
0101;SECOND;Ll;0;L;0100;;;;N;;;;;
";
        let table = CharacterTable::from_sources(unicode_data, "").unwrap();

        assert_eq!(
            Latin1::new(&table).resolve(0x100),
            Err(PrepareError::ResolutionCycle {
                path: vec![0x100, 0x101, 0x100]
            })
        );
    }
}

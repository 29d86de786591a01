use text_conversion_source::properties::{CaseFoldingStatus, DecompositionTag, GeneralCategory};

use crate::data::{RAW, SAMPLE};

#[test]
fn sample_loaded()
{
    assert_eq!(RAW.len(), 70);
    assert!(RAW.contains(0x2C00));
    assert!(!SAMPLE.0.contains(0x2C00));
}

/// в CaseFolding.txt строка T для U+0049 идет после C и заменяет её
#[test]
fn case_folding()
{
    let folding = RAW.get(0x49).and_then(|c| c.case_folding.clone()).unwrap();

    assert_eq!(folding.status, CaseFoldingStatus::Turkic);
    assert_eq!(folding.mapping, vec![0x131]);

    let folding = RAW.get(0xDF).and_then(|c| c.case_folding.clone()).unwrap();

    assert_eq!(folding.status, CaseFoldingStatus::Full);
    assert_eq!(folding.mapping, vec![0x73, 0x73]);

    assert!(RAW.get(0x61).unwrap().case_folding.is_none());
}

#[test]
fn properties()
{
    let fraction = RAW.get(0xBD).unwrap();

    assert_eq!(fraction.gc, GeneralCategory::OtherNumber);
    assert_eq!(fraction.decomposition.tag, Some(DecompositionTag::Fraction));
    assert_eq!(fraction.decomposition.codes, vec![0x31, 0x2044, 0x32]);
    assert!(fraction.is_alphanumeric());

    let grave = RAW.get(0x300).unwrap();

    assert_eq!(grave.gc, GeneralCategory::NonspacingMark);
    assert!(!grave.is_alphanumeric());

    assert!(RAW.get(0xA0).unwrap().is_space());
}

/// декомпозиции выборки ссылаются только на символы выборки
#[test]
fn decompositions_closed()
{
    for codepoint in RAW.iter() {
        for code in codepoint.decomposition.codes.iter() {
            assert!(RAW.contains(*code), "U+{:04X} -> U+{:04X}", codepoint.code, code);
        }
    }
}

/// названия: ручные замены ссылаются на символы выборки
#[test]
fn names()
{
    let table = &SAMPLE.0;

    assert_eq!(table.by_name("LATIN CAPITAL LETTER L").map(|c| c.code), Some(0x4C));
    assert_eq!(table.by_name("GREEK CAPITAL LETTER RHO").map(|c| c.code), Some(0x3A1));
    assert!(table.by_name("GLAGOLITIC CAPITAL LETTER AZU").is_none());

    assert_eq!(table.get(0xD8).and_then(|c| c.override_target), Some(0x4F));
    assert_eq!(table.get(0xC0).and_then(|c| c.override_target), None);
}

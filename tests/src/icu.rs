use icu_normalizer::DecomposingNormalizer;

use crate::data::{RAW, SAMPLE};

/// очистка символа с канонической декомпозицией совпадает с очисткой его NFD-разложения:
/// базовый символ приводится так же, как отдельно, комбинирующие знаки выпадают
#[test]
fn icu_nfd()
{
    let nfd = DecomposingNormalizer::new_nfd();
    let (_, tables) = &*SAMPLE;

    let mut checked = 0;

    for codepoint in RAW.iter().filter(|c| c.decomposition.is_canonical()) {
        let Some(c) = char::from_u32(codepoint.code) else {
            continue;
        };

        let expected: Vec<u32> = nfd
            .normalize(c.to_string().as_str())
            .chars()
            .filter_map(|c| tables.strip_strange.find(u32::from(c)))
            .flat_map(|entry| entry.target.iter().copied())
            .collect();

        let resolved = tables
            .strip_strange
            .find(codepoint.code)
            .map(|entry| entry.target.clone())
            .unwrap_or_default();

        assert_eq!(resolved, expected, "U+{:04X} {}", codepoint.code, codepoint.name);

        checked += 1;
    }

    assert!(checked > 0);
}

/// таблицы регистра не противоречат простой декомпозиции ICU:
/// строчная форма буквы с диакритикой раскладывается в строчную базовую букву и те же знаки
#[test]
fn icu_case_pairs()
{
    let nfd = DecomposingNormalizer::new_nfd();
    let (_, tables) = &*SAMPLE;

    for entry in tables.lower.entries() {
        let (Some(upper), Some(lower)) = (char::from_u32(entry.code), char::from_u32(entry.target[0])) else {
            continue;
        };

        let upper: Vec<char> = nfd.normalize(upper.to_string().as_str()).chars().collect();
        let lower: Vec<char> = nfd.normalize(lower.to_string().as_str()).chars().collect();

        if upper.len() < 2 {
            continue;
        }

        assert_eq!(upper.len(), lower.len(), "U+{:04X}", entry.code);
        assert_eq!(upper[1 ..], lower[1 ..], "U+{:04X}", entry.code);
        assert_eq!(
            tables.lower.find(u32::from(upper[0])).map(|e| e.target[0]),
            Some(u32::from(lower[0])),
            "U+{:04X}",
            entry.code
        );
    }
}

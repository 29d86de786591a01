use crate::error::PrepareError;

/// максимальное количество байт в последовательности (исходный вариант UTF-8, до RFC 3629)
pub const MAX_SEQUENCE_LENGTH: usize = 6;
/// наибольший кодпоинт, который может быть записан 6-байтовой последовательностью
pub const MAX_ENCODABLE_CODE: u32 = 0x7FFF_FFFF;
/// наибольший кодпоинт Unicode
pub const MAX_UNICODE_CODE: u32 = 0x10_FFFF;

/// маркер байта продолжения: 0b10xx_xxxx
const TAG_CONT: u8 = 0b_1000_0000;
/// маска значения байта продолжения
const CONT_MASK: u32 = 0b_0011_1111;

/// верхние границы (включительно) диапазонов и маркеры первого байта для последовательностей длиной 1 - 6
const SEQUENCES: [(u32, u8); MAX_SEQUENCE_LENGTH] = [
    (0x7F, 0b_0000_0000),
    (0x7FF, 0b_1100_0000),
    (0xFFFF, 0b_1110_0000),
    (0x1F_FFFF, 0b_1111_0000),
    (0x3FF_FFFF, 0b_1111_1000),
    (0x7FFF_FFFF, 0b_1111_1100),
];

/// последовательность байт UTF-8 для кодпоинта
///
/// каждый байт продолжения получает маркер 0b10 и 6 бит значения, старшие биты уходят в первый байт
pub fn utf8_bytes(code: u32) -> Result<Vec<u8>, PrepareError>
{
    let (width, tag) = match SEQUENCES.iter().position(|(last, _)| code <= *last) {
        Some(index) => (index + 1, SEQUENCES[index].1),
        None => return Err(PrepareError::CodeOutOfRange(code)),
    };

    if width == 1 {
        return Ok(vec![code as u8]);
    }

    let mut bytes = Vec::with_capacity(width);
    let continuations = width as u32 - 1;

    bytes.push(tag | (code >> (6 * continuations)) as u8);

    for i in (0 .. continuations).rev() {
        bytes.push(TAG_CONT | ((code >> (6 * i)) & CONT_MASK) as u8);
    }

    Ok(bytes)
}

/// байты в виде восьмеричных escape-последовательностей для строкового литерала: \303\240
pub fn octal_escaped(bytes: &[u8]) -> String
{
    bytes.iter().map(|byte| format!("\\{:o}", byte)).collect()
}

/// кодпоинт в UTF-8, записанный восьмеричными escape-последовательностями
pub fn utf8_octal(code: u32) -> Result<String, PrepareError>
{
    Ok(octal_escaped(&utf8_bytes(code)?))
}

/// кодпоинт Latin-1 как один байт, записанный восьмеричной escape-последовательностью
pub fn latin1_octal(code: u32) -> Result<String, PrepareError>
{
    match u8::try_from(code) {
        Ok(byte) => Ok(octal_escaped(&[byte])),
        Err(_) => Err(PrepareError::Latin1OutOfRange(code)),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    /// собираем кодпоинт обратно из последовательности
    fn decode(bytes: &[u8]) -> u32
    {
        let width = bytes.len() as u32;

        let first = match width {
            1 => bytes[0] as u32,
            _ => (bytes[0] & (0x7F >> width)) as u32,
        };

        bytes[1 ..]
            .iter()
            .fold(first, |code, byte| (code << 6) | (*byte as u32 & CONT_MASK))
    }

    /// разбираем строку вида \303\240 обратно в байты
    fn unescape(octal: &str) -> Vec<u8>
    {
        octal
            .split('\\')
            .skip(1)
            .map(|v| u8::from_str_radix(v, 8).unwrap())
            .collect()
    }

    #[test]
    fn octal_form()
    {
        assert_eq!(utf8_octal(0x41).unwrap(), "\\101");
        assert_eq!(utf8_octal(0xE0).unwrap(), "\\303\\240");
        assert_eq!(utf8_octal(0x4E00).unwrap(), "\\344\\270\\200");
        assert_eq!(latin1_octal(0xE0).unwrap(), "\\340");
        assert_eq!(latin1_octal(0x100), Err(PrepareError::Latin1OutOfRange(0x100)));
        assert_eq!(octal_escaped(&[0, 0o10, 0o377]), "\\0\\10\\377");
        assert_eq!(octal_escaped(&[]), "");
    }

    #[test]
    fn matches_std_for_unicode()
    {
        let codes = (0 ..= MAX_UNICODE_CODE)
            .step_by(97)
            .chain([0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x10000, MAX_UNICODE_CODE]);

        for code in codes {
            let Some(c) = char::from_u32(code) else {
                continue;
            };

            let mut buffer = [0u8; 4];
            assert_eq!(
                utf8_bytes(code).unwrap(),
                c.encode_utf8(&mut buffer).as_bytes(),
                "U+{:04X}",
                code
            );
        }
    }

    #[test]
    fn long_sequences()
    {
        // границы 4, 5 и 6-байтовых последовательностей
        let codes = [
            0x1F_FFFF,
            0x20_0000,
            0x20_1234,
            0x3FF_FFFF,
            0x400_0000,
            0x1234_5678,
            MAX_ENCODABLE_CODE,
        ];

        for code in codes {
            let octal = utf8_octal(code).unwrap();
            let bytes = unescape(&octal);

            assert!(
                bytes[1 ..].iter().all(|b| b & 0b_1100_0000 == TAG_CONT),
                "0x{:X}: {}",
                code,
                octal
            );
            assert_eq!(decode(&bytes), code, "0x{:X}: {}", code, octal);
        }

        assert_eq!(utf8_bytes(0x20_0000).unwrap().len(), 5);
        assert_eq!(utf8_bytes(0x400_0000).unwrap().len(), 6);
    }

    #[test]
    fn out_of_range()
    {
        assert_eq!(
            utf8_bytes(0x8000_0000),
            Err(PrepareError::CodeOutOfRange(0x8000_0000))
        );
        assert_eq!(utf8_octal(u32::MAX), Err(PrepareError::CodeOutOfRange(u32::MAX)));
    }
}

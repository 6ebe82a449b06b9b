//! Parsing vectors for all three value types.

use info_calc::errors::ParseError;
use info_calc::{BitCount, BitRate, ByteCount};

#[test]
fn test_byte_count_lenient() {
    let tc: &[(&str, u64)] = &[
        ("0B", 0),
        ("0 B", 0),
        ("18446744073709551615 B", u64::MAX),
        ("111B", 111),
        ("111b", 111),
        ("112 B", 112),
        ("113byte", 113),
        ("113bYtE", 113),
        ("114bytes", 114),
        ("114ByTeS", 114),
        ("115 byte", 115),
        ("116 bytes", 116),
        ("77000000000000 bytes", 77_000_000_000_000),
        ("210kB", 210_000),
        ("210Kb", 210_000),
        ("211 kB", 211_000),
        ("212kilobyte", 212_000),
        ("213KiLoBYTES", 213_000),
        ("214 kilobyte", 214_000),
        ("215 kilobytes", 215_000),
        ("220.5kB", 220_500),
        (".75 kB", 750),
        ("00.777 kilobytes", 777),
        ("310MB", 310_000_000),
        ("311 mb", 311_000_000),
        ("312megabytes", 312_000_000),
        ("320.25 MB", 320_250_000),
        ("0.000567 megabytes", 567),
        ("30000.0megabyte", 30_000_000_000),
        ("410GB", 410_000_000_000),
        ("411 Gb", 411_000_000_000),
        ("412gigaBYTE", 412_000_000_000),
        ("420.001 GB", 420_001_000_000),
        ("0.00000001GB", 10),
        ("510TB", 510_000_000_000_000),
        ("511 terabytes", 511_000_000_000_000),
        ("0.000000012 TB", 12_000),
        ("610PB", 610_000_000_000_000_000),
        ("611 petabyte", 611_000_000_000_000_000),
        ("18446 PB", 18_446_000_000_000_000_000),
        ("11EB", 11_000_000_000_000_000_000),
        ("18.2 EB", 18_200_000_000_000_000_000),
        ("260kib", 260 << 10),
        ("261 KiB", 261 << 10),
        ("262 kibibyte", 262 << 10),
        ("263 kiBIBYtes", 263 << 10),
        ("360MiB", 360 << 20),
        ("361 MiB", 361 << 20),
        ("362 mebibyte", 362 << 20),
        ("460GiB", 460 << 30),
        ("462 gibibyte", 462 << 30),
        ("560TiB", 560 << 40),
        ("562 tibibyte", 562 << 40),
        ("563 tibibytes", 563 << 40),
        ("660PiB", 660 << 50),
        ("662 pebibyte", 662 << 50),
        ("10EiB", 10 << 60),
        ("12.5 EiB", (12 << 60) + (512 << 50)),
        ("0.00001 kB", 0),
    ];
    for (input, expected) in tc {
        assert_eq!(
            ByteCount::parse(input),
            Ok(ByteCount::new(*expected)),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_byte_count_binary_interpretation() {
    let tc: &[(&str, u64)] = &[
        ("0 B", 0),
        ("18446744073709551615 B", u64::MAX),
        ("111b", 111),
        ("113byte", 113),
        ("210kB", 210 << 10),
        ("211 kB", 211 << 10),
        ("310MB", 310 << 20),
        ("311 MB", 311 << 20),
        ("312 megabytes", 312 << 20),
        ("410gb", 410 << 30),
        ("411 gB", 411 << 30),
        ("412 gigaBYtes", 412 << 30),
        ("510tb", 510 << 40),
        ("511 terabytes", 511 << 40),
        ("610pb", 610 << 50),
        ("611 petaBYTes", 611 << 50),
        ("11eb", 11 << 60),
        ("13.5 EiB", (13 << 60) + (512 << 50)),
        ("15.5 EB", (15 << 60) + (512 << 50)),
        ("260KiB", 260 << 10),
        ("360mib", 360 << 20),
        ("460gib", 460 << 30),
        ("560tib", 560 << 40),
        ("660pib", 660 << 50),
        ("10eib", 10 << 60),
    ];
    for (input, expected) in tc {
        assert_eq!(
            ByteCount::parse_binary(input),
            Ok(ByteCount::new(*expected)),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_byte_count_strict() {
    assert_eq!(ByteCount::parse_strict("0"), Ok(ByteCount::new(0)));
    assert_eq!(
        ByteCount::parse_strict("18446744073709551615"),
        Ok(ByteCount::new(u64::MAX))
    );
    assert_eq!(ByteCount::parse_strict("110"), Ok(ByteCount::new(110)));
    assert_eq!(ByteCount::parse_strict("110B"), Ok(ByteCount::new(110)));
    assert_eq!(ByteCount::parse_strict("210kB"), Ok(ByteCount::new(210_000)));
    assert_eq!(
        ByteCount::parse_strict_binary("210kB"),
        Ok(ByteCount::new(210 << 10))
    );
    assert_eq!(
        ByteCount::parse_strict_binary("260KiB"),
        Ok(ByteCount::new(260 << 10))
    );
    // Strict mode consumes the whole input as one token.
    assert!(matches!(
        ByteCount::parse_strict("112 B"),
        Err(ParseError::TrailingInput { .. })
    ));
    assert!(matches!(
        ByteCount::parse_strict("999 megabytes"),
        Err(ParseError::TrailingInput { .. })
    ));
}

#[test]
fn test_byte_count_errors() {
    assert_eq!(ByteCount::parse(""), Err(ParseError::Empty));
    assert_eq!(ByteCount::parse("   "), Err(ParseError::Empty));
    assert_eq!(
        ByteCount::parse("many bytes"),
        Err(ParseError::InvalidNumber {
            token: "many".into()
        })
    );
    assert_eq!(
        ByteCount::parse("+9999"),
        Err(ParseError::InvalidNumber {
            token: "+9999".into()
        })
    );
    assert_eq!(
        ByteCount::parse("999-666"),
        Err(ParseError::InvalidNumber {
            token: "999-666".into()
        })
    );
    for (input, literal) in [("0.1B", "0.1"), ("0.12 b", "0.12"), ("0.123bytes", "0.123")] {
        assert_eq!(
            ByteCount::parse(input),
            Err(ParseError::NonIntegerCount {
                literal: literal.into()
            }),
            "input: {input:?}"
        );
        assert!(matches!(
            ByteCount::parse_binary(input),
            Err(ParseError::NonIntegerCount { .. })
        ));
    }
    assert_eq!(ByteCount::parse_strict("0.1"), Err(ParseError::NonIntegerCount { literal: "0.1".into() }));
    assert_eq!(ByteCount::parse("999"), Err(ParseError::MissingUnit));
    assert_eq!(ByteCount::parse("999 "), Err(ParseError::MissingUnit));
    assert_eq!(ByteCount::parse("999  GB"), Err(ParseError::DoubledSpace));
    assert_eq!(
        ByteCount::parse("999 666"),
        Err(ParseError::UnknownUnit { unit: "666".into() })
    );
    for parse in [ByteCount::parse, ByteCount::parse_binary] {
        assert_eq!(
            parse("1.21jigowatts"),
            Err(ParseError::UnknownUnit {
                unit: "jigowatts".into()
            })
        );
        assert_eq!(
            parse("1.21 jigowatts"),
            Err(ParseError::UnknownUnit {
                unit: "jigowatts".into()
            })
        );
    }
    // Tier multiplication is checked.
    assert_eq!(ByteCount::parse("100 EB"), Err(ParseError::OutOfRange));
    assert_eq!(ByteCount::parse("20 EiB"), Err(ParseError::OutOfRange));
    assert_eq!(
        ByteCount::parse("18446744073709551616 B"),
        Err(ParseError::OutOfRange)
    );
    assert!(matches!(
        ByteCount::parse("112 B  trailing"),
        Err(ParseError::TrailingInput { .. })
    ));
}

#[test]
fn test_bit_count_lenient() {
    let tc: &[(&str, u64)] = &[
        ("0bit", 0),
        ("1 bit", 1),
        ("1111 bit", 1111),
        ("110bits", 110),
        ("210kbit", 210_000),
        ("211 kBit", 211_000),
        ("212kilobit", 212_000),
        ("213KiLoBITS", 213_000),
        ("220.5kbit", 220_500),
        (".75 kbit", 750),
        ("310Mbit", 310_000_000),
        ("1.23Mbit", 1_230_000),
        ("262 kibibit", 262 << 10),
        ("234.56 kibibits", 240_189),
        ("360Mibit", 360 << 20),
        ("562 tebibit", 562 << 40),
        ("999 Tbit", 999_000_000_000_000),
        ("10Eibit", 10 << 60),
    ];
    for (input, expected) in tc {
        assert_eq!(
            BitCount::parse(input),
            Ok(BitCount::new(*expected)),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_bit_count_modes() {
    assert_eq!(BitCount::parse_binary("100 kbit"), Ok(BitCount::new(102_400)));
    assert_eq!(BitCount::parse_binary("211 kBit"), Ok(BitCount::new(211 << 10)));
    assert_eq!(BitCount::parse_strict("1024"), Ok(BitCount::new(1024)));
    assert_eq!(BitCount::parse_strict("1Kibit"), Ok(BitCount::new(1024)));
    assert_eq!(
        BitCount::parse_strict_binary("100kbit"),
        Ok(BitCount::new(102_400))
    );
    assert_eq!(BitCount::parse("999"), Err(ParseError::MissingUnit));
    assert_eq!(
        BitCount::parse("0.5 bits"),
        Err(ParseError::NonIntegerCount {
            literal: "0.5".into()
        })
    );
}

#[test]
fn test_bit_count_round_trip_at_tier_boundaries() {
    // Formatting at a tier boundary parses back to the same value.
    let v = BitCount::new(1024);
    assert_eq!(format!("{:.0}", v.display().binary()), "1Kibit");
    assert_eq!(BitCount::parse("1 Kibit"), Ok(v));
    for raw in [1u64, 999, 1000, 1024, 1_000_000, 1 << 20, u64::MAX] {
        let v = BitCount::new(raw);
        assert_eq!(BitCount::parse(&v.to_text()), Ok(v), "raw: {raw}");
    }
}

#[test]
fn test_case_insensitive_spellings_agree() {
    let a = ByteCount::parse("210KB").unwrap();
    let b = ByteCount::parse("210kb").unwrap();
    let c = ByteCount::parse("210 kilobytes").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, ByteCount::new(210_000));
}

#[test]
fn test_bit_rate_lenient() {
    let tc: &[(&str, f64)] = &[
        ("0bit/s", 0.0),
        ("0bps", 0.0),
        ("0 bit/s", 0.0),
        ("0 bps", 0.0),
        ("9999.9999 bit/s", 9999.9999),
        ("111BIT/S", 111.0),
        ("111bps", 111.0),
        ("112 BIT/S", 112.0),
        ("113bIt/s", 113.0),
        ("114bit per second", 114.0),
        ("115.5 bit per second", 115.5),
        ("116.5bits per second", 116.5),
        ("117.5 bits per second", 117.5),
        ("77000000000000 bit/s", 77e12),
        ("1bit/s", 1.0),
        ("9 bit/s", 9.0),
        ("0.77 bps", 0.77),
        ("1.23 kilobits per second", 1230.0),
        ("12345.678 kilobits per second", 12_345_678.0),
        ("-1 kbit/s", -1000.0),
        ("+1 kbit/s", 1000.0),
        ("210kbps", 210_000.0),
        ("211 kbit/s", 211_000.0),
        ("310Mbit/s", 310e6),
        ("261 Kibit/s", 261.0 * 1024.0),
        ("360Mibps", 360.0 * 1_048_576.0),
        ("0.00001 kbit/s", 0.01),
    ];
    for (input, expected) in tc {
        assert_eq!(
            BitRate::parse(input),
            Ok(BitRate::new(*expected)),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_bit_rate_binary_interpretation() {
    assert_eq!(BitRate::parse_binary("1 kbps"), Ok(BitRate::new(1024.0)));
    assert_eq!(BitRate::parse_binary("100 kbit/s"), Ok(BitRate::new(102_400.0)));
    assert_eq!(
        BitRate::parse_binary("1.5 kilobits per second"),
        Ok(BitRate::new(1536.0))
    );
    assert_eq!(BitRate::parse_binary("-1 kbit/s"), Ok(BitRate::new(-1024.0)));
    assert_eq!(BitRate::parse_binary("+1 kbit/s"), Ok(BitRate::new(1024.0)));
    assert_eq!(BitRate::parse_binary("9 bit/s"), Ok(BitRate::new(9.0)));
}

#[test]
fn test_bit_rate_strict() {
    assert_eq!(BitRate::parse_strict("0"), Ok(BitRate::new(0.0)));
    assert_eq!(BitRate::parse_strict("110"), Ok(BitRate::new(110.0)));
    assert_eq!(BitRate::parse_strict("110.5"), Ok(BitRate::new(110.5)));
    assert_eq!(BitRate::parse_strict("110bps"), Ok(BitRate::new(110.0)));
    assert_eq!(BitRate::parse_strict("113bit/s"), Ok(BitRate::new(113.0)));
    assert_eq!(
        BitRate::parse_strict("114bit per second"),
        Ok(BitRate::new(114.0))
    );
    assert_eq!(
        BitRate::parse_strict_binary("210kbit/s"),
        Ok(BitRate::new(210.0 * 1024.0))
    );
    assert!(matches!(
        BitRate::parse_strict("112 BIT/S"),
        Err(ParseError::TrailingInput { .. })
    ));
}

#[test]
fn test_bit_rate_special_numerals() {
    assert!(BitRate::parse("nan bit/s").unwrap().is_nan());
    assert!(BitRate::parse("NaN bit/s").unwrap().is_nan());
    assert_eq!(
        BitRate::parse("+inf bit/s"),
        Ok(BitRate::new(f64::INFINITY))
    );
    assert_eq!(
        BitRate::parse("-inf bit/s"),
        Ok(BitRate::new(f64::NEG_INFINITY))
    );
    // An unsigned "inf" is not a numeral.
    assert_eq!(
        BitRate::parse("inf bit/s"),
        Err(ParseError::InvalidNumber {
            token: "inf".into()
        })
    );
}

#[test]
fn test_bit_rate_errors() {
    assert_eq!(BitRate::parse(""), Err(ParseError::Empty));
    assert_eq!(
        BitRate::parse("fast bit/s"),
        Err(ParseError::InvalidNumber {
            token: "fast".into()
        })
    );
    assert_eq!(BitRate::parse("999"), Err(ParseError::MissingUnit));
    assert_eq!(BitRate::parse("999  Gbit/s"), Err(ParseError::DoubledSpace));
    assert_eq!(
        BitRate::parse("999 666"),
        Err(ParseError::UnknownUnit { unit: "666".into() })
    );
    assert_eq!(
        BitRate::parse("+9999"),
        Err(ParseError::MissingUnit)
    );
    assert_eq!(
        BitRate::parse("999-666"),
        Err(ParseError::InvalidNumber {
            token: "999-666".into()
        })
    );
    assert_eq!(
        BitRate::parse("1.21jigowatts"),
        Err(ParseError::UnknownUnit {
            unit: "jigowatts".into()
        })
    );
    assert_eq!(
        BitRate::parse("1.21 jigowatts"),
        Err(ParseError::UnknownUnit {
            unit: "jigowatts".into()
        })
    );
    assert_eq!(
        BitRate::parse("1.21jigo watts"),
        Err(ParseError::MalformedRateSuffix {
            suffix: "jigo watts".into()
        })
    );
    assert_eq!(
        BitRate::parse("1.21 jigo watts"),
        Err(ParseError::MalformedRateSuffix {
            suffix: "jigo watts".into()
        })
    );
    assert_eq!(
        BitRate::parse("1.21jigowatts per second"),
        Err(ParseError::UnknownUnit {
            unit: "jigowatts per second".into()
        })
    );
    assert_eq!(
        BitRate::parse("12.3 kilobits per minute"),
        Err(ParseError::MalformedRateSuffix {
            suffix: "kilobits per minute".into()
        })
    );
}

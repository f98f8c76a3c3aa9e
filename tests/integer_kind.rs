mod common;

use common::{hash_of, init_tracing};
use numcell::{Integer, Kind, Literal, Natural, NumcellError, Radix, create_integer};

fn integer(text: &str) -> Integer {
    create_integer(text, Radix::Decimal).expect("valid integer")
}

#[test]
fn native_constructors() {
    let i = Integer::from(u64::MAX);
    assert!(!i.sign() && i.trivial() && i.defined());
    assert_eq!(i.value(), u64::MAX);

    let i = Integer::from(1234i64);
    assert!(!i.sign());
    assert_eq!(i.value(), 1234);

    let i = Integer::from(-1234i64);
    assert!(i.sign() && i.trivial());
    assert_eq!(i.value(), 1234);

    let i = Integer::from(i64::MIN);
    assert!(i.sign());
    assert_eq!(i.value(), 1 << 63);
    assert_eq!(i.to_i64(), Some(i64::MIN));
}

#[test]
fn binary_strings() {
    let i = create_integer("0111", Radix::Binary).expect("binary");
    assert!(i.trivial());
    assert_eq!(i.value(), 7);

    let i = create_integer(
        "0111101111110010000001001110111001111011111100100000010011101101",
        Radix::Binary,
    )
    .expect("binary");
    assert!(i.trivial());
    assert_eq!(i.value(), 0x7bf204ee7bf204ed);

    let i = create_integer(&"1".repeat(64), Radix::Binary).expect("binary");
    assert!(i.trivial());
    assert_eq!(i.value(), u64::MAX);

    let i = create_integer(
        "1010100111101111110010000001001110111001111011111100100000010011101101",
        Radix::Binary,
    )
    .expect("binary");
    assert!(!i.sign() && !i.trivial() && i.defined());
    assert_eq!(i.word(1), 0x2a);
    assert_eq!(i.word(0), 0x7bf204ee7bf204ed);
}

#[test]
fn octal_strings() {
    let i = create_integer("54321", Radix::Octal).expect("octal");
    assert_eq!(i.value(), 0o54321);

    let i = create_integer("1777777777777777777777", Radix::Octal).expect("octal");
    assert!(i.trivial());
    assert_eq!(i.value(), u64::MAX);

    let i = create_integer("1543217060554321706053", Radix::Octal).expect("octal");
    assert!(i.trivial());
    assert_eq!(i.value(), 0o1543217060554321706053);

    let i = create_integer("7543217060554321706053", Radix::Octal).expect("octal");
    assert!(!i.trivial());
    assert_eq!(i.word(1), 0o3);
    assert_eq!(i.word(0), 0o1543217060554321706053);
}

#[test]
fn hexadecimal_strings() {
    let i = create_integer("e1", Radix::Hexadecimal).expect("hex");
    assert_eq!(i.value(), 0xe1);

    let i = create_integer("ffffffffffffffff", Radix::Hexadecimal).expect("hex");
    assert!(i.trivial());
    assert_eq!(i.value(), u64::MAX);

    let i = create_integer("feedbee0123456789", Radix::Hexadecimal).expect("hex");
    assert!(!i.trivial());
    assert_eq!(i.word(1), 0xf);
    assert_eq!(i.word(0), 0xeedbee0123456789);

    let text = concat!(
        "affe",
        "feedbeef13579024",
        "9024feedbeef1357",
        "13579024feedbeef",
        "beef13579024feed",
        "feedbeef13579024",
        "edbeef13579024fe",
        "ef13579024feedbe",
        "579024feedbeef13",
        "24feedbeef135790",
    );
    let i = create_integer(text, Radix::Hexadecimal).expect("hex");
    assert_eq!(
        i.words(),
        &[
            0x24feedbeef135790,
            0x579024feedbeef13,
            0xef13579024feedbe,
            0xedbeef13579024fe,
            0xfeedbeef13579024,
            0xbeef13579024feed,
            0x13579024feedbeef,
            0x9024feedbeef1357,
            0xfeedbeef13579024,
            0xaffe,
        ]
    );
    assert_eq!(i.to_string_radix(Radix::Hexadecimal, Literal::None), Ok(text.to_string()));
}

#[test]
fn decimal_strings() {
    let i = integer("-64242662");
    assert!(i.sign() && i.trivial());
    assert_eq!(i.value(), 64242662);

    let i = integer("18446744073709551615");
    assert!(i.trivial());
    assert_eq!(i.value(), u64::MAX);

    let i = integer("18446744073709551616");
    assert!(!i.trivial());
    assert_eq!(i.word(1), 1);
    assert_eq!(i.word(0), 0);

    let i = integer("-373846321009187212372");
    assert!(i.sign() && !i.trivial());
    assert_eq!(i.word(1), 0x14);
    assert_eq!(i.word(0), 0x4428f03c3341cc54);

    let i = integer("12373846321009187212372");
    assert_eq!(i.word(1), 0x29e);
    assert_eq!(i.word(0), 0xc99d1582a2c1cc54);

    let i = integer("9238463426628462523573846321009187212372");
    assert_eq!(i.words(), &[0x2893945af841cc54, 0x263f55d94d2aacd2, 0x1b]);
    assert_eq!(i.to_string(), "9238463426628462523573846321009187212372");
}

#[test]
fn zero_has_no_sign() {
    let negative_zero = integer("-0");
    assert!(!negative_zero.sign());
    assert_eq!(negative_zero, integer("0"));
    assert_eq!(hash_of(&negative_zero), hash_of(&integer("0")));
    assert_eq!(-Integer::from(0u64), Integer::from(0u64));
    assert_eq!(negative_zero.to_string(), "0");
}

#[test]
fn hash_depends_on_sign() {
    assert_ne!(hash_of(&integer("1234")), hash_of(&integer("-1234")));
    assert_eq!(hash_of(&integer("1234")), hash_of(&Integer::from(1234u64)));
    let big = integer("9238463426628462523573846321009187212372");
    assert_eq!(hash_of(&big), hash_of(&big.clone()));
    assert_ne!(hash_of(&big), hash_of(&-big.clone()));
}

#[test]
fn addition_and_subtraction() {
    init_tracing();
    assert_eq!(&integer("5") + &integer("-8"), integer("-3"));
    assert_eq!(&integer("-5") - &integer("-8"), integer("3"));
    assert_eq!(integer("-5") + integer("5"), integer("0"));

    // carrying into a second word promotes, borrowing back demotes
    let max = Integer::from(u64::MAX);
    let promoted = &max + &Integer::from(1u64);
    assert!(!promoted.trivial());
    assert_eq!(promoted, integer("18446744073709551616"));
    let demoted = &promoted - &Integer::from(1u64);
    assert!(demoted.trivial());
    assert_eq!(demoted, max);

    let mut counter = Integer::from(-1i64);
    counter += 1u64;
    assert_eq!(counter, Integer::from(0u64));
    counter -= 1u64;
    counter -= 1u64;
    assert_eq!(counter, Integer::from(-2i64));
    counter += &integer("10");
    assert_eq!(counter, 8u64);
}

#[test]
fn multiplication() {
    let two_64 = integer("18446744073709551616");
    assert_eq!((&two_64 * &two_64).words(), &[0, 0, 1]);
    assert_eq!(integer("-3") * integer("7"), integer("-21"));
    assert_eq!(integer("-3") * integer("-7"), integer("21"));
    assert_eq!(
        integer("9238463426628462523573846321009187212372") * integer("0"),
        integer("0")
    );
    assert_eq!(
        integer("123456789012345678901234567890") * integer("-987654321098765432109876543210"),
        integer("-121932631137021795226185032733622923332237463801111263526900")
    );
}

#[test]
fn truncating_division() {
    assert_eq!(integer("-7") / integer("2"), integer("-3"));
    assert_eq!(integer("-7") % integer("2"), integer("-1"));
    assert_eq!(integer("7") / integer("-2"), integer("-3"));
    assert_eq!(integer("7") % integer("-2"), integer("1"));
    assert_eq!(integer("-7") / integer("-2"), integer("3"));

    let a = integer("9238463426628462523573846321009187212372");
    let b = integer("373846321009187212372");
    let product = &a * &b;
    assert_eq!(&product / &b, a);
    assert_eq!(&(&product + &integer("5")) % &b, integer("5"));
    let (quotient, remainder) = a.divrem(&b).expect("non-zero divisor");
    assert_eq!(&(&quotient * &b) + &remainder, a);
    assert!(remainder < b);
}

#[test]
fn division_by_zero() {
    assert!(matches!(
        integer("1").checked_div(&integer("0")),
        Err(NumcellError::Domain(_))
    ));
    assert!(matches!(
        integer("1").checked_rem(&integer("-0")),
        Err(NumcellError::Domain(_))
    ));
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_operator_panics_on_zero() {
    let _ = integer("1") / integer("0");
}

#[test]
fn powers() {
    assert_eq!(integer("-5").pow(4), integer("625"));
    assert_eq!(integer("-23").pow(3), integer("-12167"));
    assert_eq!(integer("2").pow(16), integer("65536"));
    assert_eq!(integer("7").pow(0), integer("1"));
    assert_eq!(integer("2").pow(64), integer("18446744073709551616"));
    assert_eq!(integer("-2").checked_pow(&Natural::from(3u64)), Ok(integer("-8")));
    let huge = &Natural::from(u64::MAX) + &Natural::from(1u64);
    assert!(matches!(integer("2").checked_pow(&huge), Err(NumcellError::Domain(_))));
}

#[test]
fn shifts_and_complement() {
    let one = Integer::from(1u64);
    let shifted = &one << 64;
    assert_eq!(shifted.words(), &[0, 1]);
    assert_eq!(&shifted >> 64, one);
    assert_eq!(Integer::from(-8i64) >> 1, Integer::from(-4i64));
    assert_eq!(Integer::from(-1i64) >> 1, Integer::from(0u64));
    assert_eq!(!Integer::from(0u64), Integer::from(u64::MAX));
    assert_eq!(!&Integer::from(u64::MAX), Integer::from(0u64));
    // every stored word is complemented
    assert_eq!((!&integer("18446744073709551616")).words(), &[u64::MAX, u64::MAX - 1]);
}

#[test]
fn ordering() {
    let mut values = vec![
        integer("18446744073709551616"),
        integer("3"),
        integer("-3"),
        integer("0"),
        integer("-18446744073709551617"),
        integer("-5"),
    ];
    values.sort();
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        rendered,
        ["-18446744073709551617", "-5", "-3", "0", "3", "18446744073709551616"]
    );
}

#[test]
fn conversions() {
    assert_eq!("42".parse::<Integer>(), Ok(Integer::from(42u64)));
    assert_eq!(Integer::from(-42i64).to_u64(), None);
    assert_eq!(Integer::from(-42i64).to_i64(), Some(-42));
    assert_eq!(Integer::from(u64::MAX).to_i64(), None);
    assert_eq!(integer("18446744073709551616").to_u64(), None);
    assert_eq!(Integer::from(-42i64).abs(), Integer::from(42u64));
    assert_eq!(integer("12").gcd(&integer("-18")), Integer::from(6u64));
    assert!(Integer::default().is_zero());
}

#[test]
fn kind_identity() {
    let i = integer("1");
    assert_eq!(i.kind(), "Integer");
    assert_eq!(i.identifier(), 1);
    assert_eq!(<Integer as Kind>::UID, 1);
}

#[test]
fn multi_word_gcd_shifts_and_powers() {
    let two_64 = integer("18446744073709551616");
    let a = &two_64 * &integer("6");
    let b = &two_64 * &integer("-4");
    assert_eq!(a.gcd(&b), integer("36893488147419103232"));
    assert_eq!(&(&Integer::from(1u64) << 200) >> 136, two_64);
    assert_eq!(integer("3").pow(100), integer("515377520732011331036461129765621272702107522001"));
    let (quotient, remainder) = integer("515377520732011331036461129765621272702107522001")
        .divrem(&integer("-3").pow(41))
        .expect("non-zero divisor");
    assert_eq!(quotient, integer("-14130386091738734504764811067"));
    assert!(remainder.is_zero());
}

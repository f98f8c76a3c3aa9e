mod common;

use std::collections::HashSet;

use common::{address, hash_of};
use numcell::{
    Decimal, Integer, Kind, Literal, Natural, NumcellError, Radix, Rational, RationalLayout, Settings,
    create_decimal, create_rational,
};

fn rational(text: &str) -> Rational {
    create_rational(text, Radix::Decimal).expect("valid rational")
}

#[test]
fn whole_numbers() {
    let r = rational("5");
    assert!(!r.sign());
    assert!(!r.trivial());
    assert!(r.defined());
    assert_eq!(r.numerator(), 5u64);
    assert_eq!(r.denominator(), 1u64);
}

#[test]
fn fractions_are_kept_as_written() {
    let r = rational("2/31");
    assert!(!r.sign() && !r.trivial() && r.defined());
    assert_eq!(r.numerator(), 2u64);
    assert_eq!(r.denominator(), 31u64);

    let r = rational("4/6");
    assert_eq!(r.numerator(), 4u64);
    assert_eq!(r.denominator(), 6u64);
    let reduced = r.reduce();
    assert_eq!(reduced.numerator(), 2u64);
    assert_eq!(reduced.denominator(), 3u64);
}

#[test]
fn signs_combine() {
    assert!(rational("-1/2").sign());
    assert!(rational("1/-2").sign());
    assert!(!rational("-1/-2").sign());
    assert!(!rational("-0/5").sign());
    assert_eq!(rational("-1/2").numerator(), Integer::from(-1i64));
    assert_eq!(rational("1/-2").denominator(), 2u64);
}

#[test]
fn zero_denominator_is_a_domain_error() {
    assert!(matches!(
        Rational::new(&Integer::from(1u64), &Integer::from(0u64)),
        Err(NumcellError::Domain(_))
    ));
    assert!(matches!(create_rational("3/0", Radix::Decimal), Err(NumcellError::Domain(_))));
}

#[test]
fn malformed_fractions_are_parse_errors() {
    for input in ["", "/", "1/", "/2", "1/2/3", "1.5/2", "a/b"] {
        let result = create_rational(input, Radix::Decimal);
        assert!(matches!(result, Err(NumcellError::Parse { .. })), "{:?} gave {:?}", input, result);
    }
}

#[test]
fn value_equality_and_hash() {
    let half = rational("1/2");
    let other = rational("2/4");
    assert_eq!(half, other);
    assert_eq!(hash_of(&half), hash_of(&other));
    assert_ne!(half, rational("-1/2"));
    assert_ne!(hash_of(&half), hash_of(&rational("-1/2")));
    assert_eq!(rational("0/3"), rational("0/7"));

    let set: HashSet<Rational> = ["1/3", "2/6", "3/9", "1/4"].iter().map(|t| rational(t)).collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn clone_is_deep() {
    let r = rational("2/31");
    let copy = r.clone();
    assert_ne!(address(r.data()), address(copy.data()));
    assert_eq!(r, copy);
    let layout = copy.data().layout::<RationalLayout>().expect("rational layout");
    assert_eq!(layout.numerator(), &Natural::from(2u64));
    assert_eq!(layout.denominator(), &Natural::from(31u64));
}

#[test]
fn arithmetic_does_not_reduce() {
    let sum = &rational("1/2") + &rational("1/3");
    assert_eq!(sum.numerator(), 5u64);
    assert_eq!(sum.denominator(), 6u64);

    let sum = &rational("1/4") + &rational("1/4");
    assert_eq!(sum.numerator(), 8u64);
    assert_eq!(sum.denominator(), 16u64);
    assert_eq!(sum, rational("1/2"));

    let difference = &rational("1/3") - &rational("1/2");
    assert_eq!(difference, rational("-1/6"));
    assert!(difference.sign());

    let product = rational("-2/3") * rational("3/4");
    assert_eq!(product, rational("-1/2"));

    let quotient = rational("1/2") / rational("-1/4");
    assert_eq!(quotient, rational("-2"));

    assert!(matches!(
        rational("1/2").checked_div(&rational("0")),
        Err(NumcellError::Domain(_))
    ));
    assert_eq!(rational("-2/3").recip(), Ok(rational("-3/2")));
    assert_eq!(-rational("2/3"), rational("-2/3"));
}

#[test]
fn ordering_by_value() {
    assert!(rational("1/3") < rational("1/2"));
    assert!(rational("-1/2") < rational("-1/3"));
    assert!(rational("2/4") <= rational("1/2"));
    assert!(rational("7") > rational("13/2"));
}

#[test]
fn rendering_and_round_trip() {
    let r = rational("-31/2");
    assert_eq!(r.to_string(), "-31/2");
    let hex = r.to_string_radix(Radix::Hexadecimal, Literal::C).expect("hex");
    assert_eq!(hex, "-0x1f/0x2");
    assert_eq!(Rational::parse(&hex, Radix::Hexadecimal, Literal::C), Ok(r.clone()));
    assert!(r.to_string_radix(Radix::Radix64, Literal::Base64).is_err());
    assert_eq!(rational("5").to_string(), "5/1");
}

#[test]
fn conversion_to_decimal() {
    let settings = Settings::default();
    assert_eq!(rational("1/2").to_decimal(&settings), Ok(create_decimal("0.5", Radix::Decimal).expect("decimal")));
    assert_eq!(rational("-5/4").to_decimal(&settings), Ok(create_decimal("-1.25", Radix::Decimal).expect("decimal")));

    let settings = Settings {
        decimal_precision: 5,
        ..Settings::default()
    };
    let third = rational("1/3").to_decimal(&settings).expect("decimal");
    assert_eq!(third.to_string(), "0.33333");
    assert_eq!(third, Decimal::try_from(0.33333).expect("finite"));
}

#[test]
fn kind_identity() {
    let r = rational("1/2");
    assert_eq!(r.kind(), "Rational");
    assert_eq!(r.identifier(), 3);
    assert_eq!(Rational::from(Integer::from(3u64)), rational("6/2"));
    assert_eq!("6/4".parse::<Rational>(), Ok(rational("3/2")));
}

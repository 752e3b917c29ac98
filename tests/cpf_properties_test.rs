use cpf_gen::{
    check, compute_verifiers, format_identifier, generate, is_valid, Cpf, DigitSource, Generator,
    Rejection, Verifiers,
};

#[test]
fn test_generated_identifiers_round_trip() {
    let mut generator = Generator::from_seed(2024);
    for _ in 0..1_000 {
        let formatted = generator.generate().unwrap();
        assert!(is_valid(&formatted), "{} should be valid", formatted);
        assert_eq!(formatted.len(), 14);

        let bytes = formatted.as_bytes();
        assert_eq!(bytes[3], b'.');
        assert_eq!(bytes[7], b'.');
        assert_eq!(bytes[11], b'-');
    }
}

#[test]
fn test_generated_base_is_never_degenerate() {
    let mut generator = Generator::from_seed(1);
    for cpf in generator.generate_many(1_000).unwrap() {
        let base = cpf.base();
        assert!(base.iter().any(|&d| d != base[0]), "degenerate base in {}", cpf);
    }
}

#[test]
fn test_thread_rng_generation() {
    for _ in 0..50 {
        assert!(is_valid(&generate().unwrap()));
    }
}

#[test]
fn test_known_vector() {
    assert_eq!(
        compute_verifiers(&[1, 1, 1, 4, 4, 4, 7, 7, 7]).unwrap(),
        Verifiers { first: 3, second: 5 }
    );
    assert_eq!(
        format_identifier(&[1, 1, 1, 4, 4, 4, 7, 7, 7, 3, 5]).unwrap(),
        "111.444.777-35"
    );
    assert!(is_valid("111.444.777-35"));
}

#[test]
fn test_format_independence() {
    let pairs = [
        ("11144477735", "111.444.777-35"),
        ("11144477736", "111.444.777-36"),
        ("52998224725", "529.982.247-25"),
    ];
    for (bare, punctuated) in pairs {
        assert_eq!(is_valid(bare), is_valid(punctuated));
    }
}

#[test]
fn test_length_rejection() {
    assert!(!is_valid("123.456.789-0"));
    assert!(!is_valid("123.456.789-012"));
}

#[test]
fn test_degenerate_rejection() {
    // 111.111.111-11 and 000.000.000-00 have arithmetically correct verifiers
    assert_eq!(
        compute_verifiers(&[1; 9]).unwrap(),
        Verifiers { first: 1, second: 1 }
    );
    assert_eq!(check("111.111.111-11"), Err(Rejection::Degenerate));
    assert!(!is_valid("000.000.000-00"));
}

#[test]
fn test_remainder_zero_and_one_give_zero() {
    // sum 66 -> remainder 0
    assert_eq!(compute_verifiers(&[6, 0, 0, 0, 0, 0, 0, 0, 3]).unwrap().first, 0);
    // sum 12 -> remainder 1
    assert_eq!(compute_verifiers(&[1, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap().first, 0);
    // second verifier: sum 33 -> remainder 0, sum 45 -> remainder 1
    assert_eq!(compute_verifiers(&[1, 0, 0, 0, 0, 0, 0, 0, 2]).unwrap().second, 0);
    assert_eq!(compute_verifiers(&[2, 0, 0, 0, 0, 0, 0, 0, 3]).unwrap().second, 0);
    assert!(is_valid("100.000.002-80"));
}

#[test]
fn test_out_of_range_source_is_rejected() {
    let err = Generator::new(Constant(10)).generate().unwrap_err();
    assert!(matches!(
        err,
        cpf_gen::CpfError::InvalidDigit {
            position: 0,
            value: 10
        }
    ));
}

#[test]
fn test_parse_into_cpf() {
    let cpf: Cpf = "529.982.247-25".parse().unwrap();
    assert_eq!(cpf.plain(), "52998224725");
    assert_eq!(cpf.verifiers(), Verifiers { first: 2, second: 5 });
}

struct Constant(u8);

impl DigitSource for Constant {
    fn next_digit(&mut self) -> u8 {
        self.0
    }
}

#[test]
fn test_stuck_source_exhausts_retries() {
    let err = Generator::new(Constant(4))
        .with_max_attempts(Some(3))
        .generate()
        .unwrap_err();
    assert!(matches!(err, cpf_gen::CpfError::ExhaustedRetries { attempts: 3 }));
}

use brdocs::{
    cnpj, cpf, is_from_domain, validate_email, validate_password, Document, DocumentKind,
    FormatError, InvalidDocument, PasswordRules, Validator,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TRIALS: usize = 10_000;

#[test]
fn generated_cpfs_always_validate() {
    for _ in 0..TRIALS {
        let generated = cpf::generate();
        assert!(cpf::validate(&generated), "{generated}");
    }
}

#[test]
fn generated_cnpjs_always_validate() {
    for _ in 0..TRIALS {
        let generated = cnpj::generate();
        assert!(cnpj::validate(&generated), "{generated}");
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let first: Vec<String> = {
        let mut rng = StdRng::seed_from_u64(7);
        (0..10).map(|_| cpf::generate_with(&mut rng)).collect()
    };
    let second: Vec<String> = {
        let mut rng = StdRng::seed_from_u64(7);
        (0..10).map(|_| cpf::generate_with(&mut rng)).collect()
    };
    assert_eq!(first, second);
}

#[test]
fn known_vectors() {
    assert!(cpf::validate("11144477735"));
    assert!(!cpf::validate("11144477736"));
    assert!(cnpj::validate("11222333000181"));
    assert!(cnpj::validate("11.222.333/0001-81"));
    assert!(!cnpj::validate("11.222.333/0001-80"));
}

#[test]
fn repeated_digits_never_validate() {
    for digit in '0'..='9' {
        let cpf_id: String = std::iter::repeat(digit).take(11).collect();
        let cnpj_id: String = std::iter::repeat(digit).take(14).collect();
        assert!(!cpf::validate(&cpf_id));
        assert!(!cnpj::validate(&cnpj_id));
    }
}

#[test]
fn mask_round_trip() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..1_000 {
        let generated = cpf::generate_with(&mut rng);
        assert_eq!(cpf::unmask(&cpf::mask(&generated).unwrap()), generated);

        let generated = cnpj::generate_with(&mut rng);
        assert_eq!(cnpj::unmask(&cnpj::mask(&generated).unwrap()), generated);
    }
}

#[test]
fn mask_on_short_input_is_an_error() {
    assert_eq!(
        cpf::mask("12345"),
        Err(FormatError::WrongLength {
            kind: DocumentKind::Cpf,
            expected: 11,
            actual: 5,
        })
    );
    assert!(cnpj::mask("12345").is_err());
}

#[test]
fn format_shapes() {
    assert!(cpf::is_valid_format("123.456.789-00"));
    assert!(cpf::is_valid_format("12345678900"));
    assert!(cpf::is_valid_format("123.456"));
    assert!(!cpf::is_valid_format("abc.def.ghi-jk"));

    // the shape check does not look at the checksum
    assert!(!cpf::validate("123.456.789-00"));
}

#[test]
fn document_value_object() {
    let parsed = Document::parse(DocumentKind::Cnpj, "11.222.333/0001-81").unwrap();
    assert_eq!(parsed.digits(), "11222333000181");
    assert_eq!(parsed.to_string(), "11.222.333/0001-81");

    assert!(matches!(
        Document::parse(DocumentKind::Cpf, "111.111.111-11"),
        Err(InvalidDocument::RepeatedDigits { .. })
    ));
}

#[test]
fn email_and_password_contracts() {
    assert!(validate_email("test@example.com"));
    assert!(is_from_domain("a@sub.example.com", "example.com"));
    assert!(!is_from_domain("a@example.com", "sub.example.com"));

    assert!(validate_password("Password147!"));
    assert!(!validate_password("abcabc123"));
    assert!(PasswordRules::default()
        .prevent_sequential(false)
        .is_valid("Password123!"));
}

#[test]
fn validators_are_usable_across_threads() {
    let validators: Vec<Box<dyn Validator>> = vec![
        Box::new(DocumentKind::Cpf),
        Box::new(DocumentKind::Cnpj),
        Box::new(PasswordRules::default()),
    ];
    std::thread::scope(|scope| {
        for validator in &validators {
            scope.spawn(move || {
                for _ in 0..100 {
                    assert!(!validator.is_valid("not valid"));
                }
            });
        }
    });
}

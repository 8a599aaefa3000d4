use afl::fuzz;
use brdocs::{
    check_password, clean, extract_domain, extract_local_part, normalize_email, validate_email,
    DocumentKind, PasswordRules,
};
use rand::{rngs::StdRng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().rposition(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    for kind in [DocumentKind::Cpf, DocumentKind::Cnpj] {
        let valid = kind.validate(input);
        assert_eq!(valid, kind.check(input).is_ok());

        match kind.mask(input) {
            Ok(masked) => {
                assert_eq!(kind.unmask(&masked), clean(input));
                assert!(kind.is_valid_format(&masked));
                assert_eq!(kind.validate(&masked), valid);
            }
            Err(_) => assert!(!valid),
        }
        // Shape checks must never panic, whatever they return
        kind.is_valid_format(input);

        let generated = kind.generate_with(&mut rng);
        assert!(kind.validate(&generated), "{kind} {generated}");
    }

    if validate_email(input) {
        assert!(extract_domain(input).is_some());
        assert!(extract_local_part(input).is_some());
        assert!(validate_email(&normalize_email(input)));
    }
    check_password(input, &PasswordRules::default());
}

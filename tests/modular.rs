use rsanum::bignum::{BigNum, BigNumError, Radix};

fn num(v: i64) -> BigNum {
    BigNum::from(v)
}

fn hex(s: &str) -> BigNum {
    BigNum::from_str_radix(s, Radix::Hexadecimal).unwrap()
}

#[test]
fn modulus_follows_the_sign_of_the_modulus() {
    // Positive modulus: results in [0, m).
    assert_eq!(num(7).modulus(&num(3)).unwrap(), num(1));
    assert_eq!(num(-7).modulus(&num(3)).unwrap(), num(2));
    assert_eq!(num(-3).modulus(&num(3)).unwrap(), num(0));

    // Negative modulus: results in (m, 0].
    assert_eq!(num(7).modulus(&num(-3)).unwrap(), num(-2));
    assert_eq!(num(-7).modulus(&num(-3)).unwrap(), num(-1));
    assert_eq!(num(6).modulus(&num(-3)).unwrap(), num(0));
}

#[test]
fn modulus_range_is_respected() {
    let values = [-1000i64, -37, -1, 0, 1, 37, 1000];
    let moduli = [3i64, 26, 1000, -3, -26];

    for &a in &values {
        for &m in &moduli {
            let result = num(a).modulus(&num(m)).unwrap();
            if m > 0 {
                assert!(result >= num(0) && result < num(m), "{a} mod {m}");
            } else {
                assert!(result > num(m) && result <= num(0), "{a} mod {m}");
            }

            // The result is congruent to the input.
            let difference = num(a).sub(&result);
            assert!((&difference % &num(m)).is_zero(), "{a} mod {m}");
        }
    }
}

#[test]
fn modulus_by_zero_is_rejected() {
    assert_eq!(num(5).modulus(&num(0)), Err(BigNumError::DivideByZero));
}

#[test]
fn inverse_of_fifteen_mod_twentysix() {
    let inverse = num(15).mod_inverse(&num(26)).unwrap();
    assert_eq!(inverse, num(7));

    let product = num(15).mul(&inverse).modulus(&num(26)).unwrap();
    assert_eq!(product, num(1));
}

#[test]
fn inverse_multiplies_back_to_one() {
    let pairs = [
        (3i64, 7i64),
        (7, 26),
        (65537, 104729),
        (1234567, 7654321),
        (-15, 26),
    ];

    for (a, m) in pairs {
        let inverse = num(a).mod_inverse(&num(m)).unwrap();
        let product = num(a).mul(&inverse).modulus(&num(m)).unwrap();
        assert_eq!(product, num(1), "inv({a}, {m})");
    }
}

#[test]
fn inverse_of_wide_values() {
    let a = hex("10001");
    let m = hex("DEADBEEFCAFEBABE0123456789ABCDC1");

    let inverse = a.mod_inverse(&m).unwrap();
    assert_eq!(a.mul(&inverse).modulus(&m).unwrap(), BigNum::from(1u32));
}

#[test]
fn inverse_edge_cases() {
    // Unit modulus: everything is congruent to zero.
    assert_eq!(num(5).mod_inverse(&num(1)).unwrap(), num(0));
    assert_eq!(num(5).mod_inverse(&num(-1)).unwrap(), num(0));

    // The inverse of one is one.
    assert_eq!(num(1).mod_inverse(&num(26)).unwrap(), num(1));

    // Negative operands follow the modulus sign convention.
    assert_eq!(num(-1).mod_inverse(&num(26)).unwrap(), num(25));
    assert_eq!(num(15).mod_inverse(&num(-26)).unwrap(), num(-19));
}

#[test]
fn non_invertible_inputs_are_rejected() {
    assert_eq!(
        num(4).mod_inverse(&num(26)),
        Err(BigNumError::NotInvertible)
    );
    assert_eq!(num(0).mod_inverse(&num(26)), Err(BigNumError::NotInvertible));
    assert_eq!(num(5).mod_inverse(&num(0)), Err(BigNumError::NotInvertible));
    assert_eq!(
        num(26).mod_inverse(&num(26)),
        Err(BigNumError::NotInvertible)
    );
    assert_eq!(
        num(52).mod_inverse(&num(26)),
        Err(BigNumError::NotInvertible)
    );
}

#[test]
fn modular_exponentiation_scenarios() {
    assert_eq!(num(8).mod_pow(&num(5), &num(7)).unwrap(), num(1));
    assert_eq!(num(2).mod_pow(&num(10), &num(1000)).unwrap(), num(24));
    assert_eq!(num(7).mod_pow(&num(-1), &num(26)).unwrap(), num(15));
}

#[test]
fn modular_exponentiation_matches_direct_powers() {
    let cases = [(3i64, 4u32, 7i64), (10, 6, 37), (-2, 5, 9), (5, 0, 11)];

    for (base, exponent, modulus) in cases {
        let expected = num(base)
            .pow_u32(exponent)
            .modulus(&num(modulus))
            .unwrap();
        let actual = num(base)
            .mod_pow(&num(exponent as i64), &num(modulus))
            .unwrap();
        assert_eq!(actual, expected, "{base}^{exponent} mod {modulus}");
    }
}

#[test]
fn negative_exponents_invert_the_base() {
    // 3^-2 mod 7 = (3^-1)^2 mod 7 = 5^2 mod 7 = 4.
    assert_eq!(num(3).mod_pow(&num(-2), &num(7)).unwrap(), num(4));

    // A non-invertible base cannot carry a negative exponent.
    assert_eq!(
        num(4).mod_pow(&num(-2), &num(26)),
        Err(BigNumError::NotInvertible)
    );
}

#[test]
fn exponentiation_edge_cases() {
    // Zero modulus is invalid regardless of the other operands.
    assert_eq!(num(3).mod_pow(&num(5), &num(0)), Err(BigNumError::ZeroModulus));
    assert_eq!(num(3).mod_pow(&num(0), &num(0)), Err(BigNumError::ZeroModulus));

    // Unit modulus collapses everything to zero.
    assert_eq!(num(3).mod_pow(&num(5), &num(1)).unwrap(), num(0));
    assert_eq!(num(3).mod_pow(&num(5), &num(-1)).unwrap(), num(0));

    // Zero base.
    assert_eq!(num(0).mod_pow(&num(5), &num(7)).unwrap(), num(0));
    assert_eq!(num(0).mod_pow(&num(0), &num(7)).unwrap(), num(1));
    assert_eq!(
        num(0).mod_pow(&num(-1), &num(7)),
        Err(BigNumError::NotInvertible)
    );

    // x^0 is the unit of the residue range, also under a negative modulus.
    assert_eq!(num(3).mod_pow(&num(0), &num(7)).unwrap(), num(1));
    assert_eq!(num(3).mod_pow(&num(0), &num(-7)).unwrap(), num(-6));
    assert_eq!(num(0).mod_pow(&num(0), &num(-7)).unwrap(), num(-6));
}

#[test]
fn negative_modulus_exponentiation_keeps_the_convention() {
    let result = num(2).mod_pow(&num(3), &num(-5)).unwrap();
    assert_eq!(result, num(-2));
}

#[test]
fn wide_exponentiation_round_trip() {
    // Fermat: a^(p-1) ≡ 1 mod p for prime p and coprime a.
    let p = hex("FFFFFFFFFFFFFFC5"); // 2^64 - 59, prime
    let one = BigNum::from(1u32);
    let exponent = p.sub(&one);

    let a = hex("123456789ABCDEF");
    assert_eq!(a.mod_pow(&exponent, &p).unwrap(), one);
}

#[test]
fn gcd_scenarios() {
    assert_eq!(num(1071).gcd(&num(462)), num(21));
    assert_eq!(num(462).gcd(&num(1071)), num(21));

    assert_eq!(num(0).gcd(&num(0)), num(0));
    assert_eq!(num(0).gcd(&num(5)), num(5));
    assert_eq!(num(5).gcd(&num(0)), num(5));
    assert_eq!(num(13).gcd(&num(13)), num(13));
    assert_eq!(num(8).gcd(&num(4)), num(4));

    // The result is positive regardless of the operand signs.
    assert_eq!(num(-4).gcd(&num(6)), num(2));
    assert_eq!(num(-4).gcd(&num(-6)), num(2));
}

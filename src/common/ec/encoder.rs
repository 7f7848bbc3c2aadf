use super::galois::G;

// Polynomial arithmetic
//------------------------------------------------------------------------------

// Coefficients are ordered from the highest degree term down
pub fn poly_multiply(a: &[G], b: &[G]) -> Vec<G> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut res = vec![G::ZERO; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            res[i + j] += x * y;
        }
    }
    res
}

// Product of (x - a^j) for j in 0..degree
pub fn generator_polynomial(degree: usize) -> Vec<G> {
    debug_assert!(degree >= 1, "Generator polynomial needs a degree of at least 1");

    let mut gen_poly = vec![G::ONE, G::ONE];
    for j in 1..degree {
        gen_poly = poly_multiply(&gen_poly, &[G::ONE, G::gen_pow(j)]);
    }
    gen_poly
}

#[cfg(test)]
mod poly_tests {
    use super::{generator_polynomial, poly_multiply, G};

    fn to_g(v: &[u8]) -> Vec<G> {
        v.iter().map(|&b| G(b)).collect()
    }

    #[test]
    fn test_poly_multiply() {
        let res = poly_multiply(&to_g(&[1, 1]), &to_g(&[1, 2]));
        assert_eq!(res, to_g(&[1, 3, 2]));
        assert!(poly_multiply(&[], &to_g(&[1])).is_empty());
    }

    #[test]
    fn test_generator_polynomial() {
        assert_eq!(generator_polynomial(1), to_g(&[1, 1]));
        assert_eq!(generator_polynomial(2), to_g(&[1, 3, 2]));

        // alpha exponents 0, 251, 67, 46, 61, 118, 70, 64, 94, 32, 45
        let exp = [0, 251, 67, 46, 61, 118, 70, 64, 94, 32, 45].map(G::gen_pow);
        assert_eq!(generator_polynomial(10), exp);
    }

    #[test]
    fn test_generator_roots() {
        for degree in [7, 10, 13, 17, 30] {
            let gen_poly = generator_polynomial(degree);
            assert_eq!(gen_poly.len(), degree + 1);
            for j in 0..degree {
                let root = G::gen_pow(j);
                let eval = gen_poly.iter().fold(G::ZERO, |acc, &c| acc * root + c);
                assert_eq!(eval, G::ZERO, "Degree {degree}, root {j}");
            }
        }
    }
}

// Error correction codewords
//------------------------------------------------------------------------------

pub fn ecc(block: &[u8], ecc_count: usize) -> Vec<u8> {
    ecc_with_generator(block, &generator_polynomial(ecc_count))
}

// Performs polynomial long division with data polynomial(num)
// and generator polynomial(den) to compute remainder polynomial,
// the coefficients of which are the ecc
pub fn ecc_with_generator(block: &[u8], gen_poly: &[G]) -> Vec<u8> {
    let ecc_count = gen_poly.len() - 1;
    let mut res = block.iter().map(|&b| G(b)).collect::<Vec<_>>();
    res.resize(block.len() + ecc_count, G::ZERO);

    for i in 0..=res.len() - gen_poly.len() {
        let lead_coeff = res[i];
        if lead_coeff == G::ZERO {
            continue;
        }
        for (u, &v) in res[i..].iter_mut().zip(gen_poly.iter()) {
            *u += v * lead_coeff;
        }
    }

    res[block.len()..].iter().map(|&g| g.0).collect()
}

#[cfg(test)]
mod ec_tests {
    use proptest::prelude::*;

    use super::ecc;

    #[test]
    fn test_poly_mod_known_vector() {
        let data = [32, 91, 11, 241, 209, 114, 220, 38, 161, 160, 236];
        let exp = [220, 117, 193, 108, 198, 216, 11, 4, 232, 173, 99, 128, 138, 2, 14];
        assert_eq!(ecc(&data, 15), exp);
    }

    #[test]
    fn test_poly_mod_1() {
        let res = ecc(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", 10);
        assert_eq!(&*res, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_poly_mod_2() {
        let res = ecc(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", 13);
        assert_eq!(&*res, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10");
    }

    #[test]
    fn test_poly_mod_3() {
        let res = ecc(b"CUF\x86W&U\xc2w2\x06\x12\x06g&", 18);
        assert_eq!(&*res, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'");
    }

    #[test]
    fn test_zero_data() {
        assert_eq!(ecc(&[0, 0, 0], 2), [0, 0]);
    }

    proptest! {
        #[test]
        fn proptest_zero_data(k in 1usize..200, r in 1usize..=30) {
            prop_assert_eq!(ecc(&vec![0; k], r), vec![0; r]);
        }
    }
}

//! Politiques numériques (stratégie choisie à la construction).
//!
//! Le cœur (jetons -> RPN -> pile de valeurs) est le même pour toutes ;
//! seules les primitives arithmétiques et leurs garde-fous changent :
//! - `Flottant`  : f64, ±∞ / NaN sont des valeurs légales (défaut)
//! - `Entier`    : i64, chaque primitive vérifiée (Overflow), `/` tronque
//! - `Rationnel` : BigRational exact, `^` à exposant entier seulement

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{checked_pow, One, Signed, ToPrimitive, Zero};

use super::erreur::ErreurEval;
use super::format::{format_flottant, format_rationnel, Affichage};

/// Garde-fou `Rationnel` : taille estimée (en bits) au-delà de laquelle `^` refuse.
const BITS_PUISSANCE_MAX: u64 = 1 << 16;

pub trait Politique {
    type Nombre: Clone + std::fmt::Debug;

    /// Texte décimal (éventuellement signé) -> nombre.
    fn parse(texte: &str) -> Result<Self::Nombre, ErreurEval>;

    fn add(a: Self::Nombre, b: Self::Nombre) -> Result<Self::Nombre, ErreurEval>;
    fn sub(a: Self::Nombre, b: Self::Nombre) -> Result<Self::Nombre, ErreurEval>;
    fn mul(a: Self::Nombre, b: Self::Nombre) -> Result<Self::Nombre, ErreurEval>;
    fn div(a: Self::Nombre, b: Self::Nombre) -> Result<Self::Nombre, ErreurEval>;
    fn pow(a: Self::Nombre, b: Self::Nombre) -> Result<Self::Nombre, ErreurEval>;

    fn formater(n: &Self::Nombre) -> Affichage;
}

/* ------------------------ Flottant (défaut) ------------------------ */

#[derive(Clone, Copy, Debug, Default)]
pub struct Flottant;

impl Politique for Flottant {
    type Nombre = f64;

    fn parse(texte: &str) -> Result<f64, ErreurEval> {
        texte
            .parse::<f64>()
            .map_err(|_| ErreurEval::MalformedNumber(texte.to_string()))
    }

    fn add(a: f64, b: f64) -> Result<f64, ErreurEval> {
        Ok(a + b)
    }

    fn sub(a: f64, b: f64) -> Result<f64, ErreurEval> {
        Ok(a - b)
    }

    fn mul(a: f64, b: f64) -> Result<f64, ErreurEval> {
        Ok(a * b)
    }

    // 5/0 => +∞ : le formateur s’en charge.
    fn div(a: f64, b: f64) -> Result<f64, ErreurEval> {
        Ok(a / b)
    }

    fn pow(a: f64, b: f64) -> Result<f64, ErreurEval> {
        Ok(a.powf(b))
    }

    fn formater(n: &f64) -> Affichage {
        format_flottant(*n)
    }
}

/* ------------------------ Entier (i64 vérifié) ------------------------ */

#[derive(Clone, Copy, Debug, Default)]
pub struct Entier;

impl Politique for Entier {
    type Nombre = i64;

    fn parse(texte: &str) -> Result<i64, ErreurEval> {
        use std::num::IntErrorKind;

        texte.parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ErreurEval::Overflow,
            _ => ErreurEval::MalformedNumber(texte.to_string()),
        })
    }

    fn add(a: i64, b: i64) -> Result<i64, ErreurEval> {
        a.checked_add(b).ok_or(ErreurEval::Overflow)
    }

    fn sub(a: i64, b: i64) -> Result<i64, ErreurEval> {
        a.checked_sub(b).ok_or(ErreurEval::Overflow)
    }

    fn mul(a: i64, b: i64) -> Result<i64, ErreurEval> {
        a.checked_mul(b).ok_or(ErreurEval::Overflow)
    }

    /// Tronque vers zéro. i64::MIN / -1 => Overflow.
    fn div(a: i64, b: i64) -> Result<i64, ErreurEval> {
        if b == 0 {
            return Err(ErreurEval::DivisionByZero);
        }
        a.checked_div(b).ok_or(ErreurEval::Overflow)
    }

    /// Base et exposant positifs ou nuls seulement.
    fn pow(a: i64, b: i64) -> Result<i64, ErreurEval> {
        if a < 0 {
            return Err(ErreurEval::UnsupportedOperation("base négative"));
        }
        if b < 0 {
            return Err(ErreurEval::UnsupportedOperation("exposant négatif"));
        }
        let exp = usize::try_from(b).map_err(|_| ErreurEval::Overflow)?;
        checked_pow(a, exp).ok_or(ErreurEval::Overflow)
    }

    fn formater(n: &i64) -> Affichage {
        Affichage::Valeur(n.to_string())
    }
}

/* ------------------------ Rationnel (exact) ------------------------ */

#[derive(Clone, Copy, Debug, Default)]
pub struct Rationnel;

impl Politique for Rationnel {
    type Nombre = BigRational;

    /// "-12.34" => -1234/100, exact.
    fn parse(texte: &str) -> Result<BigRational, ErreurEval> {
        let invalide = || ErreurEval::MalformedNumber(texte.to_string());

        let (neg, corps) = match texte.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, texte),
        };

        let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
        if (ent.is_empty() && frac.is_empty()) || frac.contains('.') {
            return Err(invalide());
        }
        if !ent.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalide());
        }

        let chiffres = format!("{ent}{frac}");
        let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
        let d = BigInt::from(10).pow(frac.len() as u32);

        let r = BigRational::new(n, d);
        Ok(if neg { -r } else { r })
    }

    fn add(a: BigRational, b: BigRational) -> Result<BigRational, ErreurEval> {
        Ok(a + b)
    }

    fn sub(a: BigRational, b: BigRational) -> Result<BigRational, ErreurEval> {
        Ok(a - b)
    }

    fn mul(a: BigRational, b: BigRational) -> Result<BigRational, ErreurEval> {
        Ok(a * b)
    }

    fn div(a: BigRational, b: BigRational) -> Result<BigRational, ErreurEval> {
        if b.is_zero() {
            return Err(ErreurEval::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Exposant entier seulement ; négatif => inverse ; 0^-n => division par zéro.
    fn pow(a: BigRational, b: BigRational) -> Result<BigRational, ErreurEval> {
        if !b.is_integer() {
            return Err(ErreurEval::UnsupportedOperation("exposant non entier"));
        }

        // bases triviales : pas de garde-fou de taille
        if a.is_zero() {
            return if b.is_negative() {
                Err(ErreurEval::DivisionByZero)
            } else if b.is_zero() {
                Ok(BigRational::one())
            } else {
                Ok(BigRational::zero())
            };
        }
        if a.abs().is_one() {
            // ±1 : le signe dépend seulement de la parité de l’exposant
            let impair = !(b.to_integer() % BigInt::from(2)).is_zero();
            return Ok(if a.is_negative() && impair { a } else { BigRational::one() });
        }

        let exp = b.to_integer().to_i64().ok_or(ErreurEval::Overflow)?;

        let bits = a.numer().bits().max(a.denom().bits());
        if bits.saturating_mul(exp.unsigned_abs()) > BITS_PUISSANCE_MAX {
            return Err(ErreurEval::Overflow);
        }

        Ok(rational_pow_int(a, exp))
    }

    fn formater(n: &BigRational) -> Affichage {
        format_rationnel(n)
    }
}

/// Exponentiation rapide (carré-multiplie). `exp` > i64::MIN (borné par l’appelant).
fn rational_pow_int(base: BigRational, exp: i64) -> BigRational {
    if exp < 0 {
        return BigRational::one() / rational_pow_int(base, -exp);
    }

    let mut e = exp as u64;
    let mut acc = BigRational::one();
    let mut b = base;

    while e > 0 {
        if (e & 1) == 1 {
            acc *= b.clone();
        }
        e >>= 1;
        if e > 0 {
            b *= b.clone();
        }
    }
    acc
}

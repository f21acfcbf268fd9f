// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::erreur::ErreurEval;

/// Nombre de décimales affichées pour un résultat non entier.
pub const CHIFFRES_DECIMAUX: usize = 10;

/// Ce que l’appelant affiche : une valeur, un message d’erreur, ou rien.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Affichage {
    Valeur(String),
    Erreur(String),
    Vide,
}

impl Affichage {
    pub fn texte(&self) -> &str {
        match self {
            Affichage::Valeur(s) | Affichage::Erreur(s) => s,
            Affichage::Vide => "",
        }
    }

    pub fn est_erreur(&self) -> bool {
        matches!(self, Affichage::Erreur(_))
    }
}

/// Message court destiné à l’utilisateur.
pub fn message_erreur(e: &ErreurEval) -> &'static str {
    match e {
        ErreurEval::EmptyExpression => "",
        ErreurEval::Overflow => "Trop grand pour être calculé",
        ErreurEval::DivisionByZero => "Division par zéro",
        ErreurEval::MismatchedParentheses => "Parenthèses non équilibrées",
        _ => "Erreur",
    }
}

/// Échec -> Affichage (le no-op reste vide, pas de bandeau d’erreur).
pub fn format_erreur(e: &ErreurEval) -> Affichage {
    if e.is_benign() {
        Affichage::Vide
    } else {
        Affichage::Erreur(message_erreur(e).to_string())
    }
}

/* ------------------------ Flottant ------------------------ */

/// Entier exact => sans point ; sinon décimales (tronquées à l’affichage,
/// zéros finaux retirés). ±∞ / NaN => message d’erreur.
pub fn format_flottant(v: f64) -> Affichage {
    if v.is_nan() {
        return Affichage::Erreur("Indéfini".to_string());
    }
    if v.is_infinite() {
        let s = if v.is_sign_positive() { "Infini" } else { "-Infini" };
        return Affichage::Erreur(s.to_string());
    }

    if v.fract() == 0.0 {
        return Affichage::Valeur(sans_moins_zero(format!("{v}")));
    }

    let s = format!("{v:.prec$}", prec = CHIFFRES_DECIMAUX);
    Affichage::Valeur(sans_moins_zero(retire_zeros_finaux(&s)))
}

/* ------------------------ Rationnel ------------------------ */

/// Entier => sans point ; sinon développement décimal tronqué.
pub fn format_rationnel(r: &BigRational) -> Affichage {
    if r.is_integer() {
        return Affichage::Valeur(r.to_integer().to_string());
    }

    let scaled = (r.numer() * pow10(CHIFFRES_DECIMAUX)) / r.denom();
    let s = scaled_to_decimal(scaled, CHIFFRES_DECIMAUX);
    Affichage::Valeur(sans_moins_zero(retire_zeros_finaux(&s)))
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    let scaled = scaled.abs();

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let frac = format!("{:0>digits$}", frac_part.to_str_radix(10));
    let signe = if neg { "-" } else { "" };
    format!("{signe}{int_part}.{frac}")
}

/* ------------------------ Helpers texte ------------------------ */

fn retire_zeros_finaux(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn sans_moins_zero(s: String) -> String {
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

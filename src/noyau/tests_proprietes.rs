//! Propriétés attendues de l’évaluateur (une par test, cas fixes).
//! La version “générée” de ces propriétés vit dans tests_fuzz_safe.rs.

use super::erreur::ErreurEval;
use super::eval::{evaluate, format_resultat, Mode, Valeur};

fn aff(mode: Mode, s: &str) -> String {
    format_resultat(&mode.evaluer(s)).texte().to_string()
}

const MODES: [Mode; 3] = [Mode::Flottant, Mode::Entier, Mode::Rationnel];

#[test]
fn precedence_et_parentheses() {
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
    assert_eq!(Mode::Entier.evaluer("2+3*4"), Ok(Valeur::Entier(14)));
    assert_eq!(Mode::Entier.evaluer("(2+3)*4"), Ok(Valeur::Entier(20)));
}

#[test]
fn gauche_a_droite_pour_moins_et_division() {
    assert_eq!(evaluate("8-3-2"), Ok(3.0));
    assert_eq!(evaluate("64/8/2"), Ok(4.0));
}

#[test]
fn puissance_associative_a_droite() {
    assert_eq!(evaluate("2^3^2"), Ok(512.0));
    assert_eq!(evaluate("(2^3)^2"), Ok(64.0));
    assert_eq!(aff(Mode::Entier, "2^3^2"), "512");
}

#[test]
fn moins_unaire() {
    assert_eq!(evaluate("-5+3"), Ok(-2.0));
    assert_eq!(evaluate("3*-2"), Ok(-6.0));
    assert_eq!(evaluate("2--3"), Ok(5.0));
    assert_eq!(evaluate("(-2)*(-.5)"), Ok(1.0));
    // '-' devant '(' reste binaire : pas d’opérande gauche
    assert_eq!(evaluate("-(2+3)"), Err(ErreurEval::InsufficientOperands));
}

#[test]
fn sans_operateur_no_op() {
    for mode in MODES {
        assert_eq!(mode.evaluer("42"), Err(ErreurEval::EmptyExpression));
        assert_eq!(aff(mode, "42"), "");
        assert_eq!(aff(mode, ""), "");
        assert_eq!(aff(mode, "(7)"), "");
    }
}

#[test]
fn parentheses_equilibrees_ou_non() {
    for s in ["((1+2))*3", "(1)+(2)", "((((4))))-1"] {
        assert!(evaluate(s).is_ok(), "{s:?}");
    }
    for s in ["(1+2", "1+2)", ")1+2(", "(1+2))*(3", "((1)+2"] {
        assert_eq!(evaluate(s), Err(ErreurEval::MismatchedParentheses), "{s:?}");
    }
    assert_eq!(aff(Mode::Flottant, "(1+2"), "Parenthèses non équilibrées");
}

#[test]
fn operandes_manquants_ou_en_trop() {
    assert_eq!(evaluate("+"), Err(ErreurEval::InsufficientOperands));
    assert_eq!(evaluate("1+"), Err(ErreurEval::InsufficientOperands));
    assert_eq!(evaluate("1**2"), Err(ErreurEval::InsufficientOperands));
    assert_eq!(evaluate("2(3)+1"), Err(ErreurEval::TrailingOperands));
    assert_eq!(aff(Mode::Flottant, "1+"), "Erreur");
}

#[test]
fn nombre_malforme() {
    assert_eq!(
        evaluate("1.2.3+1"),
        Err(ErreurEval::MalformedNumber("1.2.3".into()))
    );
    assert_eq!(evaluate(".+1"), Err(ErreurEval::MalformedNumber(".".into())));
}

#[test]
fn division_par_zero_selon_politique() {
    assert_eq!(Mode::Entier.evaluer("5/0"), Err(ErreurEval::DivisionByZero));
    assert_eq!(Mode::Rationnel.evaluer("5/(2-2)"), Err(ErreurEval::DivisionByZero));

    // flottant : valeur infinie, affichée comme une erreur
    assert_eq!(evaluate("5/0"), Ok(f64::INFINITY));
    let a = format_resultat(&Mode::Flottant.evaluer("5/0"));
    assert!(a.est_erreur());
    assert_eq!(a.texte(), "Infini");
}

#[test]
fn entier_debordement_signale() {
    assert_eq!(
        Mode::Entier.evaluer("9223372036854775807+1"),
        Err(ErreurEval::Overflow)
    );
    assert_eq!(Mode::Entier.evaluer("10^19"), Err(ErreurEval::Overflow));
    assert_eq!(
        Mode::Entier.evaluer("3037000500*3037000500"),
        Err(ErreurEval::Overflow)
    );
    // multiplications répétées
    let produit = vec!["1000"; 7].join("*");
    assert_eq!(Mode::Entier.evaluer(&produit), Err(ErreurEval::Overflow));
    assert_eq!(aff(Mode::Entier, "2^64"), "Trop grand pour être calculé");
    assert_eq!(aff(Mode::Entier, "2^62"), "4611686018427387904");
}

#[test]
fn resultats_fractionnaires() {
    assert_eq!(aff(Mode::Flottant, "1/4"), "0.25");
    assert_eq!(aff(Mode::Flottant, "10/4"), "2.5");
    assert_eq!(aff(Mode::Rationnel, "10/4"), "2.5");
    assert_eq!(aff(Mode::Entier, "10/4"), "2");
    assert_eq!(aff(Mode::Flottant, "6/3"), "2");
}

#[test]
fn idempotence() {
    for s in ["2+3*4", "5/0", "(1+2", "2^3^2", "42", "1.2.3+1", "2^64"] {
        for mode in MODES {
            assert_eq!(mode.evaluer(s), mode.evaluer(s), "mode={mode} s={s:?}");
        }
    }
}

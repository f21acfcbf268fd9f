// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis l’évaluer avec une pile de valeurs, selon une politique numérique
//
// Règles:
// - ^ associatif à droite (2^3^2 = 2^(3^2)), les autres à gauche
// - piles explicites partout : mémoire O(longueur), pas de récursion

use super::erreur::ErreurEval;
use super::jetons::{Operateur, Tok};
use super::politique::Politique;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(+), Num(3), Op(*), Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurEval::MismatchedParentheses),
                    }
                }
            }

            Tok::Op(op) => {
                // dépile tant que la précédence/associativité l’exige ; '(' bloque
                while let Some(Tok::Op(top)) = ops.last() {
                    if !doit_depiler(*top, op) {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }
                ops.push(Tok::Op(op));
            }
        }
    }

    // vide la pile ops
    while let Some(t) = ops.pop() {
        if matches!(t, Tok::LPar | Tok::RPar) {
            return Err(ErreurEval::MismatchedParentheses);
        }
        out.push(t);
    }

    Ok(out)
}

/// `top` sort avant `entrant` ? (>= à gauche, > strict à droite)
fn doit_depiler(top: Operateur, entrant: Operateur) -> bool {
    if entrant.is_right_associative() {
        top.precedence() > entrant.precedence()
    } else {
        top.precedence() >= entrant.precedence()
    }
}

/// Évalue une RPN : pile de valeurs, `b` dépilé puis `a`, résultat `a OP b`.
/// Exactement une valeur doit rester à la fin.
pub fn eval_rpn<P: Politique>(rpn: &[Tok]) -> Result<P::Nombre, ErreurEval> {
    let mut st: Vec<P::Nombre> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(texte) => st.push(P::parse(texte)?),

            Tok::Op(op) => {
                let b = st.pop().ok_or(ErreurEval::InsufficientOperands)?;
                let a = st.pop().ok_or(ErreurEval::InsufficientOperands)?;
                st.push(applique::<P>(*op, a, b)?);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::MismatchedParentheses),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        (Some(_), false) => Err(ErreurEval::TrailingOperands),
        (None, _) => Err(ErreurEval::InsufficientOperands),
    }
}

pub(crate) fn applique<P: Politique>(
    op: Operateur,
    a: P::Nombre,
    b: P::Nombre,
) -> Result<P::Nombre, ErreurEval> {
    match op {
        Operateur::Plus => P::add(a, b),
        Operateur::Minus => P::sub(a, b),
        Operateur::Star => P::mul(a, b),
        Operateur::Slash => P::div(a, b),
        Operateur::Caret => P::pow(a, b),
    }
}

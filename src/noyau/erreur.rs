// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Une valeur, pas une exception : le cas “rien à calculer” est une variante
// comme les autres, on ne compare jamais des messages.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Aucun opérateur dans l’entrée : rien à calculer (no-op bénin).
    #[error("rien à calculer")]
    EmptyExpression,

    #[error("parenthèses non équilibrées")]
    MismatchedParentheses,

    /// Opérateur rencontré avec moins de deux valeurs sur la pile.
    #[error("opérandes insuffisants")]
    InsufficientOperands,

    /// Plus d’une valeur restante en fin de RPN (ex: "2(3)+1").
    #[error("opérandes en trop")]
    TrailingOperands,

    #[error("nombre invalide: '{0}'")]
    MalformedNumber(String),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("dépassement de capacité")]
    Overflow,

    #[error("opération non supportée: {0}")]
    UnsupportedOperation(&'static str),
}

impl ErreurEval {
    /// Vrai seulement pour le no-op (affiché vide, pas en erreur).
    pub fn is_benign(&self) -> bool {
        matches!(self, ErreurEval::EmptyExpression)
    }
}

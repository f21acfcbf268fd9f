//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - filtre.rs    : caractères autorisés (0-9 . + - * / ^ ( ))
//! - jetons.rs    : tokenisation (moins unaire collé au nombre)
//! - rpn.rs       : shunting-yard + évaluation de la RPN
//! - politique.rs : primitives numériques (flottant / entier / rationnel)
//! - format.rs    : affichage du résultat ou de l’erreur
//! - erreur.rs    : taxonomie des erreurs
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod filtre;
pub mod format;
pub mod jetons;
pub mod politique;
pub mod rpn;


#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluate, format_resultat, Demarche, Evaluateur, Mode, Valeur};
pub use format::Affichage;

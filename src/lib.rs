//! Calculatrice postfixe : évaluateur d’expressions arithmétiques
//! (filtre -> jetons -> shunting-yard -> RPN -> valeur -> texte).
//!
//! Le noyau est pur ; `app` porte l’état explicite d’un frontal.

pub mod app;
pub mod noyau;

pub use noyau::{evaluate, ErreurEval};

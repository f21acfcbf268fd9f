// src/app.rs
//
// Frontal : module App (racine)
// -----------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + console.rs)
// - Ré-exporter AppCalc (pour main.rs: use calculatrice_postfixe::app::AppCalc;)
//
// Le frontal est le seul à journaliser : le noyau ne logge jamais.

pub mod console;
pub mod etat;

// Ré-export pratique
pub use console::executer_lignes;
pub use etat::AppCalc;

//! src/app/etat.rs
//!
//! État du frontal (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, démarche, mode)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing) : voir console.rs.
//! - Actions déterministes, sans effet de bord caché.
//! - Tout l’état vit ici : rien de global, le noyau reste une fonction pure.

use crate::noyau::{Affichage, Demarche, Mode};

/// Garde-fou : longueur max de l’entrée (saisie au clavier ou ligne lue).
pub const ENTREE_MAX: usize = 4096;

/// Affiché à la place d’un résultat quand une entrée dépasse `ENTREE_MAX`.
pub const MSG_ENTREE_TROP_LONGUE: &str = "Entrée trop longue";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur (déjà filtrée) ---
    pub entree: String,

    // --- sorties ---
    pub resultat: Affichage,
    pub demarche: Demarche,

    // --- paramètres ---
    pub mode: Mode,
    /// true : réévalue à chaque touche ; false : seulement sur demande.
    pub eval_auto: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: Affichage::Vide,
            demarche: Demarche::default(),
            mode: Mode::default(),
            eval_auto: true,
        }
    }
}

impl AppCalc {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats ; le mode est conservé).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
    }

    /// CLR : effacer résultat + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat = Affichage::Vide;
        self.demarche = Demarche::default();
    }

    /// Utilitaire : déposer un résultat complet (affichage + démarche).
    ///
    /// Choix UX : en cas d’erreur la démarche est gardée (elle montre
    /// jusqu’où le pipeline est allé).
    pub fn set_resultat(&mut self, resultat: Affichage, demarche: Demarche) {
        self.resultat = resultat;
        self.demarche = demarche;
    }
}

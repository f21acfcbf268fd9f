//! Noyau : évaluation (pipeline réel)
//!
//! filtre -> jetons -> RPN -> pile de valeurs -> nombre
//!
//! Pur : aucun état entre deux appels, aucune E/S, aucun journal.
//! Deux appels avec la même chaîne donnent le même résultat.

use std::fmt;
use std::marker::PhantomData;

use clap::ValueEnum;
use num_rational::BigRational;

use super::erreur::ErreurEval;
use super::filtre::filtrer;
use super::format::{format_erreur, Affichage};
use super::jetons::{format_tokens, tokenize};
use super::politique::{Entier, Flottant, Politique, Rationnel};
use super::rpn::{eval_rpn, to_rpn};

/// Trace lisible d’une évaluation (entrée filtrée, jetons, RPN).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub entree: String,
    pub jetons: String,
    pub rpn: String,
}

/// Évaluateur lié à une politique numérique (choisie à la construction).
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluateur<P: Politique> {
    _politique: PhantomData<P>,
}

impl<P: Politique> Evaluateur<P> {
    pub fn new() -> Self {
        Self {
            _politique: PhantomData,
        }
    }

    pub fn evaluer(&self, expression: &str) -> Result<P::Nombre, ErreurEval> {
        self.evaluer_avec_demarche(expression).0
    }

    /// Comme `evaluer`, avec la démarche remplie jusqu’à l’étape atteinte.
    pub fn evaluer_avec_demarche(
        &self,
        expression: &str,
    ) -> (Result<P::Nombre, ErreurEval>, Demarche) {
        let mut d = Demarche {
            entree: filtrer(expression),
            ..Demarche::default()
        };
        let res = Self::etapes(&mut d);
        (res, d)
    }

    fn etapes(d: &mut Demarche) -> Result<P::Nombre, ErreurEval> {
        let jetons = tokenize(&d.entree)?;
        d.jetons = format_tokens(&jetons);

        let rpn = to_rpn(&jetons)?;
        d.rpn = format_tokens(&rpn);

        eval_rpn::<P>(&rpn)
    }
}

/// API publique : évalue avec la politique par défaut (flottant).
pub fn evaluate(expression: &str) -> Result<f64, ErreurEval> {
    Evaluateur::<Flottant>::new().evaluer(expression)
}

/* ------------------------ Choix de politique à l’exécution ------------------------ */

/// Politique choisie à l’exécution (option `--mode` du frontal).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// f64, ±∞ et NaN affichés comme erreurs
    #[default]
    #[value(alias = "f64")]
    Flottant,
    /// i64 vérifié, `/` tronque
    #[value(alias = "i64")]
    Entier,
    /// fractions exactes
    #[value(alias = "exact")]
    Rationnel,
}

// Pour le journal seulement ; le nom affiché est celui de clap.
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(v) => f.write_str(v.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// Résultat “effacé” : le type du nombre dépend du mode.
#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Flottant(f64),
    Entier(i64),
    Rationnel(BigRational),
}

impl Valeur {
    pub fn formater(&self) -> Affichage {
        match self {
            Valeur::Flottant(v) => Flottant::formater(v),
            Valeur::Entier(v) => Entier::formater(v),
            Valeur::Rationnel(v) => Rationnel::formater(v),
        }
    }
}

impl Mode {
    pub fn evaluer(self, expression: &str) -> Result<Valeur, ErreurEval> {
        self.evaluer_avec_demarche(expression).0
    }

    pub fn evaluer_avec_demarche(
        self,
        expression: &str,
    ) -> (Result<Valeur, ErreurEval>, Demarche) {
        match self {
            Mode::Flottant => {
                let (r, d) = Evaluateur::<Flottant>::new().evaluer_avec_demarche(expression);
                (r.map(Valeur::Flottant), d)
            }
            Mode::Entier => {
                let (r, d) = Evaluateur::<Entier>::new().evaluer_avec_demarche(expression);
                (r.map(Valeur::Entier), d)
            }
            Mode::Rationnel => {
                let (r, d) = Evaluateur::<Rationnel>::new().evaluer_avec_demarche(expression);
                (r.map(Valeur::Rationnel), d)
            }
        }
    }
}

/// Résultat -> texte affichable.
pub fn format_resultat(res: &Result<Valeur, ErreurEval>) -> Affichage {
    match res {
        Ok(v) => v.formater(),
        Err(e) => format_erreur(e),
    }
}

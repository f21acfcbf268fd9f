// src/app/console.rs
//
// Vue terminal
// ------------
// Objectifs :
// - Même AppCalc (etat.rs) quel que soit le déclencheur
// - Touche par touche : filtre puis réévaluation (si eval_auto)
// - Ligne par ligne : une expression lue => un résultat écrit
//
// Note :
// - Le filtrage est fait ici (côté appelant) ; le noyau refiltre quand même.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use super::etat::{AppCalc, ENTREE_MAX, MSG_ENTREE_TROP_LONGUE};
use crate::noyau::filtre::{est_autorise, filtrer};
use crate::noyau::{format_resultat, Affichage, Demarche};

impl AppCalc {
    /// Une touche : ignorée si hors liste, sinon ajoutée (puis réévaluation).
    pub fn saisir(&mut self, c: char) {
        if !est_autorise(c) || self.entree.len() >= ENTREE_MAX {
            return;
        }
        self.entree.push(c);
        if self.eval_auto {
            self.evaluer();
        }
    }

    /// DEL : retire le dernier caractère.
    pub fn effacer(&mut self) {
        if self.entree.pop().is_some() && self.eval_auto {
            self.evaluer();
        }
    }

    /// Remplace l’entrée (collage, ligne lue) : filtrée.
    ///
    /// Jamais tronquée : au-delà de `ENTREE_MAX` l’entrée est vidée, le
    /// résultat devient une erreur et la fonction renvoie `false`.
    pub fn remplacer_entree(&mut self, brut: &str) -> bool {
        let s = filtrer(brut);
        if s.len() > ENTREE_MAX {
            warn!(longueur = s.len(), max = ENTREE_MAX, "entrée refusée");
            self.entree.clear();
            self.set_resultat(
                Affichage::Erreur(MSG_ENTREE_TROP_LONGUE.to_string()),
                Demarche::default(),
            );
            return false;
        }
        self.entree = s;
        true
    }

    /// Entrée complète (argument, ligne lue) : remplacée puis évaluée si acceptée.
    pub fn soumettre(&mut self, brut: &str) {
        if self.remplacer_entree(brut) {
            self.evaluer();
        }
    }

    /// “=” : évalue l’entrée courante et dépose le résultat dans l’état.
    pub fn evaluer(&mut self) {
        debug!(mode = %self.mode, entree = %self.entree, "évaluation");

        let (res, demarche) = self.mode.evaluer_avec_demarche(&self.entree);
        match &res {
            Ok(v) => debug!(valeur = ?v, rpn = %demarche.rpn, "résultat"),
            Err(e) if e.is_benign() => debug!("rien à calculer"),
            Err(e) => info!(erreur = %e, entree = %self.entree, "évaluation refusée"),
        }

        self.set_resultat(format_resultat(&res), demarche);
    }
}

/// Lit une expression par ligne, écrit un résultat par ligne.
/// Avec `demarche`, ajoute jetons et RPN sous chaque résultat.
pub fn executer_lignes<R: BufRead, W: Write>(
    app: &mut AppCalc,
    lecteur: R,
    mut sortie: W,
    demarche: bool,
) -> io::Result<()> {
    for ligne in lecteur.lines() {
        let ligne = ligne?;
        if ligne.trim().is_empty() {
            continue;
        }

        app.soumettre(&ligne);
        ecrire_resultat(app, &mut sortie, demarche)?;
    }
    sortie.flush()
}

pub fn ecrire_resultat<W: Write>(app: &AppCalc, sortie: &mut W, demarche: bool) -> io::Result<()> {
    writeln!(sortie, "{}", app.resultat.texte())?;
    if demarche {
        writeln!(sortie, "  jetons : {}", app.demarche.jetons)?;
        writeln!(sortie, "  rpn    : {}", app.demarche.rpn)?;
    }
    Ok(())
}

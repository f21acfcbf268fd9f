// src/noyau/filtre.rs
//
// Filtre d’entrée : ne garde que 0-9 . + - * / ^ ( )
// Aucun échec possible : un caractère hors liste est simplement ignoré
// (saisie interactive, caractère par caractère).

/// Opérateurs binaires reconnus.
pub const OPERATEURS: &str = "+-*/^";

/// Caractère accepté par le noyau ?
pub fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '(' || c == ')' || OPERATEURS.contains(c)
}

/// Filtre une chaîne brute (jamais d’erreur, éventuellement vide).
pub fn filtrer(brut: &str) -> String {
    brut.chars().filter(|&c| est_autorise(c)).collect()
}

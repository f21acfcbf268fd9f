// src/noyau/jetons.rs

use super::erreur::ErreurEval;
use super::filtre::OPERATEURS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Minus),
            '*' => Some(Operateur::Star),
            '/' => Some(Operateur::Slash),
            '^' => Some(Operateur::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Minus => '-',
            Operateur::Star => '*',
            Operateur::Slash => '/',
            Operateur::Caret => '^',
        }
    }

    /// + - : 1 ; * / : 2 ; ^ : 3
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Minus => 1,
            Operateur::Star | Operateur::Slash => 2,
            Operateur::Caret => 3,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, Operateur::Caret)
    }
}

/// Jeton. Les nombres restent du texte décimal : la politique numérique
/// ne les convertit qu’à l’évaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(String),
    Op(Operateur),
    LPar,
    RPar,
}

/// Tokenize une chaîne filtrée.
///
/// - suite de chiffres et de '.' => un seul Num (validé plus tard)
/// - moins “collé” au nombre : si '-' est en tête, ou suit un opérateur ou '(',
///   ET est suivi d’un chiffre ou d’un '.', il fait partie du littéral.
///   Sinon c’est le moins binaire. Ainsi "3*-2" => [3, *, -2] mais "-(2)"
///   garde un '-' binaire (sans opérande gauche).
/// - aucun opérateur dans l’entrée => EmptyExpression (rien à calculer)
/// - tout autre caractère est ignoré (l’entrée est censée être déjà filtrée)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    if !s.chars().any(|c| OPERATEURS.contains(c)) {
        return Err(ErreurEval::EmptyExpression);
    }

    let chars: Vec<char> = s.chars().collect();
    let mut out: Vec<Tok> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let debut_litteral = c.is_ascii_digit()
            || c == '.'
            || (c == '-' && moins_unaire(&out, chars.get(i + 1)));

        if debut_litteral {
            let start = i;
            if c == '-' {
                i += 1;
            }
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            _ => {
                if let Some(op) = Operateur::depuis_char(c) {
                    out.push(Tok::Op(op));
                }
            }
        }
        i += 1;
    }

    Ok(out)
}

/// '-' unaire : rien avant (ou opérateur / '(') et un chiffre ou '.' juste après.
fn moins_unaire(precedents: &[Tok], suivant: Option<&char>) -> bool {
    let contexte_ok = matches!(precedents.last(), None | Some(Tok::Op(_)) | Some(Tok::LPar));
    let suivi_nombre = matches!(suivant, Some(c) if c.is_ascii_digit() || *c == '.');
    contexte_ok && suivi_nombre
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

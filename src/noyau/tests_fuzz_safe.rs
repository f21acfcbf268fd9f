//! Tests fuzz safe : différentiel + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : évaluateur récursif de référence (même grammaire, autre algorithme)

use std::time::{Duration, Instant};

use super::erreur::ErreurEval;
use super::eval::Evaluateur;
use super::politique::{Entier, Flottant, Politique, Rationnel};
use super::reference::evaluer_reference;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng, decimaux: bool) -> String {
    let n = rng.pick(10);
    let texte = if decimaux && rng.pick(4) == 0 {
        format!("{n}.{}", rng.pick(10))
    } else {
        n.to_string()
    };

    // négatif : toujours en position “primaire” (après '(')
    if rng.pick(5) == 0 {
        format!("(-{texte})")
    } else {
        texte
    }
}

fn gen_op(rng: &mut Rng) -> char {
    match rng.pick(9) {
        0 | 1 => '+',
        2 | 3 => '-',
        4 | 5 => '*',
        6 | 7 => '/',
        _ => '^',
    }
}

fn gen_expr(rng: &mut Rng, depth: usize, decimaux: bool) -> String {
    if depth == 0 || rng.pick(4) == 0 {
        return gen_nombre(rng, decimaux);
    }
    gen_binaire(rng, depth, decimaux)
}

/// Toujours au moins un opérateur (sinon : no-op, pas de comparaison possible).
fn gen_binaire(rng: &mut Rng, depth: usize, decimaux: bool) -> String {
    let a = gen_expr(rng, depth - 1, decimaux);
    let b = gen_expr(rng, depth - 1, decimaux);
    let op = gen_op(rng);
    if rng.pick(3) == 0 {
        format!("({a}{op}{b})")
    } else {
        format!("{a}{op}{b}")
    }
}

/* ------------------------ Comparaison ------------------------ */

fn meme_flottant(a: &Result<f64, ErreurEval>, b: &Result<f64, ErreurEval>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => a == b,
    }
}

type Resultat<P> = Result<<P as Politique>::Nombre, ErreurEval>;

fn differentiel<P: Politique>(
    seed: u64,
    n: usize,
    decimaux: bool,
    egal: impl Fn(&Resultat<P>, &Resultat<P>) -> bool,
) {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let ev = Evaluateur::<P>::new();
    let mut rng = Rng::new(seed);

    for _ in 0..n {
        budget(t0, max);

        let expr = gen_binaire(&mut rng, 4, decimaux);
        let rpn = ev.evaluer(&expr);
        let oracle = evaluer_reference::<P>(&expr);

        assert!(
            egal(&rpn, &oracle),
            "divergence: expr={expr:?} rpn={rpn:?} oracle={oracle:?}"
        );
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_differentiel_flottant() {
    differentiel::<Flottant>(0xC0FFEE_u64, 300, true, meme_flottant);
}

#[test]
fn fuzz_safe_differentiel_entier() {
    differentiel::<Entier>(0xBADC0DE_u64, 300, false, |a, b| a == b);
}

#[test]
fn fuzz_safe_differentiel_rationnel() {
    differentiel::<Rationnel>(0x5EED_u64, 200, true, |a, b| a == b);
}

#[test]
fn fuzz_safe_flottant_toujours_un_succes() {
    // expressions bien formées + politique flottante => jamais d’erreur
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let ev = Evaluateur::<Flottant>::new();
    let mut rng = Rng::new(0xF10A7);

    for _ in 0..200 {
        budget(t0, max);
        let expr = gen_binaire(&mut rng, 5, true);
        if let Err(e) = ev.evaluer(&expr) {
            panic!("erreur inattendue: expr={expr:?} err={e}");
        }
    }
}

#[test]
fn fuzz_safe_parentheses_desequilibrees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let ev = Evaluateur::<Flottant>::new();
    let mut rng = Rng::new(0xA11CE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = format!("({})", gen_binaire(&mut rng, 3, false));
        assert!(
            ev.evaluer(&expr).is_ok(),
            "équilibrée mais refusée: {expr:?}"
        );

        // on casse l’équilibre : retrait d’une parenthèse au hasard, ou ajout en bout
        let positions: Vec<usize> = expr
            .char_indices()
            .filter(|(_, c)| *c == '(' || *c == ')')
            .map(|(i, _)| i)
            .collect();
        let casse = match rng.pick(3) {
            0 => format!("{expr})"),
            1 => format!("({expr}"),
            _ => {
                let i = positions[rng.pick(positions.len() as u32) as usize];
                let mut s = expr.clone();
                s.remove(i);
                s
            }
        };

        assert_eq!(
            ev.evaluer(&casse),
            Err(ErreurEval::MismatchedParentheses),
            "déséquilibrée mais acceptée: {casse:?}"
        );
    }
}

#[test]
fn fuzz_safe_longue_somme_sans_recursion() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["1"; 50_000].join("+");
    assert_eq!(Evaluateur::<Entier>::new().evaluer(&expr), Ok(50_000));

    let profond = format!("{}1+1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert_eq!(Evaluateur::<Flottant>::new().evaluer(&profond), Ok(2.0));

    budget(t0, max);
}

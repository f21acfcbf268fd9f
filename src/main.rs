// src/main.rs
//
// Calculatrice postfixe : point d’entrée terminal
// -----------------------------------------------
// - expressions en arguments : un résultat par expression
// - sinon : lit l’entrée standard, une expression par ligne
// - journal sur stderr (RUST_LOG prioritaire, sinon -v => debug)

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculatrice_postfixe::app::console::ecrire_resultat;
use calculatrice_postfixe::app::{executer_lignes, AppCalc};
use calculatrice_postfixe::noyau::Mode;

#[derive(Parser, Debug)]
#[command(name = "calculatrice")]
#[command(about = "Évalue des expressions arithmétiques (+ - * / ^ et parenthèses)", long_about = None)]
struct Cli {
    /// Expressions à évaluer (lit l’entrée standard si absent)
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,

    /// Politique numérique : flottant, entier ou rationnel
    #[arg(short, long, env = "CALC_MODE", value_enum, default_value_t = Mode::Flottant)]
    mode: Mode,

    /// Affiche les jetons et la RPN sous chaque résultat
    #[arg(short, long)]
    demarche: bool,

    /// Journal détaillé sur stderr
    #[arg(short, long)]
    verbose: bool,
}

fn installer_journal(verbose: bool) {
    let defaut = if verbose { "debug" } else { "warn" };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    installer_journal(cli.verbose);

    tracing::debug!(mode = %cli.mode, "démarrage");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Erreur: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut app = AppCalc::new(cli.mode);
    let stdout = io::stdout();
    let mut sortie = BufWriter::new(stdout.lock());

    if cli.expressions.is_empty() {
        let stdin = io::stdin();
        return executer_lignes(&mut app, stdin.lock(), sortie, cli.demarche);
    }

    for expr in &cli.expressions {
        app.soumettre(expr);
        ecrire_resultat(&app, &mut sortie, cli.demarche)?;
    }
    sortie.flush()
}

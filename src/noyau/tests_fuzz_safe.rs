//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - toute erreur doit avoir un genre connu (jamais de panique)
//! - invariant clé : même entrée + même mode => même sortie, bit pour bit

use std::time::{Duration, Instant};

use super::erreur::{ErreurCalcul, GenreErreur};
use super::evaluer;
use super::fonctions::ModeAngle;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurCalcul) -> bool {
    // Un fuzz d’expressions bien formées ne doit jamais tomber sur
    // une erreur de syntaxe, de fonction inconnue ou de garde-fou.
    matches!(
        e.genre(),
        GenreErreur::DivisionParZero | GenreErreur::Domaine | GenreErreur::Depassement
    )
}

fn meme_sortie(a: &Result<f64, ErreurCalcul>, b: &Result<f64, ErreurCalcul>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits(),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const FONCTIONS: [&str; 14] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "exp", "sqrt", "abs", "floor",
    "ceil", "round",
];

fn gen_nombre(rng: &mut Rng) -> String {
    // entiers 0..9 (zéro inclus : divisions par zéro), parfois décimaux
    let a = rng.pick(10);
    if rng.coin() {
        format!("{a}.{}", rng.pick(100))
    } else {
        format!("{a}")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0..=2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        5 => format!("-{}", gen_nombre(rng)),
        _ => format!("{}!", rng.pick(8)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(10) {
        0 => gen_atom(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        3 => format!(
            "({}*{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        4 => format!(
            "({}/{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        // exposant borné : atome seulement
        5 => format!("({})^{}", gen_expr(rng, depth - 1), gen_atom(rng)),
        // multiplication implicite ")("
        6 => format!("({})({})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        7 => format!("-({})", gen_expr(rng, depth - 1)),
        _ => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_genres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = if rng.coin() {
            ModeAngle::Degres
        } else {
            ModeAngle::Radians
        };

        let r1 = evaluer(&expr, mode);
        let r2 = evaluer(&expr, mode);
        assert!(meme_sortie(&r1, &r2), "non déterministe: expr={expr:?}");

        match r1 {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_ne_panique_pas() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // entrées arbitraires (pas forcément bien formées) : Ok ou Err, jamais de panique
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '^', '!', '(', ')', 's', 'i', 'n', 'p', 'e', 'π',
        '×', '÷', '√', ' ', '%', '#',
    ];

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let n = rng.pick(24) as usize;
        let expr: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        let r1 = evaluer(&expr, ModeAngle::Degres);
        let r2 = evaluer(&expr, ModeAngle::Degres);
        assert!(meme_sortie(&r1, &r2), "non déterministe: expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 500);
    budget(t0, max);

    let v = evaluer(&expr, ModeAngle::Degres).unwrap_or_else(|e| panic!("err: {e}"));

    // 500*(0.5) = 250
    assert_eq!(v, 250.0);
}
